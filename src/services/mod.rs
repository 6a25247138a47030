mod clipboard_arboard;
mod gemini_client_http;
mod generator;

pub use clipboard_arboard::ArboardClipboard;
pub use gemini_client_http::HttpGeminiClient;
pub use generator::Generator;
