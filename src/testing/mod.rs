mod fake_generation_client;
mod mock_clipboard;

pub use fake_generation_client::FakeGenerationClient;
pub use mock_clipboard::MockClipboard;
