mod clipboard_writer;
mod generation_client;

pub use clipboard_writer::{ClipboardWriter, CopyStatus};
pub use generation_client::{ContentRequest, GenerationClient};
