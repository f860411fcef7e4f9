//! System adapters behind the application ports.

mod clipboard;
mod clock;
mod file_reader;

pub use clipboard::SystemClipboard;
pub use clock::SystemClock;
pub use file_reader::TokioFileReader;
