//! Audio output adapters

mod file;
mod rodio;

pub use file::FileAudioSink;
pub use self::rodio::RodioPlayer;
