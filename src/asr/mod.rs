pub mod cleanup;
pub mod recognizer;
pub mod transcode;

pub use cleanup::*;
pub use recognizer::*;
pub use transcode::*;
