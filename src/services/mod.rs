// Service exports
pub mod directory;
pub mod shelters;
pub mod textgen;

pub use directory::{DirectoryClient, DirectoryError};
pub use shelters::Shelter;
pub use textgen::{TextGenError, TextGenerator, WorkersAiClient};
