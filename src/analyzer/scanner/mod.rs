pub mod directory_loader;
pub mod module;

pub use directory_loader::DirectoryLoader;
pub use module::{parse_module, read_module};
