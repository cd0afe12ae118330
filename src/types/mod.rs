pub mod error;
pub mod model;

pub use error::{GoscopeError, Result, ResultExt};
pub use model::{Directory, DirectoryMap, Field, File, Import, Method, Package, Struct};
