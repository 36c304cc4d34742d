pub mod error;
pub mod raw;

pub use error::{Error, Result};
pub use raw::RawStorage;
