use std::alloc::{handle_alloc_error, Layout};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("capacity overflow({0})")]
    CapacityOverflow(usize),
    #[error("insufficient memory({size} bytes)")]
    InsufficientMemory { size: usize, align: usize },
}

impl Error {
    /// Diverges on an allocation failure that cannot be returned to caller,
    /// e.g. inside `Clone` or `Extend`.
    #[cold]
    pub fn raise(self) -> ! {
        match self {
            Error::CapacityOverflow(cap) => panic!("capacity overflow({})", cap),
            Error::InsufficientMemory { size, align } => match Layout::from_size_align(size, align) {
                Ok(layout) => handle_alloc_error(layout),
                Err(_) => panic!("insufficient memory({} bytes)", size),
            },
        }
    }
}
