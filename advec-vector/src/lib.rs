//! A contiguous growable vector built on explicit raw storage.
//!
//! [`Vector`] tracks how many slots of its [`RawStorage`] hold live values
//! and manages their lifetime by hand. Every operation that acquires new
//! storage either completes or leaves the vector exactly as it was, even if
//! an element constructor panics midway. Allocation failures are returned
//! as [`Error`] instead of aborting.

mod iter;
mod vector;

pub use advec_alloc::{Error, RawStorage, Result};
pub use iter::IntoIter;
pub use vector::Vector;
