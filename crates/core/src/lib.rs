//! # Exercises Core
//!
//! Error and result types shared by the exercise crates.
//!
//! Every fallible operation returns [`Result<T>`]; nothing in the workspace
//! panics on bad input.

mod error;
mod result;

pub use error::Error;
pub use result::{Result, ResultExt};
