//! # Ordered Sort
//!
//! Merges several individually sorted lists of small-range integers into one
//! sorted list with a counting sort.
//!
//! The counting array spans `min(first elements) ..= max(last elements)`, so
//! memory grows with the value range, not the element count.
//!
//! ```rust
//! let merged = ordered_sort::sort(&[vec![1, 3, 5], vec![2, 4, 6]])?;
//! assert_eq!(merged, vec![1, 2, 3, 4, 5, 6]);
//! # Ok::<(), exercises_core::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

mod config;
mod sorter;

pub use config::{DEFAULT_MAX_SPAN, SorterConfig, SorterConfigBuilder, TieOrder, Validation};
pub use exercises_core::{Error, Result};
pub use sorter::OrderedListSorter;

/// Merge `lists` with the default [`SorterConfig`].
///
/// # Errors
///
/// See [`OrderedListSorter::sort`].
pub fn sort<L: AsRef<[i32]>>(lists: &[L]) -> Result<Vec<i32>> {
    OrderedListSorter::default().sort(lists)
}
