//! Counting-sort merge of pre-sorted lists.
//!
//! Variables:
//!   bias        : min over every list's first key
//!   upper_bound : max over every list's last key
//!   bucket      : Vec<usize> of length upper_bound - bias + 1
//!
//! Steps:
//!   count:   bucket[k - bias] += 1                       for every key k
//!   prefix:  bucket[i] += bucket[i - 1]                  bucket[i] = #keys <= bias + i
//!   place:   bucket[k - bias] -= 1,  out[bucket[k - bias]] = item

use exercises_core::{Error, Result};
use itertools::Itertools;
use tracing::{debug, warn};

use crate::config::{SorterConfig, TieOrder, Validation};

/// Merges individually sorted integer lists into one sorted list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderedListSorter {
    config: SorterConfig,
}

impl OrderedListSorter {
    /// Create a sorter with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sorter with an explicit configuration.
    #[must_use]
    pub const fn with_config(config: SorterConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &SorterConfig {
        &self.config
    }

    /// Merge `lists`, each sorted non-descending, into one sorted list.
    ///
    /// ```rust
    /// use ordered_sort::OrderedListSorter;
    ///
    /// let sorter = OrderedListSorter::new();
    /// assert_eq!(sorter.sort(&[vec![1, 1, 2], vec![1, 3]])?, vec![1, 1, 1, 2, 3]);
    /// assert_eq!(sorter.sort(&[[5]])?, vec![5]);
    /// # Ok::<(), ordered_sort::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// See [`OrderedListSorter::sort_by_key`].
    pub fn sort<L: AsRef<[i32]>>(&self, lists: &[L]) -> Result<Vec<i32>> {
        self.sort_by_key(lists, |value| *value)
    }

    /// Merge `lists` of records ordered by an integer `key`.
    ///
    /// With [`TieOrder::Reversed`] records sharing a key come out in reverse
    /// input order: lists are walked first to last, elements first to last,
    /// and each record takes the highest free position for its key.
    ///
    /// # Errors
    ///
    /// - [`Error::NoInput`] when `lists` is empty
    /// - [`Error::EmptyList`] when any list is empty
    /// - [`Error::UnsortedInput`] when a list is not sorted by key (strict mode)
    /// - [`Error::ValueOutOfRange`] when a key falls outside the first/last
    ///   bounds (trusting mode)
    /// - [`Error::SpanTooLarge`] when the key range exceeds `max_span`
    pub fn sort_by_key<T, L, K>(&self, lists: &[L], key: K) -> Result<Vec<T>>
    where
        T: Clone,
        L: AsRef<[T]>,
        K: Fn(&T) -> i32,
    {
        let lists: Vec<&[T]> = lists.iter().map(AsRef::as_ref).collect();
        self.check_input(&lists, &key)?;

        let bias = lists
            .iter()
            .filter_map(|list| list.first())
            .map(&key)
            .min()
            .ok_or(Error::NoInput)?;
        let upper_bound = lists
            .iter()
            .filter_map(|list| list.last())
            .map(&key)
            .max()
            .ok_or(Error::NoInput)?;

        let span = span_len(bias, upper_bound, self.config.max_span)?;
        let mut bucket = vec![0usize; span];
        let bounds = Bounds { bias, upper_bound };

        for (list_index, list) in lists.iter().enumerate() {
            for (position, item) in list.iter().enumerate() {
                let value = key(item);
                let count = bounds
                    .offset(value)
                    .and_then(|offset| bucket.get_mut(offset))
                    .ok_or_else(|| {
                        warn!(
                            list = list_index,
                            position,
                            value,
                            bias,
                            upper_bound,
                            "Key outside counted range"
                        );
                        Error::ValueOutOfRange {
                            list: list_index,
                            position,
                            value,
                            bias,
                            upper_bound,
                        }
                    })?;
                *count = count.checked_add(1).ok_or(Error::CountOverflow)?;
            }
        }

        let mut running = 0usize;
        for count in &mut bucket {
            running = running.checked_add(*count).ok_or(Error::CountOverflow)?;
            *count = running;
        }
        let total = bucket.last().copied().unwrap_or_default();

        debug!(
            lists = lists.len(),
            bias,
            upper_bound,
            span,
            total,
            tie_order = ?self.config.tie_order,
            "Counting sort merge"
        );

        let mut out: Vec<Option<T>> = std::iter::repeat_with(|| None).take(total).collect();
        let mut place = |item: &T| -> Result<()> {
            let value = key(item);
            let cursor = bounds
                .offset(value)
                .and_then(|offset| bucket.get_mut(offset))
                .ok_or(Error::PlacementFailed { key: value })?;
            *cursor = cursor
                .checked_sub(1)
                .ok_or(Error::PlacementFailed { key: value })?;
            let target = out
                .get_mut(*cursor)
                .ok_or(Error::PlacementFailed { key: value })?;
            *target = Some(item.clone());
            Ok(())
        };

        match self.config.tie_order {
            TieOrder::Reversed => lists
                .iter()
                .flat_map(|list| list.iter())
                .try_for_each(&mut place)?,
            TieOrder::Stable => lists
                .iter()
                .rev()
                .flat_map(|list| list.iter().rev())
                .try_for_each(&mut place)?,
        }

        out.into_iter()
            .collect::<Option<Vec<T>>>()
            .ok_or(Error::PlacementFailed { key: bias })
    }

    fn check_input<T, K>(&self, lists: &[&[T]], key: &K) -> Result<()>
    where
        K: Fn(&T) -> i32,
    {
        if lists.is_empty() {
            warn!("No input lists");
            return Err(Error::NoInput);
        }

        for (list_index, list) in lists.iter().enumerate() {
            if list.is_empty() {
                warn!(list = list_index, "Empty input list");
                return Err(Error::empty_list(list_index));
            }

            if self.config.validation == Validation::Strict {
                if let Some(position) = list
                    .iter()
                    .map(key)
                    .tuple_windows()
                    .position(|(previous, current)| previous > current)
                {
                    let position = position.saturating_add(1);
                    warn!(list = list_index, position, "Input list not sorted");
                    return Err(Error::unsorted_input(list_index, position));
                }
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
struct Bounds {
    bias: i32,
    upper_bound: i32,
}

impl Bounds {
    fn offset(self, value: i32) -> Option<usize> {
        if value < self.bias || value > self.upper_bound {
            return None;
        }
        usize::try_from(i64::from(value).checked_sub(i64::from(self.bias))?).ok()
    }
}

/// Length of the counting array, zero when the bounds are inverted.
fn span_len(bias: i32, upper_bound: i32, max_span: usize) -> Result<usize> {
    let span = i64::from(upper_bound)
        .checked_sub(i64::from(bias))
        .and_then(|diff| diff.checked_add(1))
        .and_then(|span| u64::try_from(span).ok())
        .unwrap_or_default();

    usize::try_from(span)
        .ok()
        .filter(|span| *span <= max_span)
        .ok_or_else(|| {
            warn!(span, max_span, "Counting span too large");
            Error::span_too_large(span, max_span)
        })
}
