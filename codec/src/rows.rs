//! FILENAME: codec/src/rows.rs
//! Row generator - odometer enumeration of category combinations.
//!
//! Enumerates every combination of one category per dimension in row-major
//! order: dimension 0 is outermost (slowest), the last dimension innermost
//! (fastest). This is the same order the flat value array is laid out in,
//! so row i pairs with value i. The iterator is a pure function of its
//! inputs and restartable by calling `generate_rows` again; it uses explicit
//! counters rather than recursion, so documents with dozens of dimensions
//! enumerate without any depth limit.

use smallvec::SmallVec;

use crate::dimension::Category;

/// Per-dimension odometer counters. Most cubes have well under 8 dimensions.
type Counters = SmallVec<[usize; 8]>;

/// Lazy row-major iterator over category combinations.
pub struct RowIter<'a> {
    dims: &'a [Vec<Category>],
    counters: Counters,
    remaining: usize,
}

/// Starts the odometer over the given per-dimension category lists.
/// Zero dimensions, or any empty dimension, yields an empty sequence.
pub fn generate_rows(dims: &[Vec<Category>]) -> RowIter<'_> {
    let remaining = if dims.is_empty() {
        0
    } else {
        dims.iter().map(Vec::len).product()
    };
    RowIter {
        dims,
        counters: dims.iter().map(|_| 0).collect(),
        remaining,
    }
}

impl<'a> Iterator for RowIter<'a> {
    type Item = Vec<&'a Category>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let row: Vec<&Category> = self
            .dims
            .iter()
            .zip(self.counters.iter())
            .map(|(dim, &i)| &dim[i])
            .collect();
        self.remaining -= 1;

        // Advance the innermost counter, carrying over to the left.
        for d in (0..self.counters.len()).rev() {
            self.counters[d] += 1;
            if self.counters[d] < self.dims[d].len() {
                break;
            }
            self.counters[d] = 0;
        }
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RowIter<'_> {}
