use std::ops::BitAnd;

/// Row-aligned boolean mask over a dataset.
///
/// Position `i` always refers to row `i` of the full dataset, so masks built
/// from different predicates can be combined positionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowMask {
    bits: Vec<bool>,
}

impl RowMask {
    pub fn from_predicate<T, F>(rows: &[T], predicate: F) -> Self
    where
        F: Fn(&T) -> bool,
    {
        Self {
            bits: rows.iter().map(predicate).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&bit| bit).count()
    }

    /// Rows selected by the mask, in original order.
    pub fn select<'a, T>(&'a self, rows: &'a [T]) -> impl Iterator<Item = &'a T> + 'a {
        rows.iter()
            .zip(self.bits.iter())
            .filter_map(|(row, &keep)| keep.then_some(row))
    }
}

impl BitAnd for RowMask {
    type Output = RowMask;

    /// Positional conjunction. Rows beyond the shorter mask are dropped.
    fn bitand(self, rhs: RowMask) -> RowMask {
        RowMask {
            bits: self
                .bits
                .iter()
                .zip(rhs.bits.iter())
                .map(|(&a, &b)| a && b)
                .collect(),
        }
    }
}
