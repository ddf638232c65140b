use alloc::vec::Vec;

/// Prefix sums over row sizes.
///
/// `starts[i]` is the offset of row `i` from the top of the list; the final entry is the total
/// size. Rows are rebuilt wholesale whenever the filtered sequence changes, so there is no
/// point-update path.
#[derive(Clone, Debug, Default)]
pub(crate) struct RowOffsets {
    starts: Vec<u64>,
}

impl RowOffsets {
    pub(crate) fn from_sizes(sizes: &[u32]) -> Self {
        let mut starts = Vec::with_capacity(sizes.len() + 1);
        let mut acc = 0u64;
        starts.push(acc);
        for &size in sizes {
            acc = acc.saturating_add(size as u64);
            starts.push(acc);
        }
        Self { starts }
    }

    pub(crate) fn len(&self) -> usize {
        self.starts.len().saturating_sub(1)
    }

    pub(crate) fn total(&self) -> u64 {
        self.starts.last().copied().unwrap_or(0)
    }

    /// Offset of row `index`; `index == len()` yields the total.
    pub(crate) fn start(&self, index: usize) -> u64 {
        self.starts
            .get(index)
            .copied()
            .unwrap_or_else(|| self.total())
    }

    /// Returns the number of rows that end at or before `target`.
    ///
    /// This maps an offset to the index of the row containing it (clamp to `len() - 1` for
    /// offsets past the end).
    pub(crate) fn lower_bound(&self, target: u64) -> usize {
        match self.starts.get(1..) {
            Some(ends) => ends.partition_point(|&end| end <= target),
            None => 0,
        }
    }
}
