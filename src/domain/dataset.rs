//! Explicit soft-fail container for upstream tabular data.

/// A normalized upstream dataset.
///
/// Loading is all-or-nothing: either every row carried the required fields
/// and the dataset is `Loaded`, or the upstream was unreachable or malformed
/// and the whole dataset is `Unavailable`. Callers must treat `Unavailable`
/// as "data missing", never as "value is zero".
#[derive(Debug, Clone, PartialEq)]
pub enum Dataset<T> {
    Unavailable,
    Loaded(Vec<T>),
}

impl<T> Dataset<T> {
    /// Rows to render. `Unavailable` yields an empty slice.
    pub fn rows(&self) -> &[T] {
        match self {
            Dataset::Unavailable => &[],
            Dataset::Loaded(rows) => rows,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Dataset::Loaded(_))
    }

    /// True when there is nothing to render: unavailable or zero rows.
    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }
}

impl<T> Default for Dataset<T> {
    fn default() -> Self {
        Dataset::Unavailable
    }
}
