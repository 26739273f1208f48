//! Result shape shared by every transform

/// Outcome of a successful transform invocation
///
/// `NoRecords` is a soft outcome: the input was valid but nothing qualified
/// for output. Callers must be able to tell it apart from both a batch with
/// data and a failed invocation (which is an `Err`).
#[derive(Debug, Clone, PartialEq)]
pub enum TransformOutcome<T> {
    Completed(T),
    NoRecords,
}

impl<T> TransformOutcome<T> {
    pub fn is_no_records(&self) -> bool {
        matches!(self, TransformOutcome::NoRecords)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> TransformOutcome<U> {
        match self {
            TransformOutcome::Completed(value) => TransformOutcome::Completed(f(value)),
            TransformOutcome::NoRecords => TransformOutcome::NoRecords,
        }
    }

    /// The completed value, if any
    pub fn completed(self) -> Option<T> {
        match self {
            TransformOutcome::Completed(value) => Some(value),
            TransformOutcome::NoRecords => None,
        }
    }
}

impl<T> TransformOutcome<Vec<T>> {
    /// `NoRecords` for an empty batch, `Completed` otherwise
    pub fn from_batch(items: Vec<T>) -> Self {
        if items.is_empty() {
            TransformOutcome::NoRecords
        } else {
            TransformOutcome::Completed(items)
        }
    }
}
