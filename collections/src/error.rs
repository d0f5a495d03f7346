use thiserror::Error;

/// An enum containing the possible errors of a list operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// An explicit index fell outside the range the operation accepts.
    #[error("Index out of bounds: {index}, size: {size}")]
    IndexOutOfBounds { index: usize, size: usize },
    /// A first/last accessor or remover was called on a list without elements.
    #[error("The list is empty!")]
    Empty,
    #[error("The array exceeds its max capacity!")]
    CapacityOverflow,
}
