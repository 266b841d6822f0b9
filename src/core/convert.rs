use anyhow::Result;

/// Fallible conversion from a dense index (side index, cell index, ...)
pub trait FromIndex: Sized {
    fn from_index(idx: usize) -> Result<Self>;
}

/// Fallible conversion to a dense index, the inverse of [`FromIndex`]
pub trait ToIndex {
    fn to_index(&self) -> Result<usize>;
}
