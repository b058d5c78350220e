use std::fmt;

/// Borrowed view of one chunk of the compressed buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// Position among the chunks, starting at 0.
    pub index: u8,
    /// Highest valid index (chunk count - 1); same for every chunk of a payload.
    pub total: u8,
    pub bytes: &'a [u8],
}

impl Chunk<'_> {
    #[inline]
    pub fn is_last(&self) -> bool {
        self.index == self.total
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    Empty,
    InvalidChunkSize { size: usize, max: usize },
    TooManyChunks { count: usize, max: usize },
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SegmentError::*;
        match self {
            Empty =>
                write!(f, "nothing to segment"),
            InvalidChunkSize { size, max } =>
                write!(f, "invalid chunk size: {} (expected 1..={})", size, max),
            TooManyChunks { count, max } =>
                write!(f, "payload needs {} chunks, at most {} can be addressed", count, max),
        }
    }
}

impl std::error::Error for SegmentError {}
