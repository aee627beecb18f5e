//! Error types for field compilation and bit access.

/// Errors produced when compiling a [crate::field::Field] into a [crate::codec::Codec].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// Field width is 0 or greater than 64 bits.
    InvalidFieldSize,
    /// Field extends past the end of the declared region.
    OutOfRegion,
}

/// Errors produced when reading bits from a byte slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// Requested bit range is beyond the end of the data.
    OutOfBounds,
    /// More than 64 bits were requested in a single read.
    TooManyBitsRead,
    /// Input data is shorter than the region the codec was compiled for.
    RegionTooShort,
}

/// Errors produced when writing bits into a byte slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteError {
    /// Target bit range is beyond the end of the data.
    OutOfBounds,
    /// More than 64 bits were written in a single write.
    TooManyBitsWritten,
    /// Output buffer is shorter than the region the codec was compiled for.
    RegionTooShort,
}
