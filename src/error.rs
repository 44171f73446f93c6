//! Error types used in the [`ndtensor`](crate) crate.

/// Tensor error type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A coordinate tuple has the wrong number of components, a component lies outside its dimension, or a
    /// dimension index does not name a dimension of the tensor.
    OutOfRange,
    /// The operands of an elementwise operation have different sizes, or a data buffer does not match the number of
    /// elements implied by a shape.
    ShapeMismatch,
    /// A shape contains a negative size, or its number of elements does not fit in `usize`.
    InvalidShape,
}
impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, fmt)
    }
}
#[cfg(all(not(feature = "std"), error_in_core))]
impl core::error::Error for Error {}
#[cfg(feature = "std")]
impl std::error::Error for Error {}

pub(crate) type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use crate::tests::{check_send, check_sync};

    use super::Error;

    #[test]
    fn test_error_send_sync() {
        check_send::<Error>();
        check_sync::<Error>();
    }

    #[test]
    fn display_matches_variant_name() {
        use crate::alloc::ToString;

        assert_eq!(Error::OutOfRange.to_string(), "OutOfRange");
        assert_eq!(Error::ShapeMismatch.to_string(), "ShapeMismatch");
        assert_eq!(Error::InvalidShape.to_string(), "InvalidShape");
    }
}
