//! Error types for rowbind.
//!
//! Failures are split by the moment they can occur: `BindingError` covers
//! validation performed while a binding is constructed, before any driver
//! state is touched; `BindError` covers failures raised while a value is
//! actually pushed through a [`Binder`](crate::Binder).
//!
//! Protocol violations (driving a drained cursor, or binding before a
//! binder has been attached) are programming defects in the consumer's
//! drive loop and panic instead of returning an error value.

use thiserror::Error;

use crate::binding::Direction;

/// Errors detected while a binding is constructed.
#[derive(Error, Debug)]
pub enum BindingError {
    /// A collection with no elements was bound in an input-supplying
    /// direction. Input parameters must carry at least one row.
    #[error("cannot bind an empty collection as {direction} input")]
    EmptyCollection { direction: Direction },

    /// A null pointer was passed where a C string was expected.
    #[error("null string pointer passed to a binding")]
    NullPointer,

    /// The requested direction is not supported by this binding kind.
    #[error("{binding} bindings only support the IN direction, got {direction}")]
    DirectionNotSupported {
        binding: &'static str,
        direction: Direction,
    },
}

/// Errors raised while a value is bound through the driver.
///
/// These originate in the [`Binder`](crate::Binder) or in a type's column
/// mapping; the binding adapters propagate them unchanged. A failed bind
/// leaves the batch partially bound, and the executing statement must treat
/// it as fatal to that execution attempt.
#[derive(Error, Debug)]
pub enum BindError {
    /// The driver rejected the value placed at `column`.
    #[error("driver rejected the value bound at column {column}")]
    Driver {
        column: usize,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The driver has no representation for values of this type.
    #[error("no column mapping for values of type {type_name}")]
    Unsupported { type_name: &'static str },
}

impl BindError {
    /// Wrap a driver-side failure, preserving the originating condition.
    pub fn driver(
        column: usize,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        BindError::Driver {
            column,
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection_display() {
        let err = BindingError::EmptyCollection {
            direction: Direction::In,
        };
        assert!(err.to_string().contains("empty collection"));
        assert!(err.to_string().contains("IN"));
    }

    #[test]
    fn test_direction_not_supported_display() {
        let err = BindingError::DirectionNotSupported {
            binding: "bit-vector",
            direction: Direction::Out,
        };
        assert!(err.to_string().contains("bit-vector"));
        assert!(err.to_string().contains("OUT"));
    }

    #[test]
    fn test_driver_error_preserves_source() {
        let io = std::io::Error::other("staging buffer full");
        let err = BindError::driver(3, io);
        assert!(err.to_string().contains("column 3"));

        let source = std::error::Error::source(&err).expect("source preserved");
        assert!(source.to_string().contains("staging buffer full"));
    }

    #[test]
    fn test_unsupported_display() {
        let err = BindError::Unsupported { type_name: "u128" };
        assert!(err.to_string().contains("u128"));
    }
}
