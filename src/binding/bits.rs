//! Packed boolean sequence binding.
//!
//! A [`bit_vec::BitVec`] stores its booleans bit-packed, so there are no
//! addressable `bool` elements to walk by reference the way
//! [`ContainerBinding`](crate::ContainerBinding) walks other shapes. This
//! binding unpacks the bits into a stable buffer at construction and
//! iterates that instead. A deliberate restriction comes with the
//! workaround: only the IN direction is supported, because there is no
//! caller-addressable storage for the driver to write back into.

use bit_vec::BitVec;
use tracing::{debug, trace};

use crate::binding::{BinderHandle, Binding, Direction};
use crate::error::{BindError, BindingError};
use crate::mapper::ToColumns;

/// Binds each bit of a packed boolean sequence as one row, input only.
///
/// The source is read once, at construction; mutating the original
/// `BitVec` afterwards does not change what binds. No borrow of the source
/// is held.
pub struct BitVecBinding {
    name: Option<String>,
    binder: Option<BinderHandle>,
    /// Bits unpacked at construction; the iteration source.
    rows: Vec<bool>,
    cursor: usize,
}

impl BitVecBinding {
    /// Create a binding over the bits of `source`.
    ///
    /// # Errors
    ///
    /// `DirectionNotSupported` for any direction other than
    /// [`Direction::In`]; `EmptyCollection` when `source` has no bits.
    pub fn new(source: &BitVec, direction: Direction) -> Result<Self, BindingError> {
        if direction != Direction::In {
            debug!(%direction, "rejected direction for bit-vector binding");
            return Err(BindingError::DirectionNotSupported {
                binding: "bit-vector",
                direction,
            });
        }
        if source.is_empty() {
            return Err(BindingError::EmptyCollection { direction });
        }
        Ok(Self {
            name: None,
            binder: None,
            rows: source.iter().collect(),
            cursor: 0,
        })
    }

    /// Set the parameter name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Binding for BitVecBinding {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn direction(&self) -> Direction {
        Direction::In
    }

    fn set_binder(&mut self, binder: BinderHandle) {
        self.binder = Some(binder);
    }

    fn columns_per_row(&self) -> usize {
        <bool as ToColumns>::column_count()
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn can_advance(&self) -> bool {
        self.cursor < self.rows.len()
    }

    fn bind(&mut self, start_column: usize) -> Result<(), BindError> {
        let binder = self
            .binder
            .as_ref()
            .expect("no binder attached to bit-vector binding");
        assert!(
            self.can_advance(),
            "bind called on a drained bit-vector binding; reset() first"
        );

        trace!(column = start_column, row = self.cursor, "binding bit row");
        self.rows[self.cursor].bind_value(
            start_column,
            &mut *binder.borrow_mut(),
            Direction::In,
        )?;
        self.cursor += 1;
        Ok(())
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }
}
