//! Parameter binding adapters.
//!
//! A [`Binding`] pairs one logical statement parameter with the value (or
//! collection of values) an application wants flowing through it. Every
//! adapter speaks the same cursor protocol (report sizes, bind the current
//! row, advance, reset), so the executing statement can drain single-row
//! and batched parameters uniformly:
//!
//! - [`ValueBinding`]: one scalar value, one row;
//! - [`StringBinding`]: text values, always copied into owned storage;
//! - [`ContainerBinding`]: one row per element of a homogeneous collection;
//! - [`BitVecBinding`]: packed boolean sequences, input only.
//!
//! The [`factory`] functions cover the common construction intents.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::binder::Binder;
use crate::error::BindError;

pub mod bits;
pub mod container;
pub mod factory;
pub mod string;
pub mod value;

pub use bits::BitVecBinding;
pub use container::{ContainerBinding, RowCollection};
pub use string::StringBinding;
pub use value::ValueBinding;

/// Data-flow direction of a bound parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Application to statement.
    In,
    /// Statement to application.
    Out,
    /// Both directions.
    InOut,
}

impl Direction {
    /// Whether a parameter bound in this direction supplies input rows.
    pub fn supplies_input(self) -> bool {
        matches!(self, Direction::In | Direction::InOut)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::In => write!(f, "IN"),
            Direction::Out => write!(f, "OUT"),
            Direction::InOut => write!(f, "IN_OUT"),
        }
    }
}

/// Shared handle to the driver binder serving one statement.
///
/// One binder is shared by every binding of a statement; bindings hold it
/// without owning it. Single-threaded: cursor state and binder staging are
/// mutated in place without locking.
pub type BinderHandle = Rc<RefCell<dyn Binder>>;

/// A named, directional handle over one logical statement parameter.
///
/// The executing statement drives each binding through a uniform cycle:
/// query [`columns_per_row`](Binding::columns_per_row) and
/// [`row_count`](Binding::row_count) to lay out the parameter list, attach
/// the statement's binder with [`set_binder`](Binding::set_binder), then
/// call [`bind`](Binding::bind) once per row while
/// [`can_advance`](Binding::can_advance) holds. [`reset`](Binding::reset)
/// rewinds a drained binding so the same rows can be bound again for a
/// repeated execution.
///
/// The consumer computes each binding's starting column offset across the
/// parameter list; a binding only knows its own column width.
pub trait Binding {
    /// Optional identifier for named-parameter lookup by the consumer.
    ///
    /// Not interpreted by the binding itself.
    fn name(&self) -> Option<&str>;

    /// Data-flow direction, fixed at construction.
    fn direction(&self) -> Direction;

    /// Attach the statement's binder. Must happen before the first `bind`.
    fn set_binder(&mut self, binder: BinderHandle);

    /// Physical columns one logical row occupies. Constant per binding.
    fn columns_per_row(&self) -> usize;

    /// Rows this binding produces over a full drain.
    fn row_count(&self) -> usize;

    /// Whether a row remains under the cursor.
    fn can_advance(&self) -> bool;

    /// Bind the row under the cursor at `start_column` and advance.
    ///
    /// Exactly [`row_count`](Binding::row_count) calls drain a full batch.
    /// Failures from the column mapping or the driver propagate unchanged,
    /// leaving the batch partially bound.
    ///
    /// # Panics
    ///
    /// Panics if no binder is attached, or if the cursor is already
    /// exhausted (`can_advance()` is false). Both are defects in the
    /// consumer's drive loop, not runtime conditions.
    fn bind(&mut self, start_column: usize) -> Result<(), BindError>;

    /// Rewind the cursor to the first row.
    fn reset(&mut self);
}

/// A statement's parameter list.
pub type Bindings<'v> = Vec<Box<dyn Binding + 'v>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::In.to_string(), "IN");
        assert_eq!(Direction::Out.to_string(), "OUT");
        assert_eq!(Direction::InOut.to_string(), "IN_OUT");
    }

    #[test]
    fn test_direction_supplies_input() {
        assert!(Direction::In.supplies_input());
        assert!(Direction::InOut.supplies_input());
        assert!(!Direction::Out.supplies_input());
    }
}
