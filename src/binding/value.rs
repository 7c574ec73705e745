//! Scalar value binding.

use tracing::trace;

use crate::binding::{BinderHandle, Binding, Direction};
use crate::error::BindError;
use crate::mapper::ToColumns;

/// Storage for the wrapped value: a borrow of caller-owned storage, or a
/// private copy owned by the binding.
enum Source<'v, T> {
    Borrowed(&'v T),
    Owned(T),
}

impl<T> Source<'_, T> {
    fn get(&self) -> &T {
        match self {
            Source::Borrowed(value) => value,
            Source::Owned(value) => value,
        }
    }
}

/// Binds one scalar value to one logical parameter.
///
/// A value binding produces exactly one row: a single [`bind`](Binding::bind)
/// call per reset cycle, after which the cursor is exhausted until
/// [`reset`](Binding::reset). The value is held either by reference, where
/// the borrow checker guarantees the caller's storage outlives the binding,
/// or as a private copy that stays valid after the caller's original is
/// gone.
///
/// # Example
///
/// ```
/// use rowbind::{Binding, Direction, ValueBinding};
///
/// let count = 42i64;
/// let binding = ValueBinding::borrowed(&count, Direction::In).named("count");
///
/// assert_eq!(binding.row_count(), 1);
/// assert_eq!(binding.columns_per_row(), 1);
/// assert_eq!(binding.name(), Some("count"));
/// ```
pub struct ValueBinding<'v, T: ToColumns> {
    /// Identifier for named-parameter lookup; uninterpreted here.
    name: Option<String>,
    /// Data-flow direction, fixed at construction.
    direction: Direction,
    /// Driver binder attached by the executing statement.
    binder: Option<BinderHandle>,
    /// The wrapped value.
    value: Source<'v, T>,
    /// Whether the single row has been bound since the last reset.
    bound: bool,
}

impl<'v, T: ToColumns> ValueBinding<'v, T> {
    /// Create a binding that references caller-owned storage.
    pub fn borrowed(value: &'v T, direction: Direction) -> Self {
        Self {
            name: None,
            direction,
            binder: None,
            value: Source::Borrowed(value),
            bound: false,
        }
    }

    /// Create a binding that owns `value`.
    ///
    /// Accepts literals and expression results; the value does not need to
    /// outlive the call site.
    pub fn owned(value: T, direction: Direction) -> Self {
        Self {
            name: None,
            direction,
            binder: None,
            value: Source::Owned(value),
            bound: false,
        }
    }

    /// Create a binding over a private copy of `value`.
    pub fn copied(value: &T, direction: Direction) -> Self
    where
        T: Clone,
    {
        Self::owned(value.clone(), direction)
    }

    /// Set the parameter name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl<T: ToColumns> Binding for ValueBinding<'_, T> {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn set_binder(&mut self, binder: BinderHandle) {
        self.binder = Some(binder);
    }

    fn columns_per_row(&self) -> usize {
        T::column_count()
    }

    fn row_count(&self) -> usize {
        1
    }

    fn can_advance(&self) -> bool {
        !self.bound
    }

    fn bind(&mut self, start_column: usize) -> Result<(), BindError> {
        let binder = self
            .binder
            .as_ref()
            .expect("no binder attached to value binding");
        assert!(
            self.can_advance(),
            "bind called on a drained value binding; reset() first"
        );

        trace!(column = start_column, "binding scalar value");
        self.value
            .get()
            .bind_value(start_column, &mut *binder.borrow_mut(), self.direction)?;
        self.bound = true;
        Ok(())
    }

    fn reset(&mut self) {
        self.bound = false;
        let binder = self
            .binder
            .as_ref()
            .expect("no binder attached to value binding");
        binder.borrow_mut().reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::testing::MockBinder;
    use mockall::predicate::eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn handle(mock: MockBinder) -> BinderHandle {
        Rc::new(RefCell::new(mock))
    }

    #[test]
    fn test_single_row_contract() {
        let mut mock = MockBinder::new();
        mock.expect_bind_i64()
            .with(eq(0), eq(10i64), eq(Direction::In))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let value = 10i64;
        let mut binding = ValueBinding::borrowed(&value, Direction::In);
        binding.set_binder(handle(mock));

        assert_eq!(binding.row_count(), 1);
        assert!(binding.can_advance());

        binding.bind(0).unwrap();
        assert!(!binding.can_advance());
    }

    #[test]
    #[should_panic(expected = "drained value binding")]
    fn test_second_bind_without_reset_panics() {
        let mut mock = MockBinder::new();
        mock.expect_bind_i64().returning(|_, _, _| Ok(()));

        let value = 10i64;
        let mut binding = ValueBinding::borrowed(&value, Direction::In);
        binding.set_binder(handle(mock));

        binding.bind(0).unwrap();
        let _ = binding.bind(0);
    }

    #[test]
    #[should_panic(expected = "no binder attached")]
    fn test_bind_without_binder_panics() {
        let value = 1i32;
        let mut binding = ValueBinding::borrowed(&value, Direction::In);
        let _ = binding.bind(0);
    }

    #[test]
    fn test_reset_restores_and_forwards_to_binder() {
        let mut mock = MockBinder::new();
        mock.expect_bind_i64().times(2).returning(|_, _, _| Ok(()));
        mock.expect_reset().times(1).return_const(());

        let value = 10i64;
        let mut binding = ValueBinding::borrowed(&value, Direction::In);
        binding.set_binder(handle(mock));

        binding.bind(0).unwrap();
        binding.reset();
        assert!(binding.can_advance());
        binding.bind(0).unwrap();
    }

    #[test]
    fn test_owned_value_outlives_source() {
        let mut mock = MockBinder::new();
        mock.expect_bind_str()
            .withf(|pos, value, _| *pos == 0 && value == "transient")
            .times(1)
            .returning(|_, _, _| Ok(()));

        let mut binding = {
            let transient = String::from("transient");
            ValueBinding::copied(&transient, Direction::In)
            // transient dropped here; the binding keeps its own copy
        };
        binding.set_binder(handle(mock));
        binding.bind(0).unwrap();
    }

    #[test]
    fn test_multi_column_value_reports_width() {
        let pair = (5i32, String::from("x"));
        let binding = ValueBinding::borrowed(&pair, Direction::In);
        assert_eq!(binding.columns_per_row(), 2);
    }

    #[test]
    fn test_out_direction_passes_through() {
        let mut mock = MockBinder::new();
        mock.expect_bind_f64()
            .with(eq(2), eq(0.5f64), eq(Direction::Out))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let slot = 0.5f64;
        let mut binding = ValueBinding::borrowed(&slot, Direction::Out);
        binding.set_binder(handle(mock));
        binding.bind(2).unwrap();
    }

    #[test]
    fn test_driver_failure_propagates() {
        let mut mock = MockBinder::new();
        mock.expect_bind_i64()
            .times(1)
            .returning(|pos, _, _| Err(BindError::driver(pos, std::io::Error::other("boom"))));

        let value = 10i64;
        let mut binding = ValueBinding::borrowed(&value, Direction::In);
        binding.set_binder(handle(mock));

        let result = binding.bind(0);
        assert!(matches!(result, Err(BindError::Driver { column: 0, .. })));
        // a failed bind does not consume the row
        assert!(binding.can_advance());
    }

    #[test]
    fn test_name_and_direction_accessors() {
        let value = 1u32;
        let binding = ValueBinding::borrowed(&value, Direction::InOut).named("id");
        assert_eq!(binding.name(), Some("id"));
        assert_eq!(binding.direction(), Direction::InOut);
    }
}
