//! Ergonomic binding constructors.
//!
//! One function per construction intent, returning an owned
//! [`Binding`] handle ready to join a parameter list. The `Null` marker
//! and `Option<T>` flow through the generic scalar forms, so an explicit
//! database NULL needs no dedicated constructor.

use bit_vec::BitVec;

use crate::binding::{
    Binding, BitVecBinding, ContainerBinding, Direction, RowCollection, ValueBinding,
};
use crate::error::BindingError;
use crate::mapper::ToColumns;

/// Bind `value` by reference as an input parameter.
pub fn input<'v, T: ToColumns + 'v>(value: &'v T) -> Box<dyn Binding + 'v> {
    Box::new(ValueBinding::borrowed(value, Direction::In))
}

/// Bind `value` by reference as a named input parameter.
pub fn input_named<'v, T: ToColumns + 'v>(value: &'v T, name: &str) -> Box<dyn Binding + 'v> {
    Box::new(ValueBinding::borrowed(value, Direction::In).named(name))
}

/// Bind `value` by reference as an output parameter.
///
/// The executing statement writes into the caller's storage during result
/// extraction; this binding only reserves the position and direction.
pub fn output<'v, T: ToColumns + 'v>(value: &'v T) -> Box<dyn Binding + 'v> {
    Box::new(ValueBinding::borrowed(value, Direction::Out))
}

/// Bind `value` by reference in both directions.
pub fn in_out<'v, T: ToColumns + 'v>(value: &'v T) -> Box<dyn Binding + 'v> {
    Box::new(ValueBinding::borrowed(value, Direction::InOut))
}

/// Bind an owned copy of a transient `value` as an input parameter.
///
/// Accepts literals and expression results; nothing has to outlive the
/// call.
pub fn value<T: ToColumns + 'static>(value: T) -> Box<dyn Binding> {
    Box::new(ValueBinding::owned(value, Direction::In))
}

/// Bind an owned copy of a transient `value` as a named input parameter.
pub fn value_named<T: ToColumns + 'static>(value: T, name: &str) -> Box<dyn Binding> {
    Box::new(ValueBinding::owned(value, Direction::In).named(name))
}

/// Bind a collection by reference as a batch of input rows.
///
/// # Errors
///
/// `EmptyCollection` when `collection` has no elements.
pub fn input_batch<'v, C>(collection: &'v C) -> Result<Box<dyn Binding + 'v>, BindingError>
where
    C: RowCollection + 'v,
{
    Ok(Box::new(ContainerBinding::borrowed(
        collection,
        Direction::In,
    )?))
}

/// Bind a collection by reference as a named batch of input rows.
pub fn input_batch_named<'v, C>(
    collection: &'v C,
    name: &str,
) -> Result<Box<dyn Binding + 'v>, BindingError>
where
    C: RowCollection + 'v,
{
    Ok(Box::new(
        ContainerBinding::borrowed(collection, Direction::In)?.named(name),
    ))
}

/// Bind a collection by reference as a batch of output rows.
///
/// An empty collection is permitted here: output parameters supply no
/// input rows.
pub fn output_batch<'v, C>(collection: &'v C) -> Result<Box<dyn Binding + 'v>, BindingError>
where
    C: RowCollection + 'v,
{
    Ok(Box::new(ContainerBinding::borrowed(
        collection,
        Direction::Out,
    )?))
}

/// Bind a collection by reference as a batch flowing in both directions.
///
/// # Errors
///
/// `EmptyCollection` when `collection` has no elements.
pub fn in_out_batch<'v, C>(collection: &'v C) -> Result<Box<dyn Binding + 'v>, BindingError>
where
    C: RowCollection + 'v,
{
    Ok(Box::new(ContainerBinding::borrowed(
        collection,
        Direction::InOut,
    )?))
}

/// Bind an owned copy of a collection's rows as a batch of input rows.
///
/// # Errors
///
/// `EmptyCollection` when `collection` has no elements.
pub fn batch_values<C>(collection: C) -> Result<Box<dyn Binding>, BindingError>
where
    C: RowCollection + 'static,
    C::Row: Clone,
{
    Ok(Box::new(ContainerBinding::copied(
        &collection,
        Direction::In,
    )?))
}

/// Bind the bits of a packed boolean sequence as input rows.
///
/// # Errors
///
/// `EmptyCollection` when `bits` is empty.
pub fn input_bits(bits: &BitVec) -> Result<Box<dyn Binding>, BindingError> {
    Ok(Box::new(BitVecBinding::new(bits, Direction::In)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::Null;

    #[test]
    fn test_scalar_factory_directions() {
        let v = 7i64;
        assert_eq!(input(&v).direction(), Direction::In);
        assert_eq!(output(&v).direction(), Direction::Out);
        assert_eq!(in_out(&v).direction(), Direction::InOut);
        assert_eq!(value(7i64).direction(), Direction::In);
    }

    #[test]
    fn test_named_factories() {
        let v = 7i64;
        assert_eq!(input_named(&v, "id").name(), Some("id"));
        assert_eq!(value_named(7i64, "id").name(), Some("id"));
        assert_eq!(input(&v).name(), None);
    }

    #[test]
    fn test_null_marker_flows_through() {
        let binding = value(Null);
        assert_eq!(binding.row_count(), 1);
        assert_eq!(binding.columns_per_row(), 1);

        let absent: Option<i64> = None;
        let binding = value(absent);
        assert_eq!(binding.columns_per_row(), 1);
    }

    #[test]
    fn test_batch_factories() {
        let rows = vec![1i32, 2, 3];
        let binding = input_batch(&rows).unwrap();
        assert_eq!(binding.row_count(), 3);
        assert_eq!(binding.direction(), Direction::In);

        let named = input_batch_named(&rows, "ids").unwrap();
        assert_eq!(named.name(), Some("ids"));

        let empty: Vec<i32> = Vec::new();
        assert!(input_batch(&empty).is_err());
        assert!(in_out_batch(&empty).is_err());
        assert_eq!(output_batch(&empty).unwrap().row_count(), 0);
    }

    #[test]
    fn test_batch_values_owns_rows() {
        let binding = batch_values(vec![String::from("a"), String::from("b")]).unwrap();
        assert_eq!(binding.row_count(), 2);
        assert!(binding.can_advance());
    }

    #[test]
    fn test_input_bits_factory() {
        let bits = BitVec::from_elem(4, true);
        let binding = input_bits(&bits).unwrap();
        assert_eq!(binding.row_count(), 4);
        assert_eq!(binding.direction(), Direction::In);
    }
}
