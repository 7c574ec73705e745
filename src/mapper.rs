//! Column mapping for bindable value types.
//!
//! [`ToColumns`] is the contract between a logical value and the physical
//! parameter slots it occupies. Most types take exactly one column; tuples
//! fan out over the sum of their fields' columns. The binding adapters
//! delegate both their column accounting and the actual typed bind call
//! here.

use crate::binder::Binder;
use crate::binding::Direction;
use crate::error::BindError;

/// Maps one logical value onto one or more physical statement columns.
pub trait ToColumns {
    /// Number of physical columns one value of this type occupies.
    ///
    /// Constant for a given type; no side effects.
    fn column_count() -> usize
    where
        Self: Sized,
    {
        1
    }

    /// Bind this value through `binder`, starting at `position`.
    ///
    /// A multi-column value binds its parts at consecutive positions. The
    /// call either binds every column of the value or fails; there is no
    /// partially bound value.
    fn bind_value(
        &self,
        position: usize,
        binder: &mut dyn Binder,
        direction: Direction,
    ) -> Result<(), BindError>;
}

/// Marker for an explicit database NULL.
///
/// Binding `Null` sends "no value" for the parameter without requiring a
/// sentinel of the column's element type. For a typed NULL, bind an
/// `Option<T>` instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Null;

impl ToColumns for Null {
    fn bind_value(
        &self,
        position: usize,
        binder: &mut dyn Binder,
        direction: Direction,
    ) -> Result<(), BindError> {
        binder.bind_null(position, direction)
    }
}

impl<T: ToColumns> ToColumns for Option<T> {
    fn column_count() -> usize {
        T::column_count()
    }

    fn bind_value(
        &self,
        position: usize,
        binder: &mut dyn Binder,
        direction: Direction,
    ) -> Result<(), BindError> {
        match self {
            Some(value) => value.bind_value(position, binder, direction),
            // An absent multi-column value still occupies its columns.
            None => {
                for offset in 0..T::column_count() {
                    binder.bind_null(position + offset, direction)?;
                }
                Ok(())
            }
        }
    }
}

macro_rules! scalar_to_columns {
    ($($ty:ty => $method:ident),* $(,)?) => {$(
        impl ToColumns for $ty {
            fn bind_value(
                &self,
                position: usize,
                binder: &mut dyn Binder,
                direction: Direction,
            ) -> Result<(), BindError> {
                binder.$method(position, *self, direction)
            }
        }
    )*};
}

scalar_to_columns! {
    bool => bind_bool,
    i8 => bind_i8,
    i16 => bind_i16,
    i32 => bind_i32,
    i64 => bind_i64,
    u8 => bind_u8,
    u16 => bind_u16,
    u32 => bind_u32,
    u64 => bind_u64,
    f32 => bind_f32,
    f64 => bind_f64,
}

impl ToColumns for String {
    fn bind_value(
        &self,
        position: usize,
        binder: &mut dyn Binder,
        direction: Direction,
    ) -> Result<(), BindError> {
        binder.bind_str(position, self, direction)
    }
}

impl ToColumns for &str {
    fn bind_value(
        &self,
        position: usize,
        binder: &mut dyn Binder,
        direction: Direction,
    ) -> Result<(), BindError> {
        binder.bind_str(position, self, direction)
    }
}

impl ToColumns for Vec<u8> {
    fn bind_value(
        &self,
        position: usize,
        binder: &mut dyn Binder,
        direction: Direction,
    ) -> Result<(), BindError> {
        binder.bind_bytes(position, self, direction)
    }
}

impl ToColumns for &[u8] {
    fn bind_value(
        &self,
        position: usize,
        binder: &mut dyn Binder,
        direction: Direction,
    ) -> Result<(), BindError> {
        binder.bind_bytes(position, self, direction)
    }
}

macro_rules! tuple_to_columns {
    ($(($($name:ident : $idx:tt),+)),+ $(,)?) => {$(
        impl<$($name: ToColumns),+> ToColumns for ($($name,)+) {
            fn column_count() -> usize {
                0 $(+ $name::column_count())+
            }

            fn bind_value(
                &self,
                position: usize,
                binder: &mut dyn Binder,
                direction: Direction,
            ) -> Result<(), BindError> {
                let mut column = position;
                $(
                    self.$idx.bind_value(column, binder, direction)?;
                    column += $name::column_count();
                )+
                let _ = column;
                Ok(())
            }
        }
    )+};
}

tuple_to_columns! {
    (A: 0, B: 1),
    (A: 0, B: 1, C: 2),
    (A: 0, B: 1, C: 2, D: 3),
    (A: 0, B: 1, C: 2, D: 3, E: 4),
    (A: 0, B: 1, C: 2, D: 3, E: 4, F: 5),
}
