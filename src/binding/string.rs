//! Text value binding.
//!
//! Text reaches a parameter list from sources that cannot be safely
//! referenced for the lifetime of a statement: string literals, expression
//! results, raw C strings handed across an FFI boundary. `StringBinding`
//! therefore always copies into an owned buffer, whatever ownership the
//! caller asked for elsewhere.

use std::ffi::CStr;
use std::os::raw::c_char;

use tracing::trace;

use crate::binding::{BinderHandle, Binding, Direction};
use crate::error::{BindError, BindingError};
use crate::mapper::ToColumns;

/// Binds one text value to one logical parameter.
///
/// Single-row cursor contract, identical to
/// [`ValueBinding`](crate::ValueBinding): one bind per reset cycle.
pub struct StringBinding {
    name: Option<String>,
    direction: Direction,
    binder: Option<BinderHandle>,
    /// Always an owned copy of the source text.
    value: String,
    bound: bool,
}

impl StringBinding {
    /// Create a binding by copying `value`.
    pub fn from_text(value: &str, direction: Direction) -> Self {
        Self {
            name: None,
            direction,
            binder: None,
            value: value.to_owned(),
            bound: false,
        }
    }

    /// Create a binding by copying a NUL-terminated C string.
    ///
    /// A null `ptr` fails construction with
    /// [`BindingError::NullPointer`]; there is no ownership mode under
    /// which a null source is acceptable. Invalid UTF-8 sequences are
    /// replaced during the copy.
    ///
    /// # Safety
    ///
    /// A non-null `ptr` must point to a valid NUL-terminated string that
    /// stays readable for the duration of this call. The bytes are copied
    /// out before returning.
    pub unsafe fn from_c_str(
        ptr: *const c_char,
        direction: Direction,
    ) -> Result<Self, BindingError> {
        if ptr.is_null() {
            return Err(BindingError::NullPointer);
        }
        let value = CStr::from_ptr(ptr).to_string_lossy().into_owned();
        Ok(Self {
            name: None,
            direction,
            binder: None,
            value,
            bound: false,
        })
    }

    /// Set the parameter name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Binding for StringBinding {
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
        <String as ToColumns>::column_count()
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
            .expect("no binder attached to string binding");
        assert!(
            self.can_advance(),
            "bind called on a drained string binding; reset() first"
        );

        trace!(column = start_column, "binding string value");
        self.value
            .bind_value(start_column, &mut *binder.borrow_mut(), self.direction)?;
        self.bound = true;
        Ok(())
    }

    fn reset(&mut self) {
        self.bound = false;
        let binder = self
            .binder
            .as_ref()
            .expect("no binder attached to string binding");
        binder.borrow_mut().reset();
    }
}
