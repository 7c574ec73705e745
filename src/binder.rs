//! Driver-side binder contract.
//!
//! A [`Binder`] is the low-level object a concrete driver exposes for
//! staging one typed value at one physical parameter position. The binding
//! adapters in this crate never look inside it; they only sequence calls
//! against it: one call per physical column, in ascending positions, once
//! per row of the batch being drained.

use crate::binding::Direction;
use crate::error::BindError;

/// Accepts positioned, typed values on behalf of the underlying driver.
///
/// One binder instance serves all bindings of a single statement; the
/// executing statement attaches it to each binding before the first
/// [`bind`](crate::Binding::bind) call. Positions are zero-based physical
/// column indices, already offset by the consumer across the parameter
/// list.
///
/// `reset` releases whatever staging state the driver accumulated for the
/// current execution (scalar bindings forward their own `reset` here).
pub trait Binder {
    fn bind_null(&mut self, position: usize, direction: Direction) -> Result<(), BindError>;

    fn bind_bool(
        &mut self,
        position: usize,
        value: bool,
        direction: Direction,
    ) -> Result<(), BindError>;

    fn bind_i8(
        &mut self,
        position: usize,
        value: i8,
        direction: Direction,
    ) -> Result<(), BindError>;

    fn bind_i16(
        &mut self,
        position: usize,
        value: i16,
        direction: Direction,
    ) -> Result<(), BindError>;

    fn bind_i32(
        &mut self,
        position: usize,
        value: i32,
        direction: Direction,
    ) -> Result<(), BindError>;

    fn bind_i64(
        &mut self,
        position: usize,
        value: i64,
        direction: Direction,
    ) -> Result<(), BindError>;

    fn bind_u8(
        &mut self,
        position: usize,
        value: u8,
        direction: Direction,
    ) -> Result<(), BindError>;

    fn bind_u16(
        &mut self,
        position: usize,
        value: u16,
        direction: Direction,
    ) -> Result<(), BindError>;

    fn bind_u32(
        &mut self,
        position: usize,
        value: u32,
        direction: Direction,
    ) -> Result<(), BindError>;

    fn bind_u64(
        &mut self,
        position: usize,
        value: u64,
        direction: Direction,
    ) -> Result<(), BindError>;

    fn bind_f32(
        &mut self,
        position: usize,
        value: f32,
        direction: Direction,
    ) -> Result<(), BindError>;

    fn bind_f64(
        &mut self,
        position: usize,
        value: f64,
        direction: Direction,
    ) -> Result<(), BindError>;

    fn bind_str(
        &mut self,
        position: usize,
        value: &str,
        direction: Direction,
    ) -> Result<(), BindError>;

    fn bind_bytes(
        &mut self,
        position: usize,
        value: &[u8],
        direction: Direction,
    ) -> Result<(), BindError>;

    /// Release driver-side staging state accumulated since the last reset.
    fn reset(&mut self);
}
