//! Common test utilities for rowbind integration tests.
//!
//! The tests here need no database: the crate's job ends at the
//! [`Binder`] boundary, so a recording binder standing in for the driver
//! is enough to observe every value, position, and direction the bindings
//! emit.

use std::cell::RefCell;
use std::rc::Rc;

use rowbind::{BindError, Binder, BinderHandle, Direction};

/// A value as it arrived at the driver boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
}

/// One typed bind call, as sequenced by a binding.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub position: usize,
    pub value: Recorded,
    pub direction: Direction,
}

/// Driver stand-in that records every bind call in order.
#[derive(Default)]
pub struct RecordingBinder {
    pub calls: Vec<Call>,
    pub resets: usize,
}

impl RecordingBinder {
    /// New recorder plus the shareable handle bindings attach to.
    pub fn shared() -> (Rc<RefCell<RecordingBinder>>, BinderHandle) {
        let recorder = Rc::new(RefCell::new(RecordingBinder::default()));
        let handle: BinderHandle = recorder.clone();
        (recorder, handle)
    }

    fn record(&mut self, position: usize, value: Recorded, direction: Direction) {
        self.calls.push(Call {
            position,
            value,
            direction,
        });
    }
}

macro_rules! record_scalar {
    ($($method:ident : $ty:ty => $variant:ident),* $(,)?) => {$(
        fn $method(
            &mut self,
            position: usize,
            value: $ty,
            direction: Direction,
        ) -> Result<(), BindError> {
            self.record(position, Recorded::$variant(value.into()), direction);
            Ok(())
        }
    )*};
}

impl Binder for RecordingBinder {
    fn bind_null(&mut self, position: usize, direction: Direction) -> Result<(), BindError> {
        self.record(position, Recorded::Null, direction);
        Ok(())
    }

    fn bind_bool(
        &mut self,
        position: usize,
        value: bool,
        direction: Direction,
    ) -> Result<(), BindError> {
        self.record(position, Recorded::Bool(value), direction);
        Ok(())
    }

    record_scalar! {
        bind_i8: i8 => Int,
        bind_i16: i16 => Int,
        bind_i32: i32 => Int,
        bind_i64: i64 => Int,
        bind_u8: u8 => Uint,
        bind_u16: u16 => Uint,
        bind_u32: u32 => Uint,
        bind_u64: u64 => Uint,
        bind_f32: f32 => Float,
        bind_f64: f64 => Float,
    }

    fn bind_str(
        &mut self,
        position: usize,
        value: &str,
        direction: Direction,
    ) -> Result<(), BindError> {
        self.record(position, Recorded::Text(value.to_owned()), direction);
        Ok(())
    }

    fn bind_bytes(
        &mut self,
        position: usize,
        value: &[u8],
        direction: Direction,
    ) -> Result<(), BindError> {
        self.record(position, Recorded::Bytes(value.to_vec()), direction);
        Ok(())
    }

    fn reset(&mut self) {
        self.resets += 1;
    }
}
