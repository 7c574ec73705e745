//! # rowbind
//!
//! Value-to-parameter binding core for prepared statements.
//!
//! This library maps application-side values (scalars, or homogeneous
//! collections of them) onto the positional parameters of a prepared
//! data-access statement. Each [`Binding`] covers one logical parameter
//! and speaks a uniform cursor protocol (`columns_per_row` / `row_count` /
//! `can_advance` / `bind` / `reset`), so the executing statement drains
//! single-row and multi-row (batched) parameters the same way, in any of
//! the three data-flow directions (IN, OUT, IN_OUT).
//!
//! The driver side stays behind two small contracts: a [`Binder`] accepts
//! positioned, typed values, and [`ToColumns`] maps one logical value onto
//! one or more physical columns. Statement preparation, execution, and
//! result extraction live elsewhere.
//!
//! ## Example
//!
//! ```
//! use rowbind::{input_batch, value, Binding, Bindings, Null};
//!
//! # fn main() -> Result<(), rowbind::BindingError> {
//! let user_ids = vec![101i64, 102, 103];
//!
//! // One binding per logical parameter; batched and scalar mix freely.
//! let params: Bindings<'_> = vec![
//!     input_batch(&user_ids)?,
//!     value("pending"),
//!     value(Null),
//! ];
//!
//! // The executing statement lays out physical columns across the list,
//! // attaches its driver binder to each binding, then drives the row
//! // loop: one bind call per binding per row while can_advance() holds.
//! let mut column = 0;
//! for binding in &params {
//!     assert!(binding.columns_per_row() >= 1);
//!     column += binding.columns_per_row();
//! }
//! assert_eq!(column, 3);
//! assert_eq!(params[0].row_count(), 3);
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod binder;
pub mod binding;
pub mod error;
pub mod mapper;

// Re-export public API
pub use binder::Binder;
pub use binding::factory::{
    batch_values, in_out, in_out_batch, input, input_batch, input_batch_named, input_bits,
    input_named, output, output_batch, value, value_named,
};
pub use binding::{
    BinderHandle, Binding, Bindings, BitVecBinding, ContainerBinding, Direction, RowCollection,
    StringBinding, ValueBinding,
};
pub use error::{BindError, BindingError};
pub use mapper::{Null, ToColumns};
