//! Batched container bindings.
//!
//! One adapter serves every supported collection shape; the per-shape
//! iteration lives behind the [`RowCollection`] capability. Each element of
//! the collection becomes one row of the batch, drained by consecutive
//! [`bind`](crate::Binding::bind) calls.

use std::collections::{BTreeMap, BTreeSet, LinkedList, VecDeque};

use tracing::{debug, trace};

use crate::binding::{BinderHandle, Binding, Direction};
use crate::error::{BindError, BindingError};
use crate::mapper::ToColumns;

/// A homogeneous collection whose bound elements can be walked in a stable
/// order.
///
/// Implementing this for a container shape admits it to
/// [`ContainerBinding`]. `rows` yields the element actually transmitted per
/// row; for associative shapes that is the mapped value, and keys never
/// reach the driver. Shapes outside the standard library (duplicate-ordered
/// sets, duplicate-keyed maps, third-party containers) join the family the
/// same way.
pub trait RowCollection {
    /// The element bound for each row.
    type Row: ToColumns;

    /// Number of elements, and therefore rows.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Walk the bound elements in row order.
    fn rows(&self) -> impl Iterator<Item = &Self::Row> + '_;
}

impl<T: ToColumns> RowCollection for Vec<T> {
    type Row = T;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn rows(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter()
    }
}

impl<T: ToColumns> RowCollection for VecDeque<T> {
    type Row = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn rows(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter()
    }
}

impl<T: ToColumns> RowCollection for LinkedList<T> {
    type Row = T;

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn rows(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter()
    }
}

impl<T: ToColumns> RowCollection for BTreeSet<T> {
    type Row = T;

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn rows(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter()
    }
}

/// Only the mapped values are bound; rows follow key-iteration order.
impl<K, V: ToColumns> RowCollection for BTreeMap<K, V> {
    type Row = V;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn rows(&self) -> impl Iterator<Item = &V> + '_ {
        self.values()
    }
}

/// Row storage behind a container binding.
///
/// The borrowed variant keeps the source alongside a snapshot of row
/// references so `reset` can re-collect from the live collection; the owned
/// variant holds copied-out rows fixed at construction.
enum Rows<'v, C: RowCollection> {
    Borrowed {
        source: &'v C,
        snapshot: Vec<&'v C::Row>,
    },
    Owned {
        rows: Vec<C::Row>,
    },
}

/// Binds each element of a collection as one row of a batch.
///
/// The cursor starts at the first element; every successful
/// [`bind`](Binding::bind) transmits the element under the cursor and
/// advances. Exactly [`row_count`](Binding::row_count) calls drain the
/// batch; [`reset`](Binding::reset) rewinds so the same rows bind again for
/// a repeated execution.
///
/// Input-supplying directions (`In`, `InOut`) reject an empty collection at
/// construction: zero input rows is an error, never a silent no-op. An
/// `Out` binding over an empty collection is permitted and simply produces
/// no rows.
///
/// # Example
///
/// ```
/// use rowbind::{Binding, ContainerBinding, Direction};
///
/// let ids = vec![10i64, 20, 30];
/// let binding = ContainerBinding::borrowed(&ids, Direction::In)?;
///
/// assert_eq!(binding.row_count(), 3);
/// assert!(binding.can_advance());
/// # Ok::<(), rowbind::BindingError>(())
/// ```
pub struct ContainerBinding<'v, C: RowCollection> {
    name: Option<String>,
    direction: Direction,
    binder: Option<BinderHandle>,
    rows: Rows<'v, C>,
    /// Index of the next row to bind.
    cursor: usize,
}

impl<'v, C: RowCollection> ContainerBinding<'v, C> {
    /// Create a binding that references the caller's collection.
    ///
    /// The borrow checker holds the collection immutable for the binding's
    /// lifetime; `reset` re-collects the rows, so the snapshot always
    /// matches the source.
    pub fn borrowed(source: &'v C, direction: Direction) -> Result<Self, BindingError> {
        let snapshot: Vec<&C::Row> = source.rows().collect();
        check_input_rows(direction, snapshot.len())?;
        Ok(Self {
            name: None,
            direction,
            binder: None,
            rows: Rows::Borrowed { source, snapshot },
            cursor: 0,
        })
    }

    /// Create a binding over a private copy of the collection's rows.
    ///
    /// The copy is fixed at construction; the caller's collection can go
    /// away (or change) afterwards without affecting the batch.
    pub fn copied(source: &C, direction: Direction) -> Result<Self, BindingError>
    where
        C::Row: Clone,
    {
        let rows: Vec<C::Row> = source.rows().cloned().collect();
        check_input_rows(direction, rows.len())?;
        Ok(Self {
            name: None,
            direction,
            binder: None,
            rows: Rows::Owned { rows },
            cursor: 0,
        })
    }

    /// Set the parameter name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    fn row(&self, index: usize) -> &C::Row {
        match &self.rows {
            Rows::Borrowed { snapshot, .. } => snapshot[index],
            Rows::Owned { rows } => &rows[index],
        }
    }
}

fn check_input_rows(direction: Direction, rows: usize) -> Result<(), BindingError> {
    if rows == 0 && direction.supplies_input() {
        debug!(%direction, "rejected empty collection for input binding");
        return Err(BindingError::EmptyCollection { direction });
    }
    Ok(())
}

impl<C: RowCollection> Binding for ContainerBinding<'_, C> {
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
        <C::Row as ToColumns>::column_count()
    }

    fn row_count(&self) -> usize {
        match &self.rows {
            Rows::Borrowed { snapshot, .. } => snapshot.len(),
            Rows::Owned { rows } => rows.len(),
        }
    }

    fn can_advance(&self) -> bool {
        self.cursor < self.row_count()
    }

    fn bind(&mut self, start_column: usize) -> Result<(), BindError> {
        let binder = self
            .binder
            .as_ref()
            .expect("no binder attached to container binding");
        assert!(
            self.can_advance(),
            "bind called on a drained container binding; reset() first"
        );

        trace!(column = start_column, row = self.cursor, "binding batch row");
        let row = self.row(self.cursor);
        row.bind_value(start_column, &mut *binder.borrow_mut(), self.direction)?;
        self.cursor += 1;
        Ok(())
    }

    fn reset(&mut self) {
        if let Rows::Borrowed { source, snapshot } = &mut self.rows {
            let source = *source;
            *snapshot = source.rows().collect();
        }
        self.cursor = 0;
    }
}
