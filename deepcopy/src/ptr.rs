use alloc::rc::Rc;
use core::cell::{Ref, RefCell, RefMut};
use core::fmt;

use crate::Value;

/// A shared, mutable cell holding a [`Value`].
///
/// Cloning a `Ptr` clones the handle, not the target: both handles see the same
/// value. This is how a value graph expresses aliasing and cycles. Identity is
/// the address of the cell, see [`Ptr::ptr_eq`].
///
/// Cells that point back at themselves (directly or through other cells) are
/// never freed unless the cycle is broken by hand, like any `Rc` cycle.
#[derive(Clone)]
pub struct Ptr(Rc<RefCell<Value>>);

impl Ptr {
    /// Allocates a new cell holding `value`.
    pub fn new(value: impl Into<Value>) -> Self {
        Ptr(Rc::new(RefCell::new(value.into())))
    }

    /// Immutably borrows the target.
    ///
    /// # Panics
    ///
    /// Panics if the target is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, Value> {
        self.0.borrow()
    }

    /// Mutably borrows the target.
    ///
    /// # Panics
    ///
    /// Panics if the target is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, Value> {
        self.0.borrow_mut()
    }

    /// Stores `value` in the cell, dropping the previous target.
    pub fn set(&self, value: impl Into<Value>) {
        *self.0.borrow_mut() = value.into();
    }

    /// Stores `value` in the cell and returns the previous target.
    pub fn replace(&self, value: impl Into<Value>) -> Value {
        self.0.replace(value.into())
    }

    /// Returns `true` if both handles point at the same cell.
    pub fn ptr_eq(&self, other: &Ptr) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Address of the cell; stable for as long as any handle is alive.
    pub fn as_ptr(&self) -> *const () {
        Rc::as_ptr(&self.0).cast()
    }

    /// Number of handles to this cell.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }
}

// Only the address: printing the target would loop forever on cycles.
impl fmt::Debug for Ptr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ptr({:p})", self.as_ptr())
    }
}
