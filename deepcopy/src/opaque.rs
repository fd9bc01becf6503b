//! Runtime entities that live inside value graphs but are not data.
//!
//! Values of these kinds are never copied: the engine rejects them with
//! [`CopyError::UnsupportedKind`](crate::CopyError::UnsupportedKind).

use alloc::collections::VecDeque;
use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use crate::Value;

/// A named callable.
#[derive(Clone)]
pub struct Func {
    name: Rc<str>,
    call: Rc<dyn Fn(&[Value]) -> Value>,
}

impl Func {
    /// Wraps `f` under `name`.
    pub fn new(name: impl Into<Rc<str>>, f: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Self {
            name: name.into(),
            call: Rc::new(f),
        }
    }

    /// The name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the callable.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.call)(args)
    }

    /// Returns `true` if both handles wrap the same closure.
    pub fn ptr_eq(&self, other: &Func) -> bool {
        Rc::ptr_eq(&self.call, &other.call)
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Func").field(&self.name).finish()
    }
}

/// A handle to an unbounded FIFO queue of values.
///
/// Clones share the queue.
#[derive(Clone, Default)]
pub struct Chan(Rc<RefCell<VecDeque<Value>>>);

impl Chan {
    /// A new, empty channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues `value`.
    pub fn send(&self, value: impl Into<Value>) {
        self.0.borrow_mut().push_back(value.into());
    }

    /// Dequeues the oldest value, if any.
    pub fn recv(&self) -> Option<Value> {
        self.0.borrow_mut().pop_front()
    }

    /// Number of queued values.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Returns `true` if both handles share the same queue.
    pub fn ptr_eq(&self, other: &Chan) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Chan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chan({:p})", Rc::as_ptr(&self.0))
    }
}
