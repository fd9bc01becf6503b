//! Structural equality for value graphs.
//!
//! Two values are equal when they have the same kind and their contents are
//! equal, recursively. Pointers compare by target, so a value and its deep copy
//! are equal even though they share no cells. Funcs and channels compare by
//! identity.
//!
//! Cycles are handled the way `reflect.DeepEqual`-style comparisons do it: a
//! pair of cells already under comparison is assumed equal when reached again.

use std::collections::HashSet;

use crate::{Map, Ptr, Struct, Value};

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        let mut visited = HashSet::new();
        deep_eq(self, other, &mut visited)
    }
}

fn deep_eq(a: &Value, b: &Value, visited: &mut HashSet<(*const (), *const ())>) -> bool {
    match (a, b) {
        (Value::Nil, Value::Nil) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::I8(x), Value::I8(y)) => x == y,
        (Value::I16(x), Value::I16(y)) => x == y,
        (Value::I32(x), Value::I32(y)) => x == y,
        (Value::I64(x), Value::I64(y)) => x == y,
        (Value::I128(x), Value::I128(y)) => x == y,
        (Value::Isize(x), Value::Isize(y)) => x == y,
        (Value::U8(x), Value::U8(y)) => x == y,
        (Value::U16(x), Value::U16(y)) => x == y,
        (Value::U32(x), Value::U32(y)) => x == y,
        (Value::U64(x), Value::U64(y)) => x == y,
        (Value::U128(x), Value::U128(y)) => x == y,
        (Value::Usize(x), Value::Usize(y)) => x == y,
        (Value::F32(x), Value::F32(y)) => x == y,
        (Value::F64(x), Value::F64(y)) => x == y,
        (Value::Char(x), Value::Char(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => seq_eq(x, y, visited),
        (Value::Slice(x), Value::Slice(y)) => seq_eq(x, y, visited),
        (Value::Map(x), Value::Map(y)) => map_eq(x, y, visited),
        (Value::Pointer(x), Value::Pointer(y)) => match (x, y) {
            (None, None) => true,
            (Some(x), Some(y)) => ptr_eq(x, y, visited),
            _ => false,
        },
        (Value::Struct(x), Value::Struct(y)) => struct_eq(x, y, visited),
        (Value::Interface(x), Value::Interface(y)) => match (x, y) {
            (None, None) => true,
            (Some(x), Some(y)) => deep_eq(x, y, visited),
            _ => false,
        },
        (Value::Func(x), Value::Func(y)) => match (x, y) {
            (None, None) => true,
            (Some(x), Some(y)) => x.ptr_eq(y),
            _ => false,
        },
        (Value::Chan(x), Value::Chan(y)) => match (x, y) {
            (None, None) => true,
            (Some(x), Some(y)) => x.ptr_eq(y),
            _ => false,
        },
        (Value::RawPointer(x), Value::RawPointer(y)) => x == y,
        _ => false,
    }
}

fn seq_eq(a: &[Value], b: &[Value], visited: &mut HashSet<(*const (), *const ())>) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| deep_eq(x, y, visited))
}

// Order-insensitive, like the maps it compares.
fn map_eq(a: &Map, b: &Map, visited: &mut HashSet<(*const (), *const ())>) -> bool {
    a.len() == b.len()
        && a.iter().all(|(k, x)| match b.get(k.clone()) {
            Some(y) => deep_eq(x, y, visited),
            None => false,
        })
}

fn struct_eq(a: &Struct, b: &Struct, visited: &mut HashSet<(*const (), *const ())>) -> bool {
    a.name() == b.name()
        && a.fields().len() == b.fields().len()
        && a.fields().iter().zip(b.fields()).all(|(x, y)| {
            x.name() == y.name()
                && x.visibility() == y.visibility()
                && deep_eq(x.value(), y.value(), visited)
        })
}

fn ptr_eq(a: &Ptr, b: &Ptr, visited: &mut HashSet<(*const (), *const ())>) -> bool {
    if a.ptr_eq(b) {
        return true;
    }
    if !visited.insert((a.as_ptr(), b.as_ptr())) {
        return true;
    }
    deep_eq(&a.borrow(), &b.borrow(), visited)
}
