//! `Display` for values, in the style of Go's `%v` verb.
//!
//! | value              | rendering              |
//! |--------------------|------------------------|
//! | nil anything       | `<nil>`                |
//! | string             | the text, unquoted     |
//! | array / slice      | `[a b c]`              |
//! | map                | `map[k:v k2:v2]`       |
//! | struct             | `{a b}`                |
//! | pointer            | `&` then the target    |
//! | pointer in a cycle | `&<cycle>`             |
//! | func               | `func(name)`           |

use core::fmt::{self, Display, Formatter};

use crate::{Ptr, Value};

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut stack = Vec::new();
        write_value(f, self, &mut stack)
    }
}

/// `stack` holds the cells currently being printed, so cycles print once.
fn write_value(f: &mut Formatter<'_>, value: &Value, stack: &mut Vec<*const ()>) -> fmt::Result {
    match value {
        Value::Nil => f.write_str("<nil>"),
        Value::Bool(v) => write!(f, "{v}"),
        Value::I8(v) => write!(f, "{v}"),
        Value::I16(v) => write!(f, "{v}"),
        Value::I32(v) => write!(f, "{v}"),
        Value::I64(v) => write!(f, "{v}"),
        Value::I128(v) => write!(f, "{v}"),
        Value::Isize(v) => write!(f, "{v}"),
        Value::U8(v) => write!(f, "{v}"),
        Value::U16(v) => write!(f, "{v}"),
        Value::U32(v) => write!(f, "{v}"),
        Value::U64(v) => write!(f, "{v}"),
        Value::U128(v) => write!(f, "{v}"),
        Value::Usize(v) => write!(f, "{v}"),
        Value::F32(v) => write!(f, "{v}"),
        Value::F64(v) => write!(f, "{v}"),
        Value::Char(v) => write!(f, "{v}"),
        Value::String(v) => f.write_str(v),
        Value::Array(items) => write_seq(f, items, stack),
        Value::Slice(items) => write_seq(f, items, stack),
        Value::Map(map) => {
            f.write_str("map[")?;
            for (i, (k, v)) in map.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                match k.as_str() {
                    Some(s) => f.write_str(s)?,
                    None => write!(f, "{k}")?,
                }
                f.write_str(":")?;
                write_value(f, v, stack)?;
            }
            f.write_str("]")
        }
        Value::Pointer(None) | Value::Interface(None) | Value::Func(None) | Value::Chan(None) => {
            f.write_str("<nil>")
        }
        Value::Pointer(Some(ptr)) => write_pointer(f, ptr, stack),
        Value::Struct(s) => {
            f.write_str("{")?;
            for (i, field) in s.fields().iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write_value(f, field.value(), stack)?;
            }
            f.write_str("}")
        }
        Value::Interface(Some(inner)) => write_value(f, inner, stack),
        Value::Func(Some(func)) => write!(f, "func({})", func.name()),
        Value::Chan(Some(chan)) => write!(f, "chan(len={})", chan.len()),
        Value::RawPointer(addr) => write!(f, "{addr:#x}"),
    }
}

fn write_seq(f: &mut Formatter<'_>, items: &[Value], stack: &mut Vec<*const ()>) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write_value(f, item, stack)?;
    }
    f.write_str("]")
}

fn write_pointer(f: &mut Formatter<'_>, ptr: &Ptr, stack: &mut Vec<*const ()>) -> fmt::Result {
    let addr = ptr.as_ptr();
    if stack.contains(&addr) {
        return f.write_str("&<cycle>");
    }
    f.write_str("&")?;
    stack.push(addr);
    let result = write_value(f, &ptr.borrow(), stack);
    stack.pop();
    result
}
