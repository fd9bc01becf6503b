//! The dynamic [`Value`] type.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::{Chan, Func, Kind, Map, Ptr, Struct};

/// A runtime value of any shape.
///
/// A `Value` describes itself: [`Value::kind`] classifies it, and every
/// aggregate exposes its children. Mutable state is only ever shared through
/// [`Ptr`] cells, [`Func`] closures and [`Chan`] queues; everything else is
/// owned.
///
/// Equality is structural (see [`PartialEq`] below) and terminates on cyclic
/// graphs.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The absent value: no kind, no data.
    #[default]
    Nil,
    /// `bool`
    Bool(bool),
    /// `i8`
    I8(i8),
    /// `i16`
    I16(i16),
    /// `i32`
    I32(i32),
    /// `i64`
    I64(i64),
    /// `i128`
    I128(i128),
    /// `isize`
    Isize(isize),
    /// `u8`
    U8(u8),
    /// `u16`
    U16(u16),
    /// `u32`
    U32(u32),
    /// `u64`
    U64(u64),
    /// `u128`
    U128(u128),
    /// `usize`
    Usize(usize),
    /// `f32`
    F32(f32),
    /// `f64`
    F64(f64),
    /// `char`
    Char(char),
    /// Immutable text. Copies share the buffer.
    String(Rc<str>),
    /// Fixed-length sequence.
    Array(Box<[Value]>),
    /// Growable sequence.
    Slice(Vec<Value>),
    /// Key-value mapping.
    Map(Map),
    /// Shared mutable cell, or a nil pointer.
    Pointer(Option<Ptr>),
    /// Record with named fields.
    Struct(Struct),
    /// Box around a value of any kind, or an empty box.
    Interface(Option<Box<Value>>),
    /// Callable, or a nil func.
    Func(Option<Func>),
    /// Channel handle, or a nil channel.
    Chan(Option<Chan>),
    /// Raw, unmanaged address.
    RawPointer(usize),
}

impl Value {
    /// Classifies the value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Invalid,
            Value::Bool(_) => Kind::Bool,
            Value::I8(_) => Kind::I8,
            Value::I16(_) => Kind::I16,
            Value::I32(_) => Kind::I32,
            Value::I64(_) => Kind::I64,
            Value::I128(_) => Kind::I128,
            Value::Isize(_) => Kind::Isize,
            Value::U8(_) => Kind::U8,
            Value::U16(_) => Kind::U16,
            Value::U32(_) => Kind::U32,
            Value::U64(_) => Kind::U64,
            Value::U128(_) => Kind::U128,
            Value::Usize(_) => Kind::Usize,
            Value::F32(_) => Kind::F32,
            Value::F64(_) => Kind::F64,
            Value::Char(_) => Kind::Char,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Slice(_) => Kind::Slice,
            Value::Map(_) => Kind::Map,
            Value::Pointer(_) => Kind::Pointer,
            Value::Struct(_) => Kind::Struct,
            Value::Interface(_) => Kind::Interface,
            Value::Func(_) => Kind::Func,
            Value::Chan(_) => Kind::Chan,
            Value::RawPointer(_) => Kind::RawPointer,
        }
    }

    /// Returns `true` for [`Value::Nil`] and for nil pointers, interfaces,
    /// funcs and channels.
    pub fn is_nil(&self) -> bool {
        matches!(
            self,
            Value::Nil
                | Value::Pointer(None)
                | Value::Interface(None)
                | Value::Func(None)
                | Value::Chan(None)
        )
    }

    /// The zero value of this value's shape.
    ///
    /// Arrays keep their length and structs keep their fields; pointers,
    /// interfaces, funcs and channels become nil, slices and maps become empty.
    pub fn zeroed(&self) -> Value {
        match self {
            Value::Nil => Value::Nil,
            Value::Bool(_) => Value::Bool(false),
            Value::I8(_) => Value::I8(0),
            Value::I16(_) => Value::I16(0),
            Value::I32(_) => Value::I32(0),
            Value::I64(_) => Value::I64(0),
            Value::I128(_) => Value::I128(0),
            Value::Isize(_) => Value::Isize(0),
            Value::U8(_) => Value::U8(0),
            Value::U16(_) => Value::U16(0),
            Value::U32(_) => Value::U32(0),
            Value::U64(_) => Value::U64(0),
            Value::U128(_) => Value::U128(0),
            Value::Usize(_) => Value::Usize(0),
            Value::F32(_) => Value::F32(0.0),
            Value::F64(_) => Value::F64(0.0),
            Value::Char(_) => Value::Char('\0'),
            Value::String(_) => Value::String("".into()),
            Value::Array(items) => Value::Array(items.iter().map(Value::zeroed).collect()),
            Value::Slice(_) => Value::Slice(Vec::new()),
            Value::Map(_) => Value::Map(Map::new()),
            Value::Pointer(_) => Value::Pointer(None),
            Value::Struct(s) => Value::Struct(s.zeroed()),
            Value::Interface(_) => Value::Interface(None),
            Value::Func(_) => Value::Func(None),
            Value::Chan(_) => Value::Chan(None),
            Value::RawPointer(_) => Value::RawPointer(0),
        }
    }

    /// A pointer to a new cell holding `value`.
    pub fn pointer(value: impl Into<Value>) -> Value {
        Value::Pointer(Some(Ptr::new(value)))
    }

    /// A nil pointer.
    pub const fn nil_pointer() -> Value {
        Value::Pointer(None)
    }

    /// An interface holding `value`.
    pub fn boxed(value: impl Into<Value>) -> Value {
        Value::Interface(Some(Box::new(value.into())))
    }

    /// An interface holding nothing.
    pub const fn nil_interface() -> Value {
        Value::Interface(None)
    }

    /// A func wrapping `f`.
    pub fn func(name: impl Into<Rc<str>>, f: impl Fn(&[Value]) -> Value + 'static) -> Value {
        Value::Func(Some(Func::new(name, f)))
    }

    /// The boolean, if this is a `bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Any signed integer, or an unsigned one that fits, widened to `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::I8(v) => Some(v.into()),
            Value::I16(v) => Some(v.into()),
            Value::I32(v) => Some(v.into()),
            Value::I64(v) => Some(v),
            Value::I128(v) => v.try_into().ok(),
            Value::Isize(v) => v.try_into().ok(),
            Value::U8(v) => Some(v.into()),
            Value::U16(v) => Some(v.into()),
            Value::U32(v) => Some(v.into()),
            Value::U64(v) => v.try_into().ok(),
            Value::U128(v) => v.try_into().ok(),
            Value::Usize(v) => v.try_into().ok(),
            _ => None,
        }
    }

    /// Any unsigned integer, or a non-negative signed one, widened to `u64`.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Value::U8(v) => Some(v.into()),
            Value::U16(v) => Some(v.into()),
            Value::U32(v) => Some(v.into()),
            Value::U64(v) => Some(v),
            Value::U128(v) => v.try_into().ok(),
            Value::Usize(v) => v.try_into().ok(),
            Value::I8(v) => v.try_into().ok(),
            Value::I16(v) => v.try_into().ok(),
            Value::I32(v) => v.try_into().ok(),
            Value::I64(v) => v.try_into().ok(),
            Value::I128(v) => v.try_into().ok(),
            Value::Isize(v) => v.try_into().ok(),
            _ => None,
        }
    }

    /// Either float, widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::F32(v) => Some(v.into()),
            Value::F64(v) => Some(v),
            _ => None,
        }
    }

    /// The text, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The cell, if this is a non-nil pointer.
    pub fn as_pointer(&self) -> Option<&Ptr> {
        match self {
            Value::Pointer(p) => p.as_ref(),
            _ => None,
        }
    }

    /// The struct, if this is one.
    pub fn as_struct(&self) -> Option<&Struct> {
        match self {
            Value::Struct(s) => Some(s),
            _ => None,
        }
    }

    /// The elements, if this is a slice.
    pub fn as_slice(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Slice(items) => Some(items),
            _ => None,
        }
    }

    /// The elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The map, if this is one.
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// The held value, if this is a non-empty interface.
    pub fn as_interface(&self) -> Option<&Value> {
        match self {
            Value::Interface(inner) => inner.as_deref(),
            _ => None,
        }
    }
}

macro_rules! impl_value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_value_from! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    char => Char,
    Rc<str> => String,
    Map => Map,
    Struct => Struct,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v.into())
    }
}

impl From<Ptr> for Value {
    fn from(v: Ptr) -> Self {
        Value::Pointer(Some(v))
    }
}

impl From<Func> for Value {
    fn from(v: Func) -> Self {
        Value::Func(Some(v))
    }
}

impl From<Chan> for Value {
    fn from(v: Chan) -> Self {
        Value::Chan(Some(v))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Slice(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Slice(iter.into_iter().map(Into::into).collect())
    }
}
