//! Shape classification for [`Value`](crate::Value)s.
//!
//! Every value has exactly one [`Kind`], and every kind belongs to exactly one
//! [`Category`]. The copy engine dispatches on the kind; the category is what
//! decides whether a kind can be copied at all.

use core::fmt;

/// The concrete shape of a [`Value`](crate::Value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// The absent value, [`Value::Nil`](crate::Value::Nil).
    Invalid,
    /// `bool`
    Bool,
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `i128`
    I128,
    /// `isize`
    Isize,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `u128`
    U128,
    /// `usize`
    Usize,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// `char`
    Char,
    /// Immutable UTF-8 text
    String,
    /// Fixed-length sequence
    Array,
    /// Growable sequence
    Slice,
    /// Key-value mapping
    Map,
    /// Shared mutable cell, see [`Ptr`](crate::Ptr)
    Pointer,
    /// Record with named fields
    Struct,
    /// Box holding a value of any kind
    Interface,
    /// Callable
    Func,
    /// Channel handle
    Chan,
    /// Raw, unmanaged address
    RawPointer,
}

/// The copy strategy a [`Kind`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// The absent value; copies to itself.
    Absent,
    /// No internal references: copied by value.
    Leaf,
    /// Single-slot indirection to another value.
    Reference,
    /// Record with a fixed set of named fields.
    FixedAggregate,
    /// Ordered sequence of elements.
    OrderedAggregate,
    /// Mapping from keys to values.
    AssociativeAggregate,
    /// Box around a value whose kind is only known at runtime.
    Boxed,
    /// Runtime entities that are not data, never copied.
    Unsupported,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 27] = [
        Kind::Invalid,
        Kind::Bool,
        Kind::I8,
        Kind::I16,
        Kind::I32,
        Kind::I64,
        Kind::I128,
        Kind::Isize,
        Kind::U8,
        Kind::U16,
        Kind::U32,
        Kind::U64,
        Kind::U128,
        Kind::Usize,
        Kind::F32,
        Kind::F64,
        Kind::Char,
        Kind::String,
        Kind::Array,
        Kind::Slice,
        Kind::Map,
        Kind::Pointer,
        Kind::Struct,
        Kind::Interface,
        Kind::Func,
        Kind::Chan,
        Kind::RawPointer,
    ];

    /// Returns the category this kind belongs to.
    pub const fn category(self) -> Category {
        match self {
            Kind::Invalid => Category::Absent,
            Kind::Bool
            | Kind::I8
            | Kind::I16
            | Kind::I32
            | Kind::I64
            | Kind::I128
            | Kind::Isize
            | Kind::U8
            | Kind::U16
            | Kind::U32
            | Kind::U64
            | Kind::U128
            | Kind::Usize
            | Kind::F32
            | Kind::F64
            | Kind::Char
            | Kind::String => Category::Leaf,
            Kind::Pointer => Category::Reference,
            Kind::Struct => Category::FixedAggregate,
            Kind::Array | Kind::Slice => Category::OrderedAggregate,
            Kind::Map => Category::AssociativeAggregate,
            Kind::Interface => Category::Boxed,
            Kind::Func | Kind::Chan | Kind::RawPointer => Category::Unsupported,
        }
    }

    /// Returns `true` for kinds that are copied by value.
    pub const fn is_leaf(self) -> bool {
        matches!(self.category(), Category::Leaf)
    }

    /// Lower-case name of the kind, as used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Invalid => "invalid",
            Kind::Bool => "bool",
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::I128 => "i128",
            Kind::Isize => "isize",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::U128 => "u128",
            Kind::Usize => "usize",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::Char => "char",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Slice => "slice",
            Kind::Map => "map",
            Kind::Pointer => "pointer",
            Kind::Struct => "struct",
            Kind::Interface => "interface",
            Kind::Func => "func",
            Kind::Chan => "chan",
            Kind::RawPointer => "rawptr",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Absent => "absent",
            Category::Leaf => "leaf",
            Category::Reference => "reference",
            Category::FixedAggregate => "fixed aggregate",
            Category::OrderedAggregate => "ordered aggregate",
            Category::AssociativeAggregate => "associative aggregate",
            Category::Boxed => "boxed",
            Category::Unsupported => "unsupported",
        })
    }
}
