use alloc::rc::Rc;
use alloc::string::String;
use core::fmt;

use indexmap::IndexMap;

use crate::{Kind, Value};

/// A map key: the hashable subset of leaf values.
///
/// Keys are leaves, so copying a map clones its keys instead of copying them
/// through the engine, and lookups in the copy behave exactly as in the source.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// `bool` key
    Bool(bool),
    /// `i8` key
    I8(i8),
    /// `i16` key
    I16(i16),
    /// `i32` key
    I32(i32),
    /// `i64` key
    I64(i64),
    /// `i128` key
    I128(i128),
    /// `isize` key
    Isize(isize),
    /// `u8` key
    U8(u8),
    /// `u16` key
    U16(u16),
    /// `u32` key
    U32(u32),
    /// `u64` key
    U64(u64),
    /// `u128` key
    U128(u128),
    /// `usize` key
    Usize(usize),
    /// `char` key
    Char(char),
    /// text key
    String(Rc<str>),
}

impl Key {
    /// The kind of value this key holds.
    pub fn kind(&self) -> Kind {
        match self {
            Key::Bool(_) => Kind::Bool,
            Key::I8(_) => Kind::I8,
            Key::I16(_) => Kind::I16,
            Key::I32(_) => Kind::I32,
            Key::I64(_) => Kind::I64,
            Key::I128(_) => Kind::I128,
            Key::Isize(_) => Kind::Isize,
            Key::U8(_) => Kind::U8,
            Key::U16(_) => Kind::U16,
            Key::U32(_) => Kind::U32,
            Key::U64(_) => Kind::U64,
            Key::U128(_) => Kind::U128,
            Key::Usize(_) => Kind::Usize,
            Key::Char(_) => Kind::Char,
            Key::String(_) => Kind::String,
        }
    }

    /// The key as a text slice, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::String(s) => Some(s),
            _ => None,
        }
    }
}

macro_rules! impl_key_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Key {
                fn from(v: $ty) -> Self {
                    Key::$variant(v)
                }
            }
        )*
    };
}

impl_key_from! {
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
    char => Char,
    Rc<str> => String,
}

impl From<&str> for Key {
    fn from(v: &str) -> Self {
        Key::String(v.into())
    }
}

impl From<String> for Key {
    fn from(v: String) -> Self {
        Key::String(v.into())
    }
}

/// Strings render quoted, everything else bare.
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Bool(v) => write!(f, "{v}"),
            Key::I8(v) => write!(f, "{v}"),
            Key::I16(v) => write!(f, "{v}"),
            Key::I32(v) => write!(f, "{v}"),
            Key::I64(v) => write!(f, "{v}"),
            Key::I128(v) => write!(f, "{v}"),
            Key::Isize(v) => write!(f, "{v}"),
            Key::U8(v) => write!(f, "{v}"),
            Key::U16(v) => write!(f, "{v}"),
            Key::U32(v) => write!(f, "{v}"),
            Key::U64(v) => write!(f, "{v}"),
            Key::U128(v) => write!(f, "{v}"),
            Key::Usize(v) => write!(f, "{v}"),
            Key::Char(v) => write!(f, "{v:?}"),
            Key::String(v) => write!(f, "{:?}", &**v),
        }
    }
}

/// A mapping from [`Key`]s to [`Value`]s that remembers insertion order.
#[derive(Debug, Clone, Default)]
pub struct Map {
    entries: IndexMap<Key, Value>,
}

impl Map {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Inserts an entry, returning the value previously stored under `key`.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Builder-style [`Map::insert`].
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// The value stored under `key`.
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.entries.get(&key.into())
    }

    /// Mutable access to the value stored under `key`.
    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut Value> {
        self.entries.get_mut(&key.into())
    }

    /// Removes `key`, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        self.entries.shift_remove(&key.into())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries the map can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.entries.iter()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.entries.keys()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
