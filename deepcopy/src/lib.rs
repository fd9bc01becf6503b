#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod tracing_macros;

mod kind;
pub use kind::{Category, Kind};

mod value;
pub use value::Value;

mod ptr;
pub use ptr::Ptr;

mod struct_;
pub use struct_::{Field, Struct, Visibility};

mod map;
pub use map::{Key, Map};

mod opaque;
pub use opaque::{Chan, Func};

mod path;
pub use path::{Path, PathStep};

mod error;
pub use error::CopyError;

mod copy;

mod eq;
mod format;

/// Copies `value` and everything reachable from it.
///
/// The copy shares no [`Ptr`] cell with `value`, but mirrors its aliasing:
/// cells reached more than once in the source are one cell in the copy, and
/// cycles stay cycles.
///
/// Fails with [`CopyError::UnsupportedKind`] if a func, channel or raw pointer
/// is reachable from `value` through anything other than a private struct
/// field. No partial copy is ever returned.
///
/// ```
/// use deepcopy::{Map, Value, anything};
///
/// let original = Value::from(Map::new().with("foo", Value::pointer(1i32)));
/// let copy = anything(&original).unwrap();
/// assert_eq!(copy, original);
///
/// let a = original.as_map().unwrap().get("foo").unwrap().as_pointer().unwrap();
/// let b = copy.as_map().unwrap().get("foo").unwrap().as_pointer().unwrap();
/// assert!(!a.ptr_eq(b));
/// ```
pub fn anything(value: &Value) -> Result<Value, CopyError> {
    let mut cx = copy::CopyContext::new();
    let result = copy::copy_value(value, &mut cx);
    if let Err(_err) = &result {
        tracing_macros::debug!(err = %_err, "copy failed");
    }
    result
}

/// Copies `value` like [`anything`], panicking if it cannot be copied.
///
/// For callers that treat an uncopyable value as a programming error.
///
/// ```
/// use deepcopy::{Value, must_anything};
///
/// let names = Value::from(vec!["Phil Harris", "Dennis Day"]);
/// assert_eq!(must_anything(&names).to_string(), "[Phil Harris Dennis Day]");
/// ```
///
/// # Panics
///
/// Panics with the [`CopyError`] message if [`anything`] fails.
#[track_caller]
pub fn must_anything(value: &Value) -> Value {
    match anything(value) {
        Ok(copy) => copy,
        Err(err) => panic!("deepcopy: {err}"),
    }
}
