//! The recursive copy engine.
//!
//! [`copy_value`] classifies a value by [`Kind`] and hands it to the copier
//! registered for that kind in [`COPIERS`]. Kinds without a copier (funcs,
//! channels, raw pointers) are rejected. Copiers allocate a fresh container
//! and copy each child back through [`copy_value`], threading one
//! [`CopyContext`] through the whole recursion.
//!
//! # Aliasing and cycles
//!
//! The context maps the address of every source [`Ptr`] seen so far to the
//! cell created for it in the copy. A pointer copier registers the new cell
//! *before* copying the target, so a target that leads back to the same cell
//! finds the registered copy instead of recursing forever. As a result, two
//! pointers sharing a cell in the source share a cell in the copy, and a cell
//! pointing at itself is copied to a cell pointing at itself.

use std::collections::HashMap;

use crate::tracing_macros::{debug, trace};
use crate::{CopyError, Field, Kind, Map, Path, PathStep, Ptr, Struct, Value, Visibility};

/// A copier: copies one shape of value, recursing through [`copy_value`].
pub(crate) type Copier = fn(&Value, &mut CopyContext) -> Result<Value, CopyError>;

/// The dispatch table. Kinds that are not listed are not copyable.
pub(crate) static COPIERS: &[(Kind, Copier)] = &[
    (Kind::Bool, copy_scalar),
    (Kind::I8, copy_scalar),
    (Kind::I16, copy_scalar),
    (Kind::I32, copy_scalar),
    (Kind::I64, copy_scalar),
    (Kind::I128, copy_scalar),
    (Kind::Isize, copy_scalar),
    (Kind::U8, copy_scalar),
    (Kind::U16, copy_scalar),
    (Kind::U32, copy_scalar),
    (Kind::U64, copy_scalar),
    (Kind::U128, copy_scalar),
    (Kind::Usize, copy_scalar),
    (Kind::F32, copy_scalar),
    (Kind::F64, copy_scalar),
    (Kind::Char, copy_scalar),
    (Kind::String, copy_scalar),
    (Kind::Array, copy_array),
    (Kind::Slice, copy_slice),
    (Kind::Map, copy_map),
    (Kind::Pointer, copy_pointer),
    (Kind::Struct, copy_struct),
    (Kind::Interface, copy_interface),
];

/// Looks up the copier registered for `kind`.
pub(crate) fn copier_for(kind: Kind) -> Option<Copier> {
    COPIERS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, copier)| *copier)
}

/// State of one top-level copy.
///
/// Created by [`anything`](crate::anything), dropped when it returns.
#[derive(Default)]
pub(crate) struct CopyContext {
    /// Source cell address → the cell created for it in the copy.
    aliases: HashMap<*const (), Ptr>,
    /// Location of the value being copied.
    path: Path,
}

impl CopyContext {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Copies `value` one step below the current location.
    fn copy_child(&mut self, step: PathStep, value: &Value) -> Result<Value, CopyError> {
        self.path.push(step);
        let copied = copy_value(value, self)?;
        self.path.pop();
        Ok(copied)
    }

    fn mismatch(&self, expected: &'static str, value: &Value) -> CopyError {
        CopyError::TypeMismatch {
            expected,
            found: value.kind(),
            path: self.path.clone(),
        }
    }
}

/// Copies `value` and everything reachable from it.
pub(crate) fn copy_value(value: &Value, cx: &mut CopyContext) -> Result<Value, CopyError> {
    let kind = value.kind();
    if kind == Kind::Invalid {
        return Ok(Value::Nil);
    }

    trace!(%kind, path = %cx.path, "copying");
    match copier_for(kind) {
        Some(copier) => copier(value, cx),
        None => Err(CopyError::UnsupportedKind {
            kind,
            path: cx.path.clone(),
        }),
    }
}

/// Leaves have no children: a clone is a copy. Strings share their immutable
/// buffer.
fn copy_scalar(value: &Value, cx: &mut CopyContext) -> Result<Value, CopyError> {
    if !value.kind().is_leaf() {
        return Err(cx.mismatch("scalar", value));
    }
    Ok(value.clone())
}

fn copy_pointer(value: &Value, cx: &mut CopyContext) -> Result<Value, CopyError> {
    let Value::Pointer(ptr) = value else {
        return Err(cx.mismatch("pointer", value));
    };
    let Some(src) = ptr else {
        return Ok(Value::Pointer(None));
    };

    if let Some(dst) = cx.aliases.get(&src.as_ptr()) {
        trace!(path = %cx.path, "pointer already copied, reusing");
        return Ok(Value::Pointer(Some(dst.clone())));
    }

    // Register before recursing: the target may lead back here.
    let dst = Ptr::new(Value::Nil);
    cx.aliases.insert(src.as_ptr(), dst.clone());

    let target = cx.copy_child(PathStep::Deref, &src.borrow())?;
    dst.set(target);
    Ok(Value::Pointer(Some(dst)))
}

fn copy_struct(value: &Value, cx: &mut CopyContext) -> Result<Value, CopyError> {
    let Value::Struct(src) = value else {
        return Err(cx.mismatch("struct", value));
    };

    let mut fields = Vec::with_capacity(src.fields().len());
    for field in src.fields() {
        let copied = match field.visibility() {
            Visibility::Public => {
                cx.copy_child(PathStep::Field(field.name_rc().clone()), field.value())?
            }
            Visibility::Private => {
                debug!(
                    ty = src.name(),
                    field = field.name(),
                    "private field left at its zero value"
                );
                field.value().zeroed()
            }
        };
        fields.push(Field::new(field.name_rc().clone(), field.visibility(), copied));
    }

    Ok(Value::Struct(Struct::from_fields(src.name_rc().clone(), fields)))
}

fn copy_array(value: &Value, cx: &mut CopyContext) -> Result<Value, CopyError> {
    let Value::Array(items) = value else {
        return Err(cx.mismatch("array", value));
    };

    let mut copied = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        copied.push(cx.copy_child(PathStep::Index(i), item)?);
    }
    Ok(Value::Array(copied.into_boxed_slice()))
}

fn copy_slice(value: &Value, cx: &mut CopyContext) -> Result<Value, CopyError> {
    let Value::Slice(items) = value else {
        return Err(cx.mismatch("slice", value));
    };

    let mut copied = Vec::with_capacity(items.capacity());
    for (i, item) in items.iter().enumerate() {
        copied.push(cx.copy_child(PathStep::Index(i), item)?);
    }
    Ok(Value::Slice(copied))
}

/// Keys are leaves: they are cloned, not copied through the engine.
fn copy_map(value: &Value, cx: &mut CopyContext) -> Result<Value, CopyError> {
    let Value::Map(src) = value else {
        return Err(cx.mismatch("map", value));
    };

    let mut copied = Map::with_capacity(src.len());
    for (key, item) in src {
        let item = cx.copy_child(PathStep::MapValue(key.clone()), item)?;
        copied.insert(key.clone(), item);
    }
    Ok(Value::Map(copied))
}

fn copy_interface(value: &Value, cx: &mut CopyContext) -> Result<Value, CopyError> {
    let Value::Interface(inner) = value else {
        return Err(cx.mismatch("interface", value));
    };
    let Some(inner) = inner else {
        return Ok(Value::Interface(None));
    };

    let copied = cx.copy_child(PathStep::Unbox, inner)?;
    Ok(Value::boxed(copied))
}
