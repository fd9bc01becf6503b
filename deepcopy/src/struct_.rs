use alloc::rc::Rc;
use alloc::vec::Vec;

use crate::Value;

/// Whether code outside the defining module may write a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Readable and writable by anyone.
    Public,
    /// Part of the struct's shape, but not writable from the outside.
    ///
    /// Copies keep private fields at their zero value.
    Private,
}

/// A named field of a [`Struct`].
#[derive(Debug, Clone)]
pub struct Field {
    name: Rc<str>,
    visibility: Visibility,
    value: Value,
}

impl Field {
    /// A public field.
    pub fn public(name: impl Into<Rc<str>>, value: impl Into<Value>) -> Self {
        Self::new(name, Visibility::Public, value)
    }

    /// A private field.
    pub fn private(name: impl Into<Rc<str>>, value: impl Into<Value>) -> Self {
        Self::new(name, Visibility::Private, value)
    }

    /// A field with an explicit visibility.
    pub fn new(name: impl Into<Rc<str>>, visibility: Visibility, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            visibility,
            value: value.into(),
        }
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn name_rc(&self) -> &Rc<str> {
        &self.name
    }

    /// The field visibility.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns `true` if the field is public.
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    /// The field value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Mutable access to the field value.
    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }
}

/// A record: a type name and an ordered list of named fields.
///
/// ```
/// use deepcopy::{Struct, Value};
///
/// let point = Struct::new("Point").with_field("x", 1.5f64).with_field("y", -2.0f64);
/// assert_eq!(point.field("y"), Some(&Value::F64(-2.0)));
/// ```
#[derive(Debug, Clone)]
pub struct Struct {
    name: Rc<str>,
    fields: Vec<Field>,
}

impl Struct {
    /// An empty struct named `name`.
    pub fn new(name: impl Into<Rc<str>>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// A struct made of `fields`, in order.
    pub fn from_fields(name: impl Into<Rc<str>>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Appends a public field.
    pub fn with_field(mut self, name: impl Into<Rc<str>>, value: impl Into<Value>) -> Self {
        self.fields.push(Field::public(name, value));
        self
    }

    /// Appends a private field.
    pub fn with_private_field(mut self, name: impl Into<Rc<str>>, value: impl Into<Value>) -> Self {
        self.fields.push(Field::private(name, value));
        self
    }

    /// Appends `field`.
    pub fn push_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// The type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn name_rc(&self) -> &Rc<str> {
        &self.name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Value of the first field called `name`.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|f| f.name() == name)
            .map(Field::value)
    }

    /// Mutable value of the first field called `name`.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.fields
            .iter_mut()
            .find(|f| f.name() == name)
            .map(Field::value_mut)
    }

    /// The same struct with every field at its zero value.
    pub fn zeroed(&self) -> Self {
        Self {
            name: self.name.clone(),
            fields: self
                .fields
                .iter()
                .map(|f| Field {
                    name: f.name.clone(),
                    visibility: f.visibility,
                    value: f.value.zeroed(),
                })
                .collect(),
        }
    }
}
