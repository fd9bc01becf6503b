//! Locations inside a value graph.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use crate::Key;

/// A single step from a value to one of its children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    /// Navigate to a struct field by name
    Field(Rc<str>),
    /// Navigate to an array or slice element by index
    Index(usize),
    /// Navigate to the value stored under a map key
    MapValue(Key),
    /// Navigate through a pointer to its target
    Deref,
    /// Navigate into the value held by an interface
    Unbox,
}

/// A path from the root of a copy to one of its values, recorded as a series
/// of steps.
///
/// Rendered as `$` for the root followed by each step:
/// `.name` for fields, `[3]` for elements, `["key"]` for map values, `.*`
/// through pointers and `.(dyn)` into interfaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    /// Create a new empty path.
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Push a step onto the path.
    pub fn push(&mut self, step: PathStep) {
        self.steps.push(step);
    }

    /// Pop the last step from the path.
    pub fn pop(&mut self) -> Option<PathStep> {
        self.steps.pop()
    }

    /// Get the steps in this path.
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Get the length of this path.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if this path is empty, i.e. points at the root.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for step in &self.steps {
            match step {
                PathStep::Field(name) => write!(f, ".{name}")?,
                PathStep::Index(i) => write!(f, "[{i}]")?,
                PathStep::MapValue(key) => write!(f, "[{key}]")?,
                PathStep::Deref => f.write_str(".*")?,
                PathStep::Unbox => f.write_str(".(dyn)")?,
            }
        }
        Ok(())
    }
}

impl FromIterator<PathStep> for Path {
    fn from_iter<I: IntoIterator<Item = PathStep>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}
