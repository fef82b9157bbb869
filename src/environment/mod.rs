//! Variable bindings.
//!
//! A `Scope` is a flat map from name to `Variable`. A child scope starts as a
//! copy of its parent's map, so names added to one never show up in the
//! other, while both still hold the very same cells. Writing through a cell
//! (`->>`) is therefore seen by every scope and closure holding it, whereas
//! rebinding a name (`->`) installs a fresh cell and leaves earlier holders
//! untouched.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::Value;

/// A shared, mutable cell holding the values bound to a name. Clone is a
/// shallow copy.
#[derive(Debug, Clone, Default)]
pub struct Variable {
	inner: Rc<RefCell<Vec<Value>>>,
}

impl Variable {
	pub fn new(values: Vec<Value>) -> Self { Self { inner: Rc::new(RefCell::new(values)) } }

	/// A copy of the values currently held.
	pub fn values(&self) -> Vec<Value> { self.inner.borrow().clone() }

	/// Replace the contents in place, keeping the cell's identity.
	pub fn replace(&self, values: Vec<Value>) { *self.inner.borrow_mut() = values; }

	/// Whether both handles refer to the same cell.
	pub fn same_cell(&self, other: &Self) -> bool { Rc::ptr_eq(&self.inner, &other.inner) }
}

#[derive(Debug, Clone, Default)]
pub struct Scope {
	variables: HashMap<String, Variable>,
}

impl Scope {
	pub fn new() -> Self { Self::default() }

	/// A new scope starting with the same bindings, sharing their cells.
	pub fn child(&self) -> Self { self.clone() }

	/// Bind `name` to a fresh cell, shadowing any previous binding.
	pub fn define(&mut self, name: &str, values: Vec<Value>) {
		self.variables.insert(name.to_string(), Variable::new(values));
	}

	pub fn get(&self, name: &str) -> Option<&Variable> { self.variables.get(name) }
}
