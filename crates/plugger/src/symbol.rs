//! Exported plugin symbols.

use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

/// A capability declared by a plugin.
#[derive(Clone)]
pub enum Symbol {
	/// Plain value, named after its pointee type when held behind
	/// `Box`, `Arc` or `&'static`; skipped otherwise.
	Value(SymbolValue),
	/// Value registered under an explicit name. Empty names are skipped.
	Named { name: String, value: SymbolValue },
	/// Function value with its declared identifier path.
	Function { path: &'static str, value: SymbolValue },
}

impl Symbol {
	pub fn value<T: Any + Send + Sync>(value: T) -> Self {
		Self::Value(SymbolValue::new(value))
	}

	pub fn named<T: Any + Send + Sync>(name: impl Into<String>, value: T) -> Self {
		Self::Named {
			name: name.into(),
			value: SymbolValue::new(value),
		}
	}

	/// Function symbol; prefer the [`func!`](crate::func) macro, which fills
	/// in `path` from the function's identifier.
	pub fn function<T: Any + Send + Sync>(path: &'static str, value: T) -> Self {
		Self::Function {
			path,
			value: SymbolValue::new(value),
		}
	}

	/// Lookup name and kind of the symbol.
	pub(crate) fn resolve(self) -> Resolved {
		match self {
			Symbol::Named { name, value } if !name.is_empty() => Resolved::Named(name, SymbolKind::Value, value),
			Symbol::Named { value, .. } => Resolved::Anonymous(value),
			Symbol::Function { path, value } => match function_name(path) {
				Some(name) => Resolved::Named(name.to_string(), SymbolKind::Function, value),
				None => Resolved::UnnamedFunction(value),
			},
			Symbol::Value(value) => match pointee_name(value.type_name()) {
				Some(name) => Resolved::Named(name.to_string(), SymbolKind::Value, value),
				None => Resolved::Anonymous(value),
			},
		}
	}
}

/// Outcome of [`Symbol::resolve`].
#[derive(Debug)]
pub(crate) enum Resolved {
	Named(String, SymbolKind, SymbolValue),
	/// Function without a usable identifier, such as a closure.
	UnnamedFunction(SymbolValue),
	Anonymous(SymbolValue),
}

impl fmt::Debug for Symbol {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Symbol::Value(value) => f.debug_tuple("Value").field(value).finish(),
			Symbol::Named { name, value } => f
				.debug_struct("Named")
				.field("name", name)
				.field("value", value)
				.finish(),
			Symbol::Function { path, value } => f
				.debug_struct("Function")
				.field("path", path)
				.field("value", value)
				.finish(),
		}
	}
}

/// Whether a table entry takes part in prefix queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
	Function,
	Value,
}

/// Type-erased, cheaply clonable symbol value.
#[derive(Clone)]
pub struct SymbolValue {
	value: Arc<dyn Any + Send + Sync>,
	type_name: &'static str,
}

impl SymbolValue {
	pub fn new<T: Any + Send + Sync>(value: T) -> Self {
		Self {
			value: Arc::new(value),
			type_name: type_name::<T>(),
		}
	}

	/// Rust type name of the stored value, as reported by [`type_name`].
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	pub fn is<T: Any>(&self) -> bool {
		self.value.is::<T>()
	}

	pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
		self.value.downcast_ref::<T>()
	}

	/// Clones the value out if it has type `T`.
	pub fn downcast<T: Any + Clone>(&self) -> Option<T> {
		self.downcast_ref::<T>().cloned()
	}

	/// Whether both handles share the same allocation.
	pub fn ptr_eq(&self, other: &SymbolValue) -> bool {
		Arc::ptr_eq(&self.value, &other.value)
	}
}

impl fmt::Debug for SymbolValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "SymbolValue<{}>", self.type_name)
	}
}

/// Bare identifier of a function path: `plugins::foo::do_it::<u8>` -> `do_it`.
pub(crate) fn function_name(path: &str) -> Option<&str> {
	let path = path.split('<').next().unwrap_or_default();
	let name = path.trim_end_matches(&[':', ' '][..]).rsplit("::").next()?.trim();
	is_identifier(name).then_some(name)
}

/// Bare pointee type name for pointer-held values.
///
/// `alloc::sync::Arc<app::Loo>` -> `Loo`; by-value types, generic pointees,
/// trait objects and primitives have no derivable name.
pub(crate) fn pointee_name(type_name: &str) -> Option<&str> {
	let pointee = ["alloc::boxed::Box<", "alloc::sync::Arc<"]
		.iter()
		.find_map(|ptr| type_name.strip_prefix(ptr)?.strip_suffix('>'))
		.or_else(|| type_name.strip_prefix('&'))?
		.trim();

	if pointee.contains(&['<', '>', '(', '[', ' ', '&', '*'][..]) || !pointee.contains("::") {
		return None;
	}
	let name = pointee.rsplit("::").next()?;
	is_identifier(name).then_some(name)
}

fn is_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	matches!(chars.next(), Some(c) if c == '_' || c.is_alphabetic())
		&& chars.all(|c| c == '_' || c.is_alphanumeric())
		&& name != "_"
}
