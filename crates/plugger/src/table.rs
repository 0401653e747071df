//! Per-plugin symbol tables.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::error::RegistryError;
use crate::identity::PluginId;
use crate::symbol::{Resolved, Symbol, SymbolKind, SymbolValue};

#[derive(Debug, Clone)]
struct TableEntry {
	kind: SymbolKind,
	value: SymbolValue,
}

/// Symbol name to value mapping of one plugin, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
	entries: IndexMap<String, TableEntry>,
	/// Functions without an identifier; only reachable through the empty prefix.
	unnamed_functions: Vec<SymbolValue>,
}

impl SymbolTable {
	/// Builds the table for `plugin`, skipping anonymous non-function symbols.
	pub fn build(
		plugin: &PluginId,
		symbols: impl IntoIterator<Item = Symbol>,
	) -> Result<Self, RegistryError> {
		let mut entries = IndexMap::new();
		let mut unnamed_functions = Vec::new();
		for symbol in symbols {
			let (name, kind, value) = match symbol.resolve() {
				Resolved::Named(name, kind, value) => (name, kind, value),
				Resolved::UnnamedFunction(value) => {
					unnamed_functions.push(value);
					continue;
				}
				Resolved::Anonymous(value) => {
					tracing::trace!(
						plugin = %plugin,
						type_name = value.type_name(),
						"skipping anonymous symbol"
					);
					continue;
				}
			};

			match entries.entry(name) {
				Entry::Occupied(entry) => {
					return Err(RegistryError::DuplicateSymbol {
						plugin: plugin.clone(),
						symbol: entry.key().clone(),
					});
				}
				Entry::Vacant(entry) => {
					entry.insert(TableEntry { kind, value });
				}
			}
		}
		Ok(Self {
			entries,
			unnamed_functions,
		})
	}

	pub fn get(&self, name: &str) -> Option<&SymbolValue> {
		self.entries.get(name).map(|entry| &entry.value)
	}

	pub fn kind(&self, name: &str) -> Option<SymbolKind> {
		self.entries.get(name).map(|entry| entry.kind)
	}

	/// Function symbols whose name starts with `prefix`, in declaration order.
	///
	/// Unnamed functions follow the named ones under the empty name, so only an
	/// empty prefix yields them.
	pub fn functions_with_prefix<'a>(
		&'a self,
		prefix: &'a str,
	) -> impl Iterator<Item = (&'a str, &'a SymbolValue)> + 'a {
		let unnamed: &[SymbolValue] = if prefix.is_empty() {
			&self.unnamed_functions[..]
		} else {
			&[]
		};
		self.entries
			.iter()
			.filter(move |(name, entry)| entry.kind == SymbolKind::Function && name.starts_with(prefix))
			.map(|(name, entry)| (name.as_str(), &entry.value))
			.chain(unnamed.iter().map(|value| ("", value)))
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.entries.len() + self.unnamed_functions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty() && self.unnamed_functions.is_empty()
	}
}
