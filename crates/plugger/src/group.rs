//! Read-only queries over one plugin group.

use std::any::Any;
use std::sync::Arc;

use crate::registry::Plugin;
use crate::symbol::SymbolValue;

/// A symbol value together with the plugin that exported it.
#[derive(Debug, Clone)]
pub struct OwnedSymbol {
	pub value: SymbolValue,
	pub plugin: Arc<Plugin>,
}

/// Snapshot of a group's plugins taken by [`Registry::group`](crate::Registry::group).
///
/// Plugins registered after the snapshot was taken are not visible; request
/// a fresh view to see them.
#[derive(Debug, Clone)]
pub struct GroupView {
	name: String,
	plugins: Vec<Arc<Plugin>>,
}

impl GroupView {
	pub(crate) fn new(name: &str, plugins: Vec<Arc<Plugin>>) -> Self {
		Self {
			name: name.to_string(),
			plugins,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Plugins in registration order.
	pub fn plugins(&self) -> &[Arc<Plugin>] {
		&self.plugins
	}

	pub fn plugin(&self, name: &str) -> Option<&Arc<Plugin>> {
		self.plugins.iter().find(|p| p.name() == name)
	}

	pub fn is_empty(&self) -> bool {
		self.plugins.is_empty()
	}

	/// Values exported under exactly `symbol`, one per plugin that has it.
	pub fn by_name(&self, symbol: &str) -> Vec<SymbolValue> {
		self.plugins
			.iter()
			.filter_map(|p| p.symbol(symbol).cloned())
			.collect()
	}

	/// Like [`by_name`](Self::by_name), paired with the exporting plugin.
	pub fn by_name_with_owner(&self, symbol: &str) -> Vec<OwnedSymbol> {
		self.plugins
			.iter()
			.filter_map(|p| {
				p.symbol(symbol).map(|value| OwnedSymbol {
					value: value.clone(),
					plugin: Arc::clone(p),
				})
			})
			.collect()
	}

	/// Function values whose name starts with `prefix`.
	///
	/// Ordered by plugin registration, then by declaration within a plugin.
	pub fn by_prefix(&self, prefix: &str) -> Vec<SymbolValue> {
		self.plugins
			.iter()
			.flat_map(|p| p.symbols().functions_with_prefix(prefix))
			.map(|(_, value)| value.clone())
			.collect()
	}

	pub fn by_prefix_with_owner(&self, prefix: &str) -> Vec<OwnedSymbol> {
		self.plugins
			.iter()
			.flat_map(|p| {
				p.symbols()
					.functions_with_prefix(prefix)
					.map(move |(_, value)| OwnedSymbol {
						value: value.clone(),
						plugin: Arc::clone(p),
					})
			})
			.collect()
	}

	/// Values named `symbol` that have type `T`; others are skipped.
	///
	/// ```ignore
	/// for do_it in plugger::group("plugins").funcs::<fn() -> String>("DoIt") {
	///     println!("{}", do_it());
	/// }
	/// ```
	pub fn funcs<T: Any + Clone>(&self, symbol: &str) -> Vec<T> {
		self.by_name(symbol)
			.iter()
			.filter_map(SymbolValue::downcast::<T>)
			.collect()
	}

	/// Prefix-matched function values that have type `T`.
	pub fn funcs_with_prefix<T: Any + Clone>(&self, prefix: &str) -> Vec<T> {
		self.by_prefix(prefix)
			.iter()
			.filter_map(SymbolValue::downcast::<T>)
			.collect()
	}
}
