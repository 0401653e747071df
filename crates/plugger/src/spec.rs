use crate::symbol::Symbol;

/// Registration request for one plugin.
///
/// Leave `group` and/or `name` empty to derive them from the registering
/// source location.
#[derive(Debug, Clone, Default)]
pub struct PluginSpec {
	pub group: String,
	pub name: String,
	pub symbols: Vec<Symbol>,
}

impl PluginSpec {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn group(mut self, group: impl Into<String>) -> Self {
		self.group = group.into();
		self
	}

	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();
		self
	}

	pub fn symbol(mut self, symbol: Symbol) -> Self {
		self.symbols.push(symbol);
		self
	}

	pub fn symbols(mut self, symbols: impl IntoIterator<Item = Symbol>) -> Self {
		self.symbols.extend(symbols);
		self
	}
}
