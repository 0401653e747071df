//! Plugin registry.
//!
//! # Role
//!
//! Owns every registered [`Plugin`] record, partitioned into groups in
//! registration order. This is the only place that mutates plugin state.
//!
//! # Invariants
//!
//! - Within a group, plugin names are unique.
//! - Within a plugin, symbol names are unique (see [`SymbolTable::build`]).
//! - Group and name are never empty.
//! - A failed registration leaves nothing visible.
//!
//! # Concurrency
//!
//! A single [`RwLock`] guards the group map. Registration holds it exclusively
//! for group creation, the duplicate check and the append; identity
//! resolution and table building happen before the lock is taken. Queries
//! hold it shared only while cloning a group's plugin list.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::error::RegistryError;
use crate::group::GroupView;
use crate::identity::{PluginId, SourceLocation};
use crate::spec::PluginSpec;
use crate::symbol::SymbolValue;
use crate::table::SymbolTable;


/// A registered plugin: identity, origin and exported symbols.
#[derive(Debug)]
pub struct Plugin {
	id: PluginId,
	location: Option<SourceLocation>,
	symbols: SymbolTable,
}

impl Plugin {
	pub fn id(&self) -> &PluginId {
		&self.id
	}

	pub fn group(&self) -> &str {
		self.id.group()
	}

	pub fn name(&self) -> &str {
		self.id.name()
	}

	/// Source location of the registering call, when one was captured.
	pub fn location(&self) -> Option<SourceLocation> {
		self.location
	}

	pub fn symbols(&self) -> &SymbolTable {
		&self.symbols
	}

	pub fn symbol(&self, name: &str) -> Option<&SymbolValue> {
		self.symbols.get(name)
	}

	pub fn symbol_names(&self) -> impl Iterator<Item = &str> {
		self.symbols.names()
	}

	/// Number of symbols kept in the table, unnamed functions included.
	pub fn len(&self) -> usize {
		self.symbols.len()
	}

	pub fn is_empty(&self) -> bool {
		self.symbols.is_empty()
	}
}

/// All plugins registered under one group name.
#[derive(Debug, Default)]
pub(crate) struct PluginGroup {
	pub(crate) plugins: Vec<Arc<Plugin>>,
}

/// Group name to plugin list mapping.
#[derive(Debug, Default)]
pub struct Registry {
	groups: RwLock<FxHashMap<String, PluginGroup>>,
}

impl Registry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `spec`, deriving missing identity parts from the caller.
	///
	/// # Panics
	///
	/// Panics on any [`RegistryError`]: a misconfigured plugin is a
	/// programming error, not a runtime condition.
	#[track_caller]
	pub fn register(&self, spec: PluginSpec) -> Arc<Plugin> {
		let location = SourceLocation::caller();
		match self.try_register_at(spec, Some(location)) {
			Ok(plugin) => plugin,
			Err(err) => panic!("plugin registration failed at {location}: {err}"),
		}
	}

	/// Fallible form of [`register`](Self::register).
	#[track_caller]
	pub fn try_register(&self, spec: PluginSpec) -> Result<Arc<Plugin>, RegistryError> {
		self.try_register_at(spec, Some(SourceLocation::caller()))
	}

	/// Registers `spec` as if called from `location`.
	///
	/// `None` models a caller whose location is unknown; that only fails when
	/// the identity has to be derived.
	pub fn try_register_at(
		&self,
		spec: PluginSpec,
		location: Option<SourceLocation>,
	) -> Result<Arc<Plugin>, RegistryError> {
		let PluginSpec {
			group,
			name,
			symbols,
		} = spec;
		let id = PluginId::resolve(&group, &name, location)?;
		let symbols = SymbolTable::build(&id, symbols)?;
		let plugin = Arc::new(Plugin {
			id,
			location,
			symbols,
		});

		{
			let mut groups = self.groups.write();
			let existing = groups
				.get(plugin.group())
				.and_then(|g| g.plugins.iter().find(|p| p.name() == plugin.name()));
			if let Some(existing) = existing {
				return Err(RegistryError::DuplicatePlugin {
					id: plugin.id.clone(),
					existing: existing.location,
					incoming: location,
				});
			}
			groups
				.entry(plugin.group().to_string())
				.or_default()
				.plugins
				.push(Arc::clone(&plugin));
		}

		tracing::debug!(
			plugin = %plugin.id,
			symbols = plugin.len(),
			location = ?plugin.location,
			"registered plugin"
		);
		Ok(plugin)
	}

	/// Snapshot of `group`; unknown groups yield an empty view.
	pub fn group(&self, group: &str) -> GroupView {
		let plugins = self
			.groups
			.read()
			.get(group)
			.map(|g| g.plugins.clone())
			.unwrap_or_default();
		GroupView::new(group, plugins)
	}

	/// Names of all registered groups, sorted.
	pub fn group_names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.groups.read().keys().cloned().collect();
		names.sort_unstable();
		names
	}

	/// Total number of registered plugins across all groups.
	pub fn len(&self) -> usize {
		self.groups.read().values().map(|g| g.plugins.len()).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
