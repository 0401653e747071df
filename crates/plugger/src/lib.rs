#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Compile-time linked plugin registry.
//!
//! Plugins are ordinary modules linked into the binary. Each one declares the
//! symbols it exports (functions, values, trait objects) and is registered
//! into a named group; consumers look symbols up by group and then by exact
//! name or by name prefix.
//!
//! A plugin's identity defaults to its location in the source tree: the
//! directory containing the registering file is the plugin name and the
//! directory above that is the group.
//!
//! ```ignore
//! // src/plugins/foo/mod.rs
//! fn do_it() -> String {
//!     "foo static plugin".into()
//! }
//!
//! plugger::plugin! {
//!     symbols: [plugger::func!(do_it as fn() -> String)],
//! }
//!
//! // elsewhere
//! for do_it in plugger::group("plugins").funcs::<fn() -> String>("do_it") {
//!     println!("{}", do_it());
//! }
//! ```
//!
//! Registration problems (duplicate plugins or symbols, underivable
//! identities) are programming errors and panic. Lookups never fail: an
//! unknown group or symbol yields empty results.

use std::cell::Cell;
use std::sync::{Arc, LazyLock};

mod error;
mod group;
mod identity;
#[cfg(feature = "static")]
mod linkage;
mod macros;
mod registry;
mod spec;
mod symbol;
mod table;

pub use error::RegistryError;
pub use group::{GroupView, OwnedSymbol};
pub use identity::{PluginId, SourceLocation};
#[doc(hidden)]
#[cfg(feature = "static")]
pub use inventory;
#[cfg(feature = "static")]
pub use linkage::{StaticPlugin, static_plugins};
pub use registry::{Plugin, Registry};
pub use spec::PluginSpec;
pub use symbol::{Symbol, SymbolKind, SymbolValue};
pub use table::SymbolTable;

static GLOBAL: LazyLock<Registry> = LazyLock::new(init_global);

thread_local! {
	static COLLECTING: Cell<bool> = const { Cell::new(false) };
}

/// Marks the current thread as building the global registry.
struct CollectingGuard;

impl CollectingGuard {
	fn enter() -> Self {
		COLLECTING.set(true);
		Self
	}
}

impl Drop for CollectingGuard {
	fn drop(&mut self) {
		COLLECTING.set(false);
	}
}

#[cfg(feature = "static")]
fn init_global() -> Registry {
	let _guard = CollectingGuard::enter();
	Registry::from_static()
}

#[cfg(not(feature = "static"))]
fn init_global() -> Registry {
	let _guard = CollectingGuard::enter();
	Registry::new()
}

impl Registry {
	/// The process-wide registry.
	///
	/// Linked `plugin!` submissions are collected on first access.
	///
	/// # Panics
	///
	/// Panics when called from a spec builder while the submissions are being
	/// collected, since the registry does not exist yet.
	pub fn global() -> &'static Registry {
		if COLLECTING.get() {
			panic!("global plugin registry accessed while collecting static plugins");
		}
		&GLOBAL
	}
}

/// Queries `group` in the process-wide registry.
pub fn group(group: &str) -> GroupView {
	Registry::global().group(group)
}

/// Registers `spec` in the process-wide registry.
///
/// # Panics
///
/// See [`Registry::register`].
#[track_caller]
pub fn register(spec: PluginSpec) -> Arc<Plugin> {
	Registry::global().register(spec)
}
