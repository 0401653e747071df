//! Link-time plugin submission via `inventory`.
//!
//! [`plugin!`](crate::plugin) submits a [`StaticPlugin`] from the plugin's
//! module. Submissions are not registered until a registry collects them with
//! [`Registry::from_static`], which happens on first access to
//! [`Registry::global`].

use crate::error::RegistryError;
use crate::identity::SourceLocation;
use crate::registry::Registry;
use crate::spec::PluginSpec;

/// A plugin submitted at link time.
pub struct StaticPlugin {
	/// Location of the `plugin!` invocation.
	pub location: SourceLocation,
	/// Builds the spec; called once per collecting registry.
	pub spec: fn() -> PluginSpec,
}

inventory::collect!(StaticPlugin);

impl StaticPlugin {
	pub const fn new(file: &'static str, line: u32, spec: fn() -> PluginSpec) -> Self {
		Self {
			location: SourceLocation::new(file, line),
			spec,
		}
	}
}

/// Linked submissions, sorted by source location.
///
/// Link order is unspecified, so location order is what keeps plugin lists
/// stable between builds.
pub fn static_plugins() -> Vec<&'static StaticPlugin> {
	let mut plugins: Vec<&'static StaticPlugin> = inventory::iter::<StaticPlugin>.into_iter().collect();
	plugins.sort_by_key(|p| p.location);
	plugins
}

impl Registry {
	/// Creates a registry holding every linked [`StaticPlugin`].
	///
	/// # Panics
	///
	/// Panics if any submission fails to register.
	pub fn from_static() -> Self {
		match Self::try_from_static() {
			Ok(registry) => registry,
			Err(err) => panic!("static plugin registration failed: {err}"),
		}
	}

	/// Fallible form of [`from_static`](Self::from_static).
	pub fn try_from_static() -> Result<Self, RegistryError> {
		let registry = Self::new();
		let plugins = static_plugins();
		for plugin in &plugins {
			registry.try_register_at((plugin.spec)(), Some(plugin.location))?;
		}
		tracing::debug!(
			plugins = plugins.len(),
			groups = registry.group_names().len(),
			"collected static plugins"
		);
		Ok(registry)
	}
}

#[cfg(test)]
mod tests {
	use crate::{Registry, Symbol};

	crate::plugin! {
		group: "linkage",
		name: "unit",
		symbols: [Symbol::named("answer", 42u32)],
	}

	#[test]
	fn collects_linked_plugins() {
		let registry = Registry::from_static();
		let view = registry.group("linkage");
		assert_eq!(view.plugins().len(), 1);
		assert_eq!(view.funcs::<u32>("answer"), [42]);

		let location = view.plugins()[0].location().unwrap();
		assert!(location.file.ends_with("linkage.rs"), "{location}");
	}

	#[test]
	fn each_registry_builds_its_own_specs() {
		let first = Registry::from_static().group("linkage").by_name("answer");
		let second = Registry::from_static().group("linkage").by_name("answer");
		assert!(!first[0].ptr_eq(&second[0]));
	}

	#[test]
	fn global_registry_sees_linked_plugins() {
		assert!(Registry::global().group("linkage").plugin("unit").is_some());
		assert!(std::ptr::eq(Registry::global(), Registry::global()));
	}
}
