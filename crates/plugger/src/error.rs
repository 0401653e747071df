use crate::identity::{PluginId, SourceLocation};

/// Registration-time faults.
///
/// Every variant describes a misconfigured plugin. The fatal entry points
/// ([`Registry::register`](crate::Registry::register) and static collection)
/// turn these into panics; the `try_*` variants hand them back as values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// Identity derivation was required but no caller location was provided.
	#[error("cannot derive plugin identity: caller location unavailable")]
	LocationUnavailable,
	/// The caller location has fewer than two usable directory segments.
	#[error("cannot derive plugin identity from {file:?}: expected a <group>/<name>/ directory pair")]
	InsufficientPath { file: String },
	/// Group or name ended up empty after derivation.
	#[error("invalid plugin identity: group={group:?} name={name:?}")]
	EmptyIdentity { group: String, name: String },
	/// A plugin with the same name already exists in the group.
	#[error("duplicate plugin {id}: existing={} incoming={}", display_location(.existing), display_location(.incoming))]
	DuplicatePlugin {
		id: PluginId,
		existing: Option<SourceLocation>,
		incoming: Option<SourceLocation>,
	},
	/// Two symbols of one plugin resolve to the same lookup name.
	#[error("duplicate symbol {symbol:?} in plugin {plugin}")]
	DuplicateSymbol { plugin: PluginId, symbol: String },
}

fn display_location(location: &Option<SourceLocation>) -> String {
	match location {
		Some(location) => location.to_string(),
		None => "<unknown>".to_string(),
	}
}
