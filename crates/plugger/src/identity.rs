//! Plugin identity derivation.
//!
//! # Role
//!
//! A plugin is identified by `(group, name)`. Either part may be supplied
//! explicitly; whatever is left empty is derived from the source location of
//! the registering call: the directory containing the file names the plugin
//! and the directory above it names the group.
//!
//! ```text
//! src/hooks/audit/mod.rs  ->  group "hooks", name "audit"
//! ```
//!
//! The resolver works on plain [`SourceLocation`] values. Capturing the
//! location (`#[track_caller]`, `file!()`) is left to the entry points.

use std::fmt;

use crate::error::RegistryError;

/// File and line of the call that registered a plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceLocation {
	pub file: &'static str,
	pub line: u32,
}

impl SourceLocation {
	pub const fn new(file: &'static str, line: u32) -> Self {
		Self { file, line }
	}

	/// Location of the caller of the enclosing `#[track_caller]` function.
	#[track_caller]
	pub fn caller() -> Self {
		std::panic::Location::caller().into()
	}

	/// Derives `(group, name)` from the last two directory segments.
	pub fn identity(&self) -> Result<(&'static str, &'static str), RegistryError> {
		let mut dirs = self
			.file
			.rsplit(&['/', '\\'][..])
			.skip(1)
			.filter(|segment| !segment.is_empty() && *segment != ".");

		match (dirs.next(), dirs.next()) {
			(Some(name), Some(group)) => Ok((group, name)),
			_ => Err(RegistryError::InsufficientPath {
				file: self.file.to_string(),
			}),
		}
	}
}

impl From<&'static std::panic::Location<'static>> for SourceLocation {
	fn from(location: &'static std::panic::Location<'static>) -> Self {
		Self::new(location.file(), location.line())
	}
}

impl fmt::Display for SourceLocation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.file, self.line)
	}
}

/// `(group, name)` pair identifying a registered plugin.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PluginId {
	group: String,
	name: String,
}

impl PluginId {
	/// Creates an identity from explicit parts, rejecting empty ones.
	pub fn new(group: impl Into<String>, name: impl Into<String>) -> Result<Self, RegistryError> {
		let (group, name) = (group.into(), name.into());
		if group.is_empty() || name.is_empty() {
			return Err(RegistryError::EmptyIdentity { group, name });
		}
		Ok(Self { group, name })
	}

	/// Resolves an identity, deriving missing parts from `location`.
	///
	/// Supplied non-empty parts always win; the location is consulted only
	/// when at least one part is empty.
	pub fn resolve(
		group: &str,
		name: &str,
		location: Option<SourceLocation>,
	) -> Result<Self, RegistryError> {
		if !group.is_empty() && !name.is_empty() {
			return Self::new(group, name);
		}

		let location = location.ok_or(RegistryError::LocationUnavailable)?;
		let (derived_group, derived_name) = location.identity()?;
		Self::new(
			if group.is_empty() { derived_group } else { group },
			if name.is_empty() { derived_name } else { name },
		)
	}

	pub fn group(&self) -> &str {
		&self.group
	}

	pub fn name(&self) -> &str {
		&self.name
	}
}

impl fmt::Display for PluginId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.group, self.name)
	}
}
