#![allow(unused_crate_dependencies)]

//! Several plugins in one group, each named after its directory.

use pretty_assertions::assert_eq;

mod barplug;
mod fooplug;
mod zoo;

type PlugFunc = fn() -> &'static str;

#[test]
fn plugins_register_themselves() {
	let _ = tracing_subscriber::fmt::try_init();
	let group = plugger::group("staticplugintesting");

	let plugins: Vec<(String, usize)> = group
		.plugins()
		.iter()
		.map(|p| (p.id().to_string(), p.len()))
		.collect();
	assert_eq!(
		plugins,
		[
			("staticplugintesting/barplug".to_string(), 1),
			("staticplugintesting/fooplug".to_string(), 1),
			// the directory wins over the module's own idea of its name
			("staticplugintesting/zoo".to_string(), 1),
		]
	);

	let out: Vec<&str> = group.funcs::<PlugFunc>("plug_func").iter().map(|f| f()).collect();
	assert_eq!(out, ["barplug", "fooplug", "zooplug"]);
}

#[test]
fn prefix_lookup_spans_plugins() {
	let group = plugger::group("staticplugintesting");
	let found = group.by_prefix_with_owner("plug_");
	let owners: Vec<&str> = found.iter().map(|s| s.plugin.name()).collect();
	assert_eq!(owners, ["barplug", "fooplug", "zoo"]);

	let out: Vec<&str> = found
		.iter()
		.filter_map(|s| s.value.downcast::<PlugFunc>())
		.map(|f| f())
		.collect();
	assert_eq!(out, ["barplug", "fooplug", "zooplug"]);
}

#[test]
fn unrelated_groups_stay_empty() {
	let group = plugger::group("plugins");
	assert!(group.is_empty());
	assert!(group.by_prefix("plug").is_empty());
	assert_eq!(
		plugger::Registry::global().group_names(),
		["staticplugintesting"]
	);
}
