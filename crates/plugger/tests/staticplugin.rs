#![allow(unused_crate_dependencies)]

//! A plugin registering itself from `plugins/foo/` lands in group "plugins"
//! under the name "foo" without spelling out either.

mod plugins;

type DoIt = fn() -> String;

#[test]
fn registers_its_plugin_function() {
	let _ = tracing_subscriber::fmt::try_init();
	let group = plugger::group("plugins");
	assert_eq!(group.plugins().len(), 1);
	assert_eq!(group.plugins()[0].id().to_string(), "plugins/foo");
	assert_eq!(group.funcs::<DoIt>("do_it").len(), 1);
}

#[test]
fn calls_a_registered_plugin_function() {
	let out: Vec<String> = plugger::group("plugins")
		.funcs::<DoIt>("do_it")
		.iter()
		.map(|do_it| do_it())
		.collect();
	assert_eq!(out, ["foo static plugin"]);
}

#[test]
fn records_where_the_plugin_was_submitted() {
	let group = plugger::group("plugins");
	let location = group.plugins()[0].location().unwrap();
	assert!(location.file.ends_with("mod.rs"), "{location}");
	assert!(plugger::static_plugins().iter().any(|p| p.location == location));
}
