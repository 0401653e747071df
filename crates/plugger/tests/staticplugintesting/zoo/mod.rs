//! Registers as "zoo" even though it calls itself "zooplug".

fn plug_func() -> &'static str {
	"zooplug"
}

plugger::plugin! {
	symbols: [plugger::func!(plug_func as fn() -> &'static str)],
}
