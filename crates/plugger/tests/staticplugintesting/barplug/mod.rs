fn plug_func() -> &'static str {
	"barplug"
}

plugger::plugin! {
	symbols: [plugger::func!(plug_func as fn() -> &'static str)],
}
