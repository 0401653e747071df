fn plug_func() -> &'static str {
	"fooplug"
}

plugger::plugin! {
	symbols: [plugger::func!(plug_func as fn() -> &'static str)],
}
