fn do_it() -> String {
	"foo static plugin".to_string()
}

plugger::plugin! {
	symbols: [plugger::func!(do_it as fn() -> String)],
}
