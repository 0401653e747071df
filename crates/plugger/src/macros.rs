//! Registration macros.

/// Builds a [`Symbol::Function`](crate::Symbol::Function) named after the
/// function's identifier.
///
/// The cast fixes the type consumers downcast to.
///
/// ```ignore
/// plugger::func!(do_it as fn() -> String)
/// ```
#[macro_export]
macro_rules! func {
	($f:path as $ty:ty) => {
		$crate::Symbol::function(::core::stringify!($f), $f as $ty)
	};
}

/// Submits a plugin at link time.
///
/// `group` and `name` are optional; missing parts are derived from the
/// directories containing the invoking file (`<group>/<name>/mod.rs`).
///
/// ```ignore
/// plugger::plugin! {
///     symbols: [plugger::func!(do_it as fn() -> String)],
/// }
/// ```
///
/// # Panics
///
/// Symbol expressions run while the global registry is being built. They must
/// not call [`group`](crate::group), [`register`](crate::register) or
/// [`Registry::global`](crate::Registry::global); doing so panics on first
/// access to the global registry.
#[cfg(feature = "static")]
#[macro_export]
macro_rules! plugin {
	(
		$(group: $group:expr,)?
		$(name: $name:expr,)?
		symbols: [$($symbol:expr),* $(,)?] $(,)?
	) => {
		const _: () = {
			fn __plugger_spec() -> $crate::PluginSpec {
				let symbols: ::std::vec::Vec<$crate::Symbol> = ::std::vec![$($symbol),*];
				$crate::PluginSpec {
					$(group: ::std::string::String::from($group),)?
					$(name: ::std::string::String::from($name),)?
					symbols,
					..$crate::PluginSpec::new()
				}
			}

			$crate::inventory::submit! {
				$crate::StaticPlugin::new(::core::file!(), ::core::line!(), __plugger_spec)
			}
		};
	};
}
