// ══════════════════════════════════════════════════════════════════════════════
// PROGRESS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Terminal progress indicators. Each widget owns its own writer and keeps its
// own counters; none of them touches logger state. Write errors are ignored,
// the same way a console print would ignore them.

mod bar;
mod simple;
mod spinner;

pub use bar::{BarStyle, ProgressBar};
pub use simple::SimpleProgressBar;
pub use spinner::{Spinner, SpinnerStyle};

/// Formats whole seconds as `[DD-][HH:][MM:]SS`, each field two digits wide.
/// Leading fields are only shown when non-zero.
pub fn format_duration(secs: u64) -> String {
	let days = secs / 86_400;
	let hours = secs % 86_400 / 3_600;
	let minutes = secs % 3_600 / 60;
	let seconds = secs % 60;

	let mut out = String::new();
	if days > 0 {
		out.push_str(&format!("{:02}-", days));
	}
	if hours > 0 {
		out.push_str(&format!("{:02}:", hours));
	}
	if minutes > 0 {
		out.push_str(&format!("{:02}:", minutes));
	}
	out.push_str(&format!("{:02}", seconds));
	out
}

/// Scales a rate by SI prefix, returning the scaled value and the prefix.
pub(crate) fn si_scale(rate: f64) -> (f64, &'static str) {
	const STEPS: [(f64, &str); 5] = [(1e15, "P"), (1e12, "T"), (1e9, "G"), (1e6, "M"), (1e3, "K")];
	for (factor, prefix) in STEPS {
		if rate > factor {
			return (rate / factor, prefix);
		}
	}
	(rate, "")
}
