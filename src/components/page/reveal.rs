//! Reveal-on-scroll for `.reveal` elements.

use std::time::Duration;

use leptos::prelude::*;

use crate::config::RevealConfig;
use crate::dom;

/// Delay for the `index`-th element revealed in one observer batch.
pub fn stagger_delay(index: usize, step_ms: u64) -> Duration {
	Duration::from_millis(index as u64 * step_ms)
}

pub fn install(config: &RevealConfig) {
	let targets = dom::query_all(".reveal");
	let step_ms = config.stagger_ms;
	dom::on_first_intersection(&targets, config.threshold, &config.root_margin, move |index, element| {
		set_timeout(
			move || dom::set_class(&element, "active", true),
			stagger_delay(index, step_ms),
		);
	});
}
