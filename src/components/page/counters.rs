//! Slot-machine style statistic counters.
//!
//! Each `.stat-number[data-count]` spins up from zero once it scrolls into
//! view, lands on its target with a short glow, then spins again after a
//! long pause, forever.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use log::{debug, warn};
use web_sys::HtmlElement;

use crate::config::CounterConfig;
use crate::dom;

const PULSE_SCALE: &str = "scale(1.1)";
const LANDED_SCALE: &str = "scale(1.2)";
const LANDED_GLOW: &str = "0 0 20px rgba(0, 212, 255, 0.8)";
const LANDED_GLOW_MS: u64 = 300;

/// One tick of a spinning counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterFrame {
	/// Show an intermediate number.
	Spin(u32),
	/// Show the target; the spin is over.
	Landed(u32),
}

/// Counts 0, 1, ... up to the target, one number per tick.
#[derive(Clone, Debug)]
pub struct SlotCounter {
	target: u32,
	current: u32,
}

impl SlotCounter {
	pub fn new(target: u32) -> Self {
		Self { target, current: 0 }
	}

	/// Advances one tick. After landing, the counter is ready to spin again.
	pub fn tick(&mut self) -> CounterFrame {
		let shown = self.current;
		self.current += 1;
		if self.current >= self.target {
			self.current = 0;
			CounterFrame::Landed(self.target)
		} else {
			CounterFrame::Spin(shown)
		}
	}
}

/// Parses a `data-count` attribute the way `parseInt` reads markup like
/// `"12+"`: the leading run of digits is the target, anything after is ignored.
pub fn parse_target(raw: &str) -> Option<u32> {
	let raw = raw.trim_start();
	let digits = raw.find(|c: char| !c.is_ascii_digit()).unwrap_or(raw.len());
	raw[..digits].parse().ok()
}

pub fn install(config: &CounterConfig) {
	let counters = dom::query_all(".stat-number");
	let config = config.clone();
	let threshold = config.threshold;
	dom::on_first_intersection(&counters, threshold, "0px", move |_, element| {
		let raw = dom::data(&element, "count").unwrap_or_default();
		match parse_target(&raw) {
			Some(target) => spin(element, SlotCounter::new(target), config.clone()),
			None => debug!("portfolio-fx: skipping counter with data-count {:?}", raw),
		}
	});
}

fn spin(element: HtmlElement, counter: SlotCounter, config: CounterConfig) {
	let counter = Rc::new(RefCell::new(counter));
	let handle = Rc::new(Cell::new(None::<IntervalHandle>));
	let spin_every = config.spin();

	let (el, handle_cb) = (element, handle.clone());
	let started = set_interval_with_handle(
		move || {
			let frame = counter.borrow_mut().tick();
			match frame {
				CounterFrame::Spin(n) => {
					el.set_text_content(Some(&n.to_string()));
					dom::set_style(&el, "transform", PULSE_SCALE);
					let el = el.clone();
					set_timeout(
						move || dom::set_style(&el, "transform", "scale(1)"),
						spin_every / 2,
					);
				}
				CounterFrame::Landed(target) => {
					if let Some(h) = handle_cb.take() {
						h.clear();
					}
					land(&el, target);

					let restart = Duration::from_millis(config.restart_ms);
					let (el, counter, config) = (el.clone(), counter.clone(), config.clone());
					set_timeout(
						move || {
							let next = counter.borrow().clone();
							spin(el, next, config);
						},
						restart,
					);
				}
			}
		},
		spin_every,
	);

	match started {
		Ok(h) => handle.set(Some(h)),
		Err(e) => warn!("portfolio-fx: could not start counter: {:?}", e),
	}
}

fn land(element: &HtmlElement, target: u32) {
	element.set_text_content(Some(&target.to_string()));
	dom::set_style(element, "transform", LANDED_SCALE);
	dom::set_style(element, "text-shadow", LANDED_GLOW);

	let el = element.clone();
	set_timeout(
		move || {
			dom::set_style(&el, "transform", "scale(1)");
			dom::set_style(&el, "text-shadow", "none");
		},
		Duration::from_millis(LANDED_GLOW_MS),
	);
}

#[cfg(test)]
mod tests {
	use super::*;

	fn spin_out(counter: &mut SlotCounter) -> Vec<CounterFrame> {
		let mut frames = Vec::new();
		loop {
			let f = counter.tick();
			frames.push(f);
			if matches!(f, CounterFrame::Landed(_)) {
				return frames;
			}
		}
	}

	#[test]
	fn spins_up_to_target_then_lands() {
		let mut c = SlotCounter::new(4);
		assert_eq!(
			spin_out(&mut c),
			vec![
				CounterFrame::Spin(0),
				CounterFrame::Spin(1),
				CounterFrame::Spin(2),
				CounterFrame::Landed(4),
			]
		);
	}

	#[test]
	fn second_spin_repeats_the_first() {
		let mut c = SlotCounter::new(3);
		let first = spin_out(&mut c);
		let second = spin_out(&mut c);
		assert_eq!(first, second);
	}

	#[test]
	fn zero_and_one_land_immediately() {
		assert_eq!(SlotCounter::new(0).tick(), CounterFrame::Landed(0));
		assert_eq!(SlotCounter::new(1).tick(), CounterFrame::Landed(1));
	}

	#[test]
	fn parses_leading_digits() {
		assert_eq!(parse_target("42"), Some(42));
		assert_eq!(parse_target(" 7 "), Some(7));
		assert_eq!(parse_target("-3"), None);
		assert_eq!(parse_target(""), None);
		assert_eq!(parse_target("+"), None);
	}

	#[test]
	fn suffix_after_the_digits_is_ignored() {
		assert_eq!(parse_target("12+"), Some(12));
		assert_eq!(parse_target("50 %"), Some(50));
		assert_eq!(parse_target("3.5"), Some(3));
	}
}
