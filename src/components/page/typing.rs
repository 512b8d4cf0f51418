//! Typewriter effect for the hero name.

use std::time::Duration;

use leptos::prelude::*;
use web_sys::HtmlElement;

use crate::config::TypingConfig;
use crate::dom;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
	Typing,
	Deleting,
}

/// What to show now and how long to wait before the next step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingStep {
	pub text: String,
	pub next_delay: Duration,
}

/// Endless type / hold / delete / pause cycle over a fixed text.
pub struct TypingEffect {
	chars: Vec<char>,
	shown: usize,
	phase: Phase,
	config: TypingConfig,
}

impl TypingEffect {
	pub fn new(config: TypingConfig) -> Self {
		Self {
			chars: config.text.chars().collect(),
			shown: 0,
			phase: Phase::Typing,
			config,
		}
	}

	pub fn step(&mut self) -> TypingStep {
		let text: String = self.chars[..self.shown].iter().collect();
		let delay_ms = match self.phase {
			Phase::Typing if self.shown >= self.chars.len() => {
				self.phase = Phase::Deleting;
				self.config.hold_ms
			}
			Phase::Typing => {
				self.shown += 1;
				self.config.type_delay_ms
			}
			Phase::Deleting if self.shown == 0 => {
				self.phase = Phase::Typing;
				self.config.restart_ms
			}
			Phase::Deleting => {
				self.shown -= 1;
				self.config.delete_delay_ms
			}
		};
		TypingStep {
			text,
			next_delay: Duration::from_millis(delay_ms),
		}
	}
}

pub fn install(config: &TypingConfig) {
	let Some(element) = dom::query("#typed-name") else {
		return;
	};
	let start = Duration::from_millis(config.start_delay_ms);
	schedule(element, TypingEffect::new(config.clone()), start);
}

fn schedule(element: HtmlElement, mut effect: TypingEffect, delay: Duration) {
	set_timeout(
		move || {
			let step = effect.step();
			element.set_text_content(Some(&step.text));
			schedule(element, effect, step.next_delay);
		},
		delay,
	);
}

#[cfg(test)]
mod tests {
	use super::*;

	fn effect(text: &str) -> TypingEffect {
		TypingEffect::new(TypingConfig {
			text: text.into(),
			..Default::default()
		})
	}

	fn run(effect: &mut TypingEffect, n: usize) -> Vec<(String, u64)> {
		(0..n)
			.map(|_| {
				let s = effect.step();
				(s.text, s.next_delay.as_millis() as u64)
			})
			.collect()
	}

	#[test]
	fn types_holds_deletes_and_restarts() {
		let mut e = effect("abc");
		let steps = run(&mut e, 10);
		let expected: Vec<(String, u64)> = [
			("", 50),
			("a", 50),
			("ab", 50),
			("abc", 2000),
			("abc", 30),
			("ab", 30),
			("a", 30),
			("", 300),
			("", 50),
			("a", 50),
		]
		.into_iter()
		.map(|(t, d)| (t.to_string(), d))
		.collect();
		assert_eq!(steps, expected);
	}

	#[test]
	fn handles_multibyte_text() {
		let mut e = effect("né");
		let texts: Vec<String> = run(&mut e, 3).into_iter().map(|(t, _)| t).collect();
		assert_eq!(texts, vec!["", "n", "né"]);
	}

	#[test]
	fn empty_text_just_cycles() {
		let mut e = effect("");
		let steps = run(&mut e, 3);
		assert!(steps.iter().all(|(t, _)| t.is_empty()));
		assert_eq!(steps[0].1, 2000);
		assert_eq!(steps[1].1, 300);
	}
}
