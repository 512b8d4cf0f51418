//! Simulated contact form submission.
//!
//! Nothing is sent anywhere. Submitting walks the button through a sending
//! state, a success state, and back to its original content.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlButtonElement, HtmlFormElement};

use crate::config::ContactConfig;
use crate::dom;

const SENDING_HTML: &str = r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#;
const SENT_HTML: &str = r#"<i class="fas fa-check"></i> Message Sent!"#;
const SENT_BACKGROUND: &str = "linear-gradient(135deg, #10B981 0%, #059669 100%)";

/// Where a simulated submission is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
	#[default]
	Idle,
	Sending,
	Sent,
}

impl SubmitPhase {
	/// Phase after a submit event, or `None` if a submission is already running.
	pub fn submit(self) -> Option<Self> {
		match self {
			SubmitPhase::Idle => Some(SubmitPhase::Sending),
			SubmitPhase::Sending | SubmitPhase::Sent => None,
		}
	}

	pub fn next(self) -> Self {
		match self {
			SubmitPhase::Idle => SubmitPhase::Idle,
			SubmitPhase::Sending => SubmitPhase::Sent,
			SubmitPhase::Sent => SubmitPhase::Idle,
		}
	}

	/// Button markup for this phase. `None` means the original content.
	pub fn button_html(self) -> Option<&'static str> {
		match self {
			SubmitPhase::Idle => None,
			SubmitPhase::Sending => Some(SENDING_HTML),
			SubmitPhase::Sent => Some(SENT_HTML),
		}
	}
}

pub fn install(config: &ContactConfig) {
	let Some(form) = dom::document()
		.and_then(|d| d.get_element_by_id("contact-form"))
		.and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
	else {
		return;
	};

	let phase = Rc::new(Cell::new(SubmitPhase::Idle));
	let send = Duration::from_millis(config.send_ms);
	let reset = Duration::from_millis(config.reset_ms);

	let target = form.clone();
	dom::listen(&target, "submit", move |e| {
		e.prevent_default();
		let Some(next) = phase.get().submit() else {
			return;
		};
		let Some(button) = form
			.query_selector("button[type=\"submit\"]")
			.ok()
			.flatten()
			.and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
		else {
			return;
		};

		let original = button.inner_html();
		show(&button, next);
		button.set_disabled(true);
		phase.set(next);

		let (form, phase) = (form.clone(), phase.clone());
		set_timeout(
			move || {
				let sent = phase.get().next();
				show(&button, sent);
				dom::set_style(&button, "background", SENT_BACKGROUND);
				form.reset();
				phase.set(sent);

				set_timeout(
					move || {
						button.set_inner_html(&original);
						dom::set_style(&button, "background", "");
						button.set_disabled(false);
						phase.set(phase.get().next());
					},
					reset,
				);
			},
			send,
		);
	});
}

fn show(button: &HtmlButtonElement, phase: SubmitPhase) {
	if let Some(html) = phase.button_html() {
		button.set_inner_html(html);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn walks_sending_sent_idle() {
		let sending = SubmitPhase::Idle.submit().unwrap();
		assert_eq!(sending, SubmitPhase::Sending);
		assert_eq!(sending.next(), SubmitPhase::Sent);
		assert_eq!(sending.next().next(), SubmitPhase::Idle);
	}

	#[test]
	fn resubmitting_mid_flight_is_ignored() {
		assert_eq!(SubmitPhase::Sending.submit(), None);
		assert_eq!(SubmitPhase::Sent.submit(), None);
	}

	#[test]
	fn idle_button_keeps_its_own_markup() {
		assert_eq!(SubmitPhase::Idle.button_html(), None);
		assert!(SubmitPhase::Sending.button_html().unwrap().contains("Sending"));
		assert!(SubmitPhase::Sent.button_html().unwrap().contains("Message Sent!"));
	}
}
