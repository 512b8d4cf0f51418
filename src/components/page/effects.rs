//! Decorative pointer effects and the page-loaded hook.

use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use log::info;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::dom;

/// Cards are wired up a moment after start so late-rendered cards are caught.
const TILT_INSTALL_DELAY: Duration = Duration::from_millis(1000);
/// Pointer offset from the card centre that yields one degree of rotation.
const TILT_DAMPING: f64 = 20.0;

const HERO_FADE_INS: &str = ".hero .animate-fade-in, .hero .animate-fade-in-delay, \
	.hero .animate-fade-in-delay-2, .hero .animate-fade-in-delay-3";

/// CSS transform for a card of `width` x `height` with the pointer at `(x, y)`
/// relative to its top-left corner.
pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64) -> String {
	let rotate_x = (y - height / 2.0) / TILT_DAMPING;
	let rotate_y = (width / 2.0 - x) / TILT_DAMPING;
	format!("perspective(1000px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) translateZ(10px)")
}

/// The hero glow follows the pointer only while it is over or above the hero.
pub fn glow_follows(pointer_y: f64, hero_bottom: f64) -> bool {
	pointer_y <= hero_bottom
}

pub fn install() {
	set_timeout(install_tilt, TILT_INSTALL_DELAY);
	install_cursor_glow();
	install_loaded_hook();
}

fn install_tilt() {
	for card in dom::query_all(".project-card, .achievement-card") {
		let target = card.clone();
		dom::listen(&card, "mousemove", move |e| {
			let Ok(e) = e.dyn_into::<MouseEvent>() else {
				return;
			};
			let rect = target.get_bounding_client_rect();
			let (x, y) = (
				e.client_x() as f64 - rect.left(),
				e.client_y() as f64 - rect.top(),
			);
			let transform = tilt_transform(x, y, rect.width(), rect.height());
			dom::set_style(&target, "transform", &transform);
		});

		let target = card.clone();
		dom::listen(&card, "mouseleave", move |_| {
			dom::set_style(&target, "transform", "");
		});
	}
}

fn install_cursor_glow() {
	let Some(hero) = dom::query(".hero") else {
		return;
	};
	let _ = window_event_listener(ev::mousemove, move |e: MouseEvent| {
		let rect = hero.get_bounding_client_rect();
		let (x, y) = (e.client_x() as f64, e.client_y() as f64);
		if !glow_follows(y, rect.bottom()) {
			return;
		}
		dom::set_style(&hero, "--mouse-x", &format!("{x}px"));
		dom::set_style(&hero, "--mouse-y", &format!("{y}px"));
	});
}

fn install_loaded_hook() {
	let already_loaded = dom::document().is_some_and(|d| d.ready_state() == "complete");
	if already_loaded {
		mark_loaded();
	} else {
		let _ = window_event_listener(ev::load, move |_| mark_loaded());
	}
}

fn mark_loaded() {
	if let Some(body) = dom::document().and_then(|d| d.body()) {
		dom::set_class(&body, "loaded", true);
	}
	for el in dom::query_all(HERO_FADE_INS) {
		dom::set_style(&el, "opacity", "");
	}
	info!("portfolio-fx: portfolio loaded");
}
