//! Mobile menu and in-page anchor scrolling.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom;

/// Things that open or close the mobile menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
	Toggle,
	LinkClicked,
	Escape,
}

impl MenuAction {
	/// Menu state after this action.
	pub fn apply(self, open: bool) -> bool {
		match self {
			MenuAction::Toggle => !open,
			MenuAction::LinkClicked | MenuAction::Escape => false,
		}
	}
}

/// Selector for the element an in-page link points at, if it points anywhere.
pub fn anchor_target(href: &str) -> Option<&str> {
	(href.starts_with('#') && href.len() > 1).then_some(href)
}

pub fn install() {
	install_menu();
	install_smooth_scroll();
}

fn install_menu() {
	let toggle = dom::query(".nav-toggle");
	let menu = dom::query(".nav-menu");
	let open = RwSignal::new(false);

	let (toggle_fx, menu_fx) = (toggle.clone(), menu.clone());
	Effect::new(move |_| {
		let is_open = open.get();
		for el in [&toggle_fx, &menu_fx].into_iter().flatten() {
			dom::set_class(el, "active", is_open);
		}
		if let Some(body) = dom::document().and_then(|d| d.body()) {
			dom::set_style(&body, "overflow", if is_open { "hidden" } else { "" });
		}
	});

	let act = move |action: MenuAction| open.update(|o| *o = action.apply(*o));

	if let Some(toggle) = &toggle {
		dom::listen(toggle, "click", move |_| act(MenuAction::Toggle));
	}
	for link in dom::query_all(".nav-link") {
		dom::listen(&link, "click", move |_| act(MenuAction::LinkClicked));
	}

	let _ = window_event_listener(ev::keydown, move |e: KeyboardEvent| {
		if e.key() == "Escape" && open.get_untracked() {
			act(MenuAction::Escape);
		}
	});
}

fn install_smooth_scroll() {
	for anchor in dom::query_all("a[href^=\"#\"]") {
		let link = anchor.clone();
		dom::listen(&anchor, "click", move |e| {
			e.prevent_default();
			let Some(href) = link.get_attribute("href") else {
				return;
			};
			let Some(selector) = anchor_target(&href) else {
				return;
			};
			let target = dom::document()
				.and_then(|d| d.query_selector(selector).ok().flatten())
				.and_then(|el| el.dyn_into::<HtmlElement>().ok());
			if let Some(target) = target {
				let options = ScrollIntoViewOptions::new();
				options.set_behavior(ScrollBehavior::Smooth);
				options.set_block(ScrollLogicalPosition::Start);
				target.scroll_into_view_with_scroll_into_view_options(&options);
			}
		});
	}
}
