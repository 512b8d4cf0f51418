//! Small lookups and listener plumbing over `web_sys`.
//!
//! Every lookup returns `Option`/empty collections instead of failing, since
//! each page feature is optional and silently skipped when its markup is
//! missing.

use log::warn;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
	Document, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
	IntersectionObserverInit, Window,
};

pub fn document() -> Option<Document> {
	web_sys::window()?.document()
}

/// Viewport `innerWidth`/`innerHeight` in CSS pixels.
pub fn viewport_size(window: &Window) -> (f64, f64) {
	let px = |v: Result<JsValue, JsValue>| {
		v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
	};
	(px(window.inner_width()), px(window.inner_height()))
}

pub fn scroll_y() -> f64 {
	web_sys::window()
		.and_then(|w| w.scroll_y().ok())
		.unwrap_or(0.0)
}

/// First element matching `selector`.
pub fn query(selector: &str) -> Option<HtmlElement> {
	document()?
		.query_selector(selector)
		.ok()
		.flatten()?
		.dyn_into::<HtmlElement>()
		.ok()
}

/// All elements matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<HtmlElement> {
	let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
		return Vec::new();
	};
	(0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<HtmlElement>().ok())
		.collect()
}

pub fn data(element: &HtmlElement, key: &str) -> Option<String> {
	element.dataset().get(key)
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
	let _ = element.style().set_property(property, value);
}

pub fn set_class(element: &HtmlElement, class: &str, on: bool) {
	let _ = element.class_list().toggle_with_force(class, on);
}

/// Attaches a listener for the lifetime of the page.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
	let cb = Closure::<dyn FnMut(Event)>::new(handler);
	let _ = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
	cb.forget();
}

/// Calls `on_visible` once per target, the first time it intersects the viewport.
///
/// The callback gets the entry's position within its notification batch,
/// which is what staggered animations key off.
pub fn on_first_intersection(
	targets: &[HtmlElement],
	threshold: f64,
	root_margin: &str,
	mut on_visible: impl FnMut(usize, HtmlElement) + 'static,
) {
	if targets.is_empty() {
		return;
	}

	let cb = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		move |entries: js_sys::Array, observer: IntersectionObserver| {
			for (index, entry) in entries.iter().enumerate() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				if !entry.is_intersecting() {
					continue;
				}
				let target = entry.target();
				observer.unobserve(&target);
				if let Ok(element) = target.dyn_into::<HtmlElement>() {
					on_visible(index, element);
				}
			}
		},
	);

	let init = IntersectionObserverInit::new();
	init.set_threshold(&JsValue::from_f64(threshold));
	init.set_root_margin(root_margin);

	match IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init) {
		Ok(observer) => {
			for target in targets {
				observer.observe(target);
			}
			cb.forget();
		}
		Err(e) => warn!("portfolio-fx: IntersectionObserver unavailable: {:?}", e),
	}
}
