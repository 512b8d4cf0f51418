//! Leptos component driving the page's particle canvas.
//!
//! The component takes over the `<canvas id="particles">` already in the page
//! markup and wires up window resize and document visibility handlers. The animation loop
//! runs via `requestAnimationFrame` and stops while the tab is hidden.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use super::frame_loop::{FrameCallback, RafScheduler};
use super::state::ParticleFieldState;
use super::surface::CanvasSurface;
use super::theme::Theme;
use crate::dom;

/// Element id of the particle canvas.
pub const CANVAS_ID: &str = "particles";

type SharedState = Rc<RefCell<Option<ParticleFieldState<CanvasSurface, RafScheduler>>>>;
type Listener = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Animates the drifting particle background on the page's canvas.
///
/// The canvas always tracks the viewport size. If the page has no
/// `#particles` canvas, or the browser cannot give it a 2D context, the
/// component stays inert.
#[component]
pub fn ParticleFieldCanvas(#[prop(default = Theme::default())] theme: Theme) -> impl IntoView {
	let state: SharedState = Rc::new(RefCell::new(None));
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let resize_cb: Listener = Rc::new(RefCell::new(None));
	let visibility_cb: Listener = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		if state.borrow().is_some() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		let canvas = find_canvas(&window);
		let (w, h) = dom::viewport_size(&window);

		let state_anim = state.clone();
		*animate.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.frame();
			}
		}));

		let mut rng = Pcg64::seed_from_u64(random_seed());
		let Some(runtime) = ParticleFieldState::attach(
			canvas.and_then(CanvasSurface::new),
			RafScheduler::new(window.clone(), animate.clone()),
			theme.clone(),
			w,
			h,
			&mut rng,
		) else {
			return;
		};
		*state.borrow_mut() = Some(runtime);

		let state_resize = state.clone();
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = dom::viewport_size(&win);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let state_vis = state.clone();
		*visibility_cb.borrow_mut() = Some(Closure::new(move || {
			let hidden = document_hidden(web_sys::window());
			if let Some(ref mut s) = *state_vis.borrow_mut() {
				s.set_hidden(hidden);
			}
		}));
		if let Some(document) = window.document() {
			if let Some(ref cb) = *visibility_cb.borrow() {
				let _ = document
					.add_event_listener_with_callback("visibilitychange", cb.as_ref().unchecked_ref());
			}
		}

		// The page may already be in a background tab when we mount.
		if document_hidden(Some(window)) {
			if let Some(ref mut s) = *state.borrow_mut() {
				s.set_hidden(true);
			}
		}
	});
}

fn find_canvas(window: &Window) -> Option<HtmlCanvasElement> {
	window
		.document()?
		.get_element_by_id(CANVAS_ID)?
		.dyn_into::<HtmlCanvasElement>()
		.ok()
}

fn document_hidden(window: Option<Window>) -> bool {
	window
		.and_then(|w| w.document())
		.is_some_and(|d| d.hidden())
}

/// Seeds the particle RNG from `Math.random`, which needs no OS entropy source.
fn random_seed() -> u64 {
	(js_sys::Math::random() * (1u64 << 53) as f64) as u64
}
