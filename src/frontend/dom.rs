use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    window, Document, Element, Event, EventTarget, HtmlAnchorElement, HtmlElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, Storage,
};

use crate::config::FALLBACK_VIEWPORT;
use crate::particles::FRAME_MS;
use crate::theme::{Theme, ThemeHost, THEME_ATTRIBUTE, THEME_KEY};

pub fn window_document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Looks an element up by id; a miss is reported in debug builds only.
pub fn element_or_warn(id: &str) -> Option<Element> {
    let element = window_document().and_then(|document| document.get_element_by_id(id));

    if element.is_none() && cfg!(debug_assertions) {
        log::warn!("element #{id} not found, skipping");
    }

    element
}

/// Inner window size, or the fallback viewport when the window is unavailable.
pub fn viewport_size() -> (f64, f64) {
    let (fallback_width, fallback_height) = FALLBACK_VIEWPORT;
    let Some(win) = window() else {
        return FALLBACK_VIEWPORT;
    };

    let measure = |value: Result<JsValue, JsValue>, fallback: f64| {
        value.ok().and_then(|value| value.as_f64()).unwrap_or(fallback)
    };

    (
        measure(win.inner_width(), fallback_width),
        measure(win.inner_height(), fallback_height),
    )
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

pub fn remove_style(element: &Element, property: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().remove_property(property);
    }
}

/// Locks or releases page scrolling behind an overlay.
pub fn lock_body_scroll(locked: bool) {
    let Some(body) = window_document().and_then(|d| d.body()) else {
        return;
    };

    if locked {
        let _ = body.style().set_property("overflow", "hidden");
    } else {
        let _ = body.style().remove_property("overflow");
    }
}

pub fn smooth_scroll_to(id: &str) {
    let Some(target) = element_or_warn(id) else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Document-space top offset of every section that exists, in the given order.
pub fn section_tops<'a>(ids: &[&'a str]) -> Vec<(&'a str, f64)> {
    let Some(document) = window_document() else {
        return Vec::new();
    };
    let offset = scroll_y();

    ids.iter()
        .filter_map(|id| {
            let element = document.get_element_by_id(id)?;
            Some((*id, element.get_bounding_client_rect().top() + offset))
        })
        .collect()
}

/// Triggers a download through a throwaway anchor.
pub fn download(path: &str, file_name: &str) {
    let Some(document) = window_document() else {
        return;
    };
    let Some(anchor) = document
        .create_element("a")
        .ok()
        .and_then(|element| element.dyn_into::<HtmlAnchorElement>().ok())
    else {
        return;
    };

    anchor.set_href(path);
    anchor.set_download(file_name);
    anchor.click();
}

pub fn open_url(url: &str) {
    let Some(win) = window() else {
        return;
    };

    if url.starts_with("mailto:") {
        let _ = win.location().set_href(url);
    } else {
        let _ = win.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer");
    }
}

pub fn set_timeout(delay_ms: u32, callback: impl FnOnce() + 'static) {
    let Some(win) = window() else {
        return;
    };

    let callback = Closure::once_into_js(callback);
    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        i32::try_from(delay_ms).unwrap_or(i32::MAX),
    );
}

pub async fn sleep(delay_ms: u32) {
    let promise = Promise::new(&mut |resolve, _reject| {
        if let Some(win) = window() {
            let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                &resolve,
                i32::try_from(delay_ms).unwrap_or(i32::MAX),
            );
        }
    });
    let _ = JsFuture::from(promise).await;
}

/// An event listener removed again on drop.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(target: &EventTarget, kind: &'static str, handler: impl FnMut(Event) + 'static) -> Self {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        let _ = target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref());

        Self {
            target: target.clone(),
            kind,
            callback,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` loop. `step` gets the elapsed milliseconds since
/// the previous frame and returns whether to keep going. Dropping the loop
/// cancels the pending frame.
pub struct FrameLoop {
    callback: FrameCallback,
    handle: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(mut step: impl FnMut(f64) -> bool + 'static) -> Option<Self> {
        let win = window()?;
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));

        let next = callback.clone();
        let next_handle = handle.clone();
        let mut last: Option<f64> = None;
        *callback.borrow_mut() = Some(Closure::new(move |now: f64| {
            let dt = last.map_or(FRAME_MS, |previous| now - previous);
            last = Some(now);

            if !step(dt) {
                next_handle.set(None);
                let _ = next.borrow_mut().take();
                return;
            }

            let id = window().and_then(|w| {
                next.borrow()
                    .as_ref()
                    .and_then(|cb| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
            });
            next_handle.set(id);
        }));

        let id = callback
            .borrow()
            .as_ref()
            .and_then(|cb| win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        handle.set(id);

        Some(Self { callback, handle })
    }

    pub fn is_running(&self) -> bool {
        self.callback.borrow().is_some()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(win), Some(id)) = (window(), self.handle.take()) {
            let _ = win.cancel_animation_frame(id);
        }
        let _ = self.callback.borrow_mut().take();
    }
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn set_theme_attribute(theme: Theme) {
    if let Some(root) = window_document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }
}

/// Theme storage in `localStorage`, shown through `data-theme` on `<html>`.
pub struct BrowserTheme;

impl BrowserTheme {
    /// Applies without a transition, for the first paint.
    pub fn apply_now(theme: Theme) {
        set_theme_attribute(theme);
    }
}

impl ThemeHost for BrowserTheme {
    fn stored_theme(&self) -> Option<String> {
        local_storage()?.get_item(THEME_KEY).ok().flatten()
    }

    fn store_theme(&mut self, token: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(THEME_KEY, token);
        }
    }

    fn apply_theme(&mut self, theme: Theme) {
        if prefers_reduced_motion() {
            set_theme_attribute(theme);
            return;
        }

        let Some(document) = window_document() else {
            return;
        };

        let document_js: JsValue = document.into();
        let start_view_transition = Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok());

        let Some(start_view_transition) = start_view_transition else {
            set_theme_attribute(theme);
            return;
        };

        let callback = Closure::once_into_js(move || set_theme_attribute(theme));
        if start_view_transition.call1(&document_js, &callback).is_err() {
            set_theme_attribute(theme);
        }
    }

    fn system_prefers_light(&self) -> bool {
        media_matches("(prefers-color-scheme: light)")
    }
}
