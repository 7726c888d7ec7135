//! Pointer flourishes and scroll parallax.
//!
//! Hover listeners are delegated from the document, so project cards that the
//! gallery filter re-renders keep their effects without rebinding.

use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event, MouseEvent, Node};

use super::dom::{self, remove_style, set_style, set_timeout, Listener};
use crate::reveal::{parallax_speed, parallax_transform, Bounds, Ripple, Tilt, TILT_RESET};

const CARD_SELECTOR: &str = ".project-card";
const BUTTON_SELECTOR: &str = ".btn";
const NAV_LINK_SELECTOR: &str = ".nav-link";
const GLITCH_SELECTOR: &str = ".glitch";
const PARALLAX_SELECTOR: &str = "[data-parallax]";

const RIPPLE_MS: u32 = 600;
const GLOW_MS: u32 = 1_000;
const BOUNCE_MS: u32 = 500;
const GLITCH_MS: u32 = 500;
const BOUNCE_ANIMATION: &str = "bounce 0.5s ease";

pub struct Effects {
    _listeners: Vec<Listener>,
}

impl Effects {
    pub fn bind() -> Option<Self> {
        let document = dom::window_document()?;
        let win = window()?;

        if dom::prefers_reduced_motion() {
            log::info!("reduced motion preferred, hover effects and parallax off");
            return Some(Self { _listeners: Vec::new() });
        }

        let mut listeners = vec![
            Listener::new(&document, "mouseover", on_pointer_over),
            Listener::new(&document, "mousemove", on_pointer_move),
            Listener::new(&document, "mouseout", on_pointer_out),
        ];

        let layers = parallax_layers();
        if !layers.is_empty() {
            log::debug!("parallax on {} layers", layers.len());
            listeners.push(Listener::new(&win, "scroll", move |_| {
                let scroll_y = dom::scroll_y();
                for (layer, speed) in &layers {
                    set_style(layer, "transform", &parallax_transform(scroll_y, *speed));
                }
            }));
        }

        Some(Self { _listeners: listeners })
    }
}

fn parallax_layers() -> Vec<(Element, f64)> {
    let Some(nodes) = dom::window_document().and_then(|d| d.query_selector_all(PARALLAX_SELECTOR).ok()) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index)?.dyn_into::<Element>().ok())
        .map(|layer| {
            let speed = parallax_speed(layer.get_attribute("data-parallax").as_deref());
            (layer, speed)
        })
        .collect()
}

/// The element matching `selector` under the pointer, with the mouse event.
fn pointer_on(event: &Event, selector: &str) -> Option<(MouseEvent, Element)> {
    let mouse = event.dyn_ref::<MouseEvent>()?.clone();
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let host = target.closest(selector).ok().flatten()?;
    Some((mouse, host))
}

/// Like `pointer_on`, but only when the pointer crossed `host`'s border.
/// `mouseover` and `mouseout` also fire when moving between its children.
fn crossing(event: &Event, selector: &str) -> Option<(MouseEvent, Element)> {
    let (mouse, host) = pointer_on(event, selector)?;
    let related = mouse.related_target().and_then(|target| target.dyn_into::<Node>().ok());

    (!host.contains(related.as_ref())).then_some((mouse, host))
}

fn client(mouse: &MouseEvent) -> (f64, f64) {
    (f64::from(mouse.client_x()), f64::from(mouse.client_y()))
}

fn bounds(element: &Element) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

fn on_pointer_over(event: Event) {
    if let Some((mouse, card)) = crossing(&event, CARD_SELECTOR) {
        spawn_ripple(&card, &mouse);
    }
    if let Some((mouse, button)) = crossing(&event, BUTTON_SELECTOR) {
        spawn_glow(&button, &mouse);
    }
    if let Some((_, link)) = crossing(&event, NAV_LINK_SELECTOR) {
        bounce_icon(&link);
    }
    if let Some((_, text)) = crossing(&event, GLITCH_SELECTOR) {
        let _ = text.class_list().add_1("glitch-active");
        set_timeout(GLITCH_MS, move || {
            let _ = text.class_list().remove_1("glitch-active");
        });
    }
}

fn on_pointer_move(event: Event) {
    let Some((mouse, card)) = pointer_on(&event, CARD_SELECTOR) else {
        return;
    };

    // The entrance animation holds `transform` until it is removed.
    remove_style(&card, "animation");
    let tilt = Tilt::toward(client(&mouse), bounds(&card));
    set_style(&card, "transform", &tilt.css());
}

fn on_pointer_out(event: Event) {
    if let Some((_, card)) = crossing(&event, CARD_SELECTOR) {
        set_style(&card, "transform", TILT_RESET);
    }
}

fn transient(class: &str, parent: &Element, lifetime_ms: u32) -> Option<Element> {
    let node = dom::window_document()?.create_element("div").ok()?;
    node.set_class_name(class);
    parent.append_child(&node).ok()?;

    let removed = node.clone();
    set_timeout(lifetime_ms, move || removed.remove());
    Some(node)
}

fn spawn_ripple(card: &Element, mouse: &MouseEvent) {
    let ripple = Ripple::at(client(mouse), bounds(card));
    let Some(node) = transient("ripple", card, RIPPLE_MS) else {
        return;
    };

    let size = format!("{}px", ripple.size);
    set_style(&node, "width", &size);
    set_style(&node, "height", &size);
    set_style(&node, "left", &format!("{}px", ripple.left));
    set_style(&node, "top", &format!("{}px", ripple.top));
}

fn spawn_glow(button: &Element, mouse: &MouseEvent) {
    let (x, y) = bounds(button).local(client(mouse));
    let Some(node) = transient("button-glow", button, GLOW_MS) else {
        return;
    };

    set_style(&node, "left", &format!("{x}px"));
    set_style(&node, "top", &format!("{y}px"));
}

fn bounce_icon(link: &Element) {
    let Some(icon) = link.query_selector("i").ok().flatten() else {
        return;
    };

    set_style(&icon, "animation", BOUNCE_ANIMATION);
    set_timeout(BOUNCE_MS, move || remove_style(&icon, "animation"));
}
