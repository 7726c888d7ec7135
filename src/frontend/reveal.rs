use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom::{self, set_style, set_timeout, FrameLoop};
use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::reveal::{
    level_css, CountUp, RevealSpec, RevealTarget, RevealTracker, Role, Run, PROGRESS_START_DELAY_MS,
    REVEAL_ID_ATTRIBUTE, REVEAL_SELECTOR, TIMELINE_START_DELAY_MS,
};

const ANIMATED_CLASS: &str = "animated";
const SHIMMER_CLASS: &str = "shimmer";
const PULSE_ANIMATION: &str = "pulse 0.5s ease-in-out";
const PROGRESS_TRANSITION: &str = "width 1.5s ease-out";
const TIMELINE_TRANSITION: &str = "all 0.6s ease-out";

impl RevealTarget for Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }
}

type Tracker = Rc<RefCell<RevealTracker<FrameLoop>>>;

/// Scroll-triggered animations for everything matching the reveal selector.
/// Disconnects the observer and stops running counters on drop.
pub struct RevealController {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    tracker: Tracker,
}

impl RevealController {
    pub fn bind() -> Option<Self> {
        let document = dom::window_document()?;
        let tracker: Tracker = Rc::new(RefCell::new(RevealTracker::default()));

        let callback = {
            let tracker = tracker.clone();
            Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        handle_entry(&entry, &observer, &tracker);
                    }
                },
            )
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

        let nodes = document.query_selector_all(REVEAL_SELECTOR).ok()?;
        let mut bound = 0;
        for index in 0..nodes.length() {
            let Some(element) = nodes.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
                continue;
            };
            let spec = RevealSpec::read(&element);
            let id = tracker.borrow_mut().register(spec.repeat);
            let _ = element.set_attribute(REVEAL_ID_ATTRIBUTE, &id.to_string());
            prepare(&element, &spec.role);
            observer.observe(&element);
            bound += 1;
        }
        log::info!("reveal controller observing {bound} elements");

        Some(Self {
            observer,
            _callback: callback,
            tracker,
        })
    }
}

impl Drop for RevealController {
    fn drop(&mut self) {
        self.observer.disconnect();
        let mut tracker = self.tracker.borrow_mut();
        log::debug!("reveal controller stopped, {} counters running", tracker.running());
        tracker.clear();
    }
}

/// Puts sub-animated elements in their start state before they scroll in.
fn prepare(element: &Element, role: &Role) {
    match role {
        Role::Progress { .. } => {
            set_style(element, "width", "0%");
            let _ = element.class_list().remove_1(SHIMMER_CLASS);
        }
        Role::Timeline(side) => {
            set_style(element, "opacity", "0");
            set_style(element, "transform", &side.initial_transform());
        }
        Role::Plain | Role::Counter { .. } => {}
    }
}

fn reveal_id(element: &Element) -> Option<u32> {
    element.get_attribute(REVEAL_ID_ATTRIBUTE)?.parse().ok()
}

fn handle_entry(entry: &IntersectionObserverEntry, observer: &IntersectionObserver, tracker: &Tracker) {
    let element = entry.target();
    let Some(id) = reveal_id(&element) else {
        return;
    };

    if !entry.is_intersecting() {
        if tracker.borrow_mut().exit(id) {
            let spec = RevealSpec::read(&element);
            dom::remove_style(&element, "animation");
            let _ = element.class_list().remove_1(ANIMATED_CLASS);
            prepare(&element, &spec.role);
        }
        return;
    }

    let Some(run) = tracker.borrow_mut().enter(id) else {
        return;
    };

    let spec = RevealSpec::read(&element);
    if !spec.repeat {
        observer.unobserve(&element);
    }

    let tracker = tracker.clone();
    set_timeout(spec.delay_ms, move || {
        if !tracker.borrow().is_current(run) {
            return;
        }

        set_style(&element, "animation", &spec.animation_css());
        let _ = element.class_list().add_1(ANIMATED_CLASS);
        run_role(&element, spec.role, run, &tracker);
    });
}

fn run_role(element: &Element, role: Role, run: Run, tracker: &Tracker) {
    match role {
        Role::Counter {
            target,
            suffix,
            duration_ms,
        } => {
            let mut count = CountUp::new(target, duration_ms, suffix);
            let element = element.clone();
            let finished = tracker.clone();
            let frames = FrameLoop::start(move |dt_ms| {
                let frame = count.advance(dt_ms);
                element.set_text_content(Some(&frame.text));

                if frame.done {
                    set_style(&element, "animation", PULSE_ANIMATION);
                    finished.borrow_mut().finish(run);
                }
                !frame.done
            });

            if let Some(frames) = frames {
                tracker.borrow_mut().attach(run, frames);
            }
            return;
        }
        Role::Progress { level } => {
            let element = element.clone();
            set_timeout(PROGRESS_START_DELAY_MS, move || {
                set_style(&element, "transition", PROGRESS_TRANSITION);
                set_style(&element, "width", &level_css(level));
                let _ = element.class_list().add_1(SHIMMER_CLASS);
            });
        }
        Role::Timeline(_) => {
            let element = element.clone();
            set_timeout(TIMELINE_START_DELAY_MS, move || {
                set_style(&element, "transition", TIMELINE_TRANSITION);
                set_style(&element, "opacity", "1");
                set_style(&element, "transform", "translateX(0)");
            });
        }
        Role::Plain => {}
    }

    tracker.borrow_mut().finish(run);
}
