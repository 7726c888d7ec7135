use std::collections::HashMap;

use crate::config::{
    parse_reveal_delay, parse_reveal_duration, parse_with_bounds, COUNTER_DEFAULT_DURATION_MS,
    REVEAL_DEFAULT_ANIMATION, REVEAL_DEFAULT_DURATION_MS,
};

pub const REVEAL_SELECTOR: &str = ".fade-in, .slide-in, .scale-in, .rotate-in, .timeline-item, \
     .skill-progress, .stat-value, .cert-card, [data-animation]";
pub const REVEAL_ID_ATTRIBUTE: &str = "data-reveal-id";
pub const PROGRESS_START_DELAY_MS: u32 = 100;
pub const TIMELINE_START_DELAY_MS: u32 = 200;
pub const TIMELINE_OFFSET_PX: i32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn initial_transform(self) -> String {
        let offset = match self {
            Self::Left => -TIMELINE_OFFSET_PX,
            Self::Right => TIMELINE_OFFSET_PX,
        };
        format!("translateX({offset}px)")
    }
}

/// Extra behavior an element gets on top of its CSS animation.
#[derive(Clone, Debug, PartialEq)]
pub enum Role {
    Plain,
    Counter { target: u64, suffix: String, duration_ms: u32 },
    Progress { level: f64 },
    Timeline(Side),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealSpec {
    pub animation: String,
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub repeat: bool,
    pub role: Role,
}

/// What an element exposes to the controller: attributes, classes, text.
pub trait RevealTarget {
    fn attribute(&self, name: &str) -> Option<String>;
    fn has_class(&self, class: &str) -> bool;
    fn text(&self) -> String;
}

impl RevealSpec {
    pub fn read(target: &impl RevealTarget) -> Self {
        let duration_attr = target.attribute("data-duration");
        let animation = target
            .attribute("data-animation")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| REVEAL_DEFAULT_ANIMATION.to_string());

        Self {
            animation,
            delay_ms: parse_reveal_delay(target.attribute("data-delay").as_deref()),
            duration_ms: parse_reveal_duration(duration_attr.as_deref(), REVEAL_DEFAULT_DURATION_MS),
            repeat: target.attribute("data-repeat").is_some(),
            role: Role::read(target, duration_attr.as_deref()),
        }
    }

    pub fn animation_css(&self) -> String {
        format!("{} {}ms ease-out forwards", self.animation, self.duration_ms)
    }
}

impl Role {
    fn read(target: &impl RevealTarget, duration_attr: Option<&str>) -> Self {
        if target.has_class("skill-progress") {
            return target
                .attribute("data-level")
                .as_deref()
                .and_then(parse_level)
                .map(|level| Self::Progress { level })
                .unwrap_or(Self::Plain);
        }

        if target.has_class("stat-value") || target.attribute("data-counter").is_some() {
            let raw = target.attribute("data-target").unwrap_or_else(|| target.text());
            return match parse_count(&raw) {
                Some(count) => Self::Counter {
                    target: count,
                    suffix: target.attribute("data-suffix").unwrap_or_default(),
                    duration_ms: parse_reveal_duration(duration_attr, COUNTER_DEFAULT_DURATION_MS),
                },
                None => Self::Plain,
            };
        }

        if target.has_class("timeline-item") {
            let side = if target.has_class("left") {
                Side::Left
            } else {
                Side::Right
            };
            return Self::Timeline(side);
        }

        Self::Plain
    }
}

/// Accepts `"90%"`, `"90"`, or `"90.5 %"`; clamps to 0..=100.
pub fn parse_level(raw: &str) -> Option<f64> {
    let value = raw.trim().trim_end_matches('%').trim().parse::<f64>().ok()?;
    value.is_finite().then(|| value.clamp(0.0, 100.0))
}

pub fn level_css(level: f64) -> String {
    format!("{level}%")
}

fn parse_count(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

#[derive(Clone, Debug, PartialEq)]
pub struct CountUpFrame {
    pub text: String,
    pub done: bool,
}

/// Count from zero to `target` over `duration_ms` of frame time.
#[derive(Clone, Debug)]
pub struct CountUp {
    current: f64,
    target: f64,
    per_ms: f64,
    suffix: String,
}

impl CountUp {
    pub fn new(target: u64, duration_ms: u32, suffix: impl Into<String>) -> Self {
        let target = target as f64;

        Self {
            current: 0.0,
            target,
            per_ms: target / f64::from(duration_ms.max(1)),
            suffix: suffix.into(),
        }
    }

    pub fn advance(&mut self, dt_ms: f64) -> CountUpFrame {
        self.current = (self.current + self.per_ms * dt_ms.max(0.0)).min(self.target);

        if self.current < self.target {
            CountUpFrame {
                text: format!("{}", self.current.floor() as u64),
                done: false,
            }
        } else {
            CountUpFrame {
                text: format!("{}{}", self.target as u64, self.suffix),
                done: true,
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Animating,
    Done,
}

/// One started reveal. It goes stale once its element resets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    pub id: u32,
    generation: u32,
}

struct Tracked<H> {
    phase: Phase,
    repeat: bool,
    generation: u32,
    running: Option<H>,
}

/// Reveal lifecycle of every observed element.
///
/// An element animates the first time it scrolls in. Elements marked for
/// repeats go back to `Idle` when they leave, which drops whatever was still
/// running for them. `H` is the handle of a running sub-animation; at most one
/// is held per element.
pub struct RevealTracker<H> {
    elements: HashMap<u32, Tracked<H>>,
    next_id: u32,
}

impl<H> Default for RevealTracker<H> {
    fn default() -> Self {
        Self {
            elements: HashMap::new(),
            next_id: 0,
        }
    }
}

impl<H> RevealTracker<H> {
    pub fn register(&mut self, repeat: bool) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.elements.insert(
            id,
            Tracked {
                phase: Phase::Idle,
                repeat,
                generation: 0,
                running: None,
            },
        );
        id
    }

    pub fn phase(&self, id: u32) -> Option<Phase> {
        self.elements.get(&id).map(|tracked| tracked.phase)
    }

    /// Starts a reveal if the element is idle.
    pub fn enter(&mut self, id: u32) -> Option<Run> {
        let tracked = self.elements.get_mut(&id)?;
        if tracked.phase != Phase::Idle {
            return None;
        }

        tracked.phase = Phase::Animating;
        Some(Run {
            id,
            generation: tracked.generation,
        })
    }

    pub fn is_current(&self, run: Run) -> bool {
        self.elements
            .get(&run.id)
            .is_some_and(|tracked| tracked.generation == run.generation && tracked.phase == Phase::Animating)
    }

    /// Holds `handle` for the run, replacing any earlier one. Stale runs drop it.
    pub fn attach(&mut self, run: Run, handle: H) -> bool {
        if !self.is_current(run) {
            return false;
        }

        if let Some(tracked) = self.elements.get_mut(&run.id) {
            tracked.running = Some(handle);
        }
        true
    }

    pub fn finish(&mut self, run: Run) {
        if !self.is_current(run) {
            return;
        }
        if let Some(tracked) = self.elements.get_mut(&run.id) {
            tracked.phase = Phase::Done;
        }
    }

    /// Element left the viewport. Returns whether it was reset.
    pub fn exit(&mut self, id: u32) -> bool {
        let Some(tracked) = self.elements.get_mut(&id) else {
            return false;
        };
        if !tracked.repeat || tracked.phase == Phase::Idle {
            return false;
        }

        tracked.phase = Phase::Idle;
        tracked.generation = tracked.generation.wrapping_add(1);
        tracked.running = None;
        true
    }

    pub fn running(&self) -> usize {
        self.elements.values().filter(|tracked| tracked.running.is_some()).count()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

pub const TILT_MAX_DEG: f64 = 10.0;
pub const TILT_RESET: &str = "perspective(1000px) rotateX(0) rotateY(0) scale3d(1, 1, 1)";
pub const PARALLAX_DEFAULT_SPEED: f64 = 0.5;
const PARALLAX_SPEED_BOUNDS: (f64, f64) = (-2.0, 2.0);
pub const SPLIT_TEXT_STEP_MS: u32 = 50;

/// Element box in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// `client` relative to the box origin.
    pub fn local(&self, client: (f64, f64)) -> (f64, f64) {
        (client.0 - self.left, client.1 - self.top)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Leans the card toward the pointer, up to `TILT_MAX_DEG` at the edges.
    pub fn toward(client: (f64, f64), bounds: Bounds) -> Self {
        let center_x = bounds.width / 2.0;
        let center_y = bounds.height / 2.0;
        if center_x <= 0.0 || center_y <= 0.0 {
            return Self {
                rotate_x: 0.0,
                rotate_y: 0.0,
            };
        }

        let (x, y) = bounds.local(client);
        let percent_x = ((x - center_x) / center_x).clamp(-1.0, 1.0);
        let percent_y = ((y - center_y) / center_y).clamp(-1.0, 1.0);

        Self {
            rotate_x: -percent_y * TILT_MAX_DEG,
            rotate_y: percent_x * TILT_MAX_DEG,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d(1.02, 1.02, 1.02)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Square ripple centered on the pointer, large enough to cover the box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    pub fn at(client: (f64, f64), bounds: Bounds) -> Self {
        let size = bounds.width.max(bounds.height);
        let (x, y) = bounds.local(client);

        Self {
            size,
            left: x - size / 2.0,
            top: y - size / 2.0,
        }
    }
}

/// Reads `data-parallax`; a bare attribute means the default speed.
pub fn parallax_speed(raw: Option<&str>) -> f64 {
    parse_with_bounds(
        raw.filter(|value| !value.trim().is_empty()),
        PARALLAX_DEFAULT_SPEED,
        PARALLAX_SPEED_BOUNDS,
    )
}

pub fn parallax_transform(scroll_y: f64, speed: f64) -> String {
    let offset = -(scroll_y.max(0.0) * speed);
    format!("translateY({offset:.1}px)")
}

/// Characters of `text` with their staggered animation delays.
pub fn split_text(text: &str) -> Vec<(char, u32)> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| {
            let ch = if ch == ' ' { '\u{a0}' } else { ch };
            (ch, index as u32 * SPLIT_TEXT_STEP_MS)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeElement {
        attributes: HashMap<&'static str, &'static str>,
        classes: Vec<&'static str>,
        text: &'static str,
    }

    impl RevealTarget for FakeElement {
        fn attribute(&self, name: &str) -> Option<String> {
            self.attributes.get(name).map(|value| value.to_string())
        }

        fn has_class(&self, class: &str) -> bool {
            self.classes.contains(&class)
        }

        fn text(&self) -> String {
            self.text.to_string()
        }
    }

    #[test]
    fn defaults_apply_without_attributes() {
        let spec = RevealSpec::read(&FakeElement {
            classes: vec!["fade-in"],
            ..FakeElement::default()
        });

        assert_eq!(spec.animation_css(), "fadeInUp 800ms ease-out forwards");
        assert_eq!(spec.delay_ms, 0);
        assert!(!spec.repeat);
        assert_eq!(spec.role, Role::Plain);
    }

    #[test]
    fn counter_reads_target_suffix_and_duration() {
        let spec = RevealSpec::read(&FakeElement {
            attributes: HashMap::from([("data-target", "700"), ("data-suffix", "+"), ("data-delay", "150")]),
            classes: vec!["stat-value"],
            ..FakeElement::default()
        });

        assert_eq!(spec.delay_ms, 150);
        assert_eq!(
            spec.role,
            Role::Counter {
                target: 700,
                suffix: "+".to_string(),
                duration_ms: COUNTER_DEFAULT_DURATION_MS,
            }
        );
    }

    #[test]
    fn counter_falls_back_to_text_content() {
        let spec = RevealSpec::read(&FakeElement {
            attributes: HashMap::from([("data-counter", "")]),
            text: "1,200",
            ..FakeElement::default()
        });

        assert!(matches!(spec.role, Role::Counter { target: 1200, .. }));
    }

    #[test]
    fn progress_and_timeline_roles_are_detected() {
        let progress = RevealSpec::read(&FakeElement {
            attributes: HashMap::from([("data-level", "85%")]),
            classes: vec!["skill-progress"],
            ..FakeElement::default()
        });
        assert_eq!(progress.role, Role::Progress { level: 85.0 });

        let timeline = RevealSpec::read(&FakeElement {
            classes: vec!["timeline-item", "left"],
            ..FakeElement::default()
        });
        assert_eq!(timeline.role, Role::Timeline(Side::Left));
        assert_eq!(Side::Left.initial_transform(), "translateX(-50px)");
    }

    #[test]
    fn levels_are_clamped() {
        assert_eq!(parse_level("120%"), Some(100.0));
        assert_eq!(parse_level(" 42 "), Some(42.0));
        assert_eq!(parse_level("-5"), Some(0.0));
        assert_eq!(parse_level("wide"), None);
    }

    struct Handle(Rc<Cell<usize>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn re_entry_without_repeat_does_not_restart() {
        let mut tracker = RevealTracker::<Handle>::default();
        let id = tracker.register(false);

        let run = tracker.enter(id).unwrap();
        assert_eq!(tracker.phase(id), Some(Phase::Animating));
        assert_eq!(tracker.enter(id), None);

        tracker.finish(run);
        assert_eq!(tracker.phase(id), Some(Phase::Done));
        assert!(!tracker.exit(id));
        assert_eq!(tracker.enter(id), None);
        assert_eq!(tracker.phase(id), Some(Phase::Done));
    }

    #[test]
    fn repeat_restarts_exactly_one_counter() {
        let dropped = Rc::new(Cell::new(0));
        let mut tracker = RevealTracker::default();
        let id = tracker.register(true);

        let first = tracker.enter(id).unwrap();
        assert!(tracker.attach(first, Handle(dropped.clone())));
        assert_eq!(tracker.running(), 1);

        assert!(tracker.exit(id));
        assert_eq!(dropped.get(), 1);
        assert_eq!(tracker.running(), 0);
        assert_eq!(tracker.phase(id), Some(Phase::Idle));

        let second = tracker.enter(id).unwrap();
        assert!(tracker.attach(second, Handle(dropped.clone())));
        assert!(!tracker.attach(first, Handle(dropped.clone())));
        assert_eq!(dropped.get(), 2);
        assert_eq!(tracker.running(), 1);

        assert!(tracker.attach(second, Handle(dropped.clone())));
        assert_eq!(dropped.get(), 3);
        assert_eq!(tracker.running(), 1);
    }

    #[test]
    fn stale_run_cannot_finish_a_newer_one() {
        let mut tracker = RevealTracker::<Handle>::default();
        let id = tracker.register(true);

        let first = tracker.enter(id).unwrap();
        tracker.exit(id);
        let second = tracker.enter(id).unwrap();

        assert!(!tracker.is_current(first));
        tracker.finish(first);
        assert_eq!(tracker.phase(id), Some(Phase::Animating));

        tracker.finish(second);
        assert_eq!(tracker.phase(id), Some(Phase::Done));
        assert!(tracker.exit(id));
    }

    #[test]
    fn unknown_elements_are_ignored() {
        let mut tracker = RevealTracker::<Handle>::default();
        assert_eq!(tracker.enter(3), None);
        assert!(!tracker.exit(3));
        assert_eq!(tracker.phase(3), None);
    }

    #[test]
    fn tilt_leans_toward_the_pointer() {
        let bounds = Bounds {
            left: 100.0,
            top: 50.0,
            width: 200.0,
            height: 100.0,
        };

        let center = Tilt::toward((200.0, 100.0), bounds);
        assert_eq!(center, Tilt { rotate_x: 0.0, rotate_y: 0.0 });

        let corner = Tilt::toward((300.0, 50.0), bounds);
        assert_eq!(corner, Tilt { rotate_x: TILT_MAX_DEG, rotate_y: TILT_MAX_DEG });
        assert_eq!(
            corner.css(),
            "perspective(1000px) rotateX(10.00deg) rotateY(10.00deg) scale3d(1.02, 1.02, 1.02)"
        );

        let collapsed = Bounds { width: 0.0, ..bounds };
        assert_eq!(Tilt::toward((300.0, 50.0), collapsed).rotate_y, 0.0);
    }

    #[test]
    fn ripple_is_centered_on_the_pointer() {
        let bounds = Bounds {
            left: 10.0,
            top: 20.0,
            width: 300.0,
            height: 120.0,
        };

        let ripple = Ripple::at((60.0, 80.0), bounds);
        assert_eq!(ripple, Ripple { size: 300.0, left: -100.0, top: -90.0 });
        assert_eq!(bounds.local((60.0, 80.0)), (50.0, 60.0));
    }

    #[test]
    fn parallax_moves_against_scroll() {
        assert_eq!(parallax_speed(None), PARALLAX_DEFAULT_SPEED);
        assert_eq!(parallax_speed(Some("")), PARALLAX_DEFAULT_SPEED);
        assert_eq!(parallax_speed(Some("0.3")), 0.3);
        assert_eq!(parallax_speed(Some("fast")), PARALLAX_DEFAULT_SPEED);
        assert_eq!(parallax_speed(Some("9")), PARALLAX_DEFAULT_SPEED);

        assert_eq!(parallax_transform(200.0, 0.5), "translateY(-100.0px)");
        assert_eq!(parallax_transform(100.0, -0.3), "translateY(30.0px)");
    }

    #[test]
    fn split_text_staggers_characters() {
        let chars = split_text("Hi yo");

        assert_eq!(chars.len(), 5);
        assert_eq!(chars[2], ('\u{a0}', 2 * SPLIT_TEXT_STEP_MS));
        assert_eq!(chars[4], ('o', 4 * SPLIT_TEXT_STEP_MS));
    }

    #[test]
    fn count_up_is_frame_rate_independent() {
        let mut fast = CountUp::new(100, 1000, "%");
        let mut slow = CountUp::new(100, 1000, "%");

        for _ in 0..30 {
            fast.advance(10.0);
        }
        for _ in 0..10 {
            slow.advance(30.0);
        }

        assert_eq!(fast.advance(0.0), slow.advance(0.0));
        assert_eq!(slow.advance(0.0).text, "30");
    }

    #[test]
    fn count_up_finishes_on_exact_target_with_suffix() {
        let mut count = CountUp::new(700, 2000, "+");

        let frame = count.advance(1999.0);
        assert!(!frame.done);

        let frame = count.advance(16.0);
        assert_eq!(frame, CountUpFrame { text: "700+".to_string(), done: true });
    }
}
