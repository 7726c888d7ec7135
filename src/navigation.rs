pub const SECTIONS: [&str; 7] = [
    "home",
    "about",
    "experience",
    "projects",
    "skills",
    "certifications",
    "contact",
];

const SCROLLED_OFFSET: f64 = 50.0;
const HIDE_OFFSET: f64 = 100.0;
const DIRECTION_DELTA: f64 = 5.0;
const SPY_LINE_RATIO: f64 = 0.5;

pub fn is_section(id: &str) -> bool {
    SECTIONS.contains(&id)
}

/// Section whose top sits at or above the spy line, last in document order.
///
/// `tops` are document-space offsets, in document order.
pub fn active_section<'a>(tops: &[(&'a str, f64)], scroll_y: f64, viewport_height: f64) -> Option<&'a str> {
    let spy_line = scroll_y + viewport_height * SPY_LINE_RATIO;

    tops.iter()
        .take_while(|(_, top)| *top <= spy_line)
        .last()
        .map(|(id, _)| *id)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavbarState {
    pub scrolled: bool,
    pub hidden: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollTracker {
    last_y: f64,
    state: NavbarState,
}

impl ScrollTracker {
    pub fn update(&mut self, scroll_y: f64) -> NavbarState {
        let delta = scroll_y - self.last_y;

        self.state.scrolled = scroll_y > SCROLLED_OFFSET;

        if scroll_y <= HIDE_OFFSET {
            self.state.hidden = false;
            self.last_y = scroll_y;
        } else if delta > DIRECTION_DELTA {
            self.state.hidden = true;
            self.last_y = scroll_y;
        } else if delta < -DIRECTION_DELTA {
            self.state.hidden = false;
            self.last_y = scroll_y;
        }

        self.state
    }
}
