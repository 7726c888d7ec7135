use std::str::FromStr;

pub const REFERENCE_WIDTH: f64 = 1920.0;
pub const REFERENCE_HEIGHT: f64 = 1080.0;
pub const MOBILE_BREAKPOINT: f64 = 768.0;
pub const FALLBACK_VIEWPORT: (f64, f64) = (1280.0, 720.0);

pub const DEFAULT_PARTICLE_COUNT: u32 = 100;
pub const DEFAULT_MOBILE_PARTICLE_COUNT: u32 = 50;
pub const DEFAULT_PARTICLE_SIZE: f64 = 2.0;
pub const DEFAULT_PARTICLE_SPEED: f64 = 0.5;
pub const DEFAULT_CONNECTION_DISTANCE: f64 = 120.0;
pub const DEFAULT_REPULSION_RADIUS: f64 = 150.0;

pub const MIN_PARTICLES: usize = 12;
pub const MAX_PARTICLES: usize = 150;

const PARTICLE_COUNT_BOUNDS: (u32, u32) = (10, 400);
const PARTICLE_SPEED_BOUNDS: (f64, f64) = (0.05, 4.0);
const CONNECTION_DISTANCE_BOUNDS: (f64, f64) = (20.0, 400.0);
const REPULSION_RADIUS_BOUNDS: (f64, f64) = (0.0, 600.0);

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_DEFAULT_ANIMATION: &str = "fadeInUp";
pub const REVEAL_DEFAULT_DURATION_MS: u32 = 800;
pub const COUNTER_DEFAULT_DURATION_MS: u32 = 2_000;
const REVEAL_DELAY_MS_BOUNDS: (u32, u32) = (0, 10_000);
const REVEAL_DURATION_MS_BOUNDS: (u32, u32) = (1, 20_000);

pub const FILTER_FADE_MS: u32 = 300;

/// Parses `raw` and keeps it only when it falls inside the inclusive `bounds`.
pub fn parse_with_bounds<T>(raw: Option<&str>, default: T, bounds: (T, T)) -> T
where
    T: FromStr + PartialOrd + Copy,
{
    raw.and_then(|value| value.trim().parse::<T>().ok())
        .filter(|value| *value >= bounds.0 && *value <= bounds.1)
        .unwrap_or(default)
}

pub fn parse_reveal_delay(raw: Option<&str>) -> u32 {
    parse_with_bounds(raw, 0, REVEAL_DELAY_MS_BOUNDS)
}

pub fn parse_reveal_duration(raw: Option<&str>, default: u32) -> u32 {
    parse_with_bounds(raw, default, REVEAL_DURATION_MS_BOUNDS)
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub base_count: u32,
    pub particle_size: f64,
    pub speed: f64,
    pub connection_distance: f64,
    pub repulsion_radius: f64,
    pub pointer_interaction: bool,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            base_count: DEFAULT_PARTICLE_COUNT,
            particle_size: DEFAULT_PARTICLE_SIZE,
            speed: DEFAULT_PARTICLE_SPEED,
            connection_distance: DEFAULT_CONNECTION_DISTANCE,
            repulsion_radius: DEFAULT_REPULSION_RADIUS,
            pointer_interaction: true,
        }
    }
}

impl ParticleConfig {
    /// Builds the config from `data-*` attribute lookups on the canvas element.
    pub fn from_attributes(viewport_width: f64, attribute: impl Fn(&str) -> Option<String>) -> Self {
        let default_count = if viewport_width < MOBILE_BREAKPOINT {
            DEFAULT_MOBILE_PARTICLE_COUNT
        } else {
            DEFAULT_PARTICLE_COUNT
        };

        let base_count = parse_with_bounds(
            attribute("data-particle-count").as_deref(),
            default_count,
            PARTICLE_COUNT_BOUNDS,
        );
        let speed = parse_with_bounds(
            attribute("data-particle-speed").as_deref(),
            DEFAULT_PARTICLE_SPEED,
            PARTICLE_SPEED_BOUNDS,
        );
        let connection_distance = parse_with_bounds(
            attribute("data-connection-distance").as_deref(),
            DEFAULT_CONNECTION_DISTANCE,
            CONNECTION_DISTANCE_BOUNDS,
        );
        let repulsion_radius = parse_with_bounds(
            attribute("data-repulsion-radius").as_deref(),
            DEFAULT_REPULSION_RADIUS,
            REPULSION_RADIUS_BOUNDS,
        );
        let pointer_interaction = !matches!(
            attribute("data-pointer-interaction").as_deref().map(str::trim),
            Some("off" | "false")
        );

        Self {
            base_count,
            speed,
            connection_distance,
            repulsion_radius,
            pointer_interaction,
            ..Self::default()
        }
    }
}
