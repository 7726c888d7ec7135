//! Particle field behind the hero: drifting dots, proximity links, and
//! pointer repulsion. Pure state and math; the canvas loop lives in
//! `frontend::background`.

use rand::{rngs::SmallRng, Rng};

use crate::config::{ParticleConfig, MAX_PARTICLES, MIN_PARTICLES, REFERENCE_HEIGHT, REFERENCE_WIDTH};
use crate::theme::Palette;

/// Duration of one nominal 60 Hz frame; velocities are expressed per frame.
pub const FRAME_MS: f64 = 1000.0 / 60.0;
const MAX_FRAME_STEPS: f64 = 4.0;
const REPULSION_STRENGTH: f64 = 0.5;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub color: &'static str,
    pub base_color: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub opacity: f64,
}

pub struct ParticleField {
    config: ParticleConfig,
    palette: Palette,
    particles: Vec<Particle>,
    pointer: Option<(f64, f64)>,
    width: f64,
    height: f64,
    rng: SmallRng,
    repaint: bool,
}

/// `round(base * area / reference_area)`, clamped to the supported range.
pub fn target_count(base_count: u32, width: f64, height: f64) -> usize {
    let area = width.max(0.0) * height.max(0.0);
    let ratio = area / (REFERENCE_WIDTH * REFERENCE_HEIGHT);
    let target = (f64::from(base_count) * ratio).round() as usize;

    target.clamp(MIN_PARTICLES, MAX_PARTICLES)
}

/// Link opacity for two points `distance` apart, or `None` at or past the threshold.
pub fn link_opacity(distance: f64, threshold: f64) -> Option<f64> {
    if threshold <= 0.0 || distance >= threshold {
        return None;
    }

    Some(1.0 - distance / threshold)
}

impl ParticleField {
    pub fn new(config: ParticleConfig, palette: Palette, width: f64, height: f64, rng: SmallRng) -> Self {
        let mut field = Self {
            config,
            palette,
            particles: Vec::new(),
            pointer: None,
            width,
            height,
            rng,
            repaint: true,
        };
        field.fill_to(target_count(field.config.base_count, width, height));
        field
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn set_pointer(&mut self, pointer: Option<(f64, f64)>) {
        self.pointer = pointer;
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
        for particle in &mut self.particles {
            particle.color = palette.particle;
            particle.base_color = palette.particle;
        }
        self.repaint = true;
    }

    /// Whether anything visible changed since the last call.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.repaint)
    }

    /// Adopts new canvas bounds and grows or truncates toward the area-based target.
    pub fn resize(&mut self, width: f64, height: f64) -> usize {
        self.width = width;
        self.height = height;
        self.repaint = true;

        let target = target_count(self.config.base_count, width, height);
        if target > self.particles.len() {
            self.fill_to(target);
        } else {
            self.particles.truncate(target);
        }

        target
    }

    fn fill_to(&mut self, target: usize) {
        while self.particles.len() < target {
            let particle = self.spawn();
            self.particles.push(particle);
        }
    }

    fn spawn(&mut self) -> Particle {
        let speed = self.config.speed;

        Particle {
            x: self.rng.gen::<f64>() * self.width,
            y: self.rng.gen::<f64>() * self.height,
            vx: (self.rng.gen::<f64>() - 0.5) * speed,
            vy: (self.rng.gen::<f64>() - 0.5) * speed,
            radius: self.rng.gen::<f64>() * self.config.particle_size + 1.0,
            color: self.palette.particle,
            base_color: self.palette.particle,
        }
    }

    /// Advances every particle by `dt_ms` of wall time.
    pub fn tick(&mut self, dt_ms: f64) {
        let step = (dt_ms.max(0.0) / FRAME_MS).min(MAX_FRAME_STEPS);
        let (width, height) = (self.width, self.height);
        let pointer = self.pointer.filter(|_| self.config.pointer_interaction);
        let radius = self.config.repulsion_radius;
        let palette = self.palette;
        self.repaint = true;

        for particle in &mut self.particles {
            particle.x += particle.vx * step;
            particle.y += particle.vy * step;

            if particle.x < 0.0 {
                particle.vx = particle.vx.abs();
            } else if particle.x > width {
                particle.vx = -particle.vx.abs();
            }
            if particle.y < 0.0 {
                particle.vy = particle.vy.abs();
            } else if particle.y > height {
                particle.vy = -particle.vy.abs();
            }

            particle.x = particle.x.clamp(0.0, width.max(0.0));
            particle.y = particle.y.clamp(0.0, height.max(0.0));

            let Some((px, py)) = pointer else {
                particle.color = particle.base_color;
                continue;
            };

            let dx = px - particle.x;
            let dy = py - particle.y;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance < radius {
                if distance > f64::EPSILON {
                    let force = (radius - distance) / radius;
                    particle.vx -= dx / distance * force * REPULSION_STRENGTH * step;
                    particle.vy -= dy / distance * force * REPULSION_STRENGTH * step;
                }
                particle.color = palette.highlight;
            } else {
                particle.color = particle.base_color;
            }
        }
    }

    /// Every unordered pair closer than the connection distance.
    pub fn links(&self) -> Vec<Link> {
        let threshold = self.config.connection_distance;
        let mut links = Vec::new();

        for (index, a) in self.particles.iter().enumerate() {
            for b in &self.particles[index + 1..] {
                let dx = a.x - b.x;
                let dy = a.y - b.y;
                let distance = (dx * dx + dy * dy).sqrt();

                if let Some(opacity) = link_opacity(distance, threshold) {
                    links.push(Link {
                        from: (a.x, a.y),
                        to: (b.x, b.y),
                        opacity,
                    });
                }
            }
        }

        links
    }

    #[cfg(test)]
    fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use rand::SeedableRng;

    fn field(width: f64, height: f64) -> ParticleField {
        ParticleField::new(
            ParticleConfig::default(),
            Theme::Dark.palette(),
            width,
            height,
            SmallRng::seed_from_u64(7),
        )
    }

    fn still(x: f64, y: f64) -> Particle {
        let palette = Theme::Dark.palette();
        Particle {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            radius: 2.0,
            color: palette.particle,
            base_color: palette.particle,
        }
    }

    #[test]
    fn reference_area_yields_base_count() {
        assert_eq!(target_count(100, 1920.0, 1080.0), 100);
        assert_eq!(target_count(100, 960.0, 1080.0), 50);
        assert_eq!(target_count(100, 0.0, 0.0), MIN_PARTICLES);
        assert_eq!(target_count(100, 7680.0, 4320.0), MAX_PARTICLES);
    }

    #[test]
    fn resize_converges_to_target_and_keeps_survivors() {
        let mut field = field(1920.0, 1080.0);
        assert_eq!(field.particles().len(), 100);
        let survivors: Vec<Particle> = field.particles()[..60].to_vec();

        let target = field.resize(1280.0, 972.0);
        assert_eq!(target, (100.0_f64 * 1280.0 * 972.0 / (1920.0 * 1080.0)).round() as usize);
        assert_eq!(field.particles().len(), target);
        assert_eq!(&field.particles()[..60], survivors.as_slice());

        let grown = field.resize(1920.0, 1296.0);
        assert_eq!(grown, 120);
        assert_eq!(field.particles().len(), 120);
        assert_eq!(&field.particles()[..60], survivors.as_slice());
    }

    #[test]
    fn wall_hit_reflects_velocity_and_clamps_position() {
        let mut field = field(200.0, 100.0);
        field.particles_mut().clear();
        field.particles_mut().push(Particle {
            vx: 3.0,
            vy: -2.0,
            ..still(200.0, 0.0)
        });

        field.tick(FRAME_MS);

        let particle = &field.particles()[0];
        assert!(particle.vx < 0.0);
        assert!(particle.vy > 0.0);
        assert!((0.0..=200.0).contains(&particle.x));
        assert!((0.0..=100.0).contains(&particle.y));
    }

    #[test]
    fn palette_and_resize_request_a_repaint() {
        let mut field = field(800.0, 600.0);
        assert!(field.take_repaint());
        assert!(!field.take_repaint());

        field.set_pointer(Some((10.0, 10.0)));
        assert!(!field.take_repaint());

        field.set_palette(Theme::Light.palette());
        assert!(field.take_repaint());
        assert!(field.particles().iter().all(|p| p.color == Theme::Light.palette().particle));

        field.resize(640.0, 480.0);
        assert!(field.take_repaint());
        assert!(!field.take_repaint());

        field.tick(FRAME_MS);
        assert!(field.take_repaint());
    }

    #[test]
    fn tick_scales_motion_by_elapsed_time() {
        let mut field = field(400.0, 400.0);
        field.particles_mut().clear();
        field.particles_mut().push(Particle {
            vx: 1.0,
            ..still(100.0, 100.0)
        });

        field.tick(FRAME_MS * 2.0);
        assert!((field.particles()[0].x - 102.0).abs() < 1e-9);

        field.tick(10_000.0);
        assert!((field.particles()[0].x - 102.0 - MAX_FRAME_STEPS).abs() < 1e-9);
    }

    #[test]
    fn pointer_pushes_nearby_particles_away_and_highlights_them() {
        let mut field = field(400.0, 400.0);
        field.particles_mut().clear();
        field.particles_mut().push(still(110.0, 100.0));
        field.particles_mut().push(still(390.0, 390.0));
        field.set_pointer(Some((100.0, 100.0)));

        field.tick(FRAME_MS);

        let near = &field.particles()[0];
        let far = &field.particles()[1];
        assert!(near.vx > 0.0);
        assert_eq!(near.color, Theme::Dark.palette().highlight);
        assert_eq!(far.vx, 0.0);
        assert_eq!(far.color, far.base_color);

        field.set_pointer(None);
        field.tick(FRAME_MS);
        assert_eq!(field.particles()[0].color, field.particles()[0].base_color);
    }

    #[test]
    fn pointer_exactly_on_particle_does_not_produce_nan() {
        let mut field = field(400.0, 400.0);
        field.particles_mut().clear();
        field.particles_mut().push(still(50.0, 50.0));
        field.set_pointer(Some((50.0, 50.0)));

        field.tick(FRAME_MS);

        let particle = &field.particles()[0];
        assert!(particle.vx.is_finite() && particle.vy.is_finite());
        assert_eq!(particle.color, Theme::Dark.palette().highlight);
    }

    #[test]
    fn link_opacity_decays_to_zero_at_threshold() {
        let near = link_opacity(10.0, 120.0).expect("linked");
        let far = link_opacity(110.0, 120.0).expect("linked");
        let edge = link_opacity(119.999, 120.0).expect("linked");

        assert!(near > far);
        assert!(edge < 1e-4);
        assert_eq!(link_opacity(120.0, 120.0), None);
        assert_eq!(link_opacity(0.0, 120.0), Some(1.0));
    }

    #[test]
    fn links_cover_each_close_pair_once() {
        let mut field = field(400.0, 400.0);
        field.particles_mut().clear();
        field.particles_mut().push(still(0.0, 0.0));
        field.particles_mut().push(still(60.0, 0.0));
        field.particles_mut().push(still(300.0, 300.0));

        let links = field.links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].from, (0.0, 0.0));
        assert_eq!(links[0].to, (60.0, 0.0));
        assert!((links[0].opacity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn palette_swap_recolors_every_particle() {
        let mut field = field(800.0, 600.0);
        field.set_palette(Theme::Light.palette());

        assert!(field
            .particles()
            .iter()
            .all(|particle| particle.color == "#d4915c" && particle.base_color == "#d4915c"));
    }
}
