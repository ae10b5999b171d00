//! Ambient particle field: seeding, per-frame physics and drawing.
//!
//! The field knows nothing about the DOM. Hosts feed it pointer, scroll and
//! size changes and hand it a [`Surface`] to draw on once per animation tick.

use std::f64::consts::TAU;

use super::color::Rgb;
use super::device::DeviceProfile;
use super::transition::{ColorTransition, Palette};

/// Canvas pixels per particle.
pub const AREA_PER_PARTICLE: f64 = 8000.0;
/// Share of the particle budget kept on low-end devices.
pub const LOW_END_DENSITY: f64 = 0.3;
/// Distance past an edge before a particle wraps to the opposite side.
pub const EDGE_MARGIN: f64 = 10.0;
/// Pointer attraction stops beyond this distance.
pub const POINTER_RADIUS: f64 = 150.0;
pub const POINTER_PULL: f64 = 0.2;
pub const POINTER_DECAY: f64 = 0.95;
pub const SCROLL_DECAY: f64 = 0.9;
pub const SCROLL_GAIN: f64 = -0.03;
pub const OPACITY_EASING: f64 = 0.02;
pub const PULSE_AMPLITUDE: f64 = 0.3;
/// Opacity multiplier for particles drawn over a light background.
pub const LIGHT_BACKGROUND_ALPHA: f64 = 0.4;

const SEED: f64 = 12345.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub css: &'static str,
}

/// Soft vignette laid over light backgrounds.
pub const DEPTH_GRADIENT: [GradientStop; 3] = [
    GradientStop { offset: 0.0, css: "rgba(248, 249, 250, 0.8)" },
    GradientStop { offset: 0.5, css: "rgba(233, 236, 239, 0.9)" },
    GradientStop { offset: 1.0, css: "rgba(241, 243, 244, 1)" },
];

/// Dark backdrop of the non-interactive variant.
pub const AMBIENT_GRADIENT: [GradientStop; 3] = [
    GradientStop { offset: 0.0, css: "rgba(0, 0, 0, 0.9)" },
    GradientStop { offset: 0.5, css: "rgba(0, 0, 0, 0.7)" },
    GradientStop { offset: 1.0, css: "rgba(0, 0, 0, 0.5)" },
];

/// Drawing operations the field needs from its host.
pub trait Surface {
    fn fill_background(&mut self, color: Rgb, width: f64, height: f64);
    fn fill_radial_gradient(&mut self, width: f64, height: f64, radius: f64, stops: &[GradientStop]);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb, alpha: f64);
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub base_size: f64,
    pub opacity: f64,
    pub target_opacity: f64,
    pub pulse_phase: f64,
    pub pulse_speed: f64,
    /// Seeded for parity with the layout generator; nothing reads it yet.
    pub connection_distance: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldOptions {
    pub speed: f64,
    /// Non-interactive fields ignore pointer and scroll input.
    pub interactive: bool,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            speed: 1.0,
            interactive: true,
        }
    }
}

/// Constants that differ between normal and low-end devices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    pub density: f64,
    pub size_spread: f64,
    pub velocity_scale: f64,
    pub transition_step: f64,
    pub frame_skip: u64,
}

impl Tuning {
    pub fn for_device(low_end: bool) -> Self {
        if low_end {
            Self {
                density: LOW_END_DENSITY,
                size_spread: 1.0,
                velocity_scale: 0.3,
                transition_step: 0.03,
                frame_skip: 2,
            }
        } else {
            Self {
                density: 1.0,
                size_spread: 1.5,
                velocity_scale: 0.5,
                transition_step: 0.015,
                frame_skip: 1,
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Pointer {
    x: f64,
    y: f64,
    influence: f64,
}

/// `frac(sin(i * seed) * 10000)`; reproducible so the first frame never
/// depends on wall-clock time.
pub fn seeded_random(index: usize) -> f64 {
    let x = (index as f64 * SEED).sin() * 10000.0;
    x - x.floor()
}

pub fn particle_count(width: f64, height: f64, low_end: bool) -> usize {
    if width <= 0.0 || height <= 0.0 {
        return 0;
    }
    let base = (width * height / AREA_PER_PARTICLE).floor();
    let scaled = if low_end {
        (base * LOW_END_DENSITY).floor()
    } else {
        base
    };
    scaled as usize
}

fn seed_particle(index: usize, width: f64, height: f64, speed: f64, tuning: &Tuning) -> Particle {
    let r = |offset: usize| seeded_random(index + offset);
    let base_size = r(0) * tuning.size_spread + 0.5;
    Particle {
        x: r(1000) * width,
        y: r(2000) * height,
        vx: (r(3000) - 0.5) * speed * tuning.velocity_scale,
        vy: (r(4000) - 0.5) * speed * tuning.velocity_scale,
        size: base_size,
        base_size,
        opacity: r(5000) * 0.6 + 0.3,
        target_opacity: r(6000) * 0.6 + 0.3,
        pulse_phase: r(7000) * TAU,
        pulse_speed: r(8000) * 0.02 + 0.01,
        connection_distance: r(9000) * 100.0 + 50.0,
    }
}

fn wrap(value: f64, extent: f64) -> f64 {
    if value < -EDGE_MARGIN {
        extent + EDGE_MARGIN
    } else if value > extent + EDGE_MARGIN {
        -EDGE_MARGIN
    } else {
        value
    }
}

pub struct ParticleField {
    width: f64,
    height: f64,
    options: FieldOptions,
    tuning: Tuning,
    particles: Vec<Particle>,
    transition: ColorTransition,
    pointer: Pointer,
    scroll_impulse: f64,
    last_scroll: Option<f64>,
    ticks: u64,
}

impl ParticleField {
    pub fn new(
        width: f64,
        height: f64,
        palette: Palette,
        options: FieldOptions,
        profile: &dyn DeviceProfile,
    ) -> Self {
        let mut field = Self {
            width: 0.0,
            height: 0.0,
            options,
            tuning: Tuning::for_device(profile.is_low_end()),
            particles: Vec::new(),
            transition: ColorTransition::new(palette),
            pointer: Pointer::default(),
            scroll_impulse: 0.0,
            last_scroll: None,
            ticks: 0,
        };
        field.resize(width, height);
        field
    }

    /// Regenerates the whole particle set for the new bounds.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.reseed();
    }

    /// Speed feeds into seeded velocities, so a change reseeds the layout.
    pub fn set_options(&mut self, options: FieldOptions) {
        if options == self.options {
            return;
        }
        let reseed = options.speed != self.options.speed;
        self.options = options;
        if !options.interactive {
            self.pointer.influence = 0.0;
            self.scroll_impulse = 0.0;
        }
        if reseed {
            self.reseed();
        }
    }

    fn reseed(&mut self) {
        let low_end = self.is_low_end();
        let count = particle_count(self.width, self.height, low_end);
        let (width, height, speed, tuning) = (self.width, self.height, self.options.speed, self.tuning);
        self.particles = (0..count)
            .map(|i| seed_particle(i, width, height, speed, &tuning))
            .collect();
    }

    pub fn retarget(&mut self, palette: Palette) -> bool {
        self.transition.retarget(palette)
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        if !self.options.interactive {
            return;
        }
        self.pointer = Pointer { x, y, influence: 1.0 };
    }

    pub fn pointer_left(&mut self) {
        self.pointer.influence = 0.0;
    }

    /// The first reading only records a baseline.
    pub fn scrolled_to(&mut self, top: f64) {
        if !self.options.interactive {
            return;
        }
        let last = self.last_scroll.unwrap_or(top);
        self.scroll_impulse += (top - last) * SCROLL_GAIN;
        self.last_scroll = Some(top);
    }

    /// One animation tick. Returns `false` for ticks dropped by frame skipping.
    pub fn frame(&mut self, surface: &mut impl Surface) -> bool {
        self.ticks = self.ticks.wrapping_add(1);
        if self.ticks % self.tuning.frame_skip != 0 {
            return false;
        }
        self.step();
        self.draw(surface);
        true
    }

    /// Advances colours, decays input accumulators and moves every particle.
    pub fn step(&mut self) {
        self.transition.advance(self.tuning.transition_step);
        self.scroll_impulse *= SCROLL_DECAY;
        self.pointer.influence *= POINTER_DECAY;

        let pointer = self.pointer;
        let impulse = self.scroll_impulse;
        let (width, height) = (self.width, self.height);

        for particle in &mut self.particles {
            let dx = pointer.x - particle.x;
            let dy = pointer.y - particle.y;
            let distance = (dx * dx + dy * dy).sqrt();
            let force = pointer.influence * (1.0 - (distance / POINTER_RADIUS).min(1.0));

            let (pull_x, pull_y) = if distance > 0.0 {
                (dx / distance * force * POINTER_PULL, dy / distance * force * POINTER_PULL)
            } else {
                (0.0, 0.0)
            };
            particle.x += particle.vx + pull_x;
            particle.y += particle.vy + impulse + pull_y;

            particle.pulse_phase += particle.pulse_speed;
            particle.size = particle.base_size * (1.0 + PULSE_AMPLITUDE * particle.pulse_phase.sin());
            particle.opacity += (particle.target_opacity - particle.opacity) * OPACITY_EASING;

            particle.x = wrap(particle.x, width);
            particle.y = wrap(particle.y, height);
        }
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        let palette = self.transition.current();
        let light = palette.background.is_light();
        let (width, height) = (self.width, self.height);

        surface.fill_background(palette.background, width, height);
        if !self.options.interactive {
            surface.fill_radial_gradient(width, height, width.max(height), &AMBIENT_GRADIENT);
        } else if light {
            surface.fill_radial_gradient(width, height, width.max(height) / 2.0, &DEPTH_GRADIENT);
        }

        let alpha_scale = if light { LIGHT_BACKGROUND_ALPHA } else { 1.0 };
        for particle in &self.particles {
            surface.fill_circle(
                particle.x,
                particle.y,
                particle.size.max(0.0),
                palette.color,
                (particle.opacity * alpha_scale).clamp(0.0, 1.0),
            );
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn palette(&self) -> Palette {
        self.transition.current()
    }

    pub fn transition(&self) -> &ColorTransition {
        &self.transition
    }

    pub fn is_low_end(&self) -> bool {
        self.tuning.frame_skip > 1
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn pointer_influence(&self) -> f64 {
        self.pointer.influence
    }

    pub fn scroll_impulse(&self) -> f64 {
        self.scroll_impulse
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::device::FixedProfile;

    #[derive(Default)]
    struct Recorder {
        backgrounds: Vec<Rgb>,
        gradients: Vec<f64>,
        circles: Vec<(f64, f64, f64, Rgb, f64)>,
    }

    impl Surface for Recorder {
        fn fill_background(&mut self, color: Rgb, _width: f64, _height: f64) {
            self.backgrounds.push(color);
        }

        fn fill_radial_gradient(&mut self, _width: f64, _height: f64, radius: f64, _stops: &[GradientStop]) {
            self.gradients.push(radius);
        }

        fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb, alpha: f64) {
            self.circles.push((x, y, radius, color, alpha));
        }
    }

    fn dark() -> Palette {
        Palette::from_hex("#ffffff", "#000000")
    }

    fn field(width: f64, height: f64, low_end: bool) -> ParticleField {
        ParticleField::new(width, height, dark(), FieldOptions::default(), &FixedProfile(low_end))
    }

    #[test]
    fn count_follows_canvas_area() {
        assert_eq!(particle_count(800.0, 600.0, false), 60);
        assert_eq!(particle_count(1920.0, 1080.0, false), 259);
        assert_eq!(particle_count(1920.0, 1080.0, true), 77);
        assert_eq!(particle_count(50.0, 50.0, false), 0);
        assert_eq!(particle_count(0.0, 900.0, false), 0);

        let f = field(1280.0, 720.0, false);
        assert_eq!(f.particles().len(), particle_count(1280.0, 720.0, false));
        let f = field(1280.0, 720.0, true);
        assert_eq!(f.particles().len(), particle_count(1280.0, 720.0, true));
    }

    #[test]
    fn resize_to_same_dimensions_is_stable() {
        let mut f = field(1024.0, 768.0, false);
        let first = f.particles().to_vec();
        for _ in 0..3 {
            f.resize(1024.0, 768.0);
            assert_eq!(f.particles().len(), first.len());
        }
        assert_eq!(f.particles(), first.as_slice());
    }

    #[test]
    fn layout_is_deterministic() {
        let a = field(1440.0, 900.0, false);
        let b = field(1440.0, 900.0, false);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn seeded_values_are_in_unit_range() {
        for i in 0..10_000 {
            let v = seeded_random(i);
            assert!((0.0..1.0).contains(&v), "seeded_random({i}) = {v}");
        }
    }

    #[test]
    fn particles_never_leave_the_wrap_band() {
        let (w, h) = (640.0, 480.0);
        let mut f = field(w, h, false);
        let mut surface = Recorder::default();
        for frame in 0..2_000 {
            if frame % 37 == 0 {
                f.pointer_moved((frame % 640) as f64, (frame % 480) as f64);
            }
            if frame % 53 == 0 {
                f.scrolled_to((frame * 7) as f64);
            }
            f.frame(&mut surface);
            for p in f.particles() {
                assert!(p.x >= -EDGE_MARGIN && p.x <= w + EDGE_MARGIN, "x = {}", p.x);
                assert!(p.y >= -EDGE_MARGIN && p.y <= h + EDGE_MARGIN, "y = {}", p.y);
            }
        }
    }

    #[test]
    fn wrap_moves_to_opposite_edge() {
        assert_eq!(wrap(-10.5, 100.0), 110.0);
        assert_eq!(wrap(110.5, 100.0), -10.0);
        assert_eq!(wrap(-10.0, 100.0), -10.0);
        assert_eq!(wrap(50.0, 100.0), 50.0);
    }

    #[test]
    fn inputs_decay_instead_of_snapping() {
        let mut f = field(400.0, 400.0, false);
        f.pointer_moved(200.0, 200.0);
        f.step();
        assert!((f.pointer_influence() - POINTER_DECAY).abs() < 1e-12);
        f.step();
        assert!((f.pointer_influence() - POINTER_DECAY * POINTER_DECAY).abs() < 1e-12);

        f.scrolled_to(0.0);
        assert_eq!(f.scroll_impulse(), 0.0);
        f.scrolled_to(100.0);
        assert!((f.scroll_impulse() + 3.0).abs() < 1e-12);
        f.step();
        assert!((f.scroll_impulse() + 2.7).abs() < 1e-12);

        f.pointer_left();
        assert_eq!(f.pointer_influence(), 0.0);
    }

    #[test]
    fn pointer_directly_on_a_particle_does_not_produce_nan() {
        let mut f = field(400.0, 400.0, false);
        let (x, y) = (f.particles()[0].x, f.particles()[0].y);
        f.pointer_moved(x, y);
        f.step();
        assert!(f.particles().iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn non_interactive_field_ignores_input() {
        let options = FieldOptions { speed: 1.0, interactive: false };
        let mut f = ParticleField::new(400.0, 400.0, dark(), options, &FixedProfile(false));
        f.pointer_moved(10.0, 10.0);
        f.scrolled_to(0.0);
        f.scrolled_to(500.0);
        assert_eq!(f.pointer_influence(), 0.0);
        assert_eq!(f.scroll_impulse(), 0.0);

        let mut surface = Recorder::default();
        f.frame(&mut surface);
        assert_eq!(surface.gradients, vec![400.0]);
    }

    #[test]
    fn low_end_skips_every_other_frame() {
        let mut f = field(400.0, 400.0, true);
        let mut surface = Recorder::default();
        let drawn: Vec<bool> = (0..4).map(|_| f.frame(&mut surface)).collect();
        assert_eq!(drawn, vec![false, true, false, true]);
        assert_eq!(surface.backgrounds.len(), 2);
    }

    #[test]
    fn light_background_adds_depth_and_dims_particles() {
        let palette = Palette::from_hex("#262626", "#f8f8f8");
        let f = ParticleField::new(800.0, 400.0, palette, FieldOptions::default(), &FixedProfile(false));
        let mut surface = Recorder::default();
        f.draw(&mut surface);
        assert_eq!(surface.gradients, vec![400.0]);
        let (_, _, _, color, alpha) = surface.circles[0];
        assert_eq!(color, palette.color);
        assert!((alpha - f.particles()[0].opacity * LIGHT_BACKGROUND_ALPHA).abs() < 1e-12);

        let f = field(800.0, 400.0, false);
        let mut surface = Recorder::default();
        f.draw(&mut surface);
        assert!(surface.gradients.is_empty());
        assert_eq!(surface.circles.len(), f.particles().len());
    }

    #[test]
    fn recolour_fades_from_displayed_colour() {
        let mut f = field(400.0, 400.0, false);
        let blue = Palette::from_hex("#60a5fa", "#000000");
        assert!(f.retarget(blue));
        assert_eq!(f.palette(), dark());

        let mut surface = Recorder::default();
        f.frame(&mut surface);
        assert_ne!(f.palette(), dark());
        while f.transition().is_active() {
            f.frame(&mut surface);
        }
        assert_eq!(f.transition().progress(), 1.0);
        assert_eq!(f.palette().color.to_hex(), "#60a5fa");
    }

    #[test]
    fn speed_change_reseeds_velocities() {
        let mut f = field(400.0, 400.0, false);
        let before = f.particles()[3].vx;
        f.set_options(FieldOptions { speed: 2.0, interactive: true });
        assert!((f.particles()[3].vx - before * 2.0).abs() < 1e-12);
    }
}
