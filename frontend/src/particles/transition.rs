use super::color::Rgb;

/// Particle colour plus the background it is painted over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub color: Rgb,
    pub background: Rgb,
}

impl Palette {
    pub const fn new(color: Rgb, background: Rgb) -> Self {
        Self { color, background }
    }

    pub fn from_hex(color: &str, background: &str) -> Self {
        Self::new(Rgb::from_hex_or_white(color), Rgb::from_hex_or_white(background))
    }

    pub fn lerp(self, other: Palette, t: f64) -> Palette {
        Palette::new(self.color.lerp(other.color, t), self.background.lerp(other.background, t))
    }
}

/// Linear RGB fade between palettes.
///
/// Retargeting mid-fade starts the new fade from whatever is on screen at that
/// moment, so interrupted transitions never jump.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTransition {
    from: Palette,
    current: Palette,
    target: Palette,
    progress: f64,
    active: bool,
}

impl ColorTransition {
    pub fn new(palette: Palette) -> Self {
        Self {
            from: palette,
            current: palette,
            target: palette,
            progress: 1.0,
            active: false,
        }
    }

    /// Returns `true` when a new fade was started.
    pub fn retarget(&mut self, palette: Palette) -> bool {
        if palette == self.target {
            return false;
        }
        self.from = self.current;
        self.target = palette;
        self.progress = 0.0;
        self.active = true;
        true
    }

    pub fn advance(&mut self, step: f64) {
        if !self.active {
            return;
        }
        self.progress = (self.progress + step.max(0.0)).min(1.0);
        if self.progress >= 1.0 {
            self.current = self.target;
            self.active = false;
        } else {
            self.current = self.from.lerp(self.target, self.progress);
        }
    }

    pub fn current(&self) -> Palette {
        self.current
    }

    pub fn target(&self) -> Palette {
        self.target
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
