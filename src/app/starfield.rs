use rand::Rng;

/// Per-frame drift is drawn from `[-MAX_DRIFT, MAX_DRIFT)`
const MAX_DRIFT: f64 = 0.1;
/// Glows swing by this share of the field size around their anchors
const GLOW_SWING: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Brightness in `[0, 1)`
    pub alpha: f64,
}

/// Centre of a drifting nebula glow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Hero background: stars drifting across a wrapping field
#[derive(Debug, Clone)]
pub struct Starfield {
    width: f64,
    height: f64,
    stars: Vec<Star>,
}

impl Starfield {
    pub fn new<R: Rng>(count: usize, width: f64, height: f64, rng: &mut R) -> Self {
        let width = width.max(1.0);
        let height = height.max(1.0);
        let stars = (0..count)
            .map(|_| Star {
                x: rng.random::<f64>() * width,
                y: rng.random::<f64>() * height,
                vx: (rng.random::<f64>() - 0.5) * MAX_DRIFT * 2.0,
                vy: (rng.random::<f64>() - 0.5) * MAX_DRIFT * 2.0,
                alpha: rng.random::<f64>(),
            })
            .collect();
        Self {
            width,
            height,
            stars,
        }
    }

    #[must_use]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Moves every star one frame, wrapping at the edges
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for star in &mut self.stars {
            star.x += star.vx;
            star.y += star.vy;
            if star.x < 0.0 {
                star.x = width;
            }
            if star.x > width {
                star.x = 0.0;
            }
            if star.y < 0.0 {
                star.y = height;
            }
            if star.y > height {
                star.y = 0.0;
            }
        }
    }

    /// Rescales star positions to a new field size
    pub fn resize(&mut self, width: f64, height: f64) {
        let width = width.max(1.0);
        let height = height.max(1.0);
        if (width - self.width).abs() < f64::EPSILON && (height - self.height).abs() < f64::EPSILON {
            return;
        }
        let scale_x = width / self.width;
        let scale_y = height / self.height;
        for star in &mut self.stars {
            star.x = (star.x * scale_x).clamp(0.0, width);
            star.y = (star.y * scale_y).clamp(0.0, height);
        }
        self.width = width;
        self.height = height;
    }

    /// Positions of the two nebula glows at `elapsed_ms` since start
    #[must_use]
    pub fn glows(&self, elapsed_ms: f64) -> [Glow; 2] {
        let time = elapsed_ms * 0.0005;
        let swing_x = self.width * GLOW_SWING;
        let swing_y = self.height * GLOW_SWING;
        let radius = self.width.min(self.height) * 0.35;
        [
            Glow {
                x: self.width * 0.3 + time.sin() * swing_x,
                y: self.height * 0.4 + (time * 0.8).cos() * swing_y,
                radius,
            },
            Glow {
                x: self.width * 0.7 + (time * 1.2).cos() * swing_x,
                y: self.height * 0.6 + (time * 0.5).sin() * swing_y,
                radius: radius * 0.8,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn field(count: usize) -> Starfield {
        let mut rng = StdRng::seed_from_u64(7);
        Starfield::new(count, 200.0, 100.0, &mut rng)
    }

    #[test]
    fn test_stars_start_inside_bounds() {
        let starfield = field(400);
        assert_eq!(starfield.stars().len(), 400);
        for star in starfield.stars() {
            assert!((0.0..=200.0).contains(&star.x));
            assert!((0.0..=100.0).contains(&star.y));
            assert!(star.vx.abs() <= MAX_DRIFT);
            assert!(star.vy.abs() <= MAX_DRIFT);
            assert!((0.0..1.0).contains(&star.alpha));
        }
    }

    #[test]
    fn test_step_wraps_at_edges() {
        let mut starfield = field(0);
        starfield.stars = vec![
            Star {
                x: 0.05,
                y: 50.0,
                vx: -0.1,
                vy: 0.0,
                alpha: 0.5,
            },
            Star {
                x: 100.0,
                y: 99.95,
                vx: 0.0,
                vy: 0.1,
                alpha: 0.5,
            },
        ];
        starfield.step();
        assert_eq!(starfield.stars()[0].x, 200.0);
        assert_eq!(starfield.stars()[1].y, 0.0);
    }

    #[test]
    fn test_many_steps_keep_stars_in_field() {
        let mut starfield = field(100);
        for _ in 0..5000 {
            starfield.step();
        }
        for star in starfield.stars() {
            assert!((0.0..=200.0).contains(&star.x));
            assert!((0.0..=100.0).contains(&star.y));
        }
    }

    #[test]
    fn test_resize_rescales_positions() {
        let mut starfield = field(50);
        starfield.resize(100.0, 50.0);
        assert_eq!(starfield.bounds(), (100.0, 50.0));
        for star in starfield.stars() {
            assert!(star.x <= 100.0);
            assert!(star.y <= 50.0);
        }
    }

    #[test]
    fn test_glows_start_at_anchor_offsets() {
        let starfield = field(0);
        let [first, second] = starfield.glows(0.0);
        assert!((first.x - 60.0).abs() < 1e-9);
        assert!((first.y - 50.0).abs() < 1e-9);
        assert!((second.x - 160.0).abs() < 1e-9);
        assert!((second.y - 60.0).abs() < 1e-9);
    }
}
