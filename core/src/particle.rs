use rand::Rng;

use crate::viewport::ViewportMode;

pub const MOBILE_PARTICLE_COUNT: usize = 8;
pub const DESKTOP_PARTICLE_COUNT: usize = 25;
pub const POSITION_MAX: f64 = 100.0;
pub const DELAY_MAX_S: f64 = 4.0;
pub const DURATION_MIN_S: f64 = 8.0;
pub const DURATION_MAX_S: f64 = 12.0;
pub const PARTICLE_VARIANTS: u32 = 3;

/// One decorative dot. Positions are percentages of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub delay: f64,
    pub duration: f64,
}

impl Particle {
    pub fn variant(&self) -> u32 {
        self.id % PARTICLE_VARIANTS
    }

    pub fn animation_name(&self) -> String {
        format!("particle{}", self.variant())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleStyle {
    pub size_px: u32,
    pub opacity: f64,
}

impl ParticleStyle {
    pub fn for_mode(mode: ViewportMode) -> Self {
        match mode {
            ViewportMode::Mobile => Self {
                size_px: 3,
                opacity: 0.5,
            },
            ViewportMode::Desktop => Self {
                size_px: 4,
                opacity: 0.7,
            },
        }
    }
}

pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Particle> {
    (0..count)
        .map(|i| Particle {
            id: i as u32,
            x: rng.random_range(0.0..POSITION_MAX),
            y: rng.random_range(0.0..POSITION_MAX),
            delay: rng.random_range(0.0..DELAY_MAX_S),
            duration: rng.random_range(DURATION_MIN_S..DURATION_MAX_S),
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientStyle {
    pub from: &'static str,
    pub to: &'static str,
}

impl GradientStyle {
    pub fn css(&self) -> String {
        format!("linear-gradient(180deg, {} 0%, {} 100%)", self.from, self.to)
    }
}

pub const PARTICLE_GRADIENTS: [GradientStyle; PARTICLE_VARIANTS as usize] = [
    GradientStyle {
        from: "#60a5fa",
        to: "#3b82f6",
    },
    GradientStyle {
        from: "#818cf8",
        to: "#4f46e5",
    },
    GradientStyle {
        from: "#a78bfa",
        to: "#7c3aed",
    },
];

pub fn gradient_for(id: u32) -> &'static GradientStyle {
    &PARTICLE_GRADIENTS[(id % PARTICLE_VARIANTS) as usize]
}
