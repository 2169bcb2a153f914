//! Decorative drifting particles.
//!
//! Positions and timings are drawn once per mount from the caller's RNG and
//! then handed to CSS, which loops the drift animation indefinitely.

use fastrand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Indigo,
    Purple,
    Pink,
    Emerald,
    Gradient,
}

impl Tint {
    const CYCLE: [Tint; 4] = [Tint::Indigo, Tint::Purple, Tint::Pink, Tint::Emerald];

    pub fn class(self) -> &'static str {
        match self {
            Self::Indigo => "particle--indigo",
            Self::Purple => "particle--purple",
            Self::Pink => "particle--pink",
            Self::Emerald => "particle--emerald",
            Self::Gradient => "particle--gradient",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TintScheme {
    Cycle,
    Single(Tint),
}

impl TintScheme {
    fn tint_for(self, index: usize) -> Tint {
        match self {
            Self::Cycle => Tint::CYCLE[index % Tint::CYCLE.len()],
            Self::Single(tint) => tint,
        }
    }
}

/// How a field of particles is laid out and animated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriftProfile {
    pub count: usize,
    pub min_duration_secs: f64,
    pub duration_spread_secs: f64,
    pub max_delay_secs: f64,
    /// Vertical offsets (px) at the start, middle and end of one loop.
    pub drift_px: [f64; 3],
    /// Opacity at the start, middle and end of one loop.
    pub fade: [f64; 3],
    pub peak_scale: f64,
    pub tints: TintScheme,
}

pub const HERO_FIELD: DriftProfile = DriftProfile {
    count: 12,
    min_duration_secs: 10.0,
    duration_spread_secs: 8.0,
    max_delay_secs: 5.0,
    drift_px: [-20.0, -50.0, -80.0],
    fade: [0.4, 0.0, 0.4],
    peak_scale: 1.5,
    tints: TintScheme::Cycle,
};

pub const ABOUT_CARD_FIELD: DriftProfile = DriftProfile {
    count: 6,
    min_duration_secs: 3.0,
    duration_spread_secs: 3.0,
    max_delay_secs: 1.8,
    drift_px: [-10.0, -20.0, -10.0],
    fade: [0.3, 0.8, 0.3],
    peak_scale: 1.5,
    tints: TintScheme::Single(Tint::Gradient),
};

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_secs: f64,
    pub delay_secs: f64,
    pub tint: Tint,
}

impl Particle {
    /// Inline style read by the `particle-drift` keyframes.
    pub fn style(&self, profile: &DriftProfile) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s; \
             --drift-start: {}px; --drift-mid: {}px; --drift-end: {}px; \
             --fade-start: {}; --fade-mid: {}; --fade-end: {}; --peak-scale: {};",
            self.left_pct,
            self.top_pct,
            self.duration_secs,
            self.delay_secs,
            profile.drift_px[0],
            profile.drift_px[1],
            profile.drift_px[2],
            profile.fade[0],
            profile.fade[1],
            profile.fade[2],
            profile.peak_scale,
        )
    }
}

pub fn scatter(profile: &DriftProfile, rng: &mut Rng) -> Vec<Particle> {
    (0..profile.count)
        .map(|index| Particle {
            left_pct: rng.f64() * 100.0,
            top_pct: rng.f64() * 100.0,
            duration_secs: profile.min_duration_secs + rng.f64() * profile.duration_spread_secs,
            delay_secs: rng.f64() * profile.max_delay_secs,
            tint: profile.tints.tint_for(index),
        })
        .collect()
}
