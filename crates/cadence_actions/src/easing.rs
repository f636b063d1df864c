//! Easing functions for actions
//!
//! Every curve clamps its input to `[0, 1]` before any curve math, so
//! `ease(0) == 0` and `ease(1) == 1` for all kinds.

use serde::{Deserialize, Serialize};

/// Bounce curve amplitude
const BOUNCE_N: f32 = 7.5625;
/// Bounce curve segment divisor
const BOUNCE_D: f32 = 2.75;

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    /// `sqrt(t)`: quick start, gentle landing
    EaseIn,
    /// `t²`: gentle start, quick landing
    EaseOut,
    /// `t^0.25`
    FastIn,
    /// `t⁴`
    FastOut,
    /// Squared ramp up to the midpoint, square-root ramp after it
    InAndOut,
    /// Four-segment bounce settling at 1
    Bounce,
}

impl Easing {
    /// All easing kinds, in declaration order
    pub const ALL: [Easing; 7] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::FastIn,
        Easing::FastOut,
        Easing::InAndOut,
        Easing::Bounce,
    ];

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match self {
            Easing::Linear => t,
            Easing::EaseIn => t.sqrt(),
            Easing::EaseOut => t * t,
            Easing::FastIn => t.sqrt().sqrt(),
            Easing::FastOut => t * t * t * t,
            Easing::InAndOut => {
                if t < 0.5 {
                    let q = t * 2.0;
                    q * q * 0.5
                } else {
                    ((t - 0.5) * 2.0).sqrt() * 0.5 + 0.5
                }
            }
            Easing::Bounce => bounce(t),
        }
    }
}

/// Ease `progress` with the given curve
///
/// Free-function form of [`Easing::apply`].
#[inline]
pub fn ease(progress: f32, kind: Easing) -> f32 {
    kind.apply(progress)
}

fn bounce(t: f32) -> f32 {
    if t < 1.0 / BOUNCE_D {
        BOUNCE_N * t * t
    } else if t < 2.0 / BOUNCE_D {
        let q = t - 1.5 / BOUNCE_D;
        BOUNCE_N * q * q + 0.75
    } else if t < 2.5 / BOUNCE_D {
        let q = t - 2.25 / BOUNCE_D;
        BOUNCE_N * q * q + 0.9375
    } else {
        let q = t - 2.625 / BOUNCE_D;
        BOUNCE_N * q * q + 0.984375
    }
}
