//! Easing curves: pure functions from normalized time to progress.
//!
//! `sample` maps `t` in `[0, 1]` to a progress factor. Back and elastic
//! curves intentionally leave `[0, 1]` (overshoot); callers lerp with
//! extrapolation.

/// An easing curve applied to normalized transition time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartIn,
    QuartOut,
    QuartInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    BackIn,
    BackOut,
    BackInOut,
    BounceOut,
    ElasticOut,
}

/// Overshoot constant for the back family.
const BACK_C1: f32 = 1.70158;

impl Easing {
    /// Evaluate the curve at `t` (expected in `[0, 1]`).
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,

            Self::QuadIn => t * t,
            Self::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }

            Self::CubicIn => t * t * t,
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }

            Self::QuartIn => t * t * t * t,
            Self::QuartOut => 1.0 - (1.0 - t).powi(4),
            Self::QuartInOut => {
                if t < 0.5 {
                    8.0 * t * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }

            Self::ExpoIn => {
                if t <= 0.0 {
                    0.0
                } else {
                    2.0f32.powf(10.0 * t - 10.0)
                }
            }
            Self::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0f32.powf(-10.0 * t)
                }
            }
            Self::ExpoInOut => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else if t < 0.5 {
                    2.0f32.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2.0f32.powf(-20.0 * t + 10.0)) / 2.0
                }
            }

            Self::BackIn => {
                let c3 = BACK_C1 + 1.0;
                c3 * t * t * t - BACK_C1 * t * t
            }
            Self::BackOut => {
                let c3 = BACK_C1 + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u * u * u + BACK_C1 * u * u
            }
            Self::BackInOut => {
                let c2 = BACK_C1 * 1.525;
                if t < 0.5 {
                    let u = 2.0 * t;
                    (u * u * ((c2 + 1.0) * u - c2)) / 2.0
                } else {
                    let u = 2.0 * t - 2.0;
                    (u * u * ((c2 + 1.0) * u + c2) + 2.0) / 2.0
                }
            }

            Self::BounceOut => bounce_out(t),

            Self::ElasticOut => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else {
                    let c4 = std::f32::consts::TAU / 3.0;
                    2.0f32.powf(-10.0 * t) * ((10.0 * t - 0.75) * c4).sin() + 1.0
                }
            }
        }
    }

    /// Parse an easing name, e.g. from a declaration or screen document.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(Self::Linear),
            "quad-in" | "ease-in" => Some(Self::QuadIn),
            "quad-out" | "ease-out" => Some(Self::QuadOut),
            "quad-in-out" | "ease-in-out" => Some(Self::QuadInOut),
            "cubic-in" => Some(Self::CubicIn),
            "cubic-out" => Some(Self::CubicOut),
            "cubic-in-out" => Some(Self::CubicInOut),
            "quart-in" => Some(Self::QuartIn),
            "quart-out" => Some(Self::QuartOut),
            "quart-in-out" => Some(Self::QuartInOut),
            "expo-in" => Some(Self::ExpoIn),
            "expo-out" => Some(Self::ExpoOut),
            "expo-in-out" => Some(Self::ExpoInOut),
            "back-in" => Some(Self::BackIn),
            "back-out" => Some(Self::BackOut),
            "back-in-out" => Some(Self::BackInOut),
            "bounce-out" => Some(Self::BounceOut),
            "elastic-out" => Some(Self::ElasticOut),
            _ => None,
        }
    }
}

fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let u = t - 1.5 / D1;
        N1 * u * u + 0.75
    } else if t < 2.5 / D1 {
        let u = t - 2.25 / D1;
        N1 * u * u + 0.9375
    } else {
        let u = t - 2.625 / D1;
        N1 * u * u + 0.984375
    }
}
