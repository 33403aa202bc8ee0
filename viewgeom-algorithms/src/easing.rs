//! Easing curves for camera and animation progress

use nalgebra::RealField;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use viewgeom_core::Error;

/// The fixed set of easing polynomials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EaseType {
    #[default]
    Linear,

    QuadraticIn,
    QuadraticOut,
    QuadraticInOut,

    CubicIn,
    CubicOut,
    CubicInOut,
}

impl EaseType {
    /// Every curve, in discriminant order
    pub const ALL: [EaseType; 7] = [
        EaseType::Linear,
        EaseType::QuadraticIn,
        EaseType::QuadraticOut,
        EaseType::QuadraticInOut,
        EaseType::CubicIn,
        EaseType::CubicOut,
        EaseType::CubicInOut,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EaseType::Linear => "linear",
            EaseType::QuadraticIn => "quadratic_in",
            EaseType::QuadraticOut => "quadratic_out",
            EaseType::QuadraticInOut => "quadratic_in_out",
            EaseType::CubicIn => "cubic_in",
            EaseType::CubicOut => "cubic_out",
            EaseType::CubicInOut => "cubic_in_out",
        }
    }
}

/// Raw discriminants outside `0..=6` map to `Linear`
impl From<u32> for EaseType {
    fn from(value: u32) -> Self {
        usize::try_from(value)
            .ok()
            .and_then(|index| EaseType::ALL.get(index).copied())
            .unwrap_or_default()
    }
}

impl FromStr for EaseType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EaseType::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownEaseType(s.to_string()))
    }
}

impl fmt::Display for EaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Evaluate an easing curve at progress `t`
///
/// `t` is not clamped; callers normalize it to `[0, 1]`.
pub fn ease<T: RealField + Copy>(t: T, kind: EaseType) -> T {
    let one = T::one();
    let two: T = nalgebra::convert(2.0);
    let half: T = nalgebra::convert(0.5);

    match kind {
        EaseType::Linear => t,
        EaseType::QuadraticIn => t * t,
        EaseType::QuadraticOut => t * (two - t),
        EaseType::QuadraticInOut => {
            if t < half {
                two * t * t
            } else {
                -one + (nalgebra::convert::<f64, T>(4.0) - two * t) * t
            }
        }
        EaseType::CubicIn => t * t * t,
        EaseType::CubicOut => {
            let u = t - one;
            u * u * u + one
        }
        EaseType::CubicInOut => {
            if t < half {
                nalgebra::convert::<f64, T>(4.0) * t * t * t
            } else {
                let u = two * t - two;
                (t - one) * u * u + one
            }
        }
    }
}

/// Interpolate from `from` to `to` along an easing curve
pub fn ease_lerp<T: RealField + Copy>(from: T, to: T, t: T, kind: EaseType) -> T {
    from + (to - from) * ease(t, kind)
}
