//! Periodic clamping, e.g. for heading and angle normalization

/// Map a value into `[min, max)` by wrapping around the range
///
/// When `max <= min` the result is `min`.
pub trait ClampWrap: Copy + PartialOrd {
    fn clamp_wrap(self, min: Self, max: Self) -> Self;
}

// Integers wrap with floor-division remainder arithmetic. Working in i128
// keeps `val - min` and the range itself from overflowing.
macro_rules! impl_clamp_wrap_integer {
    ($($t:ty),*) => {
        $(
            impl ClampWrap for $t {
                fn clamp_wrap(self, min: Self, max: Self) -> Self {
                    if max <= min {
                        return min;
                    }

                    let range = max as i128 - min as i128;
                    let offset = (self as i128 - min as i128).rem_euclid(range);
                    (min as i128 + offset) as $t
                }
            }
        )*
    };
}

// Floats first shift below-range values up by a whole number of periods,
// then take the fmod remainder.
macro_rules! impl_clamp_wrap_float {
    ($($t:ty),*) => {
        $(
            impl ClampWrap for $t {
                fn clamp_wrap(self, min: Self, max: Self) -> Self {
                    if max <= min {
                        return min;
                    }

                    let range = max - min;
                    let mut val = self;
                    if val < min {
                        val += ((min - val) / range).ceil() * range;
                    }

                    (val - min) % range + min
                }
            }
        )*
    };
}

impl_clamp_wrap_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_clamp_wrap_float!(f32, f64);

/// Free-function form of [`ClampWrap::clamp_wrap`]
pub fn clamp_wrap<T: ClampWrap>(val: T, min: T, max: T) -> T {
    val.clamp_wrap(min, max)
}
