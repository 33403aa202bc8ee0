//! Frustum classification of axis-aligned boxes

use nalgebra::{Point3, RealField, Vector3, Vector4};
use serde::{Deserialize, Serialize};
use viewgeom_core::{Aabb, Frustum};

/// Set of frustum planes a box straddles; bit `i` stands for plane `i`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PlaneMask(u8);

impl PlaneMask {
    pub const EMPTY: PlaneMask = PlaneMask(0);
    pub const ALL: PlaneMask = PlaneMask(0b11_1111);

    /// Build a mask from raw bits; bits above the sixth plane are dropped
    pub fn from_bits(bits: u8) -> Self {
        PlaneMask(bits & Self::ALL.0)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn contains(&self, plane: usize) -> bool {
        plane < 6 && self.0 & (1 << plane) != 0
    }

    pub fn insert(&mut self, plane: usize) {
        if plane < 6 {
            self.0 |= 1 << plane;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Plane indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..6).filter(move |&plane| self.contains(plane))
    }
}

/// Result of testing a box against a frustum
///
/// `Outside` is exact, `Inside` is exact, `Partial` is conservative: a box
/// reported as straddling may in fact lie entirely on one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrustumClass {
    /// Entirely behind at least one plane
    Outside,
    /// In front of all six planes
    Inside,
    /// Spans the planes in the mask
    Partial(PlaneMask),
}

impl FrustumClass {
    /// `-1` for outside, `0` for inside, otherwise the straddled-plane bitmask
    pub fn to_raw(self) -> i32 {
        match self {
            FrustumClass::Outside => -1,
            FrustumClass::Inside => 0,
            FrustumClass::Partial(mask) => i32::from(mask.bits()),
        }
    }

    /// Inverse of [`FrustumClass::to_raw`]; `None` for values no test produces
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            -1 => Some(FrustumClass::Outside),
            0 => Some(FrustumClass::Inside),
            1..=0b11_1111 => u8::try_from(raw)
                .ok()
                .map(|bits| FrustumClass::Partial(PlaneMask::from_bits(bits))),
            _ => None,
        }
    }

    /// Anything not provably outside should be drawn
    pub fn is_visible(self) -> bool {
        self != FrustumClass::Outside
    }
}

/// Classify a box given by center and half-extents against six planes
///
/// Each plane is `(nx, ny, nz, d)` with the inside being `n·p + d >= 0`.
/// The box's projected radius on a plane is `extents · |n|`. Testing stops
/// at the first plane the box lies entirely behind.
pub fn frustum_test<T: RealField + Copy>(
    planes: &[Vector4<T>; 6],
    bound_center: &Point3<T>,
    bound_extents: &Vector3<T>,
) -> FrustumClass {
    let center = bound_center.to_homogeneous();
    let mut partial = PlaneMask::EMPTY;

    for (i, plane) in planes.iter().enumerate() {
        let distance = plane.dot(&center);
        let radius = bound_extents.dot(&plane.xyz().abs());

        if distance < -radius {
            return FrustumClass::Outside;
        }
        if distance <= radius {
            partial.insert(i);
        }
    }

    if partial.is_empty() {
        FrustumClass::Inside
    } else {
        FrustumClass::Partial(partial)
    }
}

/// Classify an [`Aabb`] against a [`Frustum`]
pub fn classify_aabb<T: RealField + Copy>(frustum: &Frustum<T>, aabb: &Aabb<T>) -> FrustumClass {
    frustum_test(&frustum.as_coefficients(), &aabb.center(), &aabb.half_extents())
}

/// Outcome of classifying a caller-supplied list of boxes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CullReport {
    /// Index and classification of every box that was not culled
    pub visible: Vec<(usize, FrustumClass)>,
    pub inside: usize,
    pub partial: usize,
    pub culled: usize,
}

/// Classify every box in `bounds`, in order
pub fn cull<T: RealField + Copy>(frustum: &Frustum<T>, bounds: &[Aabb<T>]) -> CullReport {
    let planes = frustum.as_coefficients();
    let mut report = CullReport::default();

    for (index, aabb) in bounds.iter().enumerate() {
        let class = frustum_test(&planes, &aabb.center(), &aabb.half_extents());
        match class {
            FrustumClass::Outside => report.culled += 1,
            FrustumClass::Inside => report.inside += 1,
            FrustumClass::Partial(_) => report.partial += 1,
        }
        if class.is_visible() {
            report.visible.push((index, class));
        }
    }

    report
}
