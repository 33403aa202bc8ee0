//! Axis-aligned bounding boxes

use crate::error::{Error, Result};
use nalgebra::{Point3, RealField, Scalar, Vector3};
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box given by its minimum and maximum corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb<T: Scalar> {
    pub min: Point3<T>,
    pub max: Point3<T>,
}

impl<T: RealField + Copy> Aabb<T> {
    /// Create a box from its corners
    ///
    /// Fails if any component of `min` is greater than the matching component
    /// of `max`, or if either corner contains NaN.
    pub fn new(min: Point3<T>, max: Point3<T>) -> Result<Self> {
        for axis in 0..3 {
            if !(min[axis] <= max[axis]) {
                return Err(Error::InvalidBounds { axis });
            }
        }

        Ok(Self { min, max })
    }

    /// Create a box from its center and half-extents
    ///
    /// Negative extents are folded to their magnitude.
    pub fn from_center_extents(center: Point3<T>, half_extents: Vector3<T>) -> Self {
        let half_extents = half_extents.abs();
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// The smallest box containing every point, or `None` for an empty slice
    pub fn from_points(points: &[Point3<T>]) -> Option<Self> {
        let (first, rest) = points.split_first()?;

        let (min, max) = rest.iter().fold((first.coords, first.coords), |(min, max), p| {
            (
                min.zip_map(&p.coords, |a, b| if b < a { b } else { a }),
                max.zip_map(&p.coords, |a, b| if b > a { b } else { a }),
            )
        });

        Some(Self {
            min: Point3::from(min),
            max: Point3::from(max),
        })
    }

    /// Center of the box
    pub fn center(&self) -> Point3<T> {
        self.min + self.half_extents()
    }

    /// Half the size of the box along each axis
    pub fn half_extents(&self) -> Vector3<T> {
        (self.max - self.min) * nalgebra::convert::<f64, T>(0.5)
    }

    /// Full size of the box along each axis
    pub fn size(&self) -> Vector3<T> {
        self.max - self.min
    }

    /// Grow the box to include another one
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point3::from(
                self.min
                    .coords
                    .zip_map(&other.min.coords, |a, b| if b < a { b } else { a }),
            ),
            max: Point3::from(
                self.max
                    .coords
                    .zip_map(&other.max.coords, |a, b| if b > a { b } else { a }),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_aabb_new_rejects_inverted_bounds() {
        let result = Aabb::new(Point3::new(0.0, 2.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        assert_eq!(result, Err(Error::InvalidBounds { axis: 1 }));

        let nan = Aabb::new(Point3::new(f32::NAN, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        assert_eq!(nan, Err(Error::InvalidBounds { axis: 0 }));
    }

    #[test]
    fn test_aabb_flat_box_is_valid() {
        let aabb = Aabb::new(Point3::new(0.0, 0.0, 1.0), Point3::new(1.0, 1.0, 1.0)).unwrap();
        assert_relative_eq!(aabb.half_extents(), Vector3::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn test_aabb_center_extents() {
        let aabb = Aabb::from_center_extents(Point3::new(1.0, 2.0, 3.0), Vector3::new(1.0, -0.5, 2.0));
        assert_relative_eq!(aabb.min, Point3::new(0.0, 1.5, 1.0));
        assert_relative_eq!(aabb.max, Point3::new(2.0, 2.5, 5.0));
        assert_relative_eq!(aabb.center(), Point3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(aabb.half_extents(), Vector3::new(1.0, 0.5, 2.0));
        assert_relative_eq!(aabb.size(), Vector3::new(2.0, 1.0, 4.0));
    }

    #[test]
    fn test_aabb_from_points() {
        let points = vec![
            Point3::new(1.0, -1.0, 0.0),
            Point3::new(-2.0, 4.0, 0.5),
            Point3::new(0.0, 0.0, -3.0),
        ];

        let aabb = Aabb::from_points(&points).unwrap();
        assert_relative_eq!(aabb.min, Point3::new(-2.0, -1.0, -3.0));
        assert_relative_eq!(aabb.max, Point3::new(1.0, 4.0, 0.5));

        assert!(Aabb::<f64>::from_points(&[]).is_none());
    }

    #[test]
    fn test_aabb_union() {
        let a = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0)).unwrap();
        let b = Aabb::new(Point3::new(-1.0, 0.5, 0.5), Point3::new(0.5, 3.0, 0.5)).unwrap();

        let union = a.union(&b);
        assert_relative_eq!(union.min, Point3::new(-1.0, 0.0, 0.0));
        assert_relative_eq!(union.max, Point3::new(1.0, 3.0, 1.0));
    }

    #[test]
    fn test_aabb_serde_round_trip() {
        let aabb = Aabb::new(Point3::new(-1.5, 0.0, 2.0), Point3::new(1.5, 4.0, 2.25)).unwrap();

        let json = serde_json::to_string(&aabb).unwrap();
        let restored: Aabb<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, aabb);
    }
}
