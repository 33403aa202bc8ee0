//! 3D transformation utilities

use nalgebra::{
    Isometry3, Matrix3, Matrix4, Point3, RealField, Rotation3, Scalar, Transform3, UnitQuaternion, Vector3,
};
use serde::{Deserialize, Serialize};

/// An affine transformation stored as a homogeneous matrix
///
/// An oriented bounding box is represented by one of these: the translation
/// is the box's origin corner, the per-axis scale its extents and the
/// rotation its orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform3D<T: Scalar> {
    pub matrix: Matrix4<T>,
}

/// Translation, scale and rotation recovered from a [`Transform3D`]
#[derive(Debug, Clone, Copy)]
pub struct DecomposedTransform<T: Scalar> {
    pub origin: Point3<T>,
    pub scale: Vector3<T>,
    pub rotation: UnitQuaternion<T>,
}

impl<T: RealField + Copy> Transform3D<T> {
    /// Create an identity transformation
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Create a translation transformation
    pub fn translation(translation: Vector3<T>) -> Self {
        Self {
            matrix: Matrix4::new_translation(&translation),
        }
    }

    /// Create a rotation transformation from a quaternion
    pub fn rotation(rotation: UnitQuaternion<T>) -> Self {
        Self {
            matrix: rotation.to_homogeneous(),
        }
    }

    /// Create a scaling transformation
    pub fn scaling(scale: Vector3<T>) -> Self {
        Self {
            matrix: Matrix4::new_nonuniform_scaling(&scale),
        }
    }

    /// Compose translation * rotation * scale
    pub fn from_parts(origin: Point3<T>, scale: Vector3<T>, rotation: UnitQuaternion<T>) -> Self {
        Self {
            matrix: Matrix4::new_translation(&origin.coords)
                * rotation.to_homogeneous()
                * Matrix4::new_nonuniform_scaling(&scale),
        }
    }

    /// Apply the transformation to a point
    pub fn transform_point(&self, point: &Point3<T>) -> Point3<T> {
        let homogeneous = self.matrix * point.to_homogeneous();
        Point3::from_homogeneous(homogeneous).unwrap_or(*point)
    }

    /// Apply the transformation to a vector
    pub fn transform_vector(&self, vector: &Vector3<T>) -> Vector3<T> {
        self.matrix.fixed_view::<3, 3>(0, 0) * vector
    }

    /// Compose this transformation with another
    pub fn compose(self, other: Self) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Get the inverse transformation
    pub fn inverse(self) -> Option<Self> {
        self.matrix.try_inverse().map(|inv_matrix| Self { matrix: inv_matrix })
    }

    /// Check if this is approximately the identity transformation
    pub fn is_identity(&self, epsilon: T) -> bool {
        (self.matrix - Matrix4::identity()).norm() < epsilon
    }

    /// Split the matrix into origin, per-axis scale and rotation
    ///
    /// Scale is the length of each basis column. A mirrored basis (negative
    /// determinant) is reported as a negative x scale so the rotation stays
    /// proper. If exactly one axis has zero length it is rebuilt from the
    /// other two; with two or more collapsed axes the rotation is identity.
    pub fn decompose(&self) -> DecomposedTransform<T> {
        let origin = Point3::from(self.matrix.fixed_view::<3, 1>(0, 3).into_owned());
        let basis: Matrix3<T> = self.matrix.fixed_view::<3, 3>(0, 0).into_owned();

        let mut scale = Vector3::new(basis.column(0).norm(), basis.column(1).norm(), basis.column(2).norm());
        if basis.determinant() < T::zero() {
            scale.x = -scale.x;
        }

        let epsilon = T::default_epsilon();
        let axes: [Option<Vector3<T>>; 3] = std::array::from_fn(|i| {
            if scale[i].abs() <= epsilon {
                None
            } else {
                Some(basis.column(i) / scale[i])
            }
        });

        let rotation = match (axes[0], axes[1], axes[2]) {
            (Some(x), Some(y), Some(z)) => Some([x, y, z]),
            (None, Some(y), Some(z)) => Some([y.cross(&z), y, z]),
            (Some(x), None, Some(z)) => Some([x, z.cross(&x), z]),
            (Some(x), Some(y), None) => Some([x, y, x.cross(&y)]),
            _ => None,
        }
        .map(|[x, y, z]| {
            let rotation = Rotation3::from_matrix_unchecked(Matrix3::from_columns(&[x, y, z]));
            UnitQuaternion::from_rotation_matrix(&rotation)
        })
        .unwrap_or_else(UnitQuaternion::identity);

        DecomposedTransform {
            origin,
            scale,
            rotation,
        }
    }
}

impl<T: RealField + Copy> Default for Transform3D<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: RealField + Copy> std::ops::Mul for Transform3D<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}

impl<T: Scalar> From<Matrix4<T>> for Transform3D<T> {
    fn from(matrix: Matrix4<T>) -> Self {
        Self { matrix }
    }
}

impl<T: RealField + Copy> From<Isometry3<T>> for Transform3D<T> {
    fn from(isometry: Isometry3<T>) -> Self {
        Self {
            matrix: isometry.to_homogeneous(),
        }
    }
}

impl<T: RealField + Copy> From<Transform3<T>> for Transform3D<T> {
    fn from(transform: Transform3<T>) -> Self {
        Self {
            matrix: transform.into_inner(),
        }
    }
}
