//! Indexed triangle lists supplied by the caller for picking queries

use crate::error::{Error, Result};
use crate::triangle::Triangle;
use nalgebra::{Point3, RealField, Scalar};
use serde::{Deserialize, Serialize};

/// A triangle mesh with vertices and faces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleMesh<T: Scalar> {
    pub vertices: Vec<Point3<T>>,
    pub faces: Vec<[usize; 3]>,
}

impl<T: RealField + Copy> TriangleMesh<T> {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh from vertices and faces
    pub fn from_vertices_and_faces(vertices: Vec<Point3<T>>, faces: Vec<[usize; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// The triangle for a face, or `None` if the face or any of its vertex
    /// indices is out of range
    pub fn triangle(&self, face_index: usize) -> Option<Triangle<T>> {
        let [a, b, c] = *self.faces.get(face_index)?;
        Some(Triangle::new(
            *self.vertices.get(a)?,
            *self.vertices.get(b)?,
            *self.vertices.get(c)?,
        ))
    }

    /// Iterate `(face_index, triangle)` pairs, skipping faces with bad indices
    pub fn triangles(&self) -> impl Iterator<Item = (usize, Triangle<T>)> + '_ {
        (0..self.faces.len()).filter_map(move |i| self.triangle(i).map(|t| (i, t)))
    }

    /// Check that every face references an existing vertex
    pub fn validate(&self) -> Result<()> {
        for (face_index, face) in self.faces.iter().enumerate() {
            if let Some(&bad) = face.iter().find(|&&v| v >= self.vertices.len()) {
                return Err(Error::InvalidData(format!(
                    "Face {} references vertex {} but the mesh has {} vertices",
                    face_index,
                    bad,
                    self.vertices.len()
                )));
            }
        }
        Ok(())
    }
}

impl<T: RealField + Copy> Default for TriangleMesh<T> {
    fn default() -> Self {
        Self::new()
    }
}
