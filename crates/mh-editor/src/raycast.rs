//! Ray casting against the baseplate
//!
//! Implements pick ray construction from normalized device coordinates and
//! the ray/triangle and ray/plane intersection tests used for placement.

use glam::{Mat4, Vec2, Vec3};

use mh_core::solid::SolidMesh;

/// A pick ray in plate-local space
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray; the direction is normalized
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Build a pick ray from normalized device coordinates
    ///
    /// `ndc` is the pointer position in [-1, 1] on both axes and
    /// `inv_view_proj` the inverse of the camera's view-projection matrix.
    /// Unprojects the near and far plane points and rays between them.
    pub fn from_ndc(ndc: Vec2, inv_view_proj: Mat4) -> Self {
        let near = inv_view_proj.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inv_view_proj.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Self::new(near, far - near)
    }

    /// Point along the ray at parameter `t`
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Ray-triangle intersection test (Moller-Trumbore).
///
/// # Arguments
///
/// * `ray` - The pick ray (direction normalized).
/// * `v0`, `v1`, `v2` - The triangle corners.
///
/// # Returns
///
/// * `Some(t)` - The ray parameter at the intersection point.
/// * `None` - If the ray is parallel to the triangle plane, the hit lies
///   outside the triangle, or the hit is behind the ray origin.
pub fn ray_triangle_intersection(ray: &Ray, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<f32> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let p = ray.direction.cross(edge2);
    let det = edge1.dot(p);

    // Ray is parallel to the triangle plane
    if det.abs() < 1e-8 {
        return None;
    }

    let inv_det = 1.0 / det;
    let s = ray.origin - v0;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = ray.direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(q) * inv_det;
    if t < 0.0 {
        return None;
    }

    Some(t)
}

/// Intersect a ray with the horizontal plane at the given height
///
/// Returns the hit point, or None when the ray is parallel to the plane or
/// the plane lies behind the ray origin.
pub fn ray_plane_y_intersection(ray: &Ray, plane_y: f32) -> Option<Vec3> {
    let denom = ray.direction.y;

    // Ray is nearly parallel to the plane
    if denom.abs() < 1e-6 {
        return None;
    }

    let t = (plane_y - ray.origin.y) / denom;
    if t < 0.0 {
        return None;
    }

    Some(ray.point_at(t))
}

/// Anything the placement tool can pick against
///
/// Returns the nearest hit point, or None on a miss. A miss is the normal
/// "no preview" state, not an error.
pub trait RaycastTarget {
    fn raycast(&self, ray: &Ray) -> Option<Vec3>;
}

/// The plate being drilled, as seen by the placement tool
#[derive(Debug, Clone)]
pub struct Baseplate {
    pub mesh: SolidMesh,
    /// Y coordinate of the top face in plate-local space
    pub top_y: f32,
    /// Plate thickness below the top face
    pub thickness: f32,
}

impl Baseplate {
    pub fn new(mesh: SolidMesh, top_y: f32, thickness: f32) -> Self {
        Self {
            mesh,
            top_y,
            thickness,
        }
    }

    /// Rectangular plate centered in XZ with its top face at Y = 0
    pub fn rectangular(width: f32, thickness: f32, length: f32) -> Self {
        let mesh = mh_core::generator::generate_plate_solid([width, thickness, length]);
        Self::new(mesh, 0.0, thickness)
    }
}

impl RaycastTarget for Baseplate {
    fn raycast(&self, ray: &Ray) -> Option<Vec3> {
        let mut nearest: Option<f32> = None;

        for chunk in self.mesh.indices.chunks(3) {
            if chunk.len() != 3 {
                continue;
            }
            let v0 = Vec3::from(self.mesh.vertices[chunk[0] as usize]);
            let v1 = Vec3::from(self.mesh.vertices[chunk[1] as usize]);
            let v2 = Vec3::from(self.mesh.vertices[chunk[2] as usize]);

            if let Some(t) = ray_triangle_intersection(ray, v0, v1, v2) {
                if nearest.is_none_or(|n| t < n) {
                    nearest = Some(t);
                }
            }
        }

        nearest.map(|t| ray.point_at(t))
    }
}
