//! Rays and the read-only hit record a material shades.
//!
//! Intersection search belongs to the host's ray tracer; these types only
//! carry its results into [`Material::shade`](crate::Material::shade).

use glam::Vec3;

/// A ray in 3D space.
///
/// # Example
///
/// ```
/// use vislab::{Ray, Vec3};
///
/// let ray = Ray::new(Vec3::new(0.0, 1.0, 5.0), Vec3::new(0.0, 0.0, -2.0));
/// assert_eq!(ray.direction, Vec3::NEG_Z);
/// assert_eq!(ray.point_at(5.0), Vec3::new(0.0, 1.0, 0.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// The starting point of the ray.
    pub origin: Vec3,
    /// The normalized direction of the ray.
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray; the direction is normalized (zero stays zero).
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point along the ray at distance `t` from the origin.
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Where a ray hit a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayIntersection {
    ray: Ray,
    position: Vec3,
    normal: Vec3,
    distance: f32,
}

impl RayIntersection {
    /// Records a hit `distance` units along `ray`.
    ///
    /// The normal is stored as given; shading normalizes it.
    pub fn new(ray: Ray, normal: Vec3, distance: f32) -> Self {
        Self {
            ray,
            position: ray.point_at(distance),
            normal,
            distance,
        }
    }

    /// Records a hit at an explicit position, for hosts that already
    /// computed it.
    pub fn at(ray: Ray, position: Vec3, normal: Vec3) -> Self {
        Self {
            ray,
            position,
            normal,
            distance: (position - ray.origin).length(),
        }
    }

    /// The ray that produced this hit; its direction is the incoming one.
    pub fn ray(&self) -> &Ray {
        &self.ray
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_position_follows_ray() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let hit = RayIntersection::new(ray, Vec3::Z, 4.0);

        assert_eq!(hit.position(), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(hit.distance(), 4.0);
        assert_eq!(hit.ray().direction, Vec3::NEG_Z);
    }

    #[test]
    fn explicit_hit_measures_distance() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let hit = RayIntersection::at(ray, Vec3::new(3.0, 4.0, 0.0), Vec3::Y);
        assert_eq!(hit.distance(), 5.0);
    }

    #[test]
    fn zero_direction_stays_zero() {
        let ray = Ray::new(Vec3::ONE, Vec3::ZERO);
        assert_eq!(ray.direction, Vec3::ZERO);
    }
}
