//! Surface materials for the host's ray tracer.
//!
//! A [`Material`] turns one hit and one light into a color. The host sums
//! contributions over its lights (see [`Material::shade_lights`]) and
//! accumulates the result per pixel.

use glam::{Vec3, Vec4};

use crate::light::Light;
use crate::ray::RayIntersection;

/// Lower bound on the light-to-surface distance used for attenuation.
///
/// A light sitting exactly on the surface would otherwise divide by zero.
pub const MIN_LIGHT_DISTANCE: f32 = 1e-3;

/// Quadratic falloff: squared light distance, never below
/// `MIN_LIGHT_DISTANCE²`.
pub fn attenuation(light_position: Vec3, surface_position: Vec3) -> f32 {
    let distance = (light_position - surface_position)
        .length()
        .max(MIN_LIGHT_DISTANCE);
    distance.powi(2)
}

/// A shading strategy plugged into the ray tracer.
pub trait Material: Send + Sync {
    /// Base color of the surface.
    fn color(&self) -> Vec3;

    /// Mirror reflectance, consumed by the tracer when spawning reflection
    /// rays. Not part of local shading.
    fn reflectance(&self) -> f32;

    /// Light leaving the surface toward the viewer due to `light`.
    ///
    /// The returned alpha is always 1.
    fn shade(&self, intersection: &RayIntersection, light: &Light) -> Vec4;

    /// Sums [`Material::shade`] over several lights.
    fn shade_lights(&self, intersection: &RayIntersection, lights: &[Light]) -> Vec4 {
        let rgb = lights
            .iter()
            .map(|light| self.shade(intersection, light).truncate())
            .fold(Vec3::ZERO, |acc, c| acc + c);
        rgb.extend(1.0)
    }
}

/// Ideal diffuse reflection.
///
/// `color * light.diffuse * max(N·L, 0) / d²`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LambertMaterial {
    color: Vec3,
    reflectance: f32,
}

impl LambertMaterial {
    pub fn new(color: Vec3, reflectance: f32) -> Self {
        Self { color, reflectance }
    }
}

impl Material for LambertMaterial {
    fn color(&self) -> Vec3 {
        self.color
    }

    fn reflectance(&self) -> f32 {
        self.reflectance
    }

    fn shade(&self, intersection: &RayIntersection, light: &Light) -> Vec4 {
        let n = intersection.normal().normalize_or_zero();
        let l = (light.position - intersection.position()).normalize_or_zero();
        let cos_nl = n.dot(l).max(0.0);

        let attenuation = attenuation(light.position, intersection.position());
        let diffuse = self.color * light.diffuse * cos_nl / attenuation;
        diffuse.extend(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phong::PhongMaterial;
    use crate::ray::Ray;

    fn hit_at_origin() -> RayIntersection {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::NEG_Z);
        RayIntersection::new(ray, Vec3::Z, 3.0)
    }

    #[test]
    fn attenuation_is_squared_distance() {
        assert_eq!(attenuation(Vec3::new(0.0, 3.0, 4.0), Vec3::ZERO), 25.0);
        let floor = attenuation(Vec3::ONE, Vec3::ONE);
        assert!((floor - MIN_LIGHT_DISTANCE * MIN_LIGHT_DISTANCE).abs() < 1e-12);
    }

    #[test]
    fn lambert_facing_light() {
        let material = LambertMaterial::new(Vec3::new(1.0, 0.5, 0.25), 0.0);
        let light = Light::uniform(Vec3::new(0.0, 0.0, 2.0), Vec3::ONE);

        let c = material.shade(&hit_at_origin(), &light);
        assert!((c.truncate() - Vec3::new(0.25, 0.125, 0.0625)).length() < 1e-6);
        assert_eq!(c.w, 1.0);
    }

    #[test]
    fn lambert_light_behind_is_black() {
        let material = LambertMaterial::new(Vec3::ONE, 0.0);
        let light = Light::uniform(Vec3::new(0.0, 0.0, -2.0), Vec3::ONE);

        let c = material.shade(&hit_at_origin(), &light);
        assert_eq!(c.truncate(), Vec3::ZERO);
    }

    #[test]
    fn shade_lights_sums_contributions() {
        let material = LambertMaterial::new(Vec3::ONE, 0.3);
        let a = Light::uniform(Vec3::new(0.0, 0.0, 1.0), Vec3::ONE);
        let b = Light::uniform(Vec3::new(0.0, 0.0, 2.0), Vec3::ONE);
        let hit = hit_at_origin();

        let sum = material.shade_lights(&hit, &[a, b]);
        let expected = material.shade(&hit, &a).truncate() + material.shade(&hit, &b).truncate();
        assert_eq!(sum.truncate(), expected);
        assert_eq!(sum.w, 1.0);
        assert_eq!(material.reflectance(), 0.3);
    }

    #[test]
    fn shade_lights_without_lights_is_black() {
        let material = LambertMaterial::new(Vec3::ONE, 0.0);
        assert_eq!(
            material.shade_lights(&hit_at_origin(), &[]),
            Vec4::new(0.0, 0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn materials_and_lights_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PhongMaterial>();
        assert_send_sync::<LambertMaterial>();
        assert_send_sync::<Light>();
        assert_send_sync::<Box<dyn Material>>();
    }
}
