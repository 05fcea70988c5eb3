//! Phong reflection: ambient + diffuse + specular with quadratic falloff.
//!
//! For a hit with normal `N`, unit direction `L` toward the light, incoming
//! ray direction `V` and light distance `d`:
//!
//! ```text
//! cosNL    = max(N·L, 0)
//! R        = -((max(N·L, 0) * 2N) - L)
//! T2       = max(normalize(R)·normalize(V), 0)
//! ambient  = 0.005 * Ka * La
//! diffuse  = Kd * Ld * cosNL / d²
//! specular = Ks * Ls * T2^shininess / d²
//! ```
//!
//! `V` is the direction the ray travels (toward the surface), which is why
//! `R` carries the extra negation. The arithmetic is kept in exactly this
//! order so results match previously generated reference images.
//!
//! # Example
//!
//! ```
//! use vislab::{Light, Material, PhongMaterial, Ray, RayIntersection, Vec3};
//!
//! let material = PhongMaterial::new(
//!     Vec3::ONE, 0.0, 16.0,
//!     Vec3::splat(0.01), Vec3::splat(0.01), Vec3::splat(0.01),
//! ).unwrap();
//!
//! let ray = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::NEG_Z);
//! let hit = RayIntersection::new(ray, Vec3::Z, 3.0);
//! let light = Light::uniform(Vec3::new(0.0, 0.0, 2.0), Vec3::ONE);
//!
//! let color = material.shade(&hit, &light);
//! assert_eq!(color.w, 1.0);
//! assert!(color.x > 0.0);
//! ```

use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::light::Light;
use crate::material::{MIN_LIGHT_DISTANCE, Material};
use crate::ray::RayIntersection;

/// Factor applied to the material colors at construction.
pub const LIGHT_INTENSITY: f32 = 100.0;

/// Weight of the ambient term. Ambient light is not attenuated.
pub const AMBIENT_STRENGTH: f32 = 0.005;

/// The three Phong terms before they are summed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhongTerms {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl PhongTerms {
    /// `ambient + specular + diffuse`, in that order.
    pub fn sum(&self) -> Vec3 {
        self.ambient + self.specular + self.diffuse
    }
}

/// A Phong material.
///
/// Ambient, diffuse and specular colors are stored already multiplied by
/// [`LIGHT_INTENSITY`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhongMaterial {
    color: Vec3,
    reflectance: f32,
    shininess: f32,
    ambient: Vec3,
    diffuse: Vec3,
    specular: Vec3,
}

impl PhongMaterial {
    /// Creates a material.
    ///
    /// Fails with [`Error::InvalidShininess`] if `shininess` is negative or
    /// not finite.
    pub fn new(
        color: Vec3,
        reflectance: f32,
        shininess: f32,
        ambient: Vec3,
        diffuse: Vec3,
        specular: Vec3,
    ) -> Result<Self> {
        if !shininess.is_finite() || shininess < 0.0 {
            return Err(Error::InvalidShininess(shininess));
        }

        Ok(Self {
            color,
            reflectance,
            shininess,
            ambient: LIGHT_INTENSITY * ambient,
            diffuse: LIGHT_INTENSITY * diffuse,
            specular: LIGHT_INTENSITY * specular,
        })
    }

    pub fn shininess(&self) -> f32 {
        self.shininess
    }

    /// Scaled ambient color.
    pub fn ambient(&self) -> Vec3 {
        self.ambient
    }

    /// Scaled diffuse color.
    pub fn diffuse(&self) -> Vec3 {
        self.diffuse
    }

    /// Scaled specular color.
    pub fn specular(&self) -> Vec3 {
        self.specular
    }

    /// Computes the three terms separately.
    ///
    /// The geometric chain (directions, dot products, distance and the
    /// shininess power) runs in `f64` and is narrowed once per term. Colors
    /// stay `f32`.
    ///
    /// When the light sits on the surface, `L` and `R` are zero vectors: the
    /// diffuse term is zero, and the specular term is `Ks * Ls * 0^shininess`
    /// over the clamped distance.
    pub fn terms(&self, intersection: &RayIntersection, light: &Light) -> PhongTerms {
        let position = intersection.position().as_dvec3();
        let light_position = light.position.as_dvec3();
        let n = intersection.normal().as_dvec3().normalize_or_zero();
        let l = (light_position - position).normalize_or_zero();

        let cos_nl = n.dot(l).max(0.0);
        let attenuation = position
            .distance(light_position)
            .max(f64::from(MIN_LIGHT_DISTANCE))
            .powi(2);

        let n2 = 2.0 * n;
        let t1 = n.dot(l).max(0.0);
        let r0 = t1 * n2;
        let r = -(r0 - l);
        let norm_r = r.normalize_or_zero();

        let v = intersection.ray().direction.as_dvec3().normalize_or_zero();
        let t2 = norm_r.dot(v).max(0.0);

        let ambient = AMBIENT_STRENGTH * self.ambient * light.ambient;
        let specular = ((self.specular * light.specular).as_dvec3()
            * t2.powf(f64::from(self.shininess))
            / attenuation)
            .as_vec3();
        let diffuse = ((self.diffuse * light.diffuse).as_dvec3() * cos_nl / attenuation).as_vec3();

        PhongTerms {
            ambient,
            diffuse,
            specular,
        }
    }
}

impl Material for PhongMaterial {
    fn color(&self) -> Vec3 {
        self.color
    }

    fn reflectance(&self) -> f32 {
        self.reflectance
    }

    fn shade(&self, intersection: &RayIntersection, light: &Light) -> Vec4 {
        self.terms(intersection, light).sum().extend(1.0)
    }
}

/// Serializable description of a [`PhongMaterial`], with unscaled colors.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhongMaterialDesc {
    pub color: Vec3,
    pub reflectance: f32,
    pub shininess: f32,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl Default for PhongMaterialDesc {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            reflectance: 0.0,
            shininess: 20.0,
            ambient: Vec3::splat(0.01),
            diffuse: Vec3::splat(0.01),
            specular: Vec3::splat(0.01),
        }
    }
}

impl PhongMaterialDesc {
    pub fn build(&self) -> Result<PhongMaterial> {
        PhongMaterial::new(
            self.color,
            self.reflectance,
            self.shininess,
            self.ambient,
            self.diffuse,
            self.specular,
        )
    }
}
