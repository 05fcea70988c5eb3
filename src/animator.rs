//! Mesh animator: moves a mesh along X by `sin(radius)`, then spins it about Z.
//!
//! The core is the pure function [`transform`]; [`MeshAnimator`] wraps it as a
//! [`Processor`] with the three bounded properties the host exposes.
//!
//! # Example
//!
//! ```
//! use vislab::{Mesh, MeshAnimator, Processor, WorldTransform};
//!
//! let mut animator = MeshAnimator::new();
//! animator.rotation.set(1.5).unwrap();
//!
//! let cube = Mesh::cube();
//! let moved = animator.process(Some(&cube)).unwrap();
//! assert_ne!(moved.world_matrix(), cube.world_matrix());
//!
//! // No input, no output
//! assert!(animator.process(None).is_none());
//! ```

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::mesh::{Mesh, WorldTransform};
use crate::processor::{CodeState, FloatProperty, Processor, ProcessorInfo};

/// The matrix the animator left-multiplies onto a world matrix.
///
/// `Rotate(rotation, Z) * Translate(sin(radius), 0, 0)`: the translation is
/// applied first, then the result is rotated about the Z axis.
pub fn animation_matrix(radius: f32, rotation: f32) -> Mat4 {
    let offset = Vec3::new(radius.sin(), 0.0, 0.0);
    Mat4::from_axis_angle(Vec3::Z, rotation) * Mat4::from_translation(offset)
}

/// Returns a clone of `mesh` whose world matrix has been animated.
///
/// The new matrix is `Rotate(rotation, Z) * Translate(sin(radius), 0, 0) * M`
/// where `M` is the input's world matrix. The input is never modified.
/// Returns `None` when there is no input.
pub fn transform<M>(mesh: Option<&M>, radius: f32, rotation: f32) -> Option<M>
where
    M: WorldTransform + Clone,
{
    let Some(mesh) = mesh else {
        log::debug!("No input mesh, skipping transform");
        return None;
    };

    let mut out = mesh.clone();
    let matrix = out.world_matrix();

    let translated = Mat4::from_translation(Vec3::new(radius.sin(), 0.0, 0.0)) * matrix;
    let rotated = Mat4::from_axis_angle(Vec3::Z, rotation) * translated;

    out.set_world_matrix(rotated);
    Some(out)
}

/// Serializable animator parameters.
///
/// Defaults match the processor's initial property values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorSettings {
    pub radius: f32,
    /// Radians.
    pub rotation: f32,
    /// Carried through to the processor but not used by the transform.
    pub delta: f32,
}

impl Default for AnimatorSettings {
    fn default() -> Self {
        Self {
            radius: 6.0,
            rotation: 0.0,
            delta: 0.0,
        }
    }
}

/// The animator as a host processor.
///
/// Properties and ranges:
///
/// | Property   | Initial | Range  |
/// |------------|---------|--------|
/// | `radius`   | 6       | [1, 8] |
/// | `rotation` | 0       | [0, 8] |
/// | `delta`    | 0       | [0, 1] |
#[derive(Clone, Debug)]
pub struct MeshAnimator {
    pub radius: FloatProperty,
    pub rotation: FloatProperty,
    /// Accepted for interface compatibility; has no effect on the output.
    pub delta: FloatProperty,
}

impl MeshAnimator {
    pub const INFO: ProcessorInfo = ProcessorInfo {
        class_identifier: "org.inviwo.CubeAnimator",
        display_name: "Cube Animator",
        category: "KTH Labs",
        code_state: CodeState::Experimental,
        tags: &[],
    };

    pub fn new() -> Self {
        Self {
            radius: FloatProperty::new("radius", "Radius", 6.0, 1.0, 8.0),
            rotation: FloatProperty::new("rotation", "Rotation", 0.0, 0.0, 8.0),
            delta: FloatProperty::new("delta", "delta", 0.0, 0.0, 1.0),
        }
    }

    /// Builds an animator and applies `settings` through the clamping setters.
    pub fn from_settings(settings: &AnimatorSettings) -> Result<Self> {
        let mut animator = Self::new();
        animator.apply(settings)?;
        Ok(animator)
    }

    /// Writes `settings` into the properties, clamping out-of-range values.
    pub fn apply(&mut self, settings: &AnimatorSettings) -> Result<()> {
        self.radius.set(settings.radius)?;
        self.rotation.set(settings.rotation)?;
        self.delta.set(settings.delta)?;
        Ok(())
    }

    /// The current property values.
    pub fn settings(&self) -> AnimatorSettings {
        AnimatorSettings {
            radius: self.radius.get(),
            rotation: self.rotation.get(),
            delta: self.delta.get(),
        }
    }
}

impl Default for MeshAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor for MeshAnimator {
    type Data = Mesh;

    fn info(&self) -> &ProcessorInfo {
        &Self::INFO
    }

    fn process(&self, input: Option<&Mesh>) -> Option<Mesh> {
        transform(input, self.radius.get(), self.rotation.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 1e-5;

    fn expected(radius: f32, rotation: f32, m: Mat4) -> Mat4 {
        let translated = Mat4::from_translation(Vec3::new(radius.sin(), 0.0, 0.0)) * m;
        Mat4::from_axis_angle(Vec3::Z, rotation) * translated
    }

    #[test]
    fn absent_input_produces_nothing() {
        assert!(transform::<Mesh>(None, 3.0, 1.0).is_none());
        assert!(MeshAnimator::new().process(None).is_none());
    }

    #[test]
    fn zero_parameters_keep_identity() {
        let out = transform(Some(&Mesh::cube()), 0.0, 0.0).unwrap();
        assert_eq!(out.world_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn quarter_radius_translates_by_one() {
        let start = Mat4::from_translation(Vec3::new(0.0, 2.0, -3.0));
        let mesh = Mesh::cube().with_world_matrix(start);

        let out = transform(Some(&mesh), FRAC_PI_2, 0.0).unwrap();
        let moved = out.world_matrix().w_axis.truncate();
        assert!((moved - Vec3::new(1.0, 2.0, -3.0)).length() < EPSILON);
    }

    #[test]
    fn composition_order_is_rotate_translate_original() {
        let start = Mat4::from_scale_rotation_translation(
            Vec3::new(1.0, 2.0, 0.5),
            glam::Quat::from_rotation_y(0.3),
            Vec3::new(-1.0, 4.0, 2.0),
        );
        let mesh = Mesh::cube().with_world_matrix(start);

        for (radius, rotation) in [(0.0, 0.0), (PI, 0.0), (0.0, PI), (PI, PI), (2.5, 1.25)] {
            let out = transform(Some(&mesh), radius, rotation).unwrap();
            assert_eq!(out.world_matrix(), expected(radius, rotation, start));
            assert!(
                out.world_matrix()
                    .abs_diff_eq(animation_matrix(radius, rotation) * start, EPSILON)
            );
        }
    }

    #[test]
    fn rotation_happens_after_translation() {
        // Translate to (1,0,0) then rotate a quarter turn: ends on +Y, not +X.
        let out = transform(Some(&Mesh::cube()), FRAC_PI_2, FRAC_PI_2).unwrap();
        let origin = out.world_matrix().transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::Y).length() < EPSILON);
    }

    #[test]
    fn input_is_left_untouched() {
        let mesh = Mesh::cube();
        let out = transform(Some(&mesh), 1.0, 2.0).unwrap();
        assert_eq!(mesh.world_matrix(), Mat4::IDENTITY);
        assert_eq!(out.vertices(), mesh.vertices());
    }

    #[test]
    fn delta_does_not_change_output() {
        let mesh = Mesh::cube();
        let mut a = MeshAnimator::new();
        let mut b = MeshAnimator::new();
        a.delta.set(0.0).unwrap();
        b.delta.set(1.0).unwrap();

        assert_eq!(
            a.process(Some(&mesh)).unwrap().world_matrix(),
            b.process(Some(&mesh)).unwrap().world_matrix()
        );
    }

    #[test]
    fn processor_defaults_and_info() {
        let animator = MeshAnimator::new();
        assert_eq!(animator.settings(), AnimatorSettings::default());
        assert_eq!(animator.info().class_identifier, "org.inviwo.CubeAnimator");
        assert_eq!(animator.info().code_state, CodeState::Experimental);
        assert_eq!(animator.radius.min(), 1.0);
        assert_eq!(animator.rotation.max(), 8.0);
    }

    #[test]
    fn settings_are_clamped_on_apply() {
        let animator = MeshAnimator::from_settings(&AnimatorSettings {
            radius: 0.0,
            rotation: 9.0,
            delta: 0.5,
        })
        .unwrap();

        assert_eq!(
            animator.settings(),
            AnimatorSettings {
                radius: 1.0,
                rotation: 8.0,
                delta: 0.5,
            }
        );
    }

    #[test]
    fn processor_uses_property_values() {
        let mut animator = MeshAnimator::new();
        animator.radius.set(2.0).unwrap();
        animator.rotation.set(0.75).unwrap();

        let out = animator.process(Some(&Mesh::cube())).unwrap();
        assert_eq!(out.world_matrix(), expected(2.0, 0.75, Mat4::IDENTITY));
    }
}
