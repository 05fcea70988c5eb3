//! # vislab
//!
//! Two leaf computations for a visualization host:
//!
//! - a **mesh animator** that translates a mesh along X by `sin(radius)` and
//!   then rotates it about Z ([`transform`], [`MeshAnimator`]);
//! - a **Phong material** for a ray tracer, summing ambient, diffuse and
//!   specular light with quadratic falloff ([`PhongMaterial`]).
//!
//! The host owns graph execution, port wiring, scene loading and ray
//! traversal. This crate hands it typed operations plus a thin adapter:
//! [`Processor`] / [`ProcessorInfo`] / [`FloatProperty`] for processor graphs,
//! and [`run_processor`] for hosts that keep meshes in a `hecs` [`World`].
//!
//! ## Quick Start
//!
//! ```
//! use vislab::*;
//!
//! // Animate a cube
//! let mut animator = MeshAnimator::new();
//! animator.rotation.set(0.5).unwrap();
//! let moved = animator.process(Some(&Mesh::cube())).unwrap();
//!
//! // Shade a hit
//! let material = PhongMaterialDesc::default().build().unwrap();
//! let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
//! let hit = RayIntersection::new(ray, Vec3::Z, 5.0);
//! let light = Light::uniform(Vec3::new(1.0, 1.0, 3.0), Vec3::ONE);
//! let color = material.shade(&hit, &light);
//! # let _ = (moved, color);
//! ```

mod animator;
mod config;
mod ecs;
mod error;
mod light;
mod material;
mod mesh;
mod phong;
mod processor;
mod ray;

pub use animator::{AnimatorSettings, MeshAnimator, animation_matrix, transform};
pub use config::VislabConfig;
pub use ecs::{MeshIn, MeshOut, run_processor};
pub use error::{Error, Result};
pub use light::Light;
pub use material::{LambertMaterial, MIN_LIGHT_DISTANCE, Material, attenuation};
pub use mesh::{Mesh, Vertex3d, WorldTransform};
pub use phong::{AMBIENT_STRENGTH, LIGHT_INTENSITY, PhongMaterial, PhongMaterialDesc, PhongTerms};
pub use processor::{CodeState, FloatProperty, Processor, ProcessorInfo};
pub use ray::{Ray, RayIntersection};

// Re-export glam math types for convenience
pub use glam::{Mat4, Quat, Vec3, Vec4};

// ECS support
pub use hecs::{Entity, World};
