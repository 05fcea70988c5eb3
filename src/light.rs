use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A point light with separate ambient, diffuse and specular colors.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl Light {
    pub fn new(position: Vec3, ambient: Vec3, diffuse: Vec3, specular: Vec3) -> Self {
        Self {
            position,
            ambient,
            diffuse,
            specular,
        }
    }

    /// A light whose three colors are all `color`.
    pub fn uniform(position: Vec3, color: Vec3) -> Self {
        Self::new(position, color, color, color)
    }
}
