//! JSON configuration for the animator and a Phong material.
//!
//! Every field is optional; missing fields take the processor's initial
//! values and [`PhongMaterialDesc::default`].
//!
//! ```json
//! {
//!     "animator": { "radius": 4.0, "rotation": 1.57 },
//!     "material": { "shininess": 32.0, "specular": [0.02, 0.02, 0.02] },
//!     "lights": [
//!         { "position": [0, 0, 4], "ambient": [1, 1, 1],
//!           "diffuse": [1, 1, 1], "specular": [1, 1, 1] }
//!     ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animator::AnimatorSettings;
use crate::error::Result;
use crate::light::Light;
use crate::phong::PhongMaterialDesc;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VislabConfig {
    pub animator: AnimatorSettings,
    pub material: PhongMaterialDesc,
    pub lights: Vec<Light>,
}

impl VislabConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::info!("Loaded config from {}", path.display());
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
