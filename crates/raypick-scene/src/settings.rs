//! Scene debug-drawing settings.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SceneError};

/// Settings controlling how a scene's acceleration structures are visualized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Emit a box decoration per scene BVH node from [`draw_bvh`](crate::draw_bvh).
    pub draw_bvh: bool,
    /// RGBA color of the BVH boxes, each component in `[0, 1]`.
    pub bvh_color: [f32; 4],
    /// Deepest BVH level to draw (root is level 1). `None` draws every level.
    pub bvh_max_draw_depth: Option<usize>,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            draw_bvh: false,
            bvh_color: [0.0, 0.0, 0.0, 1.0],
            bvh_max_draw_depth: None,
        }
    }
}

impl SceneSettings {
    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if self.bvh_color.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(SceneError::InvalidSettings(
                "bvh_color components must be between 0 and 1".into(),
            ));
        }
        if self.bvh_max_draw_depth == Some(0) {
            return Err(SceneError::InvalidSettings(
                "bvh_max_draw_depth must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
