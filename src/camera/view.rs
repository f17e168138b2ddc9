use std::collections::BTreeMap;

use glam::{EulerRot, Quat, Vec3};
use rustc_hash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Camera;
use crate::formation::euler_to_quat;
use crate::mode::Mode;

/// A stored camera framing associated with a mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera View", inline)]
pub struct CameraView {
    /// Eye position.
    pub position: [f32; 3],
    /// Orientation as XYZ Euler angles in radians.
    pub rotation: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
    /// Orbit target.
    pub target: [f32; 3],
}

impl CameraView {
    /// Snapshot the current framing of `camera`.
    #[must_use]
    pub fn from_camera(camera: &Camera) -> Self {
        let (x, y, z) = camera.orientation.to_euler(EulerRot::XYZ);
        Self {
            position: camera.position.to_array(),
            rotation: [x, y, z],
            fov: camera.fovy,
            near: camera.znear,
            far: camera.zfar,
            target: camera.target.to_array(),
        }
    }

    /// Eye position as a vector.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    /// Orientation as a rotation.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        euler_to_quat(Vec3::from_array(self.rotation))
    }

    /// Orbit target as a vector.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        Vec3::from_array(self.target)
    }
}

/// Named views resolved to modes.
#[derive(Debug, Clone, Default)]
pub struct CameraViewTable {
    views: FxHashMap<Mode, CameraView>,
}

impl CameraViewTable {
    /// Resolve views keyed by mode name. Unknown names are skipped with a
    /// warning rather than coerced to grid.
    #[must_use]
    pub fn from_named(named: &BTreeMap<String, CameraView>) -> Self {
        let mut views = FxHashMap::default();
        for (name, view) in named {
            match name.parse::<Mode>() {
                Ok(mode) => {
                    let _ = views.insert(mode, *view);
                }
                Err(err) => log::warn!("ignoring camera view: {err}"),
            }
        }
        Self { views }
    }

    /// Register or replace the view for `mode`.
    pub fn insert(
        &mut self,
        mode: Mode,
        view: CameraView,
    ) -> Option<CameraView> {
        self.views.insert(mode, view)
    }

    /// View registered for `mode`, if any.
    #[must_use]
    pub fn get(&self, mode: Mode) -> Option<&CameraView> {
        self.views.get(&mode)
    }

    /// Number of registered views.
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Whether no views are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
