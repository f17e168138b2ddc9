//! Engine options with TOML preset support.
//!
//! Every tunable the engine reads (grid layout, transition timing, camera
//! lens and framing, collision relaxation, per-formation parameters, and the
//! named camera views) lives here. Options serialize to/from TOML for
//! presets stored in `assets/presets/`.

mod camera;
mod collision;
mod formations;
mod layout;
mod transition;

use std::collections::BTreeMap;
use std::path::Path;

pub use camera::CameraOptions;
pub use collision::CollisionOptions;
pub use formations::FormationOptions;
pub use layout::LayoutOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use transition::TransitionOptions;

use crate::camera::CameraView;
use crate::error::TableauError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[collision]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Grid layout parameters.
    pub layout: LayoutOptions,
    /// Card transition timing and grid damping.
    pub transition: TransitionOptions,
    /// Camera lens, framing and glide parameters.
    pub camera: CameraOptions,
    /// Float-mode overlap relaxation.
    pub collision: CollisionOptions,
    /// Per-mode formation parameters.
    pub formations: FormationOptions,
    /// Camera views keyed by mode name. Modes without an entry keep the
    /// camera under host control.
    #[schemars(skip)]
    pub views: BTreeMap<String, CameraView>,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TableauError> {
        let content = std::fs::read_to_string(path)?;
        let options = toml::from_str(&content)
            .map_err(|e| TableauError::OptionsParse(e.to_string()))?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TableauError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TableauError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        log::info!("saved options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_view() -> CameraView {
        CameraView {
            position: [0.0, 5.5, 7.0],
            rotation: [-0.6, 0.0, 0.0],
            fov: 50.0,
            near: 0.1,
            far: 100.0,
            target: [0.0, 0.0, 0.0],
        }
    }

    #[test]
    fn default_round_trips_through_toml() {
        let mut opts = Options::default();
        let _ = opts.views.insert("helix".to_owned(), sample_view());
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[collision]
iterations = 3

[formations.helix]
radius = 3.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.collision.iterations, 3);
        assert_eq!(opts.formations.helix.radius, 3.0);
        // Everything else should be default
        assert_eq!(opts.collision.radius, 0.7);
        assert_eq!(opts.formations.helix.height, 4.4);
        assert_eq!(opts.layout.columns, 13);
        assert_eq!(opts.transition.duration_secs, 0.8);
        assert!(opts.views.is_empty());
    }

    #[test]
    fn views_parse_from_tables() {
        let toml_str = r"
[views.spiral]
position = [0.0, 6.0, 2.0]
rotation = [-1.2, 0.0, 0.0]
fov = 55.0
near = 0.1
far = 100.0
target = [0.0, 0.0, 0.0]
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        let view = &opts.views["spiral"];
        assert_eq!(view.fov, 55.0);
        assert_eq!(view.position, [0.0, 6.0, 2.0]);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let dir = std::env::temp_dir().join("tableau-options-test");
        let path = dir.join("broken.toml");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "[collision\nradius = ").unwrap();
        assert!(matches!(
            Options::load(&path),
            Err(TableauError::OptionsParse(_))
        ));
        assert!(matches!(
            Options::load(&dir.join("missing.toml")),
            Err(TableauError::Io(_))
        ));
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir().join("tableau-presets-test");
        let mut opts = Options::default();
        opts.camera.fovy = 52.0;
        opts.save(&dir.join("wide.toml")).unwrap();
        let loaded = Options::load(&dir.join("wide.toml")).unwrap();
        assert_eq!(loaded.camera.fovy, 52.0);
        assert!(Options::list_presets(&dir).contains(&"wide".to_owned()));
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema["properties"].as_object().unwrap();
        let sections =
            ["layout", "transition", "camera", "collision", "formations"];
        for key in sections {
            assert!(props.contains_key(key), "missing {key}");
        }
        assert!(!props.contains_key("views"));
    }

    #[test]
    fn bundled_presets_parse() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/presets");
        let names = Options::list_presets(&dir);
        assert!(!names.is_empty());
        for name in names {
            let path = dir.join(format!("{name}.toml"));
            let opts = Options::load(&path).unwrap();
            for key in opts.views.keys() {
                assert!(key.parse::<crate::mode::Mode>().is_ok(), "{key}");
            }
        }
    }
}
