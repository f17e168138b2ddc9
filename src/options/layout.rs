use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// Grid planning parameters shared by the grid mode and every formation that
/// offsets from the grid.
pub struct LayoutOptions {
    /// Cards per grid row.
    #[schemars(title = "Columns", range(min = 1, max = 52))]
    pub columns: u32,
    /// Horizontal distance between card centers.
    #[schemars(title = "Spacing X", range(min = 0.5, max = 3.0), extend("step" = 0.01))]
    pub spacing_x: f32,
    /// Vertical distance between card centers.
    #[schemars(title = "Spacing Y", range(min = 0.5, max = 3.0), extend("step" = 0.01))]
    pub spacing_y: f32,
    /// Card width in world units.
    #[schemars(skip)]
    pub card_width: f32,
    /// Card height in world units.
    #[schemars(skip)]
    pub card_height: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            columns: 13,
            spacing_x: 1.02,
            spacing_y: 1.45,
            card_width: 1.0,
            card_height: 1.4,
        }
    }
}
