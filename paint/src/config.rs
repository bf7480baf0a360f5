//! Configuration shared by the painter and the picture elements.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Registry id the picture elements look their display callback up under.
pub const DEFAULT_DISPLAY_ID: &str = "display_on_rendering_context_with_default_drawing_state";

/// Side of the square drawn by [`Painter::fill_rect`](crate::Painter::fill_rect), in pixels.
pub const UNIT_SIZE_PX: f64 = 50.0;

/// Where logical (0, 0) sits after a reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OriginPolicy {
    /// Translate to the centre of the canvas after every reset and
    /// reset-transform.
    #[default]
    Center,
    /// Leave the platform origin (top left) in place.
    TopLeft,
}

/// Options for drawing pictures on a canvas.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PaintConfig {
    pub origin: OriginPolicy,
    pub unit_size: f64,
    pub display_id: String,
}

impl PaintConfig {
    pub fn new() -> PaintConfig {
        PaintConfig {
            origin: OriginPolicy::default(),
            unit_size: UNIT_SIZE_PX,
            display_id: DEFAULT_DISPLAY_ID.to_owned(),
        }
    }

    pub fn set_origin(&mut self, origin: OriginPolicy) {
        self.origin = origin;
    }

    pub fn set_unit_size(&mut self, unit_size: f64) {
        self.unit_size = unit_size;
    }

    pub fn set_display_id(&mut self, id: impl Into<String>) {
        self.display_id = id.into();
    }
}

impl Default for PaintConfig {
    fn default() -> Self {
        PaintConfig::new()
    }
}
