//! The persistent drawing state of a canvas context.

use kurbo::Affine;

/// Fill style of a freshly reset canvas.
pub const DEFAULT_FILL_STYLE: &str = "#000000";
/// Stroke style of a freshly reset canvas.
pub const DEFAULT_STROKE_STYLE: &str = "#000000";
/// Line width of a freshly reset canvas.
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;
/// Font of a freshly reset canvas.
pub const DEFAULT_FONT: &str = "10px sans-serif";

/// The part of a context's state that `save` pushes and `restore` pops.
///
/// Styles are kept as the CSS strings they were set with; this layer never
/// parses or normalizes them.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawingState {
    pub transform: Affine,
    pub fill_style: String,
    pub stroke_style: String,
    pub line_width: f64,
    pub font: String,
}

impl Default for DrawingState {
    fn default() -> Self {
        DrawingState {
            transform: Affine::IDENTITY,
            fill_style: DEFAULT_FILL_STYLE.to_owned(),
            stroke_style: DEFAULT_STROKE_STYLE.to_owned(),
            line_width: DEFAULT_LINE_WIDTH,
            font: DEFAULT_FONT.to_owned(),
        }
    }
}
