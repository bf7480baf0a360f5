//! The backend trait a canvas implementation provides.

use kurbo::{Affine, Point, Rect, Size};

use crate::Error;

/// The raw operations of a stateful 2D drawing context.
///
/// This mirrors the subset of `CanvasRenderingContext2D` the primitives in
/// [`Painter`](crate::Painter) are built from. Implementations forward each
/// call to their platform unchanged; they do not validate arguments.
///
/// Calls that cannot report failure through their signature should latch the
/// first error and hand it out from [`status`](RenderContext::status).
pub trait RenderContext {
    /// Report and clear any error latched since the last call.
    fn status(&mut self) -> Result<(), Error>;

    /// Reset all state: transform, styles, the save stack, the current path,
    /// and the bitmap contents.
    fn reset(&mut self);

    /// The size of the canvas as laid out on the page, in CSS pixels.
    fn client_size(&self) -> Size;

    /// Forward an attribute (such as `width`) to the underlying canvas.
    ///
    /// Changing the bitmap size resets the context, as the platform does.
    fn set_canvas_attribute(&mut self, name: &str, value: &str) -> Result<(), Error>;

    fn begin_path(&mut self);

    fn move_to(&mut self, p: Point);

    fn line_to(&mut self, p: Point);

    /// Add a circular arc around `center`, angles in radians.
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64);

    fn close_path(&mut self);

    /// Fill the current path with the current fill style.
    fn fill(&mut self);

    /// Stroke the current path with the current stroke style and line width.
    fn stroke(&mut self);

    fn fill_rect(&mut self, rect: Rect);

    fn set_font(&mut self, font: &str);

    fn fill_text(&mut self, text: &str, pos: Point);

    /// Push the current drawing state.
    fn save(&mut self) -> Result<(), Error>;

    /// Pop the most recently saved drawing state. Does nothing if the stack
    /// is empty.
    fn restore(&mut self) -> Result<(), Error>;

    fn set_fill_style(&mut self, css_color: &str);

    fn set_stroke_style(&mut self, css_color: &str);

    fn set_line_width(&mut self, width: f64);

    /// Compose `transform` onto the current transform.
    fn transform(&mut self, transform: Affine);

    /// Set the current transform to identity.
    fn reset_transform(&mut self);

    /// The current transform.
    fn current_transform(&self) -> Affine;

    /// Do graphics operations with the context state saved and then restored.
    ///
    /// Equivalent to [`save`](RenderContext::save), calling `f`, then
    /// [`restore`](RenderContext::restore).
    fn with_save(&mut self, f: impl FnOnce(&mut Self) -> Result<(), Error>) -> Result<(), Error>
    where
        Self: Sized,
    {
        self.save()?;
        // Always try to restore the stack, even if `f` errored.
        f(self).and(self.restore())
    }
}
