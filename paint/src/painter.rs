//! The drawing primitives host code paints pictures with.

use kurbo::{Affine, Point, Rect};

use crate::{Error, OriginPolicy, PaintConfig, RenderContext};

/// A drawing context together with the conventions pictures are drawn in.
///
/// Every primitive draws relative to the logical origin. With
/// [`OriginPolicy::Center`] that is the centre of the canvas, re-applied by
/// [`reset`](Painter::reset) and [`reset_transform`](Painter::reset_transform).
///
/// ```
/// use paint::{Painter, RecordingContext, PaintConfig};
/// use paint::kurbo::Point;
///
/// let mut painter = Painter::new(RecordingContext::new(), PaintConfig::default());
/// painter.reset();
/// painter.set_fill_colour("tomato");
/// let triangle = [
///     Point::new(0.0, -20.0),
///     Point::new(20.0, 20.0),
///     Point::new(-20.0, 20.0),
/// ];
/// painter.polygon(&triangle, true, true, false);
/// ```
pub struct Painter<C> {
    ctx: C,
    config: PaintConfig,
}

impl<C: RenderContext> Painter<C> {
    pub fn new(ctx: C, config: PaintConfig) -> Painter<C> {
        Painter { ctx, config }
    }

    /// The underlying context.
    pub fn context(&self) -> &C {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.ctx
    }

    pub fn into_context(self) -> C {
        self.ctx
    }

    pub fn config(&self) -> &PaintConfig {
        &self.config
    }

    /// Report any error the context latched while drawing.
    pub fn finish(&mut self) -> Result<(), Error> {
        self.ctx.status()
    }

    /// Clear all state and transforms, then apply the origin policy.
    pub fn reset(&mut self) {
        self.ctx.reset();
        self.set_origin();
    }

    /// Fill a unit square with its corner at the origin.
    pub fn fill_rect(&mut self) {
        let side = self.config.unit_size;
        self.ctx.fill_rect(Rect::new(0.0, 0.0, side, side));
    }

    /// Draw a circular arc around the origin.
    pub fn arc(&mut self, radius: f64, start: f64, end: f64, fill: bool, stroke: bool) {
        self.ctx.begin_path();
        self.ctx.arc(Point::ORIGIN, radius, start, end);
        if fill {
            self.ctx.fill();
        }
        if stroke {
            self.ctx.stroke();
        }
    }

    /// Draw a path through `points`.
    ///
    /// The path is only filled when it is also `closed`; it is stroked
    /// whenever `stroke` is set.
    pub fn polygon(&mut self, points: &[Point], closed: bool, fill: bool, stroke: bool) {
        self.ctx.begin_path();
        self.ctx.move_to(Point::ORIGIN);
        let mut points = points.iter();
        if let Some(first) = points.next() {
            self.ctx.move_to(*first);
        }
        for point in points {
            self.ctx.line_to(*point);
        }

        if closed {
            self.ctx.close_path();
        }
        if fill && closed {
            self.ctx.fill();
        }
        if stroke {
            self.ctx.stroke();
        }
    }

    /// Fill `text` at the origin using a CSS font string.
    pub fn text(&mut self, text: &str, style: &str) {
        self.ctx.set_font(style);
        self.ctx.fill_text(text, Point::ORIGIN);
    }

    pub fn save(&mut self) -> Result<(), Error> {
        self.ctx.save()
    }

    pub fn restore(&mut self) -> Result<(), Error> {
        self.ctx.restore()
    }

    /// Draw with the state saved, restoring it afterwards even if `f` fails.
    pub fn with_save(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<(), Error>,
    ) -> Result<(), Error> {
        self.save()?;
        f(self).and(self.restore())
    }

    pub fn set_fill_colour(&mut self, css_colour: &str) {
        self.ctx.set_fill_style(css_colour);
    }

    #[inline]
    pub fn set_fill_color(&mut self, css_color: &str) {
        self.set_fill_colour(css_color);
    }

    pub fn set_stroke_color(&mut self, css_color: &str) {
        self.ctx.set_stroke_style(css_color);
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    pub fn translate(&mut self, x: f64, y: f64) {
        self.ctx.transform(Affine::translate((x, y)));
    }

    pub fn scale(&mut self, x: f64, y: f64) {
        self.ctx.transform(Affine::scale_non_uniform(x, y));
    }

    pub fn rotate(&mut self, radians: f64) {
        self.ctx.transform(Affine::rotate(radians));
    }

    /// Drop all transforms, then apply the origin policy.
    pub fn reset_transform(&mut self) {
        self.ctx.reset_transform();
        self.set_origin();
    }

    /// Laid-out width of the canvas.
    pub fn width(&self) -> f64 {
        self.ctx.client_size().width
    }

    /// Laid-out height of the canvas.
    pub fn height(&self) -> f64 {
        self.ctx.client_size().height
    }

    fn set_origin(&mut self) {
        match self.config.origin {
            OriginPolicy::Center => {
                let center = self.ctx.client_size().to_vec2() * 0.5;
                self.ctx.transform(Affine::translate(center));
            }
            OriginPolicy::TopLeft => (),
        }
    }
}
