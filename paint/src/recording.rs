//! A render context that records what it is asked to do.

use std::collections::BTreeMap;

use kurbo::{Affine, Point, Rect, Size};

use crate::{DrawingState, Error, RenderContext};

/// Bitmap size of a canvas element with no `width`/`height` attributes.
pub const DEFAULT_CANVAS_SIZE: Size = Size::new(300.0, 150.0);

/// One call made against a [`RecordingContext`].
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Reset,
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    ClosePath,
    Fill,
    Stroke,
    FillRect(Rect),
    FillText(String, Point),
    Save,
    Restore,
}

/// A render context that keeps canvas state in memory instead of drawing.
///
/// State changes are applied the way the platform applies them (so
/// save/restore and transforms can be inspected), while path and paint
/// operations are appended to a command log. This is useful for tests and
/// doc examples, and for host code that wants to inspect a picture without a
/// browser.
///
/// No CSS layout is done: the laid-out size follows the bitmap size until
/// [`set_client_size`](RecordingContext::set_client_size) pins it, as a
/// stylesheet sizing the canvas would.
#[derive(Debug)]
pub struct RecordingContext {
    state: DrawingState,
    stack: Vec<DrawingState>,
    commands: Vec<Command>,
    attributes: BTreeMap<String, String>,
    bitmap: Size,
    client: Option<Size>,
}

impl RecordingContext {
    /// A context for a canvas of the default size.
    pub fn new() -> RecordingContext {
        RecordingContext::with_size(DEFAULT_CANVAS_SIZE)
    }

    /// A context whose canvas bitmap is `size`, laid out at the same size.
    pub fn with_size(size: impl Into<Size>) -> RecordingContext {
        RecordingContext {
            state: DrawingState::default(),
            stack: Vec::new(),
            commands: Vec::new(),
            attributes: BTreeMap::new(),
            bitmap: size.into(),
            client: None,
        }
    }

    /// Lay the canvas out at `size`, independent of its bitmap size.
    pub fn set_client_size(&mut self, size: impl Into<Size>) {
        self.client = Some(size.into());
    }

    /// Size of the pixel buffer, as set by the `width` and `height` attributes.
    pub fn bitmap_size(&self) -> Size {
        self.bitmap
    }

    /// Everything recorded since construction or the last [`take_commands`].
    ///
    /// [`take_commands`]: RecordingContext::take_commands
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Drain the command log.
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    /// The current drawing state.
    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    /// How many states are currently saved.
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    /// The value last forwarded for a canvas attribute.
    pub fn canvas_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn reset_state(&mut self) {
        self.state = DrawingState::default();
        self.stack.clear();
    }
}

impl Default for RecordingContext {
    fn default() -> Self {
        RecordingContext::new()
    }
}

impl RenderContext for RecordingContext {
    fn status(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn reset(&mut self) {
        self.reset_state();
        self.commands.push(Command::Reset);
    }

    fn client_size(&self) -> Size {
        self.client.unwrap_or(self.bitmap)
    }

    fn set_canvas_attribute(&mut self, name: &str, value: &str) -> Result<(), Error> {
        self.attributes.insert(name.to_owned(), value.to_owned());
        // Resizing the bitmap clears the context, like a real canvas. A value
        // that doesn't parse leaves the bitmap size alone.
        match name {
            "width" => {
                self.reset_state();
                if let Ok(width) = value.trim().parse::<u32>() {
                    self.bitmap.width = width as f64;
                }
            }
            "height" => {
                self.reset_state();
                if let Ok(height) = value.trim().parse::<u32>() {
                    self.bitmap.height = height as f64;
                }
            }
            _ => (),
        }
        Ok(())
    }

    fn begin_path(&mut self) {
        self.commands.push(Command::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.commands.push(Command::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.commands.push(Command::LineTo(p));
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        self.commands.push(Command::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn close_path(&mut self) {
        self.commands.push(Command::ClosePath);
    }

    fn fill(&mut self) {
        self.commands.push(Command::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(Command::Stroke);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(Command::FillRect(rect));
    }

    fn set_font(&mut self, font: &str) {
        self.state.font = font.to_owned();
    }

    fn fill_text(&mut self, text: &str, pos: Point) {
        self.commands.push(Command::FillText(text.to_owned(), pos));
    }

    fn save(&mut self) -> Result<(), Error> {
        self.stack.push(self.state.clone());
        self.commands.push(Command::Save);
        Ok(())
    }

    fn restore(&mut self) -> Result<(), Error> {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
        self.commands.push(Command::Restore);
        Ok(())
    }

    fn set_fill_style(&mut self, css_color: &str) {
        self.state.fill_style = css_color.to_owned();
    }

    fn set_stroke_style(&mut self, css_color: &str) {
        self.state.stroke_style = css_color.to_owned();
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn transform(&mut self, transform: Affine) {
        self.state.transform = self.state.transform * transform;
    }

    fn reset_transform(&mut self) {
        self.state.transform = Affine::IDENTITY;
    }

    fn current_transform(&self) -> Affine {
        self.state.transform
    }
}
