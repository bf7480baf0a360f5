//! The behaviour behind the `paint-canvas` and `paint-picture` elements.

use std::rc::Rc;

use crate::{Error, PaintConfig, Painter, Registry, RenderContext};

/// Attributes a picture element forwards to its canvas.
pub const OBSERVED_ATTRIBUTES: [&str; 3] = ["width", "height", "style"];

/// Lifecycle of a picture element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementState {
    /// Constructed, not yet inserted into a document.
    Unattached,
    /// Inserted into a document.
    Attached,
}

/// Canvas attributes to apply in one go.
///
/// `None` leaves an attribute untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CanvasAttributes {
    pub width: Option<String>,
    pub height: Option<String>,
    pub style: Option<String>,
}

impl CanvasAttributes {
    pub fn new() -> CanvasAttributes {
        CanvasAttributes::default()
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = Some(width.to_string());
    }

    pub fn set_height(&mut self, height: u32) {
        self.height = Some(height.to_string());
    }

    pub fn set_style(&mut self, style: impl Into<String>) {
        self.style = Some(style.into());
    }

    fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("width", self.width.as_deref()),
            ("height", self.height.as_deref()),
            ("style", self.style.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| (name, value)))
    }
}

/// A canvas that draws host-defined pictures.
///
/// The context is created once with the element and reused for every
/// picture. Pictures are drawn by the display function registered in the
/// element's [`Registry`] under [`PaintConfig::display_id`].
pub struct PaintCanvas<C> {
    painter: Painter<C>,
    registry: Rc<Registry>,
    state: ElementState,
}

impl<C: RenderContext + 'static> PaintCanvas<C> {
    pub fn new(ctx: C, registry: Rc<Registry>, config: PaintConfig) -> PaintCanvas<C> {
        PaintCanvas {
            painter: Painter::new(ctx, config),
            registry,
            state: ElementState::Unattached,
        }
    }

    pub fn state(&self) -> ElementState {
        self.state
    }

    /// The element was inserted into a document.
    pub fn connected(&mut self) {
        if self.state == ElementState::Unattached {
            log::debug!("picture element attached");
        }
        self.state = ElementState::Attached;
    }

    pub fn painter(&self) -> &Painter<C> {
        &self.painter
    }

    pub fn painter_mut(&mut self) -> &mut Painter<C> {
        &mut self.painter
    }

    pub fn registry(&self) -> &Rc<Registry> {
        &self.registry
    }

    /// Reset the canvas and draw `picture` on it.
    ///
    /// Fails with [`ErrorKind::Unset`](crate::ErrorKind::Unset) if no display
    /// function is registered, leaving the canvas reset.
    pub fn render<P: 'static>(&mut self, picture: &P) -> Result<(), Error> {
        self.painter.reset();
        let display = self
            .registry
            .display::<P, C>(&self.painter.config().display_id)?;
        display.call(picture, &mut self.painter)?;
        self.painter.finish()
    }

    /// An observed attribute changed; forward it to the canvas.
    ///
    /// Attributes other than [`OBSERVED_ATTRIBUTES`] are ignored.
    pub fn attribute_changed(&mut self, name: &str, value: &str) -> Result<(), Error> {
        if !OBSERVED_ATTRIBUTES.contains(&name) {
            log::debug!("ignoring unobserved attribute {:?}", name);
            return Ok(());
        }
        self.painter.context_mut().set_canvas_attribute(name, value)
    }

    /// Forward every attribute set in `attributes`.
    pub fn update_attributes(&mut self, attributes: &CanvasAttributes) -> Result<(), Error> {
        for (name, value) in attributes.iter() {
            self.attribute_changed(name, value)?;
        }
        Ok(())
    }
}
