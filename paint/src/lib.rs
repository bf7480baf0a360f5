//! Canvas drawing for host-defined pictures.
//!
//! Host code describes what to draw as a picture value of its own type and
//! registers a display function that turns such values into calls on a
//! [`Painter`]. Picture elements ([`PaintCanvas`]) reset their canvas and run
//! that function whenever they are handed a new picture.
//!
//! Drawing goes through the [`RenderContext`] trait, implemented for web
//! canvases by the `paint-web` crate and in memory by [`RecordingContext`].

pub use kurbo;

mod config;
mod element;
mod error;
mod highlight;
mod input;
mod painter;
mod recording;
mod registry;
mod render_context;
mod state;

pub use crate::config::*;
pub use crate::element::*;
pub use crate::error::*;
pub use crate::highlight::*;
pub use crate::input::*;
pub use crate::painter::*;
pub use crate::recording::*;
pub use crate::registry::*;
pub use crate::render_context::*;
pub use crate::state::*;
