//! The Web Canvas backend for paint, and the custom elements built on it.
//!
//! [`WebRenderContext`] forwards every [`RenderContext`] call to a
//! `CanvasRenderingContext2D`. The [`define_paint_canvas`],
//! [`define_paint_picture`] and [`define_highlighted_code`] functions register
//! the `<paint-canvas>`, `<canvas is="paint-picture">` and
//! `<highlighted-code>` elements.

mod element;
mod highlight;
mod input;

use std::fmt;

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement};

use paint::kurbo::{Affine, Point, Rect, Size};
use paint::{new_error, Error, ErrorKind, RenderContext};

pub use element::{define_paint_canvas, define_paint_picture, set_picture, PaintElement};
pub use highlight::{define_highlighted_code, CodeElement, HljsHighlighter, CODE_STYLE};
pub use input::{
    get_key_code, mouse_buttons, mouse_pos, setup_input_handler, setup_request_animation_frame,
    InputHandler,
};

/// A [`RenderContext`] drawing on an HTML canvas.
pub struct WebRenderContext {
    ctx: CanvasRenderingContext2d,
    err: Result<(), Error>,
}

impl WebRenderContext {
    pub fn new(ctx: CanvasRenderingContext2d) -> WebRenderContext {
        WebRenderContext { ctx, err: Ok(()) }
    }

    /// The 2D context of `canvas`.
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<WebRenderContext, Error> {
        let ctx = canvas
            .get_context("2d")
            .wrap()?
            .ok_or_else(|| new_error(ErrorKind::NotACanvas(canvas.id())))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| new_error(ErrorKind::NotACanvas(canvas.id())))?;
        Ok(WebRenderContext::new(ctx))
    }

    fn from_element(element: Element, name: &str) -> Result<WebRenderContext, Error> {
        let canvas = element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| new_error(ErrorKind::NotACanvas(name.to_owned())))?;
        WebRenderContext::from_canvas(&canvas)
    }

    /// The underlying canvas context.
    pub fn raw(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }

    fn latch<T>(&mut self, result: Result<T, JsValue>) {
        if let Err(e) = result.wrap() {
            if self.err.is_ok() {
                self.err = Err(e);
            }
        }
    }
}

/// The 2D context of the canvas with the given id.
pub fn get_rendering_context(id: &str) -> Result<WebRenderContext, Error> {
    let element = document()?
        .get_element_by_id(id)
        .ok_or_else(|| new_error(ErrorKind::NotFound(id.to_owned())))?;
    WebRenderContext::from_element(element, id)
}

/// The 2D context of the first canvas matching a CSS selector.
pub fn query_rendering_context(selector: &str) -> Result<WebRenderContext, Error> {
    let element = document()?
        .query_selector(selector)
        .wrap()?
        .ok_or_else(|| new_error(ErrorKind::NotFound(selector.to_owned())))?;
    WebRenderContext::from_element(element, selector)
}

pub(crate) fn document() -> Result<Document, Error> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| new_error(ErrorKind::NotFound("document".to_owned())))
}

#[derive(Debug)]
struct WrappedJs(JsValue);

pub(crate) trait WrapError<T> {
    fn wrap(self) -> Result<T, Error>;
}

impl std::error::Error for WrappedJs {}

impl fmt::Display for WrappedJs {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0.dyn_ref::<js_sys::Error>() {
            Some(e) => write!(f, "Canvas error: {}", String::from(e.message())),
            None => write!(f, "Canvas error: {:?}", self.0),
        }
    }
}

impl<T> WrapError<T> for Result<T, JsValue> {
    fn wrap(self) -> Result<T, Error> {
        self.map_err(|e| {
            let e: Box<dyn std::error::Error> = Box::new(WrappedJs(e));
            e.into()
        })
    }
}

/// Convert an error into something that can be thrown back into JS.
pub(crate) fn to_js(err: Error) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

impl RenderContext for WebRenderContext {
    fn status(&mut self) -> Result<(), Error> {
        std::mem::replace(&mut self.err, Ok(()))
    }

    fn reset(&mut self) {
        let reset = Reflect::get(self.ctx.as_ref(), &JsValue::from_str("reset"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok());
        match reset {
            Some(reset) => {
                let result = reset.call0(self.ctx.as_ref());
                self.latch(result);
            }
            // Older engines lack `reset`; resizing the bitmap has the same effect.
            None => {
                if let Some(canvas) = self.ctx.canvas() {
                    canvas.set_width(canvas.width());
                }
            }
        }
    }

    fn client_size(&self) -> Size {
        match self.ctx.canvas() {
            Some(canvas) => Size::new(canvas.client_width() as f64, canvas.client_height() as f64),
            /* Canvas might be null for contexts not backed by an element. */
            None => Size::ZERO,
        }
    }

    fn set_canvas_attribute(&mut self, name: &str, value: &str) -> Result<(), Error> {
        let canvas = self
            .ctx
            .canvas()
            .ok_or_else(|| new_error(ErrorKind::NotFound("canvas".to_owned())))?;
        canvas.set_attribute(name, value).wrap()
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Point) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        self.ctx.line_to(p.x, p.y);
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        let result = self
            .ctx
            .arc(center.x, center.y, radius, start_angle, end_angle);
        self.latch(result);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ctx
            .fill_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn fill_text(&mut self, text: &str, pos: Point) {
        let result = self.ctx.fill_text(text, pos.x, pos.y);
        self.latch(result);
    }

    fn save(&mut self) -> Result<(), Error> {
        self.ctx.save();
        Ok(())
    }

    fn restore(&mut self) -> Result<(), Error> {
        self.ctx.restore();
        Ok(())
    }

    fn set_fill_style(&mut self, css_color: &str) {
        self.ctx.set_fill_style_str(css_color);
    }

    fn set_stroke_style(&mut self, css_color: &str) {
        self.ctx.set_stroke_style_str(css_color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn transform(&mut self, transform: Affine) {
        let a = transform.as_coeffs();
        let result = self.ctx.transform(a[0], a[1], a[2], a[3], a[4], a[5]);
        self.latch(result);
    }

    fn reset_transform(&mut self) {
        let result = self.ctx.reset_transform();
        self.latch(result);
    }

    fn current_transform(&self) -> Affine {
        match self.ctx.get_transform() {
            Ok(m) => Affine::new([m.a(), m.b(), m.c(), m.d(), m.e(), m.f()]),
            Err(e) => {
                log::warn!("could not read canvas transform: {:?}", e);
                Affine::IDENTITY
            }
        }
    }
}
