//! Forwarders for DOM input events and animation frames.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, KeyboardEvent, MouseEvent};

use paint::kurbo::{Point, Rect, Size};
use paint::{canvas_position, new_error, Error, ErrorKind, KeyCode, MouseButtons};

use crate::{WebRenderContext, WrapError};

fn window() -> Result<web_sys::Window, Error> {
    web_sys::window().ok_or_else(|| new_error(ErrorKind::NotFound("window".to_owned())))
}

/// A listener registered with [`setup_input_handler`].
///
/// The listener is removed when this is dropped, unless it was kept with
/// [`forget`](InputHandler::forget).
#[must_use = "the listener is removed when the handler is dropped"]
pub struct InputHandler {
    target: EventTarget,
    event_name: String,
    closure: Option<Closure<dyn FnMut(Event)>>,
}

impl InputHandler {
    /// Keep listening for the rest of the page's life.
    pub fn forget(mut self) {
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }
}

impl Drop for InputHandler {
    fn drop(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self.target.remove_event_listener_with_callback(
                &self.event_name,
                closure.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Call `callback` with every `event_name` event dispatched to the window.
pub fn setup_input_handler(
    event_name: &str,
    callback: impl FnMut(Event) + 'static,
) -> Result<InputHandler, Error> {
    let target: EventTarget = window()?.into();
    let closure = Closure::<dyn FnMut(Event)>::new(callback);
    target
        .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())
        .wrap()?;
    Ok(InputHandler {
        target,
        event_name: event_name.to_owned(),
        closure: Some(closure),
    })
}

pub fn get_key_code(event: &KeyboardEvent) -> KeyCode {
    KeyCode(event.key_code())
}

/// The event position in canvas pixels.
pub fn mouse_pos(ctx: &WebRenderContext, event: &MouseEvent) -> Result<Point, Error> {
    let canvas = ctx
        .raw()
        .canvas()
        .ok_or_else(|| new_error(ErrorKind::NotFound("canvas".to_owned())))?;
    let rect = canvas.get_bounding_client_rect();
    let bounds = Rect::new(
        rect.left(),
        rect.top(),
        rect.left() + rect.width(),
        rect.top() + rect.height(),
    );
    let bitmap = Size::new(canvas.width() as f64, canvas.height() as f64);
    let client = Point::new(event.client_x() as f64, event.client_y() as f64);
    Ok(canvas_position(client, bounds, bitmap))
}

pub fn mouse_buttons(event: &MouseEvent) -> MouseButtons {
    MouseButtons::from_bits(event.buttons())
}

/// Run `callback` once, before the next repaint, with the frame timestamp in
/// milliseconds. Request again from the callback to keep animating.
pub fn setup_request_animation_frame(callback: impl FnOnce(f64) + 'static) -> Result<i32, Error> {
    let callback = Closure::once_into_js(callback);
    window()?
        .request_animation_frame(callback.unchecked_ref())
        .wrap()
}
