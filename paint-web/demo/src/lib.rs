//! Demo of paint's custom elements in the browser.
//!
//! Expects a page with `<paint-canvas id="spinner">`, a
//! `<canvas is="paint-picture" id="picture">` and a `<highlighted-code>`
//! element, with highlight.js loaded as the global `hljs`.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent};

use paint::kurbo::Point;
use paint::{Error, HighlightOptions, PaintConfig, Painter, Registry, DEFAULT_DISPLAY_ID};
use paint_web::{
    define_highlighted_code, define_paint_canvas, define_paint_picture, get_key_code,
    get_rendering_context, mouse_buttons, mouse_pos, set_picture, setup_input_handler,
    setup_request_animation_frame, WebRenderContext,
};

/// Draw a picture: numbers spin a triangle, strings are written out.
fn display(picture: &JsValue, painter: &mut Painter<WebRenderContext>) -> Result<(), Error> {
    painter.set_fill_colour("#ffaff3");
    painter.set_stroke_color("#2f2f2f");
    painter.set_line_width(3.0);
    if let Some(text) = picture.as_string() {
        painter.text(&text, "20px monospace");
        return Ok(());
    }
    let angle = picture.as_f64().unwrap_or(0.0);
    painter.with_save(|p| {
        p.rotate(angle);
        let points: Vec<Point> = (0..3)
            .map(|i| {
                let theta = i as f64 * TAU / 3.0 - FRAC_PI_2;
                Point::new(40.0 * theta.cos(), 40.0 * theta.sin())
            })
            .collect();
        p.polygon(&points, true, true, true);
        Ok(())
    })?;
    painter.arc(6.0, 0.0, TAU, false, true);
    Ok(())
}

fn animate(element: Element, time: f64) {
    if let Err(e) = set_picture(&element, &JsValue::from_f64(time / 1000.0)) {
        log::error!("stopping animation: {}", e);
        return;
    }
    if let Err(e) = setup_request_animation_frame(move |time| animate(element, time)) {
        log::error!("stopping animation: {}", e);
    }
}

fn setup() -> Result<(), Error> {
    let registry = Rc::new(Registry::new());
    registry.set_display(DEFAULT_DISPLAY_ID, display);

    define_paint_canvas(registry.clone(), PaintConfig::default())?;
    define_paint_picture(registry, PaintConfig::default())?;
    define_highlighted_code(HighlightOptions::default())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| paint::new_error(paint::ErrorKind::NotFound("document".into())))?;
    if let Some(picture) = document.get_element_by_id("picture") {
        set_picture(&picture, &JsValue::from_str("hello"))?;
    }
    if let Some(spinner) = document.get_element_by_id("spinner") {
        setup_request_animation_frame(move |time| animate(spinner, time))?;
    }

    setup_input_handler("keydown", |event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            log::info!("key {:?}", get_key_code(event));
        }
    })?
    .forget();

    let scratch = get_rendering_context("scratch")?;
    setup_input_handler("mousemove", move |event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            match mouse_pos(&scratch, event) {
                Ok(pos) => log::debug!("mouse at {:?} buttons {:?}", pos, mouse_buttons(event)),
                Err(e) => log::warn!("{}", e),
            }
        }
    })?
    .forget();
    Ok(())
}

#[wasm_bindgen]
pub fn run() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("could not initialize logger: {}", e).into());
    }
    setup().map_err(|e| JsValue::from_str(&e.to_string()))
}
