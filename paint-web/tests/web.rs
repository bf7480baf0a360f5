#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

use paint::kurbo::{Affine, Point};
use paint::{
    ErrorKind, PaintCanvas, PaintConfig, Painter, Registry, RenderContext, DEFAULT_DISPLAY_ID,
};
use paint_web::{get_rendering_context, query_rendering_context, WebRenderContext};

wasm_bindgen_test_configure!(run_in_browser);

fn add_canvas(id: &str, width: u32, height: u32) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    canvas.set_width(width);
    canvas.set_height(height);
    canvas
        .set_attribute("style", &format!("width: {}px; height: {}px", width, height))
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn missing_canvas_is_not_found() {
    let err = get_rendering_context("no-such-canvas").err().unwrap();
    assert!(matches!(err.kind(), ErrorKind::NotFound(_)));
    let err = query_rendering_context("#no-such-canvas").err().unwrap();
    assert!(matches!(err.kind(), ErrorKind::NotFound(_)));
}

#[wasm_bindgen_test]
fn non_canvas_element_is_rejected() {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    div.set_id("plain-div");
    document.body().unwrap().append_child(&div).unwrap();
    let err = get_rendering_context("plain-div").err().unwrap();
    assert!(matches!(err.kind(), ErrorKind::NotACanvas(_)));
}

#[wasm_bindgen_test]
fn reset_centers_origin_on_real_canvas() {
    add_canvas("centered", 200, 100);
    let ctx = get_rendering_context("centered").unwrap();
    let mut painter = Painter::new(ctx, PaintConfig::default());
    painter.scale(2.0, 2.0);
    painter.reset();
    assert_eq!(
        painter.context().current_transform(),
        Affine::translate((100.0, 50.0))
    );
    painter.translate(5.0, 5.0);
    painter.reset_transform();
    assert_eq!(
        painter.context().current_transform() * Point::ORIGIN,
        Point::new(100.0, 50.0)
    );
    painter.finish().unwrap();
}

#[wasm_bindgen_test]
fn picture_element_reuses_context() {
    add_canvas("picture", 120, 80);
    let registry = Rc::new(Registry::new());
    let calls = Rc::new(Cell::new(0));
    let seen = calls.clone();
    registry.set_display(
        DEFAULT_DISPLAY_ID,
        move |picture: &JsValue, painter: &mut Painter<WebRenderContext>| {
            seen.set(seen.get() + 1);
            let radius = picture.as_f64().unwrap_or(1.0);
            painter.arc(radius, 0.0, std::f64::consts::TAU, true, true);
            Ok(())
        },
    );
    let ctx = query_rendering_context("#picture").unwrap();
    let mut element = PaintCanvas::new(ctx, registry, PaintConfig::default());
    element.render(&JsValue::from_f64(10.0)).unwrap();
    element.render(&JsValue::from_f64(20.0)).unwrap();
    assert_eq!(calls.get(), 2);
}
