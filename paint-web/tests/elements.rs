#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, Event, HtmlCanvasElement, KeyboardEvent, KeyboardEventInit, MouseEvent,
    MouseEventInit,
};

use paint::kurbo::Point;
use paint::{
    HighlightOptions, Highlighter, KeyCode, MouseButtons, PaintConfig, Painter, Registry,
    DEFAULT_DISPLAY_ID,
};
use paint_web::{
    define_highlighted_code, define_paint_canvas, define_paint_picture, get_key_code,
    get_rendering_context, mouse_buttons, mouse_pos, set_picture, setup_input_handler,
    setup_request_animation_frame, HljsHighlighter, WebRenderContext,
};

wasm_bindgen_test_configure!(run_in_browser);

// Custom elements can only be defined once per page.
thread_local! {
    static REGISTRY: Rc<Registry> = {
        let registry = Rc::new(Registry::new());
        define_paint_canvas(registry.clone(), PaintConfig::default()).unwrap();
        define_paint_picture(registry.clone(), PaintConfig::default()).unwrap();
        registry
    };
}

type Calls = Rc<RefCell<Vec<(f64, usize)>>>;

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Register a display function on the elements' registry that records each
/// picture and the address of the painter it was drawn with.
fn counting_display() -> Calls {
    let calls: Calls = Default::default();
    let seen = calls.clone();
    REGISTRY.with(|registry| {
        registry.set_display(
            DEFAULT_DISPLAY_ID,
            move |picture: &JsValue, painter: &mut Painter<WebRenderContext>| {
                let addr = &*painter as *const Painter<WebRenderContext> as usize;
                let radius = picture.as_f64().unwrap_or(0.0);
                seen.borrow_mut().push((radius, addr));
                painter.arc(radius, 0.0, std::f64::consts::TAU, true, false);
                Ok(())
            },
        )
    });
    calls
}

fn shadow_canvas(host: &Element) -> HtmlCanvasElement {
    host.shadow_root()
        .unwrap()
        .query_selector("canvas")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap()
}

#[wasm_bindgen_test]
fn paint_canvas_draws_each_picture_with_one_context() {
    let calls = counting_display();
    let element = document().create_element("paint-canvas").unwrap();
    document().body().unwrap().append_child(&element).unwrap();

    set_picture(&element, &JsValue::from_f64(5.0)).unwrap();
    set_picture(&element, &JsValue::from_f64(9.0)).unwrap();

    let calls = calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, 5.0);
    assert_eq!(calls[1].0, 9.0);
    assert_eq!(calls[0].1, calls[1].1);
}

#[wasm_bindgen_test]
fn paint_canvas_forwards_attributes_to_its_canvas() {
    counting_display();
    let element = document().create_element("paint-canvas").unwrap();
    element.set_attribute("width", "640").unwrap();
    element.set_attribute("height", "480").unwrap();
    element.set_attribute("style", "border: 1px solid").unwrap();

    let canvas = shadow_canvas(&element);
    assert_eq!(canvas.width(), 640);
    assert_eq!(canvas.height(), 480);
    assert_eq!(
        canvas.get_attribute("style").as_deref(),
        Some("border: 1px solid")
    );
}

#[wasm_bindgen_test]
fn paint_canvas_size_properties_reach_its_canvas() {
    counting_display();
    let element = document().create_element("paint-canvas").unwrap();
    Reflect::set(&element, &"width".into(), &JsValue::from_f64(320.0)).unwrap();
    Reflect::set(&element, &"height".into(), &JsValue::from_f64(240.0)).unwrap();

    assert_eq!(Reflect::get(&element, &"width".into()).unwrap().as_f64(), Some(320.0));
    assert_eq!(Reflect::get(&element, &"height".into()).unwrap().as_f64(), Some(240.0));
    let canvas = shadow_canvas(&element);
    assert_eq!(canvas.width(), 320);
    assert_eq!(canvas.height(), 240);
}

#[wasm_bindgen_test]
fn paint_picture_canvas_draws_pictures() {
    let calls = counting_display();
    let element = document()
        .create_element_with_str("canvas", "paint-picture")
        .unwrap();
    document().body().unwrap().append_child(&element).unwrap();

    set_picture(&element, &JsValue::from_f64(3.0)).unwrap();
    set_picture(&element, &JsValue::from_f64(4.0)).unwrap();

    let calls = calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].1, calls[1].1);
}

#[wasm_bindgen_test]
fn highlighted_code_renders_through_hljs() {
    // Stand-in for highlight.js that shows what it was called with.
    let hljs = Object::new();
    let highlight = Function::new_with_args(
        "code, options",
        concat!(
            "return { value: '<em>' + code + '</em>' + ",
            "options.language + ':' + options.ignoreIllegals };",
        ),
    );
    Reflect::set(&hljs, &"highlight".into(), &highlight).unwrap();
    Reflect::set(&js_sys::global(), &"hljs".into(), &hljs).unwrap();

    let html = HljsHighlighter
        .highlight("a < b", &HighlightOptions::default())
        .unwrap();
    assert_eq!(html, "<em>a < b</em>gleam:true");

    define_highlighted_code(HighlightOptions::default()).unwrap();
    let element = document().create_element("highlighted-code").unwrap();
    element.set_attribute("code", "let x = 1").unwrap();
    let pre = element
        .shadow_root()
        .unwrap()
        .query_selector("pre")
        .unwrap()
        .unwrap();
    assert_eq!(pre.inner_html(), "<em>let x = 1</em>gleam:true");

    element.set_attribute("title", "ignored").unwrap();
    assert_eq!(pre.inner_html(), "<em>let x = 1</em>gleam:true");
}

#[wasm_bindgen_test]
fn mouse_position_is_scaled_to_bitmap() {
    let canvas = document()
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id("scaled");
    canvas.set_width(200);
    canvas.set_height(100);
    canvas
        .set_attribute(
            "style",
            "position: fixed; left: 10px; top: 20px; width: 100px; height: 50px",
        )
        .unwrap();
    document().body().unwrap().append_child(&canvas).unwrap();
    let ctx = get_rendering_context("scaled").unwrap();

    let init = MouseEventInit::new();
    init.set_client_x(60);
    init.set_client_y(45);
    init.set_buttons(5);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();

    assert_eq!(mouse_pos(&ctx, &event).unwrap(), Point::new(100.0, 50.0));
    let buttons = mouse_buttons(&event);
    assert!(buttons.contains(MouseButtons::PRIMARY | MouseButtons::AUXILIARY));
    assert!(!buttons.contains(MouseButtons::SECONDARY));
}

#[wasm_bindgen_test]
fn key_code_is_read_from_event() {
    let init = KeyboardEventInit::new();
    init.set_key_code(37);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    assert_eq!(get_key_code(&event), KeyCode::LEFT);
}

#[wasm_bindgen_test]
fn forgotten_handler_keeps_listening() {
    let window = web_sys::window().unwrap();
    let count = Rc::new(Cell::new(0));
    let seen = count.clone();
    setup_input_handler("paint-kept", move |_| seen.set(seen.get() + 1))
        .unwrap()
        .forget();

    window.dispatch_event(&Event::new("paint-kept").unwrap()).unwrap();
    window.dispatch_event(&Event::new("paint-kept").unwrap()).unwrap();
    assert_eq!(count.get(), 2);
}

#[wasm_bindgen_test]
fn dropped_handler_stops_listening() {
    let window = web_sys::window().unwrap();
    let count = Rc::new(Cell::new(0));
    let seen = count.clone();
    let handler = setup_input_handler("paint-dropped", move |_| seen.set(seen.get() + 1)).unwrap();
    assert_eq!(handler.event_name(), "paint-dropped");

    window.dispatch_event(&Event::new("paint-dropped").unwrap()).unwrap();
    drop(handler);
    window.dispatch_event(&Event::new("paint-dropped").unwrap()).unwrap();
    assert_eq!(count.get(), 1);
}

#[wasm_bindgen_test]
async fn animation_frame_runs_callback_once() {
    let promise = Promise::new(&mut |resolve, reject| {
        let requested = setup_request_animation_frame(move |time| {
            let _ = resolve.call1(&JsValue::NULL, &JsValue::from_f64(time));
        });
        if let Err(e) = requested {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str(&e.to_string()));
        }
    });
    let time = JsFuture::from(promise).await.unwrap().as_f64().unwrap();
    assert!(time >= 0.0);
}
