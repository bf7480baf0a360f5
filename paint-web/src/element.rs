//! The `paint-canvas` and `paint-picture` custom elements.

use std::rc::Rc;

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlCanvasElement, HtmlElement, ShadowRootInit, ShadowRootMode};

use paint::{new_error, Error, ErrorKind, PaintCanvas, PaintConfig, Registry, OBSERVED_ATTRIBUTES};

use crate::{to_js, WebRenderContext, WrapError};

/// Styles applied to the `paint-canvas` host element.
const HOST_STYLE: &str = ":host { display: inline-block; }";

// Custom element classes have to be declared in JS; each instance hands its
// behaviour off to a handle built by the Rust factory.
#[wasm_bindgen(inline_js = r#"
export function define_paint_element(tag, builtin, observed, factory) {
  const Base = builtin ? HTMLCanvasElement : HTMLElement;
  class PaintElement extends Base {
    static get observedAttributes() {
      return observed;
    }
    constructor() {
      super();
      this.handle = factory(this);
    }
    connectedCallback() {
      this.handle.connected();
    }
    attributeChangedCallback(name, _oldValue, newValue) {
      this.handle.attribute_changed(name, String(newValue));
    }
    set picture(value) {
      this.handle.set_picture(value);
    }
  }
  if (!builtin) {
    Object.defineProperty(PaintElement.prototype, "width", {
      get() { return this.handle.width(); },
      set(value) { this.handle.set_width(value); },
    });
    Object.defineProperty(PaintElement.prototype, "height", {
      get() { return this.handle.height(); },
      set(value) { this.handle.set_height(value); },
    });
  }
  customElements.define(tag, PaintElement, builtin ? { extends: "canvas" } : undefined);
}

export function define_code_element(tag, observed, factory) {
  class CodeElement extends HTMLElement {
    static get observedAttributes() {
      return observed;
    }
    constructor() {
      super();
      this.handle = factory(this);
    }
    attributeChangedCallback(name, _oldValue, newValue) {
      this.handle.attribute_changed(name, newValue ?? "");
    }
  }
  customElements.define(tag, CodeElement);
}
"#)]
extern "C" {
    #[wasm_bindgen(catch)]
    fn define_paint_element(
        tag: &str,
        builtin: bool,
        observed: Array,
        factory: &Function,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    pub(crate) fn define_code_element(
        tag: &str,
        observed: Array,
        factory: &Function,
    ) -> Result<(), JsValue>;
}

/// The Rust side of one picture element.
#[wasm_bindgen]
pub struct PaintElement {
    canvas: HtmlCanvasElement,
    inner: PaintCanvas<WebRenderContext>,
}

#[wasm_bindgen]
impl PaintElement {
    pub fn connected(&mut self) {
        self.inner.connected();
    }

    pub fn attribute_changed(&mut self, name: &str, value: &str) -> Result<(), JsValue> {
        self.inner.attribute_changed(name, value).map_err(to_js)
    }

    pub fn set_picture(&mut self, picture: JsValue) -> Result<(), JsValue> {
        self.render(&picture).map_err(|e| {
            log::warn!("failed to draw picture: {}", e);
            to_js(e)
        })
    }

    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn set_width(&mut self, width: u32) {
        self.canvas.set_width(width);
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    pub fn set_height(&mut self, height: u32) {
        self.canvas.set_height(height);
    }
}

impl PaintElement {
    fn new(
        canvas: HtmlCanvasElement,
        registry: Rc<Registry>,
        config: PaintConfig,
    ) -> Result<Self, Error> {
        let ctx = WebRenderContext::from_canvas(&canvas)?;
        Ok(PaintElement {
            canvas,
            inner: PaintCanvas::new(ctx, registry, config),
        })
    }

    /// Reset the canvas and draw `picture` with the registered display function.
    pub fn render(&mut self, picture: &JsValue) -> Result<(), Error> {
        self.inner.render(picture)
    }

    pub fn paint_canvas(&mut self) -> &mut PaintCanvas<WebRenderContext> {
        &mut self.inner
    }
}

/// Build the shadow tree of a `paint-canvas` host and return its canvas.
fn attach_canvas(host: &HtmlElement) -> Result<HtmlCanvasElement, Error> {
    let document = host
        .owner_document()
        .ok_or_else(|| new_error(ErrorKind::NotFound("document".to_owned())))?;
    let shadow = host
        .attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))
        .wrap()?;
    let style = document.create_element("style").wrap()?;
    style.set_text_content(Some(HOST_STYLE));
    let canvas = document
        .create_element("canvas")
        .wrap()?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| new_error(ErrorKind::NotACanvas("canvas".to_owned())))?;
    shadow.append_child(&style).wrap()?;
    shadow.append_child(&canvas).wrap()?;
    Ok(canvas)
}

fn define(
    tag: &str,
    builtin: bool,
    registry: Rc<Registry>,
    config: PaintConfig,
) -> Result<(), Error> {
    let observed: Array = if builtin {
        Array::new()
    } else {
        OBSERVED_ATTRIBUTES.iter().copied().map(JsValue::from_str).collect()
    };
    let factory = Closure::<dyn FnMut(HtmlElement) -> Result<JsValue, JsValue>>::new(
        move |host: HtmlElement| {
            let canvas = if builtin {
                host.dyn_into::<HtmlCanvasElement>().map_err(|_| {
                    to_js(new_error(ErrorKind::NotACanvas("paint-picture".to_owned())))
                })?
            } else {
                attach_canvas(&host).map_err(to_js)?
            };
            let element =
                PaintElement::new(canvas, registry.clone(), config.clone()).map_err(to_js)?;
            Ok(element.into())
        },
    );
    define_paint_element(tag, builtin, observed, factory.as_ref().unchecked_ref()).wrap()?;
    log::debug!("defined <{}>", tag);
    // Instances can be created for the rest of the page's life.
    factory.forget();
    Ok(())
}

/// Register `<paint-canvas>`: a canvas in a shadow root whose `width`,
/// `height` and `style` attributes are forwarded to it.
pub fn define_paint_canvas(registry: Rc<Registry>, config: PaintConfig) -> Result<(), Error> {
    define("paint-canvas", false, registry, config)
}

/// Register `paint-picture`, a customized `<canvas is="paint-picture">`.
pub fn define_paint_picture(registry: Rc<Registry>, config: PaintConfig) -> Result<(), Error> {
    define("paint-picture", true, registry, config)
}

/// Hand `picture` to a picture element, as setting its `picture` property from JS would.
pub fn set_picture(element: &Element, picture: &JsValue) -> Result<(), Error> {
    Reflect::set(element.as_ref(), &JsValue::from_str("picture"), picture).wrap()?;
    Ok(())
}
