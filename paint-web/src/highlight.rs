//! The `highlighted-code` element, backed by highlight.js.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ShadowRootInit, ShadowRootMode};

use paint::{new_error, Error, ErrorKind, HighlightOptions, HighlightedCode, Highlighter};

use crate::element::define_code_element;
use crate::{to_js, WrapError};

/// The stylesheet placed in each `highlighted-code` shadow root.
pub const CODE_STYLE: &str = r#"
pre {
  font-family: "JetBrains Mono", monospace;
  font-optical-sizing: auto;
  font-weight: normal;
  font-style: normal;
  box-sizing: border-box;
  margin: 0;
}
.hljs { color: #00f; background: #fff; }
.hljs-comment { color: green; }
.hljs-tag { color: #444a; }
.hljs-tag .hljs-attr, .hljs-tag .hljs-name { color: #444; }
.hljs-attribute, .hljs-doctag, .hljs-function, .hljs-keyword, .hljs-name,
.hljs-punctuation, .hljs-selector-tag, .hljs-literal { color: red; }
.hljs-params, .hljs-type, .hljs-section, .hljs-title, .hljs-addition,
.hljs-built_in, .hljs-bullet, .hljs-code { color: #00f; }
.hljs-deletion, .hljs-number, .hljs-quote, .hljs-selector-class, .hljs-selector-id,
.hljs-string, .hljs-symbol, .hljs-template-tag { color: #000; }
.hljs-link, .hljs-operator, .hljs-regexp, .hljs-selector-attr, .hljs-selector-pseudo,
.hljs-template-variable, .hljs-variable { color: #ab5656; }
.hljs-meta, .hljs-meta .hljs-keyword, .hljs-meta .hljs-string { color: #963200; }
.hljs-emphasis { font-style: italic; }
.hljs-strong { font-weight: 700; }
"#;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = hljs, js_name = highlight)]
    fn hljs_highlight(code: &str, options: &JsValue) -> Result<JsValue, JsValue>;
}

/// Highlighting through the page's global `hljs` object.
///
/// highlight.js must be loaded, with the configured language registered,
/// before any code is highlighted.
#[derive(Clone, Copy, Debug, Default)]
pub struct HljsHighlighter;

impl Highlighter for HljsHighlighter {
    fn highlight(&self, code: &str, options: &HighlightOptions) -> Result<String, Error> {
        let js_options = Object::new();
        Reflect::set(
            &js_options,
            &JsValue::from_str("language"),
            &JsValue::from_str(&options.language),
        )
        .wrap()?;
        Reflect::set(
            &js_options,
            &JsValue::from_str("ignoreIllegals"),
            &JsValue::from_bool(options.ignore_illegals),
        )
        .wrap()?;
        let result = hljs_highlight(code, &js_options).wrap()?;
        Reflect::get(&result, &JsValue::from_str("value"))
            .wrap()?
            .as_string()
            .ok_or_else(|| new_error(ErrorKind::InvalidInput))
    }
}

/// The Rust side of one `highlighted-code` element.
#[wasm_bindgen]
pub struct CodeElement {
    pre: Element,
    inner: HighlightedCode<HljsHighlighter>,
}

#[wasm_bindgen]
impl CodeElement {
    pub fn attribute_changed(&mut self, name: &str, value: &str) -> Result<(), JsValue> {
        match self.inner.attribute_changed(name, value) {
            Ok(Some(html)) => {
                self.pre.set_inner_html(html);
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(e) => {
                log::warn!("failed to highlight code: {}", e);
                Err(to_js(e))
            }
        }
    }
}

fn attach_pre(host: &HtmlElement) -> Result<Element, Error> {
    let document = host
        .owner_document()
        .ok_or_else(|| new_error(ErrorKind::NotFound("document".to_owned())))?;
    let shadow = host
        .attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))
        .wrap()?;
    let style = document.create_element("style").wrap()?;
    style.set_text_content(Some(CODE_STYLE));
    let pre = document.create_element("pre").wrap()?;
    shadow.append_child(&style).wrap()?;
    shadow.append_child(&pre).wrap()?;
    Ok(pre)
}

/// Register `<highlighted-code>`, which re-highlights its `code` attribute
/// whenever it changes.
pub fn define_highlighted_code(options: HighlightOptions) -> Result<(), Error> {
    let observed: Array = std::iter::once(JsValue::from_str("code")).collect();
    let language = options.language.clone();
    let factory = Closure::<dyn FnMut(HtmlElement) -> Result<JsValue, JsValue>>::new(
        move |host: HtmlElement| {
            let pre = attach_pre(&host).map_err(to_js)?;
            let element = CodeElement {
                pre,
                inner: HighlightedCode::new(HljsHighlighter, options.clone()),
            };
            Ok(element.into())
        },
    );
    define_code_element("highlighted-code", observed, factory.as_ref().unchecked_ref()).wrap()?;
    log::debug!("defined <highlighted-code> for {}", language);
    factory.forget();
    Ok(())
}
