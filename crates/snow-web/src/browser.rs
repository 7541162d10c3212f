//! Thin wrappers over the browser APIs the components touch directly.
//! Real implementations exist only with `hydrate`; the server build gets
//! stand-ins that are never reached from rendered event handlers.

use std::future::Future;

/// Somewhere text can be copied to.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), String>>;
}

/// The page's `navigator.clipboard`.
pub struct SystemClipboard;

#[cfg(feature = "hydrate")]
mod client {
    use super::{Clipboard, SystemClipboard};
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

    fn js_error(value: JsValue) -> String {
        value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .unwrap_or_else(|| format!("{:?}", value))
    }

    fn document() -> Result<web_sys::Document, String> {
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "no document".to_string())
    }

    /// Blocking user-facing message.
    pub fn alert(message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    /// Diagnostic channel: the browser console.
    pub fn console_error(message: &str) {
        web_sys::console::error_1(&message.into());
    }

    pub fn textarea_value(id: &str) -> Option<String> {
        let element = document().ok()?.get_element_by_id(id)?;
        let textarea = element.dyn_into::<HtmlTextAreaElement>().ok()?;
        Some(textarea.value())
    }

    fn form_by_id(form_id: &str) -> Result<HtmlFormElement, String> {
        document()?
            .get_element_by_id(form_id)
            .ok_or_else(|| format!("missing #{}", form_id))?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| format!("#{} is not a form", form_id))
    }

    fn named_inputs(form: &HtmlFormElement, name: &str) -> Vec<HtmlInputElement> {
        let selector = format!("input[name=\"{}\"]", name);
        let Ok(nodes) = form.query_selector_all(&selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
            .collect()
    }

    /// Current values of the form's `input[name=<name>]` fields, in document order.
    pub fn form_input_values(form: &HtmlFormElement, name: &str) -> Vec<String> {
        named_inputs(form, name).iter().map(HtmlInputElement::value).collect()
    }

    /// [`form_input_values`] for the form with id `form_id`.
    pub fn input_values(form_id: &str, name: &str) -> Vec<String> {
        form_by_id(form_id)
            .map(|form| form_input_values(&form, name))
            .unwrap_or_default()
    }

    pub fn clear_inputs(form_id: &str, name: &str) {
        if let Ok(form) = form_by_id(form_id) {
            for input in named_inputs(&form, name) {
                input.set_value("");
            }
        }
    }

    /// Drop every `input[name=<name>]` in the form and append a single hidden
    /// input carrying `value`.
    pub fn replace_hidden_field(form: &HtmlFormElement, name: &str, value: &str) -> Result<(), String> {
        for old in named_inputs(form, name) {
            old.remove();
        }

        let input = form
            .owner_document()
            .ok_or_else(|| "form has no owner document".to_string())?
            .create_element("input")
            .map_err(js_error)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| "created element is not an input".to_string())?;
        input.set_type("hidden");
        input.set_name(name);
        input.set_value(value);

        form.append_child(&input).map_err(js_error)?;
        Ok(())
    }

    /// Set the hidden field, force POST, and submit the form natively (full
    /// page navigation).
    pub fn submit_with_hidden_field(form_id: &str, name: &str, value: &str) -> Result<(), String> {
        let form = form_by_id(form_id)?;
        replace_hidden_field(&form, name, value)?;
        form.set_method("POST");
        form.submit().map_err(js_error)
    }

    pub async fn sleep_ms(ms: u32) {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }

    impl Clipboard for SystemClipboard {
        async fn write_text(&self, text: &str) -> Result<(), String> {
            let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
            let promise = window.navigator().clipboard().write_text(text);
            wasm_bindgen_futures::JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(js_error)
        }
    }
}

#[cfg(feature = "hydrate")]
pub use client::*;

#[cfg(not(feature = "hydrate"))]
mod server {
    use super::{Clipboard, SystemClipboard};

    pub fn alert(message: &str) {
        eprintln!("[alert] {}", message);
    }

    pub fn console_error(message: &str) {
        eprintln!("{}", message);
    }

    pub fn textarea_value(_id: &str) -> Option<String> {
        None
    }

    pub fn input_values(_form_id: &str, _name: &str) -> Vec<String> {
        Vec::new()
    }

    pub fn clear_inputs(_form_id: &str, _name: &str) {}

    pub fn submit_with_hidden_field(_form_id: &str, _name: &str, _value: &str) -> Result<(), String> {
        Err("form submission needs a browser".to_string())
    }

    pub async fn sleep_ms(_ms: u32) {}

    impl Clipboard for SystemClipboard {
        async fn write_text(&self, _text: &str) -> Result<(), String> {
            Err("clipboard needs a browser".to_string())
        }
    }
}

#[cfg(not(feature = "hydrate"))]
pub use server::*;
