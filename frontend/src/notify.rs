//! Transient notifications.
//!
//! Toasts are plain DOM nodes appended to a fixed stack in the top-right
//! corner. Each one removes itself after `AUTO_HIDE_MS`, independently of the
//! others, so concurrent calls simply stack up.

use common::notification::{Severity, AUTO_HIDE_MS};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

const STACK_ID: &str = "toast-stack";

/// Shows `message` with the palette of `severity`.
pub fn show_alert(severity: Severity, message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(stack) = toast_stack(&document) else {
        return;
    };
    let Ok(toast) = document.create_element("div") else {
        return;
    };

    toast.set_id(&format!("toast-{}", uuid::Uuid::new_v4()));
    toast.set_class_name(&format!("toast toast-{}", severity.as_str()));
    toast.set_text_content(Some(message));
    let _ = toast.set_attribute("role", "status");

    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("background", severity.background()).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("box-shadow", "0 3px 5px rgba(0, 0, 0, 0.2)").ok();
    style.set_property("font-family", "Arial, sans-serif").ok();
    style.set_property("min-width", "240px").ok();

    if stack.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(AUTO_HIDE_MS).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

/// Finds or creates the container the toasts stack in.
fn toast_stack(document: &Document) -> Option<HtmlElement> {
    if let Some(existing) = document.get_element_by_id(STACK_ID) {
        return existing.dyn_into::<HtmlElement>().ok();
    }

    let body = document.body()?;
    let stack: HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
    stack.set_id(STACK_ID);
    let style = stack.style();
    style.set_property("position", "fixed").ok();
    style.set_property("top", "20px").ok();
    style.set_property("right", "20px").ok();
    style.set_property("display", "flex").ok();
    style.set_property("flex-direction", "column").ok();
    style.set_property("gap", "8px").ok();
    style.set_property("z-index", "10000").ok();
    body.append_child(&stack).ok()?;
    Some(stack)
}
