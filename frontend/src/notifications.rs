//! User feedback through the browser: toast notifications and confirm prompts.
//!
//! Every outcome the user needs to see (saved, deleted, failed) goes through
//! [`show_toast`]. The only blocking dialog is [`confirm`], used before deletes.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// How long a toast stays on screen, in milliseconds.
const TOAST_MILLIS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

impl ToastKind {
    fn background(self) -> &'static str {
        match self {
            ToastKind::Info => "rgba(0, 0, 0, 0.8)",
            ToastKind::Error => "rgba(183, 28, 28, 0.9)",
        }
    }
}

/// Displays a temporary notification at the bottom of the screen.
///
/// The message is inserted as text, never as markup, since it can contain
/// values typed by the user or returned by the server.
pub fn show_toast(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
        toast.set_text_content(Some(message));
        let html_toast: HtmlElement = toast.unchecked_into();
        let style = html_toast.style();
        style.set_property("position", "fixed").ok();
        style.set_property("bottom", "20px").ok();
        style.set_property("left", "50%").ok();
        style.set_property("transform", "translateX(-50%)").ok();
        style.set_property("background", kind.background()).ok();
        style.set_property("color", "#fff").ok();
        style.set_property("padding", "10px 20px").ok();
        style.set_property("border-radius", "4px").ok();
        style.set_property("z-index", "10000").ok();
        style.set_property("font-family", "Arial, sans-serif").ok();

        if body.append_child(&html_toast).is_ok() {
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
                if let Some(parent) = html_toast.parent_node() {
                    parent.remove_child(&html_toast).ok();
                }
            });
        }
    }
}

/// Asks the user a yes/no question. Anything but an explicit "yes" is a no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
