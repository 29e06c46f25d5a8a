use tracing::warn;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

use common::router::fragment_path;

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

// replace a /#/pricing style location with /pricing, returning the adopted path
pub fn adopt_fragment_route() -> Option<String> {
    let window = web_sys::window()?;
    let hash = window.location().hash().ok()?;
    let path = fragment_path(&hash)?.to_owned();

    let history = window.history().ok()?;
    if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(&path)) {
        warn!("failed to rewrite hash link {hash}: {err:?}");
        return None;
    }

    Some(path)
}

// ScrollListener
//
// forwards every window scroll event's vertical offset to a callback for as long as
// the listener is alive; dropping it unregisters the callback
pub struct ScrollListener {
    window: web_sys::Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn register(mut on_scroll: impl FnMut(f64) + 'static) -> Option<Self> {
        let window = web_sys::window()?;

        let reader = window.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            on_scroll(reader.scroll_y().unwrap_or(0.0));
        });

        if let Err(err) =
            window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        {
            warn!("failed to register scroll listener: {err:?}");
            return None;
        }

        Some(ScrollListener { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}
