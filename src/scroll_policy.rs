//! Viewport scroll policy: the one cross-cutting side effect of the unlock
//! gate, wrapped in explicit entry points instead of being mutated inline.
//! The home page holds one instance and calls `lock()`/`unlock()` as the
//! gate state changes; unmount restores scrolling unconditionally.

use web_sys::HtmlElement;

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ViewportScrollPolicy;

impl ViewportScrollPolicy {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn lock(&self) {
        self.set_overflow("hidden");
    }

    pub(crate) fn unlock(&self) {
        self.set_overflow("auto");
    }

    fn set_overflow(&self, value: &str) {
        let Some(body) = document_body() else {
            return;
        };
        if body.style().set_property("overflow", value).is_err() {
            gloo::console::warn!("scroll policy: overflow update failed");
        }
    }
}

fn document_body() -> Option<HtmlElement> {
    web_sys::window()?.document()?.body()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::ViewportScrollPolicy;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn body_overflow() -> String {
        super::document_body()
            .map(|body| {
                body.style()
                    .get_property_value("overflow")
                    .unwrap_or_default()
            })
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn lock_and_unlock_toggle_body_overflow() {
        let policy = ViewportScrollPolicy::new();
        policy.lock();
        assert_eq!(body_overflow(), "hidden");
        policy.unlock();
        assert_eq!(body_overflow(), "auto");
        // A second unlock is a plain overwrite, not an error.
        policy.unlock();
        assert_eq!(body_overflow(), "auto");
    }
}
