//! Platform glue shared by the browser and desktop builds: the portal clock,
//! panic reporting, and browser-only startup helpers.

#[cfg(target_arch = "wasm32")]
mod browser {
    use club_core::Language;

    pub fn install_panic_hook() {
        console_error_panic_hook::set_once();
    }

    /// Wall clock in milliseconds, the unit every club-core timer uses.
    pub fn now_ms() -> u64 {
        js_sys::Date::now() as u64
    }

    /// Russian when the browser asks for it, English otherwise.
    pub fn preferred_language() -> Language {
        let tag = web_sys::window()
            .and_then(|w| w.navigator().language())
            .unwrap_or_default();
        if tag.to_ascii_lowercase().starts_with("ru") {
            Language::Ru
        } else {
            Language::En
        }
    }

    pub fn run_detached<F>(future: F)
    where
        F: std::future::Future<Output = ()> + 'static,
    {
        wasm_bindgen_futures::spawn_local(future);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod desktop {
    pub fn install_panic_hook() {}

    /// Wall clock in milliseconds, the unit every club-core timer uses.
    pub fn now_ms() -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::*;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::*;
