#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod views;
pub mod wasm_utils;

pub use app::ClubApp;

/// Browser entry point. The host page passes the id of its canvas and may
/// show a `loading_text` element until the portal is up.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        .ok_or_else(|| JsValue::from_str(&format!("no canvas #{canvas_id}")))?;

    let mut config = club_core::ClubConfig::default();
    config.ui.language = wasm_utils::preferred_language();
    log::info!("Portal language: {}", config.ui.language.code());

    wasm_utils::run_detached(async move {
        let started = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| {
                    cc.egui_ctx.set_visuals(egui::Visuals::dark());
                    Ok(Box::new(ClubApp::new(cc, config)))
                }),
            )
            .await;

        let banner = document.get_element_by_id("loading_text");
        match (started, banner) {
            (Ok(()), Some(banner)) => banner.remove(),
            (Ok(()), None) => {}
            (Err(e), banner) => {
                log::error!("Pizza Club failed to start: {e:?}");
                if let Some(banner) = banner {
                    banner.set_inner_html("<p>🍕 The oven is cold. Check the console.</p>");
                }
            }
        }
    });

    Ok(())
}
