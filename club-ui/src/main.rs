// Desktop entry point for the pizza club portal
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> anyhow::Result<club_core::ClubConfig> {
    use anyhow::Context;

    match std::env::var_os("CLUB_CONFIG") {
        Some(path) => {
            let path = std::path::PathBuf::from(path);
            club_core::ClubConfig::load(&path)
                .with_context(|| format!("loading CLUB_CONFIG={}", path.display()))
        }
        None => Ok(club_core::ClubConfig::default()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = load_config()?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 520.0])
            .with_title("Pizza Club"),
        ..Default::default()
    };

    eframe::run_native(
        "Pizza Club",
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(club_ui::ClubApp::new(cc, config)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe failed: {e}"))
}

#[cfg(target_arch = "wasm32")]
fn main() {}
