// Pure render functions. Each reads state, draws, and mutates only through
// the store/wizard/game APIs.

pub mod games;
pub mod home;
pub mod profile;
pub mod shop;
pub mod wizard;

use egui::Color32;

pub(crate) fn accent(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

pub(crate) const BRAND_RED: Color32 = Color32::from_rgb(230, 57, 70);
pub(crate) const SUCCESS: Color32 = Color32::from_rgb(0, 200, 120);
