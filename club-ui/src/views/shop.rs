use egui::{Color32, RichText, Ui};

use club_core::{tr, Catalog, ClubStore, ItemId, Language, StoreError, Text};

use super::SUCCESS;

/// Result of the last redemption attempt, shown under the shop heading.
#[derive(Debug, Clone, PartialEq)]
pub enum ShopNotice {
    Redeemed(ItemId),
    Failed(StoreError),
}

pub fn render(
    ui: &mut Ui,
    lang: Language,
    store: &mut ClubStore,
    catalog: &mut Catalog,
    notice: &mut Option<ShopNotice>,
    now: u64,
) {
    ui.heading(tr(lang, Text::ShopTitle));

    if !store.is_signed_in() {
        ui.horizontal(|ui| {
            ui.label(tr(lang, Text::SignInToBuy));
            if ui.button(tr(lang, Text::SignIn)).clicked() {
                store.request_sign_in();
            }
        });
    }

    match notice {
        Some(ShopNotice::Redeemed(item)) => {
            ui.colored_label(
                SUCCESS,
                format!("✓ {} {}", tr(lang, Text::PurchaseDone), tr(lang, item.title())),
            );
        }
        Some(ShopNotice::Failed(StoreError::InsufficientPoints { needed, available })) => {
            ui.colored_label(
                Color32::RED,
                format!("✗ {} ({available}/{needed})", tr(lang, Text::NotEnoughPoints)),
            );
        }
        Some(ShopNotice::Failed(err)) => {
            ui.colored_label(Color32::RED, format!("✗ {err}"));
        }
        None => {}
    }
    ui.add_space(10.0);

    let mut clicked = None;
    egui::Grid::new("shop_grid")
        .num_columns(4)
        .spacing([16.0, 10.0])
        .striped(true)
        .show(ui, |ui| {
            for entry in catalog.items() {
                let item = entry.item;
                ui.label(RichText::new(item.icon().glyph()).size(24.0));
                ui.label(tr(lang, item.title()));
                match entry.stock {
                    Some(0) => ui.weak(tr(lang, Text::OutOfStock)),
                    Some(left) => ui.weak(format!("{left} {}", tr(lang, Text::InStock))),
                    None => ui.weak("∞"),
                };

                let affordable = entry.price <= store.points();
                let enabled = store.is_signed_in() && entry.in_stock() && affordable;
                let label = format!("{} ⭐ {}", tr(lang, Text::Buy), entry.price);
                if ui.add_enabled(enabled, egui::Button::new(label)).clicked() {
                    clicked = Some(item);
                }
                ui.end_row();
            }
        });

    if let Some(item) = clicked {
        *notice = Some(match store.purchase(catalog, item, now) {
            Ok(_) => ShopNotice::Redeemed(item),
            Err(err) => ShopNotice::Failed(err),
        });
    }
}
