use egui::{RichText, Ui};

use club_core::{tr, ClubStore, Language, Text};

pub fn render(ui: &mut Ui, lang: Language, store: &ClubStore) {
    let Some(member) = store.member() else {
        ui.label(tr(lang, Text::SignInRequired));
        return;
    };

    ui.heading(tr(lang, Text::ProfileTitle));
    ui.add_space(8.0);

    egui::Grid::new("profile_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label(RichText::new(member.rank.badge()).size(36.0));
            ui.vertical(|ui| {
                ui.strong(&member.name);
                ui.weak(member.id.to_string());
            });
            ui.end_row();

            ui.label(tr(lang, Text::Rank));
            ui.label(tr(lang, member.rank.label()));
            ui.end_row();

            ui.label(tr(lang, Text::Points));
            ui.label(format!("{} / {}", store.points(), store.lifetime_points()));
            ui.end_row();
        });

    ui.add_space(12.0);
    ui.collapsing(tr(lang, Text::Inventory), |ui| {
        if store.inventory().is_empty() {
            ui.weak(tr(lang, Text::Empty));
        }
        for (item, quantity) in store.inventory() {
            ui.label(format!("{} {} × {}", item.icon().glyph(), tr(lang, item.title()), quantity));
        }
    });

    ui.collapsing(tr(lang, Text::PurchaseHistory), |ui| {
        if store.purchases().is_empty() {
            ui.weak(tr(lang, Text::Empty));
        }
        for purchase in store.purchases().iter().rev() {
            ui.label(format!(
                "{} {} (−{})",
                purchase.item.icon().glyph(),
                tr(lang, purchase.item.title()),
                purchase.price
            ));
        }
    });
}
