use egui::{RichText, Ui};

use club_core::{promo_cards, tr, Countdown, Language, Text};

use super::{accent, BRAND_RED};

pub fn render(ui: &mut Ui, lang: Language, promo: &Countdown, now: u64) {
    ui.add_space(8.0);
    ui.label(RichText::new(tr(lang, Text::HomeHeadline)).size(28.0).color(BRAND_RED));
    ui.label(tr(lang, Text::HomeTagline));
    ui.add_space(16.0);

    ui.horizontal_wrapped(|ui| {
        for card in promo_cards() {
            egui::Frame::group(ui.style())
                .stroke(egui::Stroke::new(2.0, accent(card.kind.accent())))
                .show(ui, |ui| {
                    ui.set_width(230.0);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(card.kind.icon()).size(30.0));
                        ui.strong(tr(lang, card.title));
                        ui.label(tr(lang, card.body));

                        if card.timed {
                            ui.add_space(4.0);
                            if promo.is_expired(now) {
                                ui.weak(tr(lang, Text::PromoExpired));
                            } else {
                                ui.label(format!(
                                    "⏱ {} {}",
                                    tr(lang, Text::PromoEndsIn),
                                    promo.remaining(now)
                                ));
                            }
                        }
                    });
                });
        }
    });
}
