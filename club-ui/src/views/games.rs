use std::f32::consts::TAU;

use egui::{Align2, Color32, FontId, Pos2, RichText, Sense, Stroke, Ui, Vec2};

use club_core::games::{CardState, FlipOutcome, FortuneWheel, MemoryGame, WheelSegment, SEGMENTS};
use club_core::{tr, ClubStore, Language, PointsReason, RewardsConfig, Text};

use super::{BRAND_RED, SUCCESS};

const MEMORY_PAIRS: usize = 6;

/// Owns both mini-games and credits their rewards to the store.
pub struct GamesPanel {
    wheel: FortuneWheel,
    memory: MemoryGame,
    memory_base_reward: u32,
    last_prize: Option<WheelSegment>,
    last_memory_reward: Option<u32>,
}

impl GamesPanel {
    pub fn new(rewards: &RewardsConfig) -> Self {
        Self {
            wheel: FortuneWheel::new(rewards),
            memory: MemoryGame::new(MEMORY_PAIRS, rewards.memory_mismatch_ms),
            memory_base_reward: rewards.memory_base_reward,
            last_prize: None,
            last_memory_reward: None,
        }
    }

    pub fn reset(&mut self) {
        self.memory.reset();
        self.last_prize = None;
        self.last_memory_reward = None;
    }

    pub fn tick(&mut self, now: u64, store: &mut ClubStore) {
        if let Some(prize) = self.wheel.tick(now) {
            self.last_prize = Some(prize);
            if let Err(e) = store.award_points(prize.points, PointsReason::WheelPrize) {
                log::warn!("Wheel prize not credited: {}", e);
            }
        }
        self.memory.tick(now);
    }

    pub fn render(&mut self, ui: &mut Ui, lang: Language, store: &mut ClubStore, now: u64) {
        if !store.is_signed_in() {
            ui.label(tr(lang, Text::SignInRequired));
            return;
        }

        ui.heading(tr(lang, Text::GamesTitle));
        ui.add_space(8.0);

        ui.columns(2, |columns| {
            self.render_wheel(&mut columns[0], lang, now);
            self.render_memory(&mut columns[1], lang, store, now);
        });
    }

    fn render_wheel(&mut self, ui: &mut Ui, lang: Language, now: u64) {
        ui.strong(tr(lang, Text::WheelTitle));

        let (rect, _) = ui.allocate_exact_size(Vec2::splat(220.0), Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let radius = rect.width() * 0.45;

        painter.circle_filled(center, radius, Color32::from_rgb(60, 40, 30));
        painter.circle_stroke(center, radius, Stroke::new(3.0, BRAND_RED));

        let turns = self.wheel.rotation(now);
        let slice = TAU / SEGMENTS.len() as f32;
        for (i, segment) in SEGMENTS.iter().enumerate() {
            // Segment i sits under the pointer when `turns` ends on i / len.
            let angle = -TAU / 4.0 + (i as f32) * slice - turns * TAU;
            let edge = angle + slice / 2.0;
            painter.line_segment(
                [center, center + Vec2::angled(edge) * radius],
                Stroke::new(1.0, Color32::from_gray(120)),
            );
            let at: Pos2 = center + Vec2::angled(angle) * radius * 0.7;
            painter.text(
                at,
                Align2::CENTER_CENTER,
                format!("{}\n{}", segment.glyph, segment.points),
                FontId::proportional(14.0),
                Color32::WHITE,
            );
        }

        let tip = center - Vec2::new(0.0, radius - 6.0);
        painter.add(egui::Shape::convex_polygon(
            vec![
                tip,
                tip + Vec2::new(-9.0, -18.0),
                tip + Vec2::new(9.0, -18.0),
            ],
            Color32::GOLD,
            Stroke::NONE,
        ));

        if self.wheel.is_spinning() {
            ui.label(tr(lang, Text::Spinning));
        } else {
            let cooldown = self.wheel.cooldown_remaining(now);
            if ui
                .add_enabled(cooldown == 0, egui::Button::new(tr(lang, Text::Spin)))
                .clicked()
            {
                if let Err(e) = self.wheel.spin(now) {
                    log::warn!("Spin refused: {}", e);
                }
            }
            if cooldown > 0 {
                ui.weak(format!("{} {}s", tr(lang, Text::NextSpinIn), cooldown.div_ceil(1000)));
            }
        }

        if let Some(prize) = self.last_prize {
            ui.colored_label(
                SUCCESS,
                format!("{} {} {}", tr(lang, Text::YouWon), prize.points, prize.glyph),
            );
        }
    }

    fn render_memory(&mut self, ui: &mut Ui, lang: Language, store: &mut ClubStore, now: u64) {
        ui.strong(tr(lang, Text::MemoryTitle));
        ui.label(format!("{}: {}", tr(lang, Text::Moves), self.memory.moves()));

        let mut picked = None;
        egui::Grid::new("memory_grid")
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, card) in self.memory.cards().iter().enumerate() {
                    let face = match card.state {
                        CardState::Hidden => "❓",
                        CardState::Revealed | CardState::Matched => card.glyph(),
                    };
                    let button = egui::Button::new(RichText::new(face).size(26.0))
                        .min_size(Vec2::splat(52.0))
                        .fill(match card.state {
                            CardState::Matched => Color32::from_rgb(30, 80, 50),
                            _ => ui.visuals().widgets.inactive.bg_fill,
                        });
                    let enabled = card.state == CardState::Hidden && !self.memory.is_locked();
                    if ui.add_enabled(enabled, button).clicked() {
                        picked = Some(i);
                    }
                    if (i + 1) % 4 == 0 {
                        ui.end_row();
                    }
                }
            });

        if let Some(index) = picked {
            match self.memory.flip(index, now) {
                Ok(FlipOutcome::Won) => {
                    let reward = self.memory.reward(self.memory_base_reward);
                    match store.award_points(reward, PointsReason::MemoryGame) {
                        Ok(_) => self.last_memory_reward = Some(reward),
                        Err(e) => log::warn!("Memory reward not credited: {}", e),
                    }
                }
                Ok(_) => {}
                Err(e) => log::warn!("Flip refused: {}", e),
            }
        }

        if self.memory.is_won() {
            if let Some(reward) = self.last_memory_reward {
                ui.colored_label(
                    SUCCESS,
                    format!("{} +{} ⭐", tr(lang, Text::RoundWon), reward),
                );
            }
            if ui.button(tr(lang, Text::NewRound)).clicked() {
                self.memory.reset();
                self.last_memory_reward = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use club_core::Identity;

    #[test]
    fn landed_wheel_prize_is_credited_once() {
        let rewards = RewardsConfig::default();
        let mut store = ClubStore::new(&rewards);
        store.sign_in(Identity::new("Basil", 500));
        let mut panel = GamesPanel::new(&rewards);

        panel.wheel.spin(0).unwrap();
        panel.tick(rewards.wheel_spin_ms - 1, &mut store);
        assert_eq!(store.points(), 500);

        panel.tick(rewards.wheel_spin_ms, &mut store);
        let prize = panel.last_prize.expect("wheel landed");
        assert_eq!(store.points(), 500 + prize.points);

        panel.tick(rewards.wheel_spin_ms * 2, &mut store);
        assert_eq!(store.points(), 500 + prize.points);
    }

    #[test]
    fn reset_clears_round_results() {
        let mut panel = GamesPanel::new(&RewardsConfig::default());
        panel.last_memory_reward = Some(100);
        panel.reset();
        assert_eq!(panel.last_memory_reward, None);
        assert_eq!(panel.memory.moves(), 0);
    }
}
