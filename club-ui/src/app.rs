use eframe::egui;

use club_core::{
    tr, Catalog, ClubConfig, ClubStore, Countdown, Language, NavOutcome, Navigator, Text,
    VerificationWizard, View, WizardAction,
};

use crate::views::{self, games::GamesPanel, shop::ShopNotice};
use crate::wasm_utils;

const DEFAULT_PROMO_MS: u64 = 3 * 24 * 60 * 60 * 1000;

/// Pizza club portal: one shared store, one navigator, one sign-up wizard.
pub struct ClubApp {
    language: Language,

    // Central state - single source of truth
    store: ClubStore,
    catalog: Catalog,
    navigator: Navigator,
    wizard: VerificationWizard,

    // View-local state
    games: GamesPanel,
    shop_notice: Option<ShopNotice>,
    promo: Countdown,
}

impl ClubApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ClubConfig) -> Self {
        wasm_utils::install_panic_hook();
        log::info!("🍕 Starting Pizza Club portal");

        let now = wasm_utils::now_ms();
        let promo = match config.ui.promo_deadline_ms {
            Some(deadline) => Countdown::new(deadline),
            None => Countdown::starting_at(now, DEFAULT_PROMO_MS),
        };

        let mut wizard =
            VerificationWizard::new(config.wizard.clone(), config.rewards.signup_bonus);
        wizard.set_language(config.ui.language);

        Self {
            language: config.ui.language,
            store: ClubStore::new(&config.rewards),
            catalog: Catalog::new(),
            navigator: Navigator::new(),
            wizard,
            games: GamesPanel::new(&config.rewards),
            shop_notice: None,
            promo,
        }
    }

    fn go_to(&mut self, view: View) {
        if let NavOutcome::NeedsSignIn(_) = self.navigator.navigate(view, self.store.is_signed_in()) {
            self.store.request_sign_in();
        }
    }

    fn set_language(&mut self, language: Language) {
        self.language = language;
        self.send(WizardAction::SetLanguage(language), 0);
    }

    fn send(&mut self, action: WizardAction, now: u64) {
        if let Err(e) = self.wizard.dispatch(action, now, &mut self.store) {
            log::warn!("Wizard action refused: {}", e);
        }
    }

    /// Advances every timer-driven component to `now`.
    fn tick(&mut self, now: u64) {
        self.wizard.tick(now, &mut self.store);

        if self.store.auth_prompt_open() && !self.wizard.is_open() {
            self.send(WizardAction::Open, now);
        }
        // The wizard hands over the identity and leaves closing to us.
        if self.wizard.is_open() && self.wizard.session().identity_issued {
            self.send(WizardAction::Close, now);
        }

        if self.store.is_signed_in() {
            if let Some(view) = self.navigator.resume_pending(true) {
                log::info!("Signed in, showing {:?}", view);
            }
        } else if !self.store.auth_prompt_open() {
            self.navigator.cancel_pending();
        }

        self.games.tick(now, &mut self.store);
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let lang = self.language;
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🍕 Pizza Club");
                ui.separator();

                if ui
                    .add_enabled(self.navigator.can_go_back(), egui::Button::new("⬅"))
                    .clicked()
                {
                    self.navigator.back();
                }

                for view in View::ALL {
                    let selected = self.navigator.current() == view;
                    if ui.selectable_label(selected, tr(lang, view.label())).clicked() {
                        self.go_to(view);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(lang.toggle().code()).clicked() {
                        self.set_language(lang.toggle());
                    }

                    match self.store.member() {
                        Some(member) => {
                            let name = member.name.clone();
                            if ui.button(tr(lang, Text::SignOut)).clicked() {
                                self.store.sign_out();
                                self.navigator.drop_member_views();
                                self.games.reset();
                                self.shop_notice = None;
                            }
                            ui.label(format!(
                                "⭐ {} {}",
                                self.store.points(),
                                tr(lang, Text::Points)
                            ));
                            ui.strong(name);
                        }
                        None => {
                            if ui.button(tr(lang, Text::SignIn)).clicked() {
                                self.store.request_sign_in();
                            }
                        }
                    }
                });
            });
        });
    }
}

impl eframe::App for ClubApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Timers are polled, so keep frames coming
        ctx.request_repaint();

        let now = wasm_utils::now_ms();
        self.tick(now);

        self.render_top_bar(ctx);

        let lang = self.language;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.navigator.current() {
                View::Home => views::home::render(ui, lang, &self.promo, now),
                View::Shop => views::shop::render(
                    ui,
                    lang,
                    &mut self.store,
                    &mut self.catalog,
                    &mut self.shop_notice,
                    now,
                ),
                View::Games => self.games.render(ui, lang, &mut self.store, now),
                View::Profile => views::profile::render(ui, lang, &self.store),
            });
        });

        if self.wizard.is_open() {
            views::wizard::render(ctx, &mut self.wizard, &mut self.store, now);
        }
    }
}
