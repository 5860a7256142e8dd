use egui::{Color32, RichText};

use club_core::{tr, ClubStore, Text, VerificationStage, VerificationWizard, WizardAction};

use super::SUCCESS;

/// Sign-up modal. Inputs become [`WizardAction`]s dispatched after the frame's
/// layout. Closing it (title-bar ✕ or the Close button) ends the session.
pub fn render(ctx: &egui::Context, wizard: &mut VerificationWizard, store: &mut ClubStore, now: u64) {
    let lang = wizard.language();
    let stage = wizard.stage();
    let busy = wizard.is_busy();
    let mut keep_open = true;
    let mut actions = Vec::new();

    egui::Window::new(tr(lang, Text::WizardTitle))
        .id(egui::Id::new("verification_wizard"))
        .open(&mut keep_open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for step in 1..=4u8 {
                    let color = if step <= stage.ordinal() { SUCCESS } else { Color32::GRAY };
                    ui.colored_label(color, "●");
                }
            });
            ui.add_space(6.0);
            ui.strong(tr(lang, stage.prompt()));

            let session = wizard.session();
            match stage {
                VerificationStage::CollectingContact => {
                    let mut contact = session.contact.clone();
                    let edit = egui::TextEdit::singleline(&mut contact).hint_text("9991234567");
                    if ui.add_enabled(!busy, edit).changed() {
                        actions.push(WizardAction::SetContact(contact));
                    }
                    ui.weak(tr(lang, Text::ContactHint));
                }
                VerificationStage::AwaitingCode => {
                    let mut code = session.verification_code.clone();
                    let edit = egui::TextEdit::singleline(&mut code)
                        .char_limit(wizard.config().code_len)
                        .desired_width(80.0)
                        .hint_text("••••");
                    if ui.add_enabled(!busy, edit).changed() {
                        actions.push(WizardAction::SetCode(code));
                    }
                }
                VerificationStage::CollectingDisplayName => {
                    ui.horizontal(|ui| {
                        let mut name = session.display_name.clone();
                        if ui
                            .add_enabled(!busy, egui::TextEdit::singleline(&mut name))
                            .changed()
                        {
                            actions.push(WizardAction::SetDisplayName(name));
                        }
                        let dice = egui::Button::new(format!("🎲 {}", tr(lang, Text::GenerateName)));
                        if ui.add_enabled(!busy, dice).clicked() {
                            actions.push(WizardAction::GenerateDisplayName);
                        }
                    });
                }
                VerificationStage::Completed => {
                    ui.label(RichText::new("🎉").size(40.0));
                    ui.colored_label(SUCCESS, session.display_name.trim());
                }
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if stage != VerificationStage::Completed {
                    let button = egui::Button::new(tr(lang, stage.action_label()));
                    if ui.add_enabled(wizard.can_advance(), button).clicked() {
                        actions.push(WizardAction::Advance);
                    }
                }
                if busy {
                    ui.spinner();
                    ui.label(tr(lang, Text::PleaseWait));
                }
                if ui.button(tr(lang, Text::Close)).clicked() {
                    actions.push(WizardAction::Close);
                }
            });
        });

    if !keep_open {
        actions.push(WizardAction::Close);
    }

    for action in actions {
        if let Err(e) = wizard.dispatch(action, now, store) {
            log::warn!("Wizard action refused: {}", e);
        }
    }
}
