use crate::config::WizardConfig;
use crate::error::WizardError;
use crate::i18n::Language;
use crate::identity::{DisplayNameGenerator, Identity};
use crate::scheduler::TimerQueue;

use super::{VerificationSession, VerificationStage, WizardAction};

/// Receives the wizard's two outward signals.
pub trait WizardListener {
    /// Called exactly once per completed session.
    fn on_complete(&mut self, identity: Identity);

    fn on_close(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingStep {
    CodeSent,
    CodeVerified,
    ProfileCreated,
    HandOver,
}

#[derive(Debug)]
struct Scheduled {
    generation: u64,
    due_at: u64,
    step: PendingStep,
}

/// Four-stage sign-up flow: contact, code, display name, done.
///
/// Every advance sets `busy`, schedules a fixed delay and returns. The delay
/// fires from [`VerificationWizard::tick`]. Timers are tagged with the session
/// generation, and `open`/`close` bump it, so a timer that outlives its
/// session does nothing.
pub struct VerificationWizard {
    config: WizardConfig,
    signup_bonus: u32,
    language: Language,

    open: bool,
    generation: u64,
    session: VerificationSession,

    timers: TimerQueue<Scheduled>,
    names: DisplayNameGenerator,
}

impl VerificationWizard {
    pub fn new(config: WizardConfig, signup_bonus: u32) -> Self {
        Self::with_name_generator(config, signup_bonus, DisplayNameGenerator::new())
    }

    pub fn with_name_generator(
        config: WizardConfig,
        signup_bonus: u32,
        names: DisplayNameGenerator,
    ) -> Self {
        Self {
            config,
            signup_bonus,
            language: Language::default(),
            open: false,
            generation: 0,
            session: VerificationSession::new(),
            timers: TimerQueue::new(),
            names,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn session(&self) -> &VerificationSession {
        &self.session
    }

    pub fn stage(&self) -> VerificationStage {
        self.session.stage
    }

    pub fn is_busy(&self) -> bool {
        self.session.busy
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    /// Whether the advance control should be enabled.
    pub fn can_advance(&self) -> bool {
        self.open && !self.session.busy && self.session.stage_input_ready(&self.config)
    }

    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    pub fn dispatch(
        &mut self,
        action: WizardAction,
        now: u64,
        listener: &mut impl WizardListener,
    ) -> Result<(), WizardError> {
        log::debug!("Wizard action: {}", action.description());
        match action {
            WizardAction::Open => {
                self.open();
                Ok(())
            }
            WizardAction::Close => {
                self.close(listener);
                Ok(())
            }
            WizardAction::SetLanguage(language) => {
                self.set_language(language);
                Ok(())
            }
            WizardAction::SetContact(value) => {
                self.set_contact(&value);
                Ok(())
            }
            WizardAction::SetCode(value) => {
                self.set_code(&value);
                Ok(())
            }
            WizardAction::SetDisplayName(value) => {
                self.set_display_name(&value);
                Ok(())
            }
            WizardAction::GenerateDisplayName => {
                self.fill_generated_name();
                Ok(())
            }
            WizardAction::Advance => self.advance(now),
        }
    }

    /// Starts a fresh session. Returns false if one is already open.
    pub fn open(&mut self) -> bool {
        if self.open {
            log::debug!("Wizard already open, ignoring");
            return false;
        }
        self.generation += 1;
        self.session = VerificationSession::new();
        self.open = true;
        log::info!("Verification wizard opened (session {})", self.generation);
        true
    }

    /// Discards the session. Pending timers for it become no-ops.
    ///
    /// Closing during the confirmation hands the identity over first.
    pub fn close(&mut self, listener: &mut impl WizardListener) {
        if !self.open {
            return;
        }
        if self.session.stage == VerificationStage::Completed {
            self.hand_over(listener);
        } else {
            log::info!(
                "Verification wizard cancelled at {:?} (session {})",
                self.session.stage,
                self.generation
            );
        }
        self.generation += 1;
        self.session = VerificationSession::new();
        self.open = false;
        listener.on_close();
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Edits are accepted only for the stage on screen and only while idle,
    /// so a field cannot change after its check has passed.
    fn accepts_input(&self, stage: VerificationStage) -> bool {
        self.open && !self.session.busy && self.session.stage == stage
    }

    pub fn set_contact(&mut self, value: &str) {
        if self.accepts_input(VerificationStage::CollectingContact) {
            self.session.contact = value.to_string();
        }
    }

    /// Keeps at most `code_len` characters.
    pub fn set_code(&mut self, value: &str) {
        if self.accepts_input(VerificationStage::AwaitingCode) {
            self.session.verification_code = value.chars().take(self.config.code_len).collect();
        }
    }

    pub fn set_display_name(&mut self, value: &str) {
        if self.accepts_input(VerificationStage::CollectingDisplayName) {
            self.session.display_name = value.to_string();
        }
    }

    pub fn generate_display_name(&mut self) -> String {
        self.names.generate()
    }

    pub fn fill_generated_name(&mut self) {
        if self.accepts_input(VerificationStage::CollectingDisplayName) {
            self.session.display_name = self.names.generate();
        }
    }

    pub fn advance(&mut self, now: u64) -> Result<(), WizardError> {
        if !self.open {
            return Err(WizardError::Closed);
        }
        if self.session.busy {
            log::warn!("Advance ignored: step already in progress");
            return Err(WizardError::Busy);
        }

        let stage = self.session.stage;
        let (delay, step) = match stage {
            VerificationStage::CollectingContact => {
                (self.config.send_code_delay_ms, PendingStep::CodeSent)
            }
            VerificationStage::AwaitingCode => {
                (self.config.verify_code_delay_ms, PendingStep::CodeVerified)
            }
            VerificationStage::CollectingDisplayName => {
                (self.config.create_profile_delay_ms, PendingStep::ProfileCreated)
            }
            VerificationStage::Completed => return Err(WizardError::Finished),
        };

        if !self.session.stage_input_ready(&self.config) {
            log::warn!("Advance ignored: input for {:?} incomplete", stage);
            return Err(WizardError::InputIncomplete(stage));
        }

        self.session.busy = true;
        self.schedule(now.saturating_add(delay), step);
        Ok(())
    }

    /// Fires every timer due at `now`, in order.
    pub fn tick(&mut self, now: u64, listener: &mut impl WizardListener) {
        loop {
            let due = self.timers.drain_due(now);
            if due.is_empty() {
                break;
            }
            for scheduled in due {
                self.fire(scheduled, listener);
            }
        }
    }

    fn schedule(&mut self, due_at: u64, step: PendingStep) {
        log::debug!("Scheduling {:?} at {} (session {})", step, due_at, self.generation);
        self.timers.schedule(
            due_at,
            Scheduled {
                generation: self.generation,
                due_at,
                step,
            },
        );
    }

    fn fire(&mut self, scheduled: Scheduled, listener: &mut impl WizardListener) {
        if !self.open || scheduled.generation != self.generation {
            log::debug!(
                "Dropping stale {:?} from session {}",
                scheduled.step,
                scheduled.generation
            );
            return;
        }

        match scheduled.step {
            PendingStep::CodeSent | PendingStep::CodeVerified => {
                self.session.busy = false;
                self.session.stage = self.session.stage.next();
                log::info!("Verification advanced to {:?}", self.session.stage);
            }
            PendingStep::ProfileCreated => {
                self.session.busy = false;
                self.session.stage = VerificationStage::Completed;
                log::info!("Verification completed for {}", self.session.display_name.trim());
                self.schedule(
                    scheduled.due_at.saturating_add(self.config.completion_delay_ms),
                    PendingStep::HandOver,
                );
            }
            PendingStep::HandOver => self.hand_over(listener),
        }
    }

    fn hand_over(&mut self, listener: &mut impl WizardListener) {
        if self.session.identity_issued {
            return;
        }
        self.session.identity_issued = true;
        let identity = Identity::new(self.session.display_name.trim(), self.signup_bonus);
        log::info!("Issuing identity {} ({})", identity.name, identity.id);
        listener.on_complete(identity);
    }
}
