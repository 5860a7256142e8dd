use serde::{Deserialize, Serialize};

use crate::config::WizardConfig;
use crate::i18n::Text;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VerificationStage {
    #[default]
    CollectingContact,
    AwaitingCode,
    CollectingDisplayName,
    Completed,
}

impl VerificationStage {
    pub fn next(self) -> Self {
        match self {
            VerificationStage::CollectingContact => VerificationStage::AwaitingCode,
            VerificationStage::AwaitingCode => VerificationStage::CollectingDisplayName,
            VerificationStage::CollectingDisplayName => VerificationStage::Completed,
            VerificationStage::Completed => VerificationStage::Completed,
        }
    }

    /// 1-based position, for the "step n of 4" indicator.
    pub fn ordinal(self) -> u8 {
        match self {
            VerificationStage::CollectingContact => 1,
            VerificationStage::AwaitingCode => 2,
            VerificationStage::CollectingDisplayName => 3,
            VerificationStage::Completed => 4,
        }
    }

    pub fn prompt(self) -> Text {
        match self {
            VerificationStage::CollectingContact => Text::ContactPrompt,
            VerificationStage::AwaitingCode => Text::CodePrompt,
            VerificationStage::CollectingDisplayName => Text::NamePrompt,
            VerificationStage::Completed => Text::Welcome,
        }
    }

    pub fn action_label(self) -> Text {
        match self {
            VerificationStage::CollectingContact => Text::SendCode,
            VerificationStage::AwaitingCode => Text::ConfirmCode,
            VerificationStage::CollectingDisplayName => Text::CreateProfile,
            VerificationStage::Completed => Text::Welcome,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationSession {
    pub stage: VerificationStage,
    pub contact: String,
    pub verification_code: String,
    pub display_name: String,
    pub busy: bool,
    pub identity_issued: bool,
}

impl VerificationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contact_ready(&self, config: &WizardConfig) -> bool {
        self.contact.chars().count() >= config.contact_min_len
    }

    pub fn code_ready(&self, config: &WizardConfig) -> bool {
        self.verification_code.chars().count() == config.code_len
    }

    pub fn display_name_ready(&self) -> bool {
        !self.display_name.trim().is_empty()
    }

    /// Whether the input for the current stage satisfies its guard. Ignores `busy`.
    pub fn stage_input_ready(&self, config: &WizardConfig) -> bool {
        match self.stage {
            VerificationStage::CollectingContact => self.contact_ready(config),
            VerificationStage::AwaitingCode => self.code_ready(config),
            VerificationStage::CollectingDisplayName => self.display_name_ready(),
            VerificationStage::Completed => false,
        }
    }
}
