use crate::i18n::Language;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    Open,
    Close,
    SetLanguage(Language),
    SetContact(String),
    SetCode(String),
    SetDisplayName(String),
    GenerateDisplayName,
    Advance,
}

impl WizardAction {
    pub fn description(&self) -> &'static str {
        match self {
            WizardAction::Open => "Opening verification wizard",
            WizardAction::Close => "Closing verification wizard",
            WizardAction::SetLanguage(_) => "Switching wizard language",
            WizardAction::SetContact(_) => "Updating contact",
            WizardAction::SetCode(_) => "Updating verification code",
            WizardAction::SetDisplayName(_) => "Updating display name",
            WizardAction::GenerateDisplayName => "Generating display name",
            WizardAction::Advance => "Advancing to next stage",
        }
    }
}
