pub mod actions;
pub mod state;
pub mod wizard;


pub use actions::WizardAction;
pub use state::{VerificationSession, VerificationStage};
pub use wizard::{VerificationWizard, WizardListener};
