use thiserror::Error;

use crate::catalog::ItemId;
use crate::verification::VerificationStage;

pub type Result<T> = std::result::Result<T, ClubError>;

#[derive(Error, Debug)]
pub enum ClubError {
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error(transparent)]
    Wizard(#[from] WizardError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Game(#[from] GameError),
}

/// Why the wizard refused to advance. The session is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("verification wizard is not open")]
    Closed,

    #[error("a verification step is already in progress")]
    Busy,

    #[error("input for {0:?} is incomplete")]
    InputIncomplete(VerificationStage),

    #[error("verification already completed")]
    Finished,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("no member is signed in")]
    NotSignedIn,

    #[error("not enough points: need {needed}, have {available}")]
    InsufficientPoints { needed: u32, available: u32 },

    #[error("{0:?} is out of stock")]
    OutOfStock(ItemId),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("the wheel is still spinning")]
    AlreadySpinning,

    #[error("next spin available in {remaining_ms} ms")]
    CoolingDown { remaining_ms: u64 },

    #[error("card {0} does not exist")]
    NoSuchCard(usize),

    #[error("card {0} is already face up")]
    CardFaceUp(usize),

    #[error("waiting for the previous pair to flip back")]
    BoardLocked,

    #[error("the round is already won")]
    RoundOver,
}
