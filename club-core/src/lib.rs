//! # Pizza Club core
//!
//! Headless state for the pizza-club loyalty portal: the member sign-up
//! wizard, the shared club store, the rewards shop and the mini-games.
//!
//! Nothing in here reads a clock. Callers pass `now` as milliseconds since
//! the Unix epoch, which keeps every timed transition reproducible.

pub mod catalog;
pub mod config;
pub mod countdown;
pub mod error;
pub mod games;
pub mod i18n;
pub mod identity;
pub mod navigation;
pub mod promo;
pub mod scheduler;
pub mod store;
pub mod verification;

pub use catalog::{Catalog, CatalogEntry, ItemIcon, ItemId};
pub use config::{ClubConfig, RewardsConfig, UiConfig, WizardConfig};
pub use countdown::{Countdown, CountdownParts};
pub use error::{ClubError, GameError, Result, StoreError, WizardError};
pub use i18n::{tr, Language, Text};
pub use identity::{DisplayNameGenerator, Identity, Rank};
pub use navigation::{NavOutcome, Navigator, View};
pub use promo::{promo_cards, PromoCard, PromoKind};
pub use scheduler::TimerQueue;
pub use store::{ClubStore, LedgerEntry, PointsReason, Purchase};
pub use verification::{
    VerificationSession, VerificationStage, VerificationWizard, WizardAction, WizardListener,
};
