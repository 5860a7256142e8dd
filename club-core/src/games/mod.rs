//! Mini-games. Each one is a small state machine driven by `now` timestamps;
//! points are credited by the caller through `ClubStore::award_points`.

pub mod memory;
pub mod wheel;

pub use memory::{CardState, FlipOutcome, MemoryCard, MemoryGame, INGREDIENTS};
pub use wheel::{FortuneWheel, WheelSegment, SEGMENTS};
