use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::i18n::Text;

/// A newly registered club member, produced once by a completed verification session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
    pub points: u32,
    pub rank: Rank,
}

impl Identity {
    pub fn new(name: impl Into<String>, points: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            points,
            rank: Rank::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    #[default]
    Rookie,
    Regular,
    Gourmet,
    Legend,
}

impl Rank {
    /// Rank earned by `lifetime` points given the Regular/Gourmet/Legend thresholds.
    pub fn for_points(lifetime: u32, thresholds: [u32; 3]) -> Self {
        let [regular, gourmet, legend] = thresholds;
        match lifetime {
            p if p >= legend => Rank::Legend,
            p if p >= gourmet => Rank::Gourmet,
            p if p >= regular => Rank::Regular,
            _ => Rank::Rookie,
        }
    }

    pub fn label(self) -> Text {
        match self {
            Rank::Rookie => Text::RankRookie,
            Rank::Regular => Text::RankRegular,
            Rank::Gourmet => Text::RankGourmet,
            Rank::Legend => Text::RankLegend,
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            Rank::Rookie => "🍕",
            Rank::Regular => "🔥",
            Rank::Gourmet => "👨‍🍳",
            Rank::Legend => "👑",
        }
    }
}

pub const NAME_PREFIXES: [&str; 8] = [
    "Cyber", "Pizza", "Turbo", "Mega", "Crispy", "Spicy", "Neon", "Golden",
];

pub const NAME_SUFFIXES: [&str; 8] = [
    "Ninja", "Chef", "Slice", "Master", "Knight", "Rider", "Wizard", "Hunter",
];

/// Builds names like `CyberNinja_42`. Collisions are possible and allowed.
#[derive(Debug, Clone)]
pub struct DisplayNameGenerator {
    rng: fastrand::Rng,
}

impl Default for DisplayNameGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayNameGenerator {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    pub fn generate(&mut self) -> String {
        let prefix = NAME_PREFIXES[self.rng.usize(..NAME_PREFIXES.len())];
        let suffix = NAME_SUFFIXES[self.rng.usize(..NAME_SUFFIXES.len())];
        let number = self.rng.u32(1..=99);
        format!("{prefix}{suffix}_{number}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLDS: [u32; 3] = [1_000, 2_500, 5_000];

    #[test]
    fn rank_follows_thresholds() {
        assert_eq!(Rank::for_points(0, THRESHOLDS), Rank::Rookie);
        assert_eq!(Rank::for_points(999, THRESHOLDS), Rank::Rookie);
        assert_eq!(Rank::for_points(1_000, THRESHOLDS), Rank::Regular);
        assert_eq!(Rank::for_points(2_500, THRESHOLDS), Rank::Gourmet);
        assert_eq!(Rank::for_points(u32::MAX, THRESHOLDS), Rank::Legend);
    }

    #[test]
    fn new_identity_starts_as_rookie() {
        let identity = Identity::new("Dough Boy", 500);
        assert_eq!(identity.rank, Rank::Rookie);
        assert_eq!(identity.points, 500);
        assert_ne!(identity.id, Identity::new("Dough Boy", 500).id);
    }

    #[test]
    fn seeded_generator_is_reproducible() {
        let mut a = DisplayNameGenerator::with_seed(7);
        let mut b = DisplayNameGenerator::with_seed(7);
        assert_eq!(a.generate(), b.generate());
    }

    #[test]
    fn generated_names_use_known_parts() {
        let pattern = regex::Regex::new(r"^([A-Z][a-z]+)([A-Z][a-z]+)_([0-9]{1,2})$").unwrap();
        let mut generator = DisplayNameGenerator::with_seed(42);
        for _ in 0..50 {
            let name = generator.generate();
            let caps = pattern.captures(&name).expect("name matches pattern");
            assert!(NAME_PREFIXES.contains(&&caps[1]));
            assert!(NAME_SUFFIXES.contains(&&caps[2]));
            let n: u32 = caps[3].parse().unwrap();
            assert!((1..=99).contains(&n));
        }
    }
}
