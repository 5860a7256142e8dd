use crate::config::RewardsConfig;
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelSegment {
    pub glyph: &'static str,
    pub points: u32,
    pub weight: u32,
}

pub const SEGMENTS: [WheelSegment; 6] = [
    WheelSegment { glyph: "🍅", points: 25, weight: 30 },
    WheelSegment { glyph: "🧀", points: 50, weight: 25 },
    WheelSegment { glyph: "🍄", points: 75, weight: 20 },
    WheelSegment { glyph: "🌿", points: 100, weight: 12 },
    WheelSegment { glyph: "🍍", points: 0, weight: 8 },
    WheelSegment { glyph: "👑", points: 500, weight: 5 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WheelState {
    Idle,
    Spinning { started_at: u64, lands_at: u64, segment: usize },
}

/// Weighted prize wheel with a cooldown between spins.
#[derive(Debug)]
pub struct FortuneWheel {
    spin_ms: u64,
    cooldown_ms: u64,
    state: WheelState,
    last_landed_at: Option<u64>,
    last_segment: Option<usize>,
    rng: fastrand::Rng,
}

impl FortuneWheel {
    pub fn new(rewards: &RewardsConfig) -> Self {
        Self::with_rng(rewards, fastrand::Rng::new())
    }

    pub fn with_rng(rewards: &RewardsConfig, rng: fastrand::Rng) -> Self {
        Self {
            spin_ms: rewards.wheel_spin_ms,
            cooldown_ms: rewards.wheel_cooldown_ms,
            state: WheelState::Idle,
            last_landed_at: None,
            last_segment: None,
            rng,
        }
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.state, WheelState::Spinning { .. })
    }

    pub fn last_prize(&self) -> Option<WheelSegment> {
        self.last_segment.map(|i| SEGMENTS[i])
    }

    pub fn cooldown_remaining(&self, now: u64) -> u64 {
        self.last_landed_at
            .map(|landed| landed.saturating_add(self.cooldown_ms).saturating_sub(now))
            .unwrap_or(0)
    }

    pub fn can_spin(&self, now: u64) -> bool {
        !self.is_spinning() && self.cooldown_remaining(now) == 0
    }

    pub fn spin(&mut self, now: u64) -> Result<(), GameError> {
        if self.is_spinning() {
            return Err(GameError::AlreadySpinning);
        }
        let remaining_ms = self.cooldown_remaining(now);
        if remaining_ms > 0 {
            return Err(GameError::CoolingDown { remaining_ms });
        }

        let segment = self.pick_segment();
        log::debug!("Wheel spinning, will land on segment {}", segment);
        self.state = WheelState::Spinning {
            started_at: now,
            lands_at: now.saturating_add(self.spin_ms),
            segment,
        };
        Ok(())
    }

    /// Returns the prize exactly once, when the spin finishes.
    pub fn tick(&mut self, now: u64) -> Option<WheelSegment> {
        match self.state {
            WheelState::Spinning { lands_at, segment, .. } if now >= lands_at => {
                self.state = WheelState::Idle;
                self.last_landed_at = Some(lands_at);
                self.last_segment = Some(segment);
                let prize = SEGMENTS[segment];
                log::info!("Wheel landed on {} for {} points", prize.glyph, prize.points);
                Some(prize)
            }
            _ => None,
        }
    }

    /// Wheel rotation in turns, for drawing. Eases out and stops centred on the prize.
    pub fn rotation(&self, now: u64) -> f32 {
        let slice = 1.0 / SEGMENTS.len() as f32;
        match self.state {
            WheelState::Idle => self.last_segment.map_or(0.0, |i| i as f32 * slice),
            WheelState::Spinning { started_at, lands_at, segment } => {
                let span = lands_at.saturating_sub(started_at).max(1) as f32;
                let t = (now.saturating_sub(started_at) as f32 / span).min(1.0);
                let eased = 1.0 - (1.0 - t).powi(3);
                let target = 4.0 + segment as f32 * slice;
                eased * target
            }
        }
    }

    fn pick_segment(&mut self) -> usize {
        let total: u32 = SEGMENTS.iter().map(|s| s.weight).sum();
        let mut roll = self.rng.u32(..total);
        for (i, segment) in SEGMENTS.iter().enumerate() {
            if roll < segment.weight {
                return i;
            }
            roll -= segment.weight;
        }
        SEGMENTS.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheel() -> FortuneWheel {
        FortuneWheel::with_rng(&RewardsConfig::default(), fastrand::Rng::with_seed(3))
    }

    #[test]
    fn prize_arrives_once_after_spin_time() {
        let mut wheel = wheel();
        wheel.spin(0).unwrap();
        assert!(wheel.is_spinning());
        assert_eq!(wheel.tick(2_999), None);

        let prize = wheel.tick(3_000).expect("landed");
        assert!(SEGMENTS.contains(&prize));
        assert_eq!(wheel.last_prize(), Some(prize));
        assert_eq!(wheel.tick(3_001), None);
    }

    #[test]
    fn spins_are_rejected_while_spinning_and_cooling_down() {
        let mut wheel = wheel();
        wheel.spin(0).unwrap();
        assert_eq!(wheel.spin(100), Err(GameError::AlreadySpinning));

        wheel.tick(3_000);
        assert_eq!(
            wheel.spin(13_000),
            Err(GameError::CoolingDown { remaining_ms: 50_000 })
        );
        assert!(!wheel.can_spin(62_999));
        assert!(wheel.can_spin(63_000));
        wheel.spin(63_000).unwrap();
    }

    #[test]
    fn every_segment_is_reachable() {
        let mut wheel = wheel();
        let mut seen = [false; SEGMENTS.len()];
        for _ in 0..2_000 {
            seen[wheel.pick_segment()] = true;
        }
        assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn rotation_settles_on_prize() {
        let mut wheel = wheel();
        wheel.spin(0).unwrap();
        assert_eq!(wheel.rotation(0), 0.0);
        let final_turns = wheel.rotation(3_000);
        wheel.tick(3_000);
        assert!((final_turns.fract() - wheel.rotation(3_000)).abs() < 1e-4);
    }
}
