use crate::error::GameError;

pub const INGREDIENTS: [&str; 8] = ["🍅", "🧀", "🍄", "🌶", "🫒", "🥓", "🧅", "🌿"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Hidden,
    Revealed,
    Matched,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryCard {
    pub ingredient: usize,
    pub state: CardState,
}

impl MemoryCard {
    pub fn glyph(&self) -> &'static str {
        INGREDIENTS[self.ingredient]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    FirstCard,
    Matched,
    Mismatched,
    /// The last pair was found. Returned once per round.
    Won,
}

/// Pair-matching game over a shuffled board of ingredient cards.
#[derive(Debug)]
pub struct MemoryGame {
    pairs: usize,
    mismatch_ms: u64,
    cards: Vec<MemoryCard>,
    first_pick: Option<usize>,
    // (hide_at, a, b) for a mismatched pair still on screen
    pending_hide: Option<(u64, usize, usize)>,
    moves: u32,
    rng: fastrand::Rng,
}

impl MemoryGame {
    pub fn new(pairs: usize, mismatch_ms: u64) -> Self {
        Self::with_rng(pairs, mismatch_ms, fastrand::Rng::new())
    }

    pub fn with_rng(pairs: usize, mismatch_ms: u64, rng: fastrand::Rng) -> Self {
        let mut game = Self {
            pairs: pairs.clamp(1, INGREDIENTS.len()),
            mismatch_ms,
            cards: Vec::new(),
            first_pick: None,
            pending_hide: None,
            moves: 0,
            rng,
        };
        game.reset();
        game
    }

    pub fn reset(&mut self) {
        let mut cards: Vec<MemoryCard> = (0..self.pairs)
            .flat_map(|ingredient| {
                [MemoryCard { ingredient, state: CardState::Hidden }; 2]
            })
            .collect();
        self.rng.shuffle(&mut cards);
        self.cards = cards;
        self.first_pick = None;
        self.pending_hide = None;
        self.moves = 0;
    }

    pub fn cards(&self) -> &[MemoryCard] {
        &self.cards
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_won(&self) -> bool {
        self.cards.iter().all(|c| c.state == CardState::Matched)
    }

    pub fn is_locked(&self) -> bool {
        self.pending_hide.is_some()
    }

    pub fn flip(&mut self, index: usize, now: u64) -> Result<FlipOutcome, GameError> {
        if self.is_won() {
            return Err(GameError::RoundOver);
        }
        if self.pending_hide.is_some() {
            return Err(GameError::BoardLocked);
        }
        let card = self.cards.get(index).ok_or(GameError::NoSuchCard(index))?;
        if card.state != CardState::Hidden {
            return Err(GameError::CardFaceUp(index));
        }
        self.cards[index].state = CardState::Revealed;

        let Some(first) = self.first_pick.take() else {
            self.first_pick = Some(index);
            return Ok(FlipOutcome::FirstCard);
        };

        self.moves += 1;
        if self.cards[first].ingredient == self.cards[index].ingredient {
            self.cards[first].state = CardState::Matched;
            self.cards[index].state = CardState::Matched;
            if self.is_won() {
                log::info!("Memory round won in {} moves", self.moves);
                return Ok(FlipOutcome::Won);
            }
            Ok(FlipOutcome::Matched)
        } else {
            self.pending_hide = Some((now.saturating_add(self.mismatch_ms), first, index));
            Ok(FlipOutcome::Mismatched)
        }
    }

    /// Turns a mismatched pair back over once its delay has passed.
    pub fn tick(&mut self, now: u64) {
        if let Some((hide_at, a, b)) = self.pending_hide {
            if now >= hide_at {
                self.cards[a].state = CardState::Hidden;
                self.cards[b].state = CardState::Hidden;
                self.pending_hide = None;
            }
        }
    }

    /// Full `base` for a perfect round, shrinking with every extra move.
    pub fn reward(&self, base: u32) -> u32 {
        let perfect = self.pairs as u64;
        let taken = u64::from(self.moves).max(perfect);
        (u64::from(base) * perfect / taken) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> MemoryGame {
        MemoryGame::with_rng(4, 800, fastrand::Rng::with_seed(9))
    }

    fn partner_of(game: &MemoryGame, index: usize) -> usize {
        let ingredient = game.cards()[index].ingredient;
        (0..game.cards().len())
            .find(|&i| i != index && game.cards()[i].ingredient == ingredient)
            .unwrap()
    }

    fn stranger_of(game: &MemoryGame, index: usize) -> usize {
        let ingredient = game.cards()[index].ingredient;
        (0..game.cards().len())
            .find(|&i| game.cards()[i].ingredient != ingredient)
            .unwrap()
    }

    #[test]
    fn board_holds_each_ingredient_twice() {
        let game = game();
        assert_eq!(game.cards().len(), 8);
        for ingredient in 0..4 {
            let count = game.cards().iter().filter(|c| c.ingredient == ingredient).count();
            assert_eq!(count, 2);
        }
        assert!(game.cards().iter().all(|c| c.state == CardState::Hidden));
    }

    #[test]
    fn mismatch_locks_board_until_tick() {
        let mut game = game();
        let other = stranger_of(&game, 0);

        assert_eq!(game.flip(0, 0), Ok(FlipOutcome::FirstCard));
        assert_eq!(game.flip(0, 0), Err(GameError::CardFaceUp(0)));
        assert_eq!(game.flip(other, 0), Ok(FlipOutcome::Mismatched));
        assert_eq!(game.flip(partner_of(&game, 0), 10), Err(GameError::BoardLocked));

        game.tick(799);
        assert!(game.is_locked());
        game.tick(800);
        assert!(!game.is_locked());
        assert_eq!(game.cards()[0].state, CardState::Hidden);
        assert_eq!(game.cards()[other].state, CardState::Hidden);
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn perfect_round_wins_full_reward() {
        let mut game = game();
        let mut outcome = None;
        while !game.is_won() {
            let first = game
                .cards()
                .iter()
                .position(|c| c.state == CardState::Hidden)
                .unwrap();
            let second = partner_of(&game, first);
            game.flip(first, 0).unwrap();
            outcome = Some(game.flip(second, 0).unwrap());
        }
        assert_eq!(outcome, Some(FlipOutcome::Won));
        assert_eq!(game.moves(), 4);
        assert_eq!(game.reward(200), 200);
        assert_eq!(game.flip(0, 0), Err(GameError::RoundOver));
    }

    #[test]
    fn extra_moves_shrink_reward() {
        let mut game = game();
        game.flip(0, 0).unwrap();
        game.flip(stranger_of(&game, 0), 0).unwrap();
        game.tick(1_000);
        game.flip(0, 1_000).unwrap();
        game.flip(stranger_of(&game, 0), 1_000).unwrap();
        game.tick(2_000);
        // Two wasted moves before any pair; a perfect finish takes 4 more.
        assert_eq!(game.moves(), 2);
        assert_eq!(MemoryGame { moves: 6, ..game }.reward(300), 200);
    }

    #[test]
    fn out_of_range_card_is_rejected() {
        let mut game = game();
        assert_eq!(game.flip(99, 0), Err(GameError::NoSuchCard(99)));
    }

    #[test]
    fn reset_starts_a_new_round() {
        let mut game = game();
        game.flip(0, 0).unwrap();
        game.reset();
        assert_eq!(game.moves(), 0);
        assert!(game.cards().iter().all(|c| c.state == CardState::Hidden));
    }
}
