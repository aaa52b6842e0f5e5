use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// Number of leading cards captured on each side of a [`ShuffleReport`].
pub const REPORT_PREVIEW: usize = 10;

/// What a shuffle did to the draw pile, for presentation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShuffleReport {
    /// Card ids at the front of the pile before shuffling (at most ten)
    pub previous_order: Vec<String>,
    /// Card ids at the front of the pile after shuffling (at most ten)
    pub current_order: Vec<String>,
    /// Size of the draw pile, which shuffling never changes
    pub total_remaining: usize,
}

/// The 54-card deck, partitioned into three disjoint ordered piles.
///
/// Every card lives in exactly one of `remaining` (draw order),
/// `dealt_unrevealed` (dealt this round, face-down) or `revealed_history`
/// (face-up, accumulated across rounds). Revealing a card moves it between
/// piles, so the partition can always be checked.
///
/// # Examples
///
/// ```
/// use highlow_engine::deck::Deck;
///
/// let mut deck = Deck::new_with_seed(7);
/// deck.shuffle();
/// let pair = deck.deal(2).unwrap();
/// assert_eq!(deck.remaining().len(), 52);
///
/// deck.reveal(&pair[0]).unwrap();
/// assert_eq!(deck.dealt_unrevealed(), &pair[1..]);
/// assert_eq!(deck.revealed_history(), &pair[..1]);
/// ```
#[derive(Debug)]
pub struct Deck {
    remaining: Vec<Card>,
    dealt_unrevealed: Vec<Card>,
    revealed_history: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep construction order until shuffle is called explicitly
        Self {
            remaining: full_deck(),
            dealt_unrevealed: Vec::new(),
            revealed_history: Vec::new(),
            rng,
        }
    }

    /// Rebuilds all 54 cards in construction order and empties the other piles.
    pub fn initialize(&mut self) {
        self.remaining = full_deck();
        self.dealt_unrevealed.clear();
        self.revealed_history.clear();
    }

    /// Shuffles the draw pile with the deck's own seeded generator.
    pub fn shuffle(&mut self) -> Option<ShuffleReport> {
        shuffle_pile(&mut self.remaining, &mut self.rng)
    }

    /// Shuffles the draw pile with a caller-supplied random source.
    ///
    /// Returns `None` and leaves the deck untouched when nothing remains.
    /// Dealt and revealed cards are never reordered.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<ShuffleReport> {
        shuffle_pile(&mut self.remaining, rng)
    }

    /// Moves `count` cards from the front of the draw pile to the dealt pile
    /// and returns them in draw order. Deals nothing if too few remain.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>, GameError> {
        if self.remaining.len() < count {
            return Err(GameError::InsufficientCards {
                requested: count,
                available: self.remaining.len(),
            });
        }
        let dealt: Vec<Card> = self.remaining.drain(..count).collect();
        self.dealt_unrevealed.extend_from_slice(&dealt);
        Ok(dealt)
    }

    /// Turns a dealt card face-up, moving it to the end of the revealed history.
    pub fn reveal(&mut self, card: &Card) -> Result<(), GameError> {
        let idx = self
            .dealt_unrevealed
            .iter()
            .position(|c| c == card)
            .ok_or_else(|| GameError::UnknownCardReference {
                card_id: card.card_id(),
            })?;
        let c = self.dealt_unrevealed.remove(idx);
        self.revealed_history.push(c);
        Ok(())
    }

    pub fn is_revealed(&self, card: &Card) -> bool {
        self.revealed_history.contains(card)
    }

    pub fn remaining(&self) -> &[Card] {
        &self.remaining
    }

    pub fn dealt_unrevealed(&self) -> &[Card] {
        &self.dealt_unrevealed
    }

    pub fn revealed_history(&self) -> &[Card] {
        &self.revealed_history
    }

    /// Cards across all three piles; 54 for any reachable state.
    pub fn total(&self) -> usize {
        self.remaining.len() + self.dealt_unrevealed.len() + self.revealed_history.len()
    }
}

fn shuffle_pile<R: Rng + ?Sized>(pile: &mut [Card], rng: &mut R) -> Option<ShuffleReport> {
    if pile.is_empty() {
        return None;
    }
    let previous_order = preview(pile);
    pile.shuffle(rng);
    let report = ShuffleReport {
        previous_order,
        current_order: preview(pile),
        total_remaining: pile.len(),
    };
    tracing::debug!(
        total_remaining = report.total_remaining,
        top = ?report.current_order.first(),
        "deck shuffled"
    );
    Some(report)
}

fn preview(cards: &[Card]) -> Vec<String> {
    cards.iter().take(REPORT_PREVIEW).map(Card::card_id).collect()
}
