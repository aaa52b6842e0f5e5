use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::rules::Outcome;

/// Raw tallies of the unknown cards relative to a reference card.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct OutcomeCounts {
    pub higher: usize,
    pub lower: usize,
    pub tie: usize,
}

impl OutcomeCounts {
    pub fn total(&self) -> usize {
        self.higher + self.lower + self.tie
    }
}

/// Likelihood of each outcome for the hidden card, as shown by a hint.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Odds {
    pub higher: f64,
    pub lower: f64,
    pub tie: f64,
    /// Number of unknown cards the fractions are taken over
    pub remaining: usize,
    pub counts: OutcomeCounts,
}

impl Odds {
    /// The result reported when there is no pair on the table.
    pub fn zeroed() -> Self {
        Self::default()
    }

    pub fn probability_of(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Higher => self.higher,
            Outcome::Lower => self.lower,
            Outcome::Tie => self.tie,
        }
    }

    /// The outcome with the largest probability. Ties resolve in the order
    /// higher, lower, tie.
    pub fn most_likely(&self) -> Outcome {
        let mut best = Outcome::Higher;
        for o in [Outcome::Lower, Outcome::Tie] {
            if self.probability_of(o) > self.probability_of(best) {
                best = o;
            }
        }
        best
    }
}

/// Estimates the odds of the hidden card against `reference`.
///
/// The candidate pool is the deck's draw pile plus the hidden card itself, so
/// `remaining` is always `deck.remaining().len() + 1`. Counting the hidden
/// card means the estimate uses its true value even though the player has not
/// seen it yet. Returns [`Odds::zeroed`] if either card is absent.
///
/// # Examples
///
/// ```
/// use highlow_engine::deck::Deck;
/// use highlow_engine::probability::estimate;
///
/// let mut deck = Deck::new_with_seed(5);
/// deck.shuffle();
/// let pair = deck.deal(2).unwrap();
/// let odds = estimate(Some(&pair[0]), Some(&pair[1]), &deck);
/// assert_eq!(odds.remaining, 53);
/// assert!((odds.higher + odds.lower + odds.tie - 1.0).abs() < 1e-9);
/// ```
pub fn estimate(reference: Option<&Card>, hidden: Option<&Card>, deck: &Deck) -> Odds {
    let (Some(reference), Some(hidden)) = (reference, hidden) else {
        return Odds::zeroed();
    };
    let target = reference.value();
    let mut counts = OutcomeCounts::default();
    for card in deck.remaining().iter().chain(std::iter::once(hidden)) {
        match card.value().cmp(&target) {
            std::cmp::Ordering::Greater => counts.higher += 1,
            std::cmp::Ordering::Less => counts.lower += 1,
            std::cmp::Ordering::Equal => counts.tie += 1,
        }
    }
    let remaining = deck.remaining().len() + 1;
    let frac = |n: usize| n as f64 / remaining as f64;
    Odds {
        higher: frac(counts.higher),
        lower: frac(counts.lower),
        tie: frac(counts.tie),
        remaining,
        counts,
    }
}
