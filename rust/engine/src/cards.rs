use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four suits of the standard deck. Jokers carry no suit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades (♠)
    Spade,
    /// Hearts (♥)
    Heart,
    /// Diamonds (♦)
    Diamond,
    /// Clubs (♣)
    Club,
}

impl Suit {
    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Spade => "♠",
            Suit::Heart => "♥",
            Suit::Diamond => "♦",
            Suit::Club => "♣",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Spade => "Spade",
            Suit::Heart => "Heart",
            Suit::Diamond => "Diamond",
            Suit::Club => "Club",
        }
    }
}

/// Rank of a card from Two through Ace, plus the two jokers.
/// The discriminant is the comparison value, so jokers outrank every suited card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
    /// Little joker (15)
    LittleJoker,
    /// Big joker (16)
    BigJoker,
}

impl Rank {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn is_joker(self) -> bool {
        matches!(self, Rank::LittleJoker | Rank::BigJoker)
    }

    /// Printed face of the rank.
    pub fn name(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::LittleJoker => "Little Joker",
            Rank::BigJoker => "Big Joker",
        }
    }
}

/// A single playing card, identified by its suit and rank.
///
/// Cards are immutable values. Whether a card has been shown face-up is a
/// property of where the [`crate::deck::Deck`] currently keeps it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The rank, which also fixes the comparison value
    pub rank: Rank,
    /// `None` for the two jokers
    pub suit: Option<Suit>,
}

impl Card {
    /// A suited card. Use [`Card::joker`] for jokers.
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit: Some(suit),
        }
    }

    pub fn joker(rank: Rank) -> Self {
        debug_assert!(rank.is_joker());
        Self { rank, suit: None }
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Stable identifier such as `Spade_K` or `big_joker`.
    pub fn card_id(&self) -> String {
        match (self.suit, self.rank) {
            (Some(s), r) => format!("{}_{}", s.name(), r.name()),
            (None, Rank::LittleJoker) => "little_joker".to_string(),
            (None, _) => "big_joker".to_string(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.rank.name()
    }

    /// Suit symbol, or an empty string for jokers.
    pub fn symbol(&self) -> &'static str {
        self.suit.map(Suit::symbol).unwrap_or("")
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.symbol(), self.name())
    }
}

/// Number of cards in a full deck: 13 ranks in 4 suits and two jokers.
pub const DECK_SIZE: usize = 54;

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// All 54 cards in construction order: each suit 2..A, then the jokers.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card::new(r, s));
        }
    }
    v.push(Card::joker(Rank::LittleJoker));
    v.push(Card::joker(Rank::BigJoker));
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn values_follow_rank_order() {
        let mut prev = 1;
        for r in all_ranks()
            .into_iter()
            .chain([Rank::LittleJoker, Rank::BigJoker])
        {
            assert!(r.value() > prev);
            prev = r.value();
        }
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ace.value(), 14);
        assert_eq!(Rank::BigJoker.value(), 16);
    }

    #[test]
    fn ids_and_display() {
        assert_eq!(Card::new(Rank::King, Suit::Spade).card_id(), "Spade_K");
        assert_eq!(Card::new(Rank::Ten, Suit::Heart).card_id(), "Heart_10");
        assert_eq!(Card::joker(Rank::LittleJoker).card_id(), "little_joker");
        assert_eq!(Card::joker(Rank::BigJoker).card_id(), "big_joker");
        assert_eq!(Card::new(Rank::Ace, Suit::Diamond).to_string(), "♦A");
        assert_eq!(Card::joker(Rank::BigJoker).to_string(), "Big Joker");
        assert_eq!(Card::joker(Rank::BigJoker).symbol(), "");
    }

    #[test]
    fn full_deck_has_54_unique_ids() {
        let deck = full_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        let ids: HashSet<String> = deck.iter().map(Card::card_id).collect();
        assert_eq!(ids.len(), DECK_SIZE);
        assert_eq!(deck[0].card_id(), "Spade_2");
        assert_eq!(deck[13].card_id(), "Heart_2");
        assert_eq!(deck[52].card_id(), "little_joker");
        assert_eq!(deck[53].card_id(), "big_joker");
    }
}
