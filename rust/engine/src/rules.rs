use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Points for a correct guess.
pub const CORRECT_POINTS: u32 = 10;
/// Points for a correct guess whose outcome was rare.
pub const BONUS_POINTS: u32 = 100;
/// A correct guess earns the bonus when its outcome probability is strictly below this.
pub const BONUS_THRESHOLD: f64 = 0.10;

/// How the player's hidden card relates to the computer's card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Higher,
    Lower,
    Tie,
}

impl Outcome {
    /// The outcome that actually holds between the two cards.
    pub fn between(player: &Card, computer: &Card) -> Outcome {
        match player.value().cmp(&computer.value()) {
            std::cmp::Ordering::Greater => Outcome::Higher,
            std::cmp::Ordering::Less => Outcome::Lower,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Higher => "higher",
            Outcome::Lower => "lower",
            Outcome::Tie => "tie",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "higher" | "h" => Ok(Outcome::Higher),
            "lower" | "l" => Ok(Outcome::Lower),
            "tie" | "t" => Ok(Outcome::Tie),
            other => Err(format!("Unknown outcome: {}", other)),
        }
    }
}

/// Result of a single guess.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GuessResult {
    pub correct: bool,
    /// Points added to the score
    pub delta: u32,
    /// Set when the correct guess had a probability under [`BONUS_THRESHOLD`]
    pub bonus: bool,
}

/// Scores a guess against the two cards and the probability the guessed
/// outcome had before the player's card was revealed.
///
/// # Examples
///
/// ```
/// use highlow_engine::cards::{Card, Rank, Suit};
/// use highlow_engine::rules::{score_guess, Outcome};
///
/// let computer = Card::new(Rank::Ten, Suit::Club);
/// let player = Card::new(Rank::Ace, Suit::Heart);
///
/// let r = score_guess(Outcome::Higher, &computer, &player, 0.35);
/// assert!(r.correct && !r.bonus);
/// assert_eq!(r.delta, 10);
///
/// let r = score_guess(Outcome::Higher, &computer, &player, 0.05);
/// assert_eq!(r.delta, 100);
///
/// let r = score_guess(Outcome::Lower, &computer, &player, 0.05);
/// assert_eq!(r.delta, 0);
/// ```
pub fn score_guess(guess: Outcome, computer: &Card, player: &Card, probability: f64) -> GuessResult {
    if Outcome::between(player, computer) != guess {
        return GuessResult {
            correct: false,
            delta: 0,
            bonus: false,
        };
    }
    let bonus = probability < BONUS_THRESHOLD;
    GuessResult {
        correct: true,
        delta: if bonus { BONUS_POINTS } else { CORRECT_POINTS },
        bonus,
    }
}

/// How-to-play text shown on request.
pub fn instructions() -> &'static [&'static str] {
    &[
        "HOW TO PLAY:",
        "",
        "1. Ask for a hint to view probabilities",
        "2. Guess if your card is:",
        "   - HIGHER than computer's card",
        "   - LOWER than computer's card",
        "   - TIE (same value)",
        "3. Shuffle to reorder the remaining deck",
        "",
        "SCORING:",
        "- Correct guess: +10 points",
        "- Correct guess with <10% probability: +100 BONUS!",
        "- Wrong guess: 0 points",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn parses_long_and_short_forms() {
        assert_eq!("higher".parse::<Outcome>(), Ok(Outcome::Higher));
        assert_eq!(" L ".parse::<Outcome>(), Ok(Outcome::Lower));
        assert_eq!("Tie".parse::<Outcome>(), Ok(Outcome::Tie));
        assert!("same".parse::<Outcome>().is_err());
    }

    #[test]
    fn bonus_threshold_is_strict() {
        let five = Card::new(Rank::Five, Suit::Spade);
        let other_five = Card::new(Rank::Five, Suit::Club);
        let r = score_guess(Outcome::Tie, &five, &other_five, BONUS_THRESHOLD);
        assert_eq!(
            r,
            GuessResult {
                correct: true,
                delta: CORRECT_POINTS,
                bonus: false
            }
        );
        let r = score_guess(Outcome::Tie, &five, &other_five, 0.0999);
        assert!(r.bonus);
        assert_eq!(r.delta, BONUS_POINTS);
    }

    #[test]
    fn wrong_guess_never_scores() {
        let low = Card::new(Rank::Two, Suit::Spade);
        let joker = Card::joker(Rank::BigJoker);
        for p in [0.0, 0.05, 0.5, 1.0] {
            let r = score_guess(Outcome::Lower, &low, &joker, p);
            assert!(!r.correct);
            assert_eq!(r.delta, 0);
            assert!(!r.bonus);
        }
    }

    #[test]
    fn outcome_between_uses_values() {
        let k = Card::new(Rank::King, Suit::Heart);
        let little = Card::joker(Rank::LittleJoker);
        assert_eq!(Outcome::between(&little, &k), Outcome::Higher);
        assert_eq!(Outcome::between(&k, &little), Outcome::Lower);
        assert_eq!(Outcome::between(&k, &Card::new(Rank::King, Suit::Club)), Outcome::Tie);
    }
}
