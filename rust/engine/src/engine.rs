use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::RoundState;
use crate::probability::{estimate, Odds};
use crate::rules::{score_guess, GuessResult, Outcome};

/// Cards dealt to start a round: the computer's, then the player's.
pub const CARDS_PER_ROUND: usize = 2;

/// A guess after scoring, with the probability it was scored against.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScoredGuess {
    pub guess: Outcome,
    pub result: GuessResult,
    /// Probability of the guessed outcome before the player's card was revealed
    pub probability: f64,
}

/// Runs a single round on a shared deck: deals the pair, turns the
/// computer's card, takes one guess and turns the player's card.
///
/// The round holds copies of its two cards; the deck stays the owner of
/// their face-up/face-down state.
///
/// # Examples
///
/// ```
/// use highlow_engine::deck::Deck;
/// use highlow_engine::engine::RoundEngine;
/// use highlow_engine::rules::Outcome;
///
/// let mut deck = Deck::new_with_seed(12345);
/// deck.shuffle();
///
/// let mut round = RoundEngine::deal(&mut deck).unwrap();
/// round.reveal_computer(&mut deck).unwrap();
/// let hint = round.odds(&deck);
/// assert_eq!(hint.remaining, 53);
///
/// let scored = round.submit_guess(&mut deck, Outcome::Higher).unwrap();
/// assert_eq!(scored.result.correct, round.actual_outcome() == Outcome::Higher);
/// assert!(deck.is_revealed(round.player_card()));
/// ```
#[derive(Debug, Clone)]
pub struct RoundEngine {
    /// Dealt first, revealed before the guess
    computer: Card,
    /// Dealt second, hidden until the guess
    player: Card,
    /// Filled once the single guess of the round is scored
    scored: Option<ScoredGuess>,
}

impl RoundEngine {
    pub fn deal(deck: &mut Deck) -> Result<Self, GameError> {
        let dealt = deck.deal(CARDS_PER_ROUND)?;
        let (computer, player) = (dealt[0], dealt[1]);
        tracing::debug!(
            computer = %computer,
            player = %player,
            remaining = deck.remaining().len(),
            "dealt round pair"
        );
        Ok(Self {
            computer,
            player,
            scored: None,
        })
    }

    pub fn computer_card(&self) -> &Card {
        &self.computer
    }

    pub fn player_card(&self) -> &Card {
        &self.player
    }

    pub fn scored(&self) -> Option<&ScoredGuess> {
        self.scored.as_ref()
    }

    pub fn actual_outcome(&self) -> Outcome {
        Outcome::between(&self.player, &self.computer)
    }

    pub fn reveal_computer(&self, deck: &mut Deck) -> Result<(), GameError> {
        deck.reveal(&self.computer)?;
        tracing::debug!(computer = %self.computer, "computer card revealed");
        Ok(())
    }

    /// Odds of the player's card against the computer's at this moment.
    pub fn odds(&self, deck: &Deck) -> Odds {
        estimate(Some(&self.computer), Some(&self.player), deck)
    }

    /// Scores `guess`, then reveals the player's card.
    ///
    /// The computer's card must already be face-up. The odds are taken from
    /// the deck as it stands before the reveal.
    pub fn submit_guess(&mut self, deck: &mut Deck, guess: Outcome) -> Result<ScoredGuess, GameError> {
        if !deck.is_revealed(&self.computer) {
            return Err(GameError::InvalidStateTransition {
                operation: "submit a guess",
                state: RoundState::Dealing,
            });
        }
        let probability = self.odds(deck).probability_of(guess);
        deck.reveal(&self.player)?;
        let result = score_guess(guess, &self.computer, &self.player, probability);
        let scored = ScoredGuess {
            guess,
            result,
            probability,
        };
        self.scored = Some(scored);
        Ok(scored)
    }
}
