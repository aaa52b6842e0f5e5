use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::{Deck, ShuffleReport};
use crate::engine::{RoundEngine, CARDS_PER_ROUND};
use crate::errors::GameError;
use crate::logger::RoundRecord;
use crate::probability::Odds;
use crate::rules::{self, GuessResult, Outcome};

/// Where the session is in its round cycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundState {
    /// No game started yet
    Idle,
    /// Pair dealt face-down, waiting for the computer card to be turned
    Dealing,
    /// Computer card face-up, waiting for the player's guess
    WaitingGuess,
    /// Guess scored and both cards face-up
    Revealing,
    /// Fewer than two cards left to deal
    GameOver,
}

impl RoundState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundState::Idle => "idle",
            RoundState::Dealing => "dealing",
            RoundState::WaitingGuess => "waiting_guess",
            RoundState::Revealing => "revealing",
            RoundState::GameOver => "game_over",
        }
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A card on the table together with whether it is face-up.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatCard {
    pub card: Card,
    pub revealed: bool,
}

/// Read-only snapshot of the session for presentation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    pub state: RoundState,
    pub score: u32,
    /// Number of the current round, 0 before the first deal
    pub round: u32,
    pub computer_card: Option<SeatCard>,
    pub player_card: Option<SeatCard>,
    pub remaining: usize,
    pub dealt_unrevealed: usize,
    pub revealed: usize,
}

/// A single-player high-low game: the owner of the deck, the score and the
/// round state machine.
///
/// The session never reads a clock. The caller decides when to turn the
/// computer card ([`GameSession::reveal_computer_card`]) and when to move on
/// after a result ([`GameSession::advance`]).
///
/// # Examples
///
/// ```
/// use highlow_engine::game::{GameSession, RoundState};
/// use highlow_engine::rules::Outcome;
///
/// let mut game = GameSession::new(Some(42));
/// game.new_game().unwrap();
/// assert_eq!(game.round_state(), RoundState::Dealing);
///
/// game.reveal_computer_card().unwrap();
/// let hint = game.hint();
/// let result = game.submit_guess(hint.most_likely()).unwrap();
/// assert_eq!(game.score(), result.delta);
///
/// while game.advance().unwrap() != RoundState::GameOver {
///     game.reveal_computer_card().unwrap();
///     game.submit_guess(Outcome::Higher).unwrap();
/// }
/// assert!(game.deck().remaining().len() < 2);
/// ```
#[derive(Debug)]
pub struct GameSession {
    deck: Deck,
    /// Seed of the deck generator, kept for reproduction
    seed: u64,
    state: RoundState,
    score: u32,
    round: Option<RoundEngine>,
    round_no: u32,
    last_shuffle: Option<ShuffleReport>,
    last_result: Option<GuessResult>,
    history: Vec<RoundRecord>,
}

impl GameSession {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            deck: Deck::new_with_seed(seed),
            seed,
            state: RoundState::Idle,
            score: 0,
            round: None,
            round_no: 0,
            last_shuffle: None,
            last_result: None,
            history: Vec::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn round_state(&self) -> RoundState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn computer_card(&self) -> Option<&Card> {
        self.round.as_ref().map(RoundEngine::computer_card)
    }

    pub fn player_card(&self) -> Option<&Card> {
        self.round.as_ref().map(RoundEngine::player_card)
    }

    pub fn last_shuffle(&self) -> Option<&ShuffleReport> {
        self.last_shuffle.as_ref()
    }

    pub fn last_result(&self) -> Option<&GuessResult> {
        self.last_result.as_ref()
    }

    /// Scored rounds of the current game, oldest first.
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Starts a fresh game: full shuffled deck, zero score, first pair dealt.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        self.require(&[RoundState::Idle, RoundState::GameOver], "start a new game")?;
        self.deck.initialize();
        self.deck.shuffle();
        self.score = 0;
        self.round = None;
        self.round_no = 0;
        self.last_shuffle = None;
        self.last_result = None;
        self.history.clear();
        self.state = RoundState::Idle;
        tracing::info!(seed = self.seed, "new game");
        self.deal_round()
    }

    pub fn reveal_computer_card(&mut self) -> Result<(), GameError> {
        self.require(&[RoundState::Dealing], "reveal the computer card")?;
        let round = self
            .round
            .as_ref()
            .ok_or(GameError::InvalidStateTransition {
                operation: "reveal the computer card",
                state: self.state,
            })?;
        round.reveal_computer(&mut self.deck)?;
        self.state = RoundState::WaitingGuess;
        Ok(())
    }

    /// Shuffles what is left of the draw pile. `None` when it is empty.
    pub fn shuffle(&mut self) -> Result<Option<ShuffleReport>, GameError> {
        self.require(&[RoundState::WaitingGuess], "shuffle")?;
        let report = self.deck.shuffle();
        Ok(self.keep_shuffle(report))
    }

    /// [`GameSession::shuffle`] with a caller-supplied random source.
    pub fn shuffle_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<ShuffleReport>, GameError> {
        self.require(&[RoundState::WaitingGuess], "shuffle")?;
        let report = self.deck.shuffle_with(rng);
        Ok(self.keep_shuffle(report))
    }

    /// Takes the round's single guess, reveals the player's card and scores it.
    pub fn submit_guess(&mut self, guess: Outcome) -> Result<GuessResult, GameError> {
        self.require(&[RoundState::WaitingGuess], "submit a guess")?;
        let round = self
            .round
            .as_mut()
            .ok_or(GameError::InvalidStateTransition {
                operation: "submit a guess",
                state: self.state,
            })?;
        let scored = round.submit_guess(&mut self.deck, guess)?;
        let (computer, player) = (*round.computer_card(), *round.player_card());

        self.score += scored.result.delta;
        self.last_result = Some(scored.result);
        self.state = RoundState::Revealing;
        tracing::info!(
            round = self.round_no,
            guess = %guess,
            computer = %computer,
            player = %player,
            correct = scored.result.correct,
            delta = scored.result.delta,
            bonus = scored.result.bonus,
            score = self.score,
            "guess scored"
        );
        self.history.push(RoundRecord {
            round: self.round_no,
            seed: self.seed,
            computer,
            player,
            guess,
            probability: scored.probability,
            result: scored.result,
            score: self.score,
            ts: None,
        });
        Ok(scored.result)
    }

    /// Moves past a displayed result: deals the next pair, or ends the game
    /// when fewer than two cards remain. Returns the new state.
    pub fn advance(&mut self) -> Result<RoundState, GameError> {
        self.require(&[RoundState::Revealing], "advance")?;
        if self.deck.remaining().len() >= CARDS_PER_ROUND {
            self.deal_round()?;
        } else {
            self.state = RoundState::GameOver;
            tracing::info!(
                score = self.score,
                rounds = self.round_no,
                remaining = self.deck.remaining().len(),
                "game over"
            );
        }
        Ok(self.state)
    }

    /// Current odds for the player's card; zeroed until the computer card
    /// of a dealt pair is face-up.
    pub fn hint(&self) -> Odds {
        match &self.round {
            Some(round) if self.deck.is_revealed(round.computer_card()) => round.odds(&self.deck),
            _ => Odds::zeroed(),
        }
    }

    pub fn instructions(&self) -> &'static [&'static str] {
        rules::instructions()
    }

    pub fn state(&self) -> GameView {
        let seat = |card: Option<&Card>| {
            card.map(|c| SeatCard {
                card: *c,
                revealed: self.deck.is_revealed(c),
            })
        };
        GameView {
            state: self.state,
            score: self.score,
            round: self.round_no,
            computer_card: seat(self.computer_card()),
            player_card: seat(self.player_card()),
            remaining: self.deck.remaining().len(),
            dealt_unrevealed: self.deck.dealt_unrevealed().len(),
            revealed: self.deck.revealed_history().len(),
        }
    }

    fn deal_round(&mut self) -> Result<(), GameError> {
        let round = RoundEngine::deal(&mut self.deck)?;
        self.round = Some(round);
        self.round_no += 1;
        self.state = RoundState::Dealing;
        Ok(())
    }

    fn keep_shuffle(&mut self, report: Option<ShuffleReport>) -> Option<ShuffleReport> {
        if report.is_some() {
            self.last_shuffle = report.clone();
        }
        report
    }

    fn require(&self, allowed: &[RoundState], operation: &'static str) -> Result<(), GameError> {
        if allowed.contains(&self.state) {
            return Ok(());
        }
        tracing::warn!(state = %self.state, operation, "rejected operation");
        Err(GameError::InvalidStateTransition {
            operation,
            state: self.state,
        })
    }
}
