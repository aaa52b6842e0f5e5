//! Text rendering of the table, hints, results and shuffle reports.
//!
//! Pure functions over engine values; the `play` and `sim` commands decide
//! where the text goes.
//!
//! ## Example
//!
//! ```rust
//! use highlow_engine::cards::{Card, Rank, Suit};
//! use highlow_engine::game::SeatCard;
//! use highlow_cli::formatters::format_seat;
//!
//! let card = Card::new(Rank::King, Suit::Spade);
//! assert_eq!(format_seat(Some(&SeatCard { card, revealed: true })), "[♠K]");
//! assert_eq!(format_seat(Some(&SeatCard { card, revealed: false })), "[??]");
//! ```

use highlow_engine::deck::ShuffleReport;
use highlow_engine::game::{GameView, SeatCard};
use highlow_engine::probability::Odds;
use highlow_engine::rules::GuessResult;

/// A face-up card shows its symbol and name, a face-down card `??`.
pub fn format_seat(seat: Option<&SeatCard>) -> String {
    match seat {
        Some(s) if s.revealed => format!("[{}]", s.card),
        Some(_) => "[??]".to_string(),
        None => "[  ]".to_string(),
    }
}

pub fn format_table(view: &GameView) -> String {
    format!(
        "Round {} | Score: {} | Computer {} | You {} | Deck: {}",
        view.round,
        view.score,
        format_seat(view.computer_card.as_ref()),
        format_seat(view.player_card.as_ref()),
        view.remaining
    )
}

/// Probability lines as shown in the hint dialog.
pub fn format_odds(odds: &Odds) -> Vec<String> {
    vec![
        format!("Higher: {:.1}%", odds.higher * 100.0),
        format!("Lower: {:.1}%", odds.lower * 100.0),
        format!("Tie: {:.1}%", odds.tie * 100.0),
        format!("Remaining cards: {}", odds.remaining),
    ]
}

pub fn format_result(result: &GuessResult) -> String {
    if !result.correct {
        "Missed. +0 Points".to_string()
    } else if result.bonus {
        format!("BONUS! +{} Points!", result.delta)
    } else {
        format!("Correct! +{} Points", result.delta)
    }
}

pub fn format_shuffle(report: &ShuffleReport) -> Vec<String> {
    vec![
        format!(
            "Cards shuffled. Remaining cards: {}",
            report.total_remaining
        ),
        format!(
            "Before shuffle (first {}): {}",
            report.previous_order.len(),
            report.previous_order.join(", ")
        ),
        format!(
            "After shuffle (first {}): {}",
            report.current_order.len(),
            report.current_order.join(", ")
        ),
    ]
}
