use highlow_engine::game::{GameSession, RoundState};
use highlow_engine::rules::Outcome;

#[test]
fn new_session_starts_idle_with_zero_score() {
    let game = GameSession::new(Some(1234));
    assert_eq!(game.round_state(), RoundState::Idle);
    assert_eq!(game.score(), 0);
    assert_eq!(game.deck().remaining().len(), 54);
    assert_eq!(game.seed(), 1234);
}

#[test]
fn same_seed_produces_deterministic_deal_order() {
    let mut g1 = GameSession::new(Some(42));
    let mut g2 = GameSession::new(Some(42));
    g1.new_game().unwrap();
    g2.new_game().unwrap();
    assert_eq!(g1.computer_card(), g2.computer_card());
    assert_eq!(g1.player_card(), g2.player_card());
    assert_eq!(g1.deck().remaining(), g2.deck().remaining());
}

#[test]
fn scoring_is_deterministic_for_a_fixed_deck() {
    let run = || {
        let mut g = GameSession::new(Some(600));
        g.new_game().unwrap();
        g.reveal_computer_card().unwrap();
        let hint = g.hint();
        (hint, g.submit_guess(Outcome::Higher).unwrap())
    };
    assert_eq!(run(), run());
}

#[test]
fn unseeded_session_remembers_its_seed() {
    let g = GameSession::new(None);
    let mut replay = GameSession::new(Some(g.seed()));
    let mut original = g;
    original.new_game().unwrap();
    replay.new_game().unwrap();
    assert_eq!(original.player_card(), replay.player_card());
}

#[test]
fn instructions_describe_scoring() {
    let game = GameSession::new(Some(1));
    let text = game.instructions().join("\n");
    assert!(text.contains("HIGHER"));
    assert!(text.contains("+100 BONUS"));
}
