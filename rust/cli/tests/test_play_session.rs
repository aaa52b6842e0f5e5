use highlow_cli::run_with_input;
use std::io::Cursor;

fn play(seed: u64, input: &str) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(input.to_string());
    let seed = seed.to_string();
    let code = run_with_input(
        [
            "highlow",
            "play",
            "--seed",
            seed.as_str(),
            "--reveal-delay-ms",
            "0",
            "--result-delay-ms",
            "0",
        ],
        &mut out,
        &mut err,
        &mut stdin,
    );
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn computer_card_is_shown_and_player_card_hidden() {
    let (code, out, _) = play(21, "q\n");
    assert_eq!(code, 0);
    let table = out
        .lines()
        .find(|l| l.contains("Round 1 |"))
        .expect("table line");
    assert!(table.contains("You [??]"));
    assert!(!table.contains("Computer [??]"));
    assert!(table.ends_with("Deck: 52"));
}

#[test]
fn guess_shows_result_and_next_round() {
    let (code, out, err) = play(22, "h\nq\n");
    assert_eq!(code, 0, "{err}");
    assert!(
        out.contains("Correct! +10 Points")
            || out.contains("BONUS! +100 Points!")
            || out.contains("Missed. +0 Points")
    );
    assert!(out.contains("Round 2 |"));
}

#[test]
fn shuffle_reports_orders_and_help_prints_rules() {
    let (code, out, err) = play(23, "shuffle\nhelp\nq\n");
    assert_eq!(code, 0);
    assert!(err.is_empty(), "{err}");
    assert!(out.contains("Cards shuffled. Remaining cards: 52"));
    assert!(out.contains("Before shuffle (first 10): "));
    assert!(out.contains("After shuffle (first 10): "));
    assert!(out.contains("HOW TO PLAY:"));
}

#[test]
fn full_game_ends_with_congratulations_and_restarts() {
    let mut input = "t\n".repeat(27);
    input.push_str("h\nnew\nq\n");
    let (code, out, err) = play(24, &input);
    assert_eq!(code, 0);
    assert!(out.contains("Round 27 |"));
    assert!(!out.contains("Round 28 |"));
    assert!(out.contains("Congratulations! Final Score: "));
    assert!(err.contains("Cannot submit a guess while game_over"));
    assert!(out.contains("New game started"));
    // result and reveal of the first game, reveal of the second
    assert_eq!(out.matches("Round 1 |").count(), 3);
}
