use highlow_cli::logging::TestLogSubscriber;
use highlow_engine::game::GameSession;
use highlow_engine::rules::Outcome;
use tracing::Level;
use tracing_subscriber::Registry;
use tracing_subscriber::layer::SubscriberExt;

#[test]
fn rejected_and_scored_operations_are_traced() {
    let capture = TestLogSubscriber::new();
    let registry = Registry::default().with(capture.clone().into_layer());

    tracing::subscriber::with_default(registry, || {
        let mut game = GameSession::new(Some(3));
        game.new_game().unwrap();
        assert!(game.submit_guess(Outcome::Higher).is_err());
        game.reveal_computer_card().unwrap();
        game.submit_guess(Outcome::Higher).unwrap();
    });

    let entries = capture.entries();
    let rejected = entries
        .iter()
        .find(|e| e.message == "rejected operation")
        .expect("warn event for the early guess");
    assert_eq!(rejected.level, Level::WARN);
    assert!(
        rejected
            .fields
            .iter()
            .any(|(k, v)| k == "state" && v == "dealing")
    );

    let scored = entries
        .iter()
        .find(|e| e.message == "guess scored")
        .expect("info event for the guess");
    assert_eq!(scored.level, Level::INFO);
    assert!(scored.fields.iter().any(|(k, v)| k == "round" && v == "1"));
}
