//! Full games between the built-in strategies.

use arena_tictactoe::{
    Agent, GameState, Mark, MatchRunner, OptimalSearchStrategy, Outcome, RandomStrategy,
    RngPicker, Strategy, StrategyKind, Tally, TournamentObserver, TournamentRunner,
    TranscriptObserver, GameRecord, rules,
};

#[test]
fn test_optimal_vs_optimal_draws() {
    let mut x = OptimalSearchStrategy::new(Mark::X);
    let mut o = OptimalSearchStrategy::new(Mark::O);
    let (outcome, state) = MatchRunner::new().run_to_end(&mut x, &mut o).unwrap();
    assert_eq!(outcome, Outcome::Draw);
    assert_eq!(state.occupied_count(), 9);
}

#[test]
fn test_optimal_vs_optimal_replays_identically() {
    let play = || {
        let mut x = OptimalSearchStrategy::new(Mark::X);
        let mut o = OptimalSearchStrategy::new(Mark::O);
        let mut runner = MatchRunner::with_observer(TranscriptObserver::new());
        runner.run(&mut x, &mut o).unwrap();
        runner.into_observer().indices()
    };
    let first = play();
    assert_eq!(first[0], 0);
    assert_eq!(play(), first);
}

#[test]
fn test_optimal_never_loses_to_random() {
    for seed in 0..12u64 {
        let optimal_mark = if seed % 2 == 0 { Mark::X } else { Mark::O };
        let mut optimal = OptimalSearchStrategy::new(optimal_mark);
        let mut random = RandomStrategy::new(optimal_mark.opponent(), RngPicker::seeded(seed));
        let mut runner = MatchRunner::new();
        let outcome = match optimal_mark {
            Mark::X => runner.run(&mut optimal, &mut random),
            Mark::O => runner.run(&mut random, &mut optimal),
        }
        .unwrap();
        assert_ne!(
            outcome,
            Outcome::Win(optimal_mark.opponent()),
            "seed {seed}: random beat minimax"
        );
    }
}

#[derive(Debug, Default)]
struct ReplyLines {
    games: usize,
    losses: usize,
}

/// Follows minimax's reply to every possible opponent move until each game ends.
fn explore_replies(optimal: &mut OptimalSearchStrategy, state: GameState, lines: &mut ReplyLines) {
    let outcome = rules::outcome(&state);
    if outcome.is_finished() {
        lines.games += 1;
        if outcome == Outcome::Win(optimal.opponent()) {
            lines.losses += 1;
        }
        return;
    }

    if state.turn() == optimal.mark() {
        let index = optimal.choose_move(&state).unwrap();
        explore_replies(optimal, state.apply_move(index).unwrap(), lines);
    } else {
        for index in state.legal_moves() {
            explore_replies(optimal, state.apply_move(index).unwrap(), lines);
        }
    }
}

#[test]
fn test_optimal_never_loses_to_any_opponent() {
    for mark in [Mark::X, Mark::O] {
        let mut optimal = OptimalSearchStrategy::new(mark);
        let mut lines = ReplyLines::default();
        explore_replies(&mut optimal, GameState::new(), &mut lines);
        assert!(lines.games > 0);
        assert_eq!(lines.losses, 0, "minimax as {mark} lost: {lines:?}");
    }
}

#[test]
fn test_random_vs_random_finishes() {
    for seed in 0..50u64 {
        let mut x = Agent::new(StrategyKind::Random, Mark::X, RngPicker::seeded(seed));
        let mut o = Agent::new(StrategyKind::Random, Mark::O, RngPicker::seeded(seed + 1000));
        let (outcome, state) = MatchRunner::new().run_to_end(&mut x, &mut o).unwrap();
        assert!(outcome.is_finished());
        assert_eq!(rules::outcome(&state), outcome);
    }
}

#[test]
fn test_tournament_of_ten() {
    let tally = TournamentRunner::new(RngPicker::seeded(2024)).run(10).unwrap();
    assert_eq!(tally.total(), 10);
    assert_eq!(*tally.random_wins(), 0);
    assert_eq!(
        *tally.optimal_wins() + *tally.draws(),
        10,
        "unexpected tally: {:?}",
        tally
    );
}

#[derive(Default)]
struct Seats {
    records: Vec<GameRecord>,
    names: Vec<(String, String)>,
}

impl TournamentObserver for Seats {
    fn on_game_start(&mut self, _game: usize, x_name: &str, o_name: &str) {
        self.names.push((x_name.to_string(), o_name.to_string()));
    }

    fn on_game_end(&mut self, record: &GameRecord) {
        self.records.push(*record);
    }
}

#[test]
fn test_tournament_alternates_seats() {
    let mut seats = Seats::default();
    let tally = TournamentRunner::with_observer(RngPicker::seeded(9), &mut seats)
        .run(4)
        .unwrap();

    let marks: Vec<Mark> = seats.records.iter().map(|r| *r.optimal_mark()).collect();
    assert_eq!(marks, vec![Mark::X, Mark::O, Mark::X, Mark::O]);
    assert_eq!(seats.names[0].0, "Minimax Agent (X)");
    assert_eq!(seats.names[1].0, "Random Agent (X)");

    let mut replayed = Tally::default();
    for record in &seats.records {
        replayed.record(record).unwrap();
    }
    assert_eq!(replayed, tally);
}

#[test]
fn test_every_finished_game_matches_rules() {
    let mut x = Agent::new(StrategyKind::Optimal, Mark::X, RngPicker::seeded(3));
    let mut o = Agent::new(StrategyKind::Random, Mark::O, RngPicker::seeded(3));
    let mut transcript = TranscriptObserver::new();
    let (outcome, state) = MatchRunner::with_observer(&mut transcript)
        .run_to_end(&mut x, &mut o)
        .unwrap();
    let replayed = GameState::replay(&transcript.indices()).unwrap();
    assert_eq!(replayed, state);
    assert_eq!(rules::outcome(&replayed), outcome);
}
