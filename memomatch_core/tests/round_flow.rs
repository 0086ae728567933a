#[cfg(test)]
mod tests {
    use memomatch_core::logic::board::SYMBOL_POOL;
    use memomatch_core::logic::game::{
        format_clock, FlipOutcome, GameState, RoundAction, RoundStatus,
    };
    use memomatch_core::logic::level::Level;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn seeded_game(seed: u64) -> (GameState, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let game = GameState::with_rng(&mut rng);
        (game, rng)
    }

    /// Flips both halves of every remaining pair, symbol by symbol.
    fn clear_the_board(game: &mut GameState) {
        loop {
            let Some(target) = game
                .cards
                .iter()
                .position(|card| !card.matched)
                .map(|i| game.cards[i].symbol)
            else {
                break;
            };
            let indices: Vec<usize> = game
                .cards
                .iter()
                .enumerate()
                .filter(|(_, card)| card.symbol == target && !card.matched)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(indices.len(), 2, "symbol {target} is not paired");

            game.flip(indices[0]).unwrap();
            let outcome = game.flip(indices[1]).unwrap();
            assert!(matches!(outcome, FlipOutcome::Matched { .. }));
        }
    }

    // Scenario A: level 1 is a 3x4 board with 6 pairs and a 60 second clock.
    #[test]
    fn level_one_round_setup() {
        let (game, _) = seeded_game(11);

        assert_eq!(game.level, Level::Level1);
        assert_eq!(game.level.config().rows, 3);
        assert_eq!(game.level.config().cols, 4);
        assert_eq!(game.cards.len(), 12);
        assert_eq!(game.total_pairs(), 6);
        assert_eq!(game.time_left, 60);
        assert_eq!(format_clock(game.time_left), "01:00");
        assert_eq!(game.status, RoundStatus::Playing);
        assert_eq!(game.action(), RoundAction::Restart);

        let mut counts: HashMap<char, usize> = HashMap::new();
        for card in &game.cards {
            *counts.entry(card.symbol).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|&n| n == 2));
        assert!(counts.keys().all(|s| SYMBOL_POOL.contains(s)));
    }

    // Scenario B: clearing the board before the clock runs out wins the
    // round, and level 1 offers "next level".
    #[test]
    fn winning_level_one_offers_the_next_level() {
        let (mut game, _) = seeded_game(12);

        clear_the_board(&mut game);

        assert_eq!(game.status, RoundStatus::Won);
        assert_eq!(game.matched_pairs, game.total_pairs());
        assert_eq!(game.action(), RoundAction::NextLevel);
        assert!(game.time_left > 0);
    }

    // Scenario C: a timeout locks the board and a retry replays the same
    // level with the same configuration.
    #[test]
    fn timeout_retries_the_same_level() {
        let (mut game, mut rng) = seeded_game(13);

        while game.status == RoundStatus::Playing {
            game.tick();
        }

        assert_eq!(game.status, RoundStatus::TimeUp);
        assert!(game.locked);
        assert_eq!(game.action(), RoundAction::TryAgain);

        game.advance(&mut rng);

        assert_eq!(game.level, Level::Level1);
        assert_eq!(game.cards.len(), 12);
        assert_eq!(game.time_left, 60);
        assert_eq!(game.status, RoundStatus::Playing);
        assert!(!game.locked);
        assert_eq!(game.matched_pairs, 0);
    }

    // Scenario D: completing the terminal 6x6 level leaves the game finished
    // with no further activation.
    #[test]
    fn completing_the_final_level_is_terminal() {
        let (mut game, mut rng) = seeded_game(14);

        for expected in 1..=5 {
            assert_eq!(game.level.number(), expected);
            clear_the_board(&mut game);
            if expected < 5 {
                assert_eq!(game.action(), RoundAction::NextLevel);
                game.advance(&mut rng);
            }
        }

        assert_eq!(game.level, Level::Level5);
        assert_eq!(game.level.config().rows, 6);
        assert_eq!(game.level.config().cols, 6);
        assert_eq!(game.status, RoundStatus::Won);
        assert_eq!(game.action(), RoundAction::Finished);

        let snapshot = game.clone();
        game.advance(&mut rng);
        assert_eq!(game, snapshot);
    }

    // Restarting mid-round keeps the level and rebuilds everything else.
    #[test]
    fn restart_resets_the_round_in_place() {
        let (mut game, mut rng) = seeded_game(15);

        let first_unmatched = game
            .cards
            .iter()
            .position(|card| !card.matched)
            .unwrap_or_default();
        game.flip(first_unmatched).unwrap();
        game.tick();

        assert_eq!(game.action(), RoundAction::Restart);
        game.advance(&mut rng);

        assert_eq!(game.level, Level::Level1);
        assert_eq!(game.first, None);
        assert_eq!(game.second, None);
        assert_eq!(game.matched_pairs, 0);
        assert_eq!(game.time_left, 60);
        assert!(game.cards.iter().all(|card| !card.face_up()));
    }

    // The countdown never goes below zero and later ticks change nothing.
    #[test]
    fn expired_clock_is_stable() {
        let (mut game, _) = seeded_game(16);

        for _ in 0..200 {
            game.tick();
        }

        assert_eq!(game.time_left, 0);
        assert_eq!(format_clock(game.time_left), "00:00");
        assert_eq!(game.status, RoundStatus::TimeUp);
    }

    // Advancing levels grows the board according to the fixed table.
    #[test]
    fn level_progression_follows_the_table() {
        let (mut game, mut rng) = seeded_game(17);
        let expected = [(3, 4, 60), (4, 4, 80), (4, 5, 100), (5, 6, 150), (6, 6, 180)];

        for &(rows, cols, time) in &expected {
            let config = game.level.config();
            assert_eq!((config.rows, config.cols, config.time_limit), (rows, cols, time));
            assert_eq!(game.cards.len(), rows * cols);
            assert_eq!(game.time_left, time);

            clear_the_board(&mut game);
            game.advance(&mut rng);
        }
    }
}
