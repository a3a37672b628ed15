use dicehall_game::{SimConfig, Strategy, run_simulation};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const ROUNDS: u32 = 2_000;

fn run_with(seed: u64, cfg: &SimConfig) -> dicehall_game::SimulationResult {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    run_simulation(cfg, &mut rng, None).expect("valid config")
}

#[test]
fn attempts_across_strategies_account_for_every_round() {
    let cfg = SimConfig {
        total_rounds: ROUNDS,
        ..SimConfig::default()
    };
    let result = run_with(7, &cfg);

    let attempts: u64 = result.strategies.iter().map(|(_, s)| s.attempts).sum();
    assert_eq!(attempts, u64::from(ROUNDS));
    assert_eq!(result.total_wins + result.total_losses, u64::from(ROUNDS));
}

#[test]
fn every_win_rate_series_is_aligned_to_the_round_axis() {
    let cfg = SimConfig {
        total_rounds: ROUNDS,
        ..SimConfig::default()
    };
    let result = run_with(21, &cfg);

    for (strategy, stats) in result.strategies.iter() {
        assert_eq!(
            stats.win_rate_series.len(),
            ROUNDS as usize,
            "{strategy} series misaligned"
        );
        assert!(
            stats
                .win_rate_series
                .iter()
                .all(|r| (0.0..=100.0).contains(r)),
            "{strategy} rate outside 0..=100"
        );
    }
}

#[test]
fn streak_lengths_account_for_every_losing_round() {
    let cfg = SimConfig {
        total_rounds: ROUNDS,
        ..SimConfig::default()
    };
    let result = run_with(3, &cfg);

    assert!(result.losing_streaks.iter().all(|&s| s >= 1));
    let streak_sum: u64 = result.losing_streaks.iter().map(|&s| u64::from(s)).sum();
    assert_eq!(streak_sum, result.total_losses);
}

#[test]
fn stakes_transfer_symmetrically_when_no_bankruptcy_occurs() {
    // A balance far above anything ROUNDS rounds can lose keeps the run
    // reset-free, so every appended pair mirrors a single wager flow.
    let cfg = SimConfig {
        total_rounds: ROUNDS,
        starting_balance: 100_000_000,
        ..SimConfig::default()
    };
    let result = run_with(13, &cfg);

    assert_eq!(result.games_played, 1);
    assert_eq!(result.player_series.len(), ROUNDS as usize + 1);
    assert_eq!(result.broker_series.len(), ROUNDS as usize + 1);

    let total = result.player_series[0] + result.broker_series[0];
    for i in 1..result.player_series.len() {
        let player_delta = result.player_series[i] - result.player_series[i - 1];
        let broker_delta = result.broker_series[i] - result.broker_series[i - 1];
        assert_eq!(player_delta, -broker_delta, "asymmetric transfer at {i}");
        assert_eq!(
            result.player_series[i] + result.broker_series[i],
            total,
            "wealth leaked at {i}"
        );
    }
}

#[test]
fn bankruptcy_resets_reseed_the_player_and_extend_the_series() {
    // A balance equal to the wager bankrupts fast; wins can still lift it
    // above the wager, so the reset count comes from the series itself:
    // every point at or below zero is immediately followed by a re-seed.
    let cfg = SimConfig {
        total_rounds: 500,
        base_wager: 100,
        starting_balance: 100,
        ..SimConfig::default()
    };
    let result = run_with(11, &cfg);

    let resets = result.player_series.iter().filter(|&&b| b <= 0).count();
    assert_eq!(result.games_played as usize, resets + 1);
    assert_eq!(result.player_series.len(), 500 + 1 + resets);
    assert_eq!(result.broker_series.len(), result.player_series.len());
    assert!(resets > 0, "seed 11 should produce at least one bankruptcy");

    // Each reset point re-seeds the player while the broker holds still.
    for i in 1..result.player_series.len() {
        if result.player_series[i - 1] <= 0 {
            assert_eq!(result.player_series[i], 100);
            assert_eq!(result.broker_series[i], result.broker_series[i - 1]);
        }
    }
}

#[test]
fn strategy_table_exposes_only_known_strategies() {
    let cfg = SimConfig {
        total_rounds: 100,
        ..SimConfig::default()
    };
    let result = run_with(5, &cfg);
    let listed: Vec<Strategy> = result.strategies.iter().map(|(s, _)| s).collect();
    assert_eq!(listed, Strategy::ALL);
}
