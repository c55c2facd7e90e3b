//! Integration test: Jungle Run simulation
//!
//! Drives the simulation through whole-run scenarios: no-input progression,
//! jump arcs, forced collisions, the goal approach, reset, and determinism.

use jungle_run::game::logic::PHYSICS_TICK_MS;
use jungle_run::game::types::{
    Collectible, CollectibleKind, Obstacle, GOAL_SPAWN_DISTANCE, GROUND_Y, ITEM_BAND_TOP_MIN,
    LEVEL_LENGTH, PLAYER_X,
};
use jungle_run::{process_input, tick_run, Difficulty, RunOutcome, RunnerGame, RunnerInput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A run that has already been started (skips the "Press Space" screen).
fn started_game(difficulty: Difficulty) -> RunnerGame {
    let mut game = RunnerGame::new(difficulty);
    game.waiting_to_start = false;
    game
}

/// Advance the simulation by `n` physics ticks.
fn tick_n(game: &mut RunnerGame, rng: &mut ChaCha8Rng, n: u32) {
    for _ in 0..n {
        tick_run(game, PHYSICS_TICK_MS, rng);
    }
}

// =============================================================================
// Progression scenarios
// =============================================================================

#[test]
fn test_no_input_run_reaches_first_milestone() {
    let mut game = started_game(Difficulty::Normal);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    // 100 ticks at the Normal base speed of 5 px/tick
    tick_n(&mut game, &mut rng, 100);

    assert!((game.distance - 500.0).abs() < f64::EPSILON);
    assert!(
        (game.scroll_speed - 5.5).abs() < f64::EPSILON,
        "Speed should have incremented exactly once at the 500 milestone"
    );
    assert!(game.outcome.is_none());
    assert!(game.is_grounded(), "No input means no jumps");
}

#[test]
fn test_distance_is_monotone_while_running() {
    let mut game = started_game(Difficulty::Easy);
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut last_distance = 0.0;

    for _ in 0..500 {
        tick_run(&mut game, PHYSICS_TICK_MS, &mut rng);
        // Keep the run alive: the test drives a perfect dodge
        game.obstacles.clear();
        assert!(game.distance >= last_distance);
        last_distance = game.distance;
    }
}

#[test]
fn test_scroll_speed_reaches_cap_and_stays_there() {
    let mut game = started_game(Difficulty::Normal);
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let cap = game.difficulty.max_scroll_speed();

    for _ in 0..8000 {
        tick_run(&mut game, PHYSICS_TICK_MS, &mut rng);
        game.obstacles.clear();
        game.goal.spawned = false; // keep the run going past the goal line
        game.goal.x = 100_000.0;
        assert!(game.scroll_speed <= cap + f64::EPSILON);
    }

    assert!((game.scroll_speed - cap).abs() < f64::EPSILON);
}

// =============================================================================
// Jump scenarios
// =============================================================================

#[test]
fn test_jump_arc_returns_to_ground() {
    let mut game = started_game(Difficulty::Normal);
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    process_input(&mut game, RunnerInput::Jump { at_ms: 0 });
    assert_eq!(game.jump_count, 1);

    // With impulse -18 and gravity +1 the arc takes exactly 35 ticks
    tick_n(&mut game, &mut rng, 34);
    assert!(game.player_y < GROUND_Y, "Still airborne after 34 ticks");

    tick_n(&mut game, &mut rng, 1);
    assert!((game.player_y - GROUND_Y).abs() < f64::EPSILON);
    assert!((game.velocity_y - 0.0).abs() < f64::EPSILON);
    assert_eq!(game.jump_count, 0);
}

#[test]
fn test_double_jump_arc_lands_and_resets() {
    let mut game = started_game(Difficulty::Normal);
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    process_input(&mut game, RunnerInput::Jump { at_ms: 0 });
    tick_n(&mut game, &mut rng, 10);
    process_input(&mut game, RunnerInput::Jump { at_ms: 160 });
    assert_eq!(game.jump_count, 2);

    let mut landed_at = None;
    for tick in 1..300 {
        tick_n(&mut game, &mut rng, 1);
        if game.is_grounded() {
            landed_at = Some(tick);
            break;
        }
    }

    assert!(landed_at.is_some(), "Double jump must land eventually");
    assert_eq!(game.jump_count, 0);
    assert!(!game.can_double_jump);
}

#[test]
fn test_double_jump_flies_higher_than_single() {
    let mut rng = ChaCha8Rng::seed_from_u64(6);

    let mut run_peak = |double: bool| -> f64 {
        let mut game = started_game(Difficulty::Normal);
        process_input(&mut game, RunnerInput::Jump { at_ms: 0 });
        let mut peak = GROUND_Y;
        for tick in 0..200 {
            if double && tick == 10 {
                process_input(&mut game, RunnerInput::Jump { at_ms: 160 });
            }
            tick_run(&mut game, PHYSICS_TICK_MS, &mut rng);
            peak = peak.min(game.player_y);
            if game.is_grounded() && tick > 2 {
                break;
            }
        }
        peak
    };

    let single_peak = run_peak(false);
    let double_peak = run_peak(true);

    assert!(
        double_peak < single_peak,
        "Double jump should reach higher (lower y): {} vs {}",
        double_peak,
        single_peak
    );
}

// =============================================================================
// Collision scenarios
// =============================================================================

#[test]
fn test_forced_obstacle_collision_ends_run() {
    let mut game = started_game(Difficulty::Normal);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    tick_n(&mut game, &mut rng, 10);

    game.obstacles.push(Obstacle { x: PLAYER_X });
    tick_n(&mut game, &mut rng, 1);

    assert!(game.game_over());
    assert!(!game.game_won());

    // Frozen afterwards: no distance, score, or tick progression
    let snapshot = game.clone();
    tick_n(&mut game, &mut rng, 50);
    assert_eq!(game, snapshot);
}

#[test]
fn test_collection_scores_and_consumes_item() {
    let mut game = started_game(Difficulty::Normal);
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    // Jump into a chocobee placed on the rising arc
    process_input(&mut game, RunnerInput::Jump { at_ms: 0 });
    game.items.push(Collectible {
        x: PLAYER_X,
        y: ITEM_BAND_TOP_MIN + 50.0,
        kind: CollectibleKind::Chocobee,
        collected: false,
    });

    tick_n(&mut game, &mut rng, 15);

    assert_eq!(game.score, 1);
    assert_eq!(game.choco_count, 1);
    assert!(
        game.items.iter().all(|i| !i.collected),
        "Collected item must not linger in the active set"
    );
}

// =============================================================================
// Goal scenarios
// =============================================================================

#[test]
fn test_goal_spawns_once_and_wins_the_run() {
    let mut game = started_game(Difficulty::Normal);
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    // Perfect-dodge driver: clear obstacles so the run reaches the end
    let mut spawn_tick = None;
    for tick in 0..20_000 {
        tick_run(&mut game, PHYSICS_TICK_MS, &mut rng);
        game.obstacles.clear();

        if game.goal.spawned && spawn_tick.is_none() {
            spawn_tick = Some(tick);
            assert!(game.distance >= GOAL_SPAWN_DISTANCE);
        }
        if game.outcome.is_some() {
            break;
        }
    }

    assert!(spawn_tick.is_some(), "Goal must spawn during a full run");
    assert_eq!(game.outcome, Some(RunOutcome::Won));
    assert!(game.distance > LEVEL_LENGTH, "The parents wait past the end");
}

#[test]
fn test_goal_advanced_onto_player_wins_next_tick() {
    let mut game = started_game(Difficulty::Normal);
    let mut rng = ChaCha8Rng::seed_from_u64(10);
    game.distance = GOAL_SPAWN_DISTANCE;
    game.next_speed_milestone = 1_000_000.0;
    game.goal.spawned = true;
    game.goal.x = PLAYER_X + 20.0;

    tick_n(&mut game, &mut rng, 1);

    assert!(game.game_won());
    assert!(!game.game_over());
}

// =============================================================================
// Reset and determinism
// =============================================================================

#[test]
fn test_reset_restores_fresh_state_after_play() {
    let mut game = started_game(Difficulty::Hard);
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    process_input(&mut game, RunnerInput::Jump { at_ms: 0 });
    tick_n(&mut game, &mut rng, 5);
    process_input(&mut game, RunnerInput::Jump { at_ms: 96 });
    tick_n(&mut game, &mut rng, 300);

    game.reset();

    assert_eq!(game, RunnerGame::new(Difficulty::Hard));
}

#[test]
fn test_reset_is_idempotent() {
    let mut game = started_game(Difficulty::Normal);
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    tick_n(&mut game, &mut rng, 100);

    game.reset();
    let once = game.clone();
    game.reset();

    assert_eq!(game, once);
}

#[test]
fn test_identical_seeds_and_inputs_replay_identically() {
    let script = [30u32, 90, 250, 400];

    let run = || -> RunnerGame {
        let mut game = started_game(Difficulty::Normal);
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut tick = 0u32;
        for _ in 0..600 {
            if script.contains(&tick) {
                let at_ms = tick as u64 * PHYSICS_TICK_MS;
                process_input(&mut game, RunnerInput::Jump { at_ms });
            }
            tick_run(&mut game, PHYSICS_TICK_MS, &mut rng);
            tick += 1;
            if game.outcome.is_some() {
                break;
            }
        }
        game
    };

    assert_eq!(run(), run());
}
