//! Jungle Run game logic: physics, input processing, spawning, collision.

use super::types::*;
use rand::Rng;

/// Physics tick interval in milliseconds (~60 FPS).
pub const PHYSICS_TICK_MS: u64 = 16;

/// UI-agnostic input actions for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerInput {
    /// Space or Up arrow, stamped with the caller's monotonic clock.
    Jump { at_ms: u64 },
    /// Any other key.
    Other,
}

/// Process player input.
///
/// Jump decisions happen at press time: exactly one action per rising edge.
pub fn process_input(game: &mut RunnerGame, input: RunnerInput) {
    if game.outcome.is_some() {
        return; // Terminal -- dismissal is handled by the caller
    }

    // Waiting screen: Jump starts the run
    if game.waiting_to_start {
        if matches!(input, RunnerInput::Jump { .. }) {
            game.waiting_to_start = false;
        }
        return;
    }

    match input {
        RunnerInput::Jump { at_ms } => try_jump(game, at_ms),
        RunnerInput::Other => {}
    }
}

/// Apply one jump press. Grounded presses always jump; an airborne press
/// double-jumps only while eligible and within the press window, and
/// otherwise burns the eligibility.
fn try_jump(game: &mut RunnerGame, at_ms: u64) {
    if game.is_grounded() {
        game.velocity_y = JUMP_IMPULSE;
        game.jump_count = 1;
        game.can_double_jump = true;
        game.last_jump_press_ms = at_ms;
    } else if game.can_double_jump
        && game.jump_count == 1
        && at_ms.saturating_sub(game.last_jump_press_ms) <= DOUBLE_JUMP_WINDOW_MS
    {
        game.velocity_y = DOUBLE_JUMP_IMPULSE;
        game.jump_count = 2;
        game.can_double_jump = false;
        game.last_jump_press_ms = at_ms;
    } else {
        game.can_double_jump = false;
    }
}

/// Advance the run. Called from the main game loop.
///
/// `dt_ms` is milliseconds since last call. Internally steps physics in
/// 16ms increments (~60 FPS). Returns true if the game state changed.
pub fn tick_run<R: Rng>(game: &mut RunnerGame, dt_ms: u64, rng: &mut R) -> bool {
    if game.outcome.is_some() || game.waiting_to_start {
        return false;
    }

    // Clamp dt to 100ms max to prevent physics explosion after pause/lag
    let dt_ms = dt_ms.min(100);

    game.accumulated_time_ms += dt_ms;
    let mut changed = false;

    while game.accumulated_time_ms >= PHYSICS_TICK_MS {
        game.accumulated_time_ms -= PHYSICS_TICK_MS;
        step_physics(game, rng);
        changed = true;

        if game.outcome.is_some() {
            break;
        }
    }

    changed
}

/// Single physics step (16ms tick).
fn step_physics<R: Rng>(game: &mut RunnerGame, rng: &mut R) {
    game.tick_count += 1;

    // 1. Gravity integration and ground clamp. Landing resets the jump budget.
    game.velocity_y += GRAVITY;
    game.player_y += game.velocity_y;
    if game.player_y >= GROUND_Y {
        game.player_y = GROUND_Y;
        game.velocity_y = 0.0;
        game.jump_count = 0;
        game.can_double_jump = false;
    }

    // 2. Progression: distance, then milestone speed increases (capped).
    game.distance += game.scroll_speed;
    while game.distance >= game.next_speed_milestone {
        game.scroll_speed = (game.scroll_speed + game.difficulty.speed_increment())
            .min(game.difficulty.max_scroll_speed());
        game.next_speed_milestone += SPEED_MILESTONE;
    }

    // 3. Spawn scheduling. No new items or obstacles near the end of the level.
    game.item_timer += 1;
    if game.item_timer > game.difficulty.item_spawn_ticks() && game.distance < LEVEL_LENGTH {
        game.spawn_collectible(rng);
        game.item_timer = 0;
    }
    game.obstacle_timer += 1;
    if game.obstacle_timer > game.difficulty.obstacle_spawn_ticks() && game.distance < LEVEL_LENGTH
    {
        game.spawn_obstacle();
        game.obstacle_timer = 0;
    }

    // 4. Collectibles: advance, collect on first overlap, then one retain
    //    pass drops collected and off-screen items.
    let player = game.player_rect();
    for item in &mut game.items {
        item.x -= game.scroll_speed;
        if !item.collected && player.overlaps(&item.rect()) {
            item.collected = true;
            game.score += item.kind.score_value();
            match item.kind {
                CollectibleKind::Chocobee => game.choco_count += 1,
                CollectibleKind::Pudding => game.pudding_count += 1,
            }
        }
    }
    game.items.retain(|item| !item.collected && item.rect().right() > 0.0);

    // 5. Obstacles: advance, then a hit ends the run with no further
    //    mutation this tick.
    for obstacle in &mut game.obstacles {
        obstacle.x -= game.scroll_speed;
    }
    if game.obstacles.iter().any(|o| player.overlaps(&o.rect())) {
        game.outcome = Some(RunOutcome::Lost);
        return;
    }
    game.obstacles.retain(|o| o.rect().right() > 0.0);

    // 6. Goal actor: spawns exactly once, then scrolls like everything else.
    if !game.goal.spawned && game.distance >= GOAL_SPAWN_DISTANCE {
        game.goal.spawned = true;
    }
    if game.goal.spawned {
        game.goal.x -= game.scroll_speed;
        if game.goal_contact_rect().overlaps(&game.goal.rect()) {
            game.outcome = Some(RunOutcome::Won);
            return;
        }
    }

    // 7. Background scroll offset, wrapped at one screen width. Cosmetic.
    game.bg_offset -= game.scroll_speed;
    if game.bg_offset <= -GAME_WIDTH {
        game.bg_offset = 0.0;
    }
}
