//! Jungle Run data structures.
//!
//! A side-scrolling runner: collect chocobees and puddings, jump over the
//! obstacles, and reach your parents at the end of the jungle. Coordinates
//! are logical pixels in an 800x400 play field (y grows downward); the UI
//! scales them to terminal cells at render time.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Difficulty levels for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Difficulty::Normal)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
        }
    }

    /// Lowercase key used for records.
    pub fn difficulty_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }

    /// Scroll speed at the start of a run, in px/tick.
    pub fn base_scroll_speed(&self) -> f64 {
        match self {
            Self::Easy => 4.0,
            Self::Normal => 5.0,
            Self::Hard => 6.0,
        }
    }

    /// Hard cap on scroll speed after milestone increases.
    pub fn max_scroll_speed(&self) -> f64 {
        match self {
            Self::Easy => 8.0,
            Self::Normal => 10.0,
            Self::Hard => 12.0,
        }
    }

    /// Scroll speed increase applied at each distance milestone.
    pub fn speed_increment(&self) -> f64 {
        match self {
            Self::Easy => 0.25,
            Self::Normal => 0.5,
            Self::Hard => 0.75,
        }
    }

    /// Ticks between collectible spawns.
    pub fn item_spawn_ticks(&self) -> u32 {
        match self {
            Self::Easy => 50,
            Self::Normal => 60,
            Self::Hard => 75,
        }
    }

    /// Ticks between obstacle spawns.
    pub fn obstacle_spawn_ticks(&self) -> u32 {
        match self {
            Self::Easy => 150,
            Self::Normal => 120,
            Self::Hard => 90,
        }
    }
}

/// Play field dimensions in logical pixels.
pub const GAME_WIDTH: f64 = 800.0;
pub const GAME_HEIGHT: f64 = 400.0;

/// Player top edge when standing on the ground.
pub const GROUND_Y: f64 = 300.0;

/// Player fixed horizontal position (left edge).
pub const PLAYER_X: f64 = 100.0;

/// Player hitbox side length.
pub const PLAYER_SIZE: f64 = 80.0;

/// Reduced hitbox side length used for goal-actor contact.
pub const GOAL_CONTACT_SIZE: f64 = 60.0;

/// Gravity, in px/tick^2 (positive = downward).
pub const GRAVITY: f64 = 1.0;

/// First-jump impulse (negative = upward, sets velocity directly).
pub const JUMP_IMPULSE: f64 = -18.0;

/// Double-jump impulse; weaker than the first jump.
pub const DOUBLE_JUMP_IMPULSE: f64 = -16.0;

/// A second jump press within this window of the first triggers a double jump.
pub const DOUBLE_JUMP_WINDOW_MS: u64 = 300;

/// Total level length in distance units. Spawning stops past this point.
pub const LEVEL_LENGTH: f64 = 2000.0;

/// Distance at which the goal actor appears, one screen before the end.
pub const GOAL_SPAWN_DISTANCE: f64 = LEVEL_LENGTH - GAME_WIDTH;

/// Goal actor's starting x, far off-screen to the right.
pub const GOAL_START_X: f64 = GAME_WIDTH + 2000.0;

/// Goal actor dimensions.
pub const GOAL_WIDTH: f64 = 100.0;
pub const GOAL_HEIGHT: f64 = 180.0;

/// Collectible side length.
pub const ITEM_SIZE: f64 = 50.0;

/// Vertical band for collectible top edges. Items float above the ground,
/// so a grounded player (top edge 300) never touches them without jumping.
pub const ITEM_BAND_TOP_MIN: f64 = 130.0;
pub const ITEM_BAND_TOP_MAX: f64 = 200.0;

/// Obstacle side length. Obstacles sit on the ground.
pub const OBSTACLE_SIZE: f64 = 100.0;

/// Distance between scroll-speed milestones.
pub const SPEED_MILESTONE: f64 = 500.0;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Strict overlap: rects that merely touch at an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Collectible kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectibleKind {
    Chocobee,
    Pudding,
}

impl CollectibleKind {
    /// Score awarded on collection. Puddings are rarer treats: flat +3.
    pub fn score_value(&self) -> u32 {
        match self {
            Self::Chocobee => 1,
            Self::Pudding => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Chocobee => "Chocobee",
            Self::Pudding => "Pudding",
        }
    }
}

/// A floating collectible item.
#[derive(Debug, Clone, PartialEq)]
pub struct Collectible {
    /// Left edge (float for smooth scrolling).
    pub x: f64,
    /// Top edge, fixed at spawn within the item band.
    pub y: f64,
    pub kind: CollectibleKind,
    /// Set on first contact with the player; collected items leave the
    /// active set at the end of the same tick.
    pub collected: bool,
}

impl Collectible {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, ITEM_SIZE, ITEM_SIZE)
    }
}

/// A ground obstacle. Contact ends the run.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge.
    pub x: f64,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x,
            GAME_HEIGHT - OBSTACLE_SIZE,
            OBSTACLE_SIZE,
            OBSTACLE_SIZE,
        )
    }
}

/// The runner's parents, waiting at the end of the level.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalActor {
    /// Left edge.
    pub x: f64,
    /// True once the distance threshold has been crossed; the actor only
    /// scrolls (and can only be reached) after spawning.
    pub spawned: bool,
}

impl GoalActor {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, GAME_HEIGHT - GOAL_HEIGHT, GOAL_WIDTH, GOAL_HEIGHT)
    }
}

/// How a run ended. `Option<RunOutcome>` on the game makes the two terminal
/// states mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Won,
    Lost,
}

/// Main simulation state.
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerGame {
    pub difficulty: Difficulty,
    pub outcome: Option<RunOutcome>,
    /// True until the player presses Space/Up to begin. Physics paused while waiting.
    pub waiting_to_start: bool,

    // -- Player state --
    /// Top edge of the player in logical px. GROUND_Y = standing on the ground.
    pub player_y: f64,
    /// Vertical velocity in px/tick (negative = upward).
    pub velocity_y: f64,
    /// 0 grounded, 1 after the first jump, 2 after the double jump.
    pub jump_count: u8,
    /// Eligibility for the double jump; cleared on use, expiry, or landing.
    pub can_double_jump: bool,
    /// Monotonic timestamp of the last jump press, from the caller's clock.
    pub last_jump_press_ms: u64,

    // -- World state --
    pub items: Vec<Collectible>,
    pub obstacles: Vec<Obstacle>,
    pub goal: GoalActor,

    // -- Progression --
    pub score: u32,
    pub choco_count: u32,
    pub pudding_count: u32,
    /// Total distance traveled, in px.
    pub distance: f64,
    /// Current scroll speed in px/tick; rises at distance milestones.
    pub scroll_speed: f64,
    /// Next distance at which the scroll speed increases.
    pub next_speed_milestone: f64,

    // -- Spawn scheduling --
    pub item_timer: u32,
    pub obstacle_timer: u32,

    // -- Presentation-only --
    /// Background scroll offset; wraps at one screen width. Cosmetic.
    pub bg_offset: f64,

    // -- Timing --
    /// Sub-tick time accumulator (milliseconds).
    pub accumulated_time_ms: u64,
    /// Total physics ticks elapsed.
    pub tick_count: u64,
}

impl RunnerGame {
    /// Create a new run with the given difficulty.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            outcome: None,
            waiting_to_start: true,

            player_y: GROUND_Y,
            velocity_y: 0.0,
            jump_count: 0,
            can_double_jump: false,
            last_jump_press_ms: 0,

            items: Vec::new(),
            obstacles: Vec::new(),
            goal: GoalActor {
                x: GOAL_START_X,
                spawned: false,
            },

            score: 0,
            choco_count: 0,
            pudding_count: 0,
            distance: 0.0,
            scroll_speed: difficulty.base_scroll_speed(),
            next_speed_milestone: SPEED_MILESTONE,

            item_timer: 0,
            obstacle_timer: 0,

            bg_offset: 0.0,

            accumulated_time_ms: 0,
            tick_count: 0,
        }
    }

    /// Restore the starting state. Equivalent to constructing a fresh run.
    pub fn reset(&mut self) {
        *self = Self::new(self.difficulty);
    }

    /// True when the player stands on the ground with no vertical motion.
    pub fn is_grounded(&self) -> bool {
        self.player_y >= GROUND_Y && self.velocity_y == 0.0
    }

    pub fn game_over(&self) -> bool {
        self.outcome == Some(RunOutcome::Lost)
    }

    pub fn game_won(&self) -> bool {
        self.outcome == Some(RunOutcome::Won)
    }

    /// Player hitbox used against collectibles and obstacles.
    pub fn player_rect(&self) -> Rect {
        Rect::new(PLAYER_X, self.player_y, PLAYER_SIZE, PLAYER_SIZE)
    }

    /// Smaller hitbox used for goal contact, so the win needs a real embrace.
    pub fn goal_contact_rect(&self) -> Rect {
        Rect::new(PLAYER_X, self.player_y, GOAL_CONTACT_SIZE, GOAL_CONTACT_SIZE)
    }

    /// Spawn one collectible of a random kind at a random height within the
    /// item band, just past the right edge.
    pub fn spawn_collectible<R: Rng>(&mut self, rng: &mut R) {
        let kind = if rng.gen::<bool>() {
            CollectibleKind::Chocobee
        } else {
            CollectibleKind::Pudding
        };
        let y = rng.gen_range(ITEM_BAND_TOP_MIN..=ITEM_BAND_TOP_MAX);
        self.items.push(Collectible {
            x: GAME_WIDTH,
            y,
            kind,
            collected: false,
        });
    }

    /// Spawn one ground obstacle just past the right edge.
    pub fn spawn_obstacle(&mut self) {
        self.obstacles.push(Obstacle { x: GAME_WIDTH });
    }
}
