//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Conversion factor from seconds in move data to ticks.
pub const SECONDS_TO_TICKS: f32 = TICK_RATE as f32;

// --- Arena ---

/// Arena width in pixels.
pub const ARENA_WIDTH: f32 = 1200.0;

/// Arena height in pixels.
pub const ARENA_HEIGHT: f32 = 720.0;

/// Ground level — players stand with their feet at this y.
pub const GROUND_LEVEL: f32 = 540.0;

// --- Player kinematics ---

/// Half the player's wall-collision width.
pub const PLAYER_HALF_WIDTH: f32 = 20.0;

/// Player body hurtbox width.
pub const BODY_WIDTH: f32 = 50.0;

/// Player body hurtbox height (extends upward from the feet anchor).
pub const BODY_HEIGHT: f32 = 90.0;

/// Downward acceleration per tick while airborne.
pub const GRAVITY: f32 = 0.5;

/// Horizontal walk speed (px/tick).
pub const WALK_SPEED: f32 = 5.0;

/// Upward velocity impulse on jump.
pub const JUMP_IMPULSE: f32 = -12.0;

// --- Combat timing ---

/// Hit-stun ticks applied by a normal hit.
pub const HITSTUN_TICKS: u32 = 30;

/// Hit-stun ticks applied by each tick of a multi-hit hitbox.
pub const MULTI_HIT_STUN_TICKS: u32 = 15;

/// Geometric horizontal velocity decay per tick while in hit-stun.
pub const HURT_VELOCITY_DECAY: f32 = 0.90;

/// Horizontal velocity damping when an aerial attack recovers into a fall.
pub const AIR_RECOVERY_DRAG: f32 = 0.5;

/// A multi-hit hitbox applies damage when its remaining lifetime is a
/// multiple of this interval.
pub const MULTI_HIT_TICK_INTERVAL: i32 = 20;

/// Attacker must be at least this far above the victim for the airborne
/// spike knockback to apply.
pub const POP_UP_HEIGHT_THRESHOLD: f32 = 30.0;

/// Vertical knockback below this magnitude is ignored.
pub const KNOCKBACK_Y_EPSILON: f32 = 0.1;

// --- Projectiles ---

/// Default projectile lifetime (ticks).
pub const PROJECTILE_LIFETIME_TICKS: i32 = 180;

/// Lifetime of the short-range instant projectile variant (ticks).
pub const PROJECTILE_INSTANT_LIFETIME_TICKS: i32 = 10;

/// Projectiles are culled this far beyond the horizontal arena edges.
pub const PROJECTILE_BOUNDS_MARGIN: f32 = 200.0;

// --- Traps ---

/// A trap damages an overlapping victim when its remaining duration is a
/// multiple of this interval.
pub const TRAP_DUTY_CYCLE_TICKS: i32 = 60;

/// Poison duration refreshed by a poison trap tick (seconds).
pub const TRAP_POISON_REFRESH_SECS: f32 = 5.0;

// --- Status effects ---

/// Poison damage per second.
pub const POISON_DPS: f32 = 5.0;

// --- Meter ---

/// Meter charge per point of melee damage dealt.
pub const MELEE_METER_ATTACKER_FACTOR: f32 = 5.0;

/// Meter charge per point of melee damage received.
pub const MELEE_METER_VICTIM_FACTOR: f32 = 2.0;

/// Meter charge per point of projectile damage dealt.
pub const PROJECTILE_METER_ATTACKER_FACTOR: f32 = 0.8;

/// Meter charge per point of projectile damage received.
pub const PROJECTILE_METER_VICTIM_FACTOR: f32 = 0.5;

/// Discrete meter units needed for an ultimate.
pub const MAX_ULT_UNITS: u32 = 8;

/// Charge required to fill one meter unit.
pub const CHARGE_PER_UNIT: f32 = 100.0;

// --- Ultimate fall sequence ---

/// Frame at which the rising launch reaches its peak and the area cloud
/// spawns at the launch position.
pub const ULT_FALL_PEAK_FRAME: u32 = 40;

/// Ticks the attacker hangs motionless at the peak.
pub const ULT_FALL_HANG_TICKS: u32 = 60;

/// Side length of the cloud spawned at the launch position.
pub const ULT_CLOUD_SIZE: f32 = 600.0;

/// Damage per duty tick of the launch cloud.
pub const ULT_CLOUD_DAMAGE: f32 = 2.0;

/// Cloud lifetime and poison duration (seconds).
pub const ULT_CLOUD_DURATION_SECS: f32 = 5.0;

/// Landing explosion hitbox width.
pub const ULT_EXPLOSION_WIDTH: f32 = 400.0;

/// Landing explosion hitbox height.
pub const ULT_EXPLOSION_HEIGHT: f32 = 300.0;

/// Landing explosion damage.
pub const ULT_EXPLOSION_DAMAGE: f32 = 40.0;

/// Landing explosion knockback.
pub const ULT_EXPLOSION_KNOCKBACK: (f32, f32) = (25.0, -25.0);

/// Landing explosion active frames.
pub const ULT_EXPLOSION_ACTIVE_FRAMES: u32 = 10;

// --- Match flow ---

/// Default player health.
pub const MAX_HEALTH: f32 = 100.0;

/// Rounds needed to win the match.
pub const ROUNDS_TO_WIN: u32 = 3;

/// Pre-round countdown length (ticks).
pub const COUNTDOWN_TICKS: u32 = 180;

/// Pause between a KO and the next round or the match result (ticks).
pub const ROUND_END_TICKS: u32 = 120;

/// Player 1 round-start position.
pub const PLAYER1_SPAWN_X: f32 = 400.0;

/// Player 2 round-start position.
pub const PLAYER2_SPAWN_X: f32 = 800.0;

// --- Cooldowns ---

/// "Never used" sentinel for move cooldown stamps; far enough in the past
/// that every move starts ready.
pub const COOLDOWN_READY_SECS: f32 = -100.0;

// --- Entity pools ---

/// Cap per transient entity kind; a full pool makes spawns a silent no-op.
pub const MAX_POOL_ENTITIES: usize = 64;

// --- Computer opponent ---

/// Ticks between decision rolls while thinking.
pub const AI_DECISION_INTERVAL_TICKS: u32 = 30;

/// Horizontal range considered melee distance while thinking.
pub const AI_MELEE_RANGE: f32 = 100.0;

/// Horizontal range at which an approach converts into an attack.
pub const AI_ATTACK_RANGE: f32 = 80.0;

/// Horizontal range for an aerial dive attack during approach.
pub const AI_AIR_ATTACK_RANGE: f32 = 60.0;

/// Opponent must be at least this far above to trigger anti-air behavior.
pub const AI_ABOVE_THRESHOLD: f32 = 50.0;

/// Duration of a flee burst (ticks).
pub const AI_FLEE_TICKS: u32 = 18;

/// An attacking opponent inside this range triggers reactive defense.
pub const AI_REACT_RANGE: f32 = 150.0;

/// Distance from a wall at which the opponent counts as cornered.
pub const AI_CORNER_MARGIN: f32 = 60.0;

/// Horizontal drift applied to a jumping approach.
pub const AI_JUMP_DRIFT_SPEED: f32 = 4.0;

/// Weight (out of 100) of picking the ultimate when the meter is full.
pub const AI_ULTIMATE_WEIGHT: i32 = 10;

/// Weight (out of 100) of picking a special variant.
pub const AI_SPECIAL_WEIGHT: i32 = 30;
