//! Shared player kinematics: wall clamping and ground landing.

use petri_core::constants::*;

use crate::player::Player;

/// Keep the player inside the side walls, killing velocity into them.
pub fn clamp_walls(player: &mut Player) {
    if player.position.x - PLAYER_HALF_WIDTH < 0.0 {
        player.position.x = PLAYER_HALF_WIDTH;
        player.velocity.x = 0.0;
    }
    if player.position.x + PLAYER_HALF_WIDTH > ARENA_WIDTH {
        player.position.x = ARENA_WIDTH - PLAYER_HALF_WIDTH;
        player.velocity.x = 0.0;
    }
}

/// Snap to the ground when crossing it. Returns true on the tick the
/// player actually lands (airborne → grounded).
pub fn land_if_grounded(player: &mut Player) -> bool {
    if player.position.y < GROUND_LEVEL {
        return false;
    }
    player.position.y = GROUND_LEVEL;
    player.velocity.y = 0.0;
    let landed = !player.grounded;
    player.grounded = true;
    // Landing re-arms the aerial special.
    player.used_air_special = false;
    landed
}
