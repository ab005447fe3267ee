//! Status effect application — poison damage over time.
//!
//! Runs every tick for both players, independent of collision and of the
//! player's state (poison keeps ticking through Attack and Hurt).

use petri_core::constants::{DT, POISON_DPS};

use crate::player::Player;

pub fn run(players: &mut [Player; 2]) {
    for player in players.iter_mut() {
        if player.poison_secs > 0.0 {
            player.poison_secs -= DT;
            player.apply_damage(POISON_DPS * DT);
        }
    }
}
