//! # Encounter Generation
//!
//! Scatters foes over the free ground of a freshly installed level.

use crate::{Entity, FoeFactory, Level, Position, RrogueError, RrogueResult, TileKind};
use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

/// Places foes on floor tiles with a fixed chance per tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoeScatter {
    /// Chance per floor tile, 0.0 to 1.0
    pub chance: f64,
}

impl FoeScatter {
    pub fn new(chance: f64) -> Self {
        Self { chance }
    }

    /// Rolls for every `.` tile except `spawn` and places a foe from
    /// `factory` on each hit. Returns how many foes were placed.
    ///
    /// Decorations, stairways and obstacles never receive foes, and neither
    /// do tiles already holding a monster or item.
    pub fn scatter(
        &self,
        level: &mut Level,
        spawn: Position,
        factory: &dyn FoeFactory,
        rng: &mut StdRng,
    ) -> RrogueResult<usize> {
        if !(0.0..=1.0).contains(&self.chance) {
            return Err(RrogueError::GenerationFailed(format!(
                "Foe spawn chance {} is not a probability",
                self.chance
            )));
        }

        let mut placed = 0;
        for pos in level.positions_of(TileKind::Floor) {
            if pos == spawn || level.is_occupied(pos) {
                continue;
            }
            if !rng.gen_bool(self.chance) {
                continue;
            }
            let mut foe = factory.generate_foe(rng);
            foe.set_position(pos);
            debug!("Placing {} at {}", foe.name(), pos);
            level.place_monster(foe)?;
            placed += 1;
        }
        Ok(placed)
    }
}
