//! World states of the wolf, rabbit and carrot puzzle

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of boolean dimensions in a state (three items plus the boat)
pub const DIMENSIONS: u32 = 4;

/// Side of every item and the boat. `false` is the origin bank, `true` the destination bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct State {
    pub wolf: bool,
    pub rabbit: bool,
    pub carrot: bool,
    pub boat: bool,
}

impl State {
    /// Create a state from the four bank sides
    pub fn new(wolf: bool, rabbit: bool, carrot: bool, boat: bool) -> Self {
        Self { wolf, rabbit, carrot, boat }
    }

    /// Decode a state from the low four bits of `index`.
    /// Bit 0 is the wolf, bit 1 the rabbit, bit 2 the carrot and bit 3 the boat.
    pub fn from_index(index: u32) -> Self {
        let bit = |n: u32| index & (1 << n) != 0;
        Self::new(bit(0), bit(1), bit(2), bit(3))
    }

    /// Everything on the origin bank
    pub fn start() -> Self {
        Self::new(false, false, false, false)
    }

    /// Everything on the destination bank
    pub fn goal() -> Self {
        Self::new(true, true, true, true)
    }

    /// A state is safe unless a wolf/rabbit or rabbit/carrot pair shares a bank without the boat
    pub fn is_valid(&self) -> bool {
        let wolf_eats_rabbit = self.wolf == self.rabbit && self.wolf != self.boat;
        let rabbit_eats_carrot = self.rabbit == self.carrot && self.rabbit != self.boat;
        !(wolf_eats_rabbit || rabbit_eats_carrot)
    }

    /// Sides of the three items, in wolf, rabbit, carrot order
    pub fn items(&self) -> [bool; 3] {
        [self.wolf, self.rabbit, self.carrot]
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for side in [self.wolf, self.rabbit, self.carrot, self.boat] {
            f.write_str(if side { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Enumerate every valid state in index order.
///
/// The order is stable and fixes the CNF variable numbering: the start state
/// comes first and the goal state last.
pub fn enumerate_valid_states() -> Vec<State> {
    (0..1u32 << DIMENSIONS)
        .map(State::from_index)
        .filter(State::is_valid)
        .collect()
}
