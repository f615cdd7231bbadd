use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{DieValue, HeldSet, RollState, DICE_COUNT};

/// Source of die faces. The game reducer only ever asks for one face at a time,
/// so tests can script exact rolls.
pub trait DiceRoller {
    fn roll_die(&mut self) -> DieValue;
}

/// Uniform 1-6 roller backed by `StdRng`.
pub struct RandomRoller {
    rng: StdRng,
}

impl RandomRoller {
    /// `Some(seed)` gives a reproducible sequence; `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl DiceRoller for RandomRoller {
    fn roll_die(&mut self) -> DieValue {
        let face: u8 = self.rng.random_range(1..=6);
        DieValue::new(face).unwrap_or(DieValue::ONE)
    }
}

/// Roll every die not in `held`. Held dice keep their face from `previous`;
/// with no previous roll all six dice are rolled.
pub fn roll_unheld<R: DiceRoller + ?Sized>(
    roller: &mut R,
    previous: Option<&RollState>,
    held: &HeldSet,
) -> RollState {
    let mut dice = [DieValue::ONE; DICE_COUNT];
    for (index, slot) in dice.iter_mut().enumerate() {
        *slot = match previous.and_then(|p| p.get(index)) {
            Some(kept) if held.contains(index) => kept,
            _ => roller.roll_die(),
        };
    }
    RollState::new(dice)
}

/// Replays a fixed list of faces, cycling when exhausted.
#[cfg(test)]
pub(crate) struct ScriptedRoller {
    faces: Vec<u8>,
    next: usize,
}

#[cfg(test)]
impl ScriptedRoller {
    pub(crate) fn new(faces: &[u8]) -> Self {
        Self {
            faces: faces.to_vec(),
            next: 0,
        }
    }
}

#[cfg(test)]
impl DiceRoller for ScriptedRoller {
    fn roll_die(&mut self) -> DieValue {
        let face = self.faces[self.next % self.faces.len()];
        self.next += 1;
        DieValue::new(face).expect("scripted face out of range")
    }
}
