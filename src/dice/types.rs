use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Number of dice on the table.
pub const DICE_COUNT: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("die face {0} is out of range (expected 1-6)")]
    FaceOutOfRange(u8),
    #[error("expected 6 dice, got {0}")]
    WrongCount(usize),
    #[error("die index {0} is out of range (expected 0-5)")]
    IndexOutOfRange(usize),
}

/// A single die face, always in 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieValue(u8);

impl DieValue {
    pub const ONE: DieValue = DieValue(1);
    pub const FIVE: DieValue = DieValue(5);

    pub fn new(face: u8) -> Result<Self, DiceError> {
        if (1..=6).contains(&face) {
            Ok(DieValue(face))
        } else {
            Err(DiceError::FaceOutOfRange(face))
        }
    }

    pub fn face(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DieValue {
    type Error = DiceError;

    fn try_from(face: u8) -> Result<Self, Self::Error> {
        DieValue::new(face)
    }
}

impl From<DieValue> for u8 {
    fn from(value: DieValue) -> Self {
        value.0
    }
}

impl fmt::Display for DieValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The six dice currently on the table. Slot order is stable across rolls so
/// that hold tracking can refer to dice by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollState([DieValue; DICE_COUNT]);

impl RollState {
    pub fn new(dice: [DieValue; DICE_COUNT]) -> Self {
        Self(dice)
    }

    /// Build a roll from raw faces, validating count and range.
    pub fn from_faces(faces: &[u8]) -> Result<Self, DiceError> {
        if faces.len() != DICE_COUNT {
            return Err(DiceError::WrongCount(faces.len()));
        }
        let mut dice = [DieValue::ONE; DICE_COUNT];
        for (slot, &face) in dice.iter_mut().zip(faces) {
            *slot = DieValue::new(face)?;
        }
        Ok(Self(dice))
    }

    pub fn get(&self, index: usize) -> Option<DieValue> {
        self.0.get(index).copied()
    }

    pub fn dice(&self) -> &[DieValue; DICE_COUNT] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = DieValue> + '_ {
        self.0.iter().copied()
    }

    pub fn faces(&self) -> [u8; DICE_COUNT] {
        self.0.map(DieValue::face)
    }
}

impl fmt::Display for RollState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces: Vec<String> = self.0.iter().map(|d| d.to_string()).collect();
        write!(f, "[{}]", faces.join(", "))
    }
}

/// Indices of dice locked out of re-rolling. Stored as a bitmask over the six
/// slots; serializes as the sorted list of held indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "Vec<usize>")]
pub struct HeldSet(u8);

impl HeldSet {
    const FULL: u8 = (1 << DICE_COUNT) - 1;

    pub fn new() -> Self {
        Self(0)
    }

    pub fn from_indices(indices: &[usize]) -> Result<Self, DiceError> {
        let mut held = Self::new();
        for &index in indices {
            held.insert(index)?;
        }
        Ok(held)
    }

    pub fn contains(&self, index: usize) -> bool {
        index < DICE_COUNT && self.0 & (1 << index) != 0
    }

    pub fn insert(&mut self, index: usize) -> Result<(), DiceError> {
        check_index(index)?;
        self.0 |= 1 << index;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<(), DiceError> {
        check_index(index)?;
        self.0 &= !(1 << index);
        Ok(())
    }

    /// Flip the hold on one die. Returns true if the die is now held.
    pub fn toggle(&mut self, index: usize) -> Result<bool, DiceError> {
        check_index(index)?;
        self.0 ^= 1 << index;
        Ok(self.contains(index))
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// True when every die on the table is held.
    pub fn is_full(&self) -> bool {
        self.0 == Self::FULL
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..DICE_COUNT).filter(|&i| self.contains(i))
    }
}

fn check_index(index: usize) -> Result<(), DiceError> {
    if index < DICE_COUNT {
        Ok(())
    } else {
        Err(DiceError::IndexOutOfRange(index))
    }
}

impl TryFrom<Vec<usize>> for HeldSet {
    type Error = DiceError;

    fn try_from(indices: Vec<usize>) -> Result<Self, Self::Error> {
        HeldSet::from_indices(&indices)
    }
}

impl Serialize for HeldSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
