use crate::common::*;
use crate::roll::{checked_cut, DefaultRoller, RollError, Roller};
use std::fmt;

/// A single mutable dice group, rolled without going through notation.
///
/// Construction rolls immediately; [reroll](Self::reroll) regenerates every
/// value. Keep/drop operations slice the stored ascending values in place and
/// discard what they remove. The running modifier total set through
/// [add_mod](Self::add_mod)/[sub_mod](Self::sub_mod) survives rerolls; there
/// is no reset, construct a new instance to clear it.
pub struct Roll<R = DefaultRoller> {
    sides: NonZeroUInt,
    count: UInt,
    values: Vec<UInt>,
    modifier: Int,
    roller: R,
}

impl Roll {
    pub fn new(sides: NonZeroUInt, count: UInt) -> Self {
        Self::with_roller(sides, count, rand::thread_rng())
    }
}

impl<R: Roller> Roll<R> {
    pub fn with_roller(sides: NonZeroUInt, count: UInt, roller: R) -> Self {
        let mut ret = Self {
            sides,
            count,
            values: Vec::new(),
            modifier: 0,
            roller,
        };
        ret.reroll();
        ret
    }

    /// Discards the current values and draws a fresh, ascending-sorted set.
    pub fn reroll(&mut self) {
        self.values = self.roller.roll_iter(self.count as usize, self.sides).collect();
        self.values.sort_unstable();
    }

    pub fn add_mod(&mut self, n: UInt) {
        self.modifier += Int::from(n);
    }

    pub fn sub_mod(&mut self, n: UInt) {
        self.modifier -= Int::from(n);
    }

    pub fn keep_highest(&mut self, n: UInt) -> Result<(), RollError> {
        let at = self.cut_high(n)?;
        self.values.drain(..at);
        Ok(())
    }

    pub fn keep_lowest(&mut self, n: UInt) -> Result<(), RollError> {
        let at = self.cut_low(n)?;
        self.values.truncate(at);
        Ok(())
    }

    pub fn drop_highest(&mut self, n: UInt) -> Result<(), RollError> {
        let at = self.cut_high(n)?;
        self.values.truncate(at);
        Ok(())
    }

    pub fn drop_lowest(&mut self, n: UInt) -> Result<(), RollError> {
        let at = self.cut_low(n)?;
        self.values.drain(..at);
        Ok(())
    }

    /// Sum of the current values plus the running modifier total.
    pub fn result(&self) -> Int {
        self.values.iter().map(|&x| Int::from(x)).sum::<Int>() + self.modifier
    }

    /// The current values, ascending.
    pub fn values(&self) -> &[UInt] {
        &self.values
    }

    pub fn sides(&self) -> NonZeroUInt {
        self.sides
    }

    pub fn count(&self) -> UInt {
        self.count
    }

    pub fn modifier(&self) -> Int {
        self.modifier
    }

    fn cut_low(&self, n: UInt) -> Result<usize, RollError> {
        checked_cut(self.values.len(), n)
    }

    fn cut_high(&self, n: UInt) -> Result<usize, RollError> {
        self.cut_low(n).map(|n| self.values.len() - n)
    }
}

impl<R> fmt::Display for Roll<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::StepRoller;

    fn sides(x: UInt) -> NonZeroUInt {
        NonZeroUInt::new(x).unwrap()
    }

    fn four_d6() -> Roll<StepRoller> {
        Roll::with_roller(sides(6), 4, StepRoller::new(sides(1), 1))
    }

    #[test]
    fn test_rolls_on_construction() {
        let roll = four_d6();
        assert_eq!(roll.values(), [1, 2, 3, 4]);
        assert_eq!(roll.result(), 10);
        assert_eq!(roll.to_string(), "4d6");
    }

    #[test]
    fn test_reroll_replaces_values() {
        let mut roll = four_d6();
        roll.reroll();
        // next draws are 5, 6, 1, 2; the old set is gone, not accumulated
        assert_eq!(roll.values(), [1, 2, 5, 6]);
        assert_eq!(roll.result(), 14);
    }

    #[test]
    fn test_modifier_survives_reroll() {
        let mut roll = four_d6();
        roll.add_mod(5);
        roll.sub_mod(2);
        assert_eq!(roll.modifier(), 3);
        assert_eq!(roll.result(), 13);

        roll.reroll();
        assert_eq!(roll.modifier(), 3);
        assert_eq!(roll.result(), 17);
    }

    #[test]
    fn test_keep_and_drop() {
        let mut roll = four_d6();
        roll.keep_highest(3).unwrap();
        assert_eq!(roll.values(), [2, 3, 4]);

        roll.drop_highest(1).unwrap();
        assert_eq!(roll.values(), [2, 3]);

        roll.drop_lowest(1).unwrap();
        assert_eq!(roll.values(), [3]);

        roll.keep_lowest(1).unwrap();
        assert_eq!(roll.values(), [3]);
    }

    #[test]
    fn test_zero_count_operations_are_identity() {
        let mut roll = four_d6();
        roll.keep_highest(4).unwrap();
        roll.drop_lowest(0).unwrap();
        assert_eq!(roll.values(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_out_of_range() {
        let mut roll = four_d6();
        assert_eq!(
            roll.keep_highest(5),
            Err(RollError::OutOfRange {
                requested: 5,
                available: 4,
            }),
        );
        // the failed operation leaves the values untouched
        assert_eq!(roll.values(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_result_of_empty_group() {
        let mut roll = Roll::with_roller(sides(6), 0, StepRoller::new(sides(1), 1));
        assert!(roll.values().is_empty());
        assert_eq!(roll.result(), 0);

        roll.add_mod(7);
        assert_eq!(roll.result(), 7);
    }
}
