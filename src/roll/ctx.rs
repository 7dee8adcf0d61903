use super::{error::RollError, roller::Roller, trial::Trial, RResult};
use crate::common::*;
use crate::parse::ast;

pub type DefaultRoller = rand::prelude::ThreadRng;

/// Owns the random source and the draw budget for one or more evaluations.
pub struct RollContext<R = DefaultRoller> {
    max_rolls: Option<usize>,
    rolls: usize,
    roller: R,
}

impl<R: Roller> RollContext<R> {
    pub fn new(max_rolls: Option<usize>, roller: R) -> Self {
        Self {
            max_rolls,
            rolls: 0,
            roller,
        }
    }

    pub fn new_bounded(max_rolls: usize, roller: R) -> Self {
        Self::new(Some(max_rolls), roller)
    }

    pub fn new_unbounded(roller: R) -> Self {
        Self::new(None, roller)
    }

    fn count_rolls(&mut self, n: usize) -> RResult<()> {
        self.rolls += n;
        if self.max_rolls.map_or(false, |max| self.rolls > max) {
            Err(RollError::TooManyRolls)
        } else {
            Ok(())
        }
    }

    pub fn roll(
        &mut self,
        num: usize,
        sides: NonZeroUInt,
    ) -> RResult<impl Iterator<Item = UInt> + '_> {
        self.count_rolls(num)?;
        Ok(self.roller.roll_iter(num, sides))
    }

    pub fn eval(&mut self, expr: &ast::Expression) -> RResult<NonEmpty<Trial>> {
        let repeat = expr.repeat.get() as usize;
        // a trial spends budget even when it rolls no dice
        self.count_rolls(repeat)?;

        let mut trials = Vec::with_capacity(repeat);
        for _ in 0..repeat {
            trials.push(self.run_trial(&expr.set)?);
        }
        Ok(NonEmpty::try_from_vec(trials).expect("repeat is at least one"))
    }

    fn run_trial(&mut self, set: &ast::Set) -> RResult<Trial> {
        let values: Vec<UInt> = self.roll(set.roll.count as usize, set.roll.sides)?.collect();

        let mut trial = Trial::new(values);
        for &modifier in &set.modifiers {
            trial.apply(modifier)?;
        }
        Ok(trial.finish())
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new(Some(crate::DEFAULT_MAX_ROLLS), rand::thread_rng())
    }
}
