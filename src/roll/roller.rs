use crate::common::{NonZeroUInt, UInt};
use rand::{
    distributions::{DistIter, Distribution, Uniform},
    Rng,
};

/// An injectable source of die faces: uniform integers in `[1, sides]`.
/// Every [rand::Rng] is a `Roller`, so `thread_rng()` and seeded generators
/// work out of the box.
pub trait Roller {
    type RollIter<'a>: Iterator<Item = UInt> + 'a
    where
        Self: 'a;

    fn roll(&mut self, sides: NonZeroUInt) -> UInt;

    fn roll_iter(&mut self, num: usize, sides: NonZeroUInt) -> Self::RollIter<'_>;
}

impl<R: Rng> Roller for R {
    type RollIter<'a>
        = std::iter::Take<DistIter<Uniform<UInt>, &'a mut Self, UInt>>
    where
        Self: 'a;

    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        self.gen_range(1..=sides.get())
    }

    fn roll_iter(&mut self, num: usize, sides: NonZeroUInt) -> Self::RollIter<'_> {
        Uniform::new_inclusive(1, sides.get())
            .sample_iter(self)
            .take(num)
    }
}

#[cfg(test)]
pub(crate) use step::StepRoller;

#[cfg(test)]
mod step {
    use super::*;

    /// Cycles deterministically through the faces of whatever die it is
    /// asked to roll, starting at `initial` and advancing by `step`.
    pub(crate) struct StepRoller {
        current: UInt,
        step: UInt,
    }

    impl StepRoller {
        pub fn new(initial: NonZeroUInt, step: UInt) -> Self {
            Self {
                current: initial.get(),
                step,
            }
        }
    }

    impl Roller for StepRoller {
        type RollIter<'a> = StepIter<'a>;

        fn roll(&mut self, sides: NonZeroUInt) -> UInt {
            let ret = (self.current - 1) % sides.get() + 1;
            self.current += self.step;
            ret
        }

        fn roll_iter(&mut self, num: usize, sides: NonZeroUInt) -> Self::RollIter<'_> {
            StepIter {
                roller: self,
                num,
                sides,
            }
        }
    }

    pub(crate) struct StepIter<'a> {
        roller: &'a mut StepRoller,
        num: usize,
        sides: NonZeroUInt,
    }

    impl Iterator for StepIter<'_> {
        type Item = UInt;

        fn next(&mut self) -> Option<Self::Item> {
            if self.num == 0 {
                None
            } else {
                self.num -= 1;
                Some(self.roller.roll(self.sides))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn sides(x: UInt) -> NonZeroUInt {
        NonZeroUInt::new(x).unwrap()
    }

    #[test]
    fn test_rolls_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let x = rng.roll(sides(20));
            assert!((1..=20).contains(&x));
        }
    }

    #[test]
    fn test_roll_iter_count_and_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let values: Vec<UInt> = rng.roll_iter(100, sides(6)).collect();
        assert_eq!(values.len(), 100);
        assert!(values.iter().all(|v| (1..=6).contains(v)));
    }

    #[test]
    fn test_one_sided_die() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(rng.roll_iter(10, sides(1)).all(|v| v == 1));
    }

    #[test]
    fn test_step_roller_cycles() {
        let mut roller = StepRoller::new(sides(1), 1);
        let values: Vec<UInt> = roller.roll_iter(8, sides(6)).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 1, 2]);
    }
}
