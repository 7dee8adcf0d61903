use crate::common::*;
use std::fmt;

/// A single group of identical dice: `4d6` rolls four six-sided dice.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DiceRoll {
    pub sides: NonZeroUInt,
    pub count: UInt,
}

impl DiceRoll {
    pub fn new(sides: NonZeroUInt, count: UInt) -> Self {
        Self { sides, count }
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

/// A single post-roll adjustment. Keep/drop operate on the sorted values
/// still in play; add/sub accumulate into a flat per-trial total.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Modifier {
    Add(UInt),
    Sub(UInt),
    KeepLow(UInt),
    KeepHigh(UInt),
    DropLow(UInt),
    DropHigh(UInt),
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add(n) => write!(f, "+{}", n),
            Self::Sub(n) => write!(f, "-{}", n),
            Self::KeepLow(n) => write!(f, "kl{}", n),
            Self::KeepHigh(n) => write!(f, "kh{}", n),
            Self::DropLow(n) => write!(f, "xl{}", n),
            Self::DropHigh(n) => write!(f, "xh{}", n),
        }
    }
}

/// A roll plus its modifiers in declaration order. Order is significant:
/// each modifier sees only the values left behind by the ones before it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Set {
    pub roll: DiceRoll,
    pub modifiers: Vec<Modifier>,
}

impl Set {
    pub fn new(roll: DiceRoll, modifiers: Vec<Modifier>) -> Self {
        Self { roll, modifiers }
    }
}

impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.roll)?;
        for modifier in &self.modifiers {
            write!(f, "{}", modifier)?;
        }
        Ok(())
    }
}

/// A complete parsed statement: one set, run `repeat` independent times.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Expression {
    pub set: Set,
    pub repeat: NonZeroUInt,
}

impl Expression {
    pub fn new(set: Set, repeat: NonZeroUInt) -> Self {
        Self { set, repeat }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.set)?;
        if self.repeat.get() != 1 {
            write!(f, "r{}", self.repeat)?;
        }
        Ok(())
    }
}
