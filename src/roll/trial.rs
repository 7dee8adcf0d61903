use super::{error::RollError, RResult};
use crate::common::*;
use crate::parse::ast::Modifier;
use std::fmt;

/// Validates a keep/drop count against the values still in play. Both the
/// executor and the standalone roll type route through here, so the two
/// agree on what happens at the boundary.
pub(crate) fn checked_cut(len: usize, n: UInt) -> RResult<usize> {
    let n = n as usize;
    if n > len {
        Err(RollError::OutOfRange {
            requested: n,
            available: len,
        })
    } else {
        Ok(n)
    }
}

/// The outcome of one independent execution of a set: the values still kept
/// (ascending), the values removed by keep/drop modifiers (oldest removal
/// first), the accumulated flat modifier, and the final total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trial {
    kept: Vec<UInt>,
    dropped: Vec<UInt>,
    modifier: Int,
    total: Int,
}

impl Trial {
    pub(crate) fn new(mut values: Vec<UInt>) -> Self {
        values.sort_unstable();
        Self {
            kept: values,
            dropped: Vec::new(),
            modifier: 0,
            total: 0,
        }
    }

    /// Applies one modifier to whatever the previous modifiers left behind.
    pub(crate) fn apply(&mut self, modifier: Modifier) -> RResult<()> {
        match modifier {
            Modifier::Add(n) => self.modifier += Int::from(n),
            Modifier::Sub(n) => self.modifier -= Int::from(n),
            Modifier::DropLow(n) => {
                let at = self.cut_low(n)?;
                self.dropped.extend(self.kept.drain(..at));
            }
            Modifier::DropHigh(n) => {
                let at = self.cut_high(n)?;
                self.dropped.extend(self.kept.drain(at..));
            }
            Modifier::KeepLow(n) => {
                let at = self.cut_low(n)?;
                self.dropped.extend(self.kept.drain(at..));
            }
            Modifier::KeepHigh(n) => {
                let at = self.cut_high(n)?;
                self.dropped.extend(self.kept.drain(..at));
            }
        }
        Ok(())
    }

    pub(crate) fn finish(mut self) -> Self {
        self.total = self.kept.iter().map(|&x| Int::from(x)).sum::<Int>() + self.modifier;
        self
    }

    // Index just past the n lowest remaining values.
    fn cut_low(&self, n: UInt) -> RResult<usize> {
        checked_cut(self.kept.len(), n)
    }

    // Index just before the n highest remaining values.
    fn cut_high(&self, n: UInt) -> RResult<usize> {
        self.cut_low(n).map(|n| self.kept.len() - n)
    }

    /// The values still in play, ascending.
    pub fn kept(&self) -> &[UInt] {
        &self.kept
    }

    /// The values removed by keep/drop modifiers, in removal order.
    pub fn dropped(&self) -> &[UInt] {
        &self.dropped
    }

    pub fn modifier(&self) -> Int {
        self.modifier
    }

    pub fn total(&self) -> Int {
        self.total
    }
}

impl fmt::Display for Trial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} + {}: {}",
            join(&self.kept),
            self.modifier,
            self.total
        )?;
        if !self.dropped.is_empty() {
            write!(f, " (drop {})", join(&self.dropped))?;
        }
        Ok(())
    }
}

fn join(values: &[UInt]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
