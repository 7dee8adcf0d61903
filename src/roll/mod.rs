mod ctx;
mod error;
mod roller;
mod stringify;
mod trial;

use crate::common::*;
use crate::parse::ast;

pub(crate) type RResult<T> = Result<T, RollError>;

pub use ctx::{DefaultRoller, RollContext};
pub use error::RollError;
pub use roller::Roller;
pub use stringify::{MarkdownStringifier, SimpleStringifier, Stringify};
pub use trial::Trial;

pub(crate) use trial::checked_cut;

#[cfg(test)]
pub(crate) use roller::StepRoller;

/// Runs every trial of `expr` against `roller`, charging each draw (and each
/// trial) to the `max_rolls` budget when one is given.
pub fn eval<R: Roller>(
    expr: &ast::Expression,
    roller: R,
    max_rolls: Option<usize>,
) -> RResult<NonEmpty<Trial>> {
    let mut ctx = RollContext::new(max_rolls, roller);
    ctx.eval(expr)
}
