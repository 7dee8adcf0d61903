//! Interpret compact dice notation like `4d6xl1r6`: roll four six-sided
//! dice, drop the lowest, and repeat the whole thing six times.
//!
//! ```rust
//! use dice_notation::roll;
//!
//! # fn main() -> Result<(), dice_notation::Error> {
//! for trial in roll("4d6xl1r6")? {
//!     println!("{}", trial);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Rolls draw from [rand::thread_rng] by default; any [Roller] (which every
//! [rand::Rng] is) can be substituted for reproducible output:
//!
//! ```rust
//! use dice_notation::roll_with;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! # fn main() -> Result<(), dice_notation::Error> {
//! let trials = roll_with("2d20kh1+3", StdRng::seed_from_u64(1))?;
//! assert_eq!(trials.len(), 1);
//! assert_eq!(trials[0].modifier(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! A dice group can also be built and manipulated directly, skipping the
//! notation entirely; see [Roll].

mod common;
pub mod dice;
pub mod parse;
pub mod roll;

pub use common::{Int, NonEmpty, NonZeroUInt, UInt};
pub use dice::Roll;
pub use parse::ast::{DiceRoll, Expression, Modifier, Set};
pub use parse::{LexError, ParseError};
pub use roll::{
    DefaultRoller, MarkdownStringifier, RollContext, RollError, Roller, SimpleStringifier,
    Stringify, Trial,
};

/// Draw budget applied by [roll] and [roll_with]: the total of all dice
/// drawn plus one per trial may not exceed this for a single input string.
pub const DEFAULT_MAX_ROLLS: usize = 1000;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Roll(#[from] RollError),
}

/// Parses `notation` without rolling anything.
pub fn parse(notation: &str) -> Result<Expression, ParseError> {
    parse::parse(notation)
}

/// Parses `notation` and runs every trial against [rand::thread_rng],
/// bounded by [DEFAULT_MAX_ROLLS].
pub fn roll(notation: &str) -> Result<NonEmpty<Trial>, Error> {
    roll_with(notation, rand::thread_rng())
}

/// Same as [roll], but draws from the given [Roller].
pub fn roll_with<R: Roller>(notation: &str, roller: R) -> Result<NonEmpty<Trial>, Error> {
    let expr = parse(notation)?;
    Ok(roll::eval(&expr, roller, Some(DEFAULT_MAX_ROLLS))?)
}
