use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RollError {
    #[error("too many dice rolled")]
    TooManyRolls,
    #[error("cannot keep or drop {requested} dice; only {available} remain")]
    OutOfRange { requested: usize, available: usize },
}
