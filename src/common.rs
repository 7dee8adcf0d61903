pub use vec1::vec1;

/// The type used for die faces and literal values in notation.
pub type UInt = u32;

/// The type used for totals; wide enough that a full draw budget of
/// [UInt]-sized faces cannot overflow it.
pub type Int = i64;

pub type NonZeroUInt = std::num::NonZeroU32;

pub type NonEmpty<T> = vec1::Vec1<T>;
