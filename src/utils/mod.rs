/*!
# Utilities

Provides utility traits/structs around the core library such as
- [`Labeling`](self::labeling::Labeling): a bidirectional mapping between
  external node labels and the dense indices the algorithms operate on,
- the [`Probability`] helper trait used to validate generator arguments.

Apart from `Labeling`, you probably do not need to interact with this module
directly.
*/

use num::{One, Zero};

pub mod labeling;

pub use labeling::Labeling;

/// Helper trait for probabilities
pub trait Probability {
    /// Returns *true* if the probability is valid (ie. between `0` and `1`)
    fn is_valid_probability(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probability(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}
