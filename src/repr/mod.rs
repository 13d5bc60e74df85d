/*!
# Network Representations

This module defines the concrete **capacitated network** representations.

## Provided Representations

- [`CapacityMatrix`] stores a dense capacity matrix with constant-time
  capacity lookups at `O(n^2)` memory.
- [`CapacityAdjArray`] stores per-node out- and in-arc lists backed by inline
  small vectors, scaling with the number of arcs instead.

Both describe the same abstract network and implement the full set of
operation traits from [`ops`](crate::ops); they only differ in their
memory/lookup trade-offs. The augmenting path search works on either, so the
choice is purely a question of network density.

[`digest`](self::digest) additionally provides representation-independent hash
fingerprints of networks.
*/

use crate::{arc::*, error::*, node::*, ops::*};

mod adj;
mod matrix;

pub mod digest;

pub use adj::*;
pub use matrix::*;
