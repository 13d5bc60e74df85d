/*!
# Network Hash Digests

This module provides the [`NetworkDigest`] trait, which allows computing
**hash-based digests** of networks that are independent of the underlying
data structure.

The digest encodes:
- the number of nodes, and
- a sorted arc list with capacities,

before feeding them into a cryptographic hash function.

## Example
```
use flownets::{prelude::*, repr::digest::NetworkDigest};

let mut network = CapacityAdjArray::new(10);
network.add_arc((4, 3, 10));
network.add_arc((1, 2, 5));

// Computes a SHA-256 digest (hex string of length 64).
assert_eq!(
    network.digest_sha256(),
    "bc441460c99622e063e0869aa66d8914c3bcbddbcd8f4c0334557d14aba61336"
);
```
*/

use std::fmt::LowerHex;

use super::*;
use ::digest::{Digest, Output};

/// Trait for computing a **canonical hash digest** of a network.
///
/// Digests are designed to be:
/// - **Representation independent**: Works with any [`CapacityGraph`]
///   implementation; equal networks yield equal digests.
/// - **Capacity sensitive**: Changing a single capacity changes the digest.
/// - **Deterministic**: Arcs are encoded in sorted order.
///
/// # Example
/// ```
/// use flownets::{prelude::*, repr::digest::NetworkDigest};
///
/// let mut network = CapacityMatrix::new(5);
/// network.add_arc((0, 1, 3));
/// network.add_arc((2, 3, 8));
///
/// // Any hash function implementing `Digest` can be used
/// let hex = network.digest::<sha2::Sha256>();
/// assert_eq!(hex.len(), 64); // SHA256 -> 64 hex chars
/// ```
pub trait NetworkDigest {
    /// Computes a digest of the network using the provided hash function `D`.
    ///
    /// The result is returned as a **hexadecimal string**.
    ///
    /// # Type Parameters
    /// - `D`: A hash function implementing [`Digest`].
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest;

    /// Computes a **SHA-256 digest** of the network.
    ///
    /// The returned string is exactly 64 characters long.
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

impl<G> NetworkDigest for G
where
    G: CapacityGraph,
{
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let mut hasher = D::new();
        let mut buffer = [0u8; 16];

        let encode_node = |buf: &mut [u8], u: Node| {
            for (i, b) in buf.iter_mut().enumerate().take(4) {
                *b = (u >> (8 * i)) as u8;
            }
        };

        // first encode the number of nodes in the network
        encode_node(&mut buffer[0..4], self.number_of_nodes());
        hasher.update(buffer);

        // then append the sorted arc list with capacities
        for Arc(u, v, c) in self.ordered_arcs() {
            encode_node(&mut buffer[0..4], u);
            encode_node(&mut buffer[4..8], v);
            for (i, b) in buffer[8..].iter_mut().enumerate() {
                *b = (c >> (8 * i)) as u8;
            }
            hasher.update(buffer);
        }

        format!("{:x}", hasher.finalize())
    }
}
