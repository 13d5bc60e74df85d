/*!
`flownets` is a maximum-flow library designed for capacitated networks that are
- **directed** : An arc `(u, v)` is independent of its antiparallel partner `(v, u)`
- **integral** : Capacities and flow values are signed 64-bit integers
- **dense** : Nodes are numbered `0` to `n - 1` and per-pair lookups are cheap

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the network.
As most common networks do not exceed `2^32` nodes, this should normally suffice and save space as compared to `u64/usize`.
For **arcs**, we use a simple tuple-struct `Arc(Node, Node, Capacity)` where `Capacity` is an `i64`.
An arc is present exactly if its capacity is positive; a capacity of zero marks its absence.

### Available Representations

See the [`repr`] module for the full list of network storage backends:

- [`CapacityMatrix`](crate::repr::CapacityMatrix)
- [`CapacityAdjArray`](crate::repr::CapacityAdjArray)

Each representation makes different trade-offs in terms of memory usage and lookup/iteration performance.
Both answer neighborhood queries in either arc direction as required by residual traversals.

# Design

All algorithms/generators are provided as configurable structs that one can alter to their needs using either the *Builder* / *Setter* pattern before calling the configured algorithm on a provided network.
Alternatively, most important and commonly used functionalities should already be implemented via traits on the network itself, making them usable without configuring the algorithm beforehand.

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, arcs, and errors, basic network operations, and all standard network representations,
- [`algo`] includes the augmenting-path solver [`EdmondsKarp`](crate::algo::EdmondsKarp) together with the [`MaxFlow`](crate::algo::MaxFlow) and [`FlowQueries`](crate::algo::FlowQueries) traits implemented on networks themselves,
- [`gens`] includes a random network generator to generate random instances at runtime,
- [`io`] includes handlers for reading various network formats from input or writing a given network (or flow report) to an output,
- [`utils`] includes helper structs such as [`Labeling`](crate::utils::Labeling) to translate between external names and node indices.

In addition, lower level access to algorithms and concepts can be accessed in submodules.
[`repr::digest`] for example enables computing a `Sha256`-hash for a given network.

In most use-cases, `use flownets::{prelude::*, algo::*};` suffices for your needs.

# Example

```
use flownets::{algo::*, prelude::*};

let mut network = CapacityAdjArray::new(4);
network.add_arcs([(0, 1, 3), (0, 2, 5), (1, 3, 3), (2, 3, 4)]);

let (value, flow) = network.max_flow(0, 3).unwrap();
assert_eq!(value, 7);
assert_eq!(flow.net_flow_out_of(0), 7);
```
*/

pub mod algo;
pub mod arc;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

/// `flownets::prelude` includes definitions for nodes, arcs, and errors, all basic network operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{arc::*, error::*, node::*, ops::*, repr::*};
}
