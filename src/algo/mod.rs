/*!
# Flow Algorithms

This module provides the **maximum flow** machinery built on top of the
network representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use flownets::algo::*;
```
and gain access to the solver struct as well as the [`MaxFlow`] and
[`FlowQueries`] traits implemented on every network representation.
The solver is provided as an **iterator** over its augmenting steps, making it
easy to consume intermediate results lazily.
*/

mod max_flow;
mod queries;

use crate::prelude::*;

pub use max_flow::*;
pub use queries::*;
