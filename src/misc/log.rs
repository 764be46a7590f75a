/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, each with one of the targets below so output may be narrowed to the relevant stage.

Note, no log implementation is provided by the library.
The cli installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature, e.g.:

```sh
RUST_LOG=closure=trace cargo run --features log --bin relsat_cli -- --set 1,2,3 --relation "1,2 2,3"
```
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [closure](crate::procedures::closure)
    pub const CLOSURE: &str = "closure";

    /// Logs related to [conversion](crate::procedures::conversion)
    pub const CONVERSION: &str = "conversion";

    /// Logs related to [propagation](crate::procedures::propagation)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [solving](crate::procedures::solve)
    pub const SOLVE: &str = "solve";

    /// Logs related to building a [context](crate::context)
    pub const CONTEXT: &str = "context";

    /// Logs related to the [implication graph](crate::structures::implication_graph)
    pub const GRAPH: &str = "graph";
}
