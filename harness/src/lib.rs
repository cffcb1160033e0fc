//! Gridshot Harness: concrete problem oracles and run transcripts.
//!
//! The harness supplies what the search core deliberately excludes: maze
//! parsing, movement legality, and cost tables, packaged as
//! [`gridshot_search::contract::ProblemOracle`] implementations, plus a JSON
//! transcript artifact for observability. The solver itself lives entirely
//! in `gridshot-search`; worlds provide domain data only.

#![forbid(unsafe_code)]

pub mod transcript;
pub mod worlds;
