//! Tower Shop (workspace facade crate).
//!
//! Re-exports the workspace crates as `tower_shop::{core,input,term,types}` and
//! hosts the runner's configuration.

pub mod config;

pub use tower_shop_core as core;
pub use tower_shop_input as input;
pub use tower_shop_term as term;
pub use tower_shop_types as types;
