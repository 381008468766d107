//! Letterfall (workspace facade crate).
//!
//! This package keeps a single `letterfall::{core,proto,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use letterfall_core as core;
pub use letterfall_proto as proto;
pub use letterfall_types as types;
