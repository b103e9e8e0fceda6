//! Capability base shared by every resource in a topology
//!
//! Every concrete resource (networks, the topology itself, and by
//!  convention anything else the stack models) embeds exactly one
//!  [`Common`] by value. It carries:
//!
//! - **Identity**: a human-readable name used to attribute diagnostics
//! - **Diagnostics**: a `tracing` span all of the resource's events are recorded in
//! - **Assertions**: a [`Require`] facility that turns a broken invariant
//!   into an [`InvariantViolation`] naming the resource and the offending key

mod common;
mod require;

pub use common::{Common, CommonConfig};
pub use require::{InvariantViolation, Require};
