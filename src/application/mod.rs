//! Application layer containing the commit-phase orchestration.
//!
//! This module defines the `CommitRouter`, the entry point for routing a
//! commit attempt, and the `CommitRequestBuilder` that assembles the outbound
//! switch request from cached transaction state.

pub mod builder;
pub mod router;
