//! # HireSync Core
//!
//! Domain types and the availability-matching algorithm for the HireSync
//! interview-scheduling service.
//!
//! The centerpiece is the [`matcher`] module: given recruiter and candidate
//! weekly availability windows, it computes same-day overlaps of at least a
//! minimum duration and projects each onto the next calendar occurrence of
//! its weekday. The matcher is pure — it performs no I/O and reads no clocks;
//! the reference date is an explicit input.
//!
//! Natural-language availability is turned into structured windows by an
//! external parser service, reached through the [`oracle`] seam. The matcher
//! treats oracle output as untrusted input and validates it before use.
//!
//! All times in this crate are naive local time. Recruiter and candidate are
//! assumed to share a single local clock; no timezone conversion happens
//! anywhere.

/// Error types shared across the workspace
pub mod errors;
/// Availability matching: overlap computation and date projection
pub mod matcher;
/// Mock implementations for testing
pub mod mock;
/// Domain models: availability windows, schedule requests, messages
pub mod models;
/// Seam for the external text-to-windows parser service
pub mod oracle;
