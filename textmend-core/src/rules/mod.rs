//! Literal rule preparation for textmend.
//!
//! This module is responsible for freezing a `RepairConfig` into a validated,
//! ordered rule table ready for application. Validation here is what upholds
//! the idempotence contract of the repair pass: replacements must be ASCII,
//! must never reintroduce another rule's pattern, and every pattern must be
//! reachable through the marker quick filter.

pub mod compiler;
