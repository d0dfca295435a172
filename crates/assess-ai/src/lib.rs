//! Compliance readiness assessments for clinical AI deployments.
//!
//! The heart of the crate is [`workflows::assessment`]: a stateless engine that
//! filters a section catalog by persona, merges overlay questions for the
//! selected therapeutic area, model types, and deployment scenarios, scores
//! caller-supplied responses, and classifies production readiness.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
