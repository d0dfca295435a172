//! Dynamic assessment composition and scoring.
//!
//! A request selects a persona (plus optional sub-persona), an optional
//! therapeutic area, and any number of AI model types and deployment
//! scenarios. The engine filters the section catalog by persona, merges
//! overlay questions for the selected dimensions, scores caller-supplied
//! responses, and classifies production readiness with blocker gating.
//! All of it operates over an immutable [`CatalogContext`] shared across
//! concurrent requests.

mod catalog;
mod composer;
pub mod domain;
mod filter;
mod recommendations;
pub mod router;
mod scoring;
mod service;

#[cfg(test)]
mod tests;

pub use catalog::CatalogContext;
pub use domain::{
    AiModelType, AssessmentSelection, BaseQuestion, ComplexityTier, ComposedQuestion,
    ComposedSection, DeploymentScenario, ExpertiseLevel, GeneratedAssessment, Overlay,
    OverlayContribution, OverlayDimension, Persona, PersonaAccess, QuestionId, QuestionResponse,
    QuestionSource, ResponseMap, ResponseValue, Section, SubPersona, TherapeuticArea,
};
pub use recommendations::{Recommendation, RecommendationCategory};
pub use router::assessment_router;
pub use scoring::{
    AssessmentResult, CriticalGap, ReadinessStatus, ReadinessThresholds, ScoringConfig,
    ScoringEngine, SectionScore,
};
pub use service::{AssessmentError, AssessmentService};
