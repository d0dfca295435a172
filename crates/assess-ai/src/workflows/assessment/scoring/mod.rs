mod config;
mod policy;
mod rules;

pub use config::{ReadinessThresholds, ScoringConfig};
pub use policy::ReadinessStatus;
pub use rules::{CriticalGap, SectionScore};

pub(crate) use rules::{resolve_dimensions, SelectedDimensions};

use serde::{Deserialize, Serialize};

use super::catalog::CatalogContext;
use super::domain::{AssessmentSelection, GeneratedAssessment, ResponseMap};
use super::recommendations::{generate_recommendations, Recommendation};
use policy::classify_readiness;

/// Stateless scorer applying the configured thresholds to a composed
/// assessment and its caller-supplied responses.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(
        &self,
        catalog: &CatalogContext,
        selection: &AssessmentSelection,
        assessment: &GeneratedAssessment,
        responses: &ResponseMap,
    ) -> AssessmentResult {
        let (section_scores, total_score, critical_gaps) =
            rules::score_sections(assessment, responses);

        let dimensions = resolve_dimensions(catalog, selection);
        let therapy_overlay_score = dimensions.therapy_overlay_score();
        let model_complexity_score = dimensions.model_complexity_score();
        let deployment_complexity_score = dimensions.deployment_complexity_score();

        let final_score = total_score
            + therapy_overlay_score
            + model_complexity_score
            + deployment_complexity_score;
        let percentage = percentage_of(final_score, self.config.max_possible_score);
        let readiness_status =
            classify_readiness(percentage, &critical_gaps, &self.config.thresholds);
        let recommendations = generate_recommendations(&critical_gaps, &dimensions, percentage);

        AssessmentResult {
            total_score,
            max_possible_score: self.config.max_possible_score,
            percentage,
            readiness_status,
            critical_gaps,
            recommendations,
            therapy_overlay_score,
            model_complexity_score,
            deployment_complexity_score,
            final_score,
            section_scores,
        }
    }
}

fn percentage_of(score: u32, max: u32) -> u8 {
    if max == 0 {
        return 0;
    }

    let pct = (score as f64 * 100.0 / max as f64).round();
    pct.clamp(0.0, 100.0) as u8
}

/// Scored assessment returned to the caller; never retained by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub total_score: u32,
    pub max_possible_score: u32,
    pub percentage: u8,
    pub readiness_status: ReadinessStatus,
    pub critical_gaps: Vec<CriticalGap>,
    pub recommendations: Vec<Recommendation>,
    pub therapy_overlay_score: u32,
    pub model_complexity_score: u32,
    pub deployment_complexity_score: u32,
    pub final_score: u32,
    pub section_scores: Vec<SectionScore>,
}
