use assess_ai::workflows::assessment::{
    AssessmentSelection, AssessmentService, CatalogContext, ScoringConfig,
};
use clap::Args;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Assessment service over the standard catalog with the configured score
/// ceiling.
pub(crate) fn standard_service(max_possible_score: u32) -> Arc<AssessmentService> {
    let config = ScoringConfig {
        max_possible_score,
        ..ScoringConfig::default()
    };
    Arc::new(AssessmentService::new(
        Arc::new(CatalogContext::standard()),
        config,
    ))
}

/// Dimension flags shared by the CLI subcommands that compose an assessment.
#[derive(Args, Debug, Default)]
pub(crate) struct SelectionArgs {
    /// Persona id to compose the assessment for
    #[arg(long)]
    pub(crate) persona: String,
    /// Optional sub-persona id refining section access
    #[arg(long)]
    pub(crate) sub_persona: Option<String>,
    /// Therapeutic area id to overlay onto the assessment
    #[arg(long)]
    pub(crate) therapeutic_area: Option<String>,
    /// AI model type ids (repeat the flag or separate with commas)
    #[arg(long = "model-type", value_delimiter = ',')]
    pub(crate) model_types: Vec<String>,
    /// Deployment scenario ids (repeat the flag or separate with commas)
    #[arg(long = "deployment-scenario", value_delimiter = ',')]
    pub(crate) deployment_scenarios: Vec<String>,
}

impl SelectionArgs {
    pub(crate) fn into_selection(self) -> AssessmentSelection {
        AssessmentSelection {
            persona_id: self.persona,
            sub_persona_id: self.sub_persona,
            therapeutic_area: self.therapeutic_area,
            model_types: self.model_types,
            deployment_scenarios: self.deployment_scenarios,
        }
    }
}
