use std::sync::Arc;

use axum::http::StatusCode;

use super::catalog::CatalogContext;
use super::composer::compose_assessment;
use super::domain::{AssessmentSelection, GeneratedAssessment, ResponseMap};
use super::scoring::{AssessmentResult, ScoringConfig, ScoringEngine};

/// Service facade composing the persona filter, question composer, and
/// scoring engine over a shared immutable catalog.
///
/// Every operation is stateless per invocation; the service never retains a
/// composed assessment or a response map.
pub struct AssessmentService {
    catalog: Arc<CatalogContext>,
    engine: ScoringEngine,
}

impl AssessmentService {
    pub fn new(catalog: Arc<CatalogContext>, config: ScoringConfig) -> Self {
        Self {
            catalog,
            engine: ScoringEngine::new(config),
        }
    }

    pub fn catalog(&self) -> &CatalogContext {
        &self.catalog
    }

    /// Compose the question set for a selection.
    pub fn generate(
        &self,
        selection: &AssessmentSelection,
    ) -> Result<GeneratedAssessment, AssessmentError> {
        self.validate(selection)?;
        compose_assessment(
            &self.catalog,
            selection,
            self.engine.config().minutes_per_question,
        )
    }

    /// Compose and score in one pass. Responses for unknown question ids are
    /// ignored.
    pub fn score(
        &self,
        selection: &AssessmentSelection,
        responses: &ResponseMap,
    ) -> Result<AssessmentResult, AssessmentError> {
        let assessment = self.generate(selection)?;
        Ok(self
            .engine
            .score(&self.catalog, selection, &assessment, responses))
    }

    /// Field-level validation first (collected, not fail-fast), then catalog
    /// resolution of the selected dimension ids.
    fn validate(&self, selection: &AssessmentSelection) -> Result<(), AssessmentError> {
        let mut issues = Vec::new();

        if selection.persona_id.trim().is_empty() {
            issues.push("persona_id: must not be empty".to_string());
        }
        if selection
            .sub_persona_id
            .as_deref()
            .is_some_and(|id| id.trim().is_empty())
        {
            issues.push("sub_persona_id: must not be blank when supplied".to_string());
        }
        if selection
            .therapeutic_area
            .as_deref()
            .is_some_and(|id| id.trim().is_empty())
        {
            issues.push("therapeutic_area: must not be blank when supplied".to_string());
        }
        for (index, id) in selection.model_types.iter().enumerate() {
            if id.trim().is_empty() {
                issues.push(format!("model_types[{index}]: must not be blank"));
            }
        }
        for (index, id) in selection.deployment_scenarios.iter().enumerate() {
            if id.trim().is_empty() {
                issues.push(format!("deployment_scenarios[{index}]: must not be blank"));
            }
        }

        if !issues.is_empty() {
            return Err(AssessmentError::Validation { issues });
        }

        if let Some(area) = selection.therapeutic_area.as_deref() {
            if self.catalog.therapeutic_area(area).is_none() {
                return Err(AssessmentError::TherapeuticAreaNotFound {
                    id: area.to_string(),
                    known: self.catalog.therapeutic_area_ids(),
                });
            }
        }
        for id in &selection.model_types {
            if self.catalog.model_type(id).is_none() {
                return Err(AssessmentError::ModelTypeNotFound {
                    id: id.clone(),
                    known: self.catalog.model_type_ids(),
                });
            }
        }
        for id in &selection.deployment_scenarios {
            if self.catalog.deployment_scenario(id).is_none() {
                return Err(AssessmentError::DeploymentScenarioNotFound {
                    id: id.clone(),
                    known: self.catalog.deployment_scenario_ids(),
                });
            }
        }

        Ok(())
    }
}

/// Error raised by the assessment engine.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("unknown persona '{persona_id}', known personas: {known:?}")]
    PersonaNotFound { persona_id: String, known: Vec<String> },
    #[error(
        "unknown sub-persona '{sub_persona_id}' for persona '{persona_id}', valid sub-personas: {valid:?}"
    )]
    SubPersonaNotFound {
        persona_id: String,
        sub_persona_id: String,
        valid: Vec<String>,
    },
    #[error("unknown therapeutic area '{id}', known areas: {known:?}")]
    TherapeuticAreaNotFound { id: String, known: Vec<String> },
    #[error("unknown AI model type '{id}', known types: {known:?}")]
    ModelTypeNotFound { id: String, known: Vec<String> },
    #[error("unknown deployment scenario '{id}', known scenarios: {known:?}")]
    DeploymentScenarioNotFound { id: String, known: Vec<String> },
    #[error("invalid selection: {}", .issues.join("; "))]
    Validation { issues: Vec<String> },
    #[error("duplicate question id '{question_id}' produced by {dimension} overlay '{overlay_id}'")]
    Composition {
        dimension: &'static str,
        overlay_id: String,
        question_id: String,
    },
}

impl AssessmentError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AssessmentError::PersonaNotFound { .. }
            | AssessmentError::SubPersonaNotFound { .. }
            | AssessmentError::TherapeuticAreaNotFound { .. }
            | AssessmentError::ModelTypeNotFound { .. }
            | AssessmentError::DeploymentScenarioNotFound { .. } => StatusCode::NOT_FOUND,
            AssessmentError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AssessmentError::Composition { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
