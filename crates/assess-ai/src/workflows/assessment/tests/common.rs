use std::collections::BTreeMap;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::assessment::domain::{
    AiModelType, AssessmentSelection, BaseQuestion, ComplexityTier, DeploymentScenario,
    ExpertiseLevel, GeneratedAssessment, Overlay, Persona, PersonaAccess, QuestionId,
    QuestionResponse, ResponseMap, Section, SubPersona, TherapeuticArea,
};
use crate::workflows::assessment::{
    assessment_router, AssessmentService, CatalogContext, ScoringConfig,
};

/// Small fixed catalog with hand-checkable point totals.
pub(super) fn rubric_catalog() -> CatalogContext {
    CatalogContext::new(
        vec![
            Persona {
                id: "author".to_string(),
                name: "Assessment Author".to_string(),
                is_admin: false,
                sub_personas: vec![SubPersona {
                    id: "lead".to_string(),
                    name: "Compliance Lead".to_string(),
                    expertise: ExpertiseLevel::Practitioner,
                }],
            },
            Persona {
                id: "admin".to_string(),
                name: "Administrator".to_string(),
                is_admin: true,
                sub_personas: Vec::new(),
            },
        ],
        vec![
            TherapeuticArea {
                id: "neuro".to_string(),
                name: "Neurology".to_string(),
                overlay_points: 6,
                tier: ComplexityTier::High,
            },
            TherapeuticArea {
                id: "derm".to_string(),
                name: "Dermatology".to_string(),
                overlay_points: 3,
                tier: ComplexityTier::Low,
            },
        ],
        vec![
            AiModelType {
                id: "llm".to_string(),
                name: "Language Model".to_string(),
                complexity_points: 7,
                tier: ComplexityTier::Critical,
            },
            AiModelType {
                id: "tabular".to_string(),
                name: "Tabular Model".to_string(),
                complexity_points: 2,
                tier: ComplexityTier::Low,
            },
        ],
        vec![
            DeploymentScenario {
                id: "bedside".to_string(),
                name: "Bedside Use".to_string(),
                complexity_points: 4,
                tier: ComplexityTier::High,
            },
            DeploymentScenario {
                id: "lab".to_string(),
                name: "Lab Use".to_string(),
                complexity_points: 1,
                tier: ComplexityTier::Low,
            },
        ],
        vec![core_section(), ops_section()],
    )
}

fn all_dimension_ids() -> (Vec<String>, Vec<String>, Vec<String>) {
    (
        vec!["neuro".to_string(), "derm".to_string()],
        vec!["llm".to_string(), "tabular".to_string()],
        vec!["bedside".to_string(), "lab".to_string()],
    )
}

pub(super) fn core_section() -> Section {
    let (areas, models, scenarios) = all_dimension_ids();
    Section {
        id: "core".to_string(),
        name: "Core Controls".to_string(),
        base_points: 15,
        is_critical_blocker: true,
        default_responsible_role: "Compliance Lead".to_string(),
        questions: vec![
            BaseQuestion {
                id: QuestionId("core-01".to_string()),
                text: "Is the model card approved?".to_string(),
                points: 10,
                is_blocker: true,
                evidence_required: vec!["Model card".to_string()],
                responsible_roles: vec!["Compliance Lead".to_string()],
                therapy_conditions: Some(areas),
                model_conditions: Some(models),
                deployment_conditions: Some(scenarios),
            },
            BaseQuestion {
                id: QuestionId("core-02".to_string()),
                text: "Is a glossary of clinical terms maintained?".to_string(),
                points: 5,
                is_blocker: false,
                evidence_required: Vec::new(),
                responsible_roles: vec!["Compliance Lead".to_string()],
                therapy_conditions: None,
                model_conditions: None,
                deployment_conditions: None,
            },
        ],
        therapy_overlays: BTreeMap::from([(
            "neuro".to_string(),
            Overlay {
                complexity_points: 2,
                question_texts: vec![
                    "Are neurology-specific endpoints validated?".to_string(),
                    "Is specialist review scheduled?".to_string(),
                ],
            },
        )]),
        model_overlays: BTreeMap::from([(
            "llm".to_string(),
            Overlay {
                complexity_points: 2,
                question_texts: vec!["Is prompt logging enabled?".to_string()],
            },
        )]),
        deployment_overlays: BTreeMap::from([(
            "bedside".to_string(),
            Overlay {
                complexity_points: 3,
                question_texts: Vec::new(),
            },
        )]),
        persona_access: vec![PersonaAccess {
            persona_id: "author".to_string(),
            sub_persona_id: None,
        }],
    }
}

pub(super) fn ops_section() -> Section {
    let (areas, models, scenarios) = all_dimension_ids();
    Section {
        id: "ops".to_string(),
        name: "Operational Controls".to_string(),
        base_points: 10,
        is_critical_blocker: false,
        default_responsible_role: "Ops Lead".to_string(),
        questions: vec![BaseQuestion {
            id: QuestionId("ops-01".to_string()),
            text: "Is on-call coverage documented?".to_string(),
            points: 10,
            is_blocker: false,
            evidence_required: Vec::new(),
            responsible_roles: vec!["Ops Lead".to_string()],
            therapy_conditions: Some(areas),
            model_conditions: Some(models),
            deployment_conditions: Some(scenarios),
        }],
        therapy_overlays: BTreeMap::new(),
        model_overlays: BTreeMap::new(),
        deployment_overlays: BTreeMap::new(),
        persona_access: vec![PersonaAccess {
            persona_id: "author".to_string(),
            sub_persona_id: Some("lead".to_string()),
        }],
    }
}

pub(super) fn scoring_config() -> ScoringConfig {
    ScoringConfig::default()
}

pub(super) fn build_service() -> Arc<AssessmentService> {
    Arc::new(AssessmentService::new(
        Arc::new(rubric_catalog()),
        scoring_config(),
    ))
}

pub(super) fn standard_service() -> Arc<AssessmentService> {
    Arc::new(AssessmentService::new(
        Arc::new(CatalogContext::standard()),
        scoring_config(),
    ))
}

pub(super) fn author_selection() -> AssessmentSelection {
    AssessmentSelection::for_persona("author")
}

pub(super) fn full_selection() -> AssessmentSelection {
    AssessmentSelection {
        persona_id: "author".to_string(),
        sub_persona_id: Some("lead".to_string()),
        therapeutic_area: Some("neuro".to_string()),
        model_types: vec!["llm".to_string()],
        deployment_scenarios: vec!["bedside".to_string()],
    }
}

/// Responses resolving every question in the assessment as compliant.
pub(super) fn compliant_responses(assessment: &GeneratedAssessment) -> ResponseMap {
    assessment
        .sections
        .iter()
        .flat_map(|section| section.questions.iter())
        .map(|question| (question.id.clone(), QuestionResponse::compliant()))
        .collect()
}

pub(super) fn router_with_rubric() -> axum::Router {
    assessment_router(build_service())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
