use serde::{Deserialize, Serialize};

use super::super::catalog::CatalogContext;
use super::super::domain::{
    AiModelType, AssessmentSelection, ComposedQuestion, ComposedSection, DeploymentScenario,
    GeneratedAssessment, QuestionResponse, ResponseMap, ResponseValue, TherapeuticArea,
};

/// Earned versus earnable points for one composed section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScore {
    pub section_id: String,
    pub name: String,
    pub earned: u32,
    pub max: u32,
}

/// Blocker question left unresolved, collected for gating and remediation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalGap {
    pub question_id: String,
    pub question_text: String,
    pub section_id: String,
    pub section_name: String,
    pub responsible_roles: Vec<String>,
    pub section_critical: bool,
}

/// Catalog records for the dimension values a request selected. Unknown ids
/// resolve to empty contributions rather than errors.
#[derive(Debug, Clone)]
pub(crate) struct SelectedDimensions<'a> {
    pub therapy: Option<&'a TherapeuticArea>,
    pub models: Vec<&'a AiModelType>,
    pub scenarios: Vec<&'a DeploymentScenario>,
}

impl SelectedDimensions<'_> {
    pub fn therapy_overlay_score(&self) -> u32 {
        self.therapy.map(|area| area.overlay_points).unwrap_or(0)
    }

    pub fn model_complexity_score(&self) -> u32 {
        self.models.iter().map(|model| model.complexity_points).sum()
    }

    pub fn deployment_complexity_score(&self) -> u32 {
        self.scenarios
            .iter()
            .map(|scenario| scenario.complexity_points)
            .sum()
    }

    pub fn surcharge_total(&self) -> u32 {
        self.therapy_overlay_score()
            + self.model_complexity_score()
            + self.deployment_complexity_score()
    }
}

pub(crate) fn resolve_dimensions<'a>(
    catalog: &'a CatalogContext,
    selection: &AssessmentSelection,
) -> SelectedDimensions<'a> {
    SelectedDimensions {
        therapy: selection
            .therapeutic_area
            .as_deref()
            .and_then(|id| catalog.therapeutic_area(id)),
        models: selection
            .model_types
            .iter()
            .filter_map(|id| catalog.model_type(id))
            .collect(),
        scenarios: selection
            .deployment_scenarios
            .iter()
            .filter_map(|id| catalog.deployment_scenario(id))
            .collect(),
    }
}

/// Flat response-to-credit lookup for a single question: full points when
/// completed and compliant, a caller-resolved partial value when completed
/// and `Resolved`, otherwise zero.
fn question_credit(question: &ComposedQuestion, response: Option<&QuestionResponse>) -> u32 {
    match response {
        Some(response) if response.completed => match response.value {
            ResponseValue::Compliant => question.points,
            ResponseValue::Resolved(points) => points.min(question.points),
            ResponseValue::NonCompliant => 0,
        },
        _ => 0,
    }
}

/// Score every composed section and collect unresolved blockers across the
/// whole assessment.
pub(crate) fn score_sections(
    assessment: &GeneratedAssessment,
    responses: &ResponseMap,
) -> (Vec<SectionScore>, u32, Vec<CriticalGap>) {
    let mut section_scores = Vec::with_capacity(assessment.sections.len());
    let mut total: u32 = 0;
    let mut gaps = Vec::new();

    for section in &assessment.sections {
        let earned = score_section(section, responses);
        total += earned;
        section_scores.push(SectionScore {
            section_id: section.section_id.clone(),
            name: section.name.clone(),
            earned,
            max: section.max_points(),
        });

        for question in &section.questions {
            if question.is_blocker && !resolved(responses, question) {
                gaps.push(CriticalGap {
                    question_id: question.id.0.clone(),
                    question_text: question.text.clone(),
                    section_id: section.section_id.clone(),
                    section_name: section.name.clone(),
                    responsible_roles: question.responsible_roles.clone(),
                    section_critical: section.is_critical_blocker,
                });
            }
        }
    }

    (section_scores, total, gaps)
}

fn resolved(responses: &ResponseMap, question: &ComposedQuestion) -> bool {
    responses
        .get(&question.id)
        .map(QuestionResponse::resolves)
        .unwrap_or(false)
}

fn score_section(section: &ComposedSection, responses: &ResponseMap) -> u32 {
    let base_credit: u32 = section
        .questions
        .iter()
        .filter(|question| question.source.is_base())
        .map(|question| question_credit(question, responses.get(&question.id)))
        .sum();

    // Overlay points are all-or-nothing for the overlay's question group; an
    // overlay that generated no questions has nothing left to answer.
    let overlay_credit: u32 = section
        .overlay_contributions
        .iter()
        .filter(|contribution| {
            contribution.question_ids.iter().all(|id| {
                responses
                    .get(id)
                    .map(QuestionResponse::resolves)
                    .unwrap_or(false)
            })
        })
        .map(|contribution| contribution.points)
        .sum();

    base_credit + overlay_credit
}
