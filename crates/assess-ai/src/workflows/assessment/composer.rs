use std::collections::{BTreeMap, BTreeSet};

use super::catalog::CatalogContext;
use super::domain::{
    AssessmentSelection, ComposedQuestion, ComposedSection, GeneratedAssessment, Overlay,
    OverlayContribution, OverlayDimension, QuestionId, QuestionSource, Section,
};
use super::filter::sections_for_persona;
use super::scoring::resolve_dimensions;
use super::service::AssessmentError;

/// Compose the full assessment for one request: persona-filtered sections,
/// dimension-filtered base questions, and overlay expansions, in a fixed
/// deterministic order.
pub(crate) fn compose_assessment(
    catalog: &CatalogContext,
    selection: &AssessmentSelection,
    minutes_per_question: u32,
) -> Result<GeneratedAssessment, AssessmentError> {
    let filtered = sections_for_persona(
        catalog,
        &selection.persona_id,
        selection.sub_persona_id.as_deref(),
    )?;

    // One id namespace for the whole assessment: synthetic ids are scoped by
    // section, and the set catches any base id straying into that namespace.
    let mut seen: BTreeSet<QuestionId> = BTreeSet::new();
    let mut sections = Vec::with_capacity(filtered.len());
    for section in filtered {
        sections.push(compose_section(section, selection, &mut seen)?);
    }

    let total_questions = sections.iter().map(|section| section.questions.len()).sum();
    let section_max: u32 = sections.iter().map(ComposedSection::max_points).sum();
    let dimensions = resolve_dimensions(catalog, selection);
    let max_score = section_max + dimensions.surcharge_total();

    Ok(GeneratedAssessment {
        sections,
        total_questions,
        max_score,
        estimated_minutes: total_questions as u32 * minutes_per_question,
    })
}

/// Compose a single section. Order is fixed: base questions first, then
/// therapy, model, and deployment overlay expansions.
pub(crate) fn compose_section(
    section: &Section,
    selection: &AssessmentSelection,
    seen: &mut BTreeSet<QuestionId>,
) -> Result<ComposedSection, AssessmentError> {
    let mut questions: Vec<ComposedQuestion> = Vec::new();
    let mut contributions: Vec<OverlayContribution> = Vec::new();

    let therapy_selected: &[String] = selection
        .therapeutic_area
        .as_ref()
        .map(std::slice::from_ref)
        .unwrap_or(&[]);

    for question in base_questions(section, selection, therapy_selected) {
        // Catalog question ids are unique by construction; track them so
        // synthetic ids cannot silently shadow one.
        seen.insert(question.id.clone());
        questions.push(question);
    }

    expand_overlays(
        OverlayDimension::Therapy,
        &section.therapy_overlays,
        therapy_selected,
        section,
        &mut questions,
        &mut contributions,
        seen,
    )?;
    expand_overlays(
        OverlayDimension::Model,
        &section.model_overlays,
        &selection.model_types,
        section,
        &mut questions,
        &mut contributions,
        seen,
    )?;
    expand_overlays(
        OverlayDimension::Deployment,
        &section.deployment_overlays,
        &selection.deployment_scenarios,
        section,
        &mut questions,
        &mut contributions,
        seen,
    )?;

    let overlay_points: u32 = contributions
        .iter()
        .map(|contribution| contribution.points)
        .sum();

    Ok(ComposedSection {
        section_id: section.id.clone(),
        name: section.name.clone(),
        base_points: section.base_points,
        enhanced_points: section.base_points + overlay_points,
        is_critical_blocker: section.is_critical_blocker,
        default_responsible_role: section.default_responsible_role.clone(),
        questions,
        overlay_contributions: contributions,
    })
}

/// Base questions surviving the dimension filters.
///
/// Each condition list is an opt-in: once a dimension is selected, questions
/// without a matching entry for that dimension are excluded. The three
/// dimensions filter independently.
fn base_questions(
    section: &Section,
    selection: &AssessmentSelection,
    therapy_selected: &[String],
) -> Vec<ComposedQuestion> {
    section
        .questions
        .iter()
        .filter(|question| {
            matches_condition(question.therapy_conditions.as_deref(), therapy_selected)
                && matches_condition(question.model_conditions.as_deref(), &selection.model_types)
                && matches_condition(
                    question.deployment_conditions.as_deref(),
                    &selection.deployment_scenarios,
                )
        })
        .map(|question| ComposedQuestion {
            id: question.id.clone(),
            text: question.text.clone(),
            points: question.points,
            is_blocker: question.is_blocker,
            evidence_required: question.evidence_required.clone(),
            responsible_roles: question.responsible_roles.clone(),
            source: QuestionSource::Base,
        })
        .collect()
}

fn matches_condition(conditions: Option<&[String]>, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }

    match conditions {
        Some(conditions) => selected.iter().any(|id| conditions.contains(id)),
        None => false,
    }
}

/// Expand every overlay matching a selected dimension value, appending the
/// synthesized questions and recording the overlay's single point
/// contribution. Overlay maps iterate in key order, keeping composition
/// deterministic. Overlays for unselected or unknown ids are skipped.
#[allow(clippy::too_many_arguments)]
fn expand_overlays(
    dimension: OverlayDimension,
    overlays: &BTreeMap<String, Overlay>,
    selected: &[String],
    section: &Section,
    questions: &mut Vec<ComposedQuestion>,
    contributions: &mut Vec<OverlayContribution>,
    seen: &mut BTreeSet<QuestionId>,
) -> Result<(), AssessmentError> {
    for (overlay_id, overlay) in overlays {
        if !selected.contains(overlay_id) {
            continue;
        }

        let mut question_ids = Vec::with_capacity(overlay.question_texts.len());
        for (index, text) in overlay.question_texts.iter().enumerate() {
            // Scoped by section: the same overlay value may appear in several
            // sections and each expansion must stay independently answerable.
            let id = QuestionId(format!(
                "{}:{}:{}:{}",
                section.id,
                dimension.prefix(),
                overlay_id,
                index
            ));
            if !seen.insert(id.clone()) {
                return Err(AssessmentError::Composition {
                    dimension: dimension.prefix(),
                    overlay_id: overlay_id.clone(),
                    question_id: id.0,
                });
            }

            question_ids.push(id.clone());
            questions.push(ComposedQuestion {
                id,
                text: text.clone(),
                points: 0,
                is_blocker: false,
                evidence_required: Vec::new(),
                responsible_roles: vec![section.default_responsible_role.clone()],
                source: overlay_source(dimension, overlay_id),
            });
        }

        // An overlay with no question texts still contributes its points;
        // points and question count are decoupled.
        contributions.push(OverlayContribution {
            dimension,
            overlay_id: overlay_id.clone(),
            points: overlay.complexity_points,
            question_ids,
        });
    }

    Ok(())
}

fn overlay_source(dimension: OverlayDimension, overlay_id: &str) -> QuestionSource {
    match dimension {
        OverlayDimension::Therapy => QuestionSource::TherapyOverlay {
            area_id: overlay_id.to_string(),
        },
        OverlayDimension::Model => QuestionSource::ModelOverlay {
            model_id: overlay_id.to_string(),
        },
        OverlayDimension::Deployment => QuestionSource::DeploymentOverlay {
            scenario_id: overlay_id.to_string(),
        },
    }
}
