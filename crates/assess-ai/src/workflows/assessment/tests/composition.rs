use std::collections::BTreeSet;

use super::common::*;
use crate::workflows::assessment::composer::compose_section;
use crate::workflows::assessment::domain::{
    AssessmentSelection, OverlayDimension, QuestionId, QuestionSource,
};
use crate::workflows::assessment::{AssessmentError, CatalogContext};

#[test]
fn zero_overlays_reproduces_the_base_set() {
    let service = build_service();

    let assessment = service.generate(&author_selection()).expect("composes");

    assert_eq!(assessment.sections.len(), 1);
    let core = &assessment.sections[0];
    assert_eq!(core.enhanced_points, core.base_points);
    assert!(core.overlay_contributions.is_empty());
    let ids: Vec<&str> = core
        .questions
        .iter()
        .map(|question| question.id.as_str())
        .collect();
    assert_eq!(ids, vec!["core-01", "core-02"]);
    assert_eq!(core.max_points(), core.base_points);
}

#[test]
fn matched_overlays_raise_enhanced_points_once_per_overlay() {
    let catalog = rubric_catalog();
    let selection = AssessmentSelection {
        persona_id: "author".to_string(),
        sub_persona_id: None,
        therapeutic_area: Some("neuro".to_string()),
        model_types: vec!["llm".to_string()],
        deployment_scenarios: Vec::new(),
    };

    let composed = compose_section(&catalog.sections()[0], &selection, &mut BTreeSet::new())
        .expect("composes");

    // base 15 + therapy 2 + model 2; the therapy overlay expands into two
    // questions but contributes its points once.
    assert_eq!(composed.enhanced_points, 19);
    assert_eq!(composed.overlay_contributions.len(), 2);
}

#[test]
fn overlay_questions_use_namespaced_ids_and_inherit_the_default_role() {
    let service = build_service();

    let assessment = service.generate(&full_selection()).expect("composes");
    let core = &assessment.sections[0];

    let overlay_ids: Vec<&str> = core
        .questions
        .iter()
        .filter(|question| !question.source.is_base())
        .map(|question| question.id.as_str())
        .collect();
    assert_eq!(
        overlay_ids,
        vec!["core:therapy:neuro:0", "core:therapy:neuro:1", "core:model:llm:0"]
    );

    for question in core
        .questions
        .iter()
        .filter(|question| !question.source.is_base())
    {
        assert_eq!(question.points, 0);
        assert!(!question.is_blocker);
        assert_eq!(question.responsible_roles, vec!["Compliance Lead".to_string()]);
    }
}

#[test]
fn active_dimension_excludes_unconditioned_base_questions() {
    let service = build_service();
    let mut selection = author_selection();
    selection.therapeutic_area = Some("derm".to_string());

    let assessment = service.generate(&selection).expect("composes");
    let core = &assessment.sections[0];

    // core-02 has no therapy conditions; the filter is opt-in, not
    // default-inclusive.
    let ids: Vec<&str> = core
        .questions
        .iter()
        .map(|question| question.id.as_str())
        .collect();
    assert_eq!(ids, vec!["core-01"]);
    // derm has no overlay in this section; unmatched overlays are skipped.
    assert!(core.overlay_contributions.is_empty());
    assert_eq!(core.enhanced_points, core.base_points);
}

#[test]
fn empty_overlay_contributes_points_without_questions() {
    let service = build_service();
    let mut selection = author_selection();
    selection.deployment_scenarios = vec!["bedside".to_string()];

    let assessment = service.generate(&selection).expect("composes");
    let core = &assessment.sections[0];

    let contribution = core
        .overlay_contributions
        .iter()
        .find(|contribution| contribution.dimension == OverlayDimension::Deployment)
        .expect("bedside overlay recorded");
    assert_eq!(contribution.points, 3);
    assert!(contribution.question_ids.is_empty());
    assert_eq!(core.enhanced_points, core.base_points + 3);
    assert!(core
        .questions
        .iter()
        .all(|question| question.source.is_base()));
}

#[test]
fn overlay_expansion_order_is_therapy_then_model_then_deployment() {
    let service = build_service();

    let assessment = service.generate(&full_selection()).expect("composes");
    let core = &assessment.sections[0];

    let sources: Vec<&QuestionSource> = core
        .questions
        .iter()
        .map(|question| &question.source)
        .collect();
    let first_overlay = sources
        .iter()
        .position(|source| !source.is_base())
        .expect("overlay questions present");
    assert!(sources[..first_overlay]
        .iter()
        .all(|source| source.is_base()));
    assert!(matches!(
        sources[first_overlay],
        QuestionSource::TherapyOverlay { .. }
    ));
    assert!(matches!(
        sources.last().expect("non-empty"),
        QuestionSource::ModelOverlay { .. }
    ));
}

#[test]
fn composition_is_deterministic() {
    let service = build_service();
    let selection = full_selection();

    let first = service.generate(&selection).expect("composes");
    let second = service.generate(&selection).expect("composes");

    assert_eq!(first, second);
}

#[test]
fn composed_question_ids_are_unique() {
    let service = standard_service();
    let selection = AssessmentSelection {
        persona_id: "admin".to_string(),
        sub_persona_id: None,
        therapeutic_area: Some("oncology".to_string()),
        model_types: vec!["generative-llm".to_string(), "cv-diagnostic".to_string()],
        deployment_scenarios: vec!["patient-facing".to_string(), "clinician-support".to_string()],
    };

    let assessment = service.generate(&selection).expect("composes");

    let mut seen: BTreeSet<&QuestionId> = BTreeSet::new();
    for section in &assessment.sections {
        for question in &section.questions {
            assert!(seen.insert(&question.id), "duplicate id {:?}", question.id);
        }
    }
    assert_eq!(seen.len(), assessment.total_questions);
}

#[test]
fn shared_overlay_values_expand_separately_per_section() {
    let service = standard_service();
    let selection = AssessmentSelection {
        persona_id: "admin".to_string(),
        sub_persona_id: None,
        therapeutic_area: Some("oncology".to_string()),
        model_types: vec!["generative-llm".to_string()],
        deployment_scenarios: vec!["patient-facing".to_string()],
    };

    let assessment = service.generate(&selection).expect("composes");

    // generative-llm appears in more than one section; each expansion gets
    // ids under its own section so the answers stay independent.
    let llm_sections: BTreeSet<&str> = assessment
        .sections
        .iter()
        .filter(|section| {
            section
                .questions
                .iter()
                .any(|question| question.id.as_str().contains(":model:generative-llm:"))
        })
        .map(|section| section.section_id.as_str())
        .collect();
    assert!(llm_sections.len() > 1, "overlay reused across sections");

    let llm_ids: Vec<&str> = assessment
        .sections
        .iter()
        .flat_map(|section| &section.questions)
        .filter(|question| question.id.as_str().contains(":model:generative-llm:"))
        .map(|question| question.id.as_str())
        .collect();
    let distinct: BTreeSet<&&str> = llm_ids.iter().collect();
    assert_eq!(distinct.len(), llm_ids.len());
    for (section_id, id) in assessment.sections.iter().flat_map(|section| {
        section
            .questions
            .iter()
            .filter(|question| !question.source.is_base())
            .map(move |question| (&section.section_id, question.id.as_str()))
    }) {
        assert!(
            id.starts_with(&format!("{section_id}:")),
            "overlay id {id} not scoped to {section_id}"
        );
    }

    // One answer per composed question, no id shared between sections.
    let responses = compliant_responses(&assessment);
    assert_eq!(responses.len(), assessment.total_questions);
}

#[test]
fn enhanced_points_invariant_holds_across_overlay_subsets() {
    let catalog = CatalogContext::standard();
    let subsets = [
        AssessmentSelection::for_persona("admin"),
        AssessmentSelection {
            persona_id: "admin".to_string(),
            therapeutic_area: Some("oncology".to_string()),
            ..AssessmentSelection::default()
        },
        AssessmentSelection {
            persona_id: "admin".to_string(),
            model_types: vec!["generative-llm".to_string()],
            ..AssessmentSelection::default()
        },
        AssessmentSelection {
            persona_id: "admin".to_string(),
            therapeutic_area: Some("rare-disease".to_string()),
            model_types: vec!["predictive-risk".to_string(), "rule-based".to_string()],
            deployment_scenarios: vec!["back-office".to_string(), "research-only".to_string()],
            ..AssessmentSelection::default()
        },
    ];

    for selection in subsets {
        let mut seen = BTreeSet::new();
        for section in catalog.sections() {
            let composed = compose_section(section, &selection, &mut seen).expect("composes");
            let overlay_sum: u32 = composed
                .overlay_contributions
                .iter()
                .map(|contribution| contribution.points)
                .sum();
            assert_eq!(
                composed.enhanced_points,
                composed.base_points + overlay_sum,
                "section {}",
                section.id
            );
        }
    }
}

#[test]
fn synthetic_id_collision_fails_loudly() {
    let mut section = core_section();
    // Poison the catalog with a base id occupying the synthetic namespace.
    section.questions[0].id = QuestionId("core:therapy:neuro:0".to_string());

    let selection = AssessmentSelection {
        persona_id: "author".to_string(),
        therapeutic_area: Some("neuro".to_string()),
        ..AssessmentSelection::default()
    };

    let error = compose_section(&section, &selection, &mut BTreeSet::new())
        .expect_err("collision detected");

    match error {
        AssessmentError::Composition {
            dimension,
            overlay_id,
            question_id,
        } => {
            assert_eq!(dimension, "therapy");
            assert_eq!(overlay_id, "neuro");
            assert_eq!(question_id, "core:therapy:neuro:0");
        }
        other => panic!("expected composition error, got {other:?}"),
    }
}

#[test]
fn estimated_minutes_scale_with_question_count() {
    let service = build_service();

    let assessment = service.generate(&full_selection()).expect("composes");

    assert_eq!(
        assessment.estimated_minutes,
        assessment.total_questions as u32 * 3
    );
}
