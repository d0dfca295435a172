use super::common::*;
use crate::workflows::assessment::catalog::CatalogContext;
use crate::workflows::assessment::filter::sections_for_persona;
use crate::workflows::assessment::AssessmentError;

#[test]
fn persona_without_sub_persona_sees_open_sections_only() {
    let catalog = rubric_catalog();

    let sections = sections_for_persona(&catalog, "author", None).expect("persona exists");

    let ids: Vec<&str> = sections.iter().map(|section| section.id.as_str()).collect();
    assert_eq!(ids, vec!["core"]);
}

#[test]
fn sub_persona_unlocks_restricted_sections() {
    let catalog = rubric_catalog();

    let sections =
        sections_for_persona(&catalog, "author", Some("lead")).expect("sub persona exists");

    let ids: Vec<&str> = sections.iter().map(|section| section.id.as_str()).collect();
    assert_eq!(ids, vec!["core", "ops"]);
}

#[test]
fn admin_persona_bypasses_filtering() {
    let catalog = rubric_catalog();

    let sections = sections_for_persona(&catalog, "admin", None).expect("admin exists");

    assert_eq!(sections.len(), catalog.sections().len());
}

#[test]
fn unknown_persona_lists_known_ids() {
    let catalog = rubric_catalog();

    let error = sections_for_persona(&catalog, "ghost", None).expect_err("persona unknown");

    match error {
        AssessmentError::PersonaNotFound { persona_id, known } => {
            assert_eq!(persona_id, "ghost");
            assert!(known.contains(&"author".to_string()));
            assert!(known.contains(&"admin".to_string()));
        }
        other => panic!("expected persona not found, got {other:?}"),
    }
}

#[test]
fn foreign_sub_persona_lists_valid_alternatives() {
    let catalog = rubric_catalog();

    let error =
        sections_for_persona(&catalog, "author", Some("intruder")).expect_err("sub unknown");

    match error {
        AssessmentError::SubPersonaNotFound {
            persona_id,
            sub_persona_id,
            valid,
        } => {
            assert_eq!(persona_id, "author");
            assert_eq!(sub_persona_id, "intruder");
            assert_eq!(valid, vec!["lead".to_string()]);
        }
        other => panic!("expected sub-persona not found, got {other:?}"),
    }
}

#[test]
fn standard_catalog_personas_each_resolve() {
    let catalog = CatalogContext::standard();

    for persona in catalog.personas() {
        let sections = sections_for_persona(&catalog, &persona.id, None)
            .expect("every seeded persona resolves");
        assert!(
            !sections.is_empty(),
            "persona {} should see at least one section",
            persona.id
        );
    }
}
