use super::common::*;
use crate::workflows::assessment::recommendations::generate_recommendations;
use crate::workflows::assessment::scoring::{resolve_dimensions, CriticalGap, SelectedDimensions};
use crate::workflows::assessment::{AssessmentSelection, RecommendationCategory};

fn gap(question_id: &str, roles: &[&str], section_critical: bool) -> CriticalGap {
    CriticalGap {
        question_id: question_id.to_string(),
        question_text: format!("Question {question_id}"),
        section_id: "core".to_string(),
        section_name: "Core Controls".to_string(),
        responsible_roles: roles.iter().map(|role| role.to_string()).collect(),
        section_critical,
    }
}

fn empty_dimensions() -> SelectedDimensions<'static> {
    SelectedDimensions {
        therapy: None,
        models: Vec::new(),
        scenarios: Vec::new(),
    }
}

#[test]
fn categories_are_emitted_in_fixed_order() {
    let catalog = rubric_catalog();
    let dimensions = resolve_dimensions(&catalog, &full_selection());
    let gaps = vec![gap("core-01", &["Compliance Lead"], true)];

    let recommendations = generate_recommendations(&gaps, &dimensions, 62);

    let categories: Vec<RecommendationCategory> = recommendations
        .iter()
        .map(|recommendation| recommendation.category)
        .collect();
    assert_eq!(
        categories,
        vec![
            RecommendationCategory::BlockerGap,
            RecommendationCategory::TherapyControl,
            RecommendationCategory::ModelControl,
            RecommendationCategory::DeploymentControl,
            RecommendationCategory::OverallReadiness,
        ]
    );
}

#[test]
fn blocker_message_names_owner_and_critical_section() {
    let gaps = vec![gap("core-01", &["Compliance Lead", "Site Lead"], true)];

    let recommendations = generate_recommendations(&gaps, &empty_dimensions(), 50);

    assert_eq!(
        recommendations[0].message,
        "Resolve blocker 'Question core-01' in Core Controls in a critical section \
         (owner: Compliance Lead, Site Lead)"
    );
}

#[test]
fn blocker_without_roles_reads_unassigned() {
    let gaps = vec![gap("core-01", &[], false)];

    let recommendations = generate_recommendations(&gaps, &empty_dimensions(), 50);

    assert_eq!(
        recommendations[0].message,
        "Resolve blocker 'Question core-01' in Core Controls (owner: unassigned)"
    );
}

#[test]
fn low_tier_dimensions_produce_no_control_items() {
    let catalog = rubric_catalog();
    let selection = AssessmentSelection {
        persona_id: "author".to_string(),
        therapeutic_area: Some("derm".to_string()),
        model_types: vec!["tabular".to_string()],
        deployment_scenarios: vec!["lab".to_string()],
        ..Default::default()
    };
    let dimensions = resolve_dimensions(&catalog, &selection);

    let recommendations = generate_recommendations(&[], &dimensions, 95);

    assert_eq!(recommendations.len(), 1);
    assert_eq!(
        recommendations[0].category,
        RecommendationCategory::OverallReadiness
    );
}

#[test]
fn elevated_tiers_name_the_dimension_and_its_label() {
    let catalog = rubric_catalog();
    let dimensions = resolve_dimensions(&catalog, &full_selection());

    let recommendations = generate_recommendations(&[], &dimensions, 95);
    let messages: Vec<&str> = recommendations
        .iter()
        .map(|recommendation| recommendation.message.as_str())
        .collect();

    assert!(messages[0].starts_with("Neurology is a high-complexity therapeutic area"));
    assert!(messages[1].starts_with("Language Model is a critical-complexity model type"));
    assert!(messages[2].starts_with("Bedside Use is a high-complexity deployment scenario"));
}

#[test]
fn overall_message_tracks_percentage_buckets() {
    let dimensions = empty_dimensions();

    let low = generate_recommendations(&[], &dimensions, 69);
    let mid = generate_recommendations(&[], &dimensions, 89);
    let high = generate_recommendations(&[], &dimensions, 90);

    assert!(low[0].message.contains("remediate the gaps above"));
    assert!(mid[0].message.contains("re-assess to reach production-ready"));
    assert!(high[0].message.contains("schedule a periodic re-assessment"));
}
