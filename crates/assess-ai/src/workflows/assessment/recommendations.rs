use serde::{Deserialize, Serialize};

use super::scoring::{CriticalGap, SelectedDimensions};

/// Groups a recommendation by what produced it, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationCategory {
    BlockerGap,
    TherapyControl,
    ModelControl,
    DeploymentControl,
    OverallReadiness,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub message: String,
}

/// Deterministic remediation list. Emission order is fixed regardless of
/// input ordering: blocker gaps, then therapy, model, and deployment
/// controls, then the overall readiness item.
pub(crate) fn generate_recommendations(
    critical_gaps: &[CriticalGap],
    dimensions: &SelectedDimensions<'_>,
    percentage: u8,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    for gap in critical_gaps {
        let owners = if gap.responsible_roles.is_empty() {
            "unassigned".to_string()
        } else {
            gap.responsible_roles.join(", ")
        };
        let severity = if gap.section_critical {
            " in a critical section"
        } else {
            ""
        };
        recommendations.push(Recommendation {
            category: RecommendationCategory::BlockerGap,
            message: format!(
                "Resolve blocker '{}' in {}{} (owner: {owners})",
                gap.question_text, gap.section_name, severity
            ),
        });
    }

    if let Some(area) = dimensions.therapy {
        if area.tier.is_elevated() {
            recommendations.push(Recommendation {
                category: RecommendationCategory::TherapyControl,
                message: format!(
                    "{} is a {}-complexity therapeutic area: obtain clinical governance sign-off and document the required oversight controls before launch",
                    area.name,
                    area.tier.label()
                ),
            });
        }
    }

    for model in &dimensions.models {
        if model.tier.is_elevated() {
            recommendations.push(Recommendation {
                category: RecommendationCategory::ModelControl,
                message: format!(
                    "{} is a {}-complexity model type: require adversarial testing, output monitoring, and a documented failure-mode analysis",
                    model.name,
                    model.tier.label()
                ),
            });
        }
    }

    for scenario in &dimensions.scenarios {
        if scenario.tier.is_elevated() {
            recommendations.push(Recommendation {
                category: RecommendationCategory::DeploymentControl,
                message: format!(
                    "{} is a {}-complexity deployment scenario: require human escalation paths and staged rollout with kill-switch controls",
                    scenario.name,
                    scenario.tier.label()
                ),
            });
        }
    }

    let overall = if percentage < 70 {
        format!(
            "Overall readiness is {percentage}%: remediate the gaps above before scheduling a production review"
        )
    } else if percentage < 90 {
        format!(
            "Overall readiness is {percentage}%: address the remaining findings and re-assess to reach production-ready"
        )
    } else {
        format!(
            "Overall readiness is {percentage}%: maintain current controls and schedule a periodic re-assessment"
        )
    };
    recommendations.push(Recommendation {
        category: RecommendationCategory::OverallReadiness,
        message: overall,
    });

    recommendations
}
