use crate::infra::{standard_service, SelectionArgs};
use assess_ai::error::AppError;
use assess_ai::workflows::assessment::{
    AssessmentSelection, QuestionResponse, ResponseMap, ScoringConfig,
};
use chrono::Local;
use clap::Args;

#[derive(Args, Debug)]
pub(crate) struct GenerateArgs {
    #[command(flatten)]
    pub(crate) selection: SelectionArgs,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Persona to compose the demo assessment for
    #[arg(long, default_value = "admin")]
    pub(crate) persona: String,
    /// Therapeutic area overlay for the demo
    #[arg(long, default_value = "oncology")]
    pub(crate) therapeutic_area: String,
    /// AI model types for the demo (comma separated)
    #[arg(long = "model-type", value_delimiter = ',', default_value = "generative-llm")]
    pub(crate) model_types: Vec<String>,
    /// Deployment scenarios for the demo (comma separated)
    #[arg(
        long = "deployment-scenario",
        value_delimiter = ',',
        default_value = "patient-facing"
    )]
    pub(crate) deployment_scenarios: Vec<String>,
    /// Fraction of questions answered compliant, in order of appearance
    #[arg(long, default_value_t = 0.8)]
    pub(crate) compliance_rate: f32,
}

pub(crate) fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let service = standard_service(ScoringConfig::default().max_possible_score);
    let selection = args.selection.into_selection();

    let assessment = service.generate(&selection)?;
    match serde_json::to_string_pretty(&assessment) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("assessment serialization failed: {err}"),
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        persona,
        therapeutic_area,
        model_types,
        deployment_scenarios,
        compliance_rate,
    } = args;
    let compliance_rate = compliance_rate.clamp(0.0, 1.0);

    let service = standard_service(ScoringConfig::default().max_possible_score);
    let selection = AssessmentSelection {
        persona_id: persona.clone(),
        therapeutic_area: Some(therapeutic_area.clone()),
        model_types: model_types.clone(),
        deployment_scenarios: deployment_scenarios.clone(),
        ..Default::default()
    };

    println!("Assessment composition demo ({})", Local::now().date_naive());
    println!(
        "Selection: persona {persona} | area {therapeutic_area} | models {} | scenarios {}",
        model_types.join(", "),
        deployment_scenarios.join(", ")
    );

    let assessment = service.generate(&selection)?;
    println!(
        "\nComposed {} questions across {} sections (max score {}, ~{} minutes)",
        assessment.total_questions,
        assessment.sections.len(),
        assessment.max_score,
        assessment.estimated_minutes
    );
    for section in &assessment.sections {
        println!(
            "- {}: {} questions | base {} -> enhanced {} points",
            section.name,
            section.questions.len(),
            section.base_points,
            section.enhanced_points
        );
        for contribution in &section.overlay_contributions {
            println!(
                "    overlay {} ({}): +{} points, {} questions",
                contribution.overlay_id,
                contribution.dimension.label(),
                contribution.points,
                contribution.question_ids.len()
            );
        }
        for question in section
            .questions
            .iter()
            .filter(|question| !question.source.is_base())
        {
            println!("    + {} [{}]", question.text, question.id.0);
        }
    }

    // Answer the leading share of questions compliant, leave the rest pending.
    let answered = (assessment.total_questions as f32 * compliance_rate).round() as usize;
    let mut responses = ResponseMap::new();
    for (index, question) in assessment
        .sections
        .iter()
        .flat_map(|section| section.questions.iter())
        .enumerate()
    {
        let response = if index < answered {
            QuestionResponse::compliant()
        } else {
            QuestionResponse::pending()
        };
        responses.insert(question.id.clone(), response);
    }

    let result = service.score(&selection, &responses)?;
    println!(
        "\nScored {answered}/{} questions compliant",
        assessment.total_questions
    );
    println!(
        "Section score {} + dimension surcharges {}/{}/{} = {} of {} ({}%)",
        result.total_score,
        result.therapy_overlay_score,
        result.model_complexity_score,
        result.deployment_complexity_score,
        result.final_score,
        result.max_possible_score,
        result.percentage
    );
    println!("Readiness: {}", result.readiness_status.label());

    if result.critical_gaps.is_empty() {
        println!("Critical gaps: none");
    } else {
        println!("Critical gaps:");
        for gap in &result.critical_gaps {
            println!(
                "- {} ({}) owned by {}",
                gap.question_text,
                gap.section_name,
                if gap.responsible_roles.is_empty() {
                    "unassigned".to_string()
                } else {
                    gap.responsible_roles.join(", ")
                }
            );
        }
    }

    println!("Recommendations:");
    for recommendation in &result.recommendations {
        println!("- {}", recommendation.message);
    }

    Ok(())
}
