use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog and synthesized questions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Complexity banding shared by every selection dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComplexityTier {
    Low,
    Medium,
    High,
    Critical,
}

impl ComplexityTier {
    pub const fn label(self) -> &'static str {
        match self {
            ComplexityTier::Low => "low",
            ComplexityTier::Medium => "medium",
            ComplexityTier::High => "high",
            ComplexityTier::Critical => "critical",
        }
    }

    /// High and Critical tiers trigger tailored remediation guidance.
    pub const fn is_elevated(self) -> bool {
        matches!(self, ComplexityTier::High | ComplexityTier::Critical)
    }
}

/// Self-reported depth of a sub-persona, used for rendering hints only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpertiseLevel {
    Foundational,
    Practitioner,
    Expert,
}

/// Audience for an assessment; admins see the entire catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub id: String,
    pub name: String,
    pub is_admin: bool,
    pub sub_personas: Vec<SubPersona>,
}

impl Persona {
    pub fn sub_persona(&self, id: &str) -> Option<&SubPersona> {
        self.sub_personas.iter().find(|sub| sub.id == id)
    }

    pub fn sub_persona_ids(&self) -> Vec<String> {
        self.sub_personas.iter().map(|sub| sub.id.clone()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubPersona {
    pub id: String,
    pub name: String,
    pub expertise: ExpertiseLevel,
}

/// Therapeutic area selection dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TherapeuticArea {
    pub id: String,
    pub name: String,
    pub overlay_points: u32,
    pub tier: ComplexityTier,
}

/// AI model type selection dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiModelType {
    pub id: String,
    pub name: String,
    pub complexity_points: u32,
    pub tier: ComplexityTier,
}

/// Deployment scenario selection dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentScenario {
    pub id: String,
    pub name: String,
    pub complexity_points: u32,
    pub tier: ComplexityTier,
}

/// Grants a persona (optionally narrowed to one sub-persona) access to a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaAccess {
    pub persona_id: String,
    pub sub_persona_id: Option<String>,
}

/// Catalog-stored question belonging to a section.
///
/// Each `*_conditions` list is an explicit opt-in: once the corresponding
/// dimension is selected on a request, questions without a matching entry are
/// excluded from the composed set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseQuestion {
    pub id: QuestionId,
    pub text: String,
    pub points: u32,
    pub is_blocker: bool,
    pub evidence_required: Vec<String>,
    pub responsible_roles: Vec<String>,
    pub therapy_conditions: Option<Vec<String>>,
    pub model_conditions: Option<Vec<String>>,
    pub deployment_conditions: Option<Vec<String>>,
}

/// Extra questions and points a section gains when a dimension value is selected.
///
/// The point contribution is a single value for the whole overlay, decoupled
/// from how many question texts it expands into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlay {
    pub complexity_points: u32,
    pub question_texts: Vec<String>,
}

/// Catalog section: ordered base questions plus per-dimension overlay maps
/// keyed by the dimension value id they match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub name: String,
    pub base_points: u32,
    pub is_critical_blocker: bool,
    pub default_responsible_role: String,
    pub questions: Vec<BaseQuestion>,
    pub therapy_overlays: BTreeMap<String, Overlay>,
    pub model_overlays: BTreeMap<String, Overlay>,
    pub deployment_overlays: BTreeMap<String, Overlay>,
    pub persona_access: Vec<PersonaAccess>,
}

/// The three overlay dimensions, in their fixed composition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OverlayDimension {
    Therapy,
    Model,
    Deployment,
}

impl OverlayDimension {
    /// Namespace prefix for synthesized question ids.
    pub const fn prefix(self) -> &'static str {
        match self {
            OverlayDimension::Therapy => "therapy",
            OverlayDimension::Model => "model",
            OverlayDimension::Deployment => "deployment",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            OverlayDimension::Therapy => "therapeutic area",
            OverlayDimension::Model => "AI model type",
            OverlayDimension::Deployment => "deployment scenario",
        }
    }
}

/// Where a composed question came from, carrying its point-resolution rule:
/// base questions hold their own points, overlay questions share their
/// overlay's single section-level contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionSource {
    Base,
    TherapyOverlay { area_id: String },
    ModelOverlay { model_id: String },
    DeploymentOverlay { scenario_id: String },
}

impl QuestionSource {
    pub const fn is_base(&self) -> bool {
        matches!(self, QuestionSource::Base)
    }
}

/// Question in a composed assessment, either catalog-stored or synthesized
/// from an overlay at request time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedQuestion {
    pub id: QuestionId,
    pub text: String,
    /// Own points for base questions; 0 for overlay questions, whose credit is
    /// tracked once per overlay in the section's contribution ledger.
    pub points: u32,
    pub is_blocker: bool,
    pub evidence_required: Vec<String>,
    pub responsible_roles: Vec<String>,
    pub source: QuestionSource,
}

/// Single overlay's point contribution to a composed section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayContribution {
    pub dimension: OverlayDimension,
    pub overlay_id: String,
    pub points: u32,
    pub question_ids: Vec<QuestionId>,
}

/// Per-request composition result for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedSection {
    pub section_id: String,
    pub name: String,
    pub base_points: u32,
    pub enhanced_points: u32,
    pub is_critical_blocker: bool,
    pub default_responsible_role: String,
    pub questions: Vec<ComposedQuestion>,
    pub overlay_contributions: Vec<OverlayContribution>,
}

impl ComposedSection {
    /// Maximum earnable score for this section: retained base question points
    /// plus every overlay contribution counted exactly once.
    pub fn max_points(&self) -> u32 {
        let base: u32 = self
            .questions
            .iter()
            .filter(|question| question.source.is_base())
            .map(|question| question.points)
            .sum();
        let overlays: u32 = self
            .overlay_contributions
            .iter()
            .map(|contribution| contribution.points)
            .sum();
        base + overlays
    }
}

/// Which dimension values a caller picked for one assessment request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSelection {
    pub persona_id: String,
    #[serde(default)]
    pub sub_persona_id: Option<String>,
    #[serde(default)]
    pub therapeutic_area: Option<String>,
    #[serde(default)]
    pub model_types: Vec<String>,
    #[serde(default)]
    pub deployment_scenarios: Vec<String>,
}

impl AssessmentSelection {
    pub fn for_persona(persona_id: impl Into<String>) -> Self {
        Self {
            persona_id: persona_id.into(),
            ..Self::default()
        }
    }
}

/// Caller-resolved answer to one question. Partial credit is pre-resolved by
/// the caller into `Resolved(points)` before reaching the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseValue {
    Compliant,
    NonCompliant,
    Resolved(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub value: ResponseValue,
    pub completed: bool,
}

impl QuestionResponse {
    pub const fn compliant() -> Self {
        Self {
            value: ResponseValue::Compliant,
            completed: true,
        }
    }

    pub const fn non_compliant() -> Self {
        Self {
            value: ResponseValue::NonCompliant,
            completed: true,
        }
    }

    pub const fn pending() -> Self {
        Self {
            value: ResponseValue::NonCompliant,
            completed: false,
        }
    }

    /// A response resolves a question when it is completed with a compliant
    /// or pre-resolved value.
    pub fn resolves(&self) -> bool {
        self.completed && !matches!(self.value, ResponseValue::NonCompliant)
    }
}

/// Map of responses keyed by composed question id, supplied per request.
pub type ResponseMap = BTreeMap<QuestionId, QuestionResponse>;

/// Composed assessment handed back to the caller for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedAssessment {
    pub sections: Vec<ComposedSection>,
    pub total_questions: usize,
    pub max_score: u32,
    pub estimated_minutes: u32,
}
