use std::collections::BTreeMap;

use super::domain::{
    AiModelType, BaseQuestion, ComplexityTier, DeploymentScenario, ExpertiseLevel, Overlay,
    Persona, PersonaAccess, QuestionId, Section, SubPersona, TherapeuticArea,
};

/// Immutable reference data the engine operates over.
///
/// Constructed once at startup (from the standard seed or a caller-supplied
/// catalog) and shared behind `Arc` across concurrent requests; nothing in the
/// engine mutates it.
#[derive(Debug, Clone)]
pub struct CatalogContext {
    personas: Vec<Persona>,
    therapeutic_areas: Vec<TherapeuticArea>,
    model_types: Vec<AiModelType>,
    deployment_scenarios: Vec<DeploymentScenario>,
    sections: Vec<Section>,
}

impl CatalogContext {
    pub fn new(
        personas: Vec<Persona>,
        therapeutic_areas: Vec<TherapeuticArea>,
        model_types: Vec<AiModelType>,
        deployment_scenarios: Vec<DeploymentScenario>,
        sections: Vec<Section>,
    ) -> Self {
        Self {
            personas,
            therapeutic_areas,
            model_types,
            deployment_scenarios,
            sections,
        }
    }

    /// The built-in clinical AI readiness catalog.
    pub fn standard() -> Self {
        Self::new(
            standard_personas(),
            standard_therapeutic_areas(),
            standard_model_types(),
            standard_deployment_scenarios(),
            standard_sections(),
        )
    }

    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }

    pub fn therapeutic_areas(&self) -> &[TherapeuticArea] {
        &self.therapeutic_areas
    }

    pub fn model_types(&self) -> &[AiModelType] {
        &self.model_types
    }

    pub fn deployment_scenarios(&self) -> &[DeploymentScenario] {
        &self.deployment_scenarios
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn persona(&self, id: &str) -> Option<&Persona> {
        self.personas.iter().find(|persona| persona.id == id)
    }

    pub fn therapeutic_area(&self, id: &str) -> Option<&TherapeuticArea> {
        self.therapeutic_areas.iter().find(|area| area.id == id)
    }

    pub fn model_type(&self, id: &str) -> Option<&AiModelType> {
        self.model_types.iter().find(|model| model.id == id)
    }

    pub fn deployment_scenario(&self, id: &str) -> Option<&DeploymentScenario> {
        self.deployment_scenarios.iter().find(|scenario| scenario.id == id)
    }

    pub fn persona_ids(&self) -> Vec<String> {
        self.personas.iter().map(|persona| persona.id.clone()).collect()
    }

    pub fn therapeutic_area_ids(&self) -> Vec<String> {
        self.therapeutic_areas.iter().map(|area| area.id.clone()).collect()
    }

    pub fn model_type_ids(&self) -> Vec<String> {
        self.model_types.iter().map(|model| model.id.clone()).collect()
    }

    pub fn deployment_scenario_ids(&self) -> Vec<String> {
        self.deployment_scenarios
            .iter()
            .map(|scenario| scenario.id.clone())
            .collect()
    }
}

fn standard_personas() -> Vec<Persona> {
    vec![
        Persona {
            id: "clinical-ops".to_string(),
            name: "Clinical Operations".to_string(),
            is_admin: false,
            sub_personas: vec![
                SubPersona {
                    id: "trial-manager".to_string(),
                    name: "Clinical Trial Manager".to_string(),
                    expertise: ExpertiseLevel::Practitioner,
                },
                SubPersona {
                    id: "site-coordinator".to_string(),
                    name: "Site Coordinator".to_string(),
                    expertise: ExpertiseLevel::Foundational,
                },
            ],
        },
        Persona {
            id: "regulatory".to_string(),
            name: "Regulatory Affairs".to_string(),
            is_admin: false,
            sub_personas: vec![SubPersona {
                id: "submissions-lead".to_string(),
                name: "Regulatory Submissions Lead".to_string(),
                expertise: ExpertiseLevel::Expert,
            }],
        },
        Persona {
            id: "data-science".to_string(),
            name: "Data Science".to_string(),
            is_admin: false,
            sub_personas: vec![
                SubPersona {
                    id: "ml-engineer".to_string(),
                    name: "ML Engineer".to_string(),
                    expertise: ExpertiseLevel::Practitioner,
                },
                SubPersona {
                    id: "biostatistician".to_string(),
                    name: "Biostatistician".to_string(),
                    expertise: ExpertiseLevel::Expert,
                },
            ],
        },
        Persona {
            id: "admin".to_string(),
            name: "Platform Administrator".to_string(),
            is_admin: true,
            sub_personas: Vec::new(),
        },
    ]
}

fn standard_therapeutic_areas() -> Vec<TherapeuticArea> {
    vec![
        TherapeuticArea {
            id: "oncology".to_string(),
            name: "Oncology".to_string(),
            overlay_points: 8,
            tier: ComplexityTier::High,
        },
        TherapeuticArea {
            id: "cardiology".to_string(),
            name: "Cardiology".to_string(),
            overlay_points: 5,
            tier: ComplexityTier::Medium,
        },
        TherapeuticArea {
            id: "rare-disease".to_string(),
            name: "Rare Disease".to_string(),
            overlay_points: 10,
            tier: ComplexityTier::Critical,
        },
        TherapeuticArea {
            id: "general-wellness".to_string(),
            name: "General Wellness".to_string(),
            overlay_points: 2,
            tier: ComplexityTier::Low,
        },
    ]
}

fn standard_model_types() -> Vec<AiModelType> {
    vec![
        AiModelType {
            id: "generative-llm".to_string(),
            name: "Generative Language Model".to_string(),
            complexity_points: 10,
            tier: ComplexityTier::Critical,
        },
        AiModelType {
            id: "cv-diagnostic".to_string(),
            name: "Computer Vision Diagnostic".to_string(),
            complexity_points: 8,
            tier: ComplexityTier::High,
        },
        AiModelType {
            id: "predictive-risk".to_string(),
            name: "Predictive Risk Model".to_string(),
            complexity_points: 5,
            tier: ComplexityTier::Medium,
        },
        AiModelType {
            id: "rule-based".to_string(),
            name: "Rule-Based Decision Support".to_string(),
            complexity_points: 2,
            tier: ComplexityTier::Low,
        },
    ]
}

fn standard_deployment_scenarios() -> Vec<DeploymentScenario> {
    vec![
        DeploymentScenario {
            id: "patient-facing".to_string(),
            name: "Patient-Facing Application".to_string(),
            complexity_points: 10,
            tier: ComplexityTier::Critical,
        },
        DeploymentScenario {
            id: "clinician-support".to_string(),
            name: "Clinician Decision Support".to_string(),
            complexity_points: 8,
            tier: ComplexityTier::High,
        },
        DeploymentScenario {
            id: "back-office".to_string(),
            name: "Back-Office Automation".to_string(),
            complexity_points: 4,
            tier: ComplexityTier::Medium,
        },
        DeploymentScenario {
            id: "research-only".to_string(),
            name: "Research Sandbox".to_string(),
            complexity_points: 2,
            tier: ComplexityTier::Low,
        },
    ]
}

fn all_personas_access() -> Vec<PersonaAccess> {
    vec![
        PersonaAccess {
            persona_id: "clinical-ops".to_string(),
            sub_persona_id: None,
        },
        PersonaAccess {
            persona_id: "regulatory".to_string(),
            sub_persona_id: None,
        },
        PersonaAccess {
            persona_id: "data-science".to_string(),
            sub_persona_id: None,
        },
    ]
}

fn all_areas() -> Vec<String> {
    vec![
        "oncology".to_string(),
        "cardiology".to_string(),
        "rare-disease".to_string(),
        "general-wellness".to_string(),
    ]
}

fn all_models() -> Vec<String> {
    vec![
        "generative-llm".to_string(),
        "cv-diagnostic".to_string(),
        "predictive-risk".to_string(),
        "rule-based".to_string(),
    ]
}

fn all_scenarios() -> Vec<String> {
    vec![
        "patient-facing".to_string(),
        "clinician-support".to_string(),
        "back-office".to_string(),
        "research-only".to_string(),
    ]
}

fn standard_sections() -> Vec<Section> {
    vec![
        Section {
            id: "data-governance".to_string(),
            name: "Data Governance & Privacy".to_string(),
            base_points: 30,
            is_critical_blocker: true,
            default_responsible_role: "Data Protection Officer".to_string(),
            questions: vec![
                BaseQuestion {
                    id: QuestionId("dg-01".to_string()),
                    text: "Is every training and inference dataset covered by a documented lawful basis for processing?".to_string(),
                    points: 10,
                    is_blocker: true,
                    evidence_required: vec![
                        "Data processing agreement".to_string(),
                        "Records of processing activities".to_string(),
                    ],
                    responsible_roles: vec!["Data Protection Officer".to_string()],
                    therapy_conditions: Some(all_areas()),
                    model_conditions: Some(all_models()),
                    deployment_conditions: Some(all_scenarios()),
                },
                BaseQuestion {
                    id: QuestionId("dg-02".to_string()),
                    text: "Are de-identification procedures validated against re-identification attacks?".to_string(),
                    points: 10,
                    is_blocker: false,
                    evidence_required: vec!["De-identification validation report".to_string()],
                    responsible_roles: vec![
                        "Data Protection Officer".to_string(),
                        "ML Engineer".to_string(),
                    ],
                    therapy_conditions: Some(all_areas()),
                    model_conditions: Some(all_models()),
                    deployment_conditions: Some(all_scenarios()),
                },
                BaseQuestion {
                    id: QuestionId("dg-03".to_string()),
                    text: "Is patient consent management integrated with data retention and deletion workflows?".to_string(),
                    points: 10,
                    is_blocker: false,
                    evidence_required: vec!["Consent audit trail".to_string()],
                    responsible_roles: vec!["Data Protection Officer".to_string()],
                    therapy_conditions: Some(vec![
                        "oncology".to_string(),
                        "cardiology".to_string(),
                        "rare-disease".to_string(),
                    ]),
                    model_conditions: Some(all_models()),
                    deployment_conditions: Some(vec![
                        "patient-facing".to_string(),
                        "clinician-support".to_string(),
                    ]),
                },
            ],
            therapy_overlays: BTreeMap::from([
                (
                    "oncology".to_string(),
                    Overlay {
                        complexity_points: 4,
                        question_texts: vec![
                            "Are tumor registry integrations governed by a data sharing agreement?".to_string(),
                            "Is genomic data segregated with access controls beyond baseline PHI handling?".to_string(),
                        ],
                    },
                ),
                (
                    "rare-disease".to_string(),
                    Overlay {
                        complexity_points: 6,
                        question_texts: vec![
                            "Given small cohort sizes, has re-identification risk been reassessed for rare-disease datasets?".to_string(),
                        ],
                    },
                ),
            ]),
            model_overlays: BTreeMap::from([(
                "generative-llm".to_string(),
                Overlay {
                    complexity_points: 5,
                    question_texts: vec![
                        "Are prompts and completions containing PHI excluded from vendor retraining?".to_string(),
                        "Is there a redaction layer between clinical notes and the model context window?".to_string(),
                    ],
                },
            )]),
            deployment_overlays: BTreeMap::from([(
                "patient-facing".to_string(),
                Overlay {
                    complexity_points: 4,
                    question_texts: vec![
                        "Do patient-facing data captures present granular consent options at the point of collection?".to_string(),
                    ],
                },
            )]),
            persona_access: all_personas_access(),
        },
        Section {
            id: "model-validation".to_string(),
            name: "Model Validation & Performance".to_string(),
            base_points: 35,
            is_critical_blocker: true,
            default_responsible_role: "ML Validation Lead".to_string(),
            questions: vec![
                BaseQuestion {
                    id: QuestionId("mv-01".to_string()),
                    text: "Has model performance been validated on a held-out population representative of the target clinical setting?".to_string(),
                    points: 15,
                    is_blocker: true,
                    evidence_required: vec!["Validation study protocol".to_string(), "Performance report".to_string()],
                    responsible_roles: vec!["ML Validation Lead".to_string(), "Biostatistician".to_string()],
                    therapy_conditions: Some(all_areas()),
                    model_conditions: Some(all_models()),
                    deployment_conditions: Some(all_scenarios()),
                },
                BaseQuestion {
                    id: QuestionId("mv-02".to_string()),
                    text: "Are subgroup analyses documented for protected and clinically vulnerable populations?".to_string(),
                    points: 10,
                    is_blocker: true,
                    evidence_required: vec!["Bias and fairness assessment".to_string()],
                    responsible_roles: vec!["Biostatistician".to_string()],
                    therapy_conditions: Some(all_areas()),
                    model_conditions: Some(all_models()),
                    deployment_conditions: Some(all_scenarios()),
                },
                BaseQuestion {
                    id: QuestionId("mv-03".to_string()),
                    text: "Is there a documented procedure for revalidation after retraining or data drift?".to_string(),
                    points: 10,
                    is_blocker: false,
                    evidence_required: vec!["Revalidation SOP".to_string()],
                    responsible_roles: vec!["ML Validation Lead".to_string()],
                    therapy_conditions: None,
                    model_conditions: Some(vec![
                        "generative-llm".to_string(),
                        "cv-diagnostic".to_string(),
                        "predictive-risk".to_string(),
                    ]),
                    deployment_conditions: Some(all_scenarios()),
                },
            ],
            therapy_overlays: BTreeMap::from([(
                "oncology".to_string(),
                Overlay {
                    complexity_points: 5,
                    question_texts: vec![
                        "Has concordance with tumor board decisions been measured on a prospective cohort?".to_string(),
                    ],
                },
            )]),
            model_overlays: BTreeMap::from([
                (
                    "generative-llm".to_string(),
                    Overlay {
                        complexity_points: 6,
                        question_texts: vec![
                            "Is hallucination rate measured against a clinician-adjudicated reference set?".to_string(),
                            "Are guardrail bypass attempts part of the red-team protocol?".to_string(),
                        ],
                    },
                ),
                (
                    "cv-diagnostic".to_string(),
                    Overlay {
                        complexity_points: 4,
                        question_texts: vec![
                            "Is imaging performance stratified by scanner vendor and acquisition protocol?".to_string(),
                        ],
                    },
                ),
            ]),
            deployment_overlays: BTreeMap::new(),
            persona_access: vec![
                PersonaAccess {
                    persona_id: "data-science".to_string(),
                    sub_persona_id: None,
                },
                PersonaAccess {
                    persona_id: "regulatory".to_string(),
                    sub_persona_id: None,
                },
            ],
        },
        Section {
            id: "clinical-safety".to_string(),
            name: "Clinical Safety & Oversight".to_string(),
            base_points: 30,
            is_critical_blocker: true,
            default_responsible_role: "Clinical Safety Officer".to_string(),
            questions: vec![
                BaseQuestion {
                    id: QuestionId("cs-01".to_string()),
                    text: "Is a qualified clinician accountable for reviewing AI-influenced decisions before they reach patients?".to_string(),
                    points: 15,
                    is_blocker: true,
                    evidence_required: vec!["Clinical oversight charter".to_string()],
                    responsible_roles: vec!["Clinical Safety Officer".to_string()],
                    therapy_conditions: Some(all_areas()),
                    model_conditions: Some(all_models()),
                    deployment_conditions: Some(vec![
                        "patient-facing".to_string(),
                        "clinician-support".to_string(),
                    ]),
                },
                BaseQuestion {
                    id: QuestionId("cs-02".to_string()),
                    text: "Does an adverse event pathway exist for harms suspected to involve the AI system?".to_string(),
                    points: 15,
                    is_blocker: true,
                    evidence_required: vec!["Adverse event SOP".to_string(), "Incident register".to_string()],
                    responsible_roles: vec![
                        "Clinical Safety Officer".to_string(),
                        "Quality Manager".to_string(),
                    ],
                    therapy_conditions: Some(all_areas()),
                    model_conditions: Some(all_models()),
                    deployment_conditions: Some(all_scenarios()),
                },
            ],
            therapy_overlays: BTreeMap::from([
                (
                    "cardiology".to_string(),
                    Overlay {
                        complexity_points: 3,
                        question_texts: vec![
                            "Are arrhythmia alerts escalated to on-call cardiology within the agreed SLA?".to_string(),
                        ],
                    },
                ),
                (
                    "rare-disease".to_string(),
                    Overlay {
                        complexity_points: 5,
                        // Orphan populations rarely have reference cohorts; the
                        // contribution applies even without extra questions.
                        question_texts: Vec::new(),
                    },
                ),
            ]),
            model_overlays: BTreeMap::new(),
            deployment_overlays: BTreeMap::from([(
                "patient-facing".to_string(),
                Overlay {
                    complexity_points: 6,
                    question_texts: vec![
                        "Can a patient reach a human clinician from every AI-mediated interaction?".to_string(),
                        "Is crisis language detected and routed to an emergency pathway?".to_string(),
                    ],
                },
            )]),
            persona_access: vec![
                PersonaAccess {
                    persona_id: "clinical-ops".to_string(),
                    sub_persona_id: None,
                },
                PersonaAccess {
                    persona_id: "regulatory".to_string(),
                    sub_persona_id: Some("submissions-lead".to_string()),
                },
            ],
        },
        Section {
            id: "deployment-controls".to_string(),
            name: "Deployment & Access Controls".to_string(),
            base_points: 20,
            is_critical_blocker: false,
            default_responsible_role: "Platform Engineer".to_string(),
            questions: vec![
                BaseQuestion {
                    id: QuestionId("dc-01".to_string()),
                    text: "Are model endpoints isolated per environment with role-based access enforced?".to_string(),
                    points: 10,
                    is_blocker: false,
                    evidence_required: vec!["Access control matrix".to_string()],
                    responsible_roles: vec!["Platform Engineer".to_string()],
                    therapy_conditions: None,
                    model_conditions: Some(all_models()),
                    deployment_conditions: Some(all_scenarios()),
                },
                BaseQuestion {
                    id: QuestionId("dc-02".to_string()),
                    text: "Does a tested rollback path exist for reverting to the previous model version?".to_string(),
                    points: 10,
                    is_blocker: true,
                    evidence_required: vec!["Rollback runbook".to_string(), "Rollback drill record".to_string()],
                    responsible_roles: vec!["Platform Engineer".to_string(), "MLOps Lead".to_string()],
                    therapy_conditions: Some(all_areas()),
                    model_conditions: Some(all_models()),
                    deployment_conditions: Some(all_scenarios()),
                },
            ],
            therapy_overlays: BTreeMap::new(),
            model_overlays: BTreeMap::from([(
                "generative-llm".to_string(),
                Overlay {
                    complexity_points: 4,
                    question_texts: vec![
                        "Are system prompts version-controlled and promoted through the same pipeline as code?".to_string(),
                    ],
                },
            )]),
            deployment_overlays: BTreeMap::from([(
                "clinician-support".to_string(),
                Overlay {
                    complexity_points: 3,
                    question_texts: vec![
                        "Is EHR integration scoped to the minimum data the model needs per invocation?".to_string(),
                    ],
                },
            )]),
            persona_access: vec![
                PersonaAccess {
                    persona_id: "data-science".to_string(),
                    sub_persona_id: None,
                },
                PersonaAccess {
                    persona_id: "clinical-ops".to_string(),
                    sub_persona_id: Some("trial-manager".to_string()),
                },
            ],
        },
        Section {
            id: "monitoring-lifecycle".to_string(),
            name: "Monitoring & Lifecycle Management".to_string(),
            base_points: 20,
            is_critical_blocker: false,
            default_responsible_role: "MLOps Lead".to_string(),
            questions: vec![
                BaseQuestion {
                    id: QuestionId("ml-01".to_string()),
                    text: "Are live performance and drift metrics monitored with alerting thresholds agreed with clinical stakeholders?".to_string(),
                    points: 10,
                    is_blocker: false,
                    evidence_required: vec!["Monitoring dashboard".to_string(), "Alert runbook".to_string()],
                    responsible_roles: vec!["MLOps Lead".to_string()],
                    therapy_conditions: Some(all_areas()),
                    model_conditions: Some(all_models()),
                    deployment_conditions: Some(all_scenarios()),
                },
                BaseQuestion {
                    id: QuestionId("ml-02".to_string()),
                    text: "Is there a decommissioning plan covering data disposition and user notification?".to_string(),
                    points: 10,
                    is_blocker: false,
                    evidence_required: vec!["Decommissioning plan".to_string()],
                    responsible_roles: vec!["MLOps Lead".to_string(), "Quality Manager".to_string()],
                    therapy_conditions: None,
                    model_conditions: None,
                    deployment_conditions: None,
                },
            ],
            therapy_overlays: BTreeMap::new(),
            model_overlays: BTreeMap::from([(
                "predictive-risk".to_string(),
                Overlay {
                    complexity_points: 3,
                    question_texts: vec![
                        "Is calibration tracked over time and recalibration triggered by a defined threshold?".to_string(),
                    ],
                },
            )]),
            deployment_overlays: BTreeMap::from([(
                "back-office".to_string(),
                Overlay {
                    complexity_points: 2,
                    question_texts: vec![
                        "Are automated back-office actions sampled for human audit on a fixed cadence?".to_string(),
                    ],
                },
            )]),
            persona_access: all_personas_access(),
        },
    ]
}
