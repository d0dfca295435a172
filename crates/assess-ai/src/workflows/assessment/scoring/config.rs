/// Tunable scoring knobs sourced from operations policy.
///
/// `max_possible_score` is a fixed ceiling rather than a per-selection sum,
/// keeping percentages comparable across requests.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub max_possible_score: u32,
    pub thresholds: ReadinessThresholds,
    pub minutes_per_question: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_possible_score: 500,
            thresholds: ReadinessThresholds::default(),
            minutes_per_question: 3,
        }
    }
}

/// Percentage floors for each readiness tier, ordered descending.
#[derive(Debug, Clone)]
pub struct ReadinessThresholds {
    pub production_ready: u8,
    pub conditional: u8,
    pub pre_production: u8,
    pub development_complete: u8,
}

impl Default for ReadinessThresholds {
    fn default() -> Self {
        Self {
            production_ready: 85,
            conditional: 70,
            pre_production: 55,
            development_complete: 40,
        }
    }
}
