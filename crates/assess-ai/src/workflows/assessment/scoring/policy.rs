use serde::{Deserialize, Serialize};

use super::config::ReadinessThresholds;
use super::rules::CriticalGap;

/// Ordered readiness tiers, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReadinessStatus {
    NotReady,
    DevelopmentComplete,
    PreProduction,
    Conditional,
    ProductionReady,
}

impl ReadinessStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ReadinessStatus::NotReady => "not_ready",
            ReadinessStatus::DevelopmentComplete => "development_complete",
            ReadinessStatus::PreProduction => "pre_production",
            ReadinessStatus::Conditional => "conditional",
            ReadinessStatus::ProductionReady => "production_ready",
        }
    }
}

/// Single classification path for readiness: percentage picks the base tier,
/// then any unresolved blocker caps the result at `Conditional`. A passing
/// score never suppresses an open blocker.
pub(crate) fn classify_readiness(
    percentage: u8,
    critical_gaps: &[CriticalGap],
    thresholds: &ReadinessThresholds,
) -> ReadinessStatus {
    let base = if percentage >= thresholds.production_ready {
        ReadinessStatus::ProductionReady
    } else if percentage >= thresholds.conditional {
        ReadinessStatus::Conditional
    } else if percentage >= thresholds.pre_production {
        ReadinessStatus::PreProduction
    } else if percentage >= thresholds.development_complete {
        ReadinessStatus::DevelopmentComplete
    } else {
        ReadinessStatus::NotReady
    };

    if critical_gaps.is_empty() {
        base
    } else {
        base.min(ReadinessStatus::Conditional)
    }
}
