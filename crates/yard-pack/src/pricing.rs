//! Tiered per-square-foot sod pricing.

use serde::Serialize;

/// One row of the price table. Costs are dollars per square foot.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ProjectTier {
    /// `None` marks the "too small to quote" row.
    pub tier: Option<u8>,
    pub name: &'static str,
    pub max_sq_ft: f64,
    /// Kentucky Blue Grass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kbg_cost: Option<f64>,
    /// St. Augustine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub st_cost: Option<f64>,
}

/// Tiers ordered by ascending `max_sq_ft`.
pub static TIERS: [ProjectTier; 10] = [
    tier(None, "Too Small", 100.0, None),
    tier(Some(0), "Custom Tier - Low End", 500.0, Some((5.0, 6.0))),
    tier(Some(1), "Tier 1", 650.0, Some((4.1, 5.3))),
    tier(Some(2), "Tier 2", 890.0, Some((3.7, 4.6))),
    tier(Some(3), "Tier 3", 1250.0, Some((3.35, 3.95))),
    tier(Some(4), "Tier 4", 1850.0, Some((3.05, 3.45))),
    tier(Some(5), "Tier 5", 2500.0, Some((2.85, 3.1))),
    tier(Some(6), "Tier 6", 3500.0, Some((2.7, 2.85))),
    tier(Some(7), "Tier 7", 5000.0, Some((2.6, 2.7))),
    tier(Some(8), "Custom Tier - High End", 999_999_999.0, Some((2.3, 2.55))),
];

const fn tier(
    tier: Option<u8>,
    name: &'static str,
    max_sq_ft: f64,
    costs: Option<(f64, f64)>,
) -> ProjectTier {
    let (kbg_cost, st_cost) = match costs {
        Some((kbg, st)) => (Some(kbg), Some(st)),
        None => (None, None),
    };
    ProjectTier {
        tier,
        name,
        max_sq_ft,
        kbg_cost,
        st_cost,
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq)]
pub struct CostBreakdown {
    pub kbg_cost: f64,
    pub st_cost: f64,
    pub total_cost: f64,
}

/// First tier whose ceiling covers `sq_ft`.
pub fn project_tier(sq_ft: f64) -> Option<&'static ProjectTier> {
    TIERS.iter().find(|tier| sq_ft <= tier.max_sq_ft)
}

/// Prices a project from its two grass areas. Projects below the smallest
/// priced tier (or beyond the table) cost nothing.
pub fn project_cost(kbg_sq_ft: f64, st_sq_ft: f64) -> CostBreakdown {
    let Some(tier) = project_tier(kbg_sq_ft + st_sq_ft) else {
        return CostBreakdown::default();
    };
    if tier.tier.is_none() {
        return CostBreakdown::default();
    }

    let kbg_cost = kbg_sq_ft * tier.kbg_cost.unwrap_or(0.0);
    let st_cost = st_sq_ft * tier.st_cost.unwrap_or(0.0);
    CostBreakdown {
        kbg_cost,
        st_cost,
        total_cost: kbg_cost + st_cost,
    }
}
