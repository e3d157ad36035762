use yard_pack::pricing::{CostBreakdown, TIERS, project_cost, project_tier};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn tiers_are_sorted_by_ceiling() {
    assert!(TIERS.windows(2).all(|pair| pair[0].max_sq_ft < pair[1].max_sq_ft));
}

#[test]
fn tier_lookup_uses_inclusive_ceilings() {
    assert_eq!(project_tier(0.0).map(|tier| tier.name), Some("Too Small"));
    assert_eq!(project_tier(100.0).map(|tier| tier.name), Some("Too Small"));
    assert_eq!(
        project_tier(100.5).map(|tier| tier.name),
        Some("Custom Tier - Low End")
    );
    assert_eq!(project_tier(650.0).and_then(|tier| tier.tier), Some(1));
    assert_eq!(project_tier(651.0).and_then(|tier| tier.tier), Some(2));
    assert_eq!(project_tier(5_000.0).and_then(|tier| tier.tier), Some(7));
    assert_eq!(project_tier(5_001.0).and_then(|tier| tier.tier), Some(8));
    assert!(project_tier(1e12).is_none());
}

#[test]
fn small_projects_are_not_priced() {
    assert_eq!(project_cost(60.0, 40.0), CostBreakdown::default());
    assert_eq!(project_cost(0.0, 0.0), CostBreakdown::default());
}

#[test]
fn oversized_projects_are_not_priced() {
    assert_eq!(project_cost(1e12, 0.0), CostBreakdown::default());
}

#[test]
fn cost_uses_the_tier_of_the_combined_area() {
    // 700 sq ft in total lands in Tier 2.
    let breakdown = project_cost(500.0, 200.0);
    assert_close(breakdown.kbg_cost, 500.0 * 3.7);
    assert_close(breakdown.st_cost, 200.0 * 4.6);
    assert_close(breakdown.total_cost, 1850.0 + 920.0);

    let st_only = project_cost(0.0, 2_000.0);
    assert_close(st_only.kbg_cost, 0.0);
    assert_close(st_only.total_cost, 2_000.0 * 3.1);
}
