// Decision-table tests for the cost-rate lookup.
//
// The table is tiny but every cell is a business rule lifted from the
// pricing spreadsheet, so it is pinned cell by cell, together with the
// keyword tie-break and the unknown-collector fallback.

use proptest::prelude::*;
use rust_decimal_macros::dec;

use ventas::modules::sales::models::{ArticleCategory, ArticleMarker, Collector};
use ventas::modules::sales::services::SaleCalculator;

fn rate_for(collector: &str, article: &str) -> rust_decimal::Decimal {
    let calculator = SaleCalculator::new();
    let collector = Collector::parse(collector);
    let category = ArticleCategory::new(article);
    calculator.compute_cost_rate(&collector, category.marker())
}

#[test]
fn test_charlie_bracket() {
    assert_eq!(rate_for("CHARLIE", "Vestido Promo"), dec!(0.46));
    assert_eq!(rate_for("CHARLIE", "Tejido Promo"), dec!(0.46));
    assert_eq!(rate_for("CHARLIE", "Vestido Mayor"), dec!(0.60));
    assert_eq!(rate_for("CHARLIE", "Tejido Mayor"), dec!(0.60));
    assert_eq!(rate_for("CHARLIE", "Vestido"), dec!(0.40));
    assert_eq!(rate_for("CHARLIE", "Tejido"), dec!(0.40));
}

#[test]
fn test_charlie_has_no_sol_bracket() {
    // SOL only exists for the Rita/Tomi/Mery group; under Charlie it
    // prices like a plain article
    assert_eq!(rate_for("CHARLIE", "Vestido Sol"), dec!(0.40));
}

#[test]
fn test_rita_tomi_mery_share_a_bracket() {
    for collector in ["RITA", "TOMI", "MERY"] {
        assert_eq!(rate_for(collector, "Vestido Promo"), dec!(0.41));
        assert_eq!(rate_for(collector, "Tejido Mayor"), dec!(0.35));
        assert_eq!(rate_for(collector, "Vestido Sol"), dec!(0.30));
        assert_eq!(rate_for(collector, "Vestido"), dec!(0.20));
        assert_eq!(rate_for(collector, "Tejido"), dec!(0.20));
    }
}

#[test]
fn test_promo_beats_mayor_under_charlie() {
    // A label carrying both keywords resolves to PROMO, so 0.46, never
    // the 0.60 wholesale rate
    assert_eq!(rate_for("CHARLIE", "Vestido Promo Mayor"), dec!(0.46));
    assert_eq!(rate_for("CHARLIE", "Mayor Promo"), dec!(0.46));
}

#[test]
fn test_mayor_beats_sol_in_shared_bracket() {
    assert_eq!(rate_for("RITA", "Tejido Mayor Sol"), dec!(0.35));
}

#[test]
fn test_unknown_collector_falls_back_to_default() {
    assert_eq!(rate_for("UNKNOWN", "UNKNOWN"), dec!(0.20));
    assert_eq!(rate_for("", "Vestido"), dec!(0.20));
    // The fallback ignores the article bracket entirely
    assert_eq!(rate_for("RAMONA", "Vestido Promo"), dec!(0.20));
    assert_eq!(rate_for("RAMONA", "Tejido Mayor"), dec!(0.20));
}

#[test]
fn test_lookup_is_case_insensitive() {
    assert_eq!(rate_for("charlie", "vestido promo"), dec!(0.46));
    assert_eq!(rate_for("Rita", "TEJIDO MAYOR"), dec!(0.35));
    assert_eq!(rate_for("mery", "Vestido SOL"), dec!(0.30));
}

proptest! {
    /// The rate is always one of the seven table literals, whatever the
    /// inputs look like
    #[test]
    fn test_rate_is_always_a_table_literal(
        collector in "[A-Za-z]{0,12}",
        article in "[A-Za-z ]{0,24}",
    ) {
        let rate = rate_for(&collector, &article);
        let table = [
            dec!(0.20), dec!(0.30), dec!(0.35), dec!(0.40),
            dec!(0.41), dec!(0.46), dec!(0.60),
        ];

        prop_assert!(table.contains(&rate), "unexpected rate {}", rate);
    }

    /// Pure lookup: the same pair always yields the same rate
    #[test]
    fn test_lookup_is_deterministic(
        collector in "[A-Za-z]{0,12}",
        article in "[A-Za-z ]{0,24}",
    ) {
        prop_assert_eq!(rate_for(&collector, &article), rate_for(&collector, &article));
    }

    /// Unknown collectors always resolve to the default, for any article
    #[test]
    fn test_fallback_is_reachable_for_any_article(
        article in "[A-Za-z ]{0,24}",
    ) {
        prop_assert_eq!(rate_for("NOBODY", &article), dec!(0.20));
    }
}

#[test]
fn test_marker_resolution_matches_lookup() {
    // The marker resolved at construction is the one the table sees
    let category = ArticleCategory::new("Tejido Promo");
    assert_eq!(category.marker(), ArticleMarker::Promo);

    let calculator = SaleCalculator::new();
    assert_eq!(
        calculator.compute_cost_rate(&Collector::Charlie, category.marker()),
        dec!(0.46)
    );
}
