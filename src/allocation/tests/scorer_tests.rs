use rust_decimal_macros::dec;

use crate::allocation::{DiscountScorer, ImbalanceScorer};
use crate::rules::RuleSet;

use super::{buy_fund, empty_snapshot, position, snapshot_of};

#[test]
fn unheld_model_fund_gets_full_target_as_deviation() {
    let scorer = ImbalanceScorer::new();
    let funds = vec![buy_fund("ABCD11", dec!(100), dec!(120), dec!(100))];

    let scores = scorer.score(&empty_snapshot(), &funds, dec!(2));
    let score = &scores["ABCD11"];

    assert_eq!(score.actual_percent, dec!(0));
    assert_eq!(score.deviation, dec!(100));
    assert_eq!(score.urgency, dec!(100));
}

#[test]
fn deviation_inside_tolerance_band_has_no_urgency() {
    let scorer = ImbalanceScorer::new();
    // Held 48.5% against a 50% target: deviation 1.5, inside a 2pt band.
    let snapshot = snapshot_of(vec![
        position("AAAA11", dec!(485)),
        position("ZZZZ11", dec!(515)),
    ]);
    let funds = vec![buy_fund("AAAA11", dec!(100), dec!(100), dec!(50))];

    let scores = scorer.score(&snapshot, &funds, dec!(2));
    let score = &scores["AAAA11"];

    assert_eq!(score.deviation, dec!(1.5));
    assert_eq!(score.urgency, dec!(0));
}

#[test]
fn overweight_fund_has_no_urgency() {
    let scorer = ImbalanceScorer::new();
    // Held 80% against a 30% target.
    let snapshot = snapshot_of(vec![
        position("AAAA11", dec!(800)),
        position("ZZZZ11", dec!(200)),
    ]);
    let funds = vec![buy_fund("AAAA11", dec!(100), dec!(100), dec!(30))];

    let scores = scorer.score(&snapshot, &funds, dec!(2));
    let score = &scores["AAAA11"];

    assert_eq!(score.deviation, dec!(-50));
    assert_eq!(score.urgency, dec!(0));
}

#[test]
fn holdings_outside_the_model_dilute_actual_weights() {
    let scorer = ImbalanceScorer::new();
    // ZZZZ11 is not a model fund but still counts toward the total.
    let snapshot = snapshot_of(vec![
        position("AAAA11", dec!(100)),
        position("ZZZZ11", dec!(100)),
    ]);
    let funds = vec![buy_fund("AAAA11", dec!(100), dec!(100), dec!(60))];

    let scores = scorer.score(&snapshot, &funds, dec!(2));
    let score = &scores["AAAA11"];

    assert_eq!(score.actual_percent, dec!(50));
    assert_eq!(score.deviation, dec!(10));
    assert!(!scores.contains_key("ZZZZ11"));
}

#[test]
fn discount_is_measured_against_the_ceiling() {
    let scorer = DiscountScorer::new();
    let rules = RuleSet {
        allow_no_discount: false,
        min_acceptable_discount: dec!(5),
        ..Default::default()
    };
    let fund = buy_fund("AAAA11", dec!(90), dec!(100), dec!(10));

    let score = scorer.score(&fund, &rules);

    assert_eq!(score.discount, dec!(10));
    assert_eq!(score.clamped, dec!(10));
    assert!(score.eligible);
}

#[test]
fn fund_above_ceiling_is_ineligible_when_no_discount_disallowed() {
    let scorer = DiscountScorer::new();
    let rules = RuleSet {
        allow_no_discount: false,
        min_acceptable_discount: dec!(0),
        ..Default::default()
    };
    let fund = buy_fund("AAAA11", dec!(105), dec!(100), dec!(10));

    let score = scorer.score(&fund, &rules);

    assert_eq!(score.discount, dec!(-5));
    assert!(!score.eligible);
}

#[test]
fn allow_no_discount_accepts_but_clamps_negative_discount() {
    let scorer = DiscountScorer::new();
    let rules = RuleSet {
        allow_no_discount: true,
        min_acceptable_discount: dec!(5),
        ..Default::default()
    };
    let fund = buy_fund("AAAA11", dec!(105), dec!(100), dec!(10));

    let score = scorer.score(&fund, &rules);

    assert!(score.eligible);
    assert_eq!(score.clamped, dec!(0));
}
