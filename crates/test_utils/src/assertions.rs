//! Custom Test Assertions
//!
//! Assertion helpers for claim decisions that print the whole decision on
//! failure.

use core_kernel::{ClaimField, ClaimType};
use domain_claims::{ClaimDecision, Route};

fn dump(decision: &ClaimDecision) -> String {
    decision
        .to_json_pretty()
        .unwrap_or_else(|e| format!("<unserializable decision: {e}>"))
}

/// Asserts the recommended route
pub fn assert_routed(decision: &ClaimDecision, expected: Route) {
    assert_eq!(
        decision.recommended_route(),
        expected,
        "Unexpected route, decision was:\n{}",
        dump(decision)
    );
}

/// Asserts the exact missing-field report, in order
pub fn assert_missing(decision: &ClaimDecision, expected: &[ClaimField]) {
    assert_eq!(
        decision.missing_fields().fields(),
        expected,
        "Unexpected missing fields, decision was:\n{}",
        dump(decision)
    );
}

/// Asserts an extracted value
pub fn assert_field(decision: &ClaimDecision, field: ClaimField, expected: &str) {
    assert_eq!(
        decision.extracted_fields().get(field),
        Some(expected),
        "Unexpected value for {}, decision was:\n{}",
        field,
        dump(decision)
    );
}

/// Asserts properties every decision of the standard pipeline has
///
/// - the claim type is always set to a known type
/// - no reported missing field holds a non-blank value
/// - a non-empty report always means manual review
pub fn assert_decision_consistent(decision: &ClaimDecision) {
    let claim_type = decision.extracted_fields().get(ClaimField::ClaimType);
    assert!(
        matches!(claim_type, Some(t) if t.parse::<ClaimType>().is_ok()),
        "Claim type not set, decision was:\n{}",
        dump(decision)
    );

    for field in decision.missing_fields().iter() {
        assert!(
            !decision.extracted_fields().is_populated(field),
            "{} reported missing but populated, decision was:\n{}",
            field,
            dump(decision)
        );
    }

    if !decision.missing_fields().is_empty() {
        assert_routed(decision, Route::ManualReview);
    }

    assert!(!decision.reasoning().is_empty(), "Empty reasoning");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{FnolFixtures, STANDARD_PIPELINE};

    #[test]
    fn test_fixture_decisions_are_consistent() {
        for text in [
            FnolFixtures::fast_track(),
            FnolFixtures::injury(),
            FnolFixtures::suspicious(),
            FnolFixtures::missing_policy_number(),
            FnolFixtures::high_value(),
        ] {
            assert_decision_consistent(&STANDARD_PIPELINE.process(text));
        }
    }

    #[test]
    #[should_panic(expected = "Unexpected route")]
    fn test_assert_routed_panics_on_mismatch() {
        let decision = STANDARD_PIPELINE.process(FnolFixtures::fast_track());
        assert_routed(&decision, Route::InvestigationFlag);
    }

    #[test]
    fn test_assert_missing_on_empty_text() {
        let decision = STANDARD_PIPELINE.process("");
        assert_missing(
            &decision,
            &[
                ClaimField::PolicyNumber,
                ClaimField::PolicyholderName,
                ClaimField::DateOfLoss,
                ClaimField::EstimatedDamage,
            ],
        );
    }
}
