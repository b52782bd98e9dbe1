//! Property-Based Test Generators
//!
//! Provides proptest strategies for FNOL form values and whole documents.

use proptest::prelude::*;

use domain_claims::routing::FRAUD_KEYWORDS;
use crate::builders::FnolDocumentBuilder;

/// Strategy for policy numbers such as `PA-2024-0042`
pub fn policy_number_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{2}-20[0-9]{2}-[0-9]{4}"
}

/// Strategy for policyholder names
pub fn insured_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10} [A-Z][a-z]{2,12}"
}

/// Strategy for whole-dollar amounts
pub fn amount_strategy() -> impl Strategy<Value = u64> {
    0u64..1_000_000u64
}

/// Renders an amount the way intake forms do: `$12,345`
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::from("$");
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Strategy for descriptions free of fraud keywords
pub fn benign_description_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Rear-ended while stopped at a red light".to_string()),
        Just("Hail damage to roof and hood".to_string()),
        Just("Backed into a pole in a parking lot".to_string()),
        Just("Windshield cracked by road debris".to_string()),
    ]
}

/// Strategy for descriptions containing a fraud keyword in any letter case
pub fn suspicious_description_strategy() -> impl Strategy<Value = String> {
    (prop::sample::select(FRAUD_KEYWORDS.to_vec()), any::<bool>()).prop_map(|(kw, upper)| {
        let kw = if upper { kw.to_uppercase() } else { kw.to_string() };
        format!("Adjuster notes the collision looks {kw}")
    })
}

/// Strategy for complete documents without injuries or fraud keywords
///
/// Yields the estimate alongside the text so tests can predict the route.
pub fn complete_document_strategy() -> impl Strategy<Value = (String, u64)> {
    (
        policy_number_strategy(),
        insured_name_strategy(),
        benign_description_strategy(),
        amount_strategy(),
    )
        .prop_map(|(policy, insured, description, amount)| {
            let text = FnolDocumentBuilder::new()
                .with_policy_number(policy)
                .with_insured(insured)
                .with_description(description)
                .with_estimate(format_amount(amount))
                .build();
            (text, amount)
        })
}
