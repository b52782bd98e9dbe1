//! Derived claim fields
//!
//! Some fields are not read straight off the form. The enricher fills them
//! from fixed classifications, a dedicated VIN rule, and a keyword check on
//! the raw text.
//!
//! The description placeholder stands in until real summarization exists;
//! it is a known limitation of the intake, not an extraction failure.

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{ClaimField, ClaimType, ExtractionResult};
use crate::error::ClaimError;
use crate::extraction::FieldRule;

/// Placeholder description for automobile FNOL forms
pub const DEFAULT_DESCRIPTION: &str = "Automobile accident reported as per FNOL document";

/// Asset type assumed for automobile FNOL forms
pub const DEFAULT_ASSET_TYPE: &str = "Vehicle";

/// Vehicle identification number rule
pub const DEFAULT_ASSET_ID_PATTERN: &str = r"V\.I\.N\.\s*:?\s*(.+)";

/// Keyword marking an injury claim
pub const DEFAULT_INJURY_KEYWORD: &str = "INJURED";

/// Settings for the field enricher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Description used when the document has none
    pub description_placeholder: String,
    /// Asset type used when the document has none
    pub asset_type: String,
    /// Pattern extracting the asset identifier
    pub asset_id_pattern: String,
    /// Keyword whose presence classifies the claim as an injury
    pub injury_keyword: String,
    /// Whether the injury keyword must match case exactly.
    ///
    /// Every extraction rule ignores case, but the injury check has always
    /// matched the upper-case form literally. Kept that way until intake
    /// owners decide otherwise.
    pub injury_keyword_case_sensitive: bool,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            description_placeholder: DEFAULT_DESCRIPTION.to_string(),
            asset_type: DEFAULT_ASSET_TYPE.to_string(),
            asset_id_pattern: DEFAULT_ASSET_ID_PATTERN.to_string(),
            injury_keyword: DEFAULT_INJURY_KEYWORD.to_string(),
            injury_keyword_case_sensitive: true,
        }
    }
}

/// Adds computed fields to an extraction result
#[derive(Debug, Clone)]
pub struct FieldEnricher {
    description_placeholder: String,
    asset_type: String,
    asset_id_rule: FieldRule,
    injury_keyword: String,
    case_sensitive: bool,
}

impl FieldEnricher {
    /// Builds an enricher from its settings
    ///
    /// # Errors
    ///
    /// Returns an error if the asset id pattern is invalid.
    pub fn from_config(config: &EnrichmentConfig) -> Result<Self, ClaimError> {
        let asset_id_rule = FieldRule::new(ClaimField::AssetId, &config.asset_id_pattern)?;
        let injury_keyword = if config.injury_keyword_case_sensitive {
            config.injury_keyword.clone()
        } else {
            config.injury_keyword.to_lowercase()
        };

        Ok(Self {
            description_placeholder: config.description_placeholder.clone(),
            asset_type: config.asset_type.clone(),
            asset_id_rule,
            injury_keyword,
            case_sensitive: config.injury_keyword_case_sensitive,
        })
    }

    /// Builds the enricher for automobile FNOL forms
    pub fn standard() -> Result<Self, ClaimError> {
        Self::from_config(&EnrichmentConfig::default())
    }

    /// Classifies the claim from the raw document text
    pub fn classify_claim_type(&self, text: &str) -> ClaimType {
        if self.injury_keyword.is_empty() {
            return ClaimType::Vehicle;
        }

        let injured = if self.case_sensitive {
            text.contains(&self.injury_keyword)
        } else {
            text.to_lowercase().contains(&self.injury_keyword)
        };

        if injured {
            ClaimType::Injury
        } else {
            ClaimType::Vehicle
        }
    }

    /// Adds the derived fields to an extraction result
    ///
    /// Description, asset type and asset id keep any value the extractor
    /// already found. Claim type is always recomputed.
    pub fn enrich(&self, text: &str, mut result: ExtractionResult) -> ExtractionResult {
        if !result.is_populated(ClaimField::Description) {
            result.set(ClaimField::Description, self.description_placeholder.as_str());
        }

        if !result.is_populated(ClaimField::AssetType) {
            result.set(ClaimField::AssetType, self.asset_type.as_str());
        }

        if !result.is_populated(ClaimField::AssetId) {
            result.record(ClaimField::AssetId, self.asset_id_rule.apply(text));
        }

        let claim_type = self.classify_claim_type(text);
        debug!(%claim_type, "Classified claim");
        result.set(ClaimField::ClaimType, claim_type.as_str());

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enricher() -> FieldEnricher {
        FieldEnricher::standard().unwrap()
    }

    #[test]
    fn test_fills_fixed_fields_on_empty_result() {
        let result = enricher().enrich("", ExtractionResult::new());

        assert_eq!(result.get(ClaimField::Description), Some(DEFAULT_DESCRIPTION));
        assert_eq!(result.get(ClaimField::AssetType), Some("Vehicle"));
        assert!(result.contains(ClaimField::AssetId));
        assert_eq!(result.get(ClaimField::AssetId), None);
        assert_eq!(result.get(ClaimField::ClaimType), Some("vehicle"));
    }

    #[test]
    fn test_extracts_vin_as_asset_id() {
        let result = enricher().enrich("V.I.N.: 1HGCM82633A004352", ExtractionResult::new());
        assert_eq!(result.get(ClaimField::AssetId), Some("1HGCM82633A004352"));
    }

    #[test]
    fn test_keeps_extracted_description() {
        let mut prior = ExtractionResult::new();
        prior.set(ClaimField::Description, "Rear-ended at a light");

        let result = enricher().enrich("", prior);
        assert_eq!(result.get(ClaimField::Description), Some("Rear-ended at a light"));
    }

    #[test]
    fn test_blank_description_gets_placeholder() {
        let mut prior = ExtractionResult::new();
        prior.set(ClaimField::Description, "  ");

        let result = enricher().enrich("", prior);
        assert_eq!(result.get(ClaimField::Description), Some(DEFAULT_DESCRIPTION));
    }

    #[test]
    fn test_claim_type_supersedes_extracted_value() {
        let mut prior = ExtractionResult::new();
        prior.set(ClaimField::ClaimType, "injury");

        let result = enricher().enrich("no one hurt", prior);
        assert_eq!(result.get(ClaimField::ClaimType), Some("vehicle"));
    }

    #[test]
    fn test_injury_keyword_is_case_sensitive_by_default() {
        let e = enricher();
        assert_eq!(e.classify_claim_type("DRIVER INJURED"), ClaimType::Injury);
        assert_eq!(e.classify_claim_type("driver injured"), ClaimType::Vehicle);
        assert_eq!(e.classify_claim_type("Injured"), ClaimType::Vehicle);
    }

    #[test]
    fn test_injury_keyword_can_ignore_case() {
        let config = EnrichmentConfig {
            injury_keyword_case_sensitive: false,
            ..EnrichmentConfig::default()
        };
        let e = FieldEnricher::from_config(&config).unwrap();
        assert_eq!(e.classify_claim_type("driver injured"), ClaimType::Injury);
    }

    #[test]
    fn test_empty_injury_keyword_never_matches() {
        let config = EnrichmentConfig {
            injury_keyword: String::new(),
            ..EnrichmentConfig::default()
        };
        let e = FieldEnricher::from_config(&config).unwrap();
        assert_eq!(e.classify_claim_type("INJURED"), ClaimType::Vehicle);
    }
}
