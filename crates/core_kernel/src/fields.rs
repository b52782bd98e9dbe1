//! Claim fields and extraction results
//!
//! Every value extracted from an FNOL document is keyed by a [`ClaimField`].
//! The set of fields is fixed; an [`ExtractionResult`] records, for each field
//! a run touched, either a trimmed value or an explicit absent marker.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// The known claim fields, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClaimField {
    #[serde(rename = "Policy Number")]
    PolicyNumber,
    #[serde(rename = "Policyholder Name")]
    PolicyholderName,
    #[serde(rename = "Date of Loss")]
    DateOfLoss,
    #[serde(rename = "Location")]
    Location,
    #[serde(rename = "Estimated Damage")]
    EstimatedDamage,
    #[serde(rename = "Description")]
    Description,
    #[serde(rename = "Asset Type")]
    AssetType,
    #[serde(rename = "Asset ID")]
    AssetId,
    #[serde(rename = "Claim Type")]
    ClaimType,
}

impl ClaimField {
    /// All fields in declaration order
    pub const ALL: [ClaimField; 9] = [
        ClaimField::PolicyNumber,
        ClaimField::PolicyholderName,
        ClaimField::DateOfLoss,
        ClaimField::Location,
        ClaimField::EstimatedDamage,
        ClaimField::Description,
        ClaimField::AssetType,
        ClaimField::AssetId,
        ClaimField::ClaimType,
    ];

    /// Returns the display name used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimField::PolicyNumber => "Policy Number",
            ClaimField::PolicyholderName => "Policyholder Name",
            ClaimField::DateOfLoss => "Date of Loss",
            ClaimField::Location => "Location",
            ClaimField::EstimatedDamage => "Estimated Damage",
            ClaimField::Description => "Description",
            ClaimField::AssetType => "Asset Type",
            ClaimField::AssetId => "Asset ID",
            ClaimField::ClaimType => "Claim Type",
        }
    }
}

impl fmt::Display for ClaimField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ClaimField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

/// Claim type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimType {
    /// Someone was hurt
    Injury,
    /// Vehicle damage only
    Vehicle,
}

impl ClaimType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::Injury => "injury",
            ClaimType::Vehicle => "vehicle",
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "injury" => Ok(ClaimType::Injury),
            "vehicle" => Ok(ClaimType::Vehicle),
            other => Err(CoreError::UnknownClaimType(other.to_string())),
        }
    }
}

/// Field values extracted from one document
///
/// Keys are unique. A key mapped to `None` means the field was looked for and
/// not found, which serializes as `null`. Iteration and serialization follow
/// [`ClaimField`] declaration order, so identical inputs always produce
/// identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractionResult {
    fields: BTreeMap<ClaimField, Option<String>>,
}

impl ExtractionResult {
    /// Creates an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a field value, or an absent marker for `None`
    pub fn record(&mut self, field: ClaimField, value: Option<String>) {
        self.fields.insert(field, value);
    }

    /// Records a present value
    pub fn set(&mut self, field: ClaimField, value: impl Into<String>) {
        self.fields.insert(field, Some(value.into()));
    }

    /// Records the field as absent
    pub fn mark_absent(&mut self, field: ClaimField) {
        self.fields.insert(field, None);
    }

    /// Returns the value of a field if it is present
    pub fn get(&self, field: ClaimField) -> Option<&str> {
        self.fields.get(&field).and_then(|v| v.as_deref())
    }

    /// Returns true if the field was recorded, present or absent
    pub fn contains(&self, field: ClaimField) -> bool {
        self.fields.contains_key(&field)
    }

    /// Returns true if the field holds a value with non-whitespace content
    pub fn is_populated(&self, field: ClaimField) -> bool {
        self.get(field).map(|v| !v.trim().is_empty()).unwrap_or(false)
    }

    /// Iterates over recorded fields in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (ClaimField, Option<&str>)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(ClaimField, Option<String>)> for ExtractionResult {
    fn from_iter<I: IntoIterator<Item = (ClaimField, Option<String>)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
