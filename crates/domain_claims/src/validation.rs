//! Mandatory field validation
//!
//! A claim can only be routed automatically when every field of its
//! [`MandatorySchema`] holds a non-blank value. The validator reports the
//! fields that do not, in the schema's declared order.

use serde::{Deserialize, Serialize};

use core_kernel::{ClaimField, ExtractionResult};
use crate::error::ClaimError;

/// Ordered, duplicate-free set of fields a claim must carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MandatorySchema {
    fields: Vec<ClaimField>,
}

impl MandatorySchema {
    /// Creates a schema, dropping repeated fields after their first position
    ///
    /// # Errors
    ///
    /// Returns an error if no field is given.
    pub fn new(fields: impl IntoIterator<Item = ClaimField>) -> Result<Self, ClaimError> {
        let mut unique: Vec<ClaimField> = Vec::new();
        for field in fields {
            if !unique.contains(&field) {
                unique.push(field);
            }
        }

        if unique.is_empty() {
            return Err(ClaimError::EmptySchema);
        }
        Ok(Self { fields: unique })
    }

    /// The fields required for automobile FNOL routing
    pub fn standard() -> Self {
        Self {
            fields: vec![
                ClaimField::PolicyNumber,
                ClaimField::PolicyholderName,
                ClaimField::DateOfLoss,
                ClaimField::Description,
                ClaimField::EstimatedDamage,
                ClaimField::ClaimType,
            ],
        }
    }

    pub fn fields(&self) -> &[ClaimField] {
        &self.fields
    }

    pub fn contains(&self, field: ClaimField) -> bool {
        self.fields.contains(&field)
    }
}

impl Default for MandatorySchema {
    fn default() -> Self {
        Self::standard()
    }
}

/// Mandatory fields lacking a value, in schema order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissingFieldReport {
    fields: Vec<ClaimField>,
}

impl MissingFieldReport {
    pub fn fields(&self) -> &[ClaimField] {
        &self.fields
    }

    pub fn contains(&self, field: ClaimField) -> bool {
        self.fields.contains(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = ClaimField> + '_ {
        self.fields.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Reports the mandatory fields that are absent or blank
pub fn validate(result: &ExtractionResult, schema: &MandatorySchema) -> MissingFieldReport {
    MissingFieldReport {
        fields: schema
            .fields
            .iter()
            .copied()
            .filter(|field| !result.is_populated(*field))
            .collect(),
    }
}

/// Validator bound to one schema
#[derive(Debug, Clone, Default)]
pub struct SchemaValidator {
    schema: MandatorySchema,
}

impl SchemaValidator {
    pub fn new(schema: MandatorySchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &MandatorySchema {
        &self.schema
    }

    pub fn validate(&self, result: &ExtractionResult) -> MissingFieldReport {
        validate(result, &self.schema)
    }
}
