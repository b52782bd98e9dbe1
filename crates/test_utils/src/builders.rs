//! Test Data Builders
//!
//! Provides a builder for FNOL form text with sensible defaults. Tests set
//! only the lines they care about.

use fake::faker::name::en::Name;
use fake::Fake;

/// Builder for FNOL document text
///
/// Every line is present by default and renders as a complete automobile
/// loss notice that routes to Fast-track.
#[derive(Debug, Clone)]
pub struct FnolDocumentBuilder {
    policy_number: Option<String>,
    insured: Option<String>,
    date_of_loss: Option<String>,
    location: Option<String>,
    description: Option<String>,
    estimate: Option<String>,
    vin: Option<String>,
    extra_lines: Vec<String>,
}

impl Default for FnolDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FnolDocumentBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            policy_number: Some("PA-2024-0042".to_string()),
            insured: Some("Jordan Avery".to_string()),
            date_of_loss: Some("03/15/2024 08:45 AM".to_string()),
            location: Some("5th Ave & Main St, Springfield".to_string()),
            description: Some("Rear-ended while stopped at a red light".to_string()),
            estimate: Some("$18,000".to_string()),
            vin: Some("1HGCM82633A004352".to_string()),
            extra_lines: Vec::new(),
        }
    }

    /// Creates a builder with no lines at all
    pub fn blank() -> Self {
        Self {
            policy_number: None,
            insured: None,
            date_of_loss: None,
            location: None,
            description: None,
            estimate: None,
            vin: None,
            extra_lines: Vec::new(),
        }
    }

    pub fn with_policy_number(mut self, value: impl Into<String>) -> Self {
        self.policy_number = Some(value.into());
        self
    }

    pub fn without_policy_number(mut self) -> Self {
        self.policy_number = None;
        self
    }

    pub fn with_insured(mut self, value: impl Into<String>) -> Self {
        self.insured = Some(value.into());
        self
    }

    /// Uses a randomly generated policyholder name
    pub fn with_random_insured(mut self) -> Self {
        let name: String = Name().fake();
        self.insured = Some(name);
        self
    }

    pub fn without_insured(mut self) -> Self {
        self.insured = None;
        self
    }

    pub fn with_date_of_loss(mut self, value: impl Into<String>) -> Self {
        self.date_of_loss = Some(value.into());
        self
    }

    pub fn without_date_of_loss(mut self) -> Self {
        self.date_of_loss = None;
        self
    }

    pub fn with_location(mut self, value: impl Into<String>) -> Self {
        self.location = Some(value.into());
        self
    }

    pub fn with_description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    pub fn without_description(mut self) -> Self {
        self.description = None;
        self
    }

    pub fn with_estimate(mut self, value: impl Into<String>) -> Self {
        self.estimate = Some(value.into());
        self
    }

    pub fn without_estimate(mut self) -> Self {
        self.estimate = None;
        self
    }

    pub fn with_vin(mut self, value: impl Into<String>) -> Self {
        self.vin = Some(value.into());
        self
    }

    pub fn without_vin(mut self) -> Self {
        self.vin = None;
        self
    }

    /// Adds a line mentioning an injured party
    pub fn with_injury(self) -> Self {
        self.with_line("PASSENGER INJURED: YES")
    }

    /// Appends a free-form line after the labelled ones
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.extra_lines.push(line.into());
        self
    }

    /// Renders the form text
    pub fn build(&self) -> String {
        let labelled = [
            ("POLICY NUMBER", &self.policy_number),
            ("NAME OF INSURED", &self.insured),
            ("DATE OF LOSS AND TIME", &self.date_of_loss),
            ("LOCATION OF LOSS", &self.location),
            ("DESCRIPTION OF ACCIDENT", &self.description),
            ("ESTIMATE AMOUNT", &self.estimate),
            ("V.I.N.", &self.vin),
        ];

        let mut lines = vec!["AUTOMOBILE LOSS NOTICE".to_string()];
        for (label, value) in labelled {
            if let Some(value) = value {
                lines.push(format!("{label}: {value}"));
            }
        }
        lines.extend(self.extra_lines.iter().cloned());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_renders_every_label() {
        let text = FnolDocumentBuilder::new().build();
        for label in ["POLICY NUMBER", "NAME OF INSURED", "DATE OF LOSS", "ESTIMATE AMOUNT", "V.I.N."] {
            assert!(text.contains(label), "missing {label}");
        }
    }

    #[test]
    fn test_blank_renders_header_only() {
        assert_eq!(FnolDocumentBuilder::blank().build(), "AUTOMOBILE LOSS NOTICE");
    }

    #[test]
    fn test_without_removes_line() {
        let text = FnolDocumentBuilder::new().without_policy_number().build();
        assert!(!text.contains("POLICY NUMBER"));
    }

    #[test]
    fn test_random_insured_is_not_empty() {
        let text = FnolDocumentBuilder::new().with_random_insured().build();
        let line = text
            .lines()
            .find(|l| l.starts_with("NAME OF INSURED: "))
            .unwrap();
        assert!(line.len() > "NAME OF INSURED: ".len());
    }
}
