//! Pre-built Test Fixtures
//!
//! Sample FNOL documents covering each route of the standard rule set, and
//! a pipeline shared by every test in the process.

use once_cell::sync::Lazy;
use std::io::Write;
use tempfile::NamedTempFile;

use domain_claims::ClaimPipeline;

/// Standard pipeline, built once per test binary
pub static STANDARD_PIPELINE: Lazy<ClaimPipeline> =
    Lazy::new(|| ClaimPipeline::standard().expect("standard rule set compiles"));

/// Sample FNOL documents
pub struct FnolFixtures;

impl FnolFixtures {
    /// Complete form with a small estimate; routes to Fast-track
    pub fn fast_track() -> &'static str {
        "AUTOMOBILE LOSS NOTICE\n\
         POLICY NUMBER: PA-2024-0042\n\
         NAME OF INSURED: Jordan Avery\n\
         DATE OF LOSS AND TIME: 03/15/2024 08:45 AM\n\
         LOCATION OF LOSS: 5th Ave & Main St, Springfield\n\
         DESCRIPTION OF ACCIDENT: Rear-ended while stopped at a red light\n\
         ESTIMATE AMOUNT: $18,000\n\
         V.I.N.: 1HGCM82633A004352\n"
    }

    /// Complete form mentioning an injured party; routes to Specialist Queue
    pub fn injury() -> &'static str {
        "AUTOMOBILE LOSS NOTICE\n\
         POLICY NUMBER: PA-2024-0107\n\
         NAME OF INSURED: Morgan Lee\n\
         DATE OF LOSS AND TIME: 04/02/2024 17:20\n\
         LOCATION OF LOSS: Route 9 northbound\n\
         DESCRIPTION OF ACCIDENT: Side impact at intersection\n\
         ESTIMATE AMOUNT: $9,500\n\
         PASSENGER INJURED: YES\n\
         V.I.N.: 2T1BURHE0JC012345\n"
    }

    /// Complete form whose description contains a fraud keyword
    pub fn suspicious() -> &'static str {
        "AUTOMOBILE LOSS NOTICE\n\
         POLICY NUMBER: PA-2024-0311\n\
         NAME OF INSURED: Casey Quinn\n\
         DATE OF LOSS AND TIME: 05/10/2024 23:10\n\
         LOCATION OF LOSS: Parking garage level 3\n\
         DESCRIPTION OF ACCIDENT: Witness statements are inconsistent about the collision\n\
         ESTIMATE AMOUNT: $12,000\n\
         V.I.N.: 3FAHP0HA7AR123456\n"
    }

    /// Form without a policy number; routes to Manual Review
    pub fn missing_policy_number() -> &'static str {
        "AUTOMOBILE LOSS NOTICE\n\
         NAME OF INSURED: Riley Chen\n\
         DATE OF LOSS AND TIME: 06/01/2024 10:00\n\
         DESCRIPTION OF ACCIDENT: Hail damage to roof and hood\n\
         ESTIMATE AMOUNT: $4,200\n"
    }

    /// Complete form with an estimate above the fast-track threshold
    pub fn high_value() -> &'static str {
        "AUTOMOBILE LOSS NOTICE\n\
         POLICY NUMBER: PA-2024-0520\n\
         NAME OF INSURED: Sam Patel\n\
         DATE OF LOSS AND TIME: 07/19/2024 14:05\n\
         LOCATION OF LOSS: I-95 mile marker 120\n\
         DESCRIPTION OF ACCIDENT: Multi-vehicle collision on the highway\n\
         ESTIMATE AMOUNT: $48,000\n\
         V.I.N.: 5YJSA1E26HF000001\n"
    }
}

/// Writes `contents` to a temporary file with the given extension
pub fn write_temp_document(contents: &[u8], extension: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(&format!(".{extension}"))
        .tempfile()
        .expect("create temp file");
    file.write_all(contents).expect("write temp file");
    file
}

/// Writes a rule set file; the file is removed when the handle drops
pub fn write_rule_set(contents: &str, extension: &str) -> NamedTempFile {
    write_temp_document(contents.as_bytes(), extension)
}

/// Builds a single-page PDF showing `lines` in Helvetica, one per row
///
/// Object offsets in the cross-reference table are computed, so the file is
/// valid for strict parsers.
pub fn single_page_pdf(lines: &[&str]) -> Vec<u8> {
    let mut content = String::from("BT\n/F1 11 Tf\n72 740 Td\n");
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            content.push_str("0 -16 Td\n");
        }
        let escaped = line
            .replace('\\', "\\\\")
            .replace('(', "\\(")
            .replace(')', "\\)");
        content.push_str(&format!("({escaped}) Tj\n"));
    }
    content.push_str("ET\n");

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
            .to_string(),
        format!("<< /Length {} >>\nstream\n{}endstream", content.len(), content),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica \
         /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];

    let mut pdf = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, body));
    }

    let xref_offset = pdf.len();
    pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
    for offset in offsets {
        pdf.push_str(&format!("{offset:010} 00000 n \n"));
    }
    pdf.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_offset
    ));
    pdf.into_bytes()
}

/// Renders a fixture text as a single-page PDF
pub fn fixture_pdf(text: &str) -> Vec<u8> {
    let lines: Vec<&str> = text.lines().collect();
    single_page_pdf(&lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_claims::Route;

    #[test]
    fn test_fixtures_route_as_named() {
        assert_eq!(STANDARD_PIPELINE.process(FnolFixtures::fast_track()).recommended_route(), Route::FastTrack);
        assert_eq!(STANDARD_PIPELINE.process(FnolFixtures::injury()).recommended_route(), Route::SpecialistQueue);
        assert_eq!(STANDARD_PIPELINE.process(FnolFixtures::suspicious()).recommended_route(), Route::InvestigationFlag);
        assert_eq!(
            STANDARD_PIPELINE.process(FnolFixtures::missing_policy_number()).recommended_route(),
            Route::ManualReview
        );
        assert_eq!(STANDARD_PIPELINE.process(FnolFixtures::high_value()).recommended_route(), Route::ManualReview);
    }

    #[test]
    fn test_single_page_pdf_xref_points_at_objects() {
        let pdf = String::from_utf8(single_page_pdf(&["POLICY NUMBER: (A)"])).unwrap();
        let xref = pdf.find("xref\n").unwrap();
        let startxref: usize = pdf
            .rsplit("startxref\n")
            .next()
            .and_then(|rest| rest.lines().next())
            .and_then(|n| n.parse().ok())
            .unwrap();
        assert_eq!(startxref, xref);

        for (i, entry) in pdf[xref..].lines().skip(3).take(5).enumerate() {
            let offset: usize = entry[..10].parse().unwrap();
            assert!(pdf[offset..].starts_with(&format!("{} 0 obj", i + 1)));
        }
        assert!(pdf.contains("(POLICY NUMBER: \\(A\\)) Tj"));
    }

    #[test]
    fn test_temp_document_keeps_extension() {
        let file = write_temp_document(b"hello", "txt");
        assert_eq!(file.path().extension().and_then(|e| e.to_str()), Some("txt"));
        assert_eq!(std::fs::read(file.path()).unwrap(), b"hello");
    }
}
