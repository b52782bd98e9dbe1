//! Tests for the document reader adapters

use std::io::Write;
use std::path::Path;

use core_kernel::{read_document_text, DocumentReader, PortError};
use infra_docs::{DocumentError, DocumentLoader, PdfReader, PlainTextReader};

fn temp_file(suffix: &str, contents: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents).unwrap();
    file
}

mod plain_text {
    use super::*;

    #[test]
    fn test_single_page_document() {
        let file = temp_file(".txt", b"POLICY NUMBER: P-1\nNAME OF INSURED: Ana");
        let pages = PlainTextReader::new().read(file.path()).unwrap();

        assert_eq!(pages, vec!["POLICY NUMBER: P-1\nNAME OF INSURED: Ana".to_string()]);
    }

    #[test]
    fn test_form_feed_separates_pages() {
        let file = temp_file(".txt", b"page one\x0cpage two\x0c");
        let pages = PlainTextReader::new().read(file.path()).unwrap();

        assert_eq!(pages, vec!["page one", "page two", ""]);
    }

    #[test]
    fn test_joined_text_skips_trailing_empty_page() {
        let file = temp_file(".txt", b"page one\x0cpage two\x0c");
        let text = read_document_text(&PlainTextReader::new(), file.path()).unwrap();

        assert_eq!(text, "page one\npage two\n");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let file = temp_file(".txt", b"POLICY NUMBER: \xff42");
        let pages = PlainTextReader::new().read(file.path()).unwrap();

        assert!(pages[0].starts_with("POLICY NUMBER: "));
        assert!(pages[0].ends_with("42"));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = PlainTextReader::new()
            .read(Path::new("/definitely/not/here.txt"))
            .unwrap_err();
        assert!(err.is_not_found());
    }
}

mod pdf {
    use super::*;
    use test_utils::{fixture_pdf, single_page_pdf, FnolFixtures};

    #[test]
    fn test_extracts_text_layer() {
        let bytes = single_page_pdf(&["POLICY NUMBER: PA-7", "ESTIMATE AMOUNT: $900"]);
        let pages = PdfReader::new().extract(&bytes).unwrap();

        assert_eq!(pages.len(), 1);
        assert!(pages[0].contains("POLICY NUMBER: PA-7"));
        assert!(pages[0].contains("ESTIMATE AMOUNT: $900"));
    }

    #[test]
    fn test_fnol_pdf_reads_through_loader() {
        let file = temp_file(".pdf", &fixture_pdf(FnolFixtures::fast_track()));
        let text = read_document_text(&DocumentLoader::new(), file.path()).unwrap();

        assert!(text.contains("POLICY NUMBER: PA-2024-0042"));
        assert!(text.contains("NAME OF INSURED: Jordan Avery"));
        assert!(text.contains("ESTIMATE AMOUNT: $18,000"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_garbage_bytes_fail_to_parse() {
        let err = PdfReader::new().extract(b"this is not a pdf").unwrap_err();
        assert!(matches!(err, DocumentError::PdfParsing(_)));
    }

    #[test]
    fn test_parse_failure_maps_to_port_parse_error() {
        let file = temp_file(".pdf", b"%PDF-garbage");
        let err = PdfReader::new().read_pages(file.path()).unwrap_err();
        assert!(matches!(err, PortError::Parse { .. }));
    }

    #[test]
    fn test_missing_pdf_is_not_found() {
        let err = PdfReader::new()
            .read_pages(Path::new("/definitely/not/here.pdf"))
            .unwrap_err();
        assert!(err.is_not_found());
    }
}

mod loader {
    use super::*;

    #[test]
    fn test_dispatches_text_by_extension() {
        let file = temp_file(".TXT", b"ESTIMATE AMOUNT: $900");
        let text = read_document_text(&DocumentLoader::new(), file.path()).unwrap();

        assert_eq!(text, "ESTIMATE AMOUNT: $900\n");
    }

    #[test]
    fn test_dispatches_pdf_by_extension() {
        let file = temp_file(".pdf", b"not really a pdf");
        let err = DocumentLoader::new().read_pages(file.path()).unwrap_err();

        assert!(matches!(err, PortError::Parse { .. }));
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        let err = DocumentLoader::new()
            .read_pages(Path::new("claim.docx"))
            .unwrap_err();

        match err {
            PortError::UnsupportedFormat { format } => assert_eq!(format, "docx"),
            other => panic!("Expected UnsupportedFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_extension_is_unsupported() {
        let loader = DocumentLoader::new();
        let result = loader.reader_for(Path::new("README"));
        assert!(matches!(result, Err(DocumentError::UnsupportedFormat(_))));
    }
}

mod errors {
    use super::*;

    #[test]
    fn test_io_error_keeps_source_at_port_boundary() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let port: PortError = DocumentError::from_io(Path::new("x.txt"), io).into();

        match port {
            PortError::Read { source, .. } => assert!(source.is_some()),
            other => panic!("Expected Read, got {:?}", other),
        }
    }
}
