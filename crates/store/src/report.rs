//! CSV rendering of a document list for download/export.

use trustseal_core::document::Document;

/// Column headers for the bulk-analysis export.
pub const CSV_COLUMNS: [&str; 6] = [
    "Filename",
    "Status",
    "Confidence Score",
    "Blockchain Verified",
    "Anomalies Count",
    "AI Suggestions",
];

/// Render a document list as a delimited text report.
///
/// One row per document in the given order. The caller pre-filters and
/// pre-sorts; this function only formats. Fields containing delimiters,
/// quotes, or newlines are quoted per RFC 4180.
pub fn render_csv(documents: &[Document]) -> String {
    let mut out = String::new();
    out.push_str(&CSV_COLUMNS.join(","));
    out.push('\n');

    for doc in documents {
        let row = [
            escape_field(&doc.filename),
            doc.report.status.as_str().to_string(),
            format!("{:.1}%", doc.report.confidence_score * 100.0),
            if doc.report.blockchain_verified {
                "Yes".to_string()
            } else {
                "No".to_string()
            },
            doc.report.checks.anomalies.len().to_string(),
            doc.report.checks.ai_suggestions.len().to_string(),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

/// Quote a field if it contains a comma, quote, or newline.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use trustseal_core::document::{AnalysisChecks, AnalysisReport};
    use trustseal_core::verdict::VerdictStatus;
    use uuid::Uuid;

    fn doc(filename: &str, status: VerdictStatus, confidence: f64) -> Document {
        Document {
            id: Uuid::nil(),
            owner_id: Uuid::nil(),
            filename: filename.to_string(),
            file_size: 100,
            uploaded_at: Utc::now(),
            report: AnalysisReport {
                status,
                confidence_score: confidence,
                ocr_text: None,
                metadata: None,
                blockchain_verified: status == VerdictStatus::Authentic,
                blockchain_hash: None,
                tampering_heatmap: Vec::new(),
                checks: AnalysisChecks {
                    anomalies: vec!["a".to_string(), "b".to_string()],
                    ai_suggestions: vec!["s".to_string()],
                    ..Default::default()
                },
            },
        }
    }

    #[test]
    fn header_row_lists_all_columns() {
        let csv = render_csv(&[]);
        assert_eq!(
            csv,
            "Filename,Status,Confidence Score,Blockchain Verified,Anomalies Count,AI Suggestions\n"
        );
    }

    #[test]
    fn rows_render_in_order_with_formatted_fields() {
        let docs = vec![
            doc("a.pdf", VerdictStatus::Authentic, 0.956),
            doc("b.png", VerdictStatus::Fraudulent, 0.2),
        ];
        let csv = render_csv(&docs);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "a.pdf,authentic,95.6%,Yes,2,1");
        assert_eq!(lines[2], "b.png,fraudulent,20.0%,No,2,1");
    }

    #[test]
    fn filenames_with_commas_are_quoted() {
        let docs = vec![doc("report, final.pdf", VerdictStatus::Suspicious, 0.5)];
        let csv = render_csv(&docs);
        assert!(csv.contains("\"report, final.pdf\""));
    }

    #[test]
    fn quotes_inside_filenames_are_doubled() {
        let docs = vec![doc("the \"real\" one.pdf", VerdictStatus::Suspicious, 0.5)];
        let csv = render_csv(&docs);
        assert!(csv.contains("\"the \"\"real\"\" one.pdf\""));
    }
}
