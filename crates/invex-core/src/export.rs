//! Rendering and CSV export of extraction reports.
//!
//! The data model has one canonical schema; label styles only change the
//! names shown in text output and CSV headers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::batch::DocumentReport;
use crate::error::ExportError;
use crate::models::result::{ExtractionResult, InvoiceNumber};

/// Which set of field names to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// Human-readable labels ("Emile Corporation Found").
    #[default]
    Display,
    /// Field names of the data model ("vendor_matched").
    Internal,
}

/// A column of the exported table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    FileName,
    Vendor,
    Address,
    TaxNumber,
    Hst,
    InvoiceNumber,
    Error,
}

impl Column {
    const ALL: [Column; 7] = [
        Column::FileName,
        Column::Vendor,
        Column::Address,
        Column::TaxNumber,
        Column::Hst,
        Column::InvoiceNumber,
        Column::Error,
    ];

    /// Column header for the given label style.
    pub fn label(self, style: LabelStyle) -> &'static str {
        match (self, style) {
            (Column::FileName, LabelStyle::Display) => "File Name",
            (Column::Vendor, LabelStyle::Display) => "Emile Corporation Found",
            (Column::Address, LabelStyle::Display) => "Address Found",
            (Column::TaxNumber, LabelStyle::Display) => "GST/HST Number",
            (Column::Hst, LabelStyle::Display) => "HST Number",
            (Column::InvoiceNumber, LabelStyle::Display) => "Invoice Number",
            (Column::Error, LabelStyle::Display) => "Error",
            (Column::FileName, LabelStyle::Internal) => "file_name",
            (Column::Vendor, LabelStyle::Internal) => "vendor_matched",
            (Column::Address, LabelStyle::Internal) => "address_matched",
            (Column::TaxNumber, LabelStyle::Internal) => "tax_number",
            (Column::Hst, LabelStyle::Internal) => "tax_number_is_hst",
            (Column::InvoiceNumber, LabelStyle::Internal) => "invoice_number",
            (Column::Error, LabelStyle::Internal) => "error",
        }
    }

    fn from_label(label: &str) -> Option<Column> {
        let label = label.trim();
        Column::ALL.into_iter().find(|c| {
            c.label(LabelStyle::Display) == label || c.label(LabelStyle::Internal) == label
        })
    }
}

/// Columns written for a table, in order.
pub fn columns(split_hst: bool) -> Vec<Column> {
    Column::ALL
        .into_iter()
        .filter(|c| split_hst || *c != Column::Hst)
        .collect()
}

fn cell(report: &DocumentReport, column: Column) -> String {
    let result = report.result.as_ref();
    match column {
        Column::FileName => report.file_name.clone(),
        Column::Vendor => result.map(|r| r.vendor_matched.to_string()).unwrap_or_default(),
        Column::Address => result.map(|r| r.address_matched.to_string()).unwrap_or_default(),
        Column::TaxNumber => result.and_then(|r| r.tax_number.clone()).unwrap_or_default(),
        Column::Hst => result.map(|r| r.tax_number_is_hst.to_string()).unwrap_or_default(),
        Column::InvoiceNumber => result
            .and_then(|r| r.invoice_number_str())
            .unwrap_or_default()
            .to_string(),
        Column::Error => report.error.clone().unwrap_or_default(),
    }
}

/// Write reports as CSV: a header row, then one row per document.
///
/// Absent values are written as empty cells.
pub fn write_csv(
    reports: &[DocumentReport],
    style: LabelStyle,
    split_hst: bool,
) -> Result<String, ExportError> {
    let columns = columns(split_hst);
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(columns.iter().map(|c| c.label(style)))?;
    for report in reports {
        wtr.write_record(columns.iter().map(|c| cell(report, *c)))?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn parse_bool(column: Column, value: &str) -> Result<bool, ExportError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" | "" => Ok(false),
        _ => Err(ExportError::InvalidValue {
            column: column.label(LabelStyle::Internal).to_string(),
            value: value.to_string(),
        }),
    }
}

fn non_empty(value: &str) -> Option<&str> {
    Some(value).filter(|v| !v.is_empty())
}

/// Read reports back from CSV written by [`write_csv`].
///
/// Either label style is accepted. A missing HST column reads as `false`.
pub fn read_csv(data: &str) -> Result<Vec<DocumentReport>, ExportError> {
    let mut rdr = csv::Reader::from_reader(data.as_bytes());

    let index: HashMap<Column, usize> = rdr
        .headers()?
        .iter()
        .enumerate()
        .filter_map(|(i, h)| Column::from_label(h).map(|c| (c, i)))
        .collect();

    for required in [Column::FileName, Column::Vendor, Column::Address] {
        if !index.contains_key(&required) {
            return Err(ExportError::MissingColumn(
                required.label(LabelStyle::Internal).to_string(),
            ));
        }
    }

    let mut reports = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let get = |c: Column| index.get(&c).and_then(|i| record.get(*i)).unwrap_or("");

        let file_name = get(Column::FileName).to_string();
        if let Some(error) = non_empty(get(Column::Error)) {
            reports.push(DocumentReport::failure(file_name, error));
            continue;
        }

        let result = ExtractionResult {
            vendor_matched: parse_bool(Column::Vendor, get(Column::Vendor))?,
            address_matched: parse_bool(Column::Address, get(Column::Address))?,
            tax_number: non_empty(get(Column::TaxNumber)).map(str::to_string),
            tax_number_is_hst: parse_bool(Column::Hst, get(Column::Hst))?,
            invoice_number: non_empty(get(Column::InvoiceNumber)).map(InvoiceNumber::parse),
        };
        reports.push(DocumentReport::success(file_name, result));
    }

    Ok(reports)
}

/// Render one report as labelled lines of text.
pub fn render_text(report: &DocumentReport, style: LabelStyle, split_hst: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}: {}\n", Column::FileName.label(style), report.file_name));

    if let Some(result) = &report.result {
        output.push_str(&format!("{}: {}\n", Column::Vendor.label(style), result.vendor_matched));
        output.push_str(&format!("{}: {}\n", Column::Address.label(style), result.address_matched));
        output.push_str(&format!(
            "{}: {}\n",
            Column::TaxNumber.label(style),
            result.tax_number.as_deref().unwrap_or("None")
        ));
        if split_hst {
            output.push_str(&format!("{}: {}\n", Column::Hst.label(style), result.tax_number_is_hst));
        }
        output.push_str(&format!(
            "{}: {}\n",
            Column::InvoiceNumber.label(style),
            result.invoice_number_str().unwrap_or("None")
        ));
    } else {
        output.push_str(&format!(
            "{}: {}\n",
            Column::Error.label(style),
            report.error.as_deref().unwrap_or("unknown error")
        ));
    }

    output.push_str("---\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_reports() -> Vec<DocumentReport> {
        vec![
            DocumentReport::success(
                "a.pdf",
                ExtractionResult {
                    vendor_matched: true,
                    address_matched: true,
                    tax_number: Some("123456789 RT 0001".to_string()),
                    tax_number_is_hst: true,
                    invoice_number: Some(InvoiceNumber::Value("INV-2024/001".to_string())),
                },
            ),
            DocumentReport::success(
                "b, with comma.pdf",
                ExtractionResult {
                    invoice_number: Some(InvoiceNumber::Blank),
                    ..Default::default()
                },
            ),
            DocumentReport::success("c.pdf", ExtractionResult::default()),
            DocumentReport::failure("d.pdf", "failed to parse PDF: bad xref"),
        ]
    }

    #[test]
    fn test_csv_round_trip() {
        let reports = sample_reports();
        for style in [LabelStyle::Display, LabelStyle::Internal] {
            let csv = write_csv(&reports, style, true).unwrap();
            let back = read_csv(&csv).unwrap();
            assert_eq!(back, reports);
        }
    }

    #[test]
    fn test_csv_layout() {
        let csv = write_csv(&sample_reports()[..3], LabelStyle::Display, true).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "File Name,Emile Corporation Found,Address Found,GST/HST Number,HST Number,Invoice Number,Error"
        );
        assert_eq!(lines[1], "a.pdf,true,true,123456789 RT 0001,true,INV-2024/001,");
        assert_eq!(lines[2], "\"b, with comma.pdf\",false,false,,false,Blank,");
        assert_eq!(lines[3], "c.pdf,false,false,,false,,");
    }

    #[test]
    fn test_csv_without_hst_column() {
        let csv = write_csv(&sample_reports(), LabelStyle::Internal, false).unwrap();
        assert!(!csv.contains("tax_number_is_hst"));

        let back = read_csv(&csv).unwrap();
        assert_eq!(back.len(), 4);
        assert!(!back[0].result.as_ref().unwrap().tax_number_is_hst);
        assert_eq!(
            back[0].result.as_ref().unwrap().tax_number.as_deref(),
            Some("123456789 RT 0001")
        );
    }

    #[test]
    fn test_read_csv_accepts_capitalised_booleans() {
        let csv = "File Name,Emile Corporation Found,Address Found,GST/HST Number,Invoice Number\n\
                   x.pdf,True,False,,42\n";
        let back = read_csv(csv).unwrap();
        let result = back[0].result.as_ref().unwrap();
        assert!(result.vendor_matched);
        assert!(!result.address_matched);
        assert_eq!(result.invoice_number, Some(InvoiceNumber::Value("42".to_string())));
    }

    #[test]
    fn test_read_csv_missing_column() {
        let err = read_csv("file_name,tax_number\nx.pdf,\n").unwrap_err();
        assert!(matches!(err, ExportError::MissingColumn(ref c) if c == "vendor_matched"));
    }

    #[test]
    fn test_read_csv_invalid_bool() {
        let err = read_csv("file_name,vendor_matched,address_matched\nx.pdf,yes,false\n")
            .unwrap_err();
        assert!(matches!(err, ExportError::InvalidValue { .. }));
    }

    #[test]
    fn test_render_text() {
        let reports = sample_reports();
        assert_eq!(
            render_text(&reports[0], LabelStyle::Display, true),
            "File Name: a.pdf\n\
             Emile Corporation Found: true\n\
             Address Found: true\n\
             GST/HST Number: 123456789 RT 0001\n\
             HST Number: true\n\
             Invoice Number: INV-2024/001\n\
             ---\n"
        );
        assert_eq!(
            render_text(&reports[2], LabelStyle::Internal, false),
            "file_name: c.pdf\n\
             vendor_matched: false\n\
             address_matched: false\n\
             tax_number: None\n\
             invoice_number: None\n\
             ---\n"
        );
        assert_eq!(
            render_text(&reports[3], LabelStyle::Display, true),
            "File Name: d.pdf\nError: failed to parse PDF: bad xref\n---\n"
        );
    }
}
