// XLSX export: two-sheet workbook mirroring a ComparisonResult
//
// Sheet "Details": one row per comparison row, mismatches tinted.
// Sheet "Summary": Metric/Value pairs copied verbatim from the summary —
// never recomputed from the detail rows.

use std::path::Path;

use crosstally_recon::model::{ComparisonResult, RowStatus, Summary};
use rust_xlsxwriter::{Color, Format, Workbook};

const MISMATCH_TINT: Color = Color::RGB(0xFFE4E6);

pub fn export(result: &ComparisonResult, path: &Path) -> Result<(), String> {
    let mut workbook = Workbook::new();

    let header = Format::new().set_bold();
    let mismatch = Format::new().set_background_color(MISMATCH_TINT);

    // --- Details sheet ---
    let sheet = workbook.add_worksheet();
    sheet.set_name("Details").map_err(|e| e.to_string())?;

    let columns = ["User", "Created By", "CSV Count", "JSON Count", "Difference", "Status"];
    for (col, title) in columns.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *title, &header)
            .map_err(|e| e.to_string())?;
        sheet.set_column_width(col as u16, 16).map_err(|e| e.to_string())?;
    }

    for (i, row) in result.details.iter().enumerate() {
        let r = (i + 1) as u32;
        let err = |e: rust_xlsxwriter::XlsxError| e.to_string();

        if row.status == RowStatus::Mismatch {
            sheet.write_string_with_format(r, 0, &row.user, &mismatch).map_err(err)?;
            sheet.write_string_with_format(r, 1, &row.key, &mismatch).map_err(err)?;
            sheet.write_number_with_format(r, 2, row.csv_count as f64, &mismatch).map_err(err)?;
            sheet.write_number_with_format(r, 3, row.json_count as f64, &mismatch).map_err(err)?;
            sheet.write_number_with_format(r, 4, row.difference as f64, &mismatch).map_err(err)?;
            sheet
                .write_string_with_format(r, 5, &row.status.to_string(), &mismatch)
                .map_err(err)?;
        } else {
            sheet.write_string(r, 0, &row.user).map_err(err)?;
            sheet.write_string(r, 1, &row.key).map_err(err)?;
            sheet.write_number(r, 2, row.csv_count as f64).map_err(err)?;
            sheet.write_number(r, 3, row.json_count as f64).map_err(err)?;
            sheet.write_number(r, 4, row.difference as f64).map_err(err)?;
            sheet.write_string(r, 5, &row.status.to_string()).map_err(err)?;
        }
    }

    // --- Summary sheet ---
    let sheet = workbook.add_worksheet();
    sheet.set_name("Summary").map_err(|e| e.to_string())?;
    sheet.set_column_width(0, 36).map_err(|e| e.to_string())?;
    sheet.set_column_width(1, 14).map_err(|e| e.to_string())?;

    sheet.write_string_with_format(0, 0, "Metric", &header).map_err(|e| e.to_string())?;
    sheet.write_string_with_format(0, 1, "Value", &header).map_err(|e| e.to_string())?;

    for (i, (metric, value)) in summary_metrics(&result.summary).iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_string(r, 0, metric).map_err(|e| e.to_string())?;
        sheet.write_number(r, 1, *value).map_err(|e| e.to_string())?;
    }

    workbook.save(path).map_err(|e| e.to_string())?;
    Ok(())
}

/// Summary sheet rows, one Metric/Value pair per summary field. Category
/// rows are labeled by the matched substring, not the config key.
fn summary_metrics(s: &Summary) -> Vec<(String, f64)> {
    let mut metrics: Vec<(String, f64)> = vec![
        ("Total Rows".into(), s.total_rows as f64),
        ("Matches".into(), s.matched as f64),
        ("Mismatches".into(), s.mismatched as f64),
        ("Total CSV Count".into(), s.total_csv_count as f64),
        ("Total JSON Count".into(), s.total_json_count as f64),
    ];
    for category in &s.category_counts {
        metrics.push((
            format!("Files containing '{}'", category.substring),
            category.count as f64,
        ));
    }
    metrics
}
