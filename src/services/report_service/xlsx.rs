use crate::error::ReportError;
use crate::models::comparison::{MeasurementOutcome, PageComparison};
use crate::services::report_service::ReportInput;
use crate::services::site_audit_service::compute::DiffStatus;
use crate::utils::write_report_bytes;
use log::info;
use rust_xlsxwriter::{Color, Format, Workbook, Worksheet, XlsxError};
use std::path::Path;

const SHEET_NAME: &str = "PageSpeed Results";

const HEADERS: [(&str, f64); 13] = [
    ("Page Name", 20.0),
    ("Before Performance", 15.0),
    ("After Performance", 15.0),
    ("Before FCP", 10.0),
    ("After FCP", 10.0),
    ("Before LCP", 10.0),
    ("After LCP", 10.0),
    ("Before CLS", 10.0),
    ("After CLS", 10.0),
    ("Before TBT", 10.0),
    ("After TBT", 10.0),
    ("Performance Diff", 15.0),
    ("Status", 12.0),
];

const DIFF_COL: usize = 11;
const STATUS_COL: usize = 12;

const SCORE_FORMAT: &str = "0.00";
// same rendering as the HTML diff: +12.50, -3.00, 0.00
const DIFF_FORMAT: &str = "+0.00;-0.00;0.00";
const PERCENT_FORMAT: &str = "0.00\"%\"";

/// What goes into one cell. Numbers stay numbers so the sheet can be
/// sorted and summed.
#[derive(Debug, Clone, PartialEq)]
enum Cell {
    Empty,
    Text(String),
    Count(usize),
    Score(f64),
    Diff(f64),
    Percent(f64),
}

impl Cell {
    fn text(value: &str) -> Self {
        Cell::Text(value.to_string())
    }

    fn or_na(value: Option<f64>, cell: fn(f64) -> Cell) -> Self {
        value.map(cell).unwrap_or_else(|| Cell::text("N/A"))
    }
}

// before columns are red, after columns green
struct SideFormats {
    score: Format,
    text: Format,
}

impl SideFormats {
    fn new(rgb: u32) -> Self {
        SideFormats {
            score: Format::new()
                .set_font_color(Color::RGB(rgb))
                .set_num_format(SCORE_FORMAT),
            text: Format::new().set_font_color(Color::RGB(rgb)),
        }
    }
}

struct Formats {
    sides: [SideFormats; 2],
    score: Format,
    diff: Format,
    percent: Format,
}

impl Formats {
    fn new() -> Self {
        Formats {
            sides: [SideFormats::new(0xFF0000), SideFormats::new(0x008000)],
            score: Format::new().set_num_format(SCORE_FORMAT),
            diff: Format::new().set_num_format(DIFF_FORMAT),
            percent: Format::new().set_num_format(PERCENT_FORMAT),
        }
    }
}

/// Builds the workbook in memory and returns the `.xlsx` bytes.
pub fn render_xlsx(input: &ReportInput<'_>) -> Result<Vec<u8>, ReportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header = Format::new().set_bold();
    for (col, (title, width)) in HEADERS.iter().enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *title, &header)?;
        worksheet.set_column_width(col, *width)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    let formats = Formats::new();
    let mut row: u32 = 1;
    for comparison in &input.report.comparisons {
        for (col, cell) in row_cells(comparison).iter().enumerate() {
            let side = side_of(col).map(|side| &formats.sides[side]);
            write_cell(worksheet, row, col as u16, cell, &formats, side)?;
        }
        row += 1;
    }

    let start_row = row + 1;
    worksheet.write_string_with_format(start_row, 0, "SUMMARY", &header)?;
    for (index, (label, cell)) in summary_cells(input).iter().enumerate() {
        let row = start_row + 1 + index as u32;
        worksheet.write_string(row, 0, *label)?;
        write_cell(worksheet, row, 1, cell, &formats, None)?;
    }

    Ok(workbook.save_to_buffer()?)
}

pub fn generate_xlsx_report(input: &ReportInput<'_>, path: &Path) -> Result<(), ReportError> {
    let bytes = render_xlsx(input)?;
    write_report_bytes(path, &bytes)?;
    info!("✨ XLSX report written to {}", path.display());
    Ok(())
}

// Columns 1..=10 alternate before (odd) and after (even)
fn side_of(col: usize) -> Option<usize> {
    (1..=10).contains(&col).then_some((col + 1) % 2)
}

fn row_cells(comparison: &PageComparison) -> Vec<Cell> {
    let mut cells = vec![Cell::Empty; HEADERS.len()];
    cells[0] = Cell::Text(comparison.display_name.clone());

    for (offset, outcome) in [&comparison.before, &comparison.after]
        .into_iter()
        .enumerate()
    {
        match outcome {
            MeasurementOutcome::Success(result) => {
                cells[1 + offset] = Cell::Score(result.performance);
                let metrics = [&result.fcp, &result.lcp, &result.cls, &result.tbt];
                for (index, metric) in metrics.into_iter().enumerate() {
                    if let Some(value) = metric {
                        cells[3 + 2 * index + offset] = Cell::Text(value.clone());
                    }
                }
            }
            MeasurementOutcome::Failed { .. } => {
                cells[1 + offset] = Cell::text("ERROR");
                for index in 0..4 {
                    cells[3 + 2 * index + offset] = Cell::text("N/A");
                }
            }
        }
    }

    match comparison.scores() {
        Some((before, after)) => {
            cells[DIFF_COL] = Cell::Diff(after - before);
            cells[STATUS_COL] = Cell::text(DiffStatus::between(before, after).label());
        }
        None => {
            cells[DIFF_COL] = Cell::text("ERROR");
            cells[STATUS_COL] = Cell::text("Error");
        }
    }

    cells
}

fn summary_cells(input: &ReportInput<'_>) -> Vec<(&'static str, Cell)> {
    let report = input.report;
    let summary = &report.summary;
    let name = |page: &Option<String>| Cell::text(page.as_deref().unwrap_or("N/A"));

    vec![
        ("Pages Compared", Cell::Count(input.total_pages)),
        ("Total Measurements", Cell::Count(input.measurements())),
        ("Failed Measurements", Cell::Count(report.failed_measurements())),
        ("Valid Pages", Cell::Count(summary.valid_page_count)),
        ("Pages Improved", Cell::Count(summary.pages_improved)),
        ("Pages Regressed", Cell::Count(summary.pages_regressed)),
        ("Pages Unchanged", Cell::Count(summary.pages_unchanged)),
        (
            "Before Average Performance",
            Cell::or_na(summary.before_average, Cell::Score),
        ),
        (
            "After Average Performance",
            Cell::or_na(summary.after_average, Cell::Score),
        ),
        (
            "Average Improvement",
            Cell::or_na(summary.average_improvement, Cell::Diff),
        ),
        (
            "Improvement Percent",
            Cell::or_na(summary.improvement_percent, Cell::Percent),
        ),
        ("Best Page", name(&report.best_page)),
        ("Worst Page", name(&report.worst_page)),
        (
            "Processing Time (seconds)",
            Cell::Score(input.elapsed.as_secs_f64()),
        ),
        ("Generated At", Cell::Text(input.generated_at.to_rfc3339())),
    ]
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    formats: &Formats,
    side: Option<&SideFormats>,
) -> Result<(), XlsxError> {
    match cell {
        Cell::Empty => {}
        Cell::Text(text) => match side {
            Some(side) => {
                worksheet.write_string_with_format(row, col, text, &side.text)?;
            }
            None => {
                worksheet.write_string(row, col, text)?;
            }
        },
        Cell::Count(count) => {
            worksheet.write_number(row, col, *count as f64)?;
        }
        Cell::Score(score) => {
            let format = side.map_or(&formats.score, |side| &side.score);
            worksheet.write_number_with_format(row, col, *score, format)?;
        }
        Cell::Diff(diff) => {
            worksheet.write_number_with_format(row, col, *diff, &formats.diff)?;
        }
        Cell::Percent(percent) => {
            worksheet.write_number_with_format(row, col, *percent, &formats.percent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::comparison::MeasurementResult;
    use crate::services::site_audit_service::compute::build_report;
    use chrono::Utc;
    use std::time::Duration;

    fn comparison(slug: &str, before: Option<f64>, after: Option<f64>) -> PageComparison {
        let side = |score: Option<f64>| match score {
            Some(performance) => MeasurementOutcome::Success(MeasurementResult {
                url: slug.to_string(),
                performance,
                fcp: Some("1.0 s".to_string()),
                lcp: None,
                cls: Some("0.1".to_string()),
                tbt: None,
            }),
            None => MeasurementOutcome::failed(slug),
        };
        PageComparison {
            page_id: slug.to_string(),
            display_name: slug.to_string(),
            before: side(before),
            after: side(after),
        }
    }

    fn input(report: &crate::models::comparison::ComparisonReport) -> ReportInput<'_> {
        ReportInput {
            report,
            total_pages: report.comparisons.len(),
            elapsed: Duration::from_millis(2500),
            generated_at: Utc::now(),
        }
    }

    fn summary_value<'a>(cells: &'a [(&str, Cell)], label: &str) -> &'a Cell {
        &cells
            .iter()
            .find(|(l, _)| *l == label)
            .unwrap_or_else(|| panic!("no summary line {label}"))
            .1
    }

    #[test]
    fn columns_alternate_before_and_after() {
        for (col, (title, _)) in HEADERS.iter().enumerate() {
            match side_of(col) {
                Some(0) => assert!(title.starts_with("Before"), "{title}"),
                Some(1) => assert!(title.starts_with("After"), "{title}"),
                _ => assert!(!title.starts_with("Before") && !title.starts_with("After")),
            }
        }
    }

    #[test]
    fn measured_row_keeps_numbers_and_status_label() {
        let cells = row_cells(&comparison("about", Some(50.0), Some(70.0)));

        assert_eq!(cells[0], Cell::text("about"));
        assert_eq!(cells[1], Cell::Score(50.0));
        assert_eq!(cells[2], Cell::Score(70.0));
        assert_eq!(cells[3], Cell::text("1.0 s"));
        assert_eq!(cells[4], Cell::text("1.0 s"));
        assert_eq!(cells[5], Cell::Empty);
        assert_eq!(cells[DIFF_COL], Cell::Diff(20.0));
        assert_eq!(cells[STATUS_COL], Cell::text("Improved"));

        let cells = row_cells(&comparison("blog", Some(70.0), Some(66.0)));
        assert_eq!(cells[DIFF_COL], Cell::Diff(-4.0));
        assert_eq!(cells[STATUS_COL], Cell::text("Unchanged"));
    }

    #[test]
    fn all_failed_run_marks_every_row_as_errored() {
        let report = build_report(vec![comparison("a", None, None), comparison("b", None, None)]);

        for comparison in &report.comparisons {
            let cells = row_cells(comparison);
            assert_eq!(cells[1], Cell::text("ERROR"));
            assert_eq!(cells[2], Cell::text("ERROR"));
            for cell in &cells[3..=10] {
                assert_eq!(*cell, Cell::text("N/A"));
            }
            assert_eq!(cells[DIFF_COL], Cell::text("ERROR"));
            assert_eq!(cells[STATUS_COL], Cell::text("Error"));
        }

        let summary = summary_cells(&input(&report));
        assert_eq!(summary_value(&summary, "Valid Pages"), &Cell::Count(0));
        assert_eq!(summary_value(&summary, "Failed Measurements"), &Cell::Count(4));
        for label in [
            "Before Average Performance",
            "After Average Performance",
            "Average Improvement",
            "Improvement Percent",
            "Best Page",
        ] {
            assert_eq!(summary_value(&summary, label), &Cell::text("N/A"), "{label}");
        }
    }

    #[test]
    fn half_failed_row_errors_only_the_failed_side() {
        let cells = row_cells(&comparison("contact", None, Some(80.0)));
        assert_eq!(cells[1], Cell::text("ERROR"));
        assert_eq!(cells[2], Cell::Score(80.0));
        assert_eq!(cells[3], Cell::text("N/A"));
        assert_eq!(cells[4], Cell::text("1.0 s"));
        assert_eq!(cells[DIFF_COL], Cell::text("ERROR"));
    }

    #[test]
    fn summary_figures_are_numeric() {
        let report = build_report(vec![
            comparison("a", Some(50.0), Some(60.0)),
            comparison("b", Some(70.0), Some(90.0)),
        ]);
        let summary = summary_cells(&input(&report));

        assert_eq!(summary_value(&summary, "Pages Compared"), &Cell::Count(2));
        assert_eq!(summary_value(&summary, "Total Measurements"), &Cell::Count(4));
        assert_eq!(summary_value(&summary, "Pages Improved"), &Cell::Count(2));
        assert_eq!(summary_value(&summary, "Pages Regressed"), &Cell::Count(0));
        assert_eq!(
            summary_value(&summary, "Before Average Performance"),
            &Cell::Score(60.0)
        );
        assert_eq!(
            summary_value(&summary, "After Average Performance"),
            &Cell::Score(75.0)
        );
        assert_eq!(
            summary_value(&summary, "Average Improvement"),
            &Cell::Diff(15.0)
        );
        assert_eq!(
            summary_value(&summary, "Improvement Percent"),
            &Cell::Percent(25.0)
        );
        assert_eq!(summary_value(&summary, "Best Page"), &Cell::text("b"));
        assert_eq!(
            summary_value(&summary, "Processing Time (seconds)"),
            &Cell::Score(2.5)
        );
    }

    #[test]
    fn renders_a_zip_container() {
        let report = build_report(vec![
            comparison("about", Some(50.0), Some(70.0)),
            comparison("blog", None, Some(40.0)),
        ]);

        let bytes = render_xlsx(&input(&report)).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn all_failed_run_still_writes_a_workbook() {
        let report = build_report(vec![comparison("a", None, None), comparison("b", None, None)]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");
        generate_xlsx_report(&input(&report), &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert!(written.starts_with(b"PK"));
    }
}
