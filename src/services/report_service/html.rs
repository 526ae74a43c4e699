use crate::error::ReportError;
use crate::models::comparison::{MeasurementOutcome, MeasurementResult, PageComparison};
use crate::models::lighthouse::ScoreStats;
use crate::services::report_service::ReportInput;
use crate::services::site_audit_service::compute::{
    diff_display, round2, round2_or_na, DiffStatus, ScoreTier,
};
use crate::utils::write_report_bytes;
use log::info;
use std::path::Path;

const STYLE: &str = "
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
            margin: 0;
            background: linear-gradient(135deg, #f5f7fa 0%, #e4e9f2 100%);
            color: #2d3748;
            padding: 20px;
        }
        .container {
            background: white;
            padding: 2rem;
            border-radius: 12px;
            box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
            max-width: 1200px;
            margin: 0 auto;
        }
        h1 { margin-top: 0; color: #4a5568; }
        .meta { color: #718096; font-size: 0.9rem; }
        .cards { display: flex; flex-wrap: wrap; gap: 1rem; margin: 1.5rem 0; }
        .card { background: #f8fafc; border-radius: 8px; padding: 1rem 1.25rem; min-width: 150px; }
        .card .label { color: #718096; font-size: 0.8rem; text-transform: uppercase; }
        .card .value { font-size: 1.5rem; font-weight: bold; }
        table { width: 100%; border-collapse: collapse; margin: 1rem 0; font-size: 0.9rem; }
        th, td { padding: 8px 10px; border-bottom: 1px solid #e2e8f0; text-align: left; }
        th { background: #edf2f7; }
        .slug { color: #a0aec0; font-size: 0.8rem; }
        .score-good { color: #0c8a3e; font-weight: bold; }
        .score-medium { color: #c05621; font-weight: bold; }
        .score-bad { color: #c53030; font-weight: bold; }
        .diff-improved { color: #0c8a3e; }
        .diff-worse { color: #c53030; }
        .diff-neutral { color: #718096; }
        .error { color: #c53030; font-style: italic; }
        .metric { white-space: nowrap; }
";

/// Renders the comparison as a standalone HTML page with inline CSS.
pub fn render_html(input: &ReportInput<'_>) -> String {
    let report = input.report;
    let summary = &report.summary;

    let mut rows = String::new();
    for comparison in &report.comparisons {
        rows.push_str(&render_row(comparison));
    }

    let improvement = match (summary.before_average, summary.after_average) {
        (Some(before), Some(after)) => diff_display(before, after),
        _ => "N/A".to_string(),
    };
    let improvement_percent = summary
        .improvement_percent
        .map(|p| format!("{}%", round2(p)))
        .unwrap_or_else(|| "N/A".to_string());

    let mut highlights = String::new();
    if let Some(best) = &report.best_page {
        highlights.push_str(&format!(
            "<p>🏆 Best after deploy: <strong>{}</strong></p>",
            escape_html(best)
        ));
    }
    if let Some(worst) = &report.worst_page {
        highlights.push_str(&format!(
            "<p>🐢 Slowest after deploy: <strong>{}</strong></p>",
            escape_html(worst)
        ));
    }

    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
    <title>PageSpeed Comparison Report</title>
    <style>{style}</style>
</head>
<body>
    <div class=\"container\">
        <h1>PageSpeed Comparison Report</h1>
        <p class=\"meta\">Generated {generated} &middot; {total_pages} pages, {measurements} measurements &middot; {failed} failed &middot; processed in {elapsed}s</p>

        <div class=\"cards\">
            <div class=\"card\"><div class=\"label\">Before average</div><div class=\"value\">{before_avg}</div></div>
            <div class=\"card\"><div class=\"label\">After average</div><div class=\"value\">{after_avg}</div></div>
            <div class=\"card\"><div class=\"label\">Average change</div><div class=\"value\">{improvement}</div></div>
            <div class=\"card\"><div class=\"label\">Change %</div><div class=\"value\">{improvement_percent}</div></div>
            <div class=\"card\"><div class=\"label\">Improved</div><div class=\"value diff-improved\">{improved}</div></div>
            <div class=\"card\"><div class=\"label\">Regressed</div><div class=\"value diff-worse\">{regressed}</div></div>
            <div class=\"card\"><div class=\"label\">Unchanged</div><div class=\"value diff-neutral\">{unchanged}</div></div>
            <div class=\"card\"><div class=\"label\">Valid pages</div><div class=\"value\">{valid} / {total_pages}</div></div>
        </div>
        {highlights}
        {distribution}

        <table>
            <thead>
                <tr>
                    <th>Page</th>
                    <th>Before</th>
                    <th>After</th>
                    <th>Diff</th>
                    <th>Status</th>
                    <th>FCP</th>
                    <th>LCP</th>
                    <th>CLS</th>
                    <th>TBT</th>
                </tr>
            </thead>
            <tbody>
{rows}            </tbody>
        </table>
    </div>
</body>
</html>
",
        style = STYLE,
        generated = input.generated_at.to_rfc3339(),
        total_pages = input.total_pages,
        measurements = input.measurements(),
        failed = report.failed_measurements(),
        elapsed = input.elapsed_secs(),
        before_avg = round2_or_na(summary.before_average),
        after_avg = round2_or_na(summary.after_average),
        improvement = improvement,
        improvement_percent = improvement_percent,
        improved = summary.pages_improved,
        regressed = summary.pages_regressed,
        unchanged = summary.pages_unchanged,
        valid = summary.valid_page_count,
        highlights = highlights,
        distribution = render_distribution(
            report.before_stats.as_ref(),
            report.after_stats.as_ref()
        ),
        rows = rows,
    )
}

pub fn generate_html_report(input: &ReportInput<'_>, path: &Path) -> Result<(), ReportError> {
    let html = render_html(input);
    write_report_bytes(path, html.as_bytes())?;
    info!("✨ HTML report written to {}", path.display());
    Ok(())
}

fn render_row(comparison: &PageComparison) -> String {
    let (diff_cell, status_cell) = match comparison.scores() {
        Some((before, after)) => {
            let status = DiffStatus::between(before, after);
            (
                format!(
                    "<td class=\"{}\">{}</td>",
                    status.css_class(),
                    diff_display(before, after)
                ),
                format!("<td class=\"{}\">{}</td>", status.css_class(), status.label()),
            )
        }
        None => (
            "<td class=\"error\">ERROR</td>".to_string(),
            "<td class=\"error\">Error</td>".to_string(),
        ),
    };

    format!(
        "                <tr>
                    <td>{name}<br><span class=\"slug\">{slug}</span></td>
                    {before}
                    {after}
                    {diff}
                    {status}
                    {fcp}
                    {lcp}
                    {cls}
                    {tbt}
                </tr>
",
        name = escape_html(&comparison.display_name),
        slug = escape_html(&comparison.page_id),
        before = score_cell(&comparison.before),
        after = score_cell(&comparison.after),
        diff = diff_cell,
        status = status_cell,
        fcp = metric_cell(comparison, |r| r.fcp.as_deref()),
        lcp = metric_cell(comparison, |r| r.lcp.as_deref()),
        cls = metric_cell(comparison, |r| r.cls.as_deref()),
        tbt = metric_cell(comparison, |r| r.tbt.as_deref()),
    )
}

fn score_cell(outcome: &MeasurementOutcome) -> String {
    match outcome {
        MeasurementOutcome::Success(result) => format!(
            "<td class=\"{}\">{}</td>",
            ScoreTier::of(result.performance).css_class(),
            round2(result.performance)
        ),
        MeasurementOutcome::Failed { url } => format!(
            "<td class=\"error\" title=\"{}\">ERROR</td>",
            escape_html(url)
        ),
    }
}

// `before → after` for one audit; N/A for a failed side, a dash for a missing audit
fn metric_cell<F>(comparison: &PageComparison, pick: F) -> String
where
    F: Fn(&MeasurementResult) -> Option<&str>,
{
    let value = |outcome: &MeasurementOutcome| match outcome.result() {
        Some(result) => pick(result)
            .map(escape_html)
            .unwrap_or_else(|| "&ndash;".to_string()),
        None => "N/A".to_string(),
    };
    format!(
        "<td class=\"metric\">{} &rarr; {}</td>",
        value(&comparison.before),
        value(&comparison.after)
    )
}

fn render_distribution(before: Option<&ScoreStats>, after: Option<&ScoreStats>) -> String {
    let (Some(before), Some(after)) = (before, after) else {
        return String::new();
    };

    let row = |label: &str, stats: &ScoreStats| {
        format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            label,
            round2(stats.min),
            round2(stats.median),
            round2(stats.max),
            round2(stats.std_dev)
        )
    };

    format!(
        "<table>
            <thead><tr><th>Score distribution</th><th>Min</th><th>Median</th><th>Max</th><th>Std dev</th></tr></thead>
            <tbody>{}{}</tbody>
        </table>",
        row("Before", before),
        row("After", after)
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
