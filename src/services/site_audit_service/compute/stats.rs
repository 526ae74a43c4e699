use crate::models::comparison::{ComparisonReport, PageComparison, RunSummary};
use crate::models::lighthouse::ScoreStats;
use crate::services::site_audit_service::compute::policy::DiffStatus;

/// Min, max, median and population standard deviation. `None` for no scores.
pub fn compute_score_stats(scores: &mut [f64]) -> Option<ScoreStats> {
    if scores.is_empty() {
        return None;
    }
    scores.sort_by(f64::total_cmp);

    let count = scores.len();
    let mean = scores.iter().sum::<f64>() / count as f64;

    let variance = scores.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / count as f64;
    let std_dev = variance.sqrt();

    let median = if count % 2 == 0 {
        (scores[count / 2 - 1] + scores[count / 2]) / 2.0
    } else {
        scores[count / 2]
    };

    Some(ScoreStats {
        min: scores[0],
        max: scores[count - 1],
        median,
        std_dev,
    })
}

/// Best after-score first. A failed after measurement sorts as a score of 0;
/// ties keep their arrival order.
pub fn sort_comparisons(comparisons: &mut [PageComparison]) {
    comparisons.sort_by(|a, b| {
        let a_score = a.after.performance().unwrap_or(0.0);
        let b_score = b.after.performance().unwrap_or(0.0);
        b_score.total_cmp(&a_score)
    });
}

pub fn compute_summary(comparisons: &[PageComparison]) -> RunSummary {
    let valid: Vec<(f64, f64)> = comparisons.iter().filter_map(PageComparison::scores).collect();
    if valid.is_empty() {
        return RunSummary::default();
    }

    let count = valid.len() as f64;
    let before_average = valid.iter().map(|(before, _)| before).sum::<f64>() / count;
    let after_average = valid.iter().map(|(_, after)| after).sum::<f64>() / count;
    let average_improvement = after_average - before_average;
    let improvement_percent = if before_average == 0.0 {
        None
    } else {
        Some(average_improvement / before_average * 100.0)
    };

    let mut summary = RunSummary {
        before_average: Some(before_average),
        after_average: Some(after_average),
        average_improvement: Some(average_improvement),
        improvement_percent,
        valid_page_count: valid.len(),
        ..RunSummary::default()
    };

    for (before, after) in valid {
        match DiffStatus::between(before, after) {
            DiffStatus::Improved => summary.pages_improved += 1,
            DiffStatus::Regressed => summary.pages_regressed += 1,
            DiffStatus::Unchanged => summary.pages_unchanged += 1,
        }
    }

    summary
}

/// Orders the comparisons and derives every figure the reports show.
pub fn build_report(mut comparisons: Vec<PageComparison>) -> ComparisonReport {
    sort_comparisons(&mut comparisons);
    let summary = compute_summary(&comparisons);

    let mut before_scores = Vec::new();
    let mut after_scores = Vec::new();
    let mut best_page: Option<(&str, f64)> = None;
    let mut worst_page: Option<(&str, f64)> = None;

    for comparison in &comparisons {
        let Some((before, after)) = comparison.scores() else {
            continue;
        };
        before_scores.push(before);
        after_scores.push(after);

        let name = comparison.display_name.as_str();
        if best_page.map_or(true, |(_, best)| after > best) {
            best_page = Some((name, after));
        }
        if worst_page.map_or(true, |(_, worst)| after < worst) {
            worst_page = Some((name, after));
        }
    }

    let best_page = best_page.map(|(name, _)| name.to_string());
    let worst_page = worst_page.map(|(name, _)| name.to_string());

    ComparisonReport {
        summary,
        before_stats: compute_score_stats(&mut before_scores),
        after_stats: compute_score_stats(&mut after_scores),
        best_page,
        worst_page,
        comparisons,
    }
}
