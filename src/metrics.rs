// =============================================================================
// Threshold Metrics for Binary Responses
// =============================================================================
//
// Evaluation of a binary classifier across all decision thresholds:
//
//   - roc_curve / roc_auc_score: false-positive rate vs. true-positive rate
//     as the threshold sweeps the scores, and the area under that curve
//   - precision_recall_curve / average_precision_score: precision vs.
//     recall across thresholds, and the step-interpolated area
//
// Scores are whatever the model produces — linear predictors or inverse-link
// probabilities give identical rankings, so either works.
//
// Labels are 0.0/1.0 (anything > 0.5 counts as positive so that response
// matrices can be passed through directly). Both curves require at least one
// positive and one negative label; degenerate inputs fail with
// `InvalidValue` rather than returning NaN rates.
//
// =============================================================================

use ndarray::Array1;

use crate::error::{NetGlmError, Result};

/// One point on a threshold-sweep curve, tagged with the score threshold
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub threshold: f64,
    pub x: f64,
    pub y: f64,
}

/// Cumulative true/false positive counts at each distinct score, scores
/// descending. Shared scaffolding for both curves.
fn cumulative_counts(
    y_true: &Array1<f64>,
    score: &Array1<f64>,
) -> Result<(Vec<(f64, f64, f64)>, f64, f64)> {
    if y_true.len() != score.len() {
        return Err(NetGlmError::DimensionMismatch(format!(
            "y_true has {} entries but scores have {}",
            y_true.len(),
            score.len()
        )));
    }
    if score.iter().any(|v| !v.is_finite()) {
        return Err(NetGlmError::InvalidValue(
            "scores must be finite".to_string(),
        ));
    }

    let labels: Vec<bool> = y_true.iter().map(|&v| v > 0.5).collect();
    let positives = labels.iter().filter(|&&l| l).count() as f64;
    let negatives = labels.len() as f64 - positives;
    if positives == 0.0 || negatives == 0.0 {
        return Err(NetGlmError::InvalidValue(
            "need at least one positive and one negative label".to_string(),
        ));
    }

    let mut order: Vec<usize> = (0..labels.len()).collect();
    order.sort_by(|&a, &b| {
        score[b]
            .partial_cmp(&score[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // Collapse tied scores into a single threshold point.
    let mut points = Vec::new();
    let mut tp = 0.0;
    let mut fp = 0.0;
    let mut i = 0;
    while i < order.len() {
        let threshold = score[order[i]];
        while i < order.len() && score[order[i]] == threshold {
            if labels[order[i]] {
                tp += 1.0;
            } else {
                fp += 1.0;
            }
            i += 1;
        }
        points.push((threshold, tp, fp));
    }

    Ok((points, positives, negatives))
}

/// ROC curve: one `CurvePoint { x: fpr, y: tpr }` per distinct score,
/// preceded by the (0, 0) origin.
pub fn roc_curve(y_true: &Array1<f64>, score: &Array1<f64>) -> Result<Vec<CurvePoint>> {
    let (counts, positives, negatives) = cumulative_counts(y_true, score)?;

    let mut curve = Vec::with_capacity(counts.len() + 1);
    curve.push(CurvePoint {
        threshold: f64::INFINITY,
        x: 0.0,
        y: 0.0,
    });
    for (threshold, tp, fp) in counts {
        curve.push(CurvePoint {
            threshold,
            x: fp / negatives,
            y: tp / positives,
        });
    }
    Ok(curve)
}

/// Area under the ROC curve (trapezoidal rule).
pub fn roc_auc_score(y_true: &Array1<f64>, score: &Array1<f64>) -> Result<f64> {
    let curve = roc_curve(y_true, score)?;

    let mut area = 0.0;
    for pair in curve.windows(2) {
        area += (pair[1].x - pair[0].x) * (pair[0].y + pair[1].y) / 2.0;
    }
    Ok(area)
}

/// Precision-recall curve: one `CurvePoint { x: recall, y: precision }` per
/// distinct score, thresholds descending (recall nondecreasing).
pub fn precision_recall_curve(
    y_true: &Array1<f64>,
    score: &Array1<f64>,
) -> Result<Vec<CurvePoint>> {
    let (counts, positives, _) = cumulative_counts(y_true, score)?;

    let mut curve = Vec::with_capacity(counts.len());
    for (threshold, tp, fp) in counts {
        curve.push(CurvePoint {
            threshold,
            x: tp / positives,
            y: if tp + fp > 0.0 { tp / (tp + fp) } else { 1.0 },
        });
    }
    Ok(curve)
}

/// Average precision: step-interpolated area under the precision-recall
/// curve, Σ (Rₙ − Rₙ₋₁)·Pₙ.
pub fn average_precision_score(y_true: &Array1<f64>, score: &Array1<f64>) -> Result<f64> {
    let curve = precision_recall_curve(y_true, score)?;

    let mut ap = 0.0;
    let mut prev_recall = 0.0;
    for point in &curve {
        ap += (point.x - prev_recall) * point.y;
        prev_recall = point.x;
    }
    Ok(ap)
}

// =============================================================================
// Tests
// =============================================================================
