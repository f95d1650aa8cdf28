use crate::types::*;

/// Half-width of the confidence interval around the score.
pub const INTERVAL_HALF_WIDTH: f64 = 0.1;
/// Scores below this are flagged for human review.
pub const REVIEW_THRESHOLD: f64 = 0.6;

pub fn build_verdict(classification: Classification, score: f64, evidence: &[Evidence]) -> Verdict {
    let supports = evidence.iter().any(|e| e.stance == Stance::Supports);
    let contradicts = evidence.iter().any(|e| e.stance == Stance::Contradicts);
    Verdict {
        classification,
        score,
        uncertainty_score: 1.0 - score,
        confidence_interval: confidence_interval(score),
        conflicting_evidence: supports && contradicts,
        evidence_count: evidence.len(),
        requires_human_review: score < REVIEW_THRESHOLD,
    }
}

pub fn confidence_interval(score: f64) -> [f64; 2] {
    [
        (score - INTERVAL_HALF_WIDTH).max(0.0),
        (score + INTERVAL_HALF_WIDTH).min(1.0),
    ]
}

impl EvidenceBreakdown {
    pub fn from_evidence(evidence: &[Evidence]) -> Self {
        let supporting_evidence = evidence.iter().filter(|e| e.stance == Stance::Supports).count();
        let contradicting_evidence = evidence.iter().filter(|e| e.stance == Stance::Contradicts).count();
        let credible_sources = evidence.iter().filter(|e| e.credibility.is_credible).count();
        let total_sources = evidence.len();
        let credibility_ratio = if total_sources > 0 {
            credible_sources as f64 / total_sources as f64
        } else {
            0.0
        };
        Self { supporting_evidence, contradicting_evidence, credible_sources, total_sources, credibility_ratio }
    }
}
