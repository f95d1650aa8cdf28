use crate::types::{AnalysisResult, Evidence, SourceType};

pub fn score_percent(score: f64) -> i64 { (score * 100.0).round() as i64 }

/// Upper-cased source type.
pub fn badge(ev: &Evidence) -> &'static str {
    match ev.credibility.source_type {
        SourceType::Authoritative => "AUTHORITATIVE",
        SourceType::Unknown => "UNKNOWN",
    }
}

/// Plain-text result panel: verdict line, summary, then one block per evidence item.
pub fn render_result(r: &AnalysisResult) -> String {
    let mut out = format!(
        "Verdict: {}  {}%\n{}\n",
        r.verdict.classification.label(),
        score_percent(r.verdict.score),
        r.explanation.summary,
    );

    if !r.evidence_details.is_empty() {
        out.push_str("\nEvidence\n");
        for ev in &r.evidence_details {
            let source = if ev.credibility.domain.is_empty() { &ev.link } else { &ev.credibility.domain };
            out.push_str(&format!("  [{}] {}\n    {}\n    {source}\n", badge(ev), ev.title, ev.snippet));
        }
    }
    out
}
