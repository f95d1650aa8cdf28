//! Keyword-rule evidence analysis.
//!
//! Rules are checked in table order and the first one whose trigger appears
//! in the lower-cased text decides the verdict. Text matching no rule gets
//! `insufficient_evidence` with a neutral score and no evidence.

use std::time::Duration;

use chrono::Utc;

use crate::claims::extract_claims;
use crate::scoring::build_verdict;
use crate::types::*;

pub const DEFAULT_SCORE: f64 = 0.5;
pub const DEFAULT_DELAY: Duration = Duration::from_millis(800);
pub const PROCESSING_STAGES: [&str; 2] = ["Claim Extraction", "Local Analysis"];

struct EvidenceTemplate {
    title: &'static str,
    snippet: &'static str,
    link: &'static str,
    domain: &'static str,
    stance: Stance,
}

impl EvidenceTemplate {
    fn to_evidence(&self) -> Evidence {
        Evidence {
            title: self.title.into(),
            snippet: self.snippet.into(),
            link: self.link.into(),
            credibility: Credibility {
                is_credible: true,
                source_type: SourceType::Authoritative,
                domain: self.domain.into(),
            },
            stance: self.stance,
        }
    }
}

struct KeywordRule {
    triggers: &'static [&'static str],
    classification: Classification,
    score: f64,
    evidence: EvidenceTemplate,
}

impl KeywordRule {
    fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| lowered.contains(t))
    }
}

// Order matters: "nasa" outranks "bleach" when both appear.
const RULES: [KeywordRule; 2] = [
    KeywordRule {
        triggers: &["nasa", "according to"],
        classification: Classification::LikelyTrue,
        score: 0.78,
        evidence: EvidenceTemplate {
            title: "Authoritative source",
            snippet: "NASA reports warming trends.",
            link: "https://nasa.gov",
            domain: "nasa.gov",
            stance: Stance::Supports,
        },
    },
    KeywordRule {
        triggers: &["bleach", "cure"],
        classification: Classification::VerifiedFalse,
        score: 0.92,
        evidence: EvidenceTemplate {
            title: "Debunking study",
            snippet: "Health authorities warn against bleach.",
            link: "https://cdc.gov",
            domain: "cdc.gov",
            stance: Stance::Contradicts,
        },
    },
];

pub fn summary_for(classification: Classification) -> &'static str {
    match classification {
        Classification::InsufficientEvidence => "Not enough evidence.",
        Classification::VerifiedFalse => "Strongly contradicted by health authorities.",
        Classification::LikelyTrue => "Supported by authoritative sources.",
    }
}

#[derive(Debug, Clone)]
pub struct Analyzer {
    delay: Duration,
}

impl Default for Analyzer {
    fn default() -> Self { Self { delay: DEFAULT_DELAY } }
}

impl Analyzer {
    pub fn new(delay: Duration) -> Self { Self { delay } }

    /// Waits out the simulated latency, then runs the rules. Callers must
    /// reject blank input first.
    pub async fn analyze(&self, text: &str) -> AnalysisResult {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        evaluate(text)
    }
}

/// The synchronous core of [`Analyzer::analyze`].
pub fn evaluate(text: &str) -> AnalysisResult {
    let lowered = text.to_lowercase();

    let mut classification = Classification::InsufficientEvidence;
    let mut score = DEFAULT_SCORE;
    let mut evidence_details = Vec::new();
    if let Some(rule) = RULES.iter().find(|r| r.matches(&lowered)) {
        classification = rule.classification;
        score = rule.score;
        evidence_details.push(rule.evidence.to_evidence());
    }
    tracing::debug!(?classification, score, evidence = evidence_details.len(), "claim evaluated");

    let verdict = build_verdict(classification, score, &evidence_details);
    let explanation = Explanation {
        summary: summary_for(classification).to_string(),
        evidence_breakdown: EvidenceBreakdown::from_evidence(&evidence_details),
        sources_found: evidence_details.iter().map(|e| e.credibility.source_type).collect(),
    };

    AnalysisResult {
        verdict,
        claims: extract_claims(text),
        explanation,
        processing_stages: PROCESSING_STAGES.iter().map(|s| s.to_string()).collect(),
        search_powered: false,
        analysis_timestamp: Utc::now(),
        evidence_details,
    }
}
