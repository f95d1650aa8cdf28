use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification { LikelyTrue, VerifiedFalse, InsufficientEvidence }

impl Classification {
    /// Title-cased label, e.g. "Likely True".
    pub fn label(&self) -> &'static str {
        match self {
            Classification::LikelyTrue => "Likely True",
            Classification::VerifiedFalse => "Verified False",
            Classification::InsufficientEvidence => "Insufficient Evidence",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType { Authoritative, Unknown }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance { Supports, Contradicts, Neutral }

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credibility {
    pub is_credible: bool,
    #[serde(rename = "type")]
    pub source_type: SourceType,
    pub domain: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub title: String,
    pub snippet: String,
    pub link: String,
    pub credibility: Credibility,
    pub stance: Stance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub classification: Classification,
    pub score: f64,
    pub uncertainty_score: f64,
    pub confidence_interval: [f64; 2],
    pub conflicting_evidence: bool,
    pub evidence_count: usize,
    pub requires_human_review: bool,
}

/// Counts over `evidence_details`. Only built from an evidence slice so it
/// cannot drift from the list it describes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceBreakdown {
    pub supporting_evidence: usize,
    pub contradicting_evidence: usize,
    pub credible_sources: usize,
    pub total_sources: usize,
    pub credibility_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    pub summary: String,
    pub evidence_breakdown: EvidenceBreakdown,
    pub sources_found: Vec<SourceType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub verdict: Verdict,
    pub claims: Vec<String>,              // at most one truncated copy of the input
    pub explanation: Explanation,
    pub processing_stages: Vec<String>,
    pub search_powered: bool,
    pub analysis_timestamp: DateTime<Utc>,
    pub evidence_details: Vec<Evidence>,
}
