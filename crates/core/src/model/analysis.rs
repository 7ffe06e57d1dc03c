use serde::{Deserialize, Serialize};

/// One key trait within a personality analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitInsight {
    trait_name: String,
    score_description: String,
    elaboration: String,
}

impl TraitInsight {
    #[must_use]
    pub fn new(
        trait_name: impl Into<String>,
        score_description: impl Into<String>,
        elaboration: impl Into<String>,
    ) -> Self {
        Self {
            trait_name: trait_name.into(),
            score_description: score_description.into(),
            elaboration: elaboration.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.trait_name
    }

    #[must_use]
    pub fn score_description(&self) -> &str {
        &self.score_description
    }

    #[must_use]
    pub fn elaboration(&self) -> &str {
        &self.elaboration
    }
}

/// The structured analysis returned after a completed test submission.
///
/// Created once per successful submission and discarded on retake. Trait
/// order is preserved as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    overall_summary: String,
    key_traits: Vec<TraitInsight>,
    detailed_narrative: String,
    #[serde(default)]
    compatibility_note: Option<String>,
}

impl AnalysisResult {
    #[must_use]
    pub fn new(
        overall_summary: impl Into<String>,
        key_traits: Vec<TraitInsight>,
        detailed_narrative: impl Into<String>,
        compatibility_note: Option<String>,
    ) -> Self {
        Self {
            overall_summary: overall_summary.into(),
            key_traits,
            detailed_narrative: detailed_narrative.into(),
            compatibility_note,
        }
    }

    #[must_use]
    pub fn overall_summary(&self) -> &str {
        &self.overall_summary
    }

    #[must_use]
    pub fn key_traits(&self) -> &[TraitInsight] {
        &self.key_traits
    }

    #[must_use]
    pub fn detailed_narrative(&self) -> &str {
        &self.detailed_narrative
    }

    /// The optional philosophical note. An absent, empty, or whitespace-only
    /// note reads as `None` so the UI can skip the block entirely.
    #[must_use]
    pub fn compatibility_note(&self) -> Option<&str> {
        self.compatibility_note
            .as_deref()
            .map(str::trim)
            .filter(|note| !note.is_empty())
    }
}
