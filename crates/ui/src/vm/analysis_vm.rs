use ainstien_core::model::TraitInsight;

/// Display model for one trait card in the analysis view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraitCardVm {
    pub name: String,
    pub score_description: String,
    pub badge_class: &'static str,
    pub elaboration: String,
}

/// Map score prose to a badge style. Later rules win so a description like
/// "High, leans towards extroversion" styles as extroversion.
#[must_use]
pub fn score_badge_class(description: &str) -> &'static str {
    let lower = description.to_lowercase();
    let mut class = "trait-badge";
    if lower.contains("high") {
        class = "trait-badge trait-badge--high";
    }
    if lower.contains("low") {
        class = "trait-badge trait-badge--low";
    }
    if lower.contains("moderate") {
        class = "trait-badge trait-badge--moderate";
    }
    if lower.contains("introversion") {
        class = "trait-badge trait-badge--introversion";
    }
    if lower.contains("extroversion") {
        class = "trait-badge trait-badge--extroversion";
    }
    class
}

/// Map traits to display cards, preserving the order they arrived in.
#[must_use]
pub fn map_trait_cards(traits: &[TraitInsight]) -> Vec<TraitCardVm> {
    traits
        .iter()
        .map(|insight| TraitCardVm {
            name: insight.name().to_string(),
            score_description: insight.score_description().to_string(),
            badge_class: score_badge_class(insight.score_description()),
            elaboration: insight.elaboration().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_classes_match_score_prose() {
        assert_eq!(score_badge_class("High"), "trait-badge trait-badge--high");
        assert_eq!(score_badge_class("Low"), "trait-badge trait-badge--low");
        assert_eq!(
            score_badge_class("Moderate"),
            "trait-badge trait-badge--moderate"
        );
        assert_eq!(
            score_badge_class("Leans towards introversion"),
            "trait-badge trait-badge--introversion"
        );
        assert_eq!(score_badge_class("Balanced"), "trait-badge");
    }

    #[test]
    fn later_rules_win_on_combined_descriptions() {
        assert_eq!(
            score_badge_class("High, leans towards extroversion"),
            "trait-badge trait-badge--extroversion"
        );
    }

    #[test]
    fn trait_cards_preserve_order() {
        let traits = vec![
            TraitInsight::new("Openness", "High", "Enjoys new ideas."),
            TraitInsight::new("Social Style", "Leans towards introversion", "Prefers quiet."),
        ];
        let cards = map_trait_cards(&traits);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "Openness");
        assert_eq!(cards[1].badge_class, "trait-badge trait-badge--introversion");
    }
}
