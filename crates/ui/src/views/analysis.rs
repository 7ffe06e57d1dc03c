use dioxus::prelude::*;

use ainstien_core::model::AnalysisResult;

use crate::vm::map_trait_cards;

/// Read-only rendering of a completed personality analysis.
///
/// Trait cards keep the order the server produced; the philosophical note
/// block only renders when a non-empty note is present. The single action is
/// the retake button, wired back into the owning test session.
#[component]
pub fn AnalysisDisplay(analysis: AnalysisResult, on_retake: EventHandler<()>) -> Element {
    let trait_cards = map_trait_cards(analysis.key_traits());
    let note = analysis.compatibility_note().map(str::to_string);

    rsx! {
        div { class: "analysis",
            h2 { class: "analysis-title", "Your Personality Analysis" }
            section { class: "analysis-summary",
                h3 { "Overall Summary" }
                p { "{analysis.overall_summary()}" }
            }
            section { class: "analysis-traits",
                h3 { "Key Traits" }
                div { class: "analysis-trait-grid",
                    for card in trait_cards {
                        div { class: "analysis-trait-card",
                            h4 { "{card.name}" }
                            span { class: "{card.badge_class}", "{card.score_description}" }
                            p { "{card.elaboration}" }
                        }
                    }
                }
            }
            section { class: "analysis-narrative",
                h3 { "Detailed Narrative" }
                p { "{analysis.detailed_narrative()}" }
            }
            if let Some(note) = note {
                section { class: "analysis-note",
                    h3 { "Ainstien's Philosophical Note" }
                    p { class: "analysis-note-text", "{note}" }
                }
            }
            div { class: "analysis-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_retake.call(()),
                    "Retake Test"
                }
            }
        }
    }
}
