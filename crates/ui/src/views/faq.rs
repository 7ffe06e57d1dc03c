use dioxus::prelude::*;

struct FaqEntry {
    question: &'static str,
    answer: &'static str,
}

const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "What is The Ainstien?",
        answer: "The Ainstien is an application featuring an AI chatbot named Ainstien for \
                 philosophical discussions and a personality test that provides unique questions \
                 and detailed analysis.",
    },
    FaqEntry {
        question: "How does the Ainstien chatbot work?",
        answer: "Ainstien uses a powerful AI model to understand and generate human-like \
                 responses. It is designed to be philosophical and does not reveal the specific \
                 AI model it uses.",
    },
    FaqEntry {
        question: "How are the personality test questions generated?",
        answer: "The personality test questions are dynamically generated for each session using \
                 an advanced AI, ensuring a unique experience every time. The analysis is also \
                 AI-generated based on your responses.",
    },
    FaqEntry {
        question: "Is my data safe?",
        answer: "Chat interactions and personality test responses are processed to provide the \
                 service and are not stored with personal identifiers.",
    },
];

#[component]
pub fn FaqView() -> Element {
    rsx! {
        div { class: "page faq-page",
            header { class: "view-header",
                h2 { class: "view-title", "Frequently Asked Questions" }
            }
            div { class: "view-divider" }
            for entry in FAQ_ENTRIES {
                div { class: "faq-item",
                    p { class: "faq-question", "{entry.question}" }
                    p { class: "faq-answer", "{entry.answer}" }
                }
            }
        }
    }
}
