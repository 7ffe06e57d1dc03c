use dioxus::prelude::*;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page home-page",
            header { class: "view-header",
                h2 { class: "view-title", "Welcome to The Ainstien" }
                p { class: "view-subtitle",
                    "Your personal AI companion and personality analyst."
                }
            }
            div { class: "view-divider" }
            section { class: "home-section",
                h3 { "About the App" }
                p { "The Ainstien offers two main features:" }
                ul {
                    li {
                        strong { "Ainstien Chatbot: " }
                        "Engage in philosophical conversations with Ainstien, an AI with a unique personality."
                    }
                    li {
                        strong { "Personality Test: " }
                        "Discover insights into your personality through a unique set of questions generated fresh for you."
                    }
                }
            }
            section { class: "home-section",
                h3 { "How to Use" }
                p {
                    strong { "Chatbot: " }
                    "Simply type your questions or thoughts into the chat interface and Ainstien will respond."
                }
                p {
                    strong { "Personality Test: " }
                    "Answer the questions presented to you, and receive a detailed analysis of your personality."
                }
            }
        }
    }
}
