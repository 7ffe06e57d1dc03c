use std::sync::Arc;

use chrono::Utc;
use dioxus::prelude::*;

use ainstien_core::model::ChatRole;
use services::{ChatError, ChatSession};

use crate::context::AppContext;

#[component]
pub fn ChatView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_signal(ChatSession::new);
    let mut draft = use_signal(String::new);
    let mut notice = use_signal(|| None::<String>);

    let send = {
        let api = ctx.api();
        use_callback(move |()| {
            let api = Arc::clone(&api);
            let text = draft();
            let send_result = session.write().begin_send(&text, Utc::now());
            match send_result {
                Ok((payload, tag)) => {
                    draft.set(String::new());
                    notice.set(None);
                    spawn(async move {
                        let outcome = api.send_chat(&payload).await;
                        session.write().apply_reply(tag, outcome, Utc::now());
                    });
                }
                // An empty draft is ignored, same as a disabled send button.
                Err(ChatError::EmptyMessage) => {}
                Err(err) => notice.set(Some(err.to_string())),
            }
        })
    };

    let offline = session.read().is_offline();
    let pending = session.read().is_pending();
    let messages = session.read().messages().to_vec();

    rsx! {
        div { class: "page chat-page",
            header { class: "view-header",
                h2 { class: "view-title", "Ainstien Chatbot" }
                p { class: "view-subtitle",
                    "Philosophical conversation, one message at a time."
                }
            }
            div { class: "view-divider" }
            if offline {
                div { class: "chat-offline-banner",
                    span { "Ainstien is offline right now." }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| session.write().reconnect(),
                        "Reconnect"
                    }
                }
            }
            div { class: "chat-history",
                if messages.is_empty() {
                    p { class: "chat-empty", "Say hello to start the conversation." }
                }
                for message in messages.iter() {
                    div {
                        class: if message.role() == ChatRole::User {
                            "chat-message chat-message--user"
                        } else if message.is_error() {
                            "chat-message chat-message--bot chat-message--error"
                        } else {
                            "chat-message chat-message--bot"
                        },
                        span { class: "chat-bubble", "{message.text()}" }
                    }
                }
                if pending {
                    div { class: "chat-message chat-message--bot",
                        span { class: "chat-bubble chat-bubble--pending", "Ainstien is thinking..." }
                    }
                }
            }
            div { class: "chat-composer",
                input {
                    class: "chat-input",
                    r#type: "text",
                    placeholder: "Say something to Ainstien...",
                    value: "{draft()}",
                    disabled: pending || offline,
                    oninput: move |evt| draft.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            send.call(());
                        }
                    },
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: pending || offline,
                    onclick: move |_| send.call(()),
                    "Send"
                }
            }
            if let Some(text) = notice() {
                p { class: "chat-notice", "{text}" }
            }
        }
    }
}
