use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{ChatView, FaqView, HomeView, TestView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/chat", ChatView)] Chat {},
        #[route("/test", TestView)] Test {},
        #[route("/faq", FaqView)] Faq {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Navbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            h1 { class: "navbar-brand", "The Ainstien" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Chat {}, "Chatbot" } }
                li { Link { to: Route::Test {}, "Personality Test" } }
                li { Link { to: Route::Faq {}, "FAQ" } }
            }
        }
    }
}
