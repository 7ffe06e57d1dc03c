use dioxus::prelude::*;

use ainstien_core::model::{AnalysisResult, TraitInsight};

use super::test_harness::{ApiScript, ViewKind, setup_view_harness};
use crate::views::AnalysisDisplay;

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_landing_copy() {
    let mut harness = setup_view_harness(ViewKind::Home, ApiScript::Healthy);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Welcome to The Ainstien"),
        "missing landing title in {html}"
    );
    assert!(html.contains("About the App"), "missing about section in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn faq_view_smoke_renders_entries() {
    let mut harness = setup_view_harness(ViewKind::Faq, ApiScript::Healthy);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Frequently Asked Questions"),
        "missing faq title in {html}"
    );
    assert!(
        html.contains("What is The Ainstien?"),
        "missing faq entry in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn chat_view_smoke_renders_composer() {
    let mut harness = setup_view_harness(ViewKind::Chat, ApiScript::Healthy);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Ainstien Chatbot"), "missing chat title in {html}");
    assert!(html.contains("Send"), "missing send button in {html}");
    assert!(
        html.contains("Say hello to start the conversation."),
        "missing empty-transcript hint in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn test_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Test, ApiScript::Healthy);
    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(
        html.contains("Question 1 of 2"),
        "missing progress label in {html}"
    );
    assert!(
        html.contains("Question text for q1"),
        "missing question text in {html}"
    );
    assert!(html.contains("First choice"), "missing option label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn test_view_smoke_offline_backend_shows_offline_status() {
    let mut harness = setup_view_harness(ViewKind::Test, ApiScript::Offline);
    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(
        html.contains("currently offline"),
        "missing offline status in {html}"
    );
    assert!(html.contains("Try Again"), "missing retry button in {html}");
    assert!(
        !html.contains("Question 1 of"),
        "no questions should render while offline, got {html}"
    );
}

#[component]
fn AnalysisHost(note: Option<String>) -> Element {
    let analysis = AnalysisResult::new(
        "Curious and careful.",
        vec![
            TraitInsight::new("Openness", "High", "Enjoys new ideas."),
            TraitInsight::new("Social Style", "Leans towards introversion", "Prefers quiet."),
        ],
        "A longer narrative about the person.",
        note,
    );
    rsx! {
        AnalysisDisplay { analysis, on_retake: move |()| {} }
    }
}

fn render_analysis(note: Option<&str>) -> String {
    let mut dom = VirtualDom::new_with_props(
        AnalysisHost,
        AnalysisHostProps {
            note: note.map(str::to_string),
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn analysis_display_smoke_renders_traits_in_order_with_note() {
    let html = render_analysis(Some("A fun philosophical note."));
    let openness = html.find("Openness").expect("first trait card");
    let social = html.find("Social Style").expect("second trait card");
    assert!(openness < social, "trait cards out of order in {html}");
    assert!(
        html.contains("Philosophical Note"),
        "missing note heading in {html}"
    );
    assert!(
        html.contains("A fun philosophical note."),
        "missing note text in {html}"
    );
    assert!(html.contains("Retake Test"), "missing retake button in {html}");
}

#[test]
fn analysis_display_smoke_skips_absent_or_blank_note() {
    let html = render_analysis(None);
    assert!(
        !html.contains("Philosophical Note"),
        "note block rendered without a note in {html}"
    );

    let html = render_analysis(Some("   "));
    assert!(
        !html.contains("Philosophical Note"),
        "note block rendered for a blank note in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn test_view_smoke_failing_backend_shows_error_message() {
    let mut harness = setup_view_harness(ViewKind::Test, ApiScript::Failing);
    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(
        html.contains("question generation failed"),
        "missing error message in {html}"
    );
    assert!(html.contains("Try Again"), "missing retry button in {html}");
}
