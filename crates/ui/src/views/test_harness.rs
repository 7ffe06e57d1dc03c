use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use ainstien_core::model::{
    AnalysisResult, AnswerMap, OptionId, Question, QuestionId, QuestionOption, TraitInsight,
};
use services::{AinstienApi, ApiError};

use crate::context::{UiApp, build_app_context};
use crate::views::{ChatView, FaqView, HomeView, TestView};

/// Canned backend behavior for a harness run.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ApiScript {
    Healthy,
    Offline,
    Failing,
}

pub struct ScriptedApi {
    script: ApiScript,
}

#[async_trait]
impl AinstienApi for ScriptedApi {
    async fn fetch_questions(&self) -> Result<Vec<Question>, ApiError> {
        match self.script {
            ApiScript::Healthy => Ok(vec![build_question("q1"), build_question("q2")]),
            ApiScript::Offline => Err(ApiError::Offline),
            ApiScript::Failing => Err(ApiError::Server("question generation failed".into())),
        }
    }

    async fn request_analysis(&self, _answers: &AnswerMap) -> Result<AnalysisResult, ApiError> {
        match self.script {
            ApiScript::Healthy => Ok(build_analysis()),
            ApiScript::Offline => Err(ApiError::Offline),
            ApiScript::Failing => Err(ApiError::Server("analysis failed".into())),
        }
    }

    async fn send_chat(&self, _message: &str) -> Result<String, ApiError> {
        match self.script {
            ApiScript::Healthy => Ok("hi there".to_string()),
            ApiScript::Offline => Err(ApiError::Offline),
            ApiScript::Failing => Err(ApiError::Server("chat failed".into())),
        }
    }
}

pub fn build_question(id: &str) -> Question {
    Question::new(
        QuestionId::new(id),
        format!("Question text for {id}"),
        vec![
            QuestionOption::new(OptionId::new("a"), "First choice"),
            QuestionOption::new(OptionId::new("b"), "Second choice"),
        ],
    )
}

pub fn build_analysis() -> AnalysisResult {
    AnalysisResult::new(
        "Curious and careful.",
        vec![TraitInsight::new("Openness", "High", "Enjoys new ideas.")],
        "A longer narrative about the person.",
        Some("A fun philosophical note.".into()),
    )
}

struct TestApp {
    api: Arc<dyn AinstienApi>,
}

impl UiApp for TestApp {
    fn api(&self) -> Arc<dyn AinstienApi> {
        Arc::clone(&self.api)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Chat,
    Test,
    Faq,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Chat => rsx! { ChatView {} },
        ViewKind::Test => rsx! { TestView {} },
        ViewKind::Faq => rsx! { FaqView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Let spawned tasks (API calls in stubs resolve immediately) run, then
    /// fold their signal writes back into the DOM.
    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, script: ApiScript) -> ViewHarness {
    let app = Arc::new(TestApp {
        api: Arc::new(ScriptedApi { script }),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom }
}
