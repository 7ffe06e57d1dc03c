mod analysis;
mod chat;
mod faq;
mod home;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use analysis::AnalysisDisplay;
pub use chat::ChatView;
pub use faq::FaqView;
pub use home::HomeView;
pub use test::TestView;
