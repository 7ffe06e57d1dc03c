mod analysis_vm;

pub use analysis_vm::{TraitCardVm, map_trait_cards, score_badge_class};
