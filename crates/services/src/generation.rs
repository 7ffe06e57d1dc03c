/// Monotonic tag pairing a network request with the session generation that
/// issued it.
///
/// Every `begin_*` operation bumps its session's generation counter and hands
/// the caller a tag; the matching `apply_*` discards responses whose tag no
/// longer matches, so a superseded in-flight request cannot overwrite the
/// state of a newer session ("last generation wins").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTag(u64);

impl FetchTag {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    pub(crate) fn matches(self, generation: u64) -> bool {
        self.0 == generation
    }
}
