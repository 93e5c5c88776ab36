use async_trait::async_trait;
use flagrt::Hook;

/// Hook with a label so tests can check ordering.
#[derive(Debug, Clone)]
pub struct LabeledHook {
    pub label: &'static str,
}

impl LabeledHook {
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }
}

#[async_trait]
impl Hook for LabeledHook {}
