//! Raw task input.

/// Unvalidated task fields, exactly as the user supplied them.
///
/// Optional fields hold the raw text; [`crate::Store::create`] parses and
/// validates them. A blank optional value counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub content: String,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub due_date: Option<String>,
    pub reasoning: Option<String>,
}

impl NewTask {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    #[must_use]
    pub fn reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = Some(reasoning.into());
        self
    }
}
