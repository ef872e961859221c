//! Task registry and transcript aggregate.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use mz_core::entities::{Message, Task};
use mz_core::errors::ValidationFailure;
use mz_core::ids::{PREFIX_TASK, generate_id};

use crate::NewTask;
use crate::validate::validate;

/// The persisted unit: every task plus the conversation transcript.
///
/// Task order is insertion order. The transcript only grows.
/// Single-owner by construction; callers that share a `Store` across threads
/// must wrap each list-then-mutate sequence in one lock.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Store {
    conversations: Vec<Message>,
    tasks: Vec<Task>,
}

impl Store {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `input` and append a new open task.
    ///
    /// # Errors
    ///
    /// Returns every validation problem found; the store is unchanged.
    pub fn create(&mut self, input: NewTask) -> Result<Task, ValidationFailure> {
        let valid = validate(&input)?;

        let task = Task {
            id: self.fresh_id(),
            content: valid.content,
            priority: valid.priority,
            category: valid.category,
            due_date: valid.due_date,
            priority_reasoning: valid.reasoning,
            completed: false,
            created_at: Utc::now(),
            completed_at: None,
        };

        debug!(id = %task.id, "task created");
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Snapshot of tasks in insertion order, optionally only the open ones.
    #[must_use]
    pub fn list(&self, only_incomplete: bool) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| !only_incomplete || task.is_active())
            .cloned()
            .collect()
    }

    /// Mark the task with exactly this id completed.
    ///
    /// Returns `false` and touches nothing when no task matches. Completing an
    /// already-completed task refreshes `completed_at` and returns `true`.
    pub fn complete(&mut self, id: &str) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!(id, "complete: no such task");
            return false;
        };
        task.mark_completed(Utc::now());
        debug!(id, "task completed");
        true
    }

    /// Remove the task with exactly this id.
    pub fn delete(&mut self, id: &str) -> bool {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            debug!(id, "delete: no such task");
            return false;
        };
        self.tasks.remove(index);
        debug!(id, "task deleted");
        true
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Append a user turn to the transcript.
    pub fn record_user(&mut self, content: impl Into<String>) {
        self.conversations.push(Message::user(content));
    }

    /// Append an assistant turn to the transcript.
    pub fn record_assistant(&mut self, content: impl Into<String>) {
        self.conversations.push(Message::assistant(content));
    }

    /// The whole transcript, oldest first.
    #[must_use]
    pub fn transcript(&self) -> &[Message] {
        &self.conversations
    }

    /// Restore task invariants on a freshly decoded store.
    ///
    /// Drops tasks whose content is blank and reconciles `completed_at` with
    /// `completed`. Returns one line per fix.
    pub(crate) fn enforce_invariants(&mut self, now: DateTime<Utc>) -> Vec<String> {
        let mut fixes = Vec::new();

        self.tasks.retain(|task| {
            let keep = !task.content.trim().is_empty();
            if !keep {
                fixes.push(format!("dropped task {} with empty content", task.id));
            }
            keep
        });

        for task in &mut self.tasks {
            let had_stamp = task.completed_at.is_some();
            if task.reconcile_completion(now) {
                fixes.push(if had_stamp {
                    format!("cleared completed_at on open task {}", task.id)
                } else {
                    format!("stamped completed_at on completed task {}", task.id)
                });
            }
        }

        fixes
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = generate_id(PREFIX_TASK);
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
