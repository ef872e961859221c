//! `key:value` decorations inside a task description.

use std::collections::BTreeMap;

use mz_store::NewTask;

/// An optional task field settable from the description text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Decoration {
    Priority,
    Category,
    Due,
    Reason,
}

impl Decoration {
    const KEYS: [(&'static str, Self); 4] = [
        ("priority", Self::Priority),
        ("category", Self::Category),
        ("due", Self::Due),
        ("reason", Self::Reason),
    ];

    fn from_key(key: &str) -> Option<Self> {
        Self::KEYS
            .iter()
            .find_map(|(name, decoration)| (*name == key).then_some(*decoration))
    }
}

/// A description with its recognized decorations pulled out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decorated {
    /// Remaining words joined by single spaces.
    pub content: String,
    pub fields: BTreeMap<Decoration, String>,
}

impl Decorated {
    pub fn into_new_task(mut self) -> NewTask {
        NewTask {
            priority: self.fields.remove(&Decoration::Priority),
            category: self.fields.remove(&Decoration::Category),
            due_date: self.fields.remove(&Decoration::Due),
            reasoning: self.fields.remove(&Decoration::Reason),
            content: self.content,
        }
    }
}

/// Split `text` into words and pull out `priority:`, `category:`, `due:` and
/// `reason:` tokens. Other `a:b` words (URLs, times) stay in the content. A
/// repeated key keeps its last value.
#[must_use]
pub fn parse_decorations(text: &str) -> Decorated {
    let mut words = Vec::new();
    let mut fields = BTreeMap::new();

    for token in text.split_whitespace() {
        let recognized = token
            .split_once(':')
            .and_then(|(key, value)| Decoration::from_key(key).map(|d| (d, value)));
        match recognized {
            Some((decoration, value)) => {
                fields.insert(decoration, value.to_string());
            }
            None => words.push(token),
        }
    }

    Decorated {
        content: words.join(" "),
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_known_keys_and_rejoins_content() {
        let decorated = parse_decorations("Buy   milk priority:high category:personal");
        assert_eq!(decorated.content, "Buy milk");
        assert_eq!(
            decorated.into_new_task(),
            NewTask::new("Buy milk").priority("high").category("personal")
        );
    }

    #[test]
    fn all_four_keys_map_to_task_fields() {
        let task = parse_decorations(
            "Finish CS50P Week 4 priority:high category:learning due:2025-12-15 reason:blocking",
        )
        .into_new_task();
        assert_eq!(
            task,
            NewTask::new("Finish CS50P Week 4")
                .priority("high")
                .category("learning")
                .due_date("2025-12-15")
                .reasoning("blocking")
        );
    }

    #[test]
    fn unknown_keys_stay_in_content() {
        let decorated = parse_decorations("Read https://example.com at 10:30 owner:me");
        assert_eq!(decorated.content, "Read https://example.com at 10:30 owner:me");
        assert!(decorated.fields.is_empty());
    }

    #[test]
    fn repeated_key_keeps_last_value() {
        let decorated = parse_decorations("Stretch priority:low priority:medium");
        assert_eq!(
            decorated.fields.get(&Decoration::Priority).map(String::as_str),
            Some("medium")
        );
    }

    #[test]
    fn only_decorations_leaves_empty_content() {
        let decorated = parse_decorations("priority:high due:2025-01-01");
        assert!(decorated.content.is_empty());
        assert_eq!(decorated.fields.len(), 2);
    }

    #[test]
    fn value_keeps_later_colons() {
        let decorated = parse_decorations("Call reason:time:sensitive");
        assert_eq!(
            decorated.fields.get(&Decoration::Reason).map(String::as_str),
            Some("time:sensitive")
        );
    }
}
