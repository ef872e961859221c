//! `/task` actions: add, list, done, delete.

use mz_core::entities::Task;
use mz_store::Store;
use tracing::info;

use super::decorations::parse_decorations;

const USAGE: &str =
    "Task commands: /task add <description>, /task list, /task done <id>, /task delete <id>";
const ADD_USAGE: &str = "Usage: /task add <description> [priority:high|medium|low] \
[category:learning|job_search|mz_development|personal] [due:YYYY-MM-DD] [reason:<word>]";

/// Run one `/task` action and render the reply shown to the user.
///
/// `args` is the action followed by its remaining text, as produced by
/// [`super::parse::detect_command`].
pub fn route_task_command(args: &[&str], store: &mut Store) -> String {
    let Some((action, rest)) = args.split_first() else {
        return USAGE.to_string();
    };
    let argument = rest.first().map(|text| text.trim()).filter(|text| !text.is_empty());

    match *action {
        "add" => argument.map_or_else(|| ADD_USAGE.to_string(), |text| add(text, store)),
        "list" => list(store),
        "done" => argument.map_or_else(
            || String::from("Usage: /task done <id>"),
            |id| done(first_word(id), store),
        ),
        "delete" => argument.map_or_else(
            || String::from("Usage: /task delete <id>"),
            |id| delete(first_word(id), store),
        ),
        other => format!("Unknown task action: {other}\nAvailable: add, list, done, delete"),
    }
}

fn first_word(text: &str) -> &str {
    text.split_whitespace().next().unwrap_or(text)
}

fn add(text: &str, store: &mut Store) -> String {
    let decorated = parse_decorations(text);
    if decorated.content.is_empty() {
        return String::from("Error: Task description cannot be empty");
    }

    match store.create(decorated.into_new_task()) {
        Ok(task) => {
            info!(id = %task.id, "task added");
            added_message(&task)
        }
        Err(failure) => {
            let mut lines = vec![String::from("✗ Failed to add task:")];
            lines.extend(failure.reasons.iter().map(|reason| format!("  - {reason}")));
            lines.join("\n")
        }
    }
}

fn added_message(task: &Task) -> String {
    let mut lines = vec![
        format!("✓ Task added: {}", task.content),
        format!("  ID: {}", task.id),
    ];
    if let Some(priority) = task.priority {
        lines.push(format!("  Priority: {}", priority.as_str().to_ascii_uppercase()));
    }
    if let Some(category) = task.category {
        lines.push(format!("  Category: {category}"));
    }
    if let Some(due) = task.due_date {
        lines.push(format!("  Due: {due}"));
    }
    if let Some(reasoning) = &task.priority_reasoning {
        lines.push(format!("  Reasoning: {reasoning}"));
    }
    lines.join("\n")
}

fn list(store: &Store) -> String {
    let active = store.list(true);
    if active.is_empty() {
        return String::from("No active tasks! 🎉");
    }

    let blocks: Vec<String> = active.iter().map(task_block).collect();
    format!(
        "You have {} active task(s):\n\n{}",
        active.len(),
        blocks.join("\n\n")
    )
}

fn task_block(task: &Task) -> String {
    let priority = task
        .priority
        .map_or("NONE", |priority| priority.as_str())
        .to_ascii_uppercase();

    let mut lines = vec![
        format!("[{priority}] {}", task.content),
        format!("  ID: {}", task.id),
    ];
    if let Some(category) = task.category {
        lines.push(format!("  Category: {category}"));
    }
    if let Some(due) = task.due_date {
        lines.push(format!("  Due: {due}"));
    }
    if let Some(reasoning) = &task.priority_reasoning {
        lines.push(format!("  Why? {reasoning}"));
    }
    lines.join("\n")
}

fn done(id: &str, store: &mut Store) -> String {
    if store.complete(id) {
        info!(id, "task completed");
        format!("✓ Task {id} marked as complete!")
    } else {
        format!("✗ Task {id} not found.")
    }
}

fn delete(id: &str, store: &mut Store) -> String {
    if store.delete(id) {
        info!(id, "task deleted");
        format!("✓ Task {id} deleted.")
    } else {
        format!("✗ Task {id} not found.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn add_via_router(store: &mut Store, text: &str) -> String {
        route_task_command(&["add", text], store)
    }

    #[test]
    fn add_with_decorations_acknowledges_every_field() {
        let mut store = Store::new();
        let reply = add_via_router(
            &mut store,
            "Finish CS50P Week 4 priority:high category:learning due:2025-12-15 reason:blocking",
        );

        let task = &store.tasks()[0];
        assert_eq!(
            reply,
            format!(
                "✓ Task added: Finish CS50P Week 4\n  ID: {}\n  Priority: HIGH\n  Category: learning\n  Due: 2025-12-15\n  Reasoning: blocking",
                task.id
            )
        );
    }

    #[test]
    fn add_plain_description_omits_optional_lines() {
        let mut store = Store::new();
        let reply = add_via_router(&mut store, "Call mom");
        let id = &store.tasks()[0].id;
        assert_eq!(reply, format!("✓ Task added: Call mom\n  ID: {id}"));
    }

    #[test]
    fn add_with_only_decorations_is_rejected_before_the_store() {
        let mut store = Store::new();
        let reply = add_via_router(&mut store, "priority:high");
        assert_eq!(reply, "Error: Task description cannot be empty");
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn add_with_bad_fields_lists_every_reason() {
        let mut store = Store::new();
        let reply = add_via_router(&mut store, "Fix roof priority:urgent due:tomorrow");
        assert_eq!(
            reply,
            "✗ Failed to add task:\n  - Invalid priority: urgent. Must be one of: high, medium, low\n  - Invalid date format: tomorrow. Must be YYYY-MM-DD"
        );
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn add_without_text_shows_decoration_syntax() {
        let mut store = Store::new();
        let reply = route_task_command(&["add"], &mut store);
        assert!(reply.starts_with("Usage: /task add <description>"));
        assert!(reply.contains("priority:high|medium|low"));
    }

    #[test]
    fn list_renders_active_tasks_only() {
        let mut store = Store::new();
        add_via_router(&mut store, "Apply to jobs priority:medium category:job_search reason:rent");
        add_via_router(&mut store, "Stretch");
        add_via_router(&mut store, "Old chore");
        let ids: Vec<String> = store.tasks().iter().map(|t| t.id.clone()).collect();
        store.complete(&ids[2]);

        let reply = route_task_command(&["list"], &mut store);
        assert_eq!(
            reply,
            format!(
                "You have 2 active task(s):\n\n[MEDIUM] Apply to jobs\n  ID: {}\n  Category: job_search\n  Why? rent\n\n[NONE] Stretch\n  ID: {}",
                ids[0], ids[1]
            )
        );
    }

    #[test]
    fn list_when_empty() {
        let mut store = Store::new();
        assert_eq!(route_task_command(&["list"], &mut store), "No active tasks! 🎉");
    }

    #[test]
    fn done_and_delete_report_hits_and_misses() {
        let mut store = Store::new();
        add_via_router(&mut store, "Water plants");
        let id = store.tasks()[0].id.clone();

        assert_eq!(
            route_task_command(&["done", id.as_str()], &mut store),
            format!("✓ Task {id} marked as complete!")
        );
        assert_eq!(
            route_task_command(&["done", "task_00000000"], &mut store),
            "✗ Task task_00000000 not found."
        );
        assert_eq!(
            route_task_command(&["delete", id.as_str()], &mut store),
            format!("✓ Task {id} deleted.")
        );
        assert_eq!(
            route_task_command(&["delete", id.as_str()], &mut store),
            format!("✗ Task {id} not found.")
        );
    }

    #[test]
    fn done_and_delete_need_an_id() {
        let mut store = Store::new();
        assert_eq!(route_task_command(&["done"], &mut store), "Usage: /task done <id>");
        assert_eq!(route_task_command(&["delete", "  "], &mut store), "Usage: /task delete <id>");
    }

    #[test]
    fn missing_or_unknown_action_shows_usage() {
        let mut store = Store::new();
        assert_eq!(route_task_command(&[], &mut store), USAGE);
        assert_eq!(
            route_task_command(&["finish", "task_1"], &mut store),
            "Unknown task action: finish\nAvailable: add, list, done, delete"
        );
    }
}
