//! Slash-command detection.

/// A `/name args...` line split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command<'a> {
    pub name: &'a str,
    /// At most two entries: the action, then all remaining text verbatim.
    pub args: Vec<&'a str>,
}

/// Recognize a slash command.
///
/// The text after `/` is split on whitespace into at most three parts; the
/// third keeps everything after the second word, inner spacing included.
/// Returns `None` for ordinary text and for a bare `/`.
#[must_use]
pub fn detect_command(input: &str) -> Option<Command<'_>> {
    let rest = input.strip_prefix('/')?;
    let mut parts = split_at_most(rest, 3).into_iter();
    let name = parts.next()?;
    Some(Command {
        name,
        args: parts.collect(),
    })
}

fn split_at_most(text: &str, max: usize) -> Vec<&str> {
    let mut parts = Vec::with_capacity(max);
    let mut rest = text.trim_start();

    while !rest.is_empty() {
        if parts.len() + 1 == max {
            parts.push(rest);
            break;
        }
        match rest.find(char::is_whitespace) {
            Some(end) => {
                parts.push(&rest[..end]);
                rest = rest[end..].trim_start();
            }
            None => {
                parts.push(rest);
                break;
            }
        }
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn task_add_keeps_description_verbatim() {
        let cmd = detect_command("/task add Buy milk  priority:high category:personal").unwrap();
        assert_eq!(cmd.name, "task");
        assert_eq!(
            cmd.args,
            vec!["add", "Buy milk  priority:high category:personal"]
        );
    }

    #[rstest]
    #[case("/task", "task", &[])]
    #[case("/task list", "task", &["list"])]
    #[case("/task   done   task_1a2b3c4d", "task", &["done", "task_1a2b3c4d"])]
    #[case("/help", "help", &[])]
    fn splits_into_name_and_args(
        #[case] input: &str,
        #[case] name: &str,
        #[case] args: &[&str],
    ) {
        let cmd = detect_command(input).unwrap();
        assert_eq!(cmd.name, name);
        assert_eq!(cmd.args, args);
    }

    #[rstest]
    #[case("hello there")]
    #[case("")]
    #[case("/")]
    #[case("/   ")]
    #[case(" /task list")]
    fn not_a_command(#[case] input: &str) {
        assert_eq!(detect_command(input), None);
    }
}
