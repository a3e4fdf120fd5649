//! Turns raw model text into a command list.
//!
//! Every line is a command candidate. Prose, numbering and blank lines are
//! kept as-is and will simply fail when executed.

/// Code fence marker stripped from model output.
pub const FENCE: &str = "```";

/// Split model output into commands, in order.
pub fn parse_commands(text: &str) -> Vec<String> {
    text.replace(FENCE, "")
        .trim()
        .split('\n')
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_lines() {
        let commands = parse_commands("ls -la\npwd\nwhoami");
        assert_eq!(commands, vec!["ls -la", "pwd", "whoami"]);
    }

    #[test]
    fn test_parse_strips_fences() {
        let text = "```\nmkdir out\ncp *.txt out/\n```\n";
        assert_eq!(parse_commands(text), vec!["mkdir out", "cp *.txt out/"]);
    }

    #[test]
    fn test_parse_keeps_language_tag_after_fence() {
        // Only the fence marker is removed, the tag stays on its own line.
        let text = "```bash\necho hi\n```";
        assert_eq!(parse_commands(text), vec!["bash", "echo hi"]);
    }

    #[test]
    fn test_parse_keeps_interior_blank_lines() {
        let commands = parse_commands("echo a\n\necho b");
        assert_eq!(commands, vec!["echo a", "", "echo b"]);
    }

    #[test]
    fn test_parse_does_not_filter_prose() {
        let commands = parse_commands("Here are the commands:\n1. ls");
        assert_eq!(commands, vec!["Here are the commands:", "1. ls"]);
    }

    #[test]
    fn test_parse_empty_text_yields_single_empty_command() {
        assert_eq!(parse_commands(""), vec![String::new()]);
        assert_eq!(parse_commands("```\n```"), vec![String::new()]);
    }

    #[test]
    fn test_parse_preserves_order_and_count() {
        let lines: Vec<String> = (0..25).map(|i| format!("echo {}", i)).collect();
        let text = format!("```\n{}\n```", lines.join("\n"));
        assert_eq!(parse_commands(&text), lines);
    }
}
