//! Prompt construction.
//!
//! Renders the fixed instruction template that asks the model for one shell
//! command per line. The user request is interpolated verbatim.

/// Opening role framing.
const ROLE: &str = "You are a command-line expert tasked with providing simple and effective CLI commands based on user requests.";

/// Guidelines given to the model, one bullet each.
const GUIDELINES: &[&str] = &[
    "Begin by carefully interpreting the user's request to grasp the main objective.",
    "Deconstruct the task into straightforward steps that can be easily executed.",
    "For each step, craft a corresponding CLI command that directly addresses that part of the task.",
    "Present your commands in a clean format, with each command on a new line.",
    "Ensure the sequence of commands is logical and follows the workflow needed to complete the task efficiently.",
    "Keep your commands simple; avoid using complex constructs or loops.",
];

/// Worked example shown inside a code fence.
const EXAMPLE: &[&str] = &[
    "cp source_dir/*.txt destination_dir/",
    "grep -l \"example\" destination_dir/*.txt > files_with_example.txt",
    "grep -L \"example\" destination_dir/*.txt | xargs rm -f",
];

/// Build the prompt for a natural-language request.
pub fn build_prompt(request: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(ROLE);
    prompt.push_str("\n\nUser Request:\n\"");
    prompt.push_str(request);
    prompt.push_str("\"\n\nGuidelines:\n");
    for line in GUIDELINES {
        prompt.push_str("- ");
        prompt.push_str(line);
        prompt.push('\n');
    }

    prompt.push_str("\nExample Output:\n```\n");
    for line in EXAMPLE {
        prompt.push_str(line);
        prompt.push('\n');
    }
    prompt.push_str("```\n");

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_request_verbatim() {
        let request = "copy all \"*.log\" files to /tmp & count them";
        let prompt = build_prompt(request);
        assert!(prompt.contains(request));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_prompt("list files"), build_prompt("list files"));
    }

    #[test]
    fn test_prompt_has_guidelines_and_example() {
        let prompt = build_prompt("list files");

        assert!(prompt.starts_with("You are a command-line expert"));
        assert!(prompt.contains("each command on a new line"));
        assert!(prompt.contains("avoid using complex constructs or loops"));
        assert!(prompt.contains("```\ncp source_dir/*.txt destination_dir/\n"));
    }

    #[test]
    fn test_prompt_does_not_escape_request() {
        let prompt = build_prompt("line one\nline \"two\"");
        assert!(prompt.contains("\"line one\nline \"two\"\""));
    }
}
