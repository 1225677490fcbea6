//! Console command parsing.

/// One line of user input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    /// Prompt for a document path and load it.
    Upload,
    /// Anything else is a message for the assistant.
    Message(String),
}

impl Command {
    /// Classify a line. Command words are matched case-insensitively after
    /// trimming; messages keep their original casing.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "exit" => Command::Exit,
            "upload" => Command::Upload,
            _ => Command::Message(line.to_string()),
        }
    }
}

/// Whether an answer to the summary prompt is a yes.
pub fn wants_summary(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}
