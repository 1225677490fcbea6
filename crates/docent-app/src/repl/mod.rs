//! Interactive console loop.
//!
//! Reads one line at a time and fully handles it (including any remote
//! completion) before reading the next.

mod command;

use colored::Colorize;
use docent_ai::{CompletionGateway, Conversation};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, error};

pub use command::{wants_summary, Command};

const PATH_PROMPT: &str = "Enter the file path of the document: ";
const SUMMARY_PROMPT: &str = "Would you like a summary of the document? (yes/no): ";

pub struct Repl {
    editor: DefaultEditor,
    conversation: Conversation,
    gateway: CompletionGateway,
}

impl Repl {
    pub fn new(
        conversation: Conversation,
        gateway: CompletionGateway,
    ) -> Result<Self, ReadlineError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            conversation,
            gateway,
        })
    }

    /// Run until `exit`, Ctrl-C, or end of input.
    pub async fn run(&mut self) {
        print_banner();

        loop {
            let prompt = format!("{}", "You: ".blue());
            let Some(line) = self.read_line(&prompt) else {
                say("Goodbye!");
                break;
            };
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            let _ = self.editor.add_history_entry(input);

            match Command::parse(input) {
                Command::Exit => {
                    say("Goodbye!");
                    break;
                }
                Command::Upload => self.upload().await,
                Command::Message(text) => {
                    let reply = self
                        .conversation
                        .handle_user_message(&self.gateway, text)
                        .await;
                    say(reply.text());
                }
            }
        }
    }

    async fn upload(&mut self) {
        let Some(path) = self.read_line(PATH_PROMPT) else {
            return;
        };

        let loaded = match self.conversation.handle_document_command(path.trim()) {
            Ok(loaded) => loaded,
            Err(e) => {
                say(&e.to_string());
                return;
            }
        };
        debug!(path = %loaded.path.display(), chars = loaded.chars, "upload complete");
        say("Document uploaded and processed successfully!");

        let answer = self.read_line(SUMMARY_PROMPT).unwrap_or_default();
        if !wants_summary(&answer) {
            say("Okay, you can now ask questions about the document.");
            return;
        }

        say("Generating summary...");
        if let Some(summary) = self.conversation.summarize_document(&self.gateway).await {
            say(&format!("Summary:\n{}", summary.text()));
        }
    }

    /// Read one line; `None` on Ctrl-C, end of input, or a terminal error.
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        let editor = &mut self.editor;
        match tokio::task::block_in_place(|| editor.readline(prompt)) {
            Ok(line) => Some(line),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => None,
            Err(e) => {
                error!("readline failed: {e}");
                None
            }
        }
    }
}

fn print_banner() {
    println!("{}", "Welcome to Docent!".green());
    println!(
        "You can upload a document (PDF, DOCX, or TXT) and ask questions about it, or just ask regular questions."
    );
    println!("Commands: \n - 'upload': Upload a document.\n - 'exit': Quit.\n");
}

fn say(text: &str) {
    println!("{}", format!("Docent: {text}").green());
}
