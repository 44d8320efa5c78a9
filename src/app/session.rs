use crate::app::output::{self, OutputFormat};
use crate::config::knowledge::KnowledgeBase;
use crate::utils::error::Result;
use std::io::{BufRead, Write};
use std::time::Duration;

const EXIT_COMMANDS: &[&str] = &["exit", "quit"];

/// Line-oriented chat: one query per line, one reply per query.
pub struct ChatSession<'a> {
    knowledge: &'a KnowledgeBase,
    format: OutputFormat,
    reply_delay: Duration,
}

impl<'a> ChatSession<'a> {
    pub fn new(knowledge: &'a KnowledgeBase, format: OutputFormat) -> Self {
        Self {
            knowledge,
            format,
            reply_delay: Duration::ZERO,
        }
    }

    pub fn with_reply_delay(mut self, reply_delay: Duration) -> Self {
        self.reply_delay = reply_delay;
        self
    }

    /// Runs until end of input or an exit command. Returns the number of replies sent.
    pub fn run<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> Result<usize> {
        let mut replies = 0;
        self.prompt(out)?;

        for line in input.lines() {
            let line = line?;
            let message = line.trim();

            if message.is_empty() {
                self.prompt(out)?;
                continue;
            }
            if EXIT_COMMANDS.contains(&message.to_lowercase().as_str()) {
                tracing::debug!("chat session ended by user");
                break;
            }

            if !self.reply_delay.is_zero() {
                std::thread::sleep(self.reply_delay);
            }

            let payload = self.knowledge.respond(message);
            output::write_payload(out, &payload, self.format)?;
            out.flush()?;
            replies += 1;
            self.prompt(out)?;
        }

        tracing::info!("💬 Chat session finished after {} replies", replies);
        Ok(replies)
    }

    fn prompt<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.format == OutputFormat::Text {
            write!(out, "you> ")?;
            out.flush()?;
        }
        Ok(())
    }
}
