//! Line-oriented I/O for a game session.
//!
//! The session never touches stdin/stdout directly; it talks to a [`Console`].
//! [`StdConsole`] is the interactive terminal, [`ScriptedConsole`] replays a
//! fixed list of input lines and records everything printed.

use log::warn;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::logutil::escape_log;

pub trait Console {
    /// Print one line of output.
    fn say(&mut self, line: &str);

    /// Show `prompt` and read one line of input without its line terminator.
    ///
    /// `None` means the input was closed or interrupted.
    fn prompt(&mut self, prompt: &str) -> Option<String>;
}

/// Console bound to the process stdin/stdout.
pub struct StdConsole {
    echo_input: bool,
}

impl StdConsole {
    pub fn new() -> Self {
        // Piped input is not echoed by a terminal; echo it so transcripts stay readable.
        StdConsole {
            echo_input: !atty::is(atty::Stream::Stdin),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn say(&mut self, line: &str) {
        println!("{}", line);
    }

    fn prompt(&mut self, prompt: &str) -> Option<String> {
        let mut stdout = io::stdout();
        let _ = write!(stdout, "{}", prompt);
        let _ = stdout.flush();

        let mut buf = Vec::new();
        match io::stdin().lock().read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                let line = decode_line(&buf);
                if self.echo_input {
                    println!("{}", line);
                }
                Some(line)
            }
            Err(e) => {
                warn!("stdin read failed: {}", e);
                None
            }
        }
    }
}

/// Decode a raw input line, replacing invalid UTF-8 and dropping the terminator.
fn decode_line(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .trim_end_matches(['\r', '\n'])
        .to_string()
}

/// Console fed from a fixed list of lines; records prompts and output.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedConsole {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Build from a script body, one command per line.
    pub fn from_script(body: &str) -> Self {
        Self::new(body.lines())
    }

    /// Queue more input lines behind the pending ones.
    pub fn push_input(&mut self, line: &str) {
        self.input.push_back(line.to_string());
    }

    /// Everything printed so far, prompts included (as `"{prompt}{input}"`).
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Drain and return the recorded output.
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }

    /// Whole transcript joined by newlines.
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    /// True if any recorded line contains `needle`.
    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn prompt(&mut self, prompt: &str) -> Option<String> {
        let line = self.input.pop_front()?;
        log::trace!("scripted input: {}", escape_log(&line));
        self.output.push(format!("{}{}", prompt, line));
        Some(line)
    }
}
