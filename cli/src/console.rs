//! Whitespace-token console over any reader/writer pair
//!
//! Tokens may be spread over lines or packed on one line; prompts are only
//! written when enabled so piped input produces clean output.

use anyhow::{anyhow, bail, Context, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    reader: R,
    out: W,
    pending: VecDeque<String>,
    prompts: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// `prompts` controls `prompt` and `note`; `say` always writes.
    pub fn new(reader: R, out: W, prompts: bool) -> Self {
        Console {
            reader,
            out,
            pending: VecDeque::new(),
            prompts,
        }
    }

    /// Write prompt text (no newline) when prompting is enabled.
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        if self.prompts {
            write!(self.out, "{}", text)?;
            self.out.flush()?;
        }
        Ok(())
    }

    /// Write an informational line when prompting is enabled.
    pub fn note(&mut self, text: &str) -> Result<()> {
        if self.prompts {
            writeln!(self.out, "{}", text)?;
        }
        Ok(())
    }

    /// Write a line unconditionally.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    fn expect_token(&mut self, what: &str) -> Result<String> {
        self.next_token()?
            .ok_or_else(|| anyhow!("unexpected end of input while reading {}", what))
    }

    pub fn read_i64(&mut self, what: &str) -> Result<i64> {
        let token = self.expect_token(what)?;
        token
            .parse()
            .with_context(|| format!("expected an integer for {}, got '{}'", what, token))
    }

    pub fn read_i32(&mut self, what: &str) -> Result<i32> {
        let token = self.expect_token(what)?;
        token
            .parse()
            .with_context(|| format!("expected an integer for {}, got '{}'", what, token))
    }

    pub fn read_u32(&mut self, what: &str) -> Result<u32> {
        let token = self.expect_token(what)?;
        token
            .parse()
            .with_context(|| format!("expected a non-negative integer for {}, got '{}'", what, token))
    }

    /// `1`/`0` (or `true`/`false`)
    pub fn read_flag(&mut self, what: &str) -> Result<bool> {
        let token = self.expect_token(what)?;
        match token.as_str() {
            "1" | "true" => Ok(true),
            "0" | "false" => Ok(false),
            _ => bail!("expected 1 or 0 for {}, got '{}'", what, token),
        }
    }

    /// Anything starting with `y`/`Y` is yes. End of input counts as no.
    pub fn read_yes_no(&mut self) -> Result<bool> {
        Ok(self
            .next_token()?
            .is_some_and(|t| t.starts_with(['y', 'Y'])))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }
}
