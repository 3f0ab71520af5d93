//! Line-oriented output formatter.
//!
//! The generator describes *what* to write; the formatter owns newline and
//! indentation bookkeeping. State is an ordered list of committed lines plus
//! at most one open line at the cursor. The indent prefix is stamped once,
//! when a line first materializes, so a caller can append a trailing token to
//! the same physical line without re-applying it.

use crate::indent::Indent;

#[derive(Debug, Clone)]
pub struct Formatter {
    lines: Vec<String>,
    /// Line at the cursor; `None` until materialized by a write.
    current: Option<String>,
    depth: usize,
    indent: Indent,
}

impl Formatter {
    pub fn new(indent: Indent) -> Self {
        Self {
            lines: Vec::new(),
            current: None,
            depth: 0,
            indent,
        }
    }

    /// Append to the line at the cursor, materializing it with the indent
    /// prefix if it does not exist yet.
    pub fn write(&mut self, text: &str) -> &mut Self {
        let prefix = self.prefix();
        self.current.get_or_insert(prefix).push_str(text);
        self
    }

    /// Put `text` on its own line. An already materialized cursor line is
    /// committed first; a fresh cursor line is written in place. An empty
    /// `text` materializes a truly empty line, so blank separators never
    /// carry trailing whitespace.
    pub fn write_line(&mut self, text: &str) -> &mut Self {
        if let Some(line) = self.current.take() {
            self.lines.push(line);
        }
        self.current = Some(if text.is_empty() {
            String::new()
        } else {
            let mut line = self.prefix();
            line.push_str(text);
            line
        });
        self
    }

    /// Advance to a fresh line; no-op when the cursor line is still
    /// unmaterialized, so repeated breaks never stack.
    pub fn line_break(&mut self) -> &mut Self {
        if let Some(line) = self.current.take() {
            self.lines.push(line);
        }
        self
    }

    /// Invoke `f` per item, writing `separator` before every item but the
    /// first. Used for same-line separated constructs.
    pub fn join<T>(
        &mut self,
        items: impl IntoIterator<Item = T>,
        separator: &str,
        mut f: impl FnMut(&mut Self, T),
    ) -> &mut Self {
        for (index, item) in items.into_iter().enumerate() {
            if index > 0 {
                self.write(separator);
            }
            f(self, item);
        }
        self
    }

    /// Invoke `f` per item, advancing to a fresh line between consecutive
    /// items. Used for one-item-per-line constructs.
    pub fn join_lines<T>(
        &mut self,
        items: impl IntoIterator<Item = T>,
        mut f: impl FnMut(&mut Self, T),
    ) -> &mut Self {
        for (index, item) in items.into_iter().enumerate() {
            if index > 0 {
                self.line_break();
            }
            f(self, item);
        }
        self
    }

    pub fn start_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    /// Saturates at depth zero.
    pub fn end_indent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Join all materialized lines with newlines. A cursor line advanced into
    /// but never written stays absent from the output.
    pub fn finish(self) -> String {
        let mut lines = self.lines;
        if let Some(line) = self.current {
            lines.push(line);
        }
        lines.join("\n")
    }

    fn prefix(&self) -> String {
        self.indent.as_str().repeat(self.depth)
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}
