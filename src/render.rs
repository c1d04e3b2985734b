//! Display sinks for rendered cart lines

use console::style;

/// Something that accepts display lines, one per call.
pub trait RenderSink {
    fn append_line(&mut self, line: &str);
}

impl RenderSink for Vec<String> {
    fn append_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Prints each line to stdout as a list item
#[derive(Debug, Default)]
pub struct TerminalSink {
    written: usize,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines printed so far
    pub fn written(&self) -> usize {
        self.written
    }
}

impl RenderSink for TerminalSink {
    fn append_line(&mut self, line: &str) {
        println!("  {} {}", style("•").cyan(), line);
        self.written += 1;
    }
}
