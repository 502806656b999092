//! The sink the engine writes styled lines to.

/// Visual style of an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// Narrative text.
    Text,
    /// A heading, such as a location name.
    Title,
    /// An entry in a list of exits, actions or items.
    Listing,
    /// Something noteworthy happened: an item, a win, a revelation.
    Notice,
    /// Something went wrong.
    Error,
    /// Help, hints and other out-of-story text.
    System,
}

/// A single line of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    /// Visual style of this line.
    pub style: OutputStyle,
    /// The text content.
    pub text: String,
}

/// Where the engine writes what happens.
pub trait Output {
    /// Write one styled line.
    fn emit(&mut self, style: OutputStyle, text: &str);

    /// Called before the session blocks on reading a command.
    fn prompt(&mut self) {}
}

/// An [`Output`] that keeps every line in memory.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<OutputLine>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines written so far.
    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    /// Whether any line contains the text.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.text.contains(needle))
    }

    /// Number of lines containing the text.
    pub fn count(&self, needle: &str) -> usize {
        self.lines.iter().filter(|l| l.text.contains(needle)).count()
    }

    /// Lines with the given style.
    pub fn styled(&self, style: OutputStyle) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|l| l.style == style)
            .map(|l| l.text.as_str())
            .collect()
    }

    /// Take the lines out, leaving the transcript empty.
    pub fn drain(&mut self) -> Vec<OutputLine> {
        std::mem::take(&mut self.lines)
    }

    /// Forget everything written so far.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Output for Transcript {
    fn emit(&mut self, style: OutputStyle, text: &str) {
        self.lines.push(OutputLine {
            style,
            text: text.to_string(),
        });
    }
}
