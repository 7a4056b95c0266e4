/// How a line of a frame is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Plain,
    /// Full-width status bar
    Header,
    /// Highlighted, full-width row
    Selected,
    Muted,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub tone: Tone,
}

/// One rendering of a model: the lines to show, top to bottom.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    lines: Vec<Line>,
}

impl Frame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tone: Tone, text: impl Into<String>) {
        self.lines.push(Line {
            text: text.into(),
            tone,
        });
    }

    pub fn plain(&mut self, text: impl Into<String>) {
        self.push(Tone::Plain, text);
    }

    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The frame's text without styling, one line per row.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
