//! Span details panel
//!
//! Text rendition of the selected span: a header with inline metrics, then
//! one or more tabs (overview, tools, raw attributes).

mod header;
mod overview;
mod raw;
mod tools;

use std::fmt;
use std::str::FromStr;

use crate::data::types::Span;
use crate::domain::explorer::Palette;

pub use header::header_chips;

const INDENT: &str = "  ";

/// Tab of the details panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailsTab {
    #[default]
    Overview,
    Tools,
    Raw,
    /// Every tab available for the span, in order
    All,
}

impl DetailsTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Tools => "tools",
            Self::Raw => "raw",
            Self::All => "all",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Tools => "Tools",
            Self::Raw => "Attributes",
            Self::All => "All",
        }
    }
}

impl fmt::Display for DetailsTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetailsTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overview" => Ok(Self::Overview),
            "tools" => Ok(Self::Tools),
            "raw" | "attributes" => Ok(Self::Raw),
            "all" => Ok(Self::All),
            other => Err(format!(
                "Invalid tab '{}'. Valid options: overview, tools, raw, all",
                other
            )),
        }
    }
}

/// Line buffer shared by the panel sections
pub(crate) struct PanelText<'p> {
    palette: &'p Palette,
    lines: Vec<String>,
}

impl<'p> PanelText<'p> {
    fn new(palette: &'p Palette) -> Self {
        Self {
            palette,
            lines: Vec::new(),
        }
    }

    pub(crate) fn palette(&self) -> &Palette {
        self.palette
    }

    pub(crate) fn heading(&mut self, title: &str) {
        let line = self.palette.paint(self.palette.heading, title);
        self.lines.push(line);
    }

    pub(crate) fn line(&mut self, depth: usize, text: &str) {
        self.lines.push(format!("{}{}", INDENT.repeat(depth), text));
    }

    /// Multi-line text, every line indented to `depth`
    pub(crate) fn block(&mut self, depth: usize, text: &str) {
        if text.is_empty() {
            self.line(depth, "");
            return;
        }
        for line in text.lines() {
            self.line(depth, line);
        }
    }

    pub(crate) fn blank(&mut self) {
        if self.lines.last().is_some_and(|l| !l.is_empty()) {
            self.lines.push(String::new());
        }
    }

    fn finish(mut self) -> String {
        while self.lines.last().is_some_and(String::is_empty) {
            self.lines.pop();
        }
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

/// Details panel for one span
pub struct SpanDetailsPanel<'a> {
    span: &'a Span,
    palette: Palette,
}

impl<'a> SpanDetailsPanel<'a> {
    pub fn new(span: &'a Span, palette: Palette) -> Self {
        Self { span, palette }
    }

    /// The tools tab is offered only when the span declares tools
    pub fn has_tools(&self) -> bool {
        self.span
            .amp_attributes
            .as_ref()
            .is_some_and(|amp| !amp.tools().is_empty())
    }

    pub fn tabs(&self) -> Vec<DetailsTab> {
        let mut tabs = vec![DetailsTab::Overview];
        if self.has_tools() {
            tabs.push(DetailsTab::Tools);
        }
        tabs.push(DetailsTab::Raw);
        tabs
    }

    pub fn render(&self, tab: DetailsTab) -> String {
        let mut out = PanelText::new(&self.palette);
        header::write_header(&mut out, self.span);

        let tabs = match tab {
            DetailsTab::All => self.tabs(),
            single => vec![single],
        };
        for tab in tabs {
            out.blank();
            out.heading(&format!("== {} ==", tab.title()));
            self.write_tab(&mut out, tab);
        }
        out.finish()
    }

    fn write_tab(&self, out: &mut PanelText<'_>, tab: DetailsTab) {
        match tab {
            DetailsTab::Overview => overview::write_overview(out, self.span),
            DetailsTab::Tools => {
                let tools = self
                    .span
                    .amp_attributes
                    .as_ref()
                    .map(|amp| amp.tools())
                    .unwrap_or_default();
                tools::write_tools(out, tools);
            }
            DetailsTab::Raw => raw::write_raw(out, self.span),
            DetailsTab::All => {}
        }
    }
}

#[cfg(test)]
#[path = "details_tests.rs"]
mod tests;
