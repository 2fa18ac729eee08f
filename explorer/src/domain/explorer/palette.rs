//! Visual tokens for the tree and panels

use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

/// Guide character styles for tree rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeGuides {
    /// ASCII guides: `|`, `+--`, `` `-- ``
    Ascii,
    /// Unicode box-drawing characters
    #[default]
    Unicode,
}

impl TreeGuides {
    /// Vertical continuation (an ancestor has siblings below)
    pub const fn vertical(&self) -> &'static str {
        match self {
            Self::Ascii => "|   ",
            Self::Unicode => "\u{2502}   ",
        }
    }

    /// Branch guide (node has siblings below)
    pub const fn branch(&self) -> &'static str {
        match self {
            Self::Ascii => "+-- ",
            Self::Unicode => "\u{251C}\u{2500}\u{2500} ",
        }
    }

    /// Last-child guide
    pub const fn last(&self) -> &'static str {
        match self {
            Self::Ascii => "`-- ",
            Self::Unicode => "\u{2514}\u{2500}\u{2500} ",
        }
    }

    pub const fn space(&self) -> &'static str {
        "    "
    }

    /// Toggle glyphs: (expanded, collapsed, leaf)
    pub const fn toggles(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::Ascii => ("[-]", "[+]", " - "),
            Self::Unicode => ("\u{25BE}", "\u{25B8}", "\u{2500}"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Unicode => "unicode",
        }
    }
}

/// When to emit ANSI colour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve `Auto` against stdout
    pub fn enabled(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        }
    }
}

/// ANSI escape tokens; all empty when colour is off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub connector: &'static str,
    pub selected: &'static str,
    pub error: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub muted: &'static str,
    pub heading: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub const PLAIN: Self = Self {
        connector: "",
        selected: "",
        error: "",
        success: "",
        warning: "",
        muted: "",
        heading: "",
        reset: "",
    };

    pub const ANSI: Self = Self {
        connector: "\x1b[34m",
        selected: "\x1b[1;7m",
        error: "\x1b[31m",
        success: "\x1b[32m",
        warning: "\x1b[33m",
        muted: "\x1b[2m",
        heading: "\x1b[1m",
        reset: "\x1b[0m",
    };

    pub fn for_mode(mode: ColorMode) -> Self {
        if mode.enabled() { Self::ANSI } else { Self::PLAIN }
    }

    /// Wrap `text` in `token` ... reset; no-op for the plain palette
    pub fn paint(&self, token: &str, text: &str) -> String {
        if token.is_empty() || text.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", token, text, self.reset)
        }
    }
}
