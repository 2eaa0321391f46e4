//! Table layout configuration.

use crate::style::Style;

/// Colors used for margins in favor of each outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Style for "R+" margins.
    pub rep: Style,
    /// Style for "D+" margins.
    pub dem: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            rep: Style::Red,
            dem: Style::Blue,
        }
    }
}

/// Fixed column widths and margin colors for the whole report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// Width of the label column.
    pub name_width: usize,
    /// Width of each numeric column.
    pub num_width: usize,
    /// Margin colors.
    pub palette: Palette,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            name_width: 20,
            num_width: 10,
            palette: Palette::default(),
        }
    }
}

impl TableConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label column width.
    pub fn with_name_width(mut self, width: usize) -> Self {
        self.name_width = width;
        self
    }

    /// Set the numeric column width.
    pub fn with_num_width(mut self, width: usize) -> Self {
        self.num_width = width;
        self
    }
}
