//! Row formatting: decorated, padded, fixed-width table rows.

use crate::config::TableConfig;
use crate::style::Style;
use crate::text::StyledText;

/// Header label of the margin column.
pub const MARGIN_LABEL: &str = "Margin";

/// Builds table rows with the configured widths and colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowFormatter {
    config: TableConfig,
}

impl RowFormatter {
    pub fn new(config: TableConfig) -> Self {
        Self { config }
    }

    /// One decimal place, bold when `emphasize` is set.
    pub fn format_value(&self, value: f64, emphasize: bool) -> StyledText {
        let text = StyledText::plain(format!("{:.1}", value));
        if emphasize {
            text.stylize(Style::Bold)
        } else {
            text
        }
    }

    /// Signed lead: "R+x" or "D+x" in the outcome's color, or a plain "TIE".
    pub fn format_margin(&self, rep: f64, dem: f64) -> StyledText {
        let margin = rep - dem;
        if margin > 0.0 {
            StyledText::plain(format!("R+{:.1}", margin.abs())).stylize(self.config.palette.rep)
        } else if margin < 0.0 {
            StyledText::plain(format!("D+{:.1}", margin.abs())).stylize(self.config.palette.dem)
        } else {
            StyledText::plain("TIE")
        }
    }

    /// Name, R, D and margin columns. The larger value is bolded; equal
    /// values bold neither.
    pub fn format_row(&self, name: &str, rep: f64, dem: f64, url: Option<&str>) -> StyledText {
        [
            StyledText::plain(name)
                .linkify(url)
                .pad(self.config.name_width),
            self.format_value(rep, rep > dem).pad(self.config.num_width),
            self.format_value(dem, dem > rep).pad(self.config.num_width),
            self.format_margin(rep, dem),
        ]
        .into_iter()
        .collect()
    }

    /// Bold, underlined column labels headed by `title`.
    pub fn format_header(&self, title: &str) -> StyledText {
        let labels: StyledText = [
            StyledText::plain(title).pad(self.config.name_width),
            StyledText::plain("R").pad(self.config.num_width),
            StyledText::plain("D").pad(self.config.num_width),
            StyledText::plain(MARGIN_LABEL),
        ]
        .into_iter()
        .collect();
        labels.stylize(Style::Underline).stylize(Style::Bold)
    }
}
