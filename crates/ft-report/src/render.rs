//! Report blocks: per-section tables and the overall comparison.

use crate::config::TableConfig;
use crate::row::RowFormatter;
use crate::text::StyledText;

use ft_common::Record;
use ft_math::{combine_average, combine_median, SummaryStats};
use tracing::debug;

/// A derived row: a label with an R and D value.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    pub label: String,
    pub rep: f64,
    pub dem: f64,
}

impl AggregateRow {
    pub fn new(label: impl Into<String>, (rep, dem): (f64, f64)) -> Self {
        Self {
            label: label.into(),
            rep,
            dem,
        }
    }
}

/// Accumulates report lines in display order.
///
/// Output is buffered so that nothing reaches the terminal unless the
/// whole report was built.
#[derive(Debug, Default)]
pub struct ReportRenderer {
    rows: RowFormatter,
    out: String,
}

impl ReportRenderer {
    pub fn new(config: TableConfig) -> Self {
        Self {
            rows: RowFormatter::new(config),
            out: String::new(),
        }
    }

    /// Header, one row per record in input order, then AVERAGE and MEDIAN.
    ///
    /// Returns the section statistics for the overall block.
    pub fn render_section(&mut self, title: &str, records: &[Record]) -> SummaryStats {
        let header = self.rows.format_header(title);
        self.push(header);
        for record in records {
            let row = self
                .rows
                .format_row(&record.name, record.rep, record.dem, record.url.as_deref());
            self.push(row);
        }

        let stats = SummaryStats::from_pairs(records.iter().map(|r| (r.rep, r.dem)));
        self.push_aggregate(&AggregateRow::new("AVERAGE", stats.average()));
        self.push_aggregate(&AggregateRow::new("MEDIAN", stats.middle()));

        debug!(section = title, rows = records.len(), "Section rendered");
        stats
    }

    /// Per-section aggregates followed by the combined average and median.
    ///
    /// Returns the six rows in display order.
    pub fn render_overall(
        &mut self,
        forecasts: &SummaryStats,
        markets: &SummaryStats,
    ) -> Vec<AggregateRow> {
        let both = [*forecasts, *markets];
        let rows = vec![
            AggregateRow::new("Forecasts Average", forecasts.average()),
            AggregateRow::new("Forecasts Median", forecasts.middle()),
            AggregateRow::new("Markets Average", markets.average()),
            AggregateRow::new("Markets Median", markets.middle()),
            AggregateRow::new("Combined Average", combine_average(&both)),
            AggregateRow::new("Combined Median", combine_median(&both)),
        ];

        let header = self.rows.format_header("Overall");
        self.push(header);
        for row in &rows {
            self.push_aggregate(row);
        }
        rows
    }

    /// Append an empty line.
    pub fn blank_line(&mut self) {
        self.out.push('\n');
    }

    /// Append a free-form line.
    pub fn push_line(&mut self, line: &str) {
        self.out.push_str(line);
        self.out.push('\n');
    }

    /// Report text so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consume the renderer, returning the report text.
    pub fn finish(self) -> String {
        self.out
    }

    fn push_aggregate(&mut self, row: &AggregateRow) {
        let line = self.rows.format_row(&row.label, row.rep, row.dem, None);
        self.push(line);
    }

    fn push(&mut self, line: StyledText) {
        self.out.push_str(line.as_str());
        self.out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::width::strip_markers;

    fn plain_lines(renderer: &ReportRenderer) -> Vec<String> {
        strip_markers(renderer.as_str())
            .lines()
            .map(|l| l.to_string())
            .collect()
    }

    #[test]
    fn test_section_layout() {
        let mut renderer = ReportRenderer::default();
        let records = vec![
            Record::new("Poll2", 48.0, 52.0),
            Record::new("Poll1", 52.3, 47.1).with_url("http://x"),
        ];
        let stats = renderer.render_section("Forecasts", &records);

        let lines = plain_lines(&renderer);
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Forecasts"));
        // Input order, no sorting.
        assert!(lines[1].starts_with("Poll2"));
        assert!(lines[2].starts_with("Poll1"));
        assert!(lines[3].starts_with("AVERAGE"));
        assert!(lines[4].starts_with("MEDIAN"));
        assert!((stats.mean_rep - 50.15).abs() < 1e-9);
    }

    #[test]
    fn test_empty_section_renders_zero_aggregates() {
        let mut renderer = ReportRenderer::default();
        let stats = renderer.render_section("Markets", &[]);
        assert_eq!(stats, SummaryStats::default());

        let lines = plain_lines(&renderer);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], format!("{:<20}{:<10}{:<10}TIE", "AVERAGE", "0.0", "0.0"));
        assert_eq!(lines[2], format!("{:<20}{:<10}{:<10}TIE", "MEDIAN", "0.0", "0.0"));
    }

    #[test]
    fn test_overall_rows() {
        let forecasts = SummaryStats::from_pairs([(10.0, 20.0), (30.0, 40.0)]);
        let markets = SummaryStats::from_pairs([(60.0, 40.0)]);
        let mut renderer = ReportRenderer::default();
        let rows = renderer.render_overall(&forecasts, &markets);

        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Forecasts Average",
                "Forecasts Median",
                "Markets Average",
                "Markets Median",
                "Combined Average",
                "Combined Median",
            ]
        );
        assert_eq!(rows[4], AggregateRow::new("Combined Average", (40.0, 35.0)));
        assert_eq!(rows[5], AggregateRow::new("Combined Median", (40.0, 35.0)));

        let lines = plain_lines(&renderer);
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("Overall"));
        assert!(lines[6].ends_with("R+5.0"));
    }

    #[test]
    fn test_free_form_lines() {
        let mut renderer = ReportRenderer::default();
        renderer.push_line("a");
        renderer.blank_line();
        renderer.push_line("b");
        assert_eq!(renderer.finish(), "a\n\nb\n");
    }
}
