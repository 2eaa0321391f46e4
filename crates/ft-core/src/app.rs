//! The report pipeline: fetch, summarize, render, count down.

use crate::clock::{Clock, Countdown};
use crate::source::DataSource;

use ft_common::{Feed, Result, SectionKind};
use ft_math::SummaryStats;
use ft_report::{AggregateRow, ReportRenderer, TableConfig};
use tracing::{info, warn};

/// A fully rendered report and the numbers behind it.
#[derive(Debug, Clone)]
pub struct Report {
    /// Terminal text, one line per row, ending in a newline.
    pub text: String,
    pub forecasts: SummaryStats,
    pub markets: SummaryStats,
    /// Overall block rows in display order.
    pub overall: Vec<AggregateRow>,
    pub countdown: Countdown,
}

/// Runs the pipeline against a feed source and a clock.
#[derive(Debug)]
pub struct App<S, C> {
    source: S,
    clock: C,
    table: TableConfig,
}

impl<S: DataSource, C: Clock> App<S, C> {
    pub fn new(source: S, clock: C, table: TableConfig) -> Self {
        Self {
            source,
            clock,
            table,
        }
    }

    /// Fetch the feed once and render the whole report.
    ///
    /// Nothing is rendered when the fetch fails.
    pub fn run(&self) -> Result<Report> {
        let feed = self.source.fetch()?;
        Ok(render_report(&feed, &self.clock, self.table))
    }
}

/// Render both sections, the overall block, and the countdown line.
pub fn render_report(feed: &Feed, clock: &dyn Clock, table: TableConfig) -> Report {
    let mut renderer = ReportRenderer::new(table);

    let [forecasts, markets] = SectionKind::ALL.map(|kind| {
        let stats = renderer.render_section(kind.title(), feed.section(kind));
        renderer.blank_line();
        stats
    });
    let overall = renderer.render_overall(&forecasts, &markets);
    renderer.blank_line();

    let target = clock.target();
    let countdown = Countdown::from_clock(clock);
    if countdown.is_past() {
        warn!(target_at = %target.at, zone = %target.zone, "Target instant has passed");
    }
    renderer.push_line(&format!("{} until {}", countdown, target.label));
    info!(days = countdown.days, hours = countdown.hours, "Countdown computed");

    Report {
        text: renderer.finish(),
        forecasts,
        markets,
        overall,
        countdown,
    }
}
