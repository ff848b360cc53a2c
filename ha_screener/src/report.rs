//! Terminal report rendering for signals and chart payloads.

use tabled::{Table, Tabled, settings::Style};

use crate::{detector::Signal, heikin_ashi::HaBar, scan::DateMonitorRow};

const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Tabled)]
pub struct SignalRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Prev Date")]
    previous_date: String,
    #[tabled(rename = "Prev")]
    previous_color: String,
    #[tabled(rename = "Recent Date")]
    recent_date: String,
    #[tabled(rename = "Recent")]
    recent_color: String,
    #[tabled(rename = "HA Open")]
    ha_open: String,
    #[tabled(rename = "HA Close")]
    ha_close: String,
}

impl From<&Signal> for SignalRow {
    fn from(signal: &Signal) -> Self {
        Self {
            symbol: signal.symbol.clone(),
            previous_date: signal.previous_timestamp.format(DATE_FORMAT).to_string(),
            previous_color: signal.previous_color.to_string(),
            recent_date: signal.recent_timestamp.format(DATE_FORMAT).to_string(),
            recent_color: signal.recent_color.to_string(),
            ha_open: format!("{:.4}", signal.ha_open_recent),
            ha_close: format!("{:.4}", signal.ha_close_recent),
        }
    }
}

pub fn signal_table(signals: &[Signal]) -> String {
    let rows: Vec<SignalRow> = signals.iter().map(SignalRow::from).collect();
    Table::new(rows).with(Style::sharp()).to_string()
}

#[derive(Tabled)]
pub struct CandleRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Open")]
    open: String,
    #[tabled(rename = "High")]
    high: String,
    #[tabled(rename = "Low")]
    low: String,
    #[tabled(rename = "Close")]
    close: String,
    #[tabled(rename = "Color")]
    color: String,
}

impl From<&HaBar> for CandleRow {
    fn from(bar: &HaBar) -> Self {
        Self {
            date: bar.timestamp.format(DATE_FORMAT).to_string(),
            open: format!("{:.4}", bar.open),
            high: format!("{:.4}", bar.high),
            low: format!("{:.4}", bar.low),
            close: format!("{:.4}", bar.close),
            color: bar.color().to_string(),
        }
    }
}

pub fn candle_table(bars: &[HaBar]) -> String {
    let rows: Vec<CandleRow> = bars.iter().map(CandleRow::from).collect();
    Table::new(rows).with(Style::sharp()).to_string()
}

/// Date-monitor table: the last three series dates each symbol's candle
/// selection saw, oldest first.
#[derive(Tabled)]
pub struct MonitorRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "[-3] Date")]
    third_last: String,
    #[tabled(rename = "[-2] Date")]
    second_last: String,
    #[tabled(rename = "[-1] Date")]
    last: String,
}

impl From<&DateMonitorRow> for MonitorRow {
    fn from(row: &DateMonitorRow) -> Self {
        let mut dates = ["-".to_string(), "-".to_string(), "-".to_string()];
        let start = 3usize.saturating_sub(row.trailing_dates.len());
        for (slot, ts) in dates[start..].iter_mut().zip(&row.trailing_dates) {
            *slot = ts.format("%d/%m").to_string();
        }
        let [third_last, second_last, last] = dates;
        Self {
            symbol: row.symbol.clone(),
            third_last,
            second_last,
            last,
        }
    }
}

pub fn monitor_table(rows: &[DateMonitorRow]) -> String {
    let rows: Vec<MonitorRow> = rows.iter().map(MonitorRow::from).collect();
    Table::new(rows).with(Style::sharp()).to_string()
}
