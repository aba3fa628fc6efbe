// In app/src/report.rs

use analytics::types::{PerformanceSummary, TradeRecord};
use backtester::BacktestReport;
use std::fmt::Write;

/// Prints the position table and the performance metrics of a finished run.
pub fn print_report(report: &BacktestReport) {
    println!(
        "\n{} ({} strategy, Principal = {:.2}) | {} to {} | {} bars",
        report.symbol.0.to_uppercase(),
        report.strategy,
        report.principal,
        report.start_date,
        report.end_date,
        report.series.len()
    );
    print!("{}", render_position_table(&report.trades));
    print!("{}", render_performance_metrics(&report.summary));
}

/// Renders the ledger with every numeric column at two decimal places.
pub fn render_position_table(trades: &[TradeRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n--- Position Table ---");
    let _ = writeln!(
        out,
        "{:<12} {:<6} {:>12} {:>14} {:>14} {:>18}",
        "Trade Date", "Action", "Close", "Quantity", "Amount", "Cumulative Amount"
    );
    if trades.is_empty() {
        let _ = writeln!(out, "(no trades in the selected window)");
    }
    for trade in trades {
        let _ = writeln!(
            out,
            "{:<12} {:<6} {:>12.2} {:>14.2} {:>14.2} {:>18.2}",
            trade.date.to_string(),
            trade.action.to_string(),
            trade.price.round_dp(2),
            trade.quantity.round_dp(2),
            trade.amount.round_dp(2),
            trade.cumulative_amount.round_dp(2)
        );
    }
    out
}

pub fn render_performance_metrics(summary: &PerformanceSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n--- Performance Metrics ---");
    let _ = writeln!(out, "Total Trades: {}", summary.total_trades);
    let _ = writeln!(out, "Win Trades:   {}", summary.sell_count);
    let _ = writeln!(out, "Loss Trades:  {}", summary.buy_count);
    let _ = writeln!(out, "Win Rate:     {}", summary.win_rate_display());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_types::Action;
    use rust_decimal_macros::dec;

    #[test]
    fn table_rows_use_two_decimals() {
        let trades = vec![TradeRecord {
            date: NaiveDate::from_ymd_opt(2023, 3, 14).unwrap(),
            action: Action::Buy,
            price: dec!(150),
            quantity: dec!(10000) / dec!(150),
            amount: dec!(10000),
            cumulative_amount: dec!(10000),
        }];
        let table = render_position_table(&trades);
        let row = table.lines().last().unwrap();
        assert!(row.starts_with("2023-03-14"));
        assert!(row.contains("Buy"));
        assert!(row.contains("150.00"));
        assert!(row.contains("66.67"));
        assert!(row.ends_with("10000.00"));
    }

    #[test]
    fn empty_ledger_renders_placeholder_and_na() {
        assert!(render_position_table(&[]).contains("no trades"));
        let metrics = render_performance_metrics(&PerformanceSummary::no_trades());
        assert!(metrics.contains("Total Trades: 0"));
        assert!(metrics.contains("Win Rate:     N/A"));
    }

    #[test]
    fn metrics_label_sells_as_wins() {
        let summary = PerformanceSummary {
            total_trades: 3,
            sell_count: 1,
            buy_count: 2,
            win_rate: Some(100.0 / 3.0),
        };
        let metrics = render_performance_metrics(&summary);
        assert!(metrics.contains("Win Trades:   1"));
        assert!(metrics.contains("Loss Trades:  2"));
        assert!(metrics.contains("Win Rate:     33.33%"));
    }
}
