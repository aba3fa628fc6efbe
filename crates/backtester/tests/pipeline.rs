//! End-to-end runs of the crossover pipeline over synthetic daily series.

use backtester::{BacktestRequest, Backtester};
use chrono::NaiveDate;
use core_types::{Action, Error, PositionSignal, PricePoint, Symbol};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use strategies::CrossoverSettings;

fn date(offset: usize) -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 3).unwrap() + chrono::Days::new(offset as u64)
}

fn series(closes: impl IntoIterator<Item = Decimal>) -> Vec<PricePoint> {
    closes
        .into_iter()
        .enumerate()
        .map(|(i, close)| PricePoint::new(date(i), close))
        .collect()
}

fn request(strategy: &str, len: usize) -> BacktestRequest {
    BacktestRequest {
        symbol: Symbol("TEST".to_string()),
        start_date: date(0),
        end_date: date(len.saturating_sub(1)),
        principal: dec!(10000),
        strategy: strategy.to_string(),
    }
}

fn backtester() -> Backtester {
    Backtester::new(CrossoverSettings::default())
}

/// 60 days flat at 100, then `tail` days at 150.
fn step_series(tail: usize) -> Vec<PricePoint> {
    series(std::iter::repeat_n(dec!(100), 60).chain(std::iter::repeat_n(dec!(150), tail)))
}

/// 30 days flat at 100, a 30-day climb to 130, then 30 days at 80.
fn rise_and_fall() -> Vec<PricePoint> {
    series(
        std::iter::repeat_n(dec!(100), 30)
            .chain((1..=30).map(|i| Decimal::from(100 + i)))
            .chain(std::iter::repeat_n(dec!(80), 30)),
    )
}

mod worked_scenarios {
    use super::*;

    #[test]
    fn sma_step_up_buys_exactly_once() {
        let prices = step_series(40);
        let report = backtester().run(&request("SMA", prices.len()), &prices).unwrap();

        assert_eq!(report.trades.len(), 1);
        let buy = &report.trades[0];
        assert_eq!(buy.action, Action::Buy);
        assert_eq!(buy.date, date(60));
        assert_eq!(buy.price, dec!(150));
        assert_eq!(buy.quantity, dec!(10000) / dec!(150));

        assert_eq!(report.summary.total_trades, 1);
        assert_eq!(report.summary.sell_count, 0);
        assert_eq!(report.summary.buy_count, 1);
        assert_eq!(report.summary.win_rate, Some(0.0));
    }

    #[test]
    fn ema_rise_and_fall_buys_then_sells() {
        let prices = rise_and_fall();
        let report = backtester().run(&request("EMA", prices.len()), &prices).unwrap();

        let actions: Vec<Action> = report.trades.iter().map(|t| t.action).collect();
        assert_eq!(actions, vec![Action::Buy, Action::Sell]);

        let (buy, sell) = (&report.trades[0], &report.trades[1]);
        assert_eq!(buy.date, date(30));
        assert_eq!(sell.price, dec!(80));
        assert_eq!(sell.cumulative_amount, buy.amount + sell.amount);
        assert_eq!(report.summary.win_rate, Some(50.0));
    }

    #[test]
    fn fewer_than_two_points_reports_no_trades() {
        for prices in [Vec::new(), series([dec!(42)])] {
            let report = backtester().run(&request("SMA", prices.len()), &prices).unwrap();
            assert!(report.trades.is_empty());
            assert_eq!(report.series.len(), prices.len());
            assert_eq!(report.summary.total_trades, 0);
            assert_eq!(report.summary.win_rate, None);
            assert_eq!(report.summary.win_rate_display(), "N/A");
        }
    }

    #[test]
    fn unknown_strategy_aborts_before_computation() {
        // The series is invalid too; the strategy selector is checked first.
        let prices = vec![PricePoint::new(date(1), dec!(1)), PricePoint::new(date(0), dec!(1))];
        let err = backtester().run(&request("MACD", 2), &prices).unwrap_err();
        assert_eq!(err, Error::InvalidStrategy { value: "MACD".to_string() });
    }

    #[test]
    fn zero_close_on_a_trade_day_aborts_the_run() {
        // A slow climb goes long on day 20; a zero close on day 60 drags the
        // fast average under the slow one and triggers a sell at price 0.
        let prices = series(
            (0..60)
                .map(|i| dec!(100) + Decimal::new(i, 1))
                .chain(std::iter::once(Decimal::ZERO)),
        );
        let err = backtester().run(&request("SMA", prices.len()), &prices).unwrap_err();
        assert_eq!(err, Error::DivisionByZero { date: date(60) });
    }
}

mod properties {
    use super::*;

    fn wavy(len: usize) -> Vec<PricePoint> {
        series((0..len).map(|i| {
            let leg = if (i / 35) % 2 == 0 { i % 35 } else { 35 - i % 35 };
            Decimal::from(100 + leg as i64 * 2) + Decimal::new((i * 13 % 7) as i64, 0)
        }))
    }

    #[test]
    fn series_is_annotated_one_to_one() {
        let prices = wavy(250);
        for strategy in ["SMA", "EMA"] {
            let report = backtester().run(&request(strategy, prices.len()), &prices).unwrap();
            assert_eq!(report.series.len(), prices.len());
            for (bar, point) in report.series.iter().zip(&prices) {
                assert_eq!((bar.date, bar.close), (point.date, point.close));
                let expected = if bar.fast > bar.slow { PositionSignal::Long } else { PositionSignal::Flat };
                assert_eq!(bar.signal, expected);
            }
            let marked = report.series.iter().filter(|bar| bar.action.is_some()).count();
            assert_eq!(marked, report.trades.len());
        }
    }

    #[test]
    fn buys_and_sells_alternate() {
        let prices = wavy(400);
        for strategy in ["SMA", "EMA"] {
            let report = backtester().run(&request(strategy, prices.len()), &prices).unwrap();
            assert!(report.trades.len() >= 2, "{strategy} should cross more than once");

            let buys = report.trades.iter().filter(|t| t.action == Action::Buy).count() as i64;
            let sells = report.trades.iter().filter(|t| t.action == Action::Sell).count() as i64;
            assert!((buys - sells).abs() <= 1);
            for pair in report.trades.windows(2) {
                assert_ne!(pair[0].action, pair[1].action);
            }
        }
    }

    #[test]
    fn cumulative_amount_is_running_sum() {
        let prices = wavy(400);
        let report = backtester().run(&request("EMA", prices.len()), &prices).unwrap();

        let mut running = Decimal::ZERO;
        let mut previous = Decimal::ZERO;
        for trade in &report.trades {
            running += trade.amount;
            assert_eq!(trade.cumulative_amount, running);
            assert!(trade.cumulative_amount >= previous);
            assert_eq!(trade.amount.round_dp(2), dec!(10000));
            previous = trade.cumulative_amount;
        }
    }

    #[test]
    fn runs_are_deterministic() {
        let prices = wavy(300);
        let req = request("SMA", prices.len());
        let first = backtester().run(&req, &prices).unwrap();
        let second = backtester().run(&req, &prices).unwrap();
        assert_eq!(first.series, second.series);
        assert_eq!(first.trades, second.trades);
        assert_eq!(first.summary, second.summary);
    }

    #[test]
    fn flat_averages_after_convergence_close_the_position() {
        // Once both windows hold only 150s the averages are equal, which is Flat.
        let prices = step_series(60);
        let report = backtester().run(&request("SMA", prices.len()), &prices).unwrap();
        let actions: Vec<(NaiveDate, Action)> = report.trades.iter().map(|t| (t.date, t.action)).collect();
        assert_eq!(actions, vec![(date(60), Action::Buy), (date(109), Action::Sell)]);
    }
}

mod validation {
    use super::*;

    #[test]
    fn non_positive_principal_is_rejected() {
        let prices = step_series(10);
        let mut req = request("SMA", prices.len());
        req.principal = Decimal::ZERO;
        assert!(matches!(
            backtester().run(&req, &prices),
            Err(Error::InvalidParameter { name: "principal", .. })
        ));
    }

    #[test]
    fn duplicate_dates_are_rejected() {
        let prices = vec![PricePoint::new(date(0), dec!(10)), PricePoint::new(date(0), dec!(11))];
        assert!(matches!(
            backtester().run(&request("EMA", 2), &prices),
            Err(Error::InvalidParameter { name: "prices", .. })
        ));
    }

    #[test]
    fn invalid_periods_are_rejected() {
        let prices = step_series(10);
        let backtester = Backtester::new(CrossoverSettings { fast_period: 30, slow_period: 10 });
        assert!(matches!(
            backtester.run(&request("SMA", prices.len()), &prices),
            Err(Error::InvalidParameter { name: "slow_period", .. })
        ));
    }
}

mod principal_conversion {
    use backtester::principal_from_f64;
    use core_types::Error;
    use rust_decimal_macros::dec;

    #[test]
    fn converts_finite_amounts() {
        assert_eq!(principal_from_f64(10_000.0).unwrap(), dec!(10000));
        assert_eq!(principal_from_f64(2500.5).unwrap(), dec!(2500.5));
    }

    #[test]
    fn rejects_nan() {
        assert!(matches!(
            principal_from_f64(f64::NAN),
            Err(Error::InvalidParameter { name: "principal", .. })
        ));
    }
}
