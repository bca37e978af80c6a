use pnlcard::report::TradeReport;

#[test]
fn profit_flag_iff_sold_exceeds_bought() {
    let cases = [
        (10.0, 15.0, true),
        (15.0, 10.0, false),
        (10.0, 10.0, false),
        (0.0, 0.0, false),
        (0.0, 0.1, true),
    ];
    for (bought, sold, expected) in cases {
        let report = TradeReport::new("t", "SOL", bought, sold, 100.0);
        assert_eq!(report.is_profit, expected, "bought={bought} sold={sold}");
    }
}

#[test]
fn dollar_values_are_exact_products() {
    let price = 137.42;
    let report = TradeReport::new("t", "SOL", 12.5, 33.1, price);
    assert_eq!(report.bought_usd, 12.5 * price);
    assert_eq!(report.sold_usd, 33.1 * price);
    assert_eq!(report.pnl_units, 33.1 - 12.5);
    assert_eq!(report.pnl_usd, (33.1 - 12.5) * price);
}

#[test]
fn zero_quantities_are_fine() {
    let report = TradeReport::new("t", "SOL", 0.0, 0.0, 100.0);
    assert_eq!(report.bought_usd, 0.0);
    assert_eq!(report.sold_usd, 0.0);
    assert_eq!(report.pnl_usd, 0.0);
    assert!(!report.is_profit);
}

#[test]
fn large_quantities_do_not_overflow_formatting() {
    let report = TradeReport::new("Whale", "SOL", 1.0e9, 2.5e9, 150.0);
    assert!(report.is_profit);
    let summary = report.summary();
    assert!(summary.contains('K'));
    assert!(summary.contains('+'));
}
