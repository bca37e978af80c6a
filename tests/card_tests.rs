use pnlcard::card::CardRenderer;
use pnlcard::config::Config;
use pnlcard::report::TradeReport;

fn test_config() -> Config {
    Config {
        telegram_token: String::new(),
        price_api_base_url: "https://api.coingecko.com/api/v3".into(),
        price_asset_id: "solana".into(),
        vs_currency: "usd".into(),
        // nonexistent dir: forces the generated background
        backgrounds_dir: "this-dir-does-not-exist".into(),
        font_path: None,
        card_width: 1188,
        card_height: 668,
    }
}

fn render(report: &TradeReport) -> Vec<u8> {
    CardRenderer::new(&test_config())
        .render(report)
        .expect("rendering should not fail")
}

#[test]
fn profit_card_is_valid_png_of_configured_size() {
    let report = TradeReport::new("CryptoHawk", "SOL", 10.0, 15.0, 142.0);
    let png = render(&report);
    let img = image::load_from_memory(&png).expect("valid PNG");
    assert_eq!(img.width(), 1188);
    assert_eq!(img.height(), 668);
}

#[test]
fn loss_card_renders() {
    let report = TradeReport::new("DiamondHands", "SOL", 20.0, 12.0, 142.0);
    let png = render(&report);
    assert!(image::load_from_memory(&png).is_ok());
}

#[test]
fn zero_and_huge_values_never_panic() {
    for (bought, sold, price) in [
        (0.0, 0.0, 0.0),
        (0.0, 1.0e12, 100.0),
        (1.0e12, 0.0, 100.0),
        (5.0, 5.0, f64::MAX / 1.0e3),
    ] {
        let report = TradeReport::new("Edge", "SOL", bought, sold, price);
        let png = render(&report);
        assert!(!png.is_empty());
    }
}

#[test]
fn unreadable_font_path_falls_back_to_embedded() {
    let mut cfg = test_config();
    cfg.font_path = Some("no/such/font.ttf".into());
    let report = TradeReport::new("Fallback", "SOL", 1.0, 2.0, 100.0);
    let png = CardRenderer::new(&cfg).render(&report).unwrap();
    assert!(image::load_from_memory(&png).is_ok());
}
