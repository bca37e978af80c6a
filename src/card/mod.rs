// src/card/mod.rs

mod background;

use crate::config::Config;
use crate::report::TradeReport;
use crate::utils::format_compact;
use ab_glyph::{FontArc, PxScale};
use anyhow::Result;
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use std::io::Cursor;
use tracing::warn;

static EMBEDDED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

// Palette: bright for the coin/profit block, pale for the rest
const CYAN: Rgb<u8> = Rgb([0, 255, 255]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const PALE_GRAY: Rgb<u8> = Rgb([120, 120, 120]);
const RED: Rgb<u8> = Rgb([255, 50, 50]);
const DOLLAR_GRAY: Rgb<u8> = Rgb([44, 44, 44]);

const FONT_SIZE: f32 = 24.0;

// Fixed layout, tuned for the 1188x668 canvas
const LEFT_X: i32 = 100;
const Y_COIN: i32 = 130;
const Y_PROFIT: i32 = 192;
const Y_PROFIT_USD: i32 = 225;
const Y_BOUGHT: i32 = 287;
const Y_BOUGHT_USD: i32 = 320;
const Y_SOLD: i32 = 382;
const Y_SOLD_USD: i32 = 415;
const Y_USER: i32 = 472;
const Y_FOOTER: i32 = 505;

const BRACKET_INSET: i32 = 20;
const BRACKET_ARM: u32 = 30;
const BRACKET_THICKNESS: u32 = 3;

/// Renders trade reports onto the fixed-layout card.
#[derive(Debug, Clone)]
pub struct CardRenderer {
    width: u32,
    height: u32,
    backgrounds_dir: String,
    font: FontArc,
}

impl CardRenderer {
    pub fn new(cfg: &Config) -> Self {
        Self {
            width: cfg.card_width,
            height: cfg.card_height,
            backgrounds_dir: cfg.backgrounds_dir.clone(),
            font: load_font(cfg.font_path.as_deref()),
        }
    }

    /// PNG bytes for the card. Infallible for any numeric input; the only
    /// error source is PNG encoding itself.
    pub fn render(&self, report: &TradeReport) -> Result<Vec<u8>> {
        let mut img = background::load_custom(&self.backgrounds_dir, self.width, self.height)
            .unwrap_or_else(|| background::generate(self.width, self.height));

        self.draw_corner_brackets(&mut img);
        self.draw_report(&mut img, report);

        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }

    fn draw_report(&self, img: &mut RgbImage, report: &TradeReport) {
        let scale = PxScale::from(FONT_SIZE);
        let text = |img: &mut RgbImage, y: i32, color: Rgb<u8>, s: &str| {
            draw_text_mut(img, color, LEFT_X, y, scale, &self.font, s);
        };

        text(img, Y_COIN, WHITE, &format!("> {}", report.symbol));

        let units = format_compact(report.pnl_units, 1);
        let (profit_line, profit_color) = if report.is_profit {
            (format!("PROFIT: +{} {}", units, report.symbol), CYAN)
        } else {
            (format!("LOSS: -{} {}", units, report.symbol), RED)
        };
        text(img, Y_PROFIT, profit_color, &profit_line);
        text(img, Y_PROFIT_USD, CYAN, &format!("> ${}", format_compact(report.pnl_usd, 1)));

        text(
            img,
            Y_BOUGHT,
            PALE_GRAY,
            &format!("BOUGHT: {:.1} {}", report.bought, report.symbol),
        );
        text(img, Y_BOUGHT_USD, DOLLAR_GRAY, &format!("> ${}", format_compact(report.bought_usd, 1)));

        text(
            img,
            Y_SOLD,
            PALE_GRAY,
            &format!("SOLD: {:.1} {}", report.sold, report.symbol),
        );
        text(img, Y_SOLD_USD, DOLLAR_GRAY, &format!("> ${}", format_compact(report.sold_usd, 1)));

        text(img, Y_USER, PALE_GRAY, &format!("USER: {}", report.trader.to_uppercase()));
        text(img, Y_FOOTER, DOLLAR_GRAY, "> SRCL");
    }

    fn draw_corner_brackets(&self, img: &mut RgbImage) {
        let w = self.width as i32;
        let h = self.height as i32;
        let inset = BRACKET_INSET;
        let arm = BRACKET_ARM;
        let t = BRACKET_THICKNESS;
        if w < 2 * inset + arm as i32 || h < 2 * inset + arm as i32 {
            return;
        }

        let bar = |img: &mut RgbImage, x: i32, y: i32, bw: u32, bh: u32| {
            draw_filled_rect_mut(img, Rect::at(x, y).of_size(bw, bh), CYAN);
        };

        // top-left
        bar(img, inset, inset, arm, t);
        bar(img, inset, inset, t, arm);
        // top-right
        bar(img, w - inset - arm as i32, inset, arm, t);
        bar(img, w - inset - t as i32, inset, t, arm);
        // bottom-left
        bar(img, inset, h - inset - t as i32, arm, t);
        bar(img, inset, h - inset - arm as i32, t, arm);
        // bottom-right
        bar(img, w - inset - arm as i32, h - inset - t as i32, arm, t);
        bar(img, w - inset - t as i32, h - inset - arm as i32, t, arm);
    }
}

/// Font chain: configured TTF first, embedded DejaVu Sans as the last resort.
fn load_font(path: Option<&str>) -> FontArc {
    if let Some(p) = path {
        match std::fs::read(p) {
            Ok(bytes) => match FontArc::try_from_vec(bytes) {
                Ok(font) => return font,
                Err(e) => warn!("Font {} is not a usable TTF: {}; using embedded font", p, e),
            },
            Err(e) => warn!("Cannot read font {}: {}; using embedded font", p, e),
        }
    }
    FontArc::try_from_slice(EMBEDDED_FONT).expect("embedded font is valid")
}
