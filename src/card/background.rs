// src/card/background.rs

use image::imageops::FilterType;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use tracing::warn;

const FILL: Rgb<u8> = Rgb([15, 25, 35]);
const GRID: Rgb<u8> = Rgb([25, 35, 45]);
const ACCENT: Rgb<u8> = Rgb([0, 100, 120]);
const GRID_STEP: u32 = 40;

/// First usable image in `dir`, resized to the card size.
/// Hidden files and non-image extensions are skipped; any read or decode
/// failure falls through to the generated background.
pub fn load_custom(dir: &str, width: u32, height: u32) -> Option<RgbImage> {
    let entries = std::fs::read_dir(dir).ok()?;
    let mut candidates: Vec<_> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            let name = p.file_name().and_then(|n| n.to_str()).unwrap_or("");
            if name.starts_with('.') {
                return false;
            }
            matches!(
                p.extension().and_then(|x| x.to_str()).map(|x| x.to_ascii_lowercase()).as_deref(),
                Some("png" | "jpg" | "jpeg")
            )
        })
        .collect();
    candidates.sort();

    let path = candidates.into_iter().next()?;
    match image::open(&path) {
        Ok(img) => {
            let resized = image::imageops::resize(&img.to_rgb8(), width, height, FilterType::Lanczos3);
            Some(resized)
        }
        Err(e) => {
            warn!("Failed to open background {:?}: {}", path, e);
            None
        }
    }
}

/// Default dark background: grid pattern plus an accent frame.
pub fn generate(width: u32, height: u32) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, height, FILL);

    for x in (0..width).step_by(GRID_STEP as usize) {
        draw_line_segment_mut(&mut img, (x as f32, 0.0), (x as f32, height as f32), GRID);
    }
    for y in (0..height).step_by(GRID_STEP as usize) {
        draw_line_segment_mut(&mut img, (0.0, y as f32), (width as f32, y as f32), GRID);
    }

    // 2px accent frame inset by 10
    if width > 24 && height > 24 {
        draw_hollow_rect_mut(&mut img, Rect::at(10, 10).of_size(width - 20, height - 20), ACCENT);
        draw_hollow_rect_mut(&mut img, Rect::at(11, 11).of_size(width - 22, height - 22), ACCENT);
    }

    img
}
