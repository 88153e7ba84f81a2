use iced::widget::image::Handle;
use image::{imageops, RgbaImage};

use super::fetch::rgba_handle;
use crate::state::navigator::{Zoom, ZOOM_SCALE};

/// Zoom origins are snapped to this grid (percent) before cropping
const ZOOM_STEP: f32 = 2.0;

/// Region of the source image visible when it is scaled by [`ZOOM_SCALE`]
/// about the zoom origin. Returns `(x, y, width, height)` in pixels.
///
/// The detail view draws images into a square frame with cover fit, so only
/// the centered `min(width, height)` square is on screen and the zoom origin
/// is a position within that square. Scaling by `s` about origin `o` maps the
/// frame back onto `[o * (1 - 1/s), o * (1 - 1/s) + side/s]` inside it.
pub fn zoom_window(width: u32, height: u32, zoom: Zoom) -> (u32, u32, u32, u32) {
    let side = width.min(height);
    let visible = ((side as f32) / ZOOM_SCALE).round().max(1.0) as u32;
    let visible = visible.min(side);

    let axis = |size: u32, percent: f32| -> u32 {
        let offset = (size - side) / 2;
        let origin = side as f32 * (percent.clamp(0.0, 100.0) / 100.0);
        let start = (origin * (1.0 - 1.0 / ZOOM_SCALE)).round() as u32;
        offset + start.min(side - visible)
    };

    (axis(width, zoom.x), axis(height, zoom.y), visible, visible)
}

/// Zoom with its origin snapped to the crop grid.
/// Pointer jitter inside one cell keeps the same crop.
pub fn snapped(zoom: Zoom) -> Zoom {
    let snap = |v: f32| ((v / ZOOM_STEP).round() * ZOOM_STEP).clamp(0.0, 100.0);
    Zoom {
        x: snap(zoom.x),
        y: snap(zoom.y),
        ..zoom
    }
}

/// Crop of the working image for the current zoom position
pub fn zoomed(pixels: &RgbaImage, zoom: Zoom) -> Handle {
    let (x, y, w, h) = zoom_window(pixels.width(), pixels.height(), zoom);
    let crop = imageops::crop_imm(pixels, x, y, w, h).to_image();
    rgba_handle(&crop)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32) -> Zoom {
        Zoom { enabled: true, x, y }
    }

    #[test]
    fn test_square_image_window() {
        assert_eq!(zoom_window(600, 600, at(50.0, 50.0)), (100, 100, 400, 400));
        assert_eq!(zoom_window(600, 600, at(0.0, 0.0)), (0, 0, 400, 400));
        assert_eq!(zoom_window(600, 600, at(100.0, 100.0)), (200, 200, 400, 400));
    }

    #[test]
    fn test_landscape_window_stays_in_visible_square() {
        // Cover fit shows columns 150..750 of a 900x600 image
        assert_eq!(zoom_window(900, 600, at(0.0, 50.0)), (150, 100, 400, 400));
        assert_eq!(zoom_window(900, 600, at(50.0, 50.0)), (250, 100, 400, 400));
        assert_eq!(zoom_window(900, 600, at(100.0, 50.0)), (350, 100, 400, 400));
    }

    #[test]
    fn test_portrait_window_stays_in_visible_square() {
        // Cover fit shows rows 200..600 of a 400x800 image
        let (x, y, w, h) = zoom_window(400, 800, at(0.0, 0.0));
        assert_eq!((x, y), (0, 200));
        assert_eq!((w, h), (267, 267));
        let (_, y, _, h) = zoom_window(400, 800, at(100.0, 100.0));
        assert_eq!(y + h, 600);
    }

    #[test]
    fn test_tiny_image() {
        assert_eq!(zoom_window(1, 1, at(100.0, 100.0)), (0, 0, 1, 1));
        assert_eq!(zoom_window(3, 1, at(100.0, 0.0)), (1, 0, 1, 1));
    }

    #[test]
    fn test_zoomed_crop_fits_image() {
        let pixels = RgbaImage::new(300, 150);
        let _ = zoomed(&pixels, at(25.0, 75.0));
        let (x, y, w, h) = zoom_window(300, 150, at(25.0, 75.0));
        assert!(x + w <= 300 && y + h <= 150);
        assert_eq!((w, h), (100, 100));
    }

    #[test]
    fn test_snapped_merges_nearby_positions() {
        assert_eq!(snapped(at(41.2, 58.9)), snapped(at(41.8, 58.2)));
        assert_eq!(snapped(at(41.2, 58.9)), at(42.0, 58.0));
        assert_eq!(snapped(at(99.9, 0.4)), at(100.0, 0.0));
        assert!(!snapped(Zoom { enabled: false, x: 3.0, y: 3.0 }).enabled);
    }
}
