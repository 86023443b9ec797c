use super::constants::*;
use rand::Rng;

/// Grid that spreads collage photos across the viewport without clumping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollageGrid {
    pub cols: usize,
    pub rows: usize,
}

impl Default for CollageGrid {
    fn default() -> Self {
        Self {
            cols: COLLAGE_COLS,
            rows: COLLAGE_ROWS,
        }
    }
}

impl CollageGrid {
    #[inline]
    pub fn cell_width_vw(&self) -> f32 {
        100.0 / self.cols.max(1) as f32
    }

    #[inline]
    pub fn cell_height_vh(&self) -> f32 {
        100.0 / self.rows.max(1) as f32
    }

    /// (col, row) of the i-th photo; wraps back to the top row past the last cell.
    pub fn cell_of(&self, index: usize) -> (usize, usize) {
        let cols = self.cols.max(1);
        let rows = self.rows.max(1);
        (index % cols, (index / cols) % rows)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PhotoPlacement {
    pub url: String,
    pub width_px: f32,
    pub height_px: f32,
    pub left_vw: f32,
    pub top_vh: f32,
    pub rotate_deg: f32,
}

/// Endless alternating drift applied to one collage photo.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhotoDrift {
    pub dest_x_px: f32,
    pub dest_y_px: f32,
    pub duration_ms: f64,
    pub rotate_start_deg: f32,
    pub rotate_end_deg: f32,
}

/// Asset paths by filename convention, repeated for density.
pub fn photo_urls(distinct: usize, repeats: usize) -> Vec<String> {
    let distinct = distinct.clamp(1, COLLAGE_MAX_PHOTOS);
    let total = (distinct * repeats.max(1)).min(COLLAGE_MAX_PHOTOS);
    (0..total)
        .map(|i| format!("assets/photo{}.jpg", i % distinct + 1))
        .collect()
}

#[inline]
fn tilt<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen::<f32>() * 2.0 * PHOTO_TILT_DEG - PHOTO_TILT_DEG
}

pub fn layout<R: Rng + ?Sized>(urls: &[String], grid: CollageGrid, rng: &mut R) -> Vec<PhotoPlacement> {
    let cw = grid.cell_width_vw();
    let ch = grid.cell_height_vh();
    urls.iter()
        .enumerate()
        .map(|(i, url)| {
            let width_px = rng.gen::<f32>() * PHOTO_WIDTH_SPAN_PX + PHOTO_WIDTH_MIN_PX;
            let height_px = width_px * (rng.gen::<f32>() * PHOTO_ASPECT_SPAN + PHOTO_ASPECT_MIN);
            let (col, row) = grid.cell_of(i);
            let left_vw = col as f32 * cw + rng.gen::<f32>() * (cw - COLLAGE_CELL_MARGIN).max(0.0);
            let top_vh = row as f32 * ch + rng.gen::<f32>() * (ch - COLLAGE_CELL_MARGIN).max(0.0);
            PhotoPlacement {
                url: url.clone(),
                width_px,
                height_px,
                left_vw,
                top_vh,
                rotate_deg: tilt(rng),
            }
        })
        .collect()
}

pub fn drift<R: Rng + ?Sized>(rng: &mut R) -> PhotoDrift {
    PhotoDrift {
        dest_x_px: (rng.gen::<f32>() - 0.5) * PHOTO_DRIFT_PX,
        dest_y_px: (rng.gen::<f32>() - 0.5) * PHOTO_DRIFT_PX,
        duration_ms: rng.gen::<f64>() * PHOTO_DRIFT_SPAN_MS + PHOTO_DRIFT_MIN_MS,
        rotate_start_deg: tilt(rng),
        rotate_end_deg: tilt(rng),
    }
}
