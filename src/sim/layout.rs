//! Selection screen layout
//!
//! One layout policy shared by hit testing and rendering, so a click lands
//! exactly where the option was drawn.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Rect;
use crate::consts::*;

/// A clickable option on a selection screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HitRegion {
    /// Index into the option list this region was laid out from
    pub id: usize,
    /// Image shown inside the box
    pub asset_key: String,
    pub rect: Rect,
}

/// Grid parameters for one selection screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Edge length of each option box
    pub box_size: f32,
    /// Horizontal gap between boxes in a row
    pub spacing: f32,
    /// Y of the first row
    pub top: f32,
    /// Distance between consecutive row tops (leaves room for labels)
    pub row_pitch: f32,
}

/// How many boxes fit on one row (at least one)
pub fn items_per_row(viewport_width: f32, box_size: f32, spacing: f32) -> usize {
    let fit = ((viewport_width + spacing) / (box_size + spacing)).floor();
    if fit.is_finite() && fit >= 1.0 {
        fit as usize
    } else {
        1
    }
}

/// Row-wrapped grid with each row centred using its own item count
pub fn grid_layout(count: usize, spec: &GridSpec, viewport_width: f32) -> Vec<Rect> {
    let per_row = items_per_row(viewport_width, spec.box_size, spec.spacing);
    let rows = count.div_ceil(per_row);

    let mut rects = Vec::with_capacity(count);
    for row in 0..rows {
        let in_row = per_row.min(count - row * per_row);
        let row_width = in_row as f32 * spec.box_size + (in_row - 1) as f32 * spec.spacing;
        let start_x = (viewport_width - row_width) / 2.0;
        let y = spec.top + row as f32 * spec.row_pitch;

        for col in 0..in_row {
            let x = start_x + col as f32 * (spec.box_size + spec.spacing);
            rects.push(Rect::square(Vec2::new(x, y), spec.box_size));
        }
    }
    rects
}

/// Lay out a list of asset keys as hit regions, in order
pub fn layout_options<S: AsRef<str>>(
    keys: &[S],
    spec: &GridSpec,
    viewport_width: f32,
) -> Vec<HitRegion> {
    grid_layout(keys.len(), spec, viewport_width)
        .into_iter()
        .zip(keys)
        .enumerate()
        .map(|(id, (rect, key))| HitRegion {
            id,
            asset_key: key.as_ref().to_string(),
            rect,
        })
        .collect()
}

/// The Start button, centred horizontally
pub fn start_button(viewport_width: f32) -> Rect {
    Rect::new(
        viewport_width / 2.0 - START_BUTTON_WIDTH / 2.0,
        START_BUTTON_TOP,
        START_BUTTON_WIDTH,
        START_BUTTON_HEIGHT,
    )
}
