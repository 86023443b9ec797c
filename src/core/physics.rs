use super::constants::{
    CURSOR_PUSH_STRENGTH, CURSOR_REPEL_RADIUS_PX, EDGE_PUSH_STRENGTH, EDGE_THRESHOLD_PX,
};
use glam::Vec2;

/// Axis-aligned client rectangle in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    #[inline]
    pub fn translated(&self, delta: Vec2) -> Rect {
        Rect::new(self.left + delta.x, self.top + delta.y, self.width, self.height)
    }

    pub fn is_within(&self, viewport: Vec2) -> bool {
        self.left >= 0.0
            && self.top >= 0.0
            && self.right() <= viewport.x
            && self.bottom() <= viewport.y
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RepulsionParams {
    pub cursor_radius: f32,
    pub cursor_push: f32,
    pub edge_threshold: f32,
    pub edge_push: f32,
}

impl Default for RepulsionParams {
    fn default() -> Self {
        Self {
            cursor_radius: CURSOR_REPEL_RADIUS_PX,
            cursor_push: CURSOR_PUSH_STRENGTH,
            edge_threshold: EDGE_THRESHOLD_PX,
            edge_push: EDGE_PUSH_STRENGTH,
        }
    }
}

/// Push away from the cursor, linear falloff to zero at `cursor_radius`.
pub fn cursor_force(center: Vec2, cursor: Vec2, params: &RepulsionParams) -> Vec2 {
    let away = center - cursor;
    let dist = away.length();
    if dist >= params.cursor_radius {
        return Vec2::ZERO;
    }
    let strength = (params.cursor_radius - dist) / params.cursor_radius;
    // cursor dead on the center: atan2(0, 0) points along +x, so escape to -x
    let dir = away.try_normalize().unwrap_or(Vec2::NEG_X);
    dir * params.cursor_push * strength
}

/// Push back from every viewport edge the rectangle is closer than `edge_threshold` to.
pub fn edge_force(rect: &Rect, viewport: Vec2, params: &RepulsionParams) -> Vec2 {
    let t = params.edge_threshold;
    let mut f = Vec2::ZERO;
    if rect.left < t {
        f.x += (t - rect.left) / t * params.edge_push;
    }
    if rect.right() > viewport.x - t {
        f.x -= (rect.right() - (viewport.x - t)) / t * params.edge_push;
    }
    if rect.top < t {
        f.y += (t - rect.top) / t * params.edge_push;
    }
    if rect.bottom() > viewport.y - t {
        f.y -= (rect.bottom() - (viewport.y - t)) / t * params.edge_push;
    }
    f
}

// Allowed translation range along one axis; pins to the low edge when the
// element is larger than the viewport.
#[inline]
fn clamp_axis(delta: f32, low: f32, high: f32, extent: f32) -> f32 {
    let min_d = -low;
    let max_d = extent - high;
    if max_d < min_d {
        min_d
    } else {
        delta.clamp(min_d, max_d)
    }
}

/// The "no" button: accumulates a translation offset frame by frame.
#[derive(Clone, Debug, Default)]
pub struct EvasiveButton {
    offset: Vec2,
    pub params: RepulsionParams,
}

impl EvasiveButton {
    pub fn new(params: RepulsionParams) -> Self {
        Self {
            offset: Vec2::ZERO,
            params,
        }
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
    }

    /// Advance one frame.
    ///
    /// `rect` is the button's current client rect (already including the
    /// offset applied last frame). Returns the new total offset; the moved
    /// rectangle is kept inside `[0, viewport]`.
    pub fn step(&mut self, rect: Rect, cursor: Option<Vec2>, viewport: Vec2) -> Vec2 {
        let mut force = edge_force(&rect, viewport, &self.params);
        if let Some(c) = cursor {
            force += cursor_force(rect.center(), c, &self.params);
        }
        let delta = Vec2::new(
            clamp_axis(force.x, rect.left, rect.right(), viewport.x),
            clamp_axis(force.y, rect.top, rect.bottom(), viewport.y),
        );
        self.offset += delta;
        self.offset
    }
}

/// CSS `transform` value for an offset.
pub fn translate_css(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}
