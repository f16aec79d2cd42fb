use super::config::{RevealConfig, RootMargin};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlap of two boxes. Boxes that only share an edge still intersect,
    /// with zero area.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = (self.x + self.width).min(other.x + other.width);
        let bottom = (self.y + self.height).min(other.y + other.height);
        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

impl RootMargin {
    /// The root box grown (or shrunk, for negative lengths) by this margin.
    pub fn apply(&self, root: &Rect) -> Rect {
        let top = self.top.resolve(root.height);
        let right = self.right.resolve(root.width);
        let bottom = self.bottom.resolve(root.height);
        let left = self.left.resolve(root.width);
        Rect::new(
            root.x - left,
            root.y - top,
            root.width + left + right,
            root.height + top + bottom,
        )
    }
}

/// Fraction of `target` inside the margin-adjusted `root`, or `None` when they
/// do not touch at all.
pub fn visible_ratio(target: &Rect, root: &Rect, margin: &RootMargin) -> Option<f64> {
    let root = margin.apply(root);
    if root.width < 0.0 || root.height < 0.0 {
        return None;
    }
    let overlap = target.intersection(&root)?;
    let area = target.area();
    if area == 0.0 {
        return Some(1.0);
    }
    Some(overlap.area() / area)
}

// Browsers report ratios with float noise around the threshold itself
const RATIO_EPSILON: f64 = 1e-6;

/// Whether an intersection report qualifies as entering. Intersecting below
/// the threshold does not count.
pub fn meets_threshold(intersecting: bool, ratio: f64, threshold: f64) -> bool {
    intersecting && ratio + RATIO_EPSILON >= threshold
}

pub fn crosses_threshold(target: &Rect, root: &Rect, config: &RevealConfig) -> bool {
    visible_ratio(target, root, &config.root_margin)
        .map_or(false, |ratio| meets_threshold(true, ratio, config.threshold))
}
