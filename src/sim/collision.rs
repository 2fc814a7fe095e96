//! Collision detection for axis-aligned boxes
//!
//! Everything on the board is a rectangle. Pipe checks use forgiving hitboxes:
//! the bird and the pipe bodies are both shrunk by the tuning margin, so
//! grazing a pipe lip does not end the run.

use glam::Vec2;

use crate::consts::*;

/// Axis-aligned rectangle in board coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            left: x,
            top: y,
            right: x + w,
            bottom: y + h,
        }
    }

    /// Shrink every edge by `margin`
    pub fn inset(&self, margin: f32) -> Self {
        Self {
            left: self.left + margin,
            top: self.top + margin,
            right: self.right - margin,
            bottom: self.bottom - margin,
        }
    }

    /// Strict overlap; touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right > other.left
            && self.left < other.right
            && self.bottom > other.top
            && self.top < other.bottom
    }
}

/// Full bounding box of the bird at height `y`
#[inline]
pub fn bird_rect(y: f32, size: f32) -> Rect {
    Rect::new(BIRD_X, y, size, size)
}

/// Bounding box of a coin at `pos` (top-left corner)
#[inline]
pub fn coin_rect(pos: Vec2) -> Rect {
    Rect::new(pos.x, pos.y, COIN_SIZE, COIN_SIZE)
}

/// Check whether the bird hits either half of a pipe pair
///
/// `bird` is the bird's full box; both it and the pipe are inset by `margin`.
/// The bird is safe when it is horizontally clear of the pipe or sits inside
/// the (widened) gap.
pub fn pipe_hits_bird(bird: &Rect, pipe_x: f32, gap_top: f32, margin: f32) -> bool {
    let bird = bird.inset(margin);
    let pipe_left = pipe_x + margin;
    let pipe_right = pipe_x + PIPE_WIDTH - margin;

    let in_x_range = bird.right > pipe_left && bird.left < pipe_right;
    if !in_x_range {
        return false;
    }

    let gap_top_edge = gap_top - margin;
    let gap_bottom_edge = gap_top + PIPE_GAP + margin;
    bird.top < gap_top_edge || bird.bottom > gap_bottom_edge
}

/// A pipe counts as cleared once its right edge is left of the bird's left edge
#[inline]
pub fn pipe_cleared(pipe_x: f32) -> bool {
    pipe_x + PIPE_WIDTH < BIRD_X
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        // Shared edge only
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_inset() {
        let r = Rect::new(10.0, 20.0, 50.0, 50.0).inset(5.0);
        assert_eq!(r, Rect::new(15.0, 25.0, 40.0, 40.0));
    }

    #[test]
    fn test_bird_inside_gap_is_safe() {
        // Gap spans 200..350, bird spans 250..300
        let bird = bird_rect(250.0, BIRD_SIZE);
        assert!(!pipe_hits_bird(&bird, BIRD_X, 200.0, 5.0));
    }

    #[test]
    fn test_bird_above_gap_hits() {
        let bird = bird_rect(100.0, BIRD_SIZE);
        assert!(pipe_hits_bird(&bird, BIRD_X, 200.0, 5.0));
    }

    #[test]
    fn test_bird_below_gap_hits() {
        let bird = bird_rect(330.0, BIRD_SIZE);
        assert!(pipe_hits_bird(&bird, BIRD_X, 200.0, 5.0));
    }

    #[test]
    fn test_margin_forgives_grazes() {
        // Bird top 8px above the gap: within 2 * margin forgiveness
        let bird = bird_rect(192.0, BIRD_SIZE);
        assert!(!pipe_hits_bird(&bird, BIRD_X, 200.0, 5.0));
        assert!(pipe_hits_bird(&bird, BIRD_X, 200.0, 0.0));
    }

    #[test]
    fn test_horizontally_clear_pipe_never_hits() {
        let bird = bird_rect(0.0, BIRD_SIZE);
        // Pipe well to the right of the bird
        assert!(!pipe_hits_bird(&bird, 300.0, 200.0, 5.0));
        // Pipe already behind the bird
        assert!(!pipe_hits_bird(&bird, -20.0, 200.0, 5.0));
    }

    #[test]
    fn test_pipe_cleared() {
        assert!(!pipe_cleared(BIRD_X - PIPE_WIDTH));
        assert!(pipe_cleared(BIRD_X - PIPE_WIDTH - 0.5));
    }

    #[test]
    fn test_coin_overlap() {
        let bird = bird_rect(100.0, BIRD_SIZE);
        assert!(bird.overlaps(&coin_rect(Vec2::new(80.0, 120.0))));
        assert!(!bird.overlaps(&coin_rect(Vec2::new(100.0, 120.0))));
    }
}
