//! Progress ring drawn on a ratatui canvas

use ratatui::{
    style::Color,
    widgets::canvas::{Painter, Shape},
};

/// Sweep of the progress arc in degrees for the given remaining ratio
pub fn sweep_degrees(remaining_millis: u64, total_millis: u64) -> f64 {
    remaining_millis as f64 / total_millis.max(1) as f64 * 360.0
}

/// Canvas coordinates of the point `degrees` clockwise from 12 o'clock
pub fn point_on_ring(x: f64, y: f64, radius: f64, degrees: f64) -> (f64, f64) {
    let theta = degrees.to_radians();
    (x + radius * theta.sin(), y + radius * theta.cos())
}

/// Canvas bounds and ring radius for an area of `width` x `height` cells.
///
/// A terminal cell is about twice as tall as it is wide, so one row spans two
/// x units and the ring stays round.
pub fn ring_geometry(width: u16, height: u16) -> ([f64; 2], [f64; 2], f64) {
    let half_w = f64::from(width.max(1)) / 2.0;
    let half_h = f64::from(height.max(1));
    let radius = half_w.min(half_h) * 0.85;
    ([-half_w, half_w], [-half_h, half_h], radius)
}

/// Clockwise arc starting at 12 o'clock
#[derive(Debug, Clone)]
pub struct RingArc {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub sweep: f64,
    pub color: Color,
}

impl Shape for RingArc {
    fn draw(&self, painter: &mut Painter) {
        if self.sweep <= 0.0 {
            return;
        }
        // Step finely enough that neighbouring points share or touch a dot
        let steps = (self.sweep * self.radius.max(1.0)).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let degrees = self.sweep * i as f64 / steps as f64;
            let (px, py) = point_on_ring(self.x, self.y, self.radius, degrees);
            if let Some((cx, cy)) = painter.get_point(px, py) {
                painter.paint(cx, cy, self.color);
            }
        }
    }
}
