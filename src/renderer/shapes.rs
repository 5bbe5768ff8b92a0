//! Shape generation for the ship and its bullets

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::rotate;
use crate::sim::FrameSnapshot;

/// Ship outline in units of ship size, relative to its centre (y down)
const SHIP_OUTLINE: [Vec2; 4] = [
    Vec2::new(0.0, -0.5), // nose
    Vec2::new(0.4, 0.5),  // bottom right
    Vec2::new(0.0, 0.2),  // notch
    Vec2::new(-0.4, 0.5), // bottom left
];

/// Closed line strip for the ship: nose, right, notch, left, nose
pub fn ship_outline(mid: Vec2, heading: f32, size: f32) -> [Vertex; 5] {
    let corner = |local: Vec2| {
        let p = mid + rotate(local * size, heading);
        Vertex::new(p.x, p.y, colors::SHIP)
    };
    let nose = corner(SHIP_OUTLINE[0]);
    [
        nose,
        corner(SHIP_OUTLINE[1]),
        corner(SHIP_OUTLINE[2]),
        corner(SHIP_OUTLINE[3]),
        nose,
    ]
}

/// Two triangles covering a bullet whose top-left corner is `pos`
pub fn bullet_quad(pos: Vec2, size: f32) -> [Vertex; 6] {
    let v = |x: f32, y: f32| Vertex::new(x, y, colors::BULLET);
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size, pos.y + size);
    [
        v(x0, y0),
        v(x1, y0),
        v(x1, y1),
        v(x0, y0),
        v(x1, y1),
        v(x0, y1),
    ]
}

/// Vertex lists for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameGeometry {
    /// Line strip
    pub ship: Vec<Vertex>,
    /// Triangle list
    pub bullets: Vec<Vertex>,
}

/// Build all geometry for a snapshot
pub fn frame_vertices(snapshot: &FrameSnapshot, ship_size: f32, bullet_size: f32) -> FrameGeometry {
    let mut bullets = Vec::with_capacity(snapshot.bullets.len() * 6);
    for bullet in &snapshot.bullets {
        bullets.extend_from_slice(&bullet_quad(bullet.pos, bullet_size));
    }
    FrameGeometry {
        ship: ship_outline(snapshot.mid, snapshot.heading, ship_size).to_vec(),
        bullets,
    }
}
