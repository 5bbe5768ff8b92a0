//! Render geometry
//!
//! Turns simulation snapshots into plain vertex lists. No GPU code lives here;
//! whatever draws the frame uploads these with `bytemuck::cast_slice`.

pub mod shapes;
pub mod vertex;

pub use shapes::{FrameGeometry, bullet_quad, frame_vertices, ship_outline};
pub use vertex::{Vertex, colors};
