//! Static boundary walls along the container edges.

use crate::core::ContainerMetrics;
use crate::domain::WallOptions;
use crate::systems::body::{Body, BodyOptions};

/// Thickness of every wall, in container units
pub const WALL_THICKNESS: f32 = 50.0;

/// Build the enabled walls, in top, bottom, left, right order.
///
/// Walls are centred on the container edges, so half of each wall sits
/// outside the visible area.
pub fn make_walls(bounds: &ContainerMetrics, options: &WallOptions) -> Vec<Body> {
    let (w, h) = (bounds.width, bounds.height);
    let mut walls = Vec::with_capacity(options.count());

    if options.top {
        walls.push(Body::rectangle(w / 2.0, 0.0, w, WALL_THICKNESS, BodyOptions::fixed().labelled("wall-top")));
    }
    if options.bottom {
        walls.push(Body::rectangle(w / 2.0, h, w, WALL_THICKNESS, BodyOptions::fixed().labelled("wall-bottom")));
    }
    if options.left {
        walls.push(Body::rectangle(0.0, h / 2.0, WALL_THICKNESS, h, BodyOptions::fixed().labelled("wall-left")));
    }
    if options.right {
        walls.push(Body::rectangle(w, h / 2.0, WALL_THICKNESS, h, BodyOptions::fixed().labelled("wall-right")));
    }

    walls
}
