//! Line-batch float buffers and outline helpers

use crate::foundation::math::Vec3;
use crate::scene::graph::Aabb;
use crate::scene::mesh::FLOATS_PER_VERTEX;

/// One pooled batch of debug lines.
///
/// The buffer holds interleaved 6-float vertices. A batch with an empty
/// buffer is free; the owning pool's bookkeeping must agree.
#[derive(Debug, Default)]
pub struct LineBatch {
    data: Vec<f32>,
    lifetime: f32,
}

impl LineBatch {
    /// Clear the buffer and reserve room for exactly `vertex_count`
    /// vertices, keeping any previously allocated capacity.
    pub fn reset(&mut self, vertex_count: usize) {
        self.data.clear();
        self.data.reserve(vertex_count * FLOATS_PER_VERTEX);
    }

    /// Drop the contents, marking the batch free. Capacity is retained.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Append one interleaved vertex.
    pub fn push_vertex(&mut self, position: Vec3, color: Vec3) {
        self.data.extend_from_slice(&[
            position.x, position.y, position.z, color.x, color.y, color.z,
        ]);
    }

    /// Append raw floats verbatim.
    pub fn push_floats(&mut self, values: &[f32]) {
        self.data.extend_from_slice(values);
    }

    /// Buffer length in floats.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the batch holds no geometry (and is therefore free).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The interleaved float contents.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Remaining lifetime in frames; negative means expired.
    pub fn lifetime(&self) -> f32 {
        self.lifetime
    }

    /// Set the remaining lifetime.
    pub fn set_lifetime(&mut self, lifetime: f32) {
        self.lifetime = lifetime;
    }

    /// Burn one frame off the lifetime and return the new value.
    pub fn age_one_frame(&mut self) -> f32 {
        self.lifetime -= 1.0;
        self.lifetime
    }
}

/// Expand an AABB into its 12 edges as 6-float point pairs.
///
/// Each chunk is `[ax, ay, az, bx, by, bz]`, the input format of the raw
/// line-authoring path. 72 floats total.
pub fn aabb_outline_points(bounds: &Aabb) -> Vec<f32> {
    let (lo, hi) = (bounds.min, bounds.max);
    let corners = [
        Vec3::new(lo.x, lo.y, lo.z),
        Vec3::new(hi.x, lo.y, lo.z),
        Vec3::new(lo.x, hi.y, lo.z),
        Vec3::new(hi.x, hi.y, lo.z),
        Vec3::new(lo.x, lo.y, hi.z),
        Vec3::new(hi.x, lo.y, hi.z),
        Vec3::new(lo.x, hi.y, hi.z),
        Vec3::new(hi.x, hi.y, hi.z),
    ];
    const EDGES: [(usize, usize); 12] = [
        (0, 1),
        (0, 2),
        (1, 3),
        (2, 3),
        (4, 5),
        (4, 6),
        (5, 7),
        (6, 7),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];

    let mut points = Vec::with_capacity(EDGES.len() * FLOATS_PER_VERTEX);
    for (a, b) in EDGES {
        points.extend_from_slice(&[
            corners[a].x,
            corners[a].y,
            corners[a].z,
            corners[b].x,
            corners[b].y,
            corners[b].z,
        ]);
    }
    points
}

/// Point data for the reference ground grid.
///
/// `2 * (2 * half_extent + 1)` lines on the XZ plane with unit spacing; the
/// two lines through the origin stop at the origin so the axes stay
/// readable. Emitted as `[p0, color, p1, color]` runs, the layout the raw
/// line-authoring path consumes.
pub fn grid_line_points(half_extent: i32, color: Vec3) -> Vec<f32> {
    let extent = half_extent as f32;
    let line_count = 2 * (2 * half_extent + 1) as usize;
    let mut points = Vec::with_capacity(line_count * 2 * FLOATS_PER_VERTEX);

    let mut push_line = |p0: Vec3, p1: Vec3| {
        points.extend_from_slice(&[p0.x, p0.y, p0.z, color.x, color.y, color.z]);
        points.extend_from_slice(&[p1.x, p1.y, p1.z, color.x, color.y, color.z]);
    };

    for x in -half_extent..=half_extent {
        let x = x as f32;
        let end_z = if x == 0.0 { 0.0 } else { extent };
        push_line(Vec3::new(x, 0.0, -extent), Vec3::new(x, 0.0, end_z));
    }
    for z in -half_extent..=half_extent {
        let z = z as f32;
        let end_x = if z == 0.0 { 0.0 } else { extent };
        push_line(Vec3::new(-extent, 0.0, z), Vec3::new(end_x, 0.0, z));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_preserves_capacity() {
        let mut batch = LineBatch::default();
        batch.push_floats(&[0.0; 60]);
        let capacity = {
            batch.clear();
            batch.data.capacity()
        };
        assert!(capacity >= 60);

        batch.reset(10);
        assert!(batch.is_empty());
        assert!(batch.data.capacity() >= capacity);
    }

    #[test]
    fn test_push_vertex_interleaves_position_and_color() {
        let mut batch = LineBatch::default();
        batch.push_vertex(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(batch.data(), &[1.0, 2.0, 3.0, 0.0, 1.0, 0.0]);
        assert_eq!(batch.len(), 6);
    }

    #[test]
    fn test_lifetime_aging() {
        let mut batch = LineBatch::default();
        batch.set_lifetime(1.0);
        assert_eq!(batch.age_one_frame(), 0.0);
        assert_eq!(batch.age_one_frame(), -1.0);
        assert!(batch.lifetime() < 0.0);
    }

    #[test]
    fn test_aabb_outline_has_twelve_edges() {
        let bounds = Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let points = aabb_outline_points(&bounds);
        assert_eq!(points.len(), 12 * 6);

        // Every coordinate sits on the box surface.
        for value in &points {
            assert!(value.abs() <= 1.0);
        }
    }

    #[test]
    fn test_grid_center_lines_stop_at_origin() {
        let points = grid_line_points(5, Vec3::new(0.5, 0.5, 0.5));
        // 22 lines, two 6-float runs each.
        assert_eq!(points.len(), 22 * 12);

        // The x == 0 line runs from (0, 0, -5) to (0, 0, 0).
        let center = 5 * 12;
        assert_eq!(&points[center..center + 3], &[0.0, 0.0, -5.0]);
        assert_eq!(&points[center + 6..center + 9], &[0.0, 0.0, 0.0]);
    }
}
