use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from a top-left corner and a size
    pub fn from_corner_size(corner: Vec2, size: Vec2) -> Self {
        Self::new(corner, corner + size)
    }

    /// Strict overlap: boxes that only share an edge do not touch
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_at(x: f32, y: f32) -> Aabb {
        Aabb::from_corner_size(Vec2::new(x, y), Vec2::ONE)
    }

    #[test]
    fn test_overlapping_boxes() {
        let a = Aabb::from_corner_size(Vec2::ZERO, Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&unit_at(5.0, 5.0)));
        assert!(unit_at(5.0, 5.0).overlaps(&a));
    }

    #[test]
    fn test_shared_edge_is_not_overlap() {
        let a = unit_at(0.0, 0.0);
        assert!(!a.overlaps(&unit_at(1.0, 0.0)));
        assert!(!a.overlaps(&unit_at(0.0, 1.0)));
    }

    #[test]
    fn test_separated_on_one_axis() {
        let tall = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 100.0));
        assert!(!tall.overlaps(&unit_at(3.0, 50.0)));
        assert!(tall.overlaps(&unit_at(1.5, 50.0)));
    }
}
