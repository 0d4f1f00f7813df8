use crate::rigid_body::{Aabb, Vec2, WrapRegion};

/// New position for a body whose bounds left the region, `None` while any
/// part of it is still inside. The body re-enters with its trailing edge on
/// the opposite border.
pub fn wrap_position(pos: Vec2, bounds: Aabb, region: &WrapRegion) -> Option<Vec2> {
    let mut next = pos;
    let mut wrapped = false;

    if bounds.min.x > region.max.x {
        next.x = region.min.x - (bounds.max.x - pos.x);
        wrapped = true;
    } else if bounds.max.x < region.min.x {
        next.x = region.max.x - (bounds.min.x - pos.x);
        wrapped = true;
    }

    if bounds.min.y > region.max.y {
        next.y = region.min.y - (bounds.max.y - pos.y);
        wrapped = true;
    } else if bounds.max.y < region.min.y {
        next.y = region.max.y - (bounds.min.y - pos.y);
        wrapped = true;
    }

    if wrapped {
        Some(next)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds_at(pos: Vec2, half: f32) -> Aabb {
        Aabb {
            min: Vec2::new(pos.x - half, pos.y - half),
            max: Vec2::new(pos.x + half, pos.y + half),
        }
    }

    #[test]
    fn inside_or_straddling_does_not_wrap() {
        let region = WrapRegion::canvas(800.0, 600.0);
        let pos = Vec2::new(795.0, 300.0);
        assert_eq!(wrap_position(pos, bounds_at(pos, 10.0), &region), None);
    }

    #[test]
    fn leaving_right_enters_from_left() {
        let region = WrapRegion::canvas(800.0, 600.0);
        let pos = Vec2::new(811.0, 300.0);
        let next = wrap_position(pos, bounds_at(pos, 10.0), &region).unwrap();
        assert_eq!(next, Vec2::new(-10.0, 300.0));
    }

    #[test]
    fn leaving_bottom_enters_from_top_of_loop_region() {
        let region = WrapRegion::new(Vec2::new(100.0, 100.0), Vec2::new(250.0, 250.0));
        let pos = Vec2::new(150.0, 256.0);
        let next = wrap_position(pos, bounds_at(pos, 5.0), &region).unwrap();
        assert_eq!(next, Vec2::new(150.0, 95.0));
    }

    #[test]
    fn leaving_left_enters_from_right() {
        let region = WrapRegion::canvas(800.0, 600.0);
        let pos = Vec2::new(-20.0, 300.0);
        let next = wrap_position(pos, bounds_at(pos, 10.0), &region).unwrap();
        assert_eq!(next, Vec2::new(810.0, 300.0));
    }
}
