use crate::rigid_body::{Body, Vec2};

/// Overlap between two bodies; `normal` points from the first to the second
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub normal: Vec2,
    pub depth: f32,
}

pub(super) fn contact(a: &Body, b: &Body) -> Option<Contact> {
    if a.geometry.is_circle() && b.geometry.is_circle() {
        circle_contact(a, b)
    } else {
        aabb_contact(a, b)
    }
}

fn circle_contact(a: &Body, b: &Body) -> Option<Contact> {
    let (ra, _) = a.half_extents();
    let (rb, _) = b.half_extents();
    let delta = b.pos - a.pos;
    let dist2 = delta.length_squared();
    let reach = ra + rb;
    if dist2 >= reach * reach {
        return None;
    }

    let dist = dist2.sqrt();
    let normal = if dist > 0.0001 {
        delta * (1.0 / dist)
    } else {
        // Concentric: push straight down.
        Vec2::new(0.0, 1.0)
    };
    Some(Contact {
        normal,
        depth: reach - dist,
    })
}

fn aabb_contact(a: &Body, b: &Body) -> Option<Contact> {
    let ba = a.aabb();
    let bb = b.aabb();
    if !ba.overlaps(&bb) {
        return None;
    }

    let overlap_x = ba.max.x.min(bb.max.x) - ba.min.x.max(bb.min.x);
    let overlap_y = ba.max.y.min(bb.max.y) - ba.min.y.max(bb.min.y);
    let delta = b.pos - a.pos;

    if overlap_x < overlap_y {
        let sign = if delta.x < 0.0 { -1.0 } else { 1.0 };
        Some(Contact {
            normal: Vec2::new(sign, 0.0),
            depth: overlap_x,
        })
    } else {
        let sign = if delta.y < 0.0 { -1.0 } else { 1.0 };
        Some(Contact {
            normal: Vec2::new(0.0, sign),
            depth: overlap_y,
        })
    }
}

/// Separate and bounce a pair. Returns the approach speed along the normal
/// (0 when the bodies were already moving apart).
pub(super) fn resolve(a: &mut Body, b: &mut Body, c: &Contact) -> f32 {
    let ia = a.inverse_mass();
    let ib = b.inverse_mass();
    let inv_sum = ia + ib;
    if inv_sum <= 0.0 {
        return 0.0;
    }

    // Positional correction, split by inverse mass.
    a.pos -= c.normal * (c.depth * ia / inv_sum);
    b.pos += c.normal * (c.depth * ib / inv_sum);

    let rel = b.velocity - a.velocity;
    let vn = rel.dot(c.normal);
    if vn >= 0.0 {
        return 0.0;
    }

    let e = a.restitution.max(b.restitution);
    let j = -(1.0 + e) * vn / inv_sum;
    a.velocity -= c.normal * (j * ia);
    b.velocity += c.normal * (j * ib);

    -vn
}
