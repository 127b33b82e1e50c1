//! Pairwise overlap detection.
//!
//! Direct O(n^2) sweep; body counts here are in the tens. Detection never
//! touches the bodies. Hosts that want to flag colliding bodies call
//! [`mark_collisions`] with the reported pairs.

use super::states::{Body, BodyId};

/// Two distinct overlapping bodies, reported once with `a < b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollisionPair {
    pub a: BodyId,
    pub b: BodyId,
}

impl CollisionPair {
    /// Normalised pair; `None` for a self-pair
    pub fn new(x: BodyId, y: BodyId) -> Option<Self> {
        match x.cmp(&y) {
            std::cmp::Ordering::Less => Some(Self { a: x, b: y }),
            std::cmp::Ordering::Greater => Some(Self { a: y, b: x }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.a == id || self.b == id
    }
}

/// Whether the circles of `a` and `b` overlap. Always false for the same body.
pub fn is_colliding(a: &Body, b: &Body) -> bool {
    if a.id == b.id {
        return false;
    }
    a.distance_to(b) < a.radius + b.radius
}

/// Every overlapping unordered pair in `bodies`, in index order
pub fn detect_collisions(bodies: &[Body]) -> Vec<CollisionPair> {
    let mut pairs = Vec::new();
    for (i, bi) in bodies.iter().enumerate() {
        for bj in &bodies[i + 1..] {
            if is_colliding(bi, bj) {
                if let Some(pair) = CollisionPair::new(bi.id, bj.id) {
                    pairs.push(pair);
                }
            }
        }
    }
    pairs
}

/// Set `marked` on both members of every pair. Marks are never cleared here.
pub fn mark_collisions(bodies: &mut [Body], pairs: &[CollisionPair]) {
    for body in bodies.iter_mut() {
        if pairs.iter().any(|p| p.contains(body.id)) {
            body.marked = true;
        }
    }
}
