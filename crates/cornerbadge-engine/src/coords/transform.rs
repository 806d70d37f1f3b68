use super::Vec2;

/// 2D affine transform.
///
/// Maps `p` to `(a·x + c·y + e, b·x + d·y + f)`.
///
/// Composition follows canvas semantics: `outer.then(inner)` produces a
/// transform that applies `inner` first and `outer` last, so pushing
/// `rotate(θ)` and then `translate(t)` onto a draw list moves the content by
/// `t` inside the rotated frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    #[inline]
    pub const fn identity() -> Self {
        Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 }
    }

    #[inline]
    pub const fn translate(dx: f32, dy: f32) -> Self {
        Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: dx, f: dy }
    }

    /// Rotation around the origin. Positive degrees turn clockwise on screen.
    pub fn rotate_deg(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self { a: cos, b: sin, c: -sin, d: cos, e: 0.0, f: 0.0 }
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Returns `self ∘ inner`: `inner` is applied first.
    pub fn then(self, inner: Transform) -> Transform {
        Transform {
            a: self.a * inner.a + self.c * inner.b,
            b: self.b * inner.a + self.d * inner.b,
            c: self.a * inner.c + self.c * inner.d,
            d: self.b * inner.c + self.d * inner.d,
            e: self.a * inner.e + self.c * inner.f + self.e,
            f: self.b * inner.e + self.d * inner.f + self.f,
        }
    }

    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Inverse transform, or `None` if the matrix is singular.
    pub fn inverse(&self) -> Option<Transform> {
        let det = self.a * self.d - self.b * self.c;
        if det.abs() <= f32::EPSILON || !det.is_finite() {
            return None;
        }
        let inv = 1.0 / det;
        Some(Transform {
            a: self.d * inv,
            b: -self.b * inv,
            c: -self.c * inv,
            d: self.a * inv,
            e: (self.c * self.f - self.d * self.e) * inv,
            f: (self.b * self.e - self.a * self.f) * inv,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn positive_rotation_is_clockwise_on_screen() {
        // +X axis turns toward +Y (down) for a positive angle.
        let p = Transform::rotate_deg(90.0).apply(Vec2::new(1.0, 0.0));
        assert!(close(p, Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn then_applies_inner_first() {
        let t = Transform::rotate_deg(90.0).then(Transform::translate(10.0, 0.0));
        // translate → (10, 0), then rotate → (0, 10)
        assert!(close(t.apply(Vec2::zero()), Vec2::new(0.0, 10.0)));
    }

    #[test]
    fn inverse_round_trips() {
        let t = Transform::rotate_deg(-45.0).then(Transform::translate(-12.0, 44.0));
        let inv = t.inverse().unwrap();
        let p = Vec2::new(3.5, -7.25);
        assert!(close(inv.apply(t.apply(p)), p));
        assert!(inv.then(t).apply(p).x.is_finite());
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let t = Transform { a: 0.0, b: 0.0, c: 0.0, d: 0.0, e: 1.0, f: 1.0 };
        assert!(t.inverse().is_none());
    }
}
