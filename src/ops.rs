//! Vector algebra layered on top of the [`Vector3`] capability set.
//!
//! Everything here goes through `xf`/`yf`/`zf` and the setters, so any backing
//! representation gets the same algorithms for free. The math itself is
//! delegated to [`vek`], the engine's math crate.

use crate::vector3::Vector3;
use vek::{Lerp, Vec3};

fn snapshot(v: &dyn Vector3) -> Vec3<f32> {
    Vec3::new(v.xf(), v.yf(), v.zf())
}

/// The dot product of two vectors.
pub fn dot(a: &dyn Vector3, b: &dyn Vector3) -> f32 {
    snapshot(a).dot(snapshot(b))
}

/// The cross product of two vectors.
pub fn cross(a: &dyn Vector3, b: &dyn Vector3) -> [f32; 3] {
    let res = snapshot(a).cross(snapshot(b));
    [res.x, res.y, res.z]
}

/// The Euclidean length of a vector.
pub fn length(v: &dyn Vector3) -> f32 {
    snapshot(v).magnitude()
}

/// The Euclidean distance between two vectors.
pub fn distance(a: &dyn Vector3, b: &dyn Vector3) -> f32 {
    (snapshot(a) - snapshot(b)).magnitude()
}

/// Linear interpolation from `a` (at `t == 0.0`) to `b` (at `t == 1.0`).
pub fn lerp(a: &dyn Vector3, b: &dyn Vector3, t: f32) -> [f32; 3] {
    let res = Lerp::lerp(snapshot(a), snapshot(b), t);
    [res.x, res.y, res.z]
}

/// The component-wise minimum of two vectors.
pub fn memberwise_min(a: &dyn Vector3, b: &dyn Vector3) -> [f32; 3] {
    [
        a.xf().min(b.xf()),
        a.yf().min(b.yf()),
        a.zf().min(b.zf()),
    ]
}

/// The component-wise maximum of two vectors.
pub fn memberwise_max(a: &dyn Vector3, b: &dyn Vector3) -> [f32; 3] {
    [
        a.xf().max(b.xf()),
        a.yf().max(b.yf()),
        a.zf().max(b.zf()),
    ]
}

/// Moves `v` in place by `delta`, through the setters, so every other holder
/// of the backing object sees the move.
pub fn translate(v: &dyn Vector3, delta: [f32; 3]) {
    v.set_x(v.xf() + delta[0]);
    v.set_y(v.yf() + delta[1]);
    v.set_z(v.zf() + delta[2]);
}

/// Scales `v` in place by `factor`.
pub fn scale(v: &dyn Vector3, factor: f32) {
    v.set_x(v.xf() * factor);
    v.set_y(v.yf() * factor);
    v.set_z(v.zf() * factor);
}

/// Whether two vectors hold bit-identical components.
///
/// Bitwise comparison makes NaN payloads compare equal to themselves and keeps
/// `0.0` distinct from `-0.0`, which is what conversion round-trip checks need.
pub fn equal_components(a: &dyn Vector3, b: &dyn Vector3) -> bool {
    a.xf().to_bits() == b.xf().to_bits()
        && a.yf().to_bits() == b.yf().to_bits()
        && a.zf().to_bits() == b.zf().to_bits()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DoubleArrayVector3, FloatArrayVector3, MintVector3, VekVector3};

    #[test]
    fn dot_and_cross_of_unit_axes() {
        let x = VekVector3::new(1.0, 0.0, 0.0);
        let y = FloatArrayVector3::new(0.0, 1.0, 0.0);
        assert_eq!(dot(&x, &y), 0.0);
        assert_eq!(cross(&x, &y), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn length_and_distance() {
        let v = MintVector3::new(3.0, 4.0, 0.0);
        assert_eq!(length(&v), 5.0);

        let origin = FloatArrayVector3::new(0.0, 0.0, 0.0);
        assert_eq!(distance(&v, &origin), 5.0);
    }

    #[test]
    fn lerp_midpoint() {
        let a = VekVector3::new(0.0, 0.0, 0.0);
        let b = VekVector3::new(2.0, 4.0, 6.0);
        assert_eq!(lerp(&a, &b, 0.5), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn memberwise_extrema() {
        let a = VekVector3::new(1.0, 5.0, -2.0);
        let b = FloatArrayVector3::new(3.0, 2.0, -7.0);
        assert_eq!(memberwise_min(&a, &b), [1.0, 2.0, -7.0]);
        assert_eq!(memberwise_max(&a, &b), [3.0, 5.0, -2.0]);
    }

    #[test]
    fn translate_and_scale_mutate_in_place() {
        let v = DoubleArrayVector3::new(1.0, 2.0, 3.0);
        translate(&v, [1.0, 1.0, 1.0]);
        scale(&v, 2.0);
        assert_eq!(v.to_array(), [4.0, 6.0, 8.0]);
    }

    #[test]
    fn equal_components_crosses_representations() {
        let a = VekVector3::new(1.0, -0.0, 3.0);
        let b = MintVector3::new(1.0, -0.0, 3.0);
        assert!(equal_components(&a, &b));

        let c = MintVector3::new(1.0, 0.0, 3.0);
        assert!(!equal_components(&a, &c));
    }
}
