use crate::{
    handle::{shared, Shared},
    vector3::{Backing, Vector3},
};
use std::fmt;
use vek::Vec3;

/// [`Vector3`] backed by an engine-native [`vek::Vec3`].
///
/// The adapter holds a [`Shared`] handle, never a private copy: a render loop
/// that keeps its own handle to the same vector will see writes made through
/// the adapter, and vice versa. Cloning the adapter clones the handle.
#[derive(Clone)]
pub struct VekVector3 {
    source: Shared<Vec3<f32>>,
}

impl VekVector3 {
    /// Allocates a fresh backing vector holding the given components.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self::wrap(shared(Vec3::new(x, y, z)))
    }

    /// Wraps an existing handle without copying the vector behind it.
    pub fn wrap(source: Shared<Vec3<f32>>) -> Self {
        Self { source }
    }

    /// The wrapped handle, for APIs that require the native type.
    pub fn source(&self) -> &Shared<Vec3<f32>> {
        &self.source
    }

    /// Read the backing vector. Optionally returning a value.
    pub fn read<T>(&self, cb: impl FnOnce(&Vec3<f32>) -> T) -> T {
        let source = self.source.read();
        cb(&source)
    }

    /// Update the backing vector under a single lock acquisition, so
    /// multi-component updates are seen whole by other holders.
    pub fn modify<T>(&self, cb: impl FnOnce(&mut Vec3<f32>) -> T) -> T {
        let mut source = self.source.write();
        cb(&mut source)
    }

    /// Converts any [`Vector3`] into a `vek` handle.
    ///
    /// If `v` already wraps a `vek` vector this returns the same handle with
    /// no new allocation; otherwise it allocates a fresh vector from the three
    /// components.
    pub fn convert(v: &dyn Vector3) -> Shared<Vec3<f32>> {
        match v.backing() {
            Backing::Vek(source) => source.clone(),
            _ => shared(Vec3::new(v.xf(), v.yf(), v.zf())),
        }
    }
}

impl Vector3 for VekVector3 {
    fn xf(&self) -> f32 {
        self.source.read().x
    }
    fn yf(&self) -> f32 {
        self.source.read().y
    }
    fn zf(&self) -> f32 {
        self.source.read().z
    }

    fn set_x(&self, value: f32) {
        self.source.write().x = value;
    }
    fn set_y(&self, value: f32) {
        self.source.write().y = value;
    }
    fn set_z(&self, value: f32) {
        self.source.write().z = value;
    }

    fn backing(&self) -> Backing<'_> {
        Backing::Vek(&self.source)
    }
}

impl fmt::Debug for VekVector3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let source = self.source.read();
        f.debug_tuple("VekVector3")
            .field(&source.x)
            .field(&source.y)
            .field(&source.z)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FloatArrayVector3;
    use std::sync::Arc;

    #[test]
    fn round_trip_is_bit_exact() {
        let v = VekVector3::new(1.5, -0.0, f32::INFINITY);
        assert_eq!(v.xf().to_bits(), 1.5f32.to_bits());
        assert_eq!(v.yf().to_bits(), (-0.0f32).to_bits());
        assert_eq!(v.zf().to_bits(), f32::INFINITY.to_bits());

        // Quiet NaN with a distinctive payload survives bit-for-bit.
        let payload = f32::from_bits(0x7fc0_1234);
        let nan = VekVector3::new(payload, 0.0, 0.0);
        assert_eq!(nan.xf().to_bits(), 0x7fc0_1234);
    }

    #[test]
    fn setters_are_independent() {
        let v = VekVector3::new(1.0, 2.0, 3.0);
        v.set_y(9.5);
        assert_eq!(v.xf(), 1.0);
        assert_eq!(v.yf(), 9.5);
        assert_eq!(v.zf(), 3.0);
    }

    #[test]
    fn convert_is_zero_copy_for_vek_sources() {
        let v = VekVector3::new(1.0, 2.0, 3.0);
        let converted = VekVector3::convert(&v);
        assert!(Arc::ptr_eq(&converted, v.source()));
    }

    #[test]
    fn convert_copies_foreign_sources() {
        let v = FloatArrayVector3::new(1.0, 2.0, 3.0);
        let converted = VekVector3::convert(&v);
        assert_eq!(*converted.read(), Vec3::new(1.0, 2.0, 3.0));

        // Defensive copy: mutating the result leaves the input untouched.
        converted.write().x = 100.0;
        assert_eq!(v.xf(), 1.0);
    }

    #[test]
    fn double_channel_widens_and_narrows() {
        let v = VekVector3::new(1.5, 2.0, 3.0);
        assert_eq!(v.xd(), 1.5_f64);

        // f32 backing: a double gets narrowed on the way in.
        let precise = 1.000_000_000_1_f64;
        v.set_yd(precise);
        assert_eq!(v.yf(), precise as f32);
        assert_eq!(v.yd(), f64::from(precise as f32));
    }

    #[test]
    fn external_mutation_is_visible() {
        let v = VekVector3::new(0.0, 0.0, 0.0);
        v.source().write().z = 7.0;
        assert_eq!(v.zf(), 7.0);
    }

    #[test]
    fn modify_updates_all_components_under_one_lock() {
        let v = VekVector3::new(0.0, 0.0, 0.0);
        v.modify(|source| *source = Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(v.to_array(), [4.0, 5.0, 6.0]);
    }
}
