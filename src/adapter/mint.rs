use crate::{
    handle::{shared, Shared},
    vector3::{Backing, Vector3},
};
use std::fmt;

/// [`Vector3`] backed by an interchange [`mint::Vector3`].
///
/// `mint` is the representation handed across linear-algebra crate boundaries;
/// `vek` converts to and from it directly, so this adapter is the bridge for
/// values produced by libraries this crate does not otherwise know about.
#[derive(Clone)]
pub struct MintVector3 {
    source: Shared<mint::Vector3<f32>>,
}

impl MintVector3 {
    /// Allocates a fresh backing vector holding the given components.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self::wrap(shared(mint::Vector3 { x, y, z }))
    }

    /// Wraps an existing handle without copying the vector behind it.
    pub fn wrap(source: Shared<mint::Vector3<f32>>) -> Self {
        Self { source }
    }

    /// The wrapped handle, for APIs that require the native type.
    pub fn source(&self) -> &Shared<mint::Vector3<f32>> {
        &self.source
    }

    /// Read the backing vector. Optionally returning a value.
    pub fn read<T>(&self, cb: impl FnOnce(&mint::Vector3<f32>) -> T) -> T {
        let source = self.source.read();
        cb(&source)
    }

    /// Update the backing vector under a single lock acquisition.
    pub fn modify<T>(&self, cb: impl FnOnce(&mut mint::Vector3<f32>) -> T) -> T {
        let mut source = self.source.write();
        cb(&mut source)
    }

    /// Converts any [`Vector3`] into a `mint` handle, sharing the existing
    /// handle when `v` already wraps one and allocating a copy otherwise.
    pub fn convert(v: &dyn Vector3) -> Shared<mint::Vector3<f32>> {
        match v.backing() {
            Backing::Mint(source) => source.clone(),
            _ => shared(mint::Vector3 {
                x: v.xf(),
                y: v.yf(),
                z: v.zf(),
            }),
        }
    }
}

impl Vector3 for MintVector3 {
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
        Backing::Mint(&self.source)
    }
}

impl fmt::Debug for MintVector3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let source = self.source.read();
        f.debug_tuple("MintVector3")
            .field(&source.x)
            .field(&source.y)
            .field(&source.z)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VekVector3;
    use std::sync::Arc;

    #[test]
    fn round_trip() {
        let v = MintVector3::new(0.25, -8.0, 1e30);
        assert_eq!(v.to_array(), [0.25, -8.0, 1e30]);
    }

    #[test]
    fn convert_is_zero_copy_for_mint_sources() {
        let v = MintVector3::new(1.0, 2.0, 3.0);
        let converted = MintVector3::convert(&v);
        assert!(Arc::ptr_eq(&converted, v.source()));
    }

    #[test]
    fn convert_copies_vek_sources() {
        let v = VekVector3::new(1.0, 2.0, 3.0);
        let converted = MintVector3::convert(&v);
        assert_eq!(*converted.read(), mint::Vector3 { x: 1.0, y: 2.0, z: 3.0 });
    }

    #[test]
    fn vek_interop_goes_through_mint() {
        let v = MintVector3::new(3.0, 4.0, 0.0);
        let native: vek::Vec3<f32> = v.read(|source| vek::Vec3::from(*source));
        assert_eq!(native.magnitude(), 5.0);
    }
}
