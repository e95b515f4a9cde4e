use crate::{
    error::VectorError,
    handle::{shared, Shared},
    vector3::{Backing, Vector3},
};
use std::fmt;

/// [`Vector3`] backed by a double-precision `[f64; 3]`.
///
/// Producers that measure in physical units (stage positions, voxel spacings)
/// hand over doubles; this adapter keeps that precision in the backing storage
/// and only narrows at the `f32` capability surface. The `xd`/`set_xd` family
/// reads and writes losslessly.
#[derive(Clone)]
pub struct DoubleArrayVector3 {
    source: Shared<[f64; 3]>,
}

impl DoubleArrayVector3 {
    /// Allocates a fresh backing triple holding the given components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::wrap(shared([x, y, z]))
    }

    /// Wraps an existing handle without copying the triple behind it.
    pub fn wrap(source: Shared<[f64; 3]>) -> Self {
        Self { source }
    }

    /// Copies the first three components out of `components`, rejecting
    /// storage with fewer than three.
    pub fn from_slice(components: &[f64]) -> Result<Self, VectorError> {
        match *components {
            [x, y, z, ..] => Ok(Self::new(x, y, z)),
            _ => Err(VectorError::TooFewComponents {
                found: components.len(),
            }),
        }
    }

    /// The wrapped handle, for APIs that require the raw double triple.
    pub fn source(&self) -> &Shared<[f64; 3]> {
        &self.source
    }

    /// Read the backing triple. Optionally returning a value.
    pub fn read<T>(&self, cb: impl FnOnce(&[f64; 3]) -> T) -> T {
        let source = self.source.read();
        cb(&source)
    }

    /// Update the backing triple under a single lock acquisition.
    pub fn modify<T>(&self, cb: impl FnOnce(&mut [f64; 3]) -> T) -> T {
        let mut source = self.source.write();
        cb(&mut source)
    }

    /// Converts any [`Vector3`] into a double-triple handle.
    ///
    /// The copying path goes through the double-precision accessors, so
    /// converting from another double-backed value loses nothing.
    pub fn convert(v: &dyn Vector3) -> Shared<[f64; 3]> {
        match v.backing() {
            Backing::DoubleArray(source) => source.clone(),
            _ => shared([v.xd(), v.yd(), v.zd()]),
        }
    }
}

impl Vector3 for DoubleArrayVector3 {
    fn xf(&self) -> f32 {
        self.source.read()[0] as f32
    }
    fn yf(&self) -> f32 {
        self.source.read()[1] as f32
    }
    fn zf(&self) -> f32 {
        self.source.read()[2] as f32
    }

    fn set_x(&self, value: f32) {
        self.source.write()[0] = f64::from(value);
    }
    fn set_y(&self, value: f32) {
        self.source.write()[1] = f64::from(value);
    }
    fn set_z(&self, value: f32) {
        self.source.write()[2] = f64::from(value);
    }

    fn xd(&self) -> f64 {
        self.source.read()[0]
    }
    fn yd(&self) -> f64 {
        self.source.read()[1]
    }
    fn zd(&self) -> f64 {
        self.source.read()[2]
    }

    fn set_xd(&self, value: f64) {
        self.source.write()[0] = value;
    }
    fn set_yd(&self, value: f64) {
        self.source.write()[1] = value;
    }
    fn set_zd(&self, value: f64) {
        self.source.write()[2] = value;
    }

    fn backing(&self) -> Backing<'_> {
        Backing::DoubleArray(&self.source)
    }
}

impl fmt::Debug for DoubleArrayVector3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let source = self.source.read();
        f.debug_tuple("DoubleArrayVector3")
            .field(&source[0])
            .field(&source[1])
            .field(&source[2])
            .finish()
    }
}
