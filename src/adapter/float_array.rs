use crate::{
    error::VectorError,
    handle::{shared, Shared},
    vector3::{Backing, Vector3},
};
use std::fmt;

/// [`Vector3`] backed by a plain `[f32; 3]`.
///
/// The representation of choice for values parsed out of files or typed in by
/// a user, where no math library is involved yet.
#[derive(Clone)]
pub struct FloatArrayVector3 {
    source: Shared<[f32; 3]>,
}

impl FloatArrayVector3 {
    /// Allocates a fresh backing triple holding the given components.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self::wrap(shared([x, y, z]))
    }

    /// Wraps an existing handle without copying the triple behind it.
    pub fn wrap(source: Shared<[f32; 3]>) -> Self {
        Self { source }
    }

    /// Copies the first three components out of `components`.
    ///
    /// Extra components are ignored; fewer than three is a violation of the
    /// backing-storage contract and is rejected here rather than surfacing as
    /// an out-of-bounds read later.
    pub fn from_slice(components: &[f32]) -> Result<Self, VectorError> {
        match *components {
            [x, y, z, ..] => Ok(Self::new(x, y, z)),
            _ => Err(VectorError::TooFewComponents {
                found: components.len(),
            }),
        }
    }

    /// The wrapped handle, for APIs that require the raw triple.
    pub fn source(&self) -> &Shared<[f32; 3]> {
        &self.source
    }

    /// Read the backing triple. Optionally returning a value.
    pub fn read<T>(&self, cb: impl FnOnce(&[f32; 3]) -> T) -> T {
        let source = self.source.read();
        cb(&source)
    }

    /// Update the backing triple under a single lock acquisition.
    pub fn modify<T>(&self, cb: impl FnOnce(&mut [f32; 3]) -> T) -> T {
        let mut source = self.source.write();
        cb(&mut source)
    }

    /// Converts any [`Vector3`] into a raw-triple handle, sharing the existing
    /// handle when `v` already wraps one and allocating a copy otherwise.
    pub fn convert(v: &dyn Vector3) -> Shared<[f32; 3]> {
        match v.backing() {
            Backing::FloatArray(source) => source.clone(),
            _ => shared([v.xf(), v.yf(), v.zf()]),
        }
    }
}

impl Vector3 for FloatArrayVector3 {
    fn xf(&self) -> f32 {
        self.source.read()[0]
    }
    fn yf(&self) -> f32 {
        self.source.read()[1]
    }
    fn zf(&self) -> f32 {
        self.source.read()[2]
    }

    fn set_x(&self, value: f32) {
        self.source.write()[0] = value;
    }
    fn set_y(&self, value: f32) {
        self.source.write()[1] = value;
    }
    fn set_z(&self, value: f32) {
        self.source.write()[2] = value;
    }

    fn backing(&self) -> Backing<'_> {
        Backing::FloatArray(&self.source)
    }
}

impl fmt::Debug for FloatArrayVector3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let source = self.source.read();
        f.debug_tuple("FloatArrayVector3")
            .field(&source[0])
            .field(&source[1])
            .field(&source[2])
            .finish()
    }
}
