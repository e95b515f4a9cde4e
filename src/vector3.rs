use crate::handle::Shared;

/// The capability set every 3D-vector representation must satisfy.
///
/// Only scalar component access is required; vector algebra is layered on top
/// generically in [`crate::ops`], so a new backing representation never has to
/// re-implement algorithms.
///
/// Reads always reflect the current state of the backing object. There is no
/// caching: if the producer of the backing object mutates it, the next `xf()`
/// sees the new value. Writes through the setters are equally visible to every
/// other holder of the same backing object.
pub trait Vector3 {
    /// The current x component.
    fn xf(&self) -> f32;
    /// The current y component.
    fn yf(&self) -> f32;
    /// The current z component.
    fn zf(&self) -> f32;

    /// Overwrites the x component in place. NaN and infinities pass through
    /// untouched; validating inputs is the caller's job.
    fn set_x(&self, value: f32);
    /// Overwrites the y component in place.
    fn set_y(&self, value: f32);
    /// Overwrites the z component in place.
    fn set_z(&self, value: f32);

    /// A tagged view of the backing storage, used by the per-representation
    /// `convert` functions to take the zero-copy path when the value already
    /// wraps the target representation.
    fn backing(&self) -> Backing<'_>;

    /// The x component widened to double precision. Adapters with a
    /// double-precision backing override this to read losslessly.
    fn xd(&self) -> f64 {
        f64::from(self.xf())
    }
    /// The y component widened to double precision.
    fn yd(&self) -> f64 {
        f64::from(self.yf())
    }
    /// The z component widened to double precision.
    fn zd(&self) -> f64 {
        f64::from(self.zf())
    }

    /// Overwrites the x component from a double-precision value. The default
    /// narrows to `f32`; double-backed adapters override it losslessly.
    fn set_xd(&self, value: f64) {
        self.set_x(value as f32);
    }
    /// Overwrites the y component from a double-precision value.
    fn set_yd(&self, value: f64) {
        self.set_y(value as f32);
    }
    /// Overwrites the z component from a double-precision value.
    fn set_zd(&self, value: f64) {
        self.set_z(value as f32);
    }

    /// The component at dimension `dim` (0 = x, 1 = y, 2 = z).
    ///
    /// # Panics
    ///
    /// Panics when `dim > 2`; a 3D vector has exactly three dimensions.
    fn position(&self, dim: usize) -> f32 {
        match dim {
            0 => self.xf(),
            1 => self.yf(),
            2 => self.zf(),
            _ => panic!("Dimension out of range for a 3D vector: {}", dim),
        }
    }

    /// Overwrites the component at dimension `dim` (0 = x, 1 = y, 2 = z).
    ///
    /// # Panics
    ///
    /// Panics when `dim > 2`.
    fn set_position(&self, dim: usize, value: f32) {
        match dim {
            0 => self.set_x(value),
            1 => self.set_y(value),
            2 => self.set_z(value),
            _ => panic!("Dimension out of range for a 3D vector: {}", dim),
        }
    }

    /// A snapshot of the three components, for APIs taking raw triples.
    ///
    /// The three reads are not atomic as a group; callers that need a
    /// consistent snapshot while another thread writes should serialize access
    /// themselves.
    fn to_array(&self) -> [f32; 3] {
        [self.xf(), self.yf(), self.zf()]
    }
}

/// The closed set of backing representations an adapter can wrap.
///
/// Conversion functions `match` on this to decide between returning the
/// already-held handle (zero-copy) and allocating a fresh foreign object.
pub enum Backing<'a> {
    /// An engine-native [`vek::Vec3`].
    Vek(&'a Shared<vek::Vec3<f32>>),
    /// An interchange [`mint::Vector3`].
    Mint(&'a Shared<mint::Vector3<f32>>),
    /// A plain single-precision triple.
    FloatArray(&'a Shared<[f32; 3]>),
    /// A plain double-precision triple.
    DoubleArray(&'a Shared<[f64; 3]>),
}
