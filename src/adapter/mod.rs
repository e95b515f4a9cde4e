mod double_array;
mod float_array;
mod mint;
mod vek;

pub use self::{
    double_array::DoubleArrayVector3, float_array::FloatArrayVector3, mint::MintVector3,
    vek::VekVector3,
};
