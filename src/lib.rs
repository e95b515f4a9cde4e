//! A shared 3D-vector abstraction, focussed on letting camera, transform and
//! placement code manipulate vectors without committing to any single math
//! library's representation.
//!
//! Every representation is wrapped by an adapter implementing the [`Vector3`]
//! capability set, and every adapter carries a per-representation `convert`
//! function that unwraps instead of copying whenever the value already holds
//! the target type.
//!
//! # Example
//!
//! ```
//! use vec3_bridge::{ops, FloatArrayVector3, VekVector3, Vector3};
//!
//! // A position handed over by some producer.
//! let position = VekVector3::new(1.0, 2.0, 3.0);
//! position.set_y(9.5);
//!
//! // Generic code only sees the capability set.
//! let axis = FloatArrayVector3::new(1.0, 0.0, 0.0);
//! assert_eq!(ops::dot(&position, &axis), 1.0);
//!
//! // At the engine boundary, conversion is zero-copy because `position`
//! // already wraps a vek vector: the same handle comes back.
//! let native = VekVector3::convert(&position);
//! assert!(std::sync::Arc::ptr_eq(&native, position.source()));
//! assert_eq!(native.read().y, 9.5);
//! ```
//!
//! Adapters share their backing object rather than owning a private copy, so a
//! render loop holding the same handle sees writes made through the adapter
//! and vice versa. See [`Shared`] for the aliasing rules.

#![warn(missing_docs)]

mod adapter;
mod error;
mod handle;
mod vector3;

pub mod ops;

pub use self::{
    adapter::{DoubleArrayVector3, FloatArrayVector3, MintVector3, VekVector3},
    error::VectorError,
    handle::{shared, Shared},
    vector3::{Backing, Vector3},
};
