use parking_lot::RwLock;
use std::sync::Arc;

/// A shared handle to a foreign vector object.
///
/// The object behind the handle is typically also held by whatever produced it
/// (a render loop, a model loader), so values read through the handle can
/// change out-of-band. Cloning the handle shares the object, it never copies
/// it.
pub type Shared<T> = Arc<RwLock<T>>;

/// Wraps a freshly created foreign object in a [`Shared`] handle.
pub fn shared<T>(value: T) -> Shared<T> {
    Arc::new(RwLock::new(value))
}
