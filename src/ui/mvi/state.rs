//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// States are cloned to derive the next one and compared to decide whether
/// subscribers need a notification.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
