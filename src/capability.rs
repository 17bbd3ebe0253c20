//! Render capability detection.
//!
//! Whether the host can show the 3D scene is process-wide state with an
//! explicit lifecycle: probed once, memoized, and resettable so tests can
//! exercise both paths. There is no ambient mutable flag to poke from the
//! outside.

use std::env;
use std::sync::Mutex;

static RENDER_CAPABILITY: Mutex<Option<bool>> = Mutex::new(None);

/// Whether the process can render the 3D scene, probing on first call.
///
/// The default probe honours the `FURNISH_DISABLE_RENDER` environment
/// variable so headless deployments fall back to flat imagery.
#[must_use]
pub fn detect_render_capability() -> bool {
    detect_render_capability_with(|| env::var_os("FURNISH_DISABLE_RENDER").is_none())
}

/// Like [`detect_render_capability`], with an injectable probe.
///
/// The probe only runs when no result is memoized yet.
pub fn detect_render_capability_with(probe: impl FnOnce() -> bool) -> bool {
    let mut slot = RENDER_CAPABILITY
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    *slot.get_or_insert_with(probe)
}

/// Clears the memoized result so the next detection probes again.
pub fn reset_render_capability() {
    let mut slot = RENDER_CAPABILITY
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    *slot = None;
}
