#![forbid(unsafe_code)]

//! Process-wide fault reporting.
//!
//! There is no recoverable-error taxonomy in this domain: structural
//! absence is handled by skipping behavior, and everything else is an
//! unexpected fault. Faults are reported to the tracing channel and
//! otherwise ignored — no retry, no user-visible messaging.

use std::panic;
use std::sync::Once;

static INSTALL: Once = Once::new();

/// Install the diagnostic panic hook.
///
/// The hook logs the panic payload via `tracing::error!` and then defers
/// to the previously installed hook. Installing more than once is a no-op.
pub fn install_panic_hook() {
    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let msg = if let Some(s) = info.payload().downcast_ref::<&str>() {
                (*s).to_owned()
            } else if let Some(s) = info.payload().downcast_ref::<String>() {
                s.clone()
            } else {
                "unknown panic payload".to_owned()
            };
            tracing::error!("unhandled fault: {msg}");
            previous(info);
        }));
    });
}
