use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use nix::sys::signal::{self, SigHandler, Signal};

use crate::scanner::CancelToken;

static CANCEL: OnceLock<Arc<AtomicBool>> = OnceLock::new();

/// Cancel `token` on SIGINT or SIGTERM.
///
/// Only the first token installed is wired to the handler; call this once,
/// before starting a scan.
pub fn install_cancel_handler(token: &CancelToken) -> nix::Result<()> {
    if CANCEL.set(token.flag()).is_err() {
        tracing::debug!("Cancel handler already installed");
    }

    // SAFETY: the handler only performs an atomic store.
    unsafe {
        signal::signal(Signal::SIGINT, SigHandler::Handler(handle_cancel))?;
        signal::signal(Signal::SIGTERM, SigHandler::Handler(handle_cancel))?;
    }

    Ok(())
}

extern "C" fn handle_cancel(_: i32) {
    if let Some(flag) = CANCEL.get() {
        flag.store(true, Ordering::SeqCst);
    }
}
