use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared stop flag for the UI loop and the event reader thread.
#[derive(Debug, Clone, Default)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a handle that termination signals (SIGTERM, SIGINT, ...) will
    /// trip.
    pub fn install() -> io::Result<Self> {
        let handle = Self::new();
        for &signal in signal_hook::consts::TERM_SIGNALS {
            signal_hook::flag::register(signal, Arc::clone(&handle.shutdown))?;
        }
        Ok(handle)
    }

    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::info!("shutdown requested");
        }
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let handle = ShutdownHandle::new();
        let other = handle.clone();
        assert!(!other.is_shutting_down());

        handle.signal();
        assert!(other.is_shutting_down());
    }
}
