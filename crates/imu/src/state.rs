use {
    crate::OrientationSample,
    std::sync::{Mutex, MutexGuard},
};

#[derive(Default)]
struct Inner {
    latest: OrientationSample,
    zero: OrientationSample,
    unconsumed: bool,
}

/// Latest orientation shared between the telemetry reader and the
/// renderers.
///
/// Only the newest sample is kept; anything published between two reads
/// is overwritten. The sample and its "unconsumed" flag live under one
/// lock, so a reader never sees one updated without the other, and
/// `take_if_ready` hands each published sample out at most once.
#[derive(Default)]
pub struct OrientationState {
    inner: Mutex<Inner>,
}

impl OrientationState {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // a panicking holder cannot leave the plain-data fields torn
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Replace the latest sample and mark it unconsumed.
    pub fn publish(&self, sample: OrientationSample) {
        let mut inner = self.lock();
        inner.latest = sample;
        inner.unconsumed = true;
    }

    /// The latest sample if it has not been taken yet, clearing the flag.
    pub fn take_if_ready(&self) -> Option<OrientationSample> {
        let mut inner = self.lock();
        if inner.unconsumed {
            inner.unconsumed = false;
            Some(inner.latest)
        } else {
            None
        }
    }

    /// Make the current sample the zero reference and return it.
    pub fn reset_zero(&self) -> OrientationSample {
        let mut inner = self.lock();
        inner.zero = inner.latest;
        inner.zero
    }

    pub fn latest(&self) -> OrientationSample {
        self.lock().latest
    }

    pub fn zero(&self) -> OrientationSample {
        self.lock().zero
    }

    /// `latest - zero` per axis. Does not touch the unconsumed flag.
    pub fn delta(&self) -> OrientationSample {
        let inner = self.lock();
        inner.latest - inner.zero
    }
}
