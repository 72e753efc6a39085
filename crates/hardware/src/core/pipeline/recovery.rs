//! Misprediction Recovery.
//!
//! Stages may ask for the pipeline to be redirected while they run; the request
//! is applied once, after every stage has run for the cycle. Only the first
//! request of a cycle is kept.

/// A pending redirect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecoveryRequest {
    /// Number of stages to squash, counted from fetch. 2 clears the decode
    /// latch, 3 also the execute latch, 4 the memory latch and 5 the writeback latch.
    pub depth: u8,
    /// Address fetch resumes from.
    pub target: u32,
    /// Keep an outstanding instruction-cache miss running across the redirect.
    pub preserve_fetch_miss: bool,
}

/// Holder for at most one [`RecoveryRequest`] per cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Recovery {
    pending: Option<RecoveryRequest>,
}

impl Recovery {
    /// Arms a redirect unless one is already pending this cycle.
    pub fn request(&mut self, req: RecoveryRequest) {
        if self.pending.is_none() {
            self.pending = Some(req);
        }
    }

    /// The request that will be applied at the end of this cycle.
    pub const fn pending(&self) -> Option<&RecoveryRequest> {
        self.pending.as_ref()
    }

    /// Disarms and returns the pending request.
    pub const fn take(&mut self) -> Option<RecoveryRequest> {
        self.pending.take()
    }
}
