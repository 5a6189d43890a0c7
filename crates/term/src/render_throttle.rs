/// Decides when the frame loop needs to redraw.
///
/// The fingerprint is whatever identifies the visible state (maze revision,
/// solver state, viewport). A changed fingerprint redraws immediately; an
/// unchanged one is refreshed at most once per `idle_refresh_ms`.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    idle_refresh_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(idle_refresh_ms: u64) -> Self {
        Self {
            idle_refresh_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let changed = self.last_fingerprint != Some(fingerprint);
        let stale = now_ms.saturating_sub(self.last_render_ms) >= self.idle_refresh_ms;
        if changed || stale {
            self.last_render_ms = now_ms;
            self.last_fingerprint = Some(fingerprint);
            return true;
        }
        false
    }

    /// Force the next call to render.
    pub fn invalidate(&mut self) {
        self.last_fingerprint = None;
    }
}

/// Mix the parts of the visible state into one fingerprint.
pub fn fingerprint(revision: u64, solver_code: u8, viewport: (u16, u16)) -> u64 {
    let mut h = revision.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    h ^= (solver_code as u64) << 56;
    h ^= ((viewport.0 as u64) << 16) | viewport.1 as u64;
    h
}
