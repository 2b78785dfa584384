//! Load status of external renderer scripts (e.g. the LaTeX bundle), keyed by source URL.
//!
//! Owned by whoever presents messages and passed down explicitly; there is no
//! process-wide cache.

use std::collections::HashMap;

/// Source of the math renderer bundle used by the web client.
pub const MATH_RENDERER_SRC: &str = "https://cdn.jsdelivr.net/npm/katex@0.16.9/dist/katex.min.js";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStatus {
    Idle,
    Loading,
    Ready,
    Error,
}

#[derive(Debug, Default)]
pub struct ScriptLoader {
    scripts: HashMap<String, ScriptStatus>,
}

impl ScriptLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register interest in `src`. First request starts loading; later requests
    /// see the recorded status. An empty `src` is `Idle` and never tracked.
    pub fn request(&mut self, src: &str) -> ScriptStatus {
        if src.is_empty() {
            return ScriptStatus::Idle;
        }
        *self.scripts.entry(src.to_string()).or_insert_with(|| {
            log::debug!("Loading script {}", src);
            ScriptStatus::Loading
        })
    }

    pub fn mark_ready(&mut self, src: &str) {
        self.record(src, ScriptStatus::Ready);
    }

    pub fn mark_failed(&mut self, src: &str) {
        log::warn!("Script failed to load: {}", src);
        self.record(src, ScriptStatus::Error);
    }

    /// Current status; `Idle` for scripts never requested.
    pub fn status(&self, src: &str) -> ScriptStatus {
        self.scripts.get(src).copied().unwrap_or(ScriptStatus::Idle)
    }

    pub fn is_ready(&self, src: &str) -> bool {
        self.status(src) == ScriptStatus::Ready
    }

    fn record(&mut self, src: &str, status: ScriptStatus) {
        if src.is_empty() {
            return;
        }
        self.scripts.insert(src.to_string(), status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_src_is_idle() {
        let mut loader = ScriptLoader::new();
        assert_eq!(loader.request(""), ScriptStatus::Idle);
        loader.mark_ready("");
        assert_eq!(loader.status(""), ScriptStatus::Idle);
    }

    #[test]
    fn first_request_is_loading() {
        let mut loader = ScriptLoader::new();
        assert_eq!(loader.status(MATH_RENDERER_SRC), ScriptStatus::Idle);
        assert_eq!(loader.request(MATH_RENDERER_SRC), ScriptStatus::Loading);
    }

    #[test]
    fn later_requests_see_recorded_status() {
        let mut loader = ScriptLoader::new();
        loader.request("a.js");
        loader.mark_ready("a.js");
        assert_eq!(loader.request("a.js"), ScriptStatus::Ready);
        assert!(loader.is_ready("a.js"));

        loader.request("b.js");
        loader.mark_failed("b.js");
        assert_eq!(loader.request("b.js"), ScriptStatus::Error);
    }

    #[test]
    fn loaders_do_not_share_state() {
        let mut a = ScriptLoader::new();
        let b = ScriptLoader::new();
        a.request("x.js");
        a.mark_ready("x.js");
        assert!(!b.is_ready("x.js"));
    }
}
