//! Command runtime: owns the reporter for the lifetime of a command

use crate::reporter::{Reporter, TracingReporter};

pub struct Runtime {
    reporter: Box<dyn Reporter>,
    profile: Option<String>,
}

impl Runtime {
    pub fn new(profile: Option<String>) -> Self {
        Self::with_reporter(profile, Box::new(TracingReporter))
    }

    pub fn with_reporter(profile: Option<String>, reporter: Box<dyn Reporter>) -> Self {
        match profile.as_deref() {
            Some(p) => tracing::debug!("Runtime set up with profile \"{}\"", p),
            None => tracing::debug!("Runtime set up with default profile"),
        }
        Self { reporter, profile }
    }

    pub fn reporter(&self) -> &dyn Reporter {
        self.reporter.as_ref()
    }

    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        tracing::debug!("Runtime cleanup");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_keeps_profile() {
        let rt = Runtime::new(Some("staging".to_string()));
        assert_eq!(rt.profile(), Some("staging"));
        assert_eq!(Runtime::new(None).profile(), None);
    }
}
