//! `verify egress`: probe every catalog endpoint and report

use std::time::Duration;

use crate::catalog;
use crate::probe::{self, HttpProbe, Probe};
use crate::reporter::Reporter;
use crate::runtime::Runtime;
use crate::summary;

/// Options for one egress run
#[derive(Debug, Clone)]
pub struct EgressOptions {
    /// Also list endpoints that passed
    pub verbose: bool,
    /// Accepted for compatibility; does not change the report
    pub quiet: bool,
    /// Upper bound on each request
    pub timeout: Duration,
}

impl Default for EgressOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            quiet: false,
            timeout: Duration::from_secs(probe::DEFAULT_PROBE_TIMEOUT_SECS),
        }
    }
}

/// Probe the built-in catalog over HTTP. Failed endpoints are reported, not
/// returned as errors; only client setup can fail.
pub async fn run(rt: &Runtime, opts: &EgressOptions) -> anyhow::Result<()> {
    tracing::debug!(
        "Verifying egress for {} URLs, profile: {}, options: {:?}",
        catalog::ENDPOINTS.len(),
        rt.profile().unwrap_or("default"),
        opts
    );
    if opts.quiet {
        tracing::debug!("--quiet is accepted but does not change the report");
    }
    let probe = HttpProbe::new(opts.timeout)?;
    verify(&probe, rt.reporter(), catalog::ENDPOINTS, opts).await;
    Ok(())
}

/// Probe `endpoints` in order, then print the summary.
pub async fn verify<P, R>(probe: &P, reporter: &R, endpoints: &[&str], opts: &EgressOptions)
where
    P: Probe + ?Sized,
    R: Reporter + ?Sized,
{
    let results = probe::run_all(probe, reporter, endpoints).await;
    let failed = results.iter().filter(|r| !r.is_passing()).count();
    tracing::debug!("{} of {} endpoints failed", failed, results.len());
    summary::summarize(reporter, &results, opts.verbose);
}
