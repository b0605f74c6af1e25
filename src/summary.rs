//! Summary report over probe results

use crate::probe::ProbeResult;
use crate::reporter::Reporter;

/// Print the summary: a header, every failure, and passes only when verbose.
pub fn summarize<R: Reporter + ?Sized>(reporter: &R, results: &[ProbeResult], verbose: bool) {
    reporter.info(format_args!(
        "*** Summary Report on egress access for {} URLs ***",
        results.len()
    ));
    for result in results {
        if !result.is_passing() {
            reporter.error(format_args!(
                "Error: GET: {}, status: {}",
                result.url, result.status
            ));
        } else if verbose {
            reporter.info(format_args!(
                "OK: GET: {}, status: {}",
                result.url, result.status
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::FAILURE_SENTINEL;
    use crate::reporter::capture::{CaptureReporter, Line};

    fn result(url: &str, status: u16) -> ProbeResult {
        ProbeResult {
            url: url.to_string(),
            status,
        }
    }

    fn sample() -> Vec<ProbeResult> {
        vec![
            result("https://example-ok.test", 200),
            result("https://example-down.test", FAILURE_SENTINEL),
        ]
    }

    #[test]
    fn quiet_summary_hides_passing_endpoints() {
        let reporter = CaptureReporter::default();

        summarize(&reporter, &sample(), false);

        assert_eq!(
            reporter.lines(),
            [
                Line::Info("*** Summary Report on egress access for 2 URLs ***".into()),
                Line::Error("Error: GET: https://example-down.test, status: 400".into()),
            ]
        );
    }

    #[test]
    fn verbose_summary_lists_passing_endpoints() {
        let reporter = CaptureReporter::default();

        summarize(&reporter, &sample(), true);

        assert_eq!(
            reporter.lines(),
            [
                Line::Info("*** Summary Report on egress access for 2 URLs ***".into()),
                Line::Info("OK: GET: https://example-ok.test, status: 200".into()),
                Line::Error("Error: GET: https://example-down.test, status: 400".into()),
            ]
        );
    }

    #[test]
    fn any_non_200_status_is_a_failure() {
        let results = [
            result("https://a.test", 201),
            result("https://b.test", 301),
            result("https://c.test", 403),
            result("https://d.test", 503),
        ];
        for verbose in [false, true] {
            let reporter = CaptureReporter::default();
            summarize(&reporter, &results, verbose);
            assert_eq!(
                reporter.errors(),
                [
                    "Error: GET: https://a.test, status: 201",
                    "Error: GET: https://b.test, status: 301",
                    "Error: GET: https://c.test, status: 403",
                    "Error: GET: https://d.test, status: 503",
                ]
            );
            assert_eq!(reporter.infos().len(), 1);
        }
    }

    #[test]
    fn empty_results_print_only_the_header() {
        let reporter = CaptureReporter::default();

        summarize(&reporter, &[], true);

        assert_eq!(
            reporter.lines(),
            [Line::Info(
                "*** Summary Report on egress access for 0 URLs ***".into()
            )]
        );
    }
}
