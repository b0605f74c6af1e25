//! Endpoints a cluster install needs to reach

/// Ordered list of URLs probed by `verify egress`.
///
/// Entries are not validated; a malformed URL shows up as a probe failure.
/// Duplicates are kept so the report lines up with this list.
pub const ENDPOINTS: &[&str] = &[
    "https://registry.redhat.io",
    "https://quay.io",
    "https://sso.redhat.com",
    "https://console.redhat.com/openshift",
    "https://quay-registry.s3.amazonaws.com",
    "https://cm-quay-production-s3.s3.amazonaws.com",
    "https://cart-rhcos-ci.s3.amazonaws.com",
    "https://openshift.org",
    "https://registry.access.redhat.com",
    "https://console.redhat.com",
    "https://pull.q1w2.quay.rhcloud.com",
    "https://q1w2.quay.rhcloud.com",
    // telemetry
    "https://cert-api.access.redhat.com",
    "https://api.access.redhat.com",
    "https://infogw.api.openshift.com",
    "https://console.redhat.com",
    "https://observatorium.api.openshift.com",
    // mirrors
    "https://mirror.openshift.com",
    "https://storage.googleapis.com/openshift-release",
    "https://api.openshift.com",
    // sre
    "https://api.pagerduty.com/",
    "https://events.pagerduty.com",
    "https://api.deadmanssnitch.com",
    "https://nosnch.in",
    // log ingestion has many regional hosts; the apex domain stands in for them
    "https://splunkcloud.com",
];
