use crate::core::{Probe, Result};
use crate::utils::error::ProbeError;
use std::io::Write;

/// What the runner does with a failed fetch or render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Hand the error back to the caller.
    Propagate,
    /// Print `Error: <error>` to the output and finish normally.
    Report,
}

impl ErrorPolicy {
    pub fn handle<W: Write + ?Sized>(self, err: ProbeError, out: &mut W) -> Result<()> {
        match self {
            ErrorPolicy::Propagate => Err(err),
            ErrorPolicy::Report => {
                tracing::error!("❌ {}", err);
                tracing::debug!("💡 {}", err.recovery_suggestion());
                writeln!(out, "Error: {}", err)?;
                out.flush()?;
                Ok(())
            }
        }
    }
}

pub struct ProbeRunner<P: Probe> {
    probe: P,
    policy: ErrorPolicy,
}

impl<P: Probe> ProbeRunner<P> {
    pub fn new(probe: P, policy: ErrorPolicy) -> Self {
        Self { probe, policy }
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Fetches once and renders the report to `out`.
    ///
    /// Lines already rendered stay in `out` when a later one fails.
    pub async fn run<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        tracing::info!("Querying {}", self.probe.target());

        let outcome = match self.probe.fetch().await {
            Ok(report) => report.render(out),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => {
                out.flush()?;
                Ok(())
            }
            Err(e) => self.policy.handle(e, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Report;
    use crate::utils::error::ProbeError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubProbe {
        fail: bool,
        listing: Option<Vec<serde_json::Value>>,
        calls: AtomicUsize,
    }

    impl StubProbe {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                listing: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn with_listing(listing: Vec<serde_json::Value>) -> Self {
            Self {
                fail: false,
                listing: Some(listing),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Probe for StubProbe {
        fn target(&self) -> String {
            "stub://".to_string()
        }

        async fn fetch(&self) -> Result<Report> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(listing) = &self.listing {
                return Ok(Report::Sites(listing.clone()));
            }
            if self.fail {
                Err(ProbeError::UnexpectedPayload {
                    message: "boom".to_string(),
                })
            } else {
                Ok(Report::HttpFailure {
                    status: 418,
                    body: None,
                })
            }
        }
    }

    #[tokio::test]
    async fn test_run_renders_report() {
        let runner = ProbeRunner::new(StubProbe::new(false), ErrorPolicy::Propagate);
        let mut out = Vec::new();

        runner.run(&mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Error: 418\n");
        assert_eq!(runner.probe().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_propagate_policy_returns_error() {
        let runner = ProbeRunner::new(StubProbe::new(true), ErrorPolicy::Propagate);
        let mut out = Vec::new();

        let err = runner.run(&mut out).await.unwrap_err();

        assert!(matches!(err, ProbeError::UnexpectedPayload { .. }));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_report_policy_prints_error() {
        let runner = ProbeRunner::new(StubProbe::new(true), ErrorPolicy::Report);
        let mut out = Vec::new();

        runner.run(&mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error: Unexpected payload: boom\n"
        );
    }

    #[tokio::test]
    async fn test_report_policy_keeps_lines_before_bad_entry() {
        let listing = vec![serde_json::json!({"id": 1, "name": "A"}), serde_json::json!(42)];
        let runner = ProbeRunner::new(StubProbe::with_listing(listing), ErrorPolicy::Report);
        let mut out = Vec::new();

        runner.run(&mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ID: 1 - Name: A\nError: Unexpected payload: site entry 1 is not an object: 42\n"
        );
    }

    #[tokio::test]
    async fn test_propagate_policy_returns_render_error() {
        let listing = vec![serde_json::json!(null)];
        let runner = ProbeRunner::new(StubProbe::with_listing(listing), ErrorPolicy::Propagate);
        let mut out = Vec::new();

        let err = runner.run(&mut out).await.unwrap_err();

        assert!(matches!(err, ProbeError::UnexpectedPayload { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_report_policy_prints_config_error() {
        let err = ProbeError::InvalidConfigValueError {
            field: "sites.endpoint".to_string(),
            value: "ftp://host".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        let mut out = Vec::new();

        ErrorPolicy::Report.handle(err, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error: Invalid value for 'sites.endpoint' (ftp://host): Unsupported URL scheme: ftp\n"
        );
    }

    #[test]
    fn test_propagate_policy_passes_config_error_through() {
        let err = ProbeError::MissingConfigError {
            field: "backend.api_key".to_string(),
        };
        let mut out = Vec::new();

        let err = ErrorPolicy::Propagate.handle(err, &mut out).unwrap_err();

        assert_eq!(err.exit_code(), 2);
        assert!(out.is_empty());
    }
}
