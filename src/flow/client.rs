//! Flow programming client
//!
//! Submits flow descriptors to the external flow backend. Submission is
//! fire-and-forget: each descriptor is dispatched on its own task, the
//! caller is never blocked and never waits on the outcome, and failures
//! are not retried. Outcomes stay observable through the warn log and the
//! programmed/failed counters.

use crate::flow::FlowDescriptor;
use crate::telemetry::MetricsRegistry;
use crate::Result;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// External flow backend boundary.
///
/// Accepts one descriptor for one switch/table and resolves asynchronously
/// with the programming outcome. Implementations own the wire encoding.
#[async_trait::async_trait]
pub trait FlowBackend: Send + Sync {
    async fn add_flow(&self, flow: &FlowDescriptor) -> Result<()>;
}

pub struct FlowProgrammingClient {
    backend: Arc<dyn FlowBackend>,
    metrics: Arc<MetricsRegistry>,
}

impl FlowProgrammingClient {
    pub fn new(backend: Arc<dyn FlowBackend>, metrics: Arc<MetricsRegistry>) -> Self {
        Self { backend, metrics }
    }

    /// Dispatch a descriptor to the backend.
    ///
    /// Returns the pending result immediately; callers drop it. No retry
    /// on failure.
    pub fn submit(&self, flow: FlowDescriptor) -> JoinHandle<Result<()>> {
        let backend = Arc::clone(&self.backend);
        let metrics = Arc::clone(&self.metrics);

        tokio::spawn(async move {
            match backend.add_flow(&flow).await {
                Ok(()) => {
                    metrics.flows_programmed.inc();
                    debug!(
                        flow_id = %flow.flow_id,
                        switch = %flow.switch_id,
                        "flow programmed"
                    );
                    Ok(())
                }
                Err(e) => {
                    metrics.flow_submit_failures.inc();
                    warn!(
                        flow_id = %flow.flow_id,
                        switch = %flow.switch_id,
                        error = %e,
                        "flow programming failed"
                    );
                    Err(e)
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FlowConfig;
    use crate::flow::FlowRuleBuilder;
    use crate::Error;
    use std::sync::Mutex;

    struct RecordingBackend {
        flows: Mutex<Vec<FlowDescriptor>>,
        fail: bool,
    }

    impl RecordingBackend {
        fn new(fail: bool) -> Self {
            Self {
                flows: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    #[async_trait::async_trait]
    impl FlowBackend for RecordingBackend {
        async fn add_flow(&self, flow: &FlowDescriptor) -> Result<()> {
            if self.fail {
                return Err(Error::Backend("switch unreachable".into()));
            }
            self.flows.lock().unwrap().push(flow.clone());
            Ok(())
        }
    }

    fn sample_flow() -> FlowDescriptor {
        FlowRuleBuilder::new(FlowConfig::default())
            .build(
                "openflow:1",
                None,
                "00:00:00:00:00:02".parse().unwrap(),
                "openflow:1:2",
                None,
            )
            .unwrap()
    }

    #[tokio::test]
    async fn test_submit_reaches_backend() {
        let backend = Arc::new(RecordingBackend::new(false));
        let metrics = Arc::new(MetricsRegistry::new());
        let client = FlowProgrammingClient::new(backend.clone(), metrics.clone());

        client.submit(sample_flow()).await.unwrap().unwrap();

        assert_eq!(backend.flows.lock().unwrap().len(), 1);
        assert_eq!(metrics.flows_programmed.get(), 1);
        assert_eq!(metrics.flow_submit_failures.get(), 0);
    }

    #[tokio::test]
    async fn test_submit_failure_is_counted_not_retried() {
        let backend = Arc::new(RecordingBackend::new(true));
        let metrics = Arc::new(MetricsRegistry::new());
        let client = FlowProgrammingClient::new(backend.clone(), metrics.clone());

        let outcome = client.submit(sample_flow()).await.unwrap();

        assert!(matches!(outcome, Err(Error::Backend(_))));
        assert_eq!(metrics.flows_programmed.get(), 0);
        assert_eq!(metrics.flow_submit_failures.get(), 1);
    }
}
