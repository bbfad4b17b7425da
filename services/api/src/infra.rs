use feedsieve::PolicyConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    /// Policy applied when a request does not carry its own.
    pub(crate) policy: Arc<PolicyConfig>,
}

impl AppState {
    pub(crate) fn new(metrics: PrometheusHandle, policy: PolicyConfig) -> Self {
        Self {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(metrics),
            policy: Arc::new(policy),
        }
    }

    pub(crate) fn policy_or_default(&self, requested: Option<PolicyConfig>) -> PolicyConfig {
        requested.unwrap_or_else(|| self.policy.as_ref().clone())
    }
}
