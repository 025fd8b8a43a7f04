//! Metron agent metric-name enablement (201809181044)

use confmig_document::ConfigDocument;
use confmig_migrate::{Migration, MigrationKey, TransformError};
use serde_json::json;

const ENABLE_CF_METRIC_NAME: &str = ".properties.enable_cf_metric_name";

/// Turns on the cf metric name for metron agent deployments on upgrade
#[derive(Debug, Clone, Copy, Default)]
pub struct MetronAgentDeploymentName;

impl Migration for MetronAgentDeploymentName {
    fn key(&self) -> MigrationKey {
        MigrationKey::new(201809181044)
    }

    fn description(&self) -> &'static str {
        "enable the cf metric name for metron agent deployments"
    }

    fn migrate(&self, document: &mut ConfigDocument) -> Result<(), TransformError> {
        document.set(ENABLE_CF_METRIC_NAME, json!({ "value": true }));
        Ok(())
    }
}
