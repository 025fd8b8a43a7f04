//! Container networking flattening (201708110930)

use confmig_document::ConfigDocument;
use confmig_migrate::{Migration, MigrationKey, TransformError};
use serde_json::Value;

const FLAG: &str = ".properties.container_networking.value";
const ENABLED: &str = "enable";

/// (source, target) pairs copied when container networking is enabled.
const DERIVED: &[(&str, &str)] = &[
    (
        ".properties.container_networking.enable.network_cidr",
        ".properties.container_networking_network_cidr",
    ),
    (
        ".properties.container_networking.enable.vtep_port",
        ".properties.container_networking_vtep_port",
    ),
];

/// Copies the container-networking CIDR and VTEP port up to top-level
/// properties when the feature's mode flag reads `"enable"`
///
/// An absent or non-`"enable"` flag leaves the document unchanged; an
/// absent source field is skipped rather than written as null.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainerNetworkingFlatten;

impl Migration for ContainerNetworkingFlatten {
    fn key(&self) -> MigrationKey {
        MigrationKey::new(201708110930)
    }

    fn description(&self) -> &'static str {
        "flatten container networking CIDR and VTEP port into top-level properties"
    }

    fn migrate(&self, document: &mut ConfigDocument) -> Result<(), TransformError> {
        let enabled = document.get(FLAG).and_then(Value::as_str) == Some(ENABLED);
        if !enabled {
            return Ok(());
        }

        for (source, target) in DERIVED {
            let value = document.get(source).cloned();
            if let Some(value) = value {
                document.set(*target, value);
            }
        }
        Ok(())
    }
}
