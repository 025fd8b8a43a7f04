//! Notifications encryption-key reshape (201708251040)

use confmig_document::ConfigDocument;
use confmig_migrate::{Migration, MigrationKey, TransformError};
use serde_json::json;

const CREDENTIALS: &str = ".notifications.encryption_credentials";
const ENCRYPTION_KEY: &str = ".notifications.encryption_key";

/// Rewraps the notifications encryption password under the secret-typed
/// key shape: `{"value": {"secret": <password>}}`
///
/// The source path `.notifications.encryption_credentials` → `value` →
/// `password` is required; a document missing any level of it fails with
/// a missing-field condition rather than inventing a default key.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationsEncryptionKeyType;

impl Migration for NotificationsEncryptionKeyType {
    fn key(&self) -> MigrationKey {
        MigrationKey::new(201708251040)
    }

    fn description(&self) -> &'static str {
        "rewrap the notifications encryption password as a secret-typed key"
    }

    fn migrate(&self, document: &mut ConfigDocument) -> Result<(), TransformError> {
        let password = document
            .get(CREDENTIALS)
            .and_then(|credentials| credentials.get("value"))
            .and_then(|value| value.get("password"))
            .cloned()
            .ok_or_else(|| {
                TransformError::missing_field(format!("{CREDENTIALS}.value.password"))
            })?;

        document.set(ENCRYPTION_KEY, json!({ "value": { "secret": password } }));
        Ok(())
    }
}
