//! CredHub simple-credentials relocation (201708241712)

use confmig_document::ConfigDocument;
use confmig_migrate::{Migration, MigrationKey, RelocationPair, RelocationTable, TransformError};

/// Every inline database credential moved out to the variable store, in
/// the order the directives are expected downstream.
const PAIRS: &[RelocationPair] = &[
    RelocationPair::new(".mysql.autoscale_credentials", "autoscale-db-credentials"),
    RelocationPair::new(".mysql.ccdb_credentials", "cc-db-credentials"),
    RelocationPair::new(".mysql.diegodb_credentials", "diego-db-credentials"),
    RelocationPair::new(".mysql.locketdb_credentials", "locket-db-credentials"),
    RelocationPair::new(
        ".mysql.mysql_backup_server_credentials",
        "mysql-backup-server-db-credentials",
    ),
    RelocationPair::new(
        ".mysql.mysql_bootstrap_credentials",
        "mysql-bootstrap-db-credentials",
    ),
    RelocationPair::new(
        ".mysql.diag_agent_credentials",
        "mysql-diag-agent-db-credentials",
    ),
    RelocationPair::new(
        ".mysql.mysqlmetricsdb_credentials",
        "mysql-metrics-db-credentials",
    ),
    RelocationPair::new(".mysql.monitordb_credentials", "mysql-monitor-db-credentials"),
    RelocationPair::new(
        ".mysql.networkpolicyserverdb_credentials",
        "network-policy-server-db-credentials",
    ),
    RelocationPair::new(
        ".nfsbrokerpush.nfs_broker_push_credentials",
        "nfs-broker-push-db-credentials",
    ),
    RelocationPair::new(".mysql.nfsvolume_credentials", "nfs-volume-db-credentials"),
    RelocationPair::new(
        ".mysql.notifications_credentials",
        "notifications-db-credentials",
    ),
    RelocationPair::new(
        ".mysql.pivotal_account_credentials",
        "pivotal-account-db-credentials",
    ),
    RelocationPair::new(".mysql.routingdb_credentials", "routing-db-credentials"),
    RelocationPair::new(".mysql.silkdb_credentials", "silk-db-credentials"),
    RelocationPair::new(".mysql.uaadb_credentials", "uaa-db-credentials"),
];

const TABLE: RelocationTable = RelocationTable::new(PAIRS);

/// Declares the inline database credentials that move to the external
/// variable store
///
/// Sources resolving to null or absent (optional databases that were never
/// configured) produce no directive.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredhubSimpleCredentials;

impl CredhubSimpleCredentials {
    /// The declared relocation pairs
    #[must_use]
    pub const fn pairs() -> &'static [RelocationPair] {
        PAIRS
    }
}

impl Migration for CredhubSimpleCredentials {
    fn key(&self) -> MigrationKey {
        MigrationKey::new(201708241712)
    }

    fn description(&self) -> &'static str {
        "move inline database credentials into the external variable store"
    }

    fn migrate(&self, document: &mut ConfigDocument) -> Result<(), TransformError> {
        TABLE.apply(document);
        Ok(())
    }
}
