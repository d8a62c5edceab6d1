//! Tenant records, the startup snapshot, and the active-tenant gate.

use crate::config::GoogleAdsConfig;
use crate::error::GateError;
use std::collections::HashMap;

/// One tenant ("client") as configured at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantRecord {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub google_ads: GoogleAdsConfig,
}

impl TenantRecord {
    /// Upstream account the tenant's tool calls are scoped to.
    #[must_use]
    pub fn upstream_account_id(&self) -> &str {
        &self.google_ads.customer_id
    }
}

/// Immutable view of all tenants, keyed by tenant id.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    tenants: HashMap<String, TenantRecord>,
}

impl Snapshot {
    #[must_use]
    pub fn new(records: impl IntoIterator<Item = TenantRecord>) -> Self {
        Self {
            tenants: records.into_iter().map(|r| (r.id.clone(), r)).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tenants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tenants.is_empty()
    }

    #[must_use]
    pub fn get(&self, tenant_id: &str) -> Option<&TenantRecord> {
        self.tenants.get(tenant_id)
    }

    /// Resolve a tenant that is allowed to make requests.
    ///
    /// # Errors
    ///
    /// [`GateError::NotFound`] for unknown ids, [`GateError::Inactive`] when the
    /// record exists but is disabled.
    pub fn resolve(&self, tenant_id: &str) -> Result<&TenantRecord, GateError> {
        let record = self.get(tenant_id).ok_or(GateError::NotFound)?;
        if !record.active {
            return Err(GateError::Inactive);
        }
        Ok(record)
    }
}

#[cfg(test)]
pub(crate) fn record(id: &str, name: &str, active: bool, customer_id: &str) -> TenantRecord {
    TenantRecord {
        id: id.to_string(),
        name: name.to_string(),
        active,
        google_ads: GoogleAdsConfig {
            customer_id: customer_id.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_enforces_presence_and_active_flag() {
        let snapshot = Snapshot::new([
            record("acme", "Acme", true, "111"),
            record("globex", "Globex", false, "222"),
        ]);

        let acme = snapshot.resolve("acme").expect("active tenant");
        assert_eq!(acme.upstream_account_id(), "111");
        assert_eq!(snapshot.resolve("globex"), Err(GateError::Inactive));
        assert_eq!(snapshot.resolve("initech"), Err(GateError::NotFound));
        // Ids are case-sensitive keys.
        assert_eq!(snapshot.resolve("ACME"), Err(GateError::NotFound));
    }

    #[test]
    fn later_record_with_same_id_replaces_earlier() {
        let snapshot = Snapshot::new([
            record("acme", "Old", true, "1"),
            record("acme", "New", true, "2"),
        ]);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.resolve("acme").expect("acme").name, "New");
    }
}
