// ── Tenant directory ──
//
// Tenant ids are opaque and unfriendly; users address tenants by domain
// prefix. The directory persists both mappings so lookups cost nothing
// after the first sync. Two sibling files under `tenants/`, each in the
// same envelope the wire uses: `{"data": {domain: value}}`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::model::Tenant;
use crate::store::JsonStore;

const DOMAIN_ID_FILE: &str = "tenants/domain_id.json";
const DOMAIN_NAME_FILE: &str = "tenants/domain_name.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct MappingFile {
    #[serde(default)]
    data: IndexMap<String, String>,
}

/// On-disk domain-to-id and domain-to-name mappings.
#[derive(Debug, Clone)]
pub struct TenantDirectory {
    store: JsonStore,
}

impl TenantDirectory {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// True when both mapping files exist on disk. Says nothing about
    /// staleness; callers that miss a lookup re-sync regardless.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.store.exists(DOMAIN_ID_FILE) && self.store.exists(DOMAIN_NAME_FILE)
    }

    /// Rewrites both mapping files from a fresh tenant listing.
    pub fn save(&self, tenants: &[Tenant]) -> Result<(), CoreError> {
        let mut ids = MappingFile::default();
        let mut names = MappingFile::default();
        for tenant in tenants {
            ids.data.insert(tenant.domain.clone(), tenant.id.clone());
            names.data.insert(tenant.domain.clone(), tenant.name.clone());
        }
        self.store.write(DOMAIN_ID_FILE, &ids)?;
        self.store.write(DOMAIN_NAME_FILE, &names)
    }

    /// Resolves a domain prefix. `Ok(None)` when the directory has no
    /// entry (including when the files are missing entirely); a domain
    /// with an id but no recorded name falls back to the domain itself.
    pub fn lookup(&self, domain: &str) -> Result<Option<Tenant>, CoreError> {
        let ids: MappingFile = self.store.read(DOMAIN_ID_FILE)?.unwrap_or_default();
        let Some(id) = ids.data.get(domain) else {
            return Ok(None);
        };
        let names: MappingFile = self.store.read(DOMAIN_NAME_FILE)?.unwrap_or_default();
        Ok(Some(Tenant {
            id: id.clone(),
            domain: domain.to_owned(),
            name: names
                .data
                .get(domain)
                .cloned()
                .unwrap_or_else(|| domain.to_owned()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn directory_in(dir: &tempfile::TempDir) -> TenantDirectory {
        TenantDirectory::new(JsonStore::new(dir.path()))
    }

    fn tenant(id: &str, domain: &str, name: &str) -> Tenant {
        Tenant {
            id: id.to_owned(),
            domain: domain.to_owned(),
            name: name.to_owned(),
        }
    }

    #[test]
    fn save_writes_both_mapping_files() {
        let dir = tempfile::tempdir().unwrap();
        let directory = directory_in(&dir);
        directory
            .save(&[
                tenant("t1", "dom1", "Tenant One"),
                tenant("t2", "dom2", "Tenant Two"),
            ])
            .unwrap();

        let ids: Value = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join("tenants/domain_id.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(ids, json!({"data": {"dom1": "t1", "dom2": "t2"}}));

        let names: Value = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join("tenants/domain_name.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(
            names,
            json!({"data": {"dom1": "Tenant One", "dom2": "Tenant Two"}})
        );
    }

    #[test]
    fn save_of_empty_listing_still_creates_files() {
        let dir = tempfile::tempdir().unwrap();
        let directory = directory_in(&dir);
        directory.save(&[]).unwrap();
        assert!(directory.is_populated());
        assert_eq!(directory.lookup("dom1").unwrap(), None);
    }

    #[test]
    fn lookup_resolves_saved_domains() {
        let dir = tempfile::tempdir().unwrap();
        let directory = directory_in(&dir);
        directory.save(&[tenant("t1", "dom1", "Tenant One")]).unwrap();
        assert_eq!(
            directory.lookup("dom1").unwrap(),
            Some(tenant("t1", "dom1", "Tenant One"))
        );
        assert_eq!(directory.lookup("missing").unwrap(), None);
    }

    #[test]
    fn lookup_without_files_is_a_clean_miss() {
        let dir = tempfile::tempdir().unwrap();
        let directory = directory_in(&dir);
        assert!(!directory.is_populated());
        assert_eq!(directory.lookup("dom1").unwrap(), None);
    }

    #[test]
    fn missing_name_falls_back_to_the_domain() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("tenants")).unwrap();
        std::fs::write(
            dir.path().join("tenants/domain_id.json"),
            json!({"data": {"dom1": "t1"}}).to_string(),
        )
        .unwrap();
        std::fs::write(
            dir.path().join("tenants/domain_name.json"),
            json!({"data": {}}).to_string(),
        )
        .unwrap();
        let directory = directory_in(&dir);
        assert_eq!(
            directory.lookup("dom1").unwrap(),
            Some(tenant("t1", "dom1", "dom1"))
        );
    }
}
