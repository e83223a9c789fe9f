//! Deterministic synthetic data for a fresh [`MemoryStore`].

use chrono::Duration;
use fishdesk_core::models::linked_tenant::{LinkKey, LinkedTenant, LinkedTenantSnapshot};
use fishdesk_core::models::tenant::Tenant;
use tracing::info;

use super::MemoryStore;
use crate::config::SeedConfig;
use crate::rng::SeededRng;

const NAME_PREFIXES: [&str; 5] = [
    "山田水産",
    "田中漁業",
    "佐藤海運",
    "鈴木マリン",
    "高橋フィッシング",
];

const SEED_LINK_CREATOR: &str = "admin-user";
const MAX_SEED_LINKS_PER_TENANT: usize = 4;

/// What a call to [`MemoryStore::seed`] added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub tenants_created: usize,
    pub links_created: usize,
}

impl MemoryStore {
    /// Populate empty stores with synthetic tenants and links.
    ///
    /// Each kind is only seeded while its store is empty, so calling
    /// this again is a no-op.
    pub fn seed(&self, config: &SeedConfig) -> SeedReport {
        let mut rng = SeededRng::new(config.rng_seed);
        let mut report = SeedReport::default();

        if self.tenants.is_empty() {
            let tenants: Vec<Tenant> = (1..=config.tenant_count)
                .map(|i| self.seed_tenant(i, config.tenant_count, &mut rng))
                .collect();
            report.tenants_created = tenants.len();
            self.tenants.put_all(tenants);
        }

        if self.links.is_empty() {
            report.links_created = self.seed_links(config.linked_tenant_sources, &mut rng);
        }

        if report != SeedReport::default() {
            info!(
                tenants = report.tenants_created,
                links = report.links_created,
                seed = config.rng_seed,
                "Seeded in-memory store"
            );
        }
        report
    }

    fn seed_tenant(&self, i: usize, total: usize, rng: &mut SeededRng) -> Tenant {
        let prefix = NAME_PREFIXES[i % NAME_PREFIXES.len()];
        let name = if i > 1 {
            format!("{prefix} {i}")
        } else {
            prefix.to_string()
        };
        // Lower indexes are older.
        let age_days = (total - i) as i64;
        let stale_hours = (50 - (i % 50)) as i64;

        Tenant {
            id: format!("tenant-{i:03}-{}", rng.base36(9)),
            name,
            address: format!(
                "〒{}-{:04} 東京都港区{i}丁目{i}-{i}",
                100 + i,
                i * 11
            ),
            created_at: Some(self.started_at - Duration::days(age_days)),
            updated_at: Some(self.started_at - Duration::hours(stale_hours)),
        }
    }

    fn seed_links(&self, sources: usize, rng: &mut SeededRng) -> usize {
        let tenants = self.tenants.get_all();
        if tenants.len() < 2 {
            return 0;
        }

        let mut created = 0;
        for (i, tenant) in tenants.iter().enumerate().take(sources) {
            let link_count = rng.next_usize(1, MAX_SEED_LINKS_PER_TENANT);
            for j in 0..link_count {
                let target = &tenants[(i + j + 1) % tenants.len()];
                if target.id == tenant.id {
                    continue;
                }
                let key = LinkKey::new(tenant.id.clone(), target.id.clone());
                let link = LinkedTenant {
                    id: key.id(),
                    tenant_id: key.tenant_id,
                    linked_tenant_id: key.linked_tenant_id,
                    realtime: j % 2 == 0,
                    created_at: self.started_at - Duration::days(j as i64),
                    created_by: SEED_LINK_CREATOR.to_string(),
                    tenant: LinkedTenantSnapshot::of(target, self.started_at),
                };
                if self.links.insert_if_absent(link) {
                    created += 1;
                }
            }
        }
        created
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(tenant_count: usize) -> SeedConfig {
        SeedConfig {
            tenant_count,
            ..Default::default()
        }
    }

    #[test]
    fn seeds_named_and_addressed_tenants() {
        let store = MemoryStore::new();
        let report = store.seed(&config(100));
        assert_eq!(report.tenants_created, 100);
        assert_eq!(store.tenants.len(), 100);

        let tenants = store.tenants.get_all();
        assert_eq!(tenants[0].name, "田中漁業");
        assert_eq!(tenants[1].name, "佐藤海運 2");
        assert_eq!(tenants[4].name, "山田水産 5");
        assert_eq!(tenants[0].address, "〒101-0011 東京都港区1丁目1-1");
        assert!(tenants[0].id.starts_with("tenant-001-"));
        assert_eq!(tenants[0].id.len(), "tenant-001-".len() + 9);
    }

    #[test]
    fn older_tenants_were_created_earlier() {
        let store = MemoryStore::new();
        store.seed(&config(10));
        let tenants = store.tenants.get_all();
        for pair in tenants.windows(2) {
            assert!(pair[0].created_at < pair[1].created_at);
        }
        assert_eq!(tenants[9].created_at, Some(store.started_at()));
    }

    #[test]
    fn seeding_is_idempotent() {
        let store = MemoryStore::new();
        let first = store.seed(&config(20));
        assert!(first.links_created > 0);

        let second = store.seed(&config(20));
        assert_eq!(second, SeedReport::default());
        assert_eq!(store.tenants.len(), 20);
        assert_eq!(store.links.len(), first.links_created);
    }

    #[test]
    fn same_seed_same_ids() {
        let a = MemoryStore::new();
        let b = MemoryStore::new();
        a.seed(&config(15));
        b.seed(&config(15));
        let ids = |s: &MemoryStore| -> Vec<String> {
            s.tenants.get_all().into_iter().map(|t| t.id).collect()
        };
        assert_eq!(ids(&a), ids(&b));
        let link_ids = |s: &MemoryStore| -> Vec<String> {
            s.links.get_all().into_iter().map(|l| l.id).collect()
        };
        assert_eq!(link_ids(&a), link_ids(&b));
    }

    #[test]
    fn links_point_forward_and_snapshot_target() {
        let store = MemoryStore::new();
        store.seed(&config(10));
        let tenants = store.tenants.get_all();
        for link in store.links.get_all() {
            assert_ne!(link.tenant_id, link.linked_tenant_id);
            assert_eq!(link.id, format!("link-{}-{}", link.tenant_id, link.linked_tenant_id));
            let target = tenants.iter().find(|t| t.id == link.linked_tenant_id).unwrap();
            assert_eq!(link.tenant.name, target.name);
            assert_eq!(link.created_by, "admin-user");
        }
        // Every source among the first tenants has at least one link.
        assert!(store.links.any(|l| l.tenant_id == tenants[0].id));
    }

    #[test]
    fn tiny_stores_get_no_links() {
        let store = MemoryStore::new();
        let report = store.seed(&config(1));
        assert_eq!(report.tenants_created, 1);
        assert_eq!(report.links_created, 0);
    }
}
