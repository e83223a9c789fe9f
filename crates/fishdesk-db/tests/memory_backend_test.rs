//! Integration tests for the in-memory backend.

use std::sync::Arc;

use fishdesk_auth::{Base64Codec, PasswordCodec, SharedCodec};
use fishdesk_core::FishdeskError;
use fishdesk_core::models::account::CreateAccount;
use fishdesk_core::models::linked_tenant::{CreateTenantLink, LinkKey};
use fishdesk_core::models::tenant::{CreateTenant, Tenant, UpdateTenant};
use fishdesk_core::query::ListQuery;
use fishdesk_core::repository::{
    AccountRepository, MemberSource, StatisticsRepository, TenantLinkRepository,
    TenantRepository,
};
use fishdesk_db::{MemoryBackend, MemoryStore, SeedConfig};

const SEED: u64 = 42;

/// Helper: a seeded store with `tenants` tenants.
fn setup(tenants: usize) -> MemoryBackend {
    let store = Arc::new(MemoryStore::new());
    store.seed(&SeedConfig {
        tenant_count: tenants,
        ..Default::default()
    });
    let codec: SharedCodec = Arc::new(Base64Codec::default());
    MemoryBackend::new(store, codec, SEED)
}

fn link_input(tenant_id: &str, linked_tenant_id: &str, realtime: bool) -> CreateTenantLink {
    CreateTenantLink {
        tenant_id: tenant_id.into(),
        linked_tenant_id: linked_tenant_id.into(),
        created_by: "operator".into(),
        realtime,
    }
}

// -----------------------------------------------------------------------
// Tenants
// -----------------------------------------------------------------------

#[tokio::test]
async fn list_tenants_uses_default_page_size() {
    let backend = setup(100);

    let page = backend.list_tenants(ListQuery::new()).await.unwrap();
    assert_eq!(page.items.len(), 30);
    assert_eq!(page.next_token.as_deref(), Some("30"));

    let last = backend
        .list_tenants(ListQuery::new().after("90"))
        .await
        .unwrap();
    assert_eq!(last.items.len(), 10);
    assert!(last.next_token.is_none());
}

#[tokio::test]
async fn list_tenants_filters_by_name() {
    let backend = setup(100);

    let page = backend
        .list_tenants(ListQuery::new().name_contains("山田").with_limit(1000))
        .await
        .unwrap();
    assert_eq!(page.items.len(), 20);
    assert!(page.items.iter().all(|t| t.name.contains("山田水産")));
}

#[tokio::test]
async fn create_then_update_tenant() {
    let backend = setup(3);

    let created = backend
        .create_tenant(CreateTenant {
            name: "Test Fisheries".into(),
            address: None,
        })
        .await
        .unwrap();
    assert!(created.id.starts_with("tenant-new-"));
    assert_eq!(created.address, "");
    assert_eq!(created.created_at, created.updated_at);

    // Created tenants are listed last and hidden by exclude_test.
    let all = backend.list_tenants(ListQuery::new()).await.unwrap();
    assert_eq!(all.items.last().unwrap().id, created.id);
    let visible = backend
        .list_tenants(ListQuery::new().excluding_test())
        .await
        .unwrap();
    assert_eq!(visible.items.len(), 3);

    let updated = backend
        .update_tenant(
            &created.id,
            UpdateTenant {
                name: "佐藤海運 東".into(),
                address: "〒105-0001".into(),
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "佐藤海運 東");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(backend.get_tenant(&created.id).await.unwrap(), Some(updated));
}

#[tokio::test]
async fn update_unknown_tenant_is_none() {
    let backend = setup(3);
    let result = backend
        .update_tenant(
            "tenant-missing",
            UpdateTenant {
                name: "x".into(),
                address: String::new(),
            },
        )
        .await
        .unwrap();
    assert!(result.is_none());
    assert_eq!(backend.store().tenants.len(), 3);
}

// -----------------------------------------------------------------------
// Links
// -----------------------------------------------------------------------

/// Helper: a fresh tenant no seeded link points at.
async fn unlinked_tenant(backend: &MemoryBackend) -> Tenant {
    backend
        .create_tenant(CreateTenant {
            name: "高橋フィッシング 新".into(),
            address: Some("〒150-0001".into()),
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn upsert_link_is_keyed_by_pair() {
    let backend = setup(5);
    let a = backend.store().tenants.get_all()[0].id.clone();
    let target = unlinked_tenant(&backend).await;
    let c = &target.id;
    let before = backend.store().links.len();

    let first = backend.upsert_link(link_input(&a, c, false)).await.unwrap().unwrap();
    assert_eq!(first.id, format!("link-{a}-{c}"));
    assert_eq!(first.tenant.name, target.name);
    assert_eq!(first.tenant.address, "〒150-0001");
    assert_eq!(backend.store().links.len(), before + 1);

    let second = backend.upsert_link(link_input(&a, c, true)).await.unwrap().unwrap();
    assert!(second.realtime);
    assert_eq!(backend.store().links.len(), before + 1);
}

#[tokio::test]
async fn upsert_link_to_unknown_tenant_is_none() {
    let backend = setup(5);
    let a = backend.store().tenants.get_all()[0].id.clone();
    let before = backend.store().links.len();

    let result = backend
        .upsert_link(link_input(&a, "tenant-nope", true))
        .await
        .unwrap();
    assert!(result.is_none());
    assert_eq!(backend.store().links.len(), before);
}

#[tokio::test]
async fn create_link_rejects_existing_pair() {
    let backend = setup(5);
    let a = backend.store().tenants.get_all()[0].id.clone();
    let target = unlinked_tenant(&backend).await;
    let c = &target.id;

    backend
        .create_link(link_input(&a, c, false))
        .await
        .unwrap()
        .unwrap();
    let err = backend
        .create_link(link_input(&a, c, true))
        .await
        .unwrap_err();
    assert!(matches!(err, FishdeskError::AlreadyExists { .. }));

    let stored = backend
        .get_link(&LinkKey::new(a.as_str(), c.as_str()))
        .await
        .unwrap()
        .unwrap();
    assert!(!stored.realtime);
}

#[tokio::test]
async fn toggle_and_delete_link() {
    let backend = setup(5);
    let link = backend.store().links.get_all().remove(0);
    let key = link.key();

    let once = backend.toggle_link_realtime(&key).await.unwrap();
    assert_eq!(once, Some(!link.realtime));
    let twice = backend.toggle_link_realtime(&key).await.unwrap();
    assert_eq!(twice, Some(link.realtime));

    assert!(backend.delete_link(&key).await.unwrap());
    assert!(!backend.delete_link(&key).await.unwrap());
    assert!(backend.get_link(&key).await.unwrap().is_none());
    assert_eq!(backend.toggle_link_realtime(&key).await.unwrap(), None);
}

#[tokio::test]
async fn list_links_only_returns_outgoing() {
    let backend = setup(10);
    let source = backend.store().tenants.get_all()[0].id.clone();

    let links = backend.list_links(&source).await.unwrap();
    assert!(!links.is_empty());
    assert!(links.iter().all(|l| l.tenant_id == source));
}

// -----------------------------------------------------------------------
// Members and accounts
// -----------------------------------------------------------------------

#[tokio::test]
async fn ensure_members_is_memoized() {
    let backend = setup(3);
    let tenant = backend.store().tenants.get_all().remove(0);

    let empty = backend.get_tenant_with_members(&tenant.id).await.unwrap();
    assert_eq!(empty.tenant.as_ref(), Some(&tenant));
    assert!(empty.members.is_empty());

    let created = backend.ensure_members(&tenant).await.unwrap();
    assert!((5..=19).contains(&created));
    assert_eq!(backend.ensure_members(&tenant).await.unwrap(), 0);

    let first = backend.get_tenant_with_members(&tenant.id).await.unwrap();
    let second = backend.get_tenant_with_members(&tenant.id).await.unwrap();
    assert_eq!(first.members.len(), created);
    assert_eq!(first, second);
}

#[tokio::test]
async fn members_are_identical_across_fresh_stores() {
    let a = setup(3);
    let b = setup(3);
    let tenant = a.store().tenants.get_all().remove(0);
    assert!(b.store().tenants.contains(&tenant.id));

    a.ensure_members(&tenant).await.unwrap();
    b.ensure_members(&tenant).await.unwrap();
    assert_eq!(
        a.list_accounts_by_tenant(&tenant.id).await.unwrap(),
        b.list_accounts_by_tenant(&tenant.id).await.unwrap()
    );
}

#[tokio::test]
async fn ensure_members_keeps_existing_accounts() {
    let backend = setup(3);
    let tenant = backend.store().tenants.get_all().remove(0);
    let taken = format!("user-{}-001", tenant.id);

    backend
        .create_account(CreateAccount {
            id: taken.clone(),
            name: "先客".into(),
        })
        .await
        .unwrap();
    backend
        .update_account_nickname(&taken, "変更済み")
        .await
        .unwrap();

    let created = backend.ensure_members(&tenant).await.unwrap();
    assert!((4..=18).contains(&created));

    let kept = backend.get_account(&taken).await.unwrap().unwrap();
    assert_eq!(kept.name, "先客");
    assert_eq!(kept.nickname, "変更済み");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_ensure_members_inserts_each_member_once() {
    let backend = setup(3);
    let tenant = backend.store().tenants.get_all().remove(0);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let backend = backend.clone();
            let tenant = tenant.clone();
            tokio::spawn(async move { backend.ensure_members(&tenant).await.unwrap() })
        })
        .collect();

    let mut inserted = 0;
    for handle in handles {
        inserted += handle.await.unwrap();
    }

    let members = backend.list_accounts_by_tenant(&tenant.id).await.unwrap();
    assert_eq!(inserted, members.len());
    assert_eq!(backend.store().accounts.len(), members.len());
}

#[tokio::test]
async fn unknown_tenant_with_members() {
    let backend = setup(3);
    let result = backend.get_tenant_with_members("tenant-x").await.unwrap();
    assert!(result.tenant.is_none());
    assert!(result.members.is_empty());
}

#[tokio::test]
async fn account_lifecycle() {
    let backend = setup(1);
    let codec = Base64Codec::default();

    let account = backend
        .create_account(CreateAccount {
            id: "user-x".into(),
            name: "山田太郎".into(),
        })
        .await
        .unwrap();
    assert_eq!(account.nickname, "山田太郎");
    assert_eq!(codec.decode(&account.encrypted_password), "password-山田太郎");
    assert!(account.tenants.is_empty());
    assert!(account.line_users.is_none());

    let renamed = backend
        .update_account_nickname("user-x", "タロウ")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(renamed.nickname, "タロウ");
    assert_eq!(renamed.name, "山田太郎");

    let rotated = backend
        .update_account_password("user-x", "s3cret")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(codec.decode(&rotated.encrypted_password), "s3cret");
    assert_eq!(backend.get_account("user-x").await.unwrap(), Some(rotated));

    assert!(
        backend
            .update_account_password("user-missing", "pw")
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        backend
            .update_account_nickname("user-missing", "n")
            .await
            .unwrap()
            .is_none()
    );
}

// -----------------------------------------------------------------------
// Statistics
// -----------------------------------------------------------------------

#[tokio::test]
async fn dashboard_counts_store_contents() {
    let backend = setup(4);
    let tenant = backend.store().tenants.get_all().remove(0);
    backend.ensure_members(&tenant).await.unwrap();

    let accounts = backend.list_accounts_by_tenant(&tenant.id).await.unwrap();
    let devices: u64 = accounts.iter().map(|a| a.device_count() as u64).sum();

    let stats = backend.dashboard_stats().await.unwrap();
    assert_eq!(stats.total_tenants, 4);
    assert_eq!(stats.total_fisher_users, accounts.len() as u64);
    assert_eq!(stats.total_devices, devices);
    // tenant-001..004 open counts: 0, 1, 1, 2.
    assert_eq!(stats.open_accidents, 4);
}

#[tokio::test]
async fn tenant_stats_follow_id_number() {
    let backend = setup(1);
    let stats = backend.tenant_stats("tenant-012-abcdefghi").await.unwrap();
    assert_eq!(stats.fisher_user_count, 111);
    assert_eq!(stats.open_accident_count, 6);
    assert_eq!(stats.total_accident_count, 46);
}
