//! Synthetic tenant members.
//!
//! Members are derived from a stream seeded by `(seed, tenant id)`, so a
//! tenant always receives the same members for the same seed.

use fishdesk_auth::{AuthError, PasswordCodec};
use fishdesk_core::models::account::{
    Account, DEVICE_TYPE_PRIMARY, DEVICE_TYPE_SECONDARY, Device, DeviceList, LineUser, TenantRef,
};
use fishdesk_core::models::tenant::Tenant;
use fishdesk_core::repository::MemberSource;
use fishdesk_core::FishdeskResult;
use tracing::{debug, info};

use super::MemoryBackend;
use crate::rng::SeededRng;

const MIN_MEMBERS: usize = 5;
const MAX_MEMBERS: usize = 19;
const MAX_DEVICES: usize = 3;
const LINE_IDENTITY_PROBABILITY: f64 = 0.7;

/// Build the member accounts of `tenant` for `seed`.
pub fn synthesize_members(
    tenant: &Tenant,
    seed: u64,
    codec: &dyn PasswordCodec,
) -> Result<Vec<Account>, AuthError> {
    let mut rng = SeededRng::for_key(seed, &tenant.id);
    let count = rng.next_usize(MIN_MEMBERS, MAX_MEMBERS);

    (1..=count)
        .map(|n| -> Result<Account, AuthError> {
            let user_id = format!("user-{}-{n:03}", tenant.id);
            let device_count = rng.next_usize(1, MAX_DEVICES);
            let devices = (0..device_count)
                .map(|j| Device {
                    id: format!("device-{user_id}-{j}"),
                    imei: Some(format!("35{}", rng.digits(13))),
                    device_type: if j == 0 {
                        DEVICE_TYPE_PRIMARY
                    } else {
                        DEVICE_TYPE_SECONDARY
                    }
                    .to_string(),
                })
                .collect();
            let line_users = rng.next_bool(LINE_IDENTITY_PROBABILITY).then(|| {
                vec![LineUser {
                    user_id: format!("line-{user_id}"),
                    display_name: Some(format!("LINE表示名{n}")),
                    picture_url: None,
                }]
            });

            Ok(Account {
                name: format!("漁師 {n:02}"),
                nickname: format!("ニックネーム{n}"),
                encrypted_password: codec.encode(&format!("password-{n}"))?,
                tenants: vec![TenantRef {
                    id: tenant.id.clone(),
                    name: tenant.name.clone(),
                }],
                devices: DeviceList { devices },
                line_users,
                id: user_id,
            })
        })
        .collect()
}

impl MemberSource for MemoryBackend {
    async fn ensure_members(&self, tenant: &Tenant) -> FishdeskResult<usize> {
        if self.store.accounts.any(|a| a.belongs_to(&tenant.id)) {
            debug!(tenant_id = %tenant.id, "Tenant already has members");
            return Ok(0);
        }

        // Existing accounts with a synthetic id are kept as they are.
        let members = synthesize_members(tenant, self.member_seed, self.codec.as_ref())?;
        let count = members
            .into_iter()
            .filter(|member| self.store.accounts.insert_if_absent(member.clone()))
            .count();

        info!(tenant_id = %tenant.id, count, "Synthesized tenant members");
        Ok(count)
    }
}
