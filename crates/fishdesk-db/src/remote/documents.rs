//! GraphQL operations sent by the remote backend.
//!
//! Each [`Operation`] pairs the document text with the name of the
//! top-level field that carries its result.

/// A named GraphQL document and its result field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub field: &'static str,
    pub document: &'static str,
}

macro_rules! operation {
    ($ident:ident, $name:literal, $field:literal, $document:expr) => {
        pub const $ident: Operation = Operation {
            name: $name,
            field: $field,
            document: $document,
        };
    };
}

// --- Tenants -----------------------------------------------------------

operation!(
    GET_TENANTS,
    "GetTenants",
    "getTenants",
    "query GetTenants($limit: Int, $nextToken: String, $nameCont: String) {
  getTenants(limit: $limit, nextToken: $nextToken, nameCont: $nameCont) {
    tenants { id name address createdAt updatedAt }
    nextToken
  }
}"
);

operation!(
    GET_TENANT_BY_ID,
    "GetTenantById",
    "getTenantById",
    "query GetTenantById($id: ID!) {
  getTenantById(id: $id) { id name address createdAt updatedAt }
}"
);

operation!(
    GET_TENANT_WITH_MEMBERS,
    "GetTenantWithMembers",
    "getTenantById",
    "query GetTenantWithMembers($id: ID!) {
  getTenantById(id: $id) {
    id name address createdAt updatedAt
    members {
      id name nickname encryptedPassword
      tenants { id name }
      devices { devices { id imei deviceType } }
      lineUsers { userId displayName pictureUrl }
    }
  }
}"
);

operation!(
    UPDATE_TENANT,
    "UpdateTenant",
    "updateTenant",
    "mutation UpdateTenant($id: ID!, $name: String!, $address: String) {
  updateTenant(id: $id, name: $name, address: $address) { id name address createdAt updatedAt }
}"
);

operation!(
    CREATE_TENANT,
    "CreateTenant",
    "createTenant",
    "mutation CreateTenant($name: String!, $address: String) {
  createTenant(name: $name, address: $address) { id name address createdAt updatedAt }
}"
);

// --- Tenant links ------------------------------------------------------

operation!(
    GET_LINKED_TENANTS,
    "GetLinkedTenants",
    "getLinkedTenants",
    "query GetLinkedTenants($tenantId: ID!) {
  getLinkedTenants(tenantId: $tenantId) {
    id tenantId linkedTenantId realtime createdAt createdBy
    tenant { id name address createdAt updatedAt topicArn }
  }
}"
);

operation!(
    CREATE_TENANT_LINK,
    "CreateTenantLink",
    "createTenantLink",
    "mutation CreateTenantLink($tenantId: ID!, $linkedTenantId: ID!, $createdBy: String!, $realtime: Boolean!) {
  createTenantLink(tenantId: $tenantId, linkedTenantId: $linkedTenantId, createdBy: $createdBy, realtime: $realtime) {
    id tenantId linkedTenantId realtime createdAt createdBy
    tenant { id name address createdAt updatedAt topicArn }
  }
}"
);

operation!(
    UPDATE_TENANT_LINK,
    "UpdateTenantLink",
    "updateTenantLink",
    "mutation UpdateTenantLink($tenantId: ID!, $linkedTenantId: ID!) {
  updateTenantLink(tenantId: $tenantId, linkedTenantId: $linkedTenantId) { realtime }
}"
);

operation!(
    DELETE_TENANT_LINK,
    "DeleteTenantLink",
    "deleteTenantLink",
    "mutation DeleteTenantLink($tenantId: ID!, $linkedTenantId: ID!) {
  deleteTenantLink(tenantId: $tenantId, linkedTenantId: $linkedTenantId)
}"
);

// --- Fisher users ------------------------------------------------------

operation!(
    GET_FISHER_USER_BY_ID,
    "GetFisherUserById",
    "getFisherUserById",
    "query GetFisherUserById($id: ID!) {
  getFisherUserById(id: $id) {
    id name nickname encryptedPassword
    tenants { id name }
    devices { devices { id imei deviceType } }
    lineUsers { userId displayName pictureUrl }
  }
}"
);

operation!(
    CREATE_FISHER_USER,
    "CreateFisherUser",
    "createFisherUser",
    "mutation CreateFisherUser($id: ID!, $name: String!) {
  createFisherUser(id: $id, name: $name) {
    id name nickname encryptedPassword
    tenants { id name }
    devices { devices { id imei deviceType } }
    lineUsers { userId displayName pictureUrl }
  }
}"
);

operation!(
    UPDATE_FISHER_USER_NICKNAME,
    "UpdateFisherUserNickname",
    "updateFisherUserNickname",
    "mutation UpdateFisherUserNickname($id: ID!, $nickname: String!) {
  updateFisherUserNickname(id: $id, nickname: $nickname) {
    id name nickname encryptedPassword
    tenants { id name }
    devices { devices { id imei deviceType } }
    lineUsers { userId displayName pictureUrl }
  }
}"
);

operation!(
    UPDATE_FISHER_USER_PASSWORD,
    "UpdateFisherUserPassword",
    "updateFisherUserPasswordWithEncryption",
    "mutation UpdateFisherUserPassword($id: ID!, $password: String!) {
  updateFisherUserPasswordWithEncryption(id: $id, password: $password) {
    id name nickname encryptedPassword
    tenants { id name }
    devices { devices { id imei deviceType } }
    lineUsers { userId displayName pictureUrl }
  }
}"
);

// --- Statistics --------------------------------------------------------

operation!(
    GET_TOTAL_TENANT_COUNT,
    "GetTotalTenantCount",
    "getTotalTenantCount",
    "query GetTotalTenantCount { getTotalTenantCount { count } }"
);

operation!(
    GET_TOTAL_FISHER_USER_COUNT,
    "GetTotalFisherUserCount",
    "getTotalFisherUserCount",
    "query GetTotalFisherUserCount { getTotalFisherUserCount { count } }"
);

operation!(
    GET_TOTAL_DEVICE_COUNT,
    "GetTotalDeviceCount",
    "getTotalDeviceCount",
    "query GetTotalDeviceCount { getTotalDeviceCount { count } }"
);

operation!(
    GET_ACCIDENT_COUNT_BY_STATUS,
    "GetAccidentCountByStatus",
    "getAccidentCountByStatus",
    "query GetAccidentCountByStatus($status: String!) {
  getAccidentCountByStatus(status: $status) { count }
}"
);

operation!(
    GET_TENANT_FISHER_USER_COUNT,
    "GetTenantFisherUserCount",
    "getTenantFisherUserCount",
    "query GetTenantFisherUserCount($tenantId: ID!) {
  getTenantFisherUserCount(tenantId: $tenantId) { count }
}"
);

operation!(
    GET_TENANT_ACCIDENT_COUNT,
    "GetTenantAccidentCount",
    "getTenantAccidentCount",
    "query GetTenantAccidentCount($tenantId: ID!, $status: String) {
  getTenantAccidentCount(tenantId: $tenantId, status: $status) { count }
}"
);
