// Tenant discovery endpoints.

use crate::client::AuvikClient;
use crate::error::Error;
use crate::types::TenantEntity;

impl AuvikClient {
    /// List every tenant visible under the MSP's domain prefix.
    ///
    /// `GET /tenants/detail?tenantDomainPrefix={prefix}`
    pub async fn list_tenants(&self, domain_prefix: &str) -> Result<Vec<TenantEntity>, Error> {
        let url = self.endpoint(
            "tenants/detail",
            &[("tenantDomainPrefix", domain_prefix.to_owned())],
        )?;
        self.get_paginated(url).await
    }
}
