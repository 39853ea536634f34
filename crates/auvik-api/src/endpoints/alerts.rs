// Alert history endpoints.

use crate::client::AuvikClient;
use crate::error::Error;
use crate::types::AlertEntity;

impl AuvikClient {
    /// Alerts still open for a tenant: created, not dismissed, dispatched.
    ///
    /// `GET /alert/history/info?tenants={tenant}&filter[status]=created
    /// &filter[dismissed]=false&filter[dispatched]=true`
    pub async fn open_alerts(&self, tenant: &str) -> Result<Vec<AlertEntity>, Error> {
        let url = self.endpoint(
            "alert/history/info",
            &[
                ("tenants", tenant.to_owned()),
                ("filter[status]", "created".to_owned()),
                ("filter[dismissed]", "false".to_owned()),
                ("filter[dispatched]", "true".to_owned()),
            ],
        )?;
        self.get_paginated(url).await
    }
}
