// Inventory endpoints: devices, interfaces, networks.

use crate::client::AuvikClient;
use crate::error::Error;
use crate::types::{DeviceEntity, DeviceType, InterfaceEntity, NetworkEntity, OnlineStatus};

impl AuvikClient {
    /// Every device on a tenant.
    ///
    /// `GET /inventory/device/info?tenants={tenant}&page[first]=1000`
    pub async fn devices(&self, tenant: &str) -> Result<Vec<DeviceEntity>, Error> {
        let url = self.endpoint(
            "inventory/device/info",
            &[
                ("tenants", tenant.to_owned()),
                ("page[first]", "1000".to_owned()),
            ],
        )?;
        self.get_paginated(url).await
    }

    /// Devices of one type on a tenant.
    ///
    /// `GET /inventory/device/info?filter[deviceType]={type}&tenants={tenant}`
    pub async fn devices_by_type(
        &self,
        tenant: &str,
        device_type: DeviceType,
    ) -> Result<Vec<DeviceEntity>, Error> {
        let url = self.endpoint(
            "inventory/device/info",
            &[
                ("filter[deviceType]", device_type.as_str().to_owned()),
                ("tenants", tenant.to_owned()),
            ],
        )?;
        self.get_paginated(url).await
    }

    /// Devices filtered by online status.
    ///
    /// `GET /inventory/device/info?filter[onlineStatus]={status}&tenants={tenant}`
    pub async fn devices_by_status(
        &self,
        tenant: &str,
        status: OnlineStatus,
    ) -> Result<Vec<DeviceEntity>, Error> {
        let url = self.endpoint(
            "inventory/device/info",
            &[
                ("filter[onlineStatus]", status.as_str().to_owned()),
                ("tenants", tenant.to_owned()),
            ],
        )?;
        self.get_paginated(url).await
    }

    /// Inventory record for a single device.
    ///
    /// `GET /inventory/device/info/{id}`
    pub async fn device_info(&self, device_id: &str) -> Result<DeviceEntity, Error> {
        let url = self.endpoint(&format!("inventory/device/info/{device_id}"), &[])?;
        self.get_one(url).await
    }

    /// Every network discovered on a tenant.
    ///
    /// `GET /inventory/network/info?tenants={tenant}`
    pub async fn networks(&self, tenant: &str) -> Result<Vec<NetworkEntity>, Error> {
        let url = self.endpoint("inventory/network/info", &[("tenants", tenant.to_owned())])?;
        self.get_paginated(url).await
    }

    /// Inventory record for a single interface.
    ///
    /// `GET /inventory/interface/info/{id}`
    pub async fn interface_info(&self, interface_id: &str) -> Result<InterfaceEntity, Error> {
        let url = self.endpoint(&format!("inventory/interface/info/{interface_id}"), &[])?;
        self.get_one(url).await
    }
}
