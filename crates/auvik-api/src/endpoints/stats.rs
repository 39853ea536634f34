// Statistics endpoints.
//
// All stat queries are bounded by a `ReportWindow` and sampled at hourly
// intervals; the window is computed once per report run by the caller.

use crate::client::AuvikClient;
use crate::error::Error;
use crate::types::{
    DeviceMetric, DeviceStatEntity, DeviceType, InterfaceMetric, InterfaceStatEntity,
    InterfaceType,
};
use crate::window::ReportWindow;

impl AuvikClient {
    /// Per-device statistic series for a tenant.
    ///
    /// `GET /stat/device/{metric}?filter[fromTime]&filter[thruTime]
    /// &filter[interval]=hour[&filter[deviceType]]&tenants={tenant}`
    pub async fn device_stats(
        &self,
        tenant: &str,
        metric: DeviceMetric,
        window: &ReportWindow,
        device_type: Option<DeviceType>,
    ) -> Result<Vec<DeviceStatEntity>, Error> {
        let mut params = vec![
            ("filter[fromTime]", window.from_param()),
            ("filter[thruTime]", window.thru_param()),
            ("filter[interval]", "hour".to_owned()),
        ];
        if let Some(device_type) = device_type {
            params.push(("filter[deviceType]", device_type.as_str().to_owned()));
        }
        params.push(("tenants", tenant.to_owned()));

        let url = self.endpoint(&format!("stat/device/{}", metric.as_str()), &params)?;
        self.get_paginated(url).await
    }

    /// Per-device availability (uptime percentage) series for a tenant.
    ///
    /// `GET /stat/deviceAvailability/uptime?filter[fromTime]
    /// &filter[thruTime]&filter[interval]=hour&tenants={tenant}`
    pub async fn availability_stats(
        &self,
        tenant: &str,
        window: &ReportWindow,
    ) -> Result<Vec<DeviceStatEntity>, Error> {
        let url = self.endpoint(
            "stat/deviceAvailability/uptime",
            &[
                ("filter[fromTime]", window.from_param()),
                ("filter[thruTime]", window.thru_param()),
                ("filter[interval]", "hour".to_owned()),
                ("tenants", tenant.to_owned()),
            ],
        )?;
        self.get_paginated(url).await
    }

    /// Per-interface statistic series for one parent device.
    ///
    /// `GET /stat/interface/{metric}?filter[fromTime]&filter[thruTime]
    /// &filter[interval]=hour&filter[parentDevice]={device}
    /// [&filter[interfaceType]]`
    pub async fn interface_stats(
        &self,
        device: &str,
        metric: InterfaceMetric,
        window: &ReportWindow,
        interface_type: Option<InterfaceType>,
    ) -> Result<Vec<InterfaceStatEntity>, Error> {
        let mut params = vec![
            ("filter[fromTime]", window.from_param()),
            ("filter[thruTime]", window.thru_param()),
            ("filter[interval]", "hour".to_owned()),
            ("filter[parentDevice]", device.to_owned()),
        ];
        if let Some(interface_type) = interface_type {
            params.push(("filter[interfaceType]", interface_type.as_str().to_owned()));
        }

        let url = self.endpoint(&format!("stat/interface/{}", metric.as_str()), &params)?;
        self.get_paginated(url).await
    }
}
