// ── Reporter ──
//
// The facade the CLI drives. Owns the API client and the data directory
// services, and runs every fetch sequentially: the Auvik API rate-limits
// per account, so one request in flight is the polite maximum.

use std::path::PathBuf;

use auvik_api::types::{DeviceMetric, DeviceType, InterfaceMetric, InterfaceType, OnlineStatus};
use auvik_api::{AuvikClient, ReportWindow, TransportConfig};
use chrono::Local;
use indexmap::IndexMap;
use tracing::{debug, info};

use crate::aggregate::{self, Candidate, TopSelection, TOP_CAPACITY};
use crate::cache::ReportCache;
use crate::config::ServiceConfig;
use crate::error::CoreError;
use crate::model::{
    BandwidthRow, HealthRow, InventorySummary, NetworkRow, OfflineDevice, ReportDocument,
    ReportPayload, Tenant, TopBroadcaster,
};
use crate::store::JsonStore;
use crate::tenants::TenantDirectory;

/// Device types whose bandwidth makes the report. Endpoints (servers,
/// cameras) are deliberately absent; this section is about infrastructure.
const BANDWIDTH_DEVICE_TYPES: [DeviceType; 5] = [
    DeviceType::Firewall,
    DeviceType::Router,
    DeviceType::Switch,
    DeviceType::Stack,
    DeviceType::AccessPoint,
];

/// Device types that carry L2 broadcast domains.
const L2_DEVICE_TYPES: [DeviceType; 4] = [
    DeviceType::Switch,
    DeviceType::Stack,
    DeviceType::Bridge,
    DeviceType::L3Switch,
];

/// Interface types that can source broadcast traffic.
const BROADCAST_INTERFACE_TYPES: [InterfaceType; 3] = [
    InterfaceType::Ethernet,
    InterfaceType::Wifi,
    InterfaceType::VirtualNic,
];

/// 10 Gbps uplinks are backbone, not broadcasters; their counters would
/// drown every access port.
const EXCLUDED_LINK_SPEED: &str = "10000000000";

/// A generated (or cache-served) report plus its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedReport {
    pub tenant: Tenant,
    pub payload: ReportPayload,
    pub from_cache: bool,
}

/// High-level report service over one Auvik MSP account.
pub struct Reporter {
    config: ServiceConfig,
    client: AuvikClient,
    store: JsonStore,
    cache: ReportCache,
    directory: TenantDirectory,
}

impl Reporter {
    pub fn new(config: ServiceConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            timeout: config.timeout,
        };
        let client = AuvikClient::new(
            config.base_url.as_str(),
            config.username.clone(),
            config.api_key.clone(),
            &transport,
        )?;
        let store = JsonStore::new(&config.data_dir);
        let cache = ReportCache::new(store.clone(), config.cache_ttl);
        let directory = TenantDirectory::new(store.clone());
        Ok(Self {
            config,
            client,
            store,
            cache,
            directory,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    // ── Tenants ──────────────────────────────────────────────────────

    /// Fetches the tenant listing and rewrites the on-disk directory.
    pub async fn sync_tenants(&self) -> Result<Vec<Tenant>, CoreError> {
        let entities = self.client.list_tenants(&self.config.domain_prefix).await?;
        let tenants: Vec<Tenant> = entities.into_iter().map(Tenant::from).collect();
        self.directory.save(&tenants)?;
        debug!("tenant directory synced: {} tenants", tenants.len());
        Ok(tenants)
    }

    /// Fresh tenant listing for display, minus the MSP's own account.
    pub async fn tenants(&self) -> Result<Vec<Tenant>, CoreError> {
        let tenants = self.sync_tenants().await?;
        Ok(tenants
            .into_iter()
            .filter(|tenant| tenant.domain != self.config.domain_prefix)
            .collect())
    }

    /// Resolves a domain through the directory, syncing once on a miss.
    /// The retry covers tenants onboarded since the last sync.
    pub async fn resolve_tenant(&self, domain: &str) -> Result<Tenant, CoreError> {
        if let Some(tenant) = self.directory.lookup(domain)? {
            return Ok(tenant);
        }
        debug!("{domain} not in tenant directory, syncing");
        self.sync_tenants().await?;
        self.directory
            .lookup(domain)?
            .ok_or_else(|| CoreError::TenantNotFound {
                domain: domain.to_owned(),
            })
    }

    // ── Report generation ────────────────────────────────────────────

    /// Generates (or serves from cache) the full report for one tenant.
    ///
    /// `refresh` skips the cache read; the freshly generated payload is
    /// still written back.
    pub async fn generate(&self, domain: &str, refresh: bool) -> Result<GeneratedReport, CoreError> {
        let tenant = self.resolve_tenant(domain).await?;
        if !refresh {
            if let Some(payload) = self.cache.get::<ReportPayload>(&tenant.domain) {
                debug!("serving {domain} report from cache");
                return Ok(GeneratedReport {
                    tenant,
                    payload,
                    from_cache: true,
                });
            }
        }

        info!("generating report for {domain}");
        let window = ReportWindow::last_days(self.config.window_days);
        let uptime = self.uptime_report(&tenant.id, &window).await?;
        let alerts = self.open_alerts(&tenant.id).await?;
        let bandwidth = self.bandwidth_report(&tenant.id, &window).await?;
        let health = self.device_health(&tenant.id, &window).await?;

        let payload = ReportPayload {
            uptime,
            alerts,
            bandwidth,
            health,
        };
        self.cache.put(&tenant.domain, &payload)?;
        Ok(GeneratedReport {
            tenant,
            payload,
            from_cache: false,
        })
    }

    /// Mean uptime percentage per device type over the window.
    pub async fn uptime_report(
        &self,
        tenant: &str,
        window: &ReportWindow,
    ) -> Result<IndexMap<String, f64>, CoreError> {
        let availability = self.client.availability_stats(tenant, window).await?;
        Ok(aggregate::uptime_by_type(&availability))
    }

    /// Open alert counts per severity.
    pub async fn open_alerts(&self, tenant: &str) -> Result<IndexMap<String, u32>, CoreError> {
        let alerts = self.client.open_alerts(tenant).await?;
        Ok(aggregate::alert_counts(&alerts))
    }

    /// Bandwidth rows for the infrastructure device types, each with its
    /// busiest interface. Devices that reported no bandwidth samples are
    /// not monitored for traffic and stay off the report.
    pub async fn bandwidth_report(
        &self,
        tenant: &str,
        window: &ReportWindow,
    ) -> Result<Vec<BandwidthRow>, CoreError> {
        let mut report = Vec::new();
        for device_type in BANDWIDTH_DEVICE_TYPES {
            let devices = self
                .client
                .device_stats(tenant, DeviceMetric::Bandwidth, window, Some(device_type))
                .await?;
            for device in devices {
                let samples = device.samples();
                if samples.is_empty() {
                    continue;
                }
                let averages = aggregate::bandwidth_average(samples);
                let interfaces = self
                    .client
                    .interface_stats(
                        &device.device().id,
                        InterfaceMetric::Utilization,
                        window,
                        None,
                    )
                    .await?;
                let (top_interface, top_utilization) = aggregate::best_interface(&interfaces);
                report.push(BandwidthRow {
                    device: device.device().device_name.clone(),
                    device_type: aggregate::display_label(&device.device().device_type),
                    tx: averages.tx,
                    rx: averages.rx,
                    total: averages.total,
                    top_interface,
                    top_utilization,
                });
            }
        }
        Ok(report)
    }

    /// Unhealthy-device rows from the three utilization metrics.
    pub async fn device_health(
        &self,
        tenant: &str,
        window: &ReportWindow,
    ) -> Result<Vec<HealthRow>, CoreError> {
        let cpu = self
            .client
            .device_stats(tenant, DeviceMetric::CpuUtilization, window, None)
            .await?;
        let memory = self
            .client
            .device_stats(tenant, DeviceMetric::MemoryUtilization, window, None)
            .await?;
        let storage = self
            .client
            .device_stats(tenant, DeviceMetric::StorageUtilization, window, None)
            .await?;
        let joined = aggregate::stats_per_device(&cpu, &memory, &storage);
        Ok(aggregate::unhealthy_devices(&joined))
    }

    // ── Broadcast ranking ────────────────────────────────────────────

    /// The ten interfaces with the highest mean broadcast rate across a
    /// tenant's L2 gear, resolved to device and network names.
    pub async fn top_broadcasters(&self, domain: &str) -> Result<Vec<TopBroadcaster>, CoreError> {
        let tenant = self.resolve_tenant(domain).await?;
        let window = ReportWindow::last_days(self.config.window_days);

        let mut l2_devices = Vec::new();
        for device_type in L2_DEVICE_TYPES {
            l2_devices.extend(self.client.devices_by_type(&tenant.id, device_type).await?);
        }
        debug!("{domain}: {} L2 devices discovered", l2_devices.len());

        let mut selection = TopSelection::new(TOP_CAPACITY);
        for device in &l2_devices {
            for interface_type in BROADCAST_INTERFACE_TYPES {
                let interfaces = self
                    .client
                    .interface_stats(
                        &device.id,
                        InterfaceMetric::PacketBroadcast,
                        &window,
                        Some(interface_type),
                    )
                    .await?;
                for interface in interfaces {
                    let Some(average) = aggregate::broadcast_average(interface.samples()) else {
                        continue;
                    };
                    let info = self.client.interface_info(&interface.id).await?;
                    if info.attributes.negotiated_speed.as_deref() == Some(EXCLUDED_LINK_SPEED) {
                        debug!("skipping 10G uplink {}", interface.id);
                        continue;
                    }
                    selection.offer(Candidate {
                        interface_id: interface.id.clone(),
                        interface_name: interface.interface().interface_name.clone(),
                        parent_device: interface.interface().parent_device.clone(),
                        average,
                    });
                }
            }
        }

        let mut ranked = Vec::new();
        for candidate in selection.into_ranked() {
            let device = self.client.device_info(&candidate.parent_device).await?;
            let memberships = &device.relationships.networks.data;
            let network = if memberships.len() > 1 {
                "Multiple".to_owned()
            } else {
                memberships.first().map_or_else(
                    || "None".to_owned(),
                    |membership| membership.attributes.network_name.clone(),
                )
            };
            ranked.push(TopBroadcaster {
                parent: device.attributes.device_name.clone(),
                parent_type: device.attributes.device_type.clone(),
                network,
                interface: candidate.interface_name,
                average: candidate.average,
            });
        }
        Ok(ranked)
    }

    // ── Inventory views ──────────────────────────────────────────────

    /// Devices currently offline, with last-seen times and networks.
    pub async fn offline_devices(&self, domain: &str) -> Result<Vec<OfflineDevice>, CoreError> {
        let tenant = self.resolve_tenant(domain).await?;
        let devices = self
            .client
            .devices_by_status(&tenant.id, OnlineStatus::Offline)
            .await?;
        Ok(aggregate::offline_rows(&devices))
    }

    /// Every network discovered on a tenant, by display name.
    pub async fn networks(&self, domain: &str) -> Result<Vec<NetworkRow>, CoreError> {
        let tenant = self.resolve_tenant(domain).await?;
        let networks = self.client.networks(&tenant.id).await?;
        Ok(aggregate::network_rows(&networks))
    }

    /// Device counts per type across the whole tenant.
    pub async fn device_inventory(&self, domain: &str) -> Result<InventorySummary, CoreError> {
        let tenant = self.resolve_tenant(domain).await?;
        let devices = self.client.devices(&tenant.id).await?;
        Ok(aggregate::inventory_summary(&devices))
    }

    // ── Artifacts and cache ──────────────────────────────────────────

    /// Stamps a payload into the final document shape.
    #[must_use]
    pub fn render_document(&self, tenant: &Tenant, payload: &ReportPayload) -> ReportDocument {
        ReportDocument {
            name: tenant.name.clone(),
            date: Local::now().format("%B %Y").to_string(),
            uptime: payload.uptime.clone(),
            alerts: payload.alerts.clone(),
            bandwidth: payload.bandwidth.clone(),
            health: payload.health.clone(),
        }
    }

    /// Writes the document under `output/` and returns its path.
    pub fn write_document(
        &self,
        domain: &str,
        document: &ReportDocument,
    ) -> Result<PathBuf, CoreError> {
        let rel = format!("output/{domain}.json");
        self.store.write_pretty(&rel, document)?;
        Ok(self.store.path_of(&rel))
    }

    /// Drops one tenant's cache entry, or all of them. `Ok(false)` when
    /// there was nothing to drop.
    pub fn clear_cache(&self, domain: Option<&str>) -> Result<bool, CoreError> {
        match domain {
            Some(domain) => self.cache.clear(domain),
            None => self.cache.clear_all(),
        }
    }
}
