//! Wire types for the Auvik REST API.
//!
//! Every list endpoint wraps its results in a JSON:API style envelope:
//! `{ "data": [entity, …], "links": { "next": url? } }`. Single-resource
//! endpoints return `{ "data": entity }`. Each view below models only the
//! fields the report pipeline reads; the rest of the upstream schema is
//! ignored at decode time.
//!
//! Statistic sample rows are positional numeric arrays. Index 0 is the
//! sample timestamp; the remaining columns are metric values whose meaning
//! depends on the endpoint (bandwidth: tx/rx/total, utilization: percent).

use serde::{Deserialize, Serialize};

// ── Envelopes ────────────────────────────────────────────────────────

/// Paginated response envelope returned by all list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Document<T> {
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default)]
    pub links: Links,
}

/// Single-resource response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleDocument<T> {
    pub data: T,
}

/// Pagination links. Only `next` is followed; a missing `next` ends the
/// chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub next: Option<String>,
}

// ── Tenants ──────────────────────────────────────────────────────────

/// Tenant record — from `GET /tenants/detail`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantEntity {
    pub id: String,
    pub attributes: TenantAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantAttributes {
    /// Unique key used to address the tenant everywhere in this crate.
    pub domain_prefix: String,
    pub display_name: String,
}

// ── Alerts ───────────────────────────────────────────────────────────

/// Alert history record — from `GET /alert/history/info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertEntity {
    pub id: String,
    pub attributes: AlertAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertAttributes {
    pub severity: String,
    pub status: String,
}

// ── Statistics ───────────────────────────────────────────────────────

/// Shared `attributes` shape of the `/stat/…` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatAttributes {
    #[serde(default)]
    pub stats: Vec<StatSeries>,
}

/// One series of positional sample rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatSeries {
    #[serde(default)]
    pub data: Vec<Vec<f64>>,
}

impl StatAttributes {
    /// Sample rows of the first series, or an empty slice when the device
    /// reported nothing over the window.
    pub fn samples(&self) -> &[Vec<f64>] {
        self.stats.first().map_or(&[], |series| series.data.as_slice())
    }
}

/// Per-device statistic record — from `GET /stat/device/{metric}` and
/// `GET /stat/deviceAvailability/uptime`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceStatEntity {
    pub id: String,
    pub attributes: StatAttributes,
    pub relationships: DeviceStatRelationships,
}

impl DeviceStatEntity {
    pub fn samples(&self) -> &[Vec<f64>] {
        self.attributes.samples()
    }

    pub fn device(&self) -> &DeviceRef {
        &self.relationships.device.data
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceStatRelationships {
    pub device: DeviceRelationship,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRelationship {
    pub data: DeviceRef,
}

/// Device summary embedded in stat relationships.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRef {
    pub id: String,
    pub device_name: String,
    pub device_type: String,
}

/// Per-interface statistic record — from `GET /stat/interface/{metric}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceStatEntity {
    pub id: String,
    pub attributes: StatAttributes,
    pub relationships: InterfaceStatRelationships,
}

impl InterfaceStatEntity {
    pub fn samples(&self) -> &[Vec<f64>] {
        self.attributes.samples()
    }

    pub fn interface(&self) -> &InterfaceRef {
        &self.relationships.interface.data
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceStatRelationships {
    pub interface: InterfaceRelationship,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceRelationship {
    pub data: InterfaceRef,
}

/// Interface summary embedded in stat relationships.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceRef {
    pub interface_name: String,
    pub parent_device: String,
}

// ── Inventory ────────────────────────────────────────────────────────

/// Device inventory record — from `GET /inventory/device/info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceEntity {
    pub id: String,
    pub attributes: DeviceAttributes,
    #[serde(default)]
    pub relationships: DeviceRelationships,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceAttributes {
    pub device_name: String,
    pub device_type: String,
    /// ISO 8601 date-time, absent for devices Auvik has never seen up.
    #[serde(default)]
    pub last_seen_time: Option<String>,
    #[serde(default)]
    pub online_status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceRelationships {
    #[serde(default)]
    pub networks: NetworkMemberships,
}

/// Networks a device belongs to. Auvik multi-homes devices, so this can
/// hold zero, one, or several entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkMemberships {
    #[serde(default)]
    pub data: Vec<NetworkMembership>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkMembership {
    pub attributes: NetworkMembershipAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkMembershipAttributes {
    #[serde(default)]
    pub network_name: String,
}

/// Network inventory record — from `GET /inventory/network/info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkEntity {
    pub id: String,
    pub attributes: NetworkAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkAttributes {
    /// Empty for networks the operator never labelled.
    #[serde(default)]
    pub network_name: String,
}

/// Interface inventory record — from `GET /inventory/interface/info/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceEntity {
    pub id: String,
    pub attributes: InterfaceAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceAttributes {
    #[serde(default)]
    pub interface_name: Option<String>,
    /// Negotiated link speed in bits per second, as a decimal string.
    #[serde(default)]
    pub negotiated_speed: Option<String>,
}

// ── Wire-value enums ─────────────────────────────────────────────────

/// Device statistic selector (URL path segment of `/stat/device/{metric}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceMetric {
    Bandwidth,
    CpuUtilization,
    MemoryUtilization,
    StorageUtilization,
}

impl DeviceMetric {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bandwidth => "bandwidth",
            Self::CpuUtilization => "cpuUtilization",
            Self::MemoryUtilization => "memoryUtilization",
            Self::StorageUtilization => "storageUtilization",
        }
    }
}

/// Interface statistic selector (URL path segment of `/stat/interface/{metric}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterfaceMetric {
    Utilization,
    PacketBroadcast,
}

impl InterfaceMetric {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Utilization => "utilization",
            Self::PacketBroadcast => "packetBroadcast",
        }
    }
}

/// `filter[deviceType]` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceType {
    Firewall,
    Router,
    Switch,
    Stack,
    AccessPoint,
    Server,
    Camera,
    Storage,
    Bridge,
    L3Switch,
}

impl DeviceType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Firewall => "firewall",
            Self::Router => "router",
            Self::Switch => "switch",
            Self::Stack => "stack",
            Self::AccessPoint => "accessPoint",
            Self::Server => "server",
            Self::Camera => "camera",
            Self::Storage => "storage",
            Self::Bridge => "bridge",
            Self::L3Switch => "l3Switch",
        }
    }
}

/// `filter[interfaceType]` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterfaceType {
    Ethernet,
    Wifi,
    VirtualNic,
}

impl InterfaceType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ethernet => "ethernet",
            Self::Wifi => "wifi",
            Self::VirtualNic => "virtualNic",
        }
    }
}

/// `filter[onlineStatus]` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnlineStatus {
    Online,
    Offline,
}

impl OnlineStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }
}
