//! Wire types exchanged with the OPI resource server.

use serde::{Deserialize, Serialize};

/// A VRF (virtual routing and forwarding) instance reported by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vrf {
    /// Unique name assigned or validated by the server.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// VXLAN network identifier; absent when the VRF is not VXLAN backed.
    pub vni: Option<u32>,
    /// Loopback IP address of the VRF.
    pub loopback: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// VXLAN tunnel endpoint IP address when configured.
    pub vtep: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Operational status reported by the server.
    pub status: Option<String>,
}

/// Body accepted by the VRF create endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VrfCreateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// VXLAN network identifier; omitted when unset.
    pub vni: Option<u32>,
    /// Loopback IP address of the VRF.
    pub loopback: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// VXLAN tunnel endpoint IP address.
    pub vtep: Option<String>,
}

/// One page of VRF records returned by the list endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VrfPage {
    #[serde(default)]
    /// Records in server determined order.
    pub vrfs: Vec<Vrf>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    /// Cursor for the next page; empty when the listing is complete.
    pub next_page_token: String,
}

/// Multipath behaviour of a remote `NVMe` controller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MultipathMode {
    /// Multipathing disabled; a single path is used.
    Disable,
    /// Active passive failover across paths.
    Failover,
    /// Active active use of all paths.
    Multipath,
}

/// A remote `NVMe` controller attached to the storage backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NvmeController {
    /// Unique name assigned or validated by the server.
    pub name: String,
    /// Multipath behaviour configured for the controller.
    pub multipath: MultipathMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Operational status reported by the server.
    pub status: Option<String>,
}

/// Body accepted by the remote controller create endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NvmeControllerCreateRequest {
    /// Multipath behaviour requested for the controller.
    pub multipath: MultipathMode,
}

/// One page of remote controller records returned by the list endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NvmeControllerPage {
    #[serde(default)]
    /// Records in server determined order.
    pub controllers: Vec<NvmeController>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    /// Cursor for the next page; empty when the listing is complete.
    pub next_page_token: String,
}
