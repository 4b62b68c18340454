// Canonical resource shapes returned to clients; the vocabulary between
// normalizers, canonicalizers and routes

mod container;
mod envelope;
mod image;
mod network;
mod system;
mod volume;

pub use container::{
    Container, ContainerActionReceipt, ContainerCreateReceipt, ContainerDetails, ContainerLogs,
    PortBindingInfo,
};
pub use envelope::Envelope;
pub use image::{
    Image, ImageBuildReceipt, ImageConfigInfo, ImageDetails, ImageLayer, ImagePruneReceipt,
    ImagePullReceipt, ImageRemoveReceipt, ImageSearchResult,
};
pub use network::{
    IpamInfo, IpamPool, Network, NetworkCreateReceipt, NetworkDetails, NetworkEndpoint,
    NetworkEndpointReceipt, NetworkPruneReceipt, NetworkRemoveReceipt, NetworkStats,
};
pub use system::{
    ContainerTotals, DaemonStatus, DiskUsage, EngineInfo, EngineVersion, HealthStatus, HostDisk,
    HostInfo, HostMemory, ImageTotals, ImageUsageSection, NetworkTotals, OverallStats,
    PluginSummary, SwarmSummary, SystemTotals, UsageSection, UsageTotal, VolumeTotals,
};
pub use volume::{
    Volume, VolumeConsumer, VolumeCreateReceipt, VolumeDetails, VolumePruneReceipt,
    VolumeRemoveReceipt, VolumeStats, VolumeUsage,
};
