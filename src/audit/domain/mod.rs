pub mod manifest;
pub mod repository;
pub mod scan_result;
pub mod scan_target;

pub use manifest::{ManifestFetch, ManifestKind};
pub use repository::RepositoryRecord;
pub use scan_result::{ScanOutcome, ScanReport, ScanResult, ScanSummary};
pub use scan_target::{OwnerKind, OwnerLocator, ScanTarget};
