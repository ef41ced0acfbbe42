mod major_version_reducer;
mod version_extractor;

pub use major_version_reducer::MajorVersionReducer;
pub use version_extractor::VersionExtractor;
