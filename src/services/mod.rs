/// Services - orchestration of domain workflows over the ports
pub mod analysis;

pub use analysis::TranscriptAnalysisService;
