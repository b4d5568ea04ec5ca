pub mod audit;
pub mod drift;
pub mod namespace;
pub mod query;
pub mod recall;
pub mod session;
pub mod slo;

pub use audit::AuditEntry;
pub use drift::{DriftReport, DriftThresholds};
pub use namespace::NamespaceKey;
pub use query::{RankedMemory, SearchHit, SearchOutcome, SearchQuery};
pub use recall::{RecallFailure, RecallFailureReason};
pub use session::SessionSummary;
pub use slo::{ComplianceReport, FreshnessSlo, SloViolation, StalenessAssessment, ViolationSeverity};
