pub mod audit;
pub mod category;
pub mod report;

pub use audit::{Audit, AuditId, Audits};
pub use category::{Categories, Category, ScoreStats};
pub use report::{ApiErrorBody, LighthouseResult, PsiResponse};
