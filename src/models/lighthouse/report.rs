use crate::models::lighthouse::audit::{AuditId, Audits};
use crate::models::lighthouse::category::Categories;
use serde::{Deserialize, Serialize};

/// The slice of a PageSpeed Insights v5 response this tool reads.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PsiResponse {
    pub lighthouse_result: LighthouseResult,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LighthouseResult {
    pub categories: Categories,
    #[serde(default)]
    pub audits: Audits,
}

impl LighthouseResult {
    pub fn performance_score(&self) -> Option<f64> {
        self.categories.performance.as_ref().and_then(|c| c.score)
    }

    pub fn display_value(&self, id: AuditId) -> Option<String> {
        self.audits
            .get(id)
            .and_then(|audit| audit.display_value.clone())
    }
}

// Body PSI sends alongside non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}
