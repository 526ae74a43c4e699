use serde::{Deserialize, Serialize};

// pub struct for individual audit results
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    pub display_value: Option<String>,
}

/// The audits a comparison reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditId {
    FirstContentfulPaint,
    LargestContentfulPaint,
    CumulativeLayoutShift,
    TotalBlockingTime,
}

// Every other audit in the response is skipped unparsed
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Audits {
    #[serde(rename = "first-contentful-paint")]
    pub first_contentful_paint: Option<Audit>,
    #[serde(rename = "largest-contentful-paint")]
    pub largest_contentful_paint: Option<Audit>,
    #[serde(rename = "cumulative-layout-shift")]
    pub cumulative_layout_shift: Option<Audit>,
    #[serde(rename = "total-blocking-time")]
    pub total_blocking_time: Option<Audit>,
}

impl Audits {
    pub fn get(&self, id: AuditId) -> Option<&Audit> {
        match id {
            AuditId::FirstContentfulPaint => self.first_contentful_paint.as_ref(),
            AuditId::LargestContentfulPaint => self.largest_contentful_paint.as_ref(),
            AuditId::CumulativeLayoutShift => self.cumulative_layout_shift.as_ref(),
            AuditId::TotalBlockingTime => self.total_blocking_time.as_ref(),
        }
    }
}
