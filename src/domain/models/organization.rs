use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A client organization managed from the master-admin portal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: u64,
    pub name: String,
    pub contact_email: String,
    pub employer_count: usize,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// An employer account scoped to one organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployerAccount {
    pub id: u64,
    pub organization_id: u64,
    pub full_name: String,
    pub email: String,
    pub is_active: bool,
}
