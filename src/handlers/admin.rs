use axum::{http::StatusCode, Json};
use chrono::Utc;
use serde::Deserialize;

use crate::directory::{self, EMPLOYERS, ORGANIZATIONS};
use crate::domain::models::{EmployerAccount, Organization};
use crate::shared::errors::AppError;
use crate::shared::logging;

#[derive(Debug, Deserialize)]
pub struct CreateOrganizationRequest {
    pub name: String,
    pub contact_email: String,
}

fn organizations_sorted() -> Vec<Organization> {
    let mut orgs: Vec<Organization> = ORGANIZATIONS
        .iter()
        .map(|entry| entry.value().clone())
        .collect();
    orgs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    orgs
}

/// Validated insert shared by the REST handler and the server function.
pub fn create_organization(name: &str, contact_email: &str) -> Result<Organization, AppError> {
    let name = name.trim();
    let contact_email = contact_email.trim();
    if name.is_empty() {
        return Err(AppError::Validation(
            "Organization name is required.".to_string(),
        ));
    }
    if !contact_email.contains('@') {
        return Err(AppError::Validation(
            "A valid contact email is required.".to_string(),
        ));
    }
    let duplicate = ORGANIZATIONS
        .iter()
        .any(|entry| entry.value().name.eq_ignore_ascii_case(name));
    if duplicate {
        return Err(AppError::Validation(format!(
            "An organization named \"{name}\" already exists."
        )));
    }

    let org = Organization {
        id: directory::store::next_organization_id(),
        name: name.to_string(),
        contact_email: contact_email.to_string(),
        employer_count: 0,
        created_at: Utc::now(),
        is_active: true,
    };
    ORGANIZATIONS.insert(org.id, org.clone());
    logging::log_admin_mutation("organization", "create", org.id);
    Ok(org)
}

pub fn list_employer_accounts() -> Vec<EmployerAccount> {
    let mut accounts: Vec<EmployerAccount> = EMPLOYERS
        .iter()
        .map(|entry| entry.value().clone())
        .collect();
    accounts.sort_by_key(|a| a.id);
    accounts
}

/// GET /api/master/organizations
pub async fn list_organizations_handler() -> Json<Vec<Organization>> {
    Json(organizations_sorted())
}

/// POST /api/master/organizations
pub async fn create_organization_handler(
    Json(request): Json<CreateOrganizationRequest>,
) -> Result<(StatusCode, Json<Organization>), (StatusCode, String)> {
    create_organization(&request.name, &request.contact_email)
        .map(|org| (StatusCode::CREATED, Json(org)))
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))
}

/// GET /api/master/employers
pub async fn list_employers_handler() -> Json<Vec<EmployerAccount>> {
    Json(list_employer_accounts())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_organization_rejects_blank_name() {
        assert!(create_organization("  ", "ops@example.com").is_err());
    }

    #[test]
    fn test_create_organization_rejects_bad_email() {
        assert!(create_organization("Fresh Org", "not-an-email").is_err());
    }

    #[test]
    fn test_create_organization_failures_are_validation_errors() {
        let err = create_organization("  ", "ops@example.com").expect_err("blank name fails");
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_create_organization_rejects_duplicate_name() {
        // Seeded organization, case-insensitive match.
        assert!(create_organization("acme talent partners", "dup@example.com").is_err());
    }

    #[test]
    fn test_create_organization_inserts() {
        let org = create_organization("  Lighthouse Staffing  ", "hello@lighthouse.example.com")
            .expect("creation succeeds");
        assert_eq!(org.name, "Lighthouse Staffing");
        assert!(ORGANIZATIONS.contains_key(&org.id));
    }
}
