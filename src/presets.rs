//! Ready-made collection configurations for the recruitment screens.

use crate::config::CollectionConfig;
use chrono::Local;

/// Today's date as an ISO `YYYY-MM-DD` string, used for date defaults.
fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// The client onboarding collection (`CLI-NNN`).
pub fn clients() -> CollectionConfig {
    CollectionConfig::new("clients", "CLI")
        .with_fields([
            "clientName",
            "contactPerson",
            "email",
            "phone",
            "linkedin",
            "address",
            "onboardDate",
            "status",
        ])
        .with_required(["clientName", "email"])
        .with_searchable(["clientName", "email"])
        .with_default("status", "Active")
        .with_default("onboardDate", today())
}

/// The job openings collection (`JOB-NNN`).
pub fn job_openings() -> CollectionConfig {
    CollectionConfig::new("Job Openings", "JOB")
        .with_fields([
            "jobTitle",
            "clientName",
            "location",
            "jobType",
            "openings",
            "postedDate",
            "status",
        ])
        .with_required(["jobTitle", "clientName"])
        .with_searchable(["jobTitle", "clientName"])
        .with_default("jobType", "Full-Time")
        .with_default("openings", 1)
        .with_default("status", "Open")
        .with_default("postedDate", today())
}

/// The role assignment collection (`ROLE-NNN`).
pub fn roles() -> CollectionConfig {
    CollectionConfig::new("roles", "ROLE")
        .with_fields([
            "employeeName",
            "role",
            "email",
            "description",
            "status",
            "assignedDate",
        ])
        .with_required(["employeeName", "role"])
        .with_searchable(["employeeName", "role", "email"])
        .with_default("role", "Recruiter")
        .with_default("status", "Active")
        .with_default("assignedDate", today())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clients_preset() {
        let config = clients();
        assert_eq!(config.collection, "clients");
        assert_eq!(config.prefix, "CLI");
        assert_eq!(config.required, vec!["clientName", "email"]);
        assert_eq!(config.defaults.get("status"), Some(&json!("Active")));
    }

    #[test]
    fn test_job_openings_preset() {
        let config = job_openings();
        assert_eq!(config.collection, "Job Openings");
        assert_eq!(config.prefix, "JOB");
        assert_eq!(config.required, vec!["jobTitle", "clientName"]);
        assert_eq!(config.defaults.get("openings"), Some(&json!(1)));
        assert_eq!(config.defaults.get("jobType"), Some(&json!("Full-Time")));
    }

    #[test]
    fn test_roles_preset() {
        let config = roles();
        assert_eq!(config.prefix, "ROLE");
        assert_eq!(config.required, vec!["employeeName", "role"]);
        assert!(config.searchable.contains(&"email".to_string()));
    }

    #[test]
    fn test_date_defaults_are_iso() {
        let config = roles();
        let date = config
            .defaults
            .get("assignedDate")
            .and_then(|v| v.as_str())
            .unwrap();
        // YYYY-MM-DD
        assert_eq!(date.len(), 10);
        assert_eq!(date.matches('-').count(), 2);
    }
}
