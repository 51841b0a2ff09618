//! Application schema - The tracked job application type

use serde::{Deserialize, Serialize};

/// A tracked job application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Schema version for forward compatibility
    pub schema_version: u32,

    /// Unique identifier for the application (e.g. "app-0001")
    pub id: String,

    /// Company name
    pub company: String,

    /// Role or position title
    pub role: String,

    /// Date the application was submitted (YYYY-MM-DD)
    pub date_applied: String,

    /// Current lifecycle status (display name, e.g. "Applied")
    pub status: String,

    /// Free-form notes (null if none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// ISO 8601 creation timestamp
    pub created_at: String,

    /// ISO 8601 last update timestamp
    pub updated_at: String,
}

impl Application {
    /// Create a new application with the given initial status
    pub fn new(
        id: String,
        company: String,
        role: String,
        status: String,
        date_applied: String,
    ) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Application {
            schema_version: 1,
            id,
            company,
            role,
            date_applied,
            status,
            notes: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Return a new Application with the given status, updating the timestamp
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self.touch_returning()
    }

    /// Return a new Application with the given details replaced, updating the
    /// timestamp. Fields passed as None are left unchanged.
    pub fn with_details(
        mut self,
        company: Option<String>,
        role: Option<String>,
        notes: Option<String>,
    ) -> Self {
        if let Some(company) = company {
            self.company = company;
        }
        if let Some(role) = role {
            self.role = role;
        }
        if let Some(notes) = notes {
            self.notes = if notes.is_empty() { None } else { Some(notes) };
        }
        self.touch_returning()
    }

    /// Update the updated_at timestamp to now and return self
    fn touch_returning(mut self) -> Self {
        self.updated_at = chrono::Utc::now().to_rfc3339();
        self
    }
}
