//! Back-office adapters: inquiries (update and delete only) and the
//! read-only employee roster.

use geocat_api::{AdminClient, Employee, Inquiry, InquiryPayload};

use crate::controller::Resource;
use crate::validate;

pub struct Inquiries;

impl Resource for Inquiries {
    type Record = Inquiry;
    type Draft = InquiryPayload;
    type Lookups = ();

    const NOUN: &'static str = "inquiry";
    const TITLE: &'static str = "Inquiry";
    const PLURAL: &'static str = "inquiries";
    const CACHE_KEY: &'static str = "inquiries_cache";

    fn record_id(record: &Inquiry) -> &str {
        &record.id
    }

    fn draft_from(record: &Inquiry) -> InquiryPayload {
        InquiryPayload {
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            message: record.message.clone(),
        }
    }

    fn validate(draft: &InquiryPayload) -> Result<(), String> {
        validate::required(&draft.name, "Name")?;
        validate::required(&draft.email, "Email")
    }

    fn columns() -> Vec<&'static str> {
        vec!["Name", "Email", "Phone", "Message", "Received"]
    }

    fn row(record: &Inquiry, (): &()) -> Vec<String> {
        let received = record
            .created_at
            .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        vec![
            record.name.clone(),
            record.email.clone(),
            record.phone.clone(),
            record.message.clone(),
            received,
        ]
    }

    async fn fetch(client: &AdminClient) -> Result<Vec<Inquiry>, geocat_api::Error> {
        client.list_inquiries().await
    }

    // Inquiries arrive from the public site; there is no admin-side create.

    async fn update(
        client: &AdminClient,
        id: &str,
        draft: &InquiryPayload,
    ) -> Result<(), geocat_api::Error> {
        client.update_inquiry(id, draft).await.map(|_| ())
    }

    async fn delete(client: &AdminClient, id: &str) -> Result<(), geocat_api::Error> {
        client.delete_inquiry(id).await
    }
}

pub struct Employees;

impl Resource for Employees {
    type Record = Employee;
    type Draft = ();
    type Lookups = ();

    const NOUN: &'static str = "employee";
    const TITLE: &'static str = "Employee";
    const PLURAL: &'static str = "employees";
    const CACHE_KEY: &'static str = "employees_cache";

    fn record_id(record: &Employee) -> &str {
        &record.id
    }

    fn draft_from(_record: &Employee) {}

    fn columns() -> Vec<&'static str> {
        vec!["Name"]
    }

    fn row(record: &Employee, (): &()) -> Vec<String> {
        vec![record.name.clone()]
    }

    async fn fetch(client: &AdminClient) -> Result<Vec<Employee>, geocat_api::Error> {
        client.list_employees().await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn inquiry_row_formats_the_received_stamp() {
        let inquiry = Inquiry {
            id: "q1".into(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: String::new(),
            message: "Do you ship to Lyon?".into(),
            created_at: Some(Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()),
        };
        let row = Inquiries::row(&inquiry, &());
        assert_eq!(row[4], "2026-03-14 09:30");
    }

    #[test]
    fn inquiry_without_timestamp_renders_blank() {
        let inquiry = Inquiry {
            id: "q1".into(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: String::new(),
            message: String::new(),
            created_at: None,
        };
        assert_eq!(Inquiries::row(&inquiry, &())[4], "");
    }

    #[test]
    fn inquiry_edit_requires_name_and_email() {
        let draft = InquiryPayload {
            name: "Ada".into(),
            ..InquiryPayload::default()
        };
        assert_eq!(Inquiries::validate(&draft).unwrap_err(), "Email is required.");
    }
}
