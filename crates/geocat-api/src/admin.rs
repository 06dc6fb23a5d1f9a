//! Back-office endpoints: business inquiries (no create path) and the
//! read-only employee directory.

use crate::client::AdminClient;
use crate::error::Error;
use crate::records::{Employee, Inquiry, InquiryPayload};

impl AdminClient {
    pub async fn list_inquiries(&self) -> Result<Vec<Inquiry>, Error> {
        self.get(self.api_url("inquiries")?).await
    }

    pub async fn update_inquiry(&self, id: &str, payload: &InquiryPayload) -> Result<Inquiry, Error> {
        self.put(self.api_url(&format!("inquiries/{id}"))?, payload).await
    }

    pub async fn delete_inquiry(&self, id: &str) -> Result<(), Error> {
        self.delete(self.api_url(&format!("inquiries/{id}"))?).await
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, Error> {
        self.get(self.api_url("employees")?).await
    }
}
