//! Officer List Endpoints

use super::{get_json, post_form, FormBody};
use crate::config::CampId;
use crate::error::Result;
use crate::models::{OfficerFields, OfficerId, Sections};

// ========================
// Request Builders
// ========================

/// Sections request relative to the current page. The token defeats caches.
pub fn sections_url(cache_token: &str) -> String {
    format!("?sections=1&{}", cache_token)
}

pub fn update_officer_form(officer_id: OfficerId, fields: &OfficerFields, camp_id: &CampId) -> FormBody {
    FormBody::new()
        .field("officer_id", officer_id.to_string())
        .field("first_name", &fields.first_name)
        .field("last_name", &fields.last_name)
        .field("email", &fields.email)
        .field("notes", &fields.notes)
        .field("camp_id", camp_id.to_string())
}

pub fn officer_id_form(officer_id: OfficerId) -> FormBody {
    FormBody::new().field("officer_id", officer_id.to_string())
}

/// `None` when nothing is selected, so no request is made.
pub fn add_officers_form<S: AsRef<str>>(officer_ids: &[S]) -> Option<FormBody> {
    if officer_ids.is_empty() {
        return None;
    }
    Some(FormBody::new().list("officer_ids", officer_ids))
}

// ========================
// Commands
// ========================

pub async fn fetch_sections() -> Result<Sections> {
    let token = js_sys::Math::random().to_string();
    get_json(&sections_url(&token)).await
}

pub async fn update_officer(
    url: &str,
    officer_id: OfficerId,
    fields: &OfficerFields,
    camp_id: &CampId,
) -> Result<()> {
    post_form(url, update_officer_form(officer_id, fields, camp_id)).await
}

pub async fn remove_officer(url: &str, officer_id: OfficerId) -> Result<()> {
    post_form(url, officer_id_form(officer_id)).await
}

/// Reset the officer's password and re-send the signup email
pub async fn resend_email(url: &str, officer_id: OfficerId) -> Result<()> {
    post_form(url, officer_id_form(officer_id)).await
}

pub async fn add_officers(url: &str, body: FormBody) -> Result<()> {
    post_form(url, body).await
}
