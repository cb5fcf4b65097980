//! Page Configuration
//!
//! The server template injects `window.cciw` with the endpoint URLs and the
//! camp being administered. It is read once at start-up.

use std::fmt;

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::{Error, Result};

/// Name of the page global holding the configuration
pub const PAGE_GLOBAL: &str = "cciw";

/// Camp identifier as the template renders it: numeric id or a slug
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CampId {
    Number(u64),
    Slug(String),
}

impl fmt::Display for CampId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CampId::Number(n) => write!(f, "{}", n),
            CampId::Slug(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    pub update_officer_url: String,
    pub remove_officer_url: String,
    pub resend_email_url: String,
    pub add_officers_url: String,
    pub create_officer_url: String,
    pub camp_id: CampId,
}

impl PageConfig {
    /// Read `window.cciw`.
    pub fn from_window() -> Result<Self> {
        let window = web_sys::window().ok_or(Error::MissingGlobal("window"))?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(PAGE_GLOBAL))?;
        if value.is_undefined() || value.is_null() {
            return Err(Error::MissingGlobal(PAGE_GLOBAL));
        }
        // Round-trip through JSON so a numeric camp id arrives as an integer
        let json: String = js_sys::JSON::stringify(&value)?.into();
        Ok(serde_json::from_str(&json)?)
    }

    /// Address of the officer creation form, in popup mode for this camp
    pub fn create_officer_popup_url(&self) -> String {
        let sep = if self.create_officer_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}is_popup=1&camp_id={}",
            self.create_officer_url, sep, self.camp_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(camp_id: &str) -> PageConfig {
        let json = format!(
            r#"{{
                "updateOfficerUrl": "/officers/leaders/update-officer/",
                "removeOfficerUrl": "/officers/leaders/remove-officer/2017/1/",
                "resendEmailUrl": "/officers/leaders/resend-email/",
                "addOfficersUrl": "/officers/leaders/add-officers/2017/1/",
                "createOfficerUrl": "/officers/add-officer/",
                "campId": {}
            }}"#,
            camp_id
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_decode_numeric_camp_id() {
        let config = sample("42");
        assert_eq!(config.camp_id, CampId::Number(42));
        assert_eq!(config.update_officer_url, "/officers/leaders/update-officer/");
        assert_eq!(config.camp_id.to_string(), "42");
    }

    #[test]
    fn test_decode_slug_camp_id() {
        let config = sample(r#""2017-blue""#);
        assert_eq!(config.camp_id, CampId::Slug("2017-blue".into()));
        assert_eq!(config.camp_id.to_string(), "2017-blue");
    }

    #[test]
    fn test_popup_url() {
        let config = sample("42");
        assert_eq!(
            config.create_officer_popup_url(),
            "/officers/add-officer/?is_popup=1&camp_id=42"
        );
    }

    #[test]
    fn test_popup_url_with_existing_query() {
        let mut config = sample("7");
        config.create_officer_url = "/officers/add-officer/?next=list".into();
        assert_eq!(
            config.create_officer_popup_url(),
            "/officers/add-officer/?next=list&is_popup=1&camp_id=7"
        );
    }
}
