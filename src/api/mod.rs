//! Server API
//!
//! Fetch wrappers for the officer list views, organized like the views.

mod form;
mod officers;

use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, Request, RequestCredentials, RequestInit, Response};

use crate::error::{Error, Result};
use crate::models::ServerReply;

pub use form::FormBody;
pub use officers::*;

const CSRF_COOKIE: &str = "csrftoken";

// ========================
// Transport
// ========================

async fn send(method: &str, url: &str, body: Option<&FormBody>) -> Result<String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_credentials(RequestCredentials::SameOrigin);
    if let Some(body) = body {
        opts.set_body(&body.as_str().into());
    }

    let request = Request::new_with_str_and_init(url, &opts)?;
    let headers = request.headers();
    headers.set("Accept", "application/json")?;
    headers.set("X-Requested-With", "XMLHttpRequest")?;
    if body.is_some() {
        headers.set("Content-Type", "application/x-www-form-urlencoded; charset=UTF-8")?;
        if let Some(token) = csrf_token() {
            headers.set("X-CSRFToken", &token)?;
        }
    }

    let window = web_sys::window().ok_or(Error::MissingGlobal("window"))?;
    let resp: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    if !resp.ok() {
        return Err(Error::Http { status: resp.status() });
    }
    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| Error::Decode("response body is not text".into()))
}

pub(crate) async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let text = send("GET", url, None).await?;
    Ok(serde_json::from_str(&text)?)
}

/// POST a form to a JSON view. Only success or failure is of interest.
pub(crate) async fn post_form(url: &str, body: FormBody) -> Result<()> {
    let text = send("POST", url, Some(&body)).await?;
    check_reply(&text)
}

fn check_reply(text: &str) -> Result<()> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if value.is_object() {
        let reply: ServerReply = serde_json::from_value(value)?;
        if !reply.is_success() {
            return Err(Error::Server(reply.status.unwrap_or_default()));
        }
    }
    Ok(())
}

fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let cookies = document.dyn_into::<HtmlDocument>().ok()?.cookie().ok()?;
    cookie_value(&cookies, CSRF_COOKIE)
}

/// Look up a cookie in a `document.cookie` string
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value() {
        let cookies = "sessionid=abc; csrftoken=Xy12Z; theme=dark";
        assert_eq!(cookie_value(cookies, "csrftoken").as_deref(), Some("Xy12Z"));
        assert_eq!(cookie_value(cookies, "theme").as_deref(), Some("dark"));
        assert_eq!(cookie_value(cookies, "missing"), None);
        assert_eq!(cookie_value("", "csrftoken"), None);
    }

    #[test]
    fn test_check_reply() {
        assert!(check_reply(r#"{"status": "success"}"#).is_ok());
        assert!(check_reply("null").is_ok());
        assert!(matches!(
            check_reply(r#"{"status": "failure"}"#),
            Err(Error::Server(s)) if s == "failure"
        ));
        assert!(matches!(check_reply("<html>"), Err(Error::Decode(_))));
    }
}
