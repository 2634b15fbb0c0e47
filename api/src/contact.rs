use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::backend_base_url;

// structs and types

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactSendReq {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactSendResp {
    pub id: String,
}

// error responses carry an optional human-readable detail string; anything
// else collapses to the generic message below
#[derive(Clone, Debug, Deserialize)]
struct ContactErrorBody {
    detail: Option<String>,
}

// shown whenever the backend fails without a usable detail string
pub const GENERIC_SEND_FAILURE: &str =
    "Something went wrong sending your message. Please try again in a moment.";

fn join_contact_url(base: &str) -> String {
    format!("{}/api/contact", base.trim_end_matches('/'))
}

pub fn contact_url() -> String {
    join_contact_url(backend_base_url())
}

// a success body must carry the message id; a malformed body is a failure
// with the generic message, never a panic
fn parse_success(body: &str) -> anyhow::Result<ContactSendResp> {
    serde_json::from_str::<ContactSendResp>(body).map_err(|err| {
        debug!("discarding malformed contact success body: {err}");
        anyhow::Error::msg(GENERIC_SEND_FAILURE)
    })
}

// non-2xx bodies surface the server's detail verbatim when present
fn failure_message(body: &str) -> String {
    match serde_json::from_str::<ContactErrorBody>(body) {
        Ok(ContactErrorBody {
            detail: Some(detail),
        }) if !detail.is_empty() => detail,
        _ => String::from(GENERIC_SEND_FAILURE),
    }
}

// send one contact message
//
// exactly one POST per call; transport errors keep their own message so the
// form can show what actually went wrong
pub async fn send_contact(req: &ContactSendReq) -> anyhow::Result<ContactSendResp> {
    let resp = gloo_net::http::Request::post(contact_url().as_str())
        .json(req)?
        .send()
        .await?;

    if resp.ok() {
        parse_success(&resp.text().await?)
    } else {
        let body = resp.text().await.unwrap_or_default();
        debug!("contact endpoint returned {}: {body}", resp.status());
        Err(anyhow::Error::msg(failure_message(&body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_against_configured_base() {
        assert_eq!(join_contact_url(""), "/api/contact");
        assert_eq!(
            join_contact_url("https://api.example.dev"),
            "https://api.example.dev/api/contact"
        );
        assert_eq!(
            join_contact_url("https://api.example.dev/"),
            "https://api.example.dev/api/contact"
        );
    }

    #[test]
    fn success_body_parses_id() {
        let resp = parse_success(r#"{"id":"abc123"}"#).unwrap();
        assert_eq!(resp.id, "abc123");
    }

    #[test]
    fn malformed_success_body_is_generic_failure() {
        let err = parse_success(r#"{"ok":true}"#).unwrap_err();
        assert_eq!(err.to_string(), GENERIC_SEND_FAILURE);

        let err = parse_success("not json at all").unwrap_err();
        assert_eq!(err.to_string(), GENERIC_SEND_FAILURE);
    }

    #[test]
    fn detail_is_surfaced_verbatim() {
        assert_eq!(
            failure_message(r#"{"detail":"invalid email"}"#),
            "invalid email"
        );
    }

    #[test]
    fn missing_or_empty_detail_falls_back() {
        assert_eq!(failure_message(r#"{}"#), GENERIC_SEND_FAILURE);
        assert_eq!(failure_message(r#"{"detail":""}"#), GENERIC_SEND_FAILURE);
        assert_eq!(failure_message(r#"{"detail":null}"#), GENERIC_SEND_FAILURE);
        assert_eq!(failure_message("<html>502</html>"), GENERIC_SEND_FAILURE);
        assert_eq!(failure_message(""), GENERIC_SEND_FAILURE);
    }
}
