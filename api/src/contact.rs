use serde::{Deserialize, Serialize};

use crate::endpoint;

// messages

// hand a contact form submission to the form backend
//
// the fields are copied verbatim from the form, so the backend sees exactly
// what the visitor typed
endpoint!(SubmitContact);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitContactReq {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmitContactResp {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_exactly_four_fields() {
        let req = SubmitContactReq {
            name: "John Doe".to_owned(),
            email: "john@company.com".to_owned(),
            service: "UGC Ads (₹1,999)".to_owned(),
            message: "Launching in March".to_owned(),
        };

        let value = serde_json::to_value(&req).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, ["email", "message", "name", "service"]);
        assert_eq!(object["service"], "UGC Ads (₹1,999)");
    }

    #[test]
    fn response_ignores_unknown_fields() {
        let resp: SubmitContactResp = serde_json::from_str(r#"{"queued": true}"#).unwrap();

        assert_eq!(serde_json::to_value(&resp).unwrap(), serde_json::json!({}));
    }
}
