pub mod contact;

// wire messages
//
// every message is a Req/Resp pair posted as json to {root}/{MessageName}; the
// endpoint! macro generates the snake_case async helper for a pair, e.g.
// endpoint!(SubmitContact) produces submit_contact(root, &SubmitContactReq)
#[macro_export]
macro_rules! endpoint {
    ($name:ident) => {
        paste::paste! {
            pub async fn [<$name:snake>](root: &str, req: &[<$name:camel Req>]) -> anyhow::Result<[<$name:camel Resp>]> {
                let url = $crate::endpoint_url(root, stringify!([<$name:camel>]));

                let resp = gloo_net::http::Request::post(url.as_str())
                    .json(req)?
                    .send()
                    .await?;

                if resp.ok() {
                    Ok(resp.json().await?)
                } else {
                    Err(anyhow::Error::msg(resp.text().await?))
                }
            }
        }
    };
}

// join the configured root with a message name
//
// roots are written by hand in the site config, so tolerate a trailing slash
pub fn endpoint_url(root: &str, message: &str) -> String {
    format!("{}/{}", root.trim_end_matches('/'), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_joins_root_and_message() {
        assert_eq!(
            endpoint_url("https://forms.example.com/api", "SubmitContact"),
            "https://forms.example.com/api/SubmitContact"
        );
    }

    #[test]
    fn endpoint_url_drops_trailing_slashes() {
        assert_eq!(endpoint_url("/api//", "SubmitContact"), "/api/SubmitContact");
    }
}
