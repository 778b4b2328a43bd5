use gloo::net::http::Request;
use serde::Deserialize;
use slidemint_core::{MintError, MintResult, RewardAdapter};

pub(crate) const DEFAULT_MINT_ENDPOINT: &str = "/api/mint";

#[derive(Deserialize)]
struct MintReply {
    response: Option<MintReceipt>,
    message: Option<String>,
}

#[derive(Deserialize)]
struct MintReceipt {
    hash: String,
}

/// Mints through the site's `GET {endpoint}?recipient=..` route.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpMintAdapter {
    endpoint: String,
}

impl HttpMintAdapter {
    pub(crate) fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    fn url_for(&self, recipient: &str) -> String {
        let recipient = String::from(js_sys::encode_uri_component(recipient));
        format!("{}?recipient={}", self.endpoint, recipient)
    }
}

impl RewardAdapter for HttpMintAdapter {
    async fn request_mint(&self, recipient: &str) -> MintResult {
        let url = self.url_for(recipient);
        log::debug!("mint request: {}", url);

        let response = match Request::get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                log::error!("There was an error with the fetch request to mint: {}", err);
                return Err(MintError::new(""));
            }
        };

        let status = response.status();
        match response.text().await {
            Ok(body) => parse_mint_reply(status, &body),
            Err(err) => {
                log::error!("Could not read mint response: {}", err);
                Err(MintError::new(""))
            }
        }
    }
}

/// `200` with `{response: {hash}}` is a mint; anything else carries `message`.
pub(crate) fn parse_mint_reply(status: u16, body: &str) -> MintResult {
    let reply = serde_json::from_str::<MintReply>(body);

    if status == 200 {
        match reply {
            Ok(MintReply {
                response: Some(MintReceipt { hash }),
                ..
            }) => Ok(hash),
            _ => {
                log::error!("Mint response has no transaction hash: {}", body);
                Err(MintError::new(""))
            }
        }
    } else {
        let message = reply.ok().and_then(|reply| reply.message).unwrap_or_default();
        log::error!("There was an error with the mint: {}", message);
        Err(MintError::new(message))
    }
}
