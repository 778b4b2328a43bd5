use alloc::format;
use alloc::string::String;
use core::future::Future;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::SessionId;

/// Failure reported by the minting service.
#[derive(Error, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[error("mint failed: {message}")]
pub struct MintError {
    pub message: String,
}

impl MintError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Transaction reference on success, failure message otherwise.
pub type MintResult = core::result::Result<String, MintError>;

/// Outbound reward service. Retry and timeout policy belong to the
/// implementation; the controller only sees the settled result.
pub trait RewardAdapter {
    fn request_mint(&self, recipient: &str) -> impl Future<Output = MintResult>;
}

/// State of the reward for the current session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MintOutcome {
    #[default]
    NotRequested,
    Pending,
    Success {
        transaction_ref: String,
    },
    Failure {
        message: String,
    },
}

impl MintOutcome {
    pub fn transaction_ref(&self) -> Option<&str> {
        match self {
            Self::Success { transaction_ref } => Some(transaction_ref),
            _ => None,
        }
    }
}

/// Mint request issued by one session, to be settled outside the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintTicket {
    session: SessionId,
    recipient: String,
}

impl MintTicket {
    pub(crate) fn new(session: SessionId, recipient: String) -> Self {
        Self { session, recipient }
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Runs the adapter call; the result stays tagged with the issuing session.
    pub async fn settle<A: RewardAdapter>(self, adapter: &A) -> MintResolution {
        let result = adapter.request_mint(&self.recipient).await;
        MintResolution {
            session: self.session,
            result,
        }
    }

    pub fn resolve(self, result: MintResult) -> MintResolution {
        MintResolution {
            session: self.session,
            result,
        }
    }
}

/// Settled adapter result, addressed to the session that asked for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintResolution {
    pub session: SessionId,
    pub result: MintResult,
}

/// Chain the reward is minted on; only affects explorer links.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Network {
    Polygon,
    Mumbai,
}

impl Network {
    /// Only the exact name `polygon` selects mainnet.
    pub fn from_name(name: &str) -> Self {
        match name {
            "polygon" => Self::Polygon,
            _ => Self::Mumbai,
        }
    }

    pub const fn explorer_host(self) -> &'static str {
        match self {
            Self::Polygon => "polygonscan.com",
            Self::Mumbai => "mumbai.polygonscan.com",
        }
    }

    pub fn explorer_tx_url(self, transaction_ref: &str) -> String {
        format!("https://{}/tx/{}", self.explorer_host(), transaction_ref)
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::Mumbai
    }
}
