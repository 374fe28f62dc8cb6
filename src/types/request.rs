//! Request type definitions
//!
//! Defines the JSON payload sent to the session initiation endpoint.

use serde::{Deserialize, Serialize};

/// Product name the session endpoint expects
pub const PRODUCT_DIRECTLINE_ACCESS: &str = "directline-access";

/// Action that opens a new conversation
pub const ACTION_INIT_CONVERSATION: &str = "init_conversation";

/// Request payload for session initiation
///
/// Serializes as
/// `{"product":"directline-access","action":"init_conversation","data":{"bot-identifier":"..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRequest {
    /// Product the session is requested for
    pub product: String,

    /// Requested action
    pub action: String,

    /// Action parameters
    pub data: SessionRequestData,
}

/// Parameters of a session request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRequestData {
    /// Identifier of the bot to open a conversation with
    #[serde(rename = "bot-identifier")]
    pub bot_identifier: String,
}

impl SessionRequest {
    /// Build an `init_conversation` request for the given bot
    pub fn init_conversation(bot_id: impl Into<String>) -> Self {
        Self {
            product: PRODUCT_DIRECTLINE_ACCESS.to_string(),
            action: ACTION_INIT_CONVERSATION.to_string(),
            data: SessionRequestData {
                bot_identifier: bot_id.into(),
            },
        }
    }
}
