//! Wire types of the Solana Actions convention.

use serde::{Deserialize, Serialize};

/// Discriminator carried as `type` on every action response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Action,
    Transaction,
}

/// Response of an action GET.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionGetResponse {
    #[serde(rename = "type")]
    pub kind: ActionType,
    pub icon: String,
    pub label: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub links: Option<ActionLinks>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionLinks {
    pub actions: Vec<LinkedAction>,
}

/// One button offered by an action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkedAction {
    pub label: String,
    pub href: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub parameters: Vec<ActionParameter>,
}

/// A user-supplied value substituted into `href` as `{name}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionParameter {
    pub name: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionPostRequest {
    /// Base58 address of the wallet that pays and signs.
    pub account: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionPostResponse {
    #[serde(rename = "type")]
    pub kind: ActionType,
    /// Base64 of the bincode-serialized unsigned transaction.
    pub transaction: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

/// `actions.json` served at the domain root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionsJson {
    pub rules: Vec<ActionRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRule {
    pub path_pattern: String,
    pub api_path: String,
}
