//! Block Kit response payloads.
//!
//! Every response from the slash-command endpoint, success or failure, is a
//! `SlackResponse` so Slack (and any other caller) can always parse it.

use serde::{Deserialize, Serialize};

pub const VERIFIED_TEXT: &str = "Successfully verified request";
pub const FAILED_TEXT: &str = "Failed verification";
pub const DEFAULT_ERROR_TEXT: &str = "Error processing request";

/// A text object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlackText {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub text: String,
}

/// An image element, used as a section accessory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlackImage {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub image_url: String,
    pub alt_text: String,
}

/// A layout block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlackBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<SlackText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessory: Option<SlackImage>,
}

impl SlackBlock {
    /// A `section` block with a single `mrkdwn` text.
    pub fn markdown_section(text: impl Into<String>) -> Self {
        Self {
            kind: "section".to_string(),
            text: Some(SlackText {
                kind: Some("mrkdwn".to_string()),
                text: text.into(),
            }),
            accessory: None,
        }
    }

    pub fn with_accessory(mut self, image: SlackImage) -> Self {
        self.accessory = Some(image);
        self
    }
}

impl SlackImage {
    pub fn new(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            kind: Some("image".to_string()),
            image_url: image_url.into(),
            alt_text: alt_text.into(),
        }
    }
}

/// Top-level response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlackResponse {
    pub blocks: Vec<SlackBlock>,
}

impl SlackResponse {
    /// Response made of one markdown section.
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            blocks: vec![SlackBlock::markdown_section(text)],
        }
    }

    pub fn verified() -> Self {
        Self::message(VERIFIED_TEXT)
    }

    pub fn failed_verification() -> Self {
        Self::message(FAILED_TEXT)
    }

    pub fn default_error() -> Self {
        Self::message(DEFAULT_ERROR_TEXT)
    }
}
