//! Web server module for handling Slack slash commands.
//!
//! This module provides a thin web server that:
//! - Receives slash-command requests from Slack
//! - Verifies the `v0` request signature against the raw body
//! - Returns a Block Kit acknowledgment
//!
//! Every response, including failures, is a parseable `SlackResponse`.

pub mod blocks;
pub mod command;
pub mod handlers;
pub mod signature;

pub use blocks::{SlackBlock, SlackImage, SlackResponse, SlackText};
pub use command::SlashCommand;
pub use handlers::{health, slack_command, AppState, HEALTH_RESPONSE};
pub use signature::{
    compute_signature, verify_slack_signature, SignatureVerifier, Verification,
    SIGNATURE_HEADER, SIGNATURE_VERSION, TIMESTAMP_HEADER,
};
