//! Slash-command form payload.
//!
//! Slack posts slash commands as `application/x-www-form-urlencoded`. The
//! body is only decoded after its signature has been checked against the
//! raw bytes.

use serde::{de, Deserialize, Deserializer};

/// Fields Slack sends with a slash command.
///
/// Unknown fields are ignored and missing ones stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SlashCommand {
    pub token: String,
    pub team_id: String,
    pub team_domain: String,
    pub enterprise_id: String,
    pub enterprise_name: String,
    pub channel_id: String,
    pub channel_name: String,
    pub user_id: String,
    pub user_name: String,
    pub command: String,
    pub text: String,
    pub response_url: String,
    pub trigger_id: String,
    pub api_app_id: String,
    #[serde(deserialize_with = "deserialize_form_bool")]
    pub is_enterprise_install: bool,
}

impl SlashCommand {
    /// Decode a form-encoded body.
    pub fn from_form(body: &[u8]) -> Result<Self, serde_urlencoded::de::Error> {
        serde_urlencoded::from_bytes(body)
    }
}

/// Boolean form value. Accepts the spellings Slack's SDKs and Go's
/// `strconv.ParseBool` produce: `1 t T TRUE true True` and
/// `0 f F FALSE false False`. An empty value is `false`.
fn deserialize_form_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.as_str() {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "" | "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(de::Error::invalid_value(
            de::Unexpected::Str(other),
            &"a boolean form value",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_form_full() {
        let body = b"token=gIkuvaNzQIHg97ATvDxqgjtO&team_id=T0001&team_domain=example\
&channel_id=C2147483705&channel_name=test&user_id=U2147483697&user_name=Steve\
&command=%2Fweather&text=94070&response_url=https%3A%2F%2Fhooks.slack.com%2Fcommands%2F1234%2F5678\
&trigger_id=13345224609.738474920.8088930838d88f008e0&api_app_id=A123456\
&is_enterprise_install=false";

        let command = SlashCommand::from_form(body).unwrap();

        assert_eq!(command.team_id, "T0001");
        assert_eq!(command.channel_name, "test");
        assert_eq!(command.user_name, "Steve");
        assert_eq!(command.command, "/weather");
        assert_eq!(command.text, "94070");
        assert_eq!(
            command.response_url,
            "https://hooks.slack.com/commands/1234/5678"
        );
        assert_eq!(command.api_app_id, "A123456");
        assert!(!command.is_enterprise_install);
        assert!(command.enterprise_id.is_empty());
    }

    #[test]
    fn test_from_form_plus_is_space() {
        let command = SlashCommand::from_form(b"text=hello+world").unwrap();
        assert_eq!(command.text, "hello world");
    }

    #[test]
    fn test_enterprise_install_true_spellings() {
        for value in ["1", "t", "T", "TRUE", "true", "True"] {
            let body = format!("is_enterprise_install={}", value);
            let command = SlashCommand::from_form(body.as_bytes()).unwrap();
            assert!(command.is_enterprise_install, "{} parsed as false", value);
        }
    }

    #[test]
    fn test_enterprise_install_false_spellings() {
        for value in ["", "0", "f", "F", "FALSE", "false", "False"] {
            let body = format!("is_enterprise_install={}", value);
            let command = SlashCommand::from_form(body.as_bytes()).unwrap();
            assert!(!command.is_enterprise_install, "{} parsed as true", value);
        }
    }

    #[test]
    fn test_enterprise_install_invalid() {
        assert!(SlashCommand::from_form(b"is_enterprise_install=yes").is_err());
        assert!(SlashCommand::from_form(b"is_enterprise_install=tRuE").is_err());
    }

    #[test]
    fn test_from_form_empty_and_unknown() {
        assert_eq!(SlashCommand::from_form(b"").unwrap(), SlashCommand::default());
        assert_eq!(
            SlashCommand::from_form(b"unknown=1&other=2").unwrap(),
            SlashCommand::default()
        );
    }
}
