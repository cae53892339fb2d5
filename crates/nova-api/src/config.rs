//! Server configuration.
//!
//! Every setting is a `nova serve` flag with an environment fallback, so a
//! `.env` file loaded by dotenvy configures the server without flags.

use std::convert::Infallible;
use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use secrecy::{ExposeSecret, SecretString};

use nova_infra::llm::ProviderSettings;
use nova_types::llm::ProviderKind;

#[derive(Args, Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "NOVA_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, short, env = "PORT", default_value_t = 3001)]
    pub port: u16,

    /// SQLite database URL.
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://nova.db?mode=rwc")]
    pub database_url: String,

    /// Secret used to sign bearer credentials.
    #[arg(long, env = "JWT_SECRET", hide_env_values = true, value_parser = parse_secret)]
    pub jwt_secret: SecretString,

    /// Credential lifetime, e.g. `7d`, `12h`, `30m` or bare seconds.
    #[arg(long, env = "JWT_EXPIRY", default_value = "7d", value_parser = parse_duration)]
    pub jwt_expiry: chrono::Duration,

    /// Origin allowed by CORS.
    #[arg(long, env = "CORS_ORIGIN", default_value = "http://localhost:8080")]
    pub cors_origin: String,

    /// Groq API key. Groq is skipped when absent.
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true, value_parser = parse_secret)]
    pub groq_api_key: Option<SecretString>,

    #[arg(long, env = "GROQ_MODEL", default_value = ProviderKind::Groq.default_model())]
    pub groq_model: String,

    /// Gemini API key. Gemini is skipped when absent.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, value_parser = parse_secret)]
    pub gemini_api_key: Option<SecretString>,

    #[arg(long, env = "GEMINI_MODEL", default_value = ProviderKind::Gemini.default_model())]
    pub gemini_model: String,

    /// Upper bound on a single provider attempt, in seconds.
    #[arg(long, env = "NOVA_PROVIDER_TIMEOUT_SECS", default_value_t = 20)]
    pub provider_timeout_secs: u64,

    /// Built SPA to serve for non-API paths, if the directory exists.
    #[arg(long, env = "NOVA_WEB_DIR", default_value = "frontend/dist")]
    pub web_dir: PathBuf,
}

impl ServerConfig {
    pub fn provider_settings(&self) -> ProviderSettings {
        ProviderSettings {
            groq_api_key: non_blank(&self.groq_api_key),
            groq_model: self.groq_model.clone(),
            gemini_api_key: non_blank(&self.gemini_api_key),
            gemini_model: self.gemini_model.clone(),
            timeout: Duration::from_secs(self.provider_timeout_secs),
        }
    }
}

/// A key left empty in `.env` disables the provider.
fn non_blank(key: &Option<SecretString>) -> Option<SecretString> {
    key.as_ref()
        .filter(|k| !k.expose_secret().trim().is_empty())
        .cloned()
}

fn parse_secret(value: &str) -> Result<SecretString, Infallible> {
    Ok(SecretString::from(value.to_string()))
}

/// Longest accepted credential lifetime.
const MAX_DURATION_DAYS: i64 = 3650;

/// Parse `<n>s`, `<n>m`, `<n>h`, `<n>d` or a bare number of seconds.
pub fn parse_duration(value: &str) -> Result<chrono::Duration, String> {
    let value = value.trim();
    let (digits, unit) = match value.char_indices().last() {
        Some((idx, c)) if c.is_ascii_alphabetic() => (&value[..idx], c.to_ascii_lowercase()),
        _ => (value, 's'),
    };

    let n: i64 = digits
        .parse()
        .map_err(|_| format!("invalid duration '{value}'"))?;
    if n <= 0 {
        return Err(format!("duration must be positive, got '{value}'"));
    }

    let duration = match unit {
        's' => chrono::Duration::try_seconds(n),
        'm' => chrono::Duration::try_minutes(n),
        'h' => chrono::Duration::try_hours(n),
        'd' => chrono::Duration::try_days(n),
        other => return Err(format!("unknown duration unit '{other}' in '{value}'")),
    };
    match duration {
        Some(d) if d <= chrono::Duration::days(MAX_DURATION_DAYS) => Ok(d),
        _ => Err(format!(
            "duration '{value}' exceeds the {MAX_DURATION_DAYS} day limit"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("7d").unwrap(), chrono::Duration::days(7));
        assert_eq!(parse_duration("12h").unwrap(), chrono::Duration::hours(12));
        assert_eq!(parse_duration("30m").unwrap(), chrono::Duration::minutes(30));
        assert_eq!(parse_duration("45s").unwrap(), chrono::Duration::seconds(45));
        assert_eq!(parse_duration("3600").unwrap(), chrono::Duration::hours(1));
        assert_eq!(parse_duration(" 2D ").unwrap(), chrono::Duration::days(2));
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("d").is_err());
        assert!(parse_duration("5w").is_err());
        assert!(parse_duration("-1h").is_err());
        assert!(parse_duration("0").is_err());
    }

    #[test]
    fn test_parse_duration_caps_lifetime() {
        assert_eq!(
            parse_duration("3650d").unwrap(),
            chrono::Duration::days(MAX_DURATION_DAYS)
        );
        assert!(parse_duration("3651d").is_err());
        assert!(parse_duration("1000000000d").is_err());
        assert!(parse_duration("9223372036854775807s").is_err());
    }

    #[test]
    fn test_provider_settings_carry_timeout() {
        let config = ServerConfig {
            host: "127.0.0.1".into(),
            port: 3001,
            database_url: "sqlite::memory:".into(),
            jwt_secret: SecretString::from("s".to_string()),
            jwt_expiry: chrono::Duration::days(7),
            cors_origin: "http://localhost:8080".into(),
            groq_api_key: Some(SecretString::from("  ".to_string())),
            groq_model: "g".into(),
            gemini_api_key: Some(SecretString::from("k".to_string())),
            gemini_model: "m".into(),
            provider_timeout_secs: 5,
            web_dir: PathBuf::from("missing"),
        };
        let settings = config.provider_settings();
        assert_eq!(settings.timeout, Duration::from_secs(5));
        assert_eq!(settings.configured(), vec![ProviderKind::Gemini]);
    }
}
