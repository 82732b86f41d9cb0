pub const DEFAULT_MAIL_API_BASE_URL: &str = "https://api.resend.com";
pub const DEFAULT_SENDER_NAME: &str = "دستیار صوتی فارسی";
pub const DEFAULT_MAIL_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub mail: MailSettings,
    pub mail_api_key: String,
    pub mail_api_base_url: String,
    pub mail_timeout_secs: u64,
}

/// Addressing used for every lead notification.
#[derive(Debug, Clone)]
pub struct MailSettings {
    /// Fixed sender address.
    pub from_address: String,
    /// Display name shown next to the sender address.
    pub sender_name: String,
    /// Fixed recipient that follows up on leads.
    pub to_address: String,
}

impl MailSettings {
    /// Sender in `"Name" <address>` form.
    pub fn from_header(&self) -> String {
        format!("\"{}\" <{}>", self.sender_name, self.from_address)
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> anyhow::Result<String> {
    let value =
        lookup(name).ok_or_else(|| anyhow::anyhow!("{} environment variable required", name))?;
    if value.trim().is_empty() {
        anyhow::bail!("{} cannot be empty", name);
    }
    Ok(value)
}

fn required_address(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> anyhow::Result<String> {
    let value = required(lookup, name)?;
    if !value.contains('@') {
        anyhow::bail!("{} must be an email address", name);
    }
    Ok(value.trim().to_string())
}

fn optional(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name).filter(|s| !s.trim().is_empty())
}

impl Config {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|name| std::env::var(name).ok())?;

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Mail API Base URL: {}", config.mail_api_base_url);
        tracing::debug!(
            "Lead notifications: {} -> {}",
            config.mail.from_address,
            config.mail.to_address
        );
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            mail: MailSettings {
                from_address: required_address(&lookup, "MAIL_FROM")?,
                sender_name: optional(&lookup, "MAIL_SENDER_NAME")
                    .unwrap_or_else(|| DEFAULT_SENDER_NAME.to_string()),
                to_address: required_address(&lookup, "MAIL_TO")?,
            },
            mail_api_key: required(&lookup, "MAIL_API_KEY")?,
            mail_api_base_url: optional(&lookup, "MAIL_API_BASE_URL")
                .map_or_else(|| Ok(DEFAULT_MAIL_API_BASE_URL.to_string()), validate_base_url)?,
            mail_timeout_secs: lookup("MAIL_TIMEOUT_SECS")
                .map(|s| s.parse::<u64>())
                .transpose()
                .map_err(|_| anyhow::anyhow!("MAIL_TIMEOUT_SECS must be a whole number"))?
                .unwrap_or(DEFAULT_MAIL_TIMEOUT_SECS),
        })
    }
}

/// Accepts absolute http(s) URLs and strips any trailing slash.
fn validate_base_url(raw: String) -> anyhow::Result<String> {
    let parsed = url::Url::parse(&raw)
        .map_err(|e| anyhow::anyhow!("MAIL_API_BASE_URL is not a valid URL: {}", e))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        anyhow::bail!("MAIL_API_BASE_URL must start with http:// or https://");
    }
    Ok(raw.trim_end_matches('/').to_string())
}
