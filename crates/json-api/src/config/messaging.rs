//! Messaging Config

use clap::Args;

/// Messaging provider credentials. All optional; the messaging endpoints
/// acknowledge without delivering until a real backend is wired up.
#[derive(Debug, Args)]
pub struct MessagingConfig {
    /// Discord webhook URL
    #[arg(long, env = "DISCORD_WEBHOOK_URL", hide_env_values = true)]
    pub discord_webhook_url: Option<String>,

    /// WhatsApp Cloud API access token
    #[arg(long, env = "WHATSAPP_ACCESS_TOKEN", hide_env_values = true)]
    pub whatsapp_access_token: Option<String>,

    /// WhatsApp Cloud API phone number id
    #[arg(long, env = "WHATSAPP_PHONE_NUMBER_ID")]
    pub whatsapp_phone_number_id: Option<String>,
}
