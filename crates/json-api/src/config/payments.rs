//! Payments Config

use clap::Args;

/// Payment provider credentials. All optional; a missing Stripe key leaves
/// the checkout endpoint answering 400 until one is supplied.
///
/// The bKash credentials are accepted for parity with the deployment
/// environment but nothing consumes them yet; that flow answers
/// `not_configured` unconditionally.
#[derive(Debug, Args)]
pub struct PaymentsConfig {
    /// Stripe secret API key
    #[arg(long, env = "STRIPE_SECRET_KEY", hide_env_values = true)]
    pub stripe_secret_key: Option<String>,

    /// bKash application key
    #[arg(long, env = "BKASH_APP_KEY", hide_env_values = true)]
    pub bkash_app_key: Option<String>,

    /// bKash application secret
    #[arg(long, env = "BKASH_APP_SECRET", hide_env_values = true)]
    pub bkash_app_secret: Option<String>,

    /// bKash API username
    #[arg(long, env = "BKASH_USERNAME", hide_env_values = true)]
    pub bkash_username: Option<String>,

    /// bKash API password
    #[arg(long, env = "BKASH_PASSWORD", hide_env_values = true)]
    pub bkash_password: Option<String>,
}
