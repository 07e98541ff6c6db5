//! Signs in against the service and stores the returned session.

use crate::{
    api::{ApiClient, ApiError, LoginCredentials},
    libs::{
        config::Config,
        messages::Message,
        session::{Role, SessionContext},
    },
    msg_error_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password};
use tracing::debug;

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account email; prompted for when omitted
    #[arg(short, long)]
    email: Option<String>,
}

pub async fn cmd(args: LoginArgs, session: &mut SessionContext) -> Result<()> {
    let email = match args.email {
        Some(email) => email,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEmail.to_string())
            .interact_text()?,
    };
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPassword.to_string())
        .interact()?;

    let config = Config::read()?;
    let client = ApiClient::new(&config.api_url());
    let credentials = LoginCredentials { email, password };

    let response = client.login(&credentials).await.map_err(|e| {
        debug!(error = %e, "login request failed");
        login_error(&e)
    })?;
    let (token, role) = response.into_parts().ok_or_else(|| msg_error_anyhow!(Message::InvalidServerResponse))?;

    let role = Role::from(role.as_str());
    session.sign_in(&token, role.clone())?;

    msg_success!(Message::LoginSucceeded(role.to_string()));
    Ok(())
}

/// Maps a failed login to the text shown to the user. An unreadable success
/// body is reported as a bad response, everything else as bad credentials.
pub fn login_error(error: &ApiError) -> anyhow::Error {
    match error {
        ApiError::InvalidResponse(_) => msg_error_anyhow!(Message::InvalidServerResponse),
        _ => msg_error_anyhow!(Message::LoginFailed),
    }
}
