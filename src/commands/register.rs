//! Account sign-up.

use crate::{
    api::{ApiClient, ApiError, Registration, RegistrationError},
    libs::{config::Config, messages::Message},
    msg_error_anyhow, msg_success,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Password};
use tracing::debug;

pub async fn cmd() -> Result<()> {
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptName.to_string())
        .allow_empty(true)
        .interact_text()?;
    let email: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptEmail.to_string())
        .allow_empty(true)
        .interact_text()?;
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPassword.to_string())
        .allow_empty_password(true)
        .interact()?;
    let confirm_password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptConfirmPassword.to_string())
        .allow_empty_password(true)
        .interact()?;

    let registration = Registration::from_form(&name, &email, &password, &confirm_password).map_err(|e| match e {
        RegistrationError::MissingFields => msg_error_anyhow!(Message::RegisterFillAllFields),
        RegistrationError::PasswordMismatch => msg_error_anyhow!(Message::PasswordsDoNotMatch),
    })?;

    let config = Config::read()?;
    let client = ApiClient::new(&config.api_url());

    match client.register(&registration).await {
        Ok(()) => {
            msg_success!(Message::RegisterSucceeded);
            Ok(())
        }
        Err(e) => {
            debug!(error = %e, "registration failed");
            Err(registration_error(&e))
        }
    }
}

/// Maps a failed registration to the text shown to the user.
pub fn registration_error(error: &ApiError) -> anyhow::Error {
    match error {
        ApiError::Rejected { status, message } => match message {
            Some(message) => msg_error_anyhow!(message),
            None if status.is_success() => msg_error_anyhow!(Message::RegisterUnexpectedResponse),
            None => msg_error_anyhow!(Message::RegisterServerError),
        },
        ApiError::Transport(_) => msg_error_anyhow!(Message::RegisterNoResponse),
        ApiError::SessionInvalid | ApiError::InvalidResponse(_) => msg_error_anyhow!(Message::RegisterServerError),
    }
}
