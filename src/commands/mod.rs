//! Command-line interface for battlog.
//!
//! Every command receives the [`SessionContext`] created here at startup;
//! commands that sign in or out mutate it, everything else only reads it.

pub mod export;
pub mod init;
pub mod login;
pub mod logout;
pub mod register;
pub mod search;
pub mod submit;
pub mod whoami;

use crate::libs::messages::Message;
use crate::libs::session::SessionContext;
use crate::{msg_error, msg_error_anyhow};
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};
use tracing::warn;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the API URL and form settings")]
    Init(init::InitArgs),
    #[command(about = "Create a new account")]
    Register,
    #[command(about = "Log in and store the session")]
    Login(login::LoginArgs),
    #[command(about = "Log out and remove the stored session")]
    Logout,
    #[command(about = "Show the role of the current session")]
    Whoami,
    #[command(about = "Fill in and submit a battery charging record")]
    Submit(submit::SubmitArgs),
    #[command(about = "Search records by battery ID (admin)")]
    Search(search::SearchArgs),
    #[command(about = "Download the CSV export for a battery ID (admin)")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        let mut session = SessionContext::restore();

        match cli.command {
            Commands::Init(args) => init::cmd(args, &mut session),
            Commands::Register => register::cmd().await,
            Commands::Login(args) => login::cmd(args, &mut session).await,
            Commands::Logout => logout::cmd(&mut session),
            Commands::Whoami => whoami::cmd(&session),
            Commands::Submit(args) => submit::cmd(args, &mut session).await,
            Commands::Search(args) => search::cmd(args, &mut session).await,
            Commands::Export(args) => export::cmd(args, &mut session).await,
        }
    }
}

/// Fails unless the session belongs to an administrator.
pub(crate) fn require_admin(session: &SessionContext) -> Result<()> {
    if !session.is_signed_in() {
        return Err(msg_error_anyhow!(Message::NotSignedIn));
    }
    if !session.is_admin() {
        return Err(msg_error_anyhow!(Message::AdminRequired));
    }
    Ok(())
}

/// Tears the session down after the service rejected it.
pub(crate) fn expire_session(session: &mut SessionContext) -> anyhow::Error {
    msg_error!(Message::SessionExpired);
    if let Err(e) = session.sign_out() {
        warn!(error = %e, "failed to remove stored session");
    }
    msg_error_anyhow!(Message::NotSignedIn)
}

/// Battery ID from the command line, or prompted for when absent. Returned
/// trimmed; may be empty.
pub(crate) fn battery_id_or_prompt(battery_id: Option<String>) -> Result<String> {
    let battery_id = match battery_id {
        Some(id) => id,
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptBatteryId.to_string())
            .allow_empty(true)
            .interact_text()?,
    };
    Ok(battery_id.trim().to_string())
}
