//! Interactive configuration setup.

use crate::{
    libs::{config::Config, messages::Message, session::SessionContext},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the configuration file and the stored session instead
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs, session: &mut SessionContext) -> Result<()> {
    if init_args.delete {
        Config::delete()?;
        session.sign_out()?;
        msg_success!(Message::ConfigDeleted);
        return Ok(());
    }

    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
