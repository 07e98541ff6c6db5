use crate::{
    libs::{messages::Message, session::SessionContext},
    msg_success,
};
use anyhow::Result;

pub fn cmd(session: &mut SessionContext) -> Result<()> {
    session.sign_out()?;
    msg_success!(Message::LoggedOut);
    Ok(())
}
