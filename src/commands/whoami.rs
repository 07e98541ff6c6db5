use crate::{
    libs::{messages::Message, session::SessionContext},
    msg_info,
};
use anyhow::Result;

pub fn cmd(session: &SessionContext) -> Result<()> {
    match session.role() {
        Some(role) if session.is_signed_in() => msg_info!(Message::SignedInAs(role.to_string())),
        _ => msg_info!(Message::NotSignedIn),
    }
    Ok(())
}
