//! Admin search of charging records by battery ID.

use super::{battery_id_or_prompt, expire_session, require_admin};
use crate::{
    api::{ApiClient, ApiError},
    libs::{config::Config, export::Exporter, messages::Message, session::SessionContext, view::View},
    msg_bail_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::error;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Battery ID to search for; prompted for when omitted
    battery_id: Option<String>,

    /// Also write the results to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn cmd(args: SearchArgs, session: &mut SessionContext) -> Result<()> {
    require_admin(session)?;

    let battery_id = battery_id_or_prompt(args.battery_id)?;
    if battery_id.is_empty() {
        msg_bail_anyhow!(Message::BatteryIdRequired);
    }

    let config = Config::read()?;
    let client = ApiClient::new(&config.api_url()).with_session(session);

    let rows = match client.search(&battery_id).await {
        Ok(rows) => rows,
        Err(ApiError::SessionInvalid) => return Err(expire_session(session)),
        Err(e) => {
            error!(error = %e, battery_id = %battery_id, "search failed");
            msg_bail_anyhow!(Message::SearchFailed);
        }
    };

    if rows.is_empty() {
        msg_info!(Message::NoDataForBattery);
        return Ok(());
    }

    msg_print!(Message::SearchResultsHeader(battery_id.clone(), rows.len()), true);
    View::rows(&rows);

    if let Some(output) = args.output {
        let exporter = Exporter::new(&battery_id, Some(output));
        let written = exporter.write_rows(&rows)?;
        msg_success!(Message::CsvDownloaded(exporter.output_path().display().to_string(), written));
    }

    Ok(())
}
