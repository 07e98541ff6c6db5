//! Admin download of the service's CSV export for one battery.

use super::{battery_id_or_prompt, expire_session, require_admin};
use crate::{
    api::{ApiClient, ApiError},
    libs::{config::Config, export::Exporter, messages::Message, session::SessionContext},
    msg_bail_anyhow, msg_error_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::error;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Battery ID to export; prompted for when omitted
    battery_id: Option<String>,

    /// Destination file, `battery_<id>_export.csv` by default
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn cmd(args: ExportArgs, session: &mut SessionContext) -> Result<()> {
    require_admin(session)?;

    let battery_id = battery_id_or_prompt(args.battery_id)?;
    if battery_id.is_empty() {
        msg_bail_anyhow!(Message::BatteryIdRequiredForExport);
    }

    let config = Config::read()?;
    let client = ApiClient::new(&config.api_url()).with_session(session);

    let bytes = match client.export_csv(&battery_id).await {
        Ok(bytes) => bytes,
        Err(ApiError::SessionInvalid) => return Err(expire_session(session)),
        Err(e) => {
            error!(error = %e, battery_id = %battery_id, "export download failed");
            msg_bail_anyhow!(Message::CsvDownloadFailed);
        }
    };

    let exporter = Exporter::new(&battery_id, args.output);
    let rows = exporter.save_download(&bytes).map_err(|e| {
        error!(error = %e, "failed to write export");
        msg_error_anyhow!(Message::CsvDownloadFailed)
    })?;

    msg_success!(Message::CsvDownloaded(exporter.output_path().display().to_string(), rows));
    Ok(())
}
