//! Interactive battery charging form.
//!
//! Fields are asked for in schema order. The duration is filled in from the
//! two charge times and never prompted for. A blocked submit jumps back to
//! the first invalid field; a failed submit keeps every value so the user
//! can retry.

use super::expire_session;
use crate::{
    api::{ApiClient, RecordStore},
    libs::{
        config::Config,
        messages::Message,
        record::{ChargingRecord, Field},
        session::SessionContext,
        submission::{NotificationKind, SubmissionFlow, SubmitOutcome},
        view::View,
    },
    msg_bail_anyhow, msg_error, msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Prefill the form from a JSON file keyed by field name (id, date, chargeCurrent, ...)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Submit without asking for confirmation
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: SubmitArgs, session: &mut SessionContext) -> Result<()> {
    if !session.is_signed_in() {
        msg_bail_anyhow!(Message::NotSignedIn);
    }

    let config = Config::read()?;
    let form = config.form();
    let client = ApiClient::new(&config.api_url()).with_session(session);
    let mut flow = SubmissionFlow::with_validator(client, form.validator()).with_notification_ttl(form.notification_ttl());

    match &args.file {
        Some(path) => {
            let record: ChargingRecord = serde_json::from_str(&fs::read_to_string(path)?)?;
            flow.load(&record);
            msg_info!(Message::RecordLoaded(path.display().to_string()));
        }
        None => {
            msg_print!(Message::FormHeader, true);
            fill_form(&mut flow)?;
        }
    }

    loop {
        if flow.can_submit() && !args.yes {
            View::record(flow.record());
            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptConfirmSubmit.to_string())
                .default(true)
                .interact()?;
            if !confirmed {
                msg_info!(Message::SubmitCancelled);
                return Ok(());
            }
        }

        if flow.can_submit() {
            msg_print!(Message::Submitting);
        }

        match flow.submit().await {
            SubmitOutcome::Blocked { focus, errors } => {
                View::errors(&errors);
                msg_warning!(Message::FixField(focus.label().to_string()));
                prompt_field(&mut flow, focus)?;
            }
            SubmitOutcome::Submitted => {
                show_notification(&flow);
                let another = args.file.is_none()
                    && Confirm::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptLogAnother.to_string())
                        .default(false)
                        .interact()?;
                if !another {
                    return Ok(());
                }
                fill_form(&mut flow)?;
            }
            SubmitOutcome::Failed { message } => {
                show_notification(&flow);
                let retry = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptRetrySubmit.to_string())
                    .default(true)
                    .interact()?;
                if !retry {
                    return Err(msg_error_anyhow!(message));
                }
            }
            SubmitOutcome::SessionInvalid => return Err(expire_session(session)),
            SubmitOutcome::Busy => msg_bail_anyhow!(Message::SubmitInProgress),
        }
    }
}

/// Prompts for every editable field in schema order.
fn fill_form<S: RecordStore>(flow: &mut SubmissionFlow<S>) -> Result<()> {
    for field in Field::ALL.into_iter().filter(|f| !f.is_derived()) {
        prompt_field(flow, field)?;
    }
    Ok(())
}

/// Asks for one field, prefilled with its current value, then reports the
/// field's validation state and the recomputed duration.
fn prompt_field<S: RecordStore>(flow: &mut SubmissionFlow<S>, field: Field) -> Result<()> {
    let current = flow.record().get(field).to_string();

    let value = match field.choices() {
        Some(choices) => {
            let selected = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(field.label())
                .items(choices)
                .default(choices.iter().position(|c| *c == current).unwrap_or(0))
                .interact()?;
            choices[selected].to_string()
        }
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(field.label())
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()?,
    };

    flow.set_field(field, value)?;

    if let Some(error) = flow.errors().get(field) {
        msg_warning!(Message::FieldInvalid(field.label().to_string(), error.to_string()));
    }
    if field == Field::ChargeTimeFinal || field == Field::ChargeTimeInitial {
        let duration = &flow.record().duration;
        if !duration.is_empty() {
            msg_info!(Message::DurationComputed(duration.clone()));
        }
    }
    Ok(())
}

fn show_notification<S: RecordStore>(flow: &SubmissionFlow<S>) {
    if let Some(notification) = flow.notification() {
        match notification.kind {
            NotificationKind::Success => msg_success!(notification.text),
            NotificationKind::Failure => msg_error!(notification.text),
        }
    }
}
