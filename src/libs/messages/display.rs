//! Display implementation for battlog application messages.
//!
//! All user-facing text lives here so wording stays consistent across
//! commands. Texts that mirror the service's web client (validation
//! reasons, login and registration errors) are kept word for word.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration and session removed".to_string(),
            Message::ConfigModuleApi => "API settings".to_string(),
            Message::ConfigModuleForm => "Form settings".to_string(),
            Message::ApiUrlFallback(url) => format!("API URL is not configured. Falling back to {}. Run `battlog init` or set BATTLOG_API_URL.", url),
            Message::UnknownNumericField(field) => format!("Unknown field '{}' in numeric field list, ignored", field),

            // === AUTHENTICATION MESSAGES ===
            Message::LoginSucceeded(role) => format!("Logged in as {}", role),
            Message::LoginFailed => "Login failed. Please check your credentials.".to_string(),
            Message::InvalidServerResponse => "Invalid response from server".to_string(),
            Message::LoggedOut => "Logged out".to_string(),
            Message::NotSignedIn => "You are not logged in. Run `battlog login` first.".to_string(),
            Message::AdminRequired => "This command requires an admin account.".to_string(),
            Message::SessionExpired => "Session expired. Redirecting to login...".to_string(),
            Message::SignedInAs(role) => format!("Signed in with role: {}", role),

            // === REGISTRATION MESSAGES ===
            Message::RegisterFillAllFields => "Please fill all fields.".to_string(),
            Message::PasswordsDoNotMatch => "Passwords do not match".to_string(),
            Message::RegisterSucceeded => "Registered successfully. You can now log in with `battlog login`.".to_string(),
            Message::RegisterServerError => "Server error during registration.".to_string(),
            Message::RegisterUnexpectedResponse => "Unexpected server response.".to_string(),
            Message::RegisterNoResponse => "No response from server. Check your network/backend.".to_string(),

            // === FORM MESSAGES ===
            Message::FormHeader => "Battery Charging Log".to_string(),
            Message::FieldInvalid(label, reason) => format!("{}: {}", label, reason),
            Message::DurationComputed(duration) => format!("Duration: {}", duration),
            Message::FixField(label) => format!("Please correct '{}' before submitting", label),
            Message::RecordLoaded(path) => format!("Loaded record values from {}", path),
            Message::SubmitCancelled => "Submission cancelled, nothing was sent".to_string(),
            Message::Submitting => "Submitting...".to_string(),
            Message::SubmitInProgress => "A submission is already in progress".to_string(),

            // === ADMIN MESSAGES ===
            Message::BatteryIdRequired => "Please enter a Battery ID".to_string(),
            Message::BatteryIdRequiredForExport => "Enter a Battery ID before downloading".to_string(),
            Message::NoDataForBattery => "No data found for that Battery ID".to_string(),
            Message::SearchFailed => "Error fetching data".to_string(),
            Message::SearchResultsHeader(id, count) => format!("Battery {}: {} record(s)", id, count),
            Message::CsvDownloaded(path, rows) => format!("CSV downloaded successfully: {} ({} rows)", path, rows),
            Message::CsvDownloadFailed => "Error downloading CSV".to_string(),

            // === PROMPTS ===
            Message::PromptApiUrl => "Enter the battery log API URL".to_string(),
            Message::PromptNumericFields => "Numeric fields (comma separated)".to_string(),
            Message::PromptNotificationMs => "Notification display time (milliseconds)".to_string(),
            Message::PromptSelectModules => "Select settings to configure".to_string(),
            Message::PromptEmail => "Email".to_string(),
            Message::PromptPassword => "Password".to_string(),
            Message::PromptName => "Full Name".to_string(),
            Message::PromptConfirmPassword => "Confirm Password".to_string(),
            Message::PromptBatteryId => "Battery ID".to_string(),
            Message::PromptConfirmSubmit => "Submit this record?".to_string(),
            Message::PromptRetrySubmit => "Retry submission?".to_string(),
            Message::PromptLogAnother => "Log another record?".to_string(),
        };

        write!(f, "{}", text)
    }
}
