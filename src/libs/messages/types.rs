#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleApi,
    ConfigModuleForm,
    ApiUrlFallback(String), // default URL
    UnknownNumericField(String),

    // === AUTHENTICATION MESSAGES ===
    LoginSucceeded(String), // role
    LoginFailed,
    InvalidServerResponse,
    LoggedOut,
    NotSignedIn,
    AdminRequired,
    SessionExpired,
    SignedInAs(String), // role

    // === REGISTRATION MESSAGES ===
    RegisterFillAllFields,
    PasswordsDoNotMatch,
    RegisterSucceeded,
    RegisterServerError,
    RegisterUnexpectedResponse,
    RegisterNoResponse,

    // === FORM MESSAGES ===
    FormHeader,
    FieldInvalid(String, String), // field label, reason
    DurationComputed(String),
    FixField(String), // field label
    RecordLoaded(String), // path
    SubmitCancelled,
    Submitting,
    SubmitInProgress,

    // === ADMIN MESSAGES ===
    BatteryIdRequired,
    BatteryIdRequiredForExport,
    NoDataForBattery,
    SearchFailed,
    SearchResultsHeader(String, usize), // battery id, row count
    CsvDownloaded(String, usize),       // path, row count
    CsvDownloadFailed,

    // === PROMPTS ===
    PromptApiUrl,
    PromptNumericFields,
    PromptNotificationMs,
    PromptSelectModules,
    PromptEmail,
    PromptPassword,
    PromptName,
    PromptConfirmPassword,
    PromptBatteryId,
    PromptConfirmSubmit,
    PromptRetrySubmit,
    PromptLogAnother,
}
