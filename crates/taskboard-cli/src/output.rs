use serde::Serialize;
use taskboard_core::BoardError;

#[derive(Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

/// Failure payload: `kind` is a stable tag scripts can branch on,
/// `message` the human-readable rendering.
#[derive(Serialize)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub message: String,
}

#[derive(Serialize)]
pub struct ListResponse<T: Serialize> {
    pub items: Vec<T>,
    pub count: usize,
}

pub fn output_success<T: Serialize>(data: T) {
    let response = CliResponse {
        success: true,
        api_version: env!("CARGO_PKG_VERSION"),
        data: Some(data),
        error: None,
    };
    println!("{}", serde_json::to_string(&response).unwrap());
}

pub fn output_list<T: Serialize>(items: Vec<T>) {
    let count = items.len();
    output_success(ListResponse { items, count });
}

/// Stable tag for each error variant, independent of message wording.
pub fn error_kind(err: &BoardError) -> &'static str {
    match err {
        BoardError::StoreUnavailable(_) => "store_unavailable",
        BoardError::Decode(_) => "decode_error",
        BoardError::TaskNotFound(_) => "task_not_found",
        BoardError::SubtaskNotFound(_) => "subtask_not_found",
        BoardError::InvalidIndex { .. } => "invalid_index",
    }
}

/// Render a board error as the failure envelope and terminate.
///
/// Every operation failure goes through here so load, engine, and save
/// errors all reach the caller in the same shape.
pub fn output_failure(err: &BoardError) -> ! {
    output_error(error_kind(err), err.to_string())
}

/// Outputs a failure envelope to stderr and terminates the process.
///
/// Never returns: the process exits with code 1 so shell scripts and CI
/// pipelines see the failure.
pub fn output_error(kind: &'static str, message: impl Into<String>) -> ! {
    let response: CliResponse<()> = CliResponse {
        success: false,
        api_version: env!("CARGO_PKG_VERSION"),
        data: None,
        error: Some(ErrorBody {
            kind,
            message: message.into(),
        }),
    };
    eprintln!("{}", serde_json::to_string(&response).unwrap());
    std::process::exit(1);
}
