use serde::Serialize;

/// Every `todo` invocation prints exactly one JSON object:
/// `{"success":true,"data":...}` on stdout, or
/// `{"success":false,"error":"..."}` on stderr.
#[derive(Serialize)]
struct Envelope<T: Serialize> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Payload for `list`: the matching tasks plus a count, so scripts can
/// check result size without re-parsing the array.
#[derive(Serialize)]
struct TaskList<T: Serialize> {
    items: Vec<T>,
    count: usize,
}

pub fn output_success<T: Serialize>(data: T) {
    let envelope = Envelope {
        success: true,
        data: Some(data),
        error: None,
    };
    println!("{}", serde_json::to_string(&envelope).unwrap());
}

pub fn output_list<T: Serialize>(items: Vec<T>) {
    let count = items.len();
    output_success(TaskList { items, count });
}

/// Print the error envelope to stderr and exit with code 1 so shell
/// scripts and CI observe the failure.
pub fn output_error(message: &str) -> ! {
    let envelope: Envelope<()> = Envelope {
        success: false,
        data: None,
        error: Some(message.to_string()),
    };
    eprintln!("{}", serde_json::to_string(&envelope).unwrap());
    std::process::exit(1);
}
