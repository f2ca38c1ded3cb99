use crate::support::{kind_or_exit, load_config_or_exit, parse_value};
use railway_anomaly::SystemError;

pub struct Args {
    pub type_number: u32,
    pub subject: String,
    pub args: Vec<String>,
    pub actual: Option<String>,
    pub instance: Option<String>,
    pub error_id: Option<String>,
    pub config: Option<String>,
    pub line: bool,
}

pub fn run(args: Args) {
    let kind = kind_or_exit(args.type_number);
    let config = load_config_or_exit(args.config.as_deref());

    let context_args = args.args.iter().map(String::as_str).map(parse_value).collect();
    let actual_value = args.actual.as_deref().map(parse_value);
    let mut error = SystemError::assemble(args.subject, kind, context_args, actual_value);
    if let Some(error_id) = args.error_id {
        error = error.with_error_id(error_id);
    }
    tracing::debug!(code = error.code(), "assembled system error");

    if args.line {
        println!("{}", error.format());
    } else {
        let report = config.render(&error, args.instance.as_deref());
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("json serialization")
        );
    }
}
