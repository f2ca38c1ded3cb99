use crate::support::{kind_or_exit, kind_payload};
use railway_anomaly::ErrorKind;
use railway_anomaly::format::arity;

pub fn run(type_number: u32, json_output: bool) {
    let kind = kind_or_exit(type_number);

    if json_output {
        let mut payload = kind_payload(kind);
        payload["arity"] = arity(kind.message_template()).into();
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        println!("{} ({})", kind.code(), kind.type_number());
        println!("  Family: {}", kind.family());
        println!("  Category: {}", kind.category());
        println!("  Severity: {}", kind.severity());
        println!("  Status: {}", kind.suggested_status());
        println!("  Template: {}", kind.message_template());
        println!("  Problem type: {}", kind.problem_type());
        println!("  Title: {}", kind.problem_title());
        println!("  Retryable: {}", if kind.is_retryable() { "yes" } else { "no" });
    }
}
