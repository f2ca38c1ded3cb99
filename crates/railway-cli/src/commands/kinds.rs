use crate::support::{kind_payload, parse_family_or_exit};
use railway_anomaly::taxonomy::{all, of_family};
use railway_anomaly::ErrorKind;
use serde_json::{Value, json};

pub fn run(family: Option<String>, json_output: bool) {
    let kinds = match family.as_deref() {
        Some(family) => of_family(parse_family_or_exit(family)),
        None => all(),
    };

    if json_output {
        let payload = json!({
            "count": kinds.len(),
            "kinds": kinds.iter().copied().map(kind_payload).collect::<Vec<Value>>(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        for kind in &kinds {
            println!(
                "{:>5}  {:<28} {:>3}  {}",
                kind.type_number(),
                kind.code(),
                kind.suggested_status(),
                kind.problem_title()
            );
        }
        println!("{} kind(s)", kinds.len());
    }
}
