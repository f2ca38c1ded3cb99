use crate::support::kind_or_exit;
use railway_anomaly::ErrorKind;

pub fn run(type_number: u32, instance: Option<u64>) {
    let kind = kind_or_exit(type_number);
    let error_id = match instance {
        Some(instance) => kind.generate_error_id(instance),
        None => kind.generate_error_id_now(),
    };
    println!("{error_id}");
}
