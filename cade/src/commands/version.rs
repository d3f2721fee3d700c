use cade_core::cade_println;

pub fn version_string() -> String {
    format!("v{}", env!("CARGO_PKG_VERSION"))
}

pub fn handle_version() {
    cade_println!("{}", version_string());
}
