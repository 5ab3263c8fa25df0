//! Thin binary entrypoint; all logic lives in the library crate.

fn main() {
    std::process::exit(vitrine_cli::run());
}
