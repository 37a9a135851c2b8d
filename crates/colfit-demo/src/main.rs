#![forbid(unsafe_code)]

fn main() {
    colfit_demo::init_tracing();
    if let Err(error) = colfit_demo::run_from_env() {
        eprintln!("{error}");
        std::process::exit(error.exit_code());
    }
}
