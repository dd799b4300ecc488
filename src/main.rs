use greeter::cli;

fn main() {
    if let Err(e) = cli::run_cli() {
        // {:#} prints the whole error chain on one line
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
