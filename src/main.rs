use std::process;

fn main() {
    match rinit::cli::run() {
        Ok(status) => process::exit(status),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
