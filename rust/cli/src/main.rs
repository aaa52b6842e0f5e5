use std::io;

fn main() {
    highlow_cli::logging::init_logging();
    let code = highlow_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
