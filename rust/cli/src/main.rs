use std::io;

fn main() {
    simple_poker_cli::logging::init_logging();
    let code = simple_poker_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
