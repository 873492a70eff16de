// main.rs

use argv_codec::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("argv-codec: {e:#}");
        std::process::exit(1);
    }
}
