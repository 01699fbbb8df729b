//! `issued` - in-memory issue tracking HTTP API.

use issue_tracker::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
