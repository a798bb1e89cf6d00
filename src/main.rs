//! techpedia main entrypoint.

use techpedia::run;
use techpedia::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
