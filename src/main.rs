//! mocboard main entrypoint.

use mocboard::run;
use mocboard::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
