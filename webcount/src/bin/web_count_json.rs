use std::process::ExitCode;

use webcount::cli::{self, web_count_json::WebCountJson};

fn main() -> ExitCode {
    cli::launch::<WebCountJson>()
}
