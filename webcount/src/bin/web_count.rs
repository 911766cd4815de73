use std::process::ExitCode;

use webcount::cli::{self, web_count::WebCount};

fn main() -> ExitCode {
    cli::launch::<WebCount>()
}
