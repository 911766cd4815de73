use std::process::ExitCode;

use webcount::cli::{self, sums::SumsJson};

fn main() -> ExitCode {
    cli::launch::<SumsJson>()
}
