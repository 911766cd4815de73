use std::process::ExitCode;

use webcount::cli::{self, dynamic::DynamicWebCount};

fn main() -> ExitCode {
    cli::launch::<DynamicWebCount>()
}
