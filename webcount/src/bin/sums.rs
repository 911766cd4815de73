use std::process::ExitCode;

use webcount::cli::{self, sums::Sums};

fn main() -> ExitCode {
    cli::launch::<Sums>()
}
