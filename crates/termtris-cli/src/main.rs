use std::process::ExitCode;

mod command;
mod view;

fn main() -> anyhow::Result<ExitCode> {
    command::run()
}
