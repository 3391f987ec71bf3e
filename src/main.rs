use std::process::ExitCode;

fn main() -> ExitCode {
    match leperranger::game::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // The log plugin is not up yet when configuration fails.
            eprintln!("leperranger: {err}");
            ExitCode::FAILURE
        }
    }
}
