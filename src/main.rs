use std::process::ExitCode;

fn main() -> ExitCode {
    match yolo2labelme::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
