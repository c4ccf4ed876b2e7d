use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match tembo_branch::cli::start::start().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
