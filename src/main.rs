use myls::args::Args;
use myls::config::Config;
use myls::error::ListError;
use myls::{app, logging, presentation};
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    let args = Args::from_argv(std::env::args_os());
    let config = Config::from(args);
    log::debug!("myls v{} · {} name(s)", myls::VERSION, config.names.len());

    let mut out = BufWriter::new(io::stdout().lock());
    let mut diag = io::stderr().lock();
    match app::run(&config, &mut out, &mut diag) {
        Ok(result) => {
            log::debug!(
                "{} block(s), {} not found",
                result.reported,
                result.not_found.len()
            );
            ExitCode::SUCCESS
        }
        Err(err @ ListError::OpenDirectory { .. }) => {
            if let Some(source) = std::error::Error::source(&err) {
                log::debug!("{}: {source}", config.dir.display());
            }
            if let Err(e) = presentation::write_open_failure(&mut out).and_then(|()| out.flush()) {
                let _ = writeln!(diag, "Application Error: {e}");
            }
            ExitCode::FAILURE
        }
        Err(err) => {
            let _ = writeln!(diag, "Application Error: {err}");
            ExitCode::FAILURE
        }
    }
}
