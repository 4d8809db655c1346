use std::env;
use std::io;
use std::process::ExitCode;

use anyhow::Result;
use tracing::info;

use hms_fmt::app::App;

fn main() -> Result<ExitCode> {
    init_tracing();

    let app = App::from_config();
    let args: Vec<String> = env::args().skip(1).collect();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let summary = if args.is_empty() {
        app.run_lines(io::stdin().lock(), &mut stdout.lock(), &mut stderr.lock())?
    } else {
        app.run(&args, &mut stdout.lock(), &mut stderr.lock())?
    };

    info!(
        formatted = summary.formatted,
        failed = summary.failed,
        "done"
    );

    Ok(if summary.success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .compact()
        .try_init();
}
