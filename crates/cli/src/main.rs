use check_json::{run, Args};
use check_json_nagios::StatusReport;
use clap::error::ErrorKind;
use clap::Parser;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Usage errors are UNKNOWN to Nagios, not clap's exit code 2
            eprint!("{e}");
            let mut report = StatusReport::new();
            report.append_unknown([usage_message(&e)]);
            exit_with(&report)
        }
    };

    if let Err(e) = check_json_utils::init(check_json_utils::verbosity_filter(
        args.verbose,
        args.debug,
    )) {
        eprintln!("{e}");
    }

    let report = run(&args).await;
    exit_with(&report)
}

fn usage_message(error: &clap::Error) -> String {
    let rendered = error.to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    format!(
        "invalid arguments: {}",
        first_line.trim_start_matches("error: ")
    )
}

fn exit_with(report: &StatusReport) -> ! {
    println!("{}", report.render());
    std::process::exit(report.code().exit_code())
}
