use clap::{CommandFactory, Parser};
use cli::{logger, run_generate, run_package, Args, Command};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    match args.command {
        Some(Command::Generate(opts)) => {
            let report = run_generate(&opts)?;
            println!("App icon generated: {} files", report.files.len());
            println!("Location: {}/", opts.output_dir.display());
            if let Some(largest) = report.largest() {
                println!(
                    "To produce an .icns directly: moport-icons package --source {}",
                    largest.display()
                );
            }
        }
        Some(Command::Package(pkg)) => {
            let icns = run_package(&pkg)?;
            println!("Created {}", icns.display());
        }
        None => Args::command().print_help()?,
    }
    Ok(())
}
