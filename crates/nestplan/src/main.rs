use clap::Parser;
use nestplan::{Args, Session, data::storage::DataDirectory, init_logging, run};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(DataDirectory::default_path);

    init_logging(&data_dir, &args.log_level)?;

    let current_year = jiff::Zoned::now().year();
    let session = Session {
        dir: DataDirectory::new(data_dir),
        plan: args.plan,
        json: args.json,
        current_year,
    };

    tracing::info!(command = ?args.command, "running command");
    let output = run(&args.command, &session)?;
    print!("{output}");
    if session.json {
        println!();
    }
    Ok(())
}
