use anyhow::Result;
use clap::Parser;

use wordru_keyboard::{
    args::Args,
    keyboard::{LetterStatuses, alignment_notice, format_keyboard},
    logging::try_init_logging,
    snapshot::{GameSnapshot, load_snapshot},
    ui::run_ui,
};

fn main() -> Result<()> {
    let args = Args::parse();

    let _guard = try_init_logging(args.log_file.as_deref());

    let snapshot = build_snapshot(&args)?;

    if args.print {
        if let Some(notice) = alignment_notice(&snapshot) {
            eprintln!("warning: {}", notice);
        }

        let statuses = LetterStatuses::from_snapshot(&snapshot);

        if args.json {
            println!("{}", serde_json::to_string_pretty(&statuses)?);
        } else {
            println!("{}", format_keyboard(&statuses));
        }
        return Ok(());
    }

    run_ui(snapshot, args.snapshot)
}

fn build_snapshot(args: &Args) -> Result<GameSnapshot> {
    let mut snapshot = match &args.snapshot {
        Some(path) => load_snapshot(path)?,
        None => GameSnapshot::default(),
    };

    snapshot
        .grounds
        .extend(GameSnapshot::from_pairs(&args.ground).grounds);

    tracing::info!("starting with {} grounds", snapshot.len());
    Ok(snapshot)
}
