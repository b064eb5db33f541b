use std::io::{self, BufWriter, Write};

use pantry_cli::render::HELP;
use pantry_cli::{Config, Invocation, Session, run};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    pantry_observability::init(&config.log_filter);

    let invocation = match Invocation::parse(std::env::args().skip(1)) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("pantry: {e}\nusage: pantry [shop | tally <path> | help]");
            std::process::exit(2);
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match invocation {
        Invocation::Tally(path) => {
            run::tally(&path, &mut out)?;
            out.flush()?;
            Ok(())
        }
        Invocation::Shop => {
            let inventory = config.load_inventory()?;
            tracing::info!(items = inventory.len(), "session started");
            let mut session = Session::new(inventory);
            run::shop(&mut session, io::stdin().lock(), &mut out)
        }
        Invocation::Help => {
            writeln!(out, "usage: pantry [shop | tally <path> | help]\n\n{HELP}")?;
            Ok(())
        }
    }
}
