use std::io::Write;

use crate::{App, Result};

use clap::{Arg, ArgMatches, SubCommand};

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("commit")
        .about("Record a snapshot of the working directory")
        .arg(
            Arg::with_name("m")
                .short("m")
                .value_name("message")
                .required(true)
                .help("Use the given message as the commit message"),
        )
}

pub(crate) fn run(app: &mut App, args: &ArgMatches) -> Result<()> {
    // Guaranteed by clap: `m` is required.
    let message = args.value_of("m").unwrap_or_default();

    let mut repo = app.repo()?;
    let id = repo.commit(message)?;

    writeln!(app, "{}", id)?;

    Ok(())
}
