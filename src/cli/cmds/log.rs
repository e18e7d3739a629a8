use std::io::Write;

use crate::{App, Result};

use clap::{ArgMatches, SubCommand};

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("log").about("Show commit history, newest first")
}

pub(crate) fn run(app: &mut App, _args: &ArgMatches) -> Result<()> {
    let repo = app.repo()?;

    for entry in repo.log()? {
        let (id, commit) = entry?;
        let summary = commit.message().lines().next().unwrap_or_default();
        writeln!(app, "* {} {}", id, summary)?;
    }

    Ok(())
}
