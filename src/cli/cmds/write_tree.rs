use std::io::Write;

use crate::{App, Result};

use clap::{ArgMatches, SubCommand};

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("write-tree")
        .about("Create a tree object from the current working directory")
}

pub(crate) fn run(app: &mut App, _args: &ArgMatches) -> Result<()> {
    let mut repo = app.repo()?;
    let id = repo.write_tree()?;

    writeln!(app, "{}", id)?;

    Ok(())
}
