use std::io::Write;

use crate::{App, Result};

use clap::{Arg, ArgMatches, SubCommand};
use mygit::repo::on_disk::OnDisk;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("init")
        .about("Create an empty mygit repository")
        .arg(
            Arg::with_name("n")
                .short("n")
                .value_name("name")
                .required(true)
                .help("Committer name to record in the config file"),
        )
        .arg(
            Arg::with_name("directory")
                .default_value(".")
                .help("The directory to create the repository in"),
        )
}

pub(crate) fn run(app: &mut App, args: &ArgMatches) -> Result<()> {
    // Both are guaranteed by clap: `n` is required and `directory` has a default.
    let name = args.value_of("n").unwrap_or_default();
    let dir = args.value_of("directory").unwrap_or(".");

    OnDisk::init(app.resolve(dir), name)?;

    writeln!(app, "Initialized empty mygit repository in {}", dir)?;

    Ok(())
}
