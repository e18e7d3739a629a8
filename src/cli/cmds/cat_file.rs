use std::io::Write;

use crate::{App, Result};

use clap::{Arg, ArgGroup, ArgMatches, SubCommand};
use mygit::repo::ObjectStore;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("cat-file")
        .about("Provide content or type information for repository objects")
        .arg(
            Arg::with_name("p")
                .short("p")
                .help("Pretty-print the contents of <object>"),
        )
        .arg(
            Arg::with_name("t")
                .short("t")
                .help("Show the object type identified by <object>"),
        )
        .group(ArgGroup::with_name("mode").args(&["p", "t"]).required(true))
        .arg(
            Arg::with_name("object")
                .required(true)
                .help("The name of the object to show"),
        )
}

pub(crate) fn run(app: &mut App, args: &ArgMatches) -> Result<()> {
    // Guaranteed by clap: `object` is required.
    let name = args.value_of("object").unwrap_or_default();

    let repo = app.repo()?;
    let object = repo.objects().get_hex(name)?;

    if args.is_present("t") {
        writeln!(app, "{}", object.kind())?;
    } else {
        app.write_all(object.content())?;
    }

    Ok(())
}
