use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[cfg(test)]
use std::ffi::OsString;

use crate::{cmds, Result};

use clap::{crate_version, AppSettings, ArgMatches};
use mygit::repo::{self, on_disk::OnDisk};

pub(crate) fn clap_app<'a, 'b>() -> clap::App<'a, 'b> {
    let app = clap::App::new("mygit")
        .version(crate_version!())
        .about("A minimal content-addressed version control tool")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .setting(AppSettings::VersionlessSubcommands);

    cmds::add_subcommands(app)
}

/// What a subcommand sees of the outside world: its parsed arguments,
/// the standard streams, and the directory it treats as the working
/// directory. Relative paths on the command line resolve against
/// `work_dir` rather than the process's current directory.
pub(crate) struct App<'a> {
    arg_matches: ArgMatches<'a>,
    stdin: &'a mut dyn Read,
    stdout: &'a mut dyn Write,
    work_dir: PathBuf,
}

impl<'a> App<'a> {
    pub fn new(
        arg_matches: ArgMatches<'a>,
        stdin: &'a mut dyn Read,
        stdout: &'a mut dyn Write,
        work_dir: PathBuf,
    ) -> App<'a> {
        App {
            arg_matches,
            stdin,
            stdout,
            work_dir,
        }
    }

    pub fn arg_matches(&self) -> &ArgMatches<'a> {
        &self.arg_matches
    }

    pub fn stdin(&mut self) -> &mut dyn Read {
        &mut *self.stdin
    }

    /// Resolve a path argument. Absolute paths are returned unchanged.
    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.work_dir.join(path)
    }

    /// Open the repository for the working directory.
    ///
    /// Only a `.mygit` directly inside the working directory is found;
    /// parent directories are not searched.
    pub fn repo(&self) -> repo::Result<OnDisk> {
        OnDisk::new(&self.work_dir)
    }

    pub fn run(&mut self) -> Result<()> {
        cmds::dispatch(self)
    }

    /// Run the subcommand and flush its output. Failures are written to
    /// `stderr` as `ERROR: <message>`.
    ///
    /// Returns the process exit status: 0 on success, 1 on failure.
    pub fn run_and_report(&mut self, stderr: &mut dyn Write) -> i32 {
        let result = self.run().and_then(|()| Ok(self.stdout.flush()?));

        match result {
            Ok(()) => 0,
            Err(err) => {
                // If stderr is gone too, the exit status is all that's left.
                let _ = writeln!(stderr, "ERROR: {}", err);
                1
            }
        }
    }

    #[cfg(test)]
    pub fn run_in_with_stdin<I, T>(work_dir: &Path, stdin: Vec<u8>, args: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut args: Vec<OsString> = args.into_iter().map(|x| x.into()).collect();
        args.insert(0, OsString::from("mygit"));

        let mut stdin = std::io::Cursor::new(stdin);
        let mut stdout = Vec::new();

        App::new(
            clap_app().get_matches_from_safe(args)?,
            &mut stdin,
            &mut stdout,
            work_dir.to_path_buf(),
        )
        .run()?;

        Ok(stdout)
    }

    #[cfg(test)]
    pub fn run_in<I, T>(work_dir: &Path, args: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        App::run_in_with_stdin(work_dir, Vec::new(), args)
    }
}

impl<'a> Write for App<'a> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.stdout.flush()
    }
}
