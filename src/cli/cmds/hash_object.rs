use std::{
    fs,
    io::{Read, Write},
};

use crate::{App, Result};

use clap::{Arg, ArgMatches, Error, ErrorKind, SubCommand};
use mygit::{
    object::{Kind, Object},
    repo::ObjectStore,
};

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("hash-object")
        .about("Compute object ID and optionally create a blob from a file")
        .arg(
            Arg::with_name("w")
                .short("w")
                .help("Actually write the object into the object database"),
        )
        .arg(
            Arg::with_name("stdin")
                .long("stdin")
                .help("Read the object from standard input instead of from a file"),
        )
        .arg(Arg::with_name("file"))
}

pub(crate) fn run(app: &mut App, args: &ArgMatches) -> Result<()> {
    let content = content_from_args(app, args)?;

    let id = if args.is_present("w") {
        let mut repo = app.repo()?;
        repo.objects_mut().put(Kind::Blob, content)?
    } else {
        Object::new(Kind::Blob, content).id().clone()
    };

    writeln!(app, "{}", id)?;

    Ok(())
}

fn content_from_args(app: &mut App, args: &ArgMatches) -> Result<Vec<u8>> {
    let stdin = args.is_present("stdin");

    match (args.value_of("file"), stdin) {
        (Some(file), false) => Ok(fs::read(app.resolve(file))?),
        (None, true) => {
            let mut content = Vec::new();
            app.stdin().read_to_end(&mut content)?;
            Ok(content)
        }
        _ => Err(Box::new(Error {
            message: "content source must be either --stdin or a file path".to_string(),
            kind: ErrorKind::MissingRequiredArgument,
            info: None,
        })),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::App;

    const HELLO_CONTENT: &[u8; 11] = b"Hello World";
    const HELLO_ID: &str = "5e1c309dae7f45e0f39b1bf3ac3cd9db12e7d689";

    #[test]
    fn hash_file_without_writing() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("hello"), HELLO_CONTENT).unwrap();

        let stdout = App::run_in(temp.path(), vec!["hash-object", "hello"]).unwrap();
        assert_eq!(stdout, format!("{}\n", HELLO_ID).as_bytes());

        // No repo needed, and nothing written.
        assert!(!temp.path().join(".mygit").exists());
    }

    #[test]
    fn hash_stdin_without_writing() {
        let temp = tempfile::tempdir().unwrap();

        let stdout = App::run_in_with_stdin(
            temp.path(),
            HELLO_CONTENT.to_vec(),
            vec!["hash-object", "--stdin"],
        )
        .unwrap();
        assert_eq!(stdout, format!("{}\n", HELLO_ID).as_bytes());
    }

    #[test]
    fn hash_file_and_write_to_database() {
        let temp = tempfile::tempdir().unwrap();

        App::run_in(temp.path(), vec!["init", "-n", "me"]).unwrap();
        fs::write(temp.path().join("hello"), HELLO_CONTENT).unwrap();

        let stdout = App::run_in(temp.path(), vec!["hash-object", "-w", "hello"]).unwrap();
        assert_eq!(stdout, format!("{}\n", HELLO_ID).as_bytes());

        assert!(temp
            .path()
            .join(".mygit/objects/5e/1c309dae7f45e0f39b1bf3ac3cd9db12e7d689")
            .is_file());

        let stdout = App::run_in(temp.path(), vec!["cat-file", "-p", HELLO_ID]).unwrap();
        assert_eq!(stdout, HELLO_CONTENT.to_vec());
    }

    #[test]
    fn absolute_file_path() {
        let repo = tempfile::tempdir().unwrap();
        let elsewhere = tempfile::tempdir().unwrap();
        let path = elsewhere.path().join("hello");
        fs::write(&path, HELLO_CONTENT).unwrap();

        App::run_in(repo.path(), vec!["init", "-n", "me"]).unwrap();

        let stdout =
            App::run_in(repo.path(), vec!["hash-object", "-w", path.to_str().unwrap()]).unwrap();
        assert_eq!(stdout, format!("{}\n", HELLO_ID).as_bytes());
    }

    #[test]
    fn error_write_without_repo() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("hello"), HELLO_CONTENT).unwrap();

        let err = App::run_in(temp.path(), vec!["hash-object", "-w", "hello"]).unwrap_err();
        assert!(err.to_string().starts_with("not a mygit repository"));
    }

    #[test]
    fn error_both_stdin_and_file() {
        let temp = tempfile::tempdir().unwrap();

        let err =
            App::run_in(temp.path(), vec!["hash-object", "--stdin", "hello"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "content source must be either --stdin or a file path"
        );
    }

    #[test]
    fn error_no_source() {
        let temp = tempfile::tempdir().unwrap();

        let err = App::run_in(temp.path(), vec!["hash-object"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "content source must be either --stdin or a file path"
        );
    }

    #[test]
    fn error_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        assert!(App::run_in(temp.path(), vec!["hash-object", "nope"]).is_err());
    }
}
