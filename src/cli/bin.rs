use std::{
    env,
    error::Error,
    io::{self, Write},
    process,
};

use tracing_subscriber::EnvFilter;

mod app;
pub(crate) use app::App;

mod cmds;

pub(crate) type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() {
    // Keep as little as possible in this function so the rest
    // can be reached from in-process tests.

    init_tracing();

    let arg_matches = app::clap_app().get_matches();

    let work_dir = match env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            let _ = writeln!(io::stderr(), "ERROR: {}", err);
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut stdin = stdin.lock();

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    let status = App::new(arg_matches, &mut stdin, &mut stdout, work_dir)
        .run_and_report(&mut io::stderr());

    process::exit(status);
}

// Log to stderr so stdout stays clean for IDs and object content.
// Set `RUST_LOG` (e.g. `RUST_LOG=mygit=debug`) for more detail.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
