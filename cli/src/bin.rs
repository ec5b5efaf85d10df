#![deny(warnings)]

use std::{
    error::Error,
    io::{self, Write},
};

use tracing_subscriber::EnvFilter;

mod app;
pub(crate) use app::App;

mod cmds;
mod find_repo;

#[cfg(test)]
mod temp_cwd;

pub(crate) type Result<T> = std::result::Result<T, Box<dyn Error>>;

// Everything worth testing lives in `App`; `main` only wires up the
// real stdio handles and turns the result into an exit status.
#[cfg(not(tarpaulin_include))]
fn main() {
    init_logging();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut stdin = stdin.lock();
    let mut stdout = stdout.lock();

    let mut app = App {
        arg_matches: app::clap_app().get_matches(),
        stdin: &mut stdin,
        stdout: &mut stdout,
    };

    let result = app.run().and_then(|()| Ok(app.flush()?));

    if let Err(err) = result {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}

// Logs go to stderr so they never mix with object IDs or payloads on stdout.
// `RUST_LOG` overrides the default of warnings only, e.g.
// `RUST_LOG=sprig_on_disk=debug sprig hash-object -w file`.
#[cfg(not(tarpaulin_include))]
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
