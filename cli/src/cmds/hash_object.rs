use std::{
    fs,
    io::Write,
};

use crate::{find_repo, App, Result};

use clap::{Arg, ArgMatches, SubCommand};
use sprig_core::{
    object::{Kind, Object},
    repo::Repo,
};
use tracing::debug;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("hash-object")
        .about("Compute object ID and optionally write the object to the store")
        .arg(
            Arg::with_name("t")
                .short("t")
                .value_name("type")
                .possible_values(&["blob", "tree", "commit", "tag"])
                .default_value("blob")
                .help("Specify the type"),
        )
        .arg(
            Arg::with_name("w")
                .short("w")
                .help("Actually write the object into the object store"),
        )
        .arg(
            Arg::with_name("stdin")
                .long("stdin")
                .conflicts_with("file")
                .help("Read the object from standard input instead of from a file"),
        )
        .arg(
            Arg::with_name("file")
                .required_unless("stdin")
                .help("The file to hash"),
        )
}

pub(crate) fn run(app: &mut App, args: &ArgMatches) -> Result<()> {
    let kind = args.value_of("t").unwrap_or("blob").parse::<Kind>()?;
    let payload = payload_from_args(app, args)?;

    // Payloads that don't parse as `kind` are rejected before anything is written.
    let object = Object::deserialize(kind, &payload)?;

    let id = if args.is_present("w") {
        let mut repo = find_repo::from_current_dir()?;
        repo.put_object(&object)?
    } else {
        object.id()
    };

    debug!(%id, %kind, written = args.is_present("w"), "hashed object");
    writeln!(app, "{}", id)?;

    Ok(())
}

fn payload_from_args(app: &mut App, args: &ArgMatches) -> Result<Vec<u8>> {
    match args.value_of("file") {
        Some(file) => Ok(fs::read(file)?),
        None => {
            let mut payload = Vec::new();
            app.stdin.read_to_end(&mut payload)?;
            Ok(payload)
        }
    }
}
