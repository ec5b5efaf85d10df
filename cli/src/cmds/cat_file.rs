use std::io::Write;

use crate::{find_repo, App, Result};

use clap::{Arg, ArgMatches, SubCommand};
use sprig_core::{
    object::{Id, Kind},
    repo::Repo,
};

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("cat-file")
        .about("Print the content of a stored object")
        .arg(
            Arg::with_name("type")
                .required(true)
                .possible_values(&["blob", "tree", "commit", "tag"])
                .help("The type the object is expected to have"),
        )
        .arg(
            Arg::with_name("object")
                .required(true)
                .help("The full 40-digit ID of the object to show"),
        )
}

pub(crate) fn run(app: &mut App, args: &ArgMatches) -> Result<()> {
    let expected = args.value_of("type").unwrap_or("blob").parse::<Kind>()?;
    let id = args.value_of("object").unwrap_or("").parse::<Id>()?;

    let repo = find_repo::from_current_dir()?;
    let object = repo.get_object(&id)?;

    if object.kind() != expected {
        return Err(format!("object {} is a {}, not a {}", id, object.kind(), expected).into());
    }

    app.write_all(&object.serialize())?;

    Ok(())
}
