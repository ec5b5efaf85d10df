use std::{io::Write, path::Path};

use crate::{App, Result};

use clap::{Arg, ArgMatches, SubCommand};
use sprig_on_disk::OnDiskRepo;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("init")
        .about("Create an empty repository")
        .arg(
            Arg::with_name("directory")
                .default_value(".")
                .help("The directory to create; must be missing or empty"),
        )
}

pub(crate) fn run(app: &mut App, init_matches: &ArgMatches) -> Result<()> {
    let dir = init_matches.value_of("directory").unwrap_or(".");

    let path = Path::new(dir);
    OnDiskRepo::init(path)?;

    writeln!(app, "Initialized empty repository in {}", path.display())?;

    Ok(())
}
