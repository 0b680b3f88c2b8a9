use anyhow::Result;
use clap::{crate_version, App as Cli, Arg};
use dnd_board::{app::App, config::Config};

fn main() -> Result<()> {
    let matches = Cli::new("dnd-board")
        .version(crate_version!())
        .about("Drag items between columns in the terminal")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml (default: ~/.config/dnd-board)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("write-config")
                .long("write-config")
                .help("Write the effective configuration to config.yml and exit"),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    if matches.is_present("write-config") {
        config.save()?;
        if let Some(path) = config.file_path() {
            println!("Wrote configuration to {}", path.display());
        }
        return Ok(());
    }

    App::start(config)?;
    Ok(())
}
