// SPDX-License-Identifier: MPL-2.0
use design_kit::app::{self, Flags};
use design_kit::config::Position;

const HELP: &str = "\
Design Kit gallery

USAGE:
  design_kit_gallery [OPTIONS]

OPTIONS:
  -h, --help               Print this help and exit
  --config-dir <PATH>      Directory holding settings.toml
  --position <CORNER>      Toast corner: top-right, top-left, bottom-right, bottom-left

ENVIRONMENT:
  DESIGN_KIT_CONFIG_DIR    Same as --config-dir (the flag takes precedence)
  RUST_LOG                 Log level filter (default: info)
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        position: args.opt_value_from_fn("--position", str::parse::<Position>)?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {remaining:?}");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    if let Err(err) = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .with_colors(true)
        .with_local_timestamps()
        .env()
        .init()
    {
        eprintln!("failed to build logger instance: {err}");
    }

    match parse_flags() {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => Ok(()),
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    }
}
