use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

fn page_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("page")
                .help("Page description (JSON)")
                .required(true)
                .index(1)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("fuzzy")
                .long("fuzzy")
                .short('f')
                .help("Opt in to fuzzy label matching (default is plain substring search)")
                .action(ArgAction::SetTrue),
        )
}

pub fn build_cli() -> Command {
    Command::new("picklist")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Mount a searchable multi-select on a page and replay interactions")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .help("Write the log to this file instead of stderr")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            page_args(Command::new("render"))
                .about("Print the page markup after the script has run")
                .arg(
                    Arg::new("destroy")
                        .long("destroy")
                        .help("Tear the widget down before printing")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            page_args(Command::new("state"))
                .about("Print the option list as JSON after the script has run"),
        )
}
