mod command;
mod finder;
mod utils;

use clap::{Arg, Command};
use command::{parse_command, Invocation, SearchCommand};
use finder::{find_in_path, ErrorKind, FindError, FsLoader, SearchConfig, SearchOutcome};
use log::info;
use std::io;
use std::process;
use utils::init_logger;

const USAGE: &str = r#"Search the string in the specified directory or file and return the file path which containing the string. Except encrypted files and special encoding files.

Usage: sfr [[/e <encoding>] [/x <file types>] [/p] [/v] /s <string> <path>]

/h       Display help. This is the same as not typing any options.
/e       Specifies the encoding to parse files:
         ascii, default, bigendianunicode, unicode, utf32, utf7, utf8
/x       Specifies which file types are not searched. Use the comma as a delimiter, such as "exe,dll".
/p       Reads and checks files in parallel.
/v       Prints diagnostic logs to stderr.
/s       Specifies string to find.
"#;

/// 收集原始命令行参数，具体语法由 command 模块解析
fn parse_args() -> Vec<String> {
    let matches = Command::new("sfr")
        .about("Search a string in the files of a directory")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("tokens")
                .value_name("ARGS")
                .num_args(0..)
                .allow_hyphen_values(true)
                .trailing_var_arg(true),
        )
        .get_matches();

    matches
        .get_many::<String>("tokens")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

/// 创建搜索配置
fn create_search_config(command: &SearchCommand) -> SearchConfig {
    let mut config = SearchConfig::new();
    config.concurrent = command.parallel;
    config.show_progress = true;
    config
}

/// 打印错误；未知命令用红色显示
fn report_error(err: &FindError) {
    match err {
        FindError::UnknownCommand(_) => eprintln!("\x1b[31m{}\x1b[0m", err),
        _ => eprintln!("{}", err),
    }
    if err.kind() == ErrorKind::Configuration {
        eprintln!("Run \"sfr /h\" to see the usage.");
    }
}

fn main() {
    let tokens = parse_args();

    let command = match parse_command(&tokens) {
        Ok(Invocation::Help) => {
            println!("{}", USAGE);
            return;
        }
        Ok(Invocation::Search(command)) => command,
        Err(e) => {
            report_error(&e);
            process::exit(1);
        }
    };

    // 初始化日志
    if let Err(e) = init_logger(command.verbose) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = create_search_config(&command);
    info!("parsed request: {:?}", command.request);

    match find_in_path(&command.request, &config, &FsLoader, io::stdout()) {
        Ok(SearchOutcome::Directory { summary, matches }) => {
            info!(
                "{} file(s) contain {:?}, first: {:?}",
                summary.matched_count,
                summary.query,
                matches.first()
            );
        }
        Ok(SearchOutcome::File(result)) => {
            info!("{}: matched = {}", result.path.display(), result.matched);
        }
        Ok(SearchOutcome::Skipped { path, extension }) => {
            info!("{} skipped, extension {:?} excluded", path.display(), extension);
        }
        Err(e) => {
            report_error(&e);
            process::exit(1);
        }
    }
}
