// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;
use qtscan::commands::list::ListCommand;
use qtscan::config::ScanConfig;
use qtscan::error::{Result, format_error_with_color, get_exit_code};
use qtscan::logging;
use qtscan::report::ReportFormat;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qtscan")]
#[command(author, version, about = "List registered Qt SDK installations", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Read settings from this TOML file instead of the per-user config
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Plain)]
    format: ReportFormat,
}

fn main() {
    let cli = Cli::parse();

    logging::setup_logger(cli.verbose);

    let result: Result<()> = (|| {
        let config = ScanConfig::resolve(cli.config.as_deref())?;
        let command = ListCommand::new(&config)?;
        command.execute(cli.format)
    })();

    if let Err(e) = result {
        let use_color = std::io::stderr().is_terminal();
        eprintln!("{}", format_error_with_color(&e, use_color));
        std::process::exit(get_exit_code(&e));
    }
}
