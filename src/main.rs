mod cli;
mod console_format;
mod definition;
mod package;
mod report;
mod ui;
mod version;

use std::io::{self, IsTerminal};

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // Set console width override if specified (for testing)
    if let Some(width) = args.console_width {
        console_format::set_console_width(width);
    }

    // Load the package definition
    let pkg = match definition::load_package(&args.package) {
        Ok(p) => p,
        Err(e) => {
            ui::print_error(&e);
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let use_colors = !args.no_color && stdout.is_terminal();
    let mut writer = console_format::ReportWriter::new(stdout, use_colors);

    if let Err(e) = report::print_report(&pkg, &args.sections(), &mut writer) {
        ui::print_error(&format!("Failed to write report: {}", e));
        std::process::exit(1);
    }
}
