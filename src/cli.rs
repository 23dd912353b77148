use crate::report::Sections;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "pkginfo")]
#[command(about = "Get detailed information on a particular package")]
#[command(version)]
pub struct CliArgs {
    /// Path to the package definition file (TOML or JSON)
    #[arg(value_name = "PACKAGE")]
    pub package: PathBuf,

    /// Output all package information
    #[arg(long, short = 'a')]
    pub all: bool,

    /// Output information on external detection
    #[arg(long)]
    pub detectable: bool,

    /// Output package maintainers
    #[arg(long)]
    pub maintainers: bool,

    /// Do not output build, link, and run package dependencies
    #[arg(long)]
    pub no_dependencies: bool,

    /// Do not output variants
    #[arg(long)]
    pub no_variants: bool,

    /// Do not output versions
    #[arg(long)]
    pub no_versions: bool,

    /// Output installation phases
    #[arg(long)]
    pub phases: bool,

    /// Output package tags
    #[arg(long)]
    pub tags: bool,

    /// Output relevant build-time and stand-alone tests
    #[arg(long)]
    pub tests: bool,

    /// Output virtual packages
    #[arg(long)]
    pub virtuals: bool,

    /// Override console width (default: auto-detect)
    #[arg(long, value_name = "COLUMNS")]
    pub console_width: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate arguments before doing any work
    pub fn validate(&self) -> Result<(), String> {
        if !self.package.exists() {
            return Err(format!("Package definition not found: {}", self.package.display()));
        }
        if let Some(width) = self.console_width
            && width == 0
        {
            return Err("--console-width must be greater than zero".to_string());
        }
        Ok(())
    }

    /// Which report sections this invocation selects
    pub fn sections(&self) -> Sections {
        if self.all {
            return Sections::all();
        }
        Sections {
            maintainers: self.maintainers,
            detectable: self.detectable,
            tags: self.tags,
            versions: !self.no_versions,
            variants: !self.no_variants,
            phases: self.phases,
            dependencies: !self.no_dependencies,
            virtuals: self.virtuals,
            tests: self.tests,
        }
    }
}
