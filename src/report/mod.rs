//! Report generation module - Section layout and the report driver.
//!
//! This module turns a loaded Package into an ordered sequence of
//! styled lines and writes them through a ReportWriter:
//!
//! - `variants` - the variant layout engine (column widths, conditional
//!   grouping, wrapped blocks)
//! - `versions` - preferred/safe/deprecated version sections
//! - `fields` - dependencies, tags, maintainers, detectability,
//!   phases, tests, virtual packages
//!
//! Sections are isolated from one another: a section that fails to
//! write is logged and skipped, the rest of the report still renders.

mod fields;
mod variants;
mod versions;

pub use variants::{ColumnWidths, print_variants, variant_section_lines};
pub use versions::print_versions;

pub use fields::{
    print_dependencies, print_detectable, print_maintainers, print_phases, print_tags, print_tests, print_virtuals,
};

use crate::console_format::{ReportWriter, Span, console_width, wrap_preserving_newlines};
use crate::package::Package;
use log::warn;
use std::io::{self, Write};

/// Which optional report sections to render.
///
/// Versions, variants and dependencies are on by default; the rest are
/// opt-in. `all()` turns everything on.
#[derive(Debug, Clone, Copy)]
pub struct Sections {
    pub maintainers: bool,
    pub detectable: bool,
    pub tags: bool,
    pub versions: bool,
    pub variants: bool,
    pub phases: bool,
    pub dependencies: bool,
    pub virtuals: bool,
    pub tests: bool,
}

impl Default for Sections {
    fn default() -> Self {
        Sections {
            maintainers: false,
            detectable: false,
            tags: false,
            versions: true,
            variants: true,
            phases: false,
            dependencies: true,
            virtuals: false,
            tests: false,
        }
    }
}

impl Sections {
    pub fn all() -> Self {
        Sections {
            maintainers: true,
            detectable: true,
            tags: true,
            versions: true,
            variants: true,
            phases: true,
            dependencies: true,
            virtuals: true,
            tests: true,
        }
    }
}

/// Log a failed section and keep going with the rest of the report.
fn isolated(section: &str, result: io::Result<()>) {
    if let Err(e) = result {
        warn!("skipping {} section: {}", section, e);
    }
}

/// Render the full report for one package.
///
/// The header (name, description, homepage) always prints; optional
/// sections follow in a fixed order, gated by `sections`.
pub fn print_report<W: Write>(pkg: &Package, sections: &Sections, writer: &mut ReportWriter<W>) -> io::Result<()> {
    let width = console_width();

    // Header: "<BuildSystem>:   <name>"
    let kind = pkg.build_system.as_deref().unwrap_or("Package");
    writer.line(&[Span::header(format!("{}:   ", kind)), Span::plain(&pkg.name)])?;

    writer.blank()?;
    writer.title("Description:")?;
    match pkg.description.as_deref() {
        Some(text) if !text.trim().is_empty() => {
            writer.plain_line(&wrap_preserving_newlines(text.trim_end(), width.max(crate::console_format::MIN_WIDTH), 4))?
        }
        _ => writer.plain_line("    None")?,
    }

    writer.title_with("Homepage: ", pkg.homepage.as_deref().unwrap_or("None"))?;

    // Optional sections, fixed order. A section failing to write must
    // not take the others down with it.
    if sections.maintainers {
        isolated("maintainers", print_maintainers(pkg, writer));
    }
    if sections.detectable {
        isolated("detectable", print_detectable(pkg, writer));
    }
    if sections.tags {
        isolated("tags", print_tags(pkg, writer));
    }
    if sections.versions {
        isolated("versions", print_versions(pkg, writer));
    }
    if sections.variants {
        isolated("variants", print_variants(pkg, writer));
    }
    if sections.phases {
        isolated("phases", print_phases(pkg, writer));
    }
    if sections.dependencies {
        isolated("dependencies", print_dependencies(pkg, writer));
    }
    if sections.virtuals {
        isolated("virtuals", print_virtuals(pkg, writer));
    }
    if sections.tests {
        isolated("tests", print_tests(pkg, writer));
    }

    writer.blank()
}
