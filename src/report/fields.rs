//! One-field-per-function section formatters.
//!
//! Each of these maps a single metadata collection to a titled block
//! with a deterministic "None" fallback. No grouping or merge logic
//! lives here; that is the variant engine's job.

use crate::console_format::{ReportWriter, colify, console_width};
use crate::package::{DepKind, Package};
use std::io::{self, Write};

fn colified<W: Write>(writer: &mut ReportWriter<W>, items: &[String]) -> io::Result<()> {
    if items.is_empty() {
        return writer.plain_line("    None");
    }
    for line in colify(items, 4, console_width()) {
        writer.plain_line(&line)?;
    }
    Ok(())
}

/// Write build, link, and run dependency lists.
pub fn print_dependencies<W: Write>(pkg: &Package, writer: &mut ReportWriter<W>) -> io::Result<()> {
    for kind in [DepKind::Build, DepKind::Link, DepKind::Run] {
        writer.blank()?;
        writer.title(&format!("{} Dependencies:", kind))?;
        let deps: Vec<String> = pkg.dependencies_of(kind).into_iter().map(String::from).collect();
        colified(writer, &deps)?;
    }
    Ok(())
}

/// Write the package tag list.
pub fn print_tags<W: Write>(pkg: &Package, writer: &mut ReportWriter<W>) -> io::Result<()> {
    writer.blank()?;
    writer.title("Tags: ")?;
    let mut tags = pkg.tags.clone();
    tags.sort_unstable();
    colified(writer, &tags)
}

/// Write the maintainer list. Skipped entirely when there are none.
pub fn print_maintainers<W: Write>(pkg: &Package, writer: &mut ReportWriter<W>) -> io::Result<()> {
    if pkg.maintainers.is_empty() {
        return Ok(());
    }
    let handles: Vec<String> = pkg.maintainers.iter().map(|m| format!("@{}", m)).collect();
    writer.blank()?;
    writer.title_with("Maintainers: ", &handles.join(" "))
}

/// Write whether an existing installation can be detected on a system,
/// and which attributes of it can be determined.
pub fn print_detectable<W: Write>(pkg: &Package, writer: &mut ReportWriter<W>) -> io::Result<()> {
    writer.blank()?;
    writer.title("Externally Detectable: ")?;

    match &pkg.detection {
        Some(det) if det.is_detectable() => {
            let attrs = det.determinable();
            if attrs.is_empty() {
                // Detectable through some custom mechanism
                writer.plain_line("    True")
            } else {
                writer.plain_line(&format!("    True ({})", attrs.join(", ")))
            }
        }
        _ => writer.plain_line("    False"),
    }
}

/// Write installation phases on one line. Skipped when there are none.
pub fn print_phases<W: Write>(pkg: &Package, writer: &mut ReportWriter<W>) -> io::Result<()> {
    if pkg.phases.is_empty() {
        return Ok(());
    }
    writer.blank()?;
    writer.title("Installation Phases:")?;
    let mut line = String::new();
    for phase in &pkg.phases {
        line.push_str("    ");
        line.push_str(phase);
    }
    writer.plain_line(&line)
}

/// Write build-time, install-time, and stand-alone test method names.
pub fn print_tests<W: Write>(pkg: &Package, writer: &mut ReportWriter<W>) -> io::Result<()> {
    let hooks = pkg.tests.clone().unwrap_or_default();

    for (names, phase) in [(&hooks.build_time, "Build"), (&hooks.install_time, "Install")] {
        writer.blank()?;
        writer.title(&format!("Available {} Phase Test Methods:", phase))?;
        let mut sorted = names.clone();
        sorted.sort_unstable();
        colified(writer, &sorted)?;
    }

    writer.blank()?;
    writer.title("Stand-Alone/Smoke Test Methods:")?;
    let mut standalone = hooks.standalone.clone();
    standalone.sort_unstable();
    colified(writer, &standalone)
}

/// Write virtual packages provided by this package, most-recent
/// condition first. Unconditional providers display under the package
/// name itself.
pub fn print_virtuals<W: Write>(pkg: &Package, writer: &mut ReportWriter<W>) -> io::Result<()> {
    writer.blank()?;
    writer.title("Virtual Packages: ")?;

    if pkg.provides.is_empty() {
        return writer.plain_line("    None");
    }

    let mut entries: Vec<_> = pkg.provides.iter().collect();
    entries.sort_by(|a, b| b.when.cmp(&a.when));

    for entry in entries {
        let scope = entry.when.as_str().unwrap_or(pkg.name.as_str());
        writer.plain_line(&format!("    {} provides {}", scope, entry.virtuals.join(", ")))?;
    }
    Ok(())
}
