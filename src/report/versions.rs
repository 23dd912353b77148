//! Version section formatting.
//!
//! Versions split into three groups: the single preferred version, the
//! safe (current) versions, and deprecated ones. Version tokens are
//! padded to a shared width so source URLs line up.

use crate::console_format::{ReportWriter, Span, Style, padder};
use crate::package::{Package, VersionEntry};
use crate::version::{preferred_version, sort_descending};
use std::io::{self, Write};

fn version_line<W: Write>(
    writer: &mut ReportWriter<W>,
    pad: &impl Fn(&str) -> String,
    entry: &VersionEntry,
) -> io::Result<()> {
    writer.line(&[
        Span::new(Style::Version, format!("    {}", pad(&entry.version))),
        Span::plain(entry.url.as_deref().unwrap_or("")),
    ])
}

/// Write the "Preferred/Safe/Deprecated versions" sections.
pub fn print_versions<W: Write>(pkg: &Package, writer: &mut ReportWriter<W>) -> io::Result<()> {
    writer.blank()?;
    writer.title("Preferred version:  ")?;

    if pkg.versions.is_empty() {
        writer.line(&[Span::new(Style::Version, "    None")])?;
        writer.blank()?;
        writer.title("Safe versions:  ")?;
        writer.line(&[Span::new(Style::Version, "    None")])?;
        writer.blank()?;
        writer.title("Deprecated versions:  ")?;
        writer.line(&[Span::new(Style::Version, "    None")])?;
        return Ok(());
    }

    let tokens: Vec<String> = pkg.versions.iter().map(|v| v.version.clone()).collect();
    let pad = padder(&tokens, 4);

    if let Some(preferred) = preferred_version(&pkg.versions) {
        version_line(writer, &pad, preferred)?;
    }

    let safe = sort_descending(pkg.versions.iter().filter(|v| !v.deprecated));
    let deprecated = sort_descending(pkg.versions.iter().filter(|v| v.deprecated));

    for (title, group) in [("Safe", safe), ("Deprecated", deprecated)] {
        writer.blank()?;
        writer.title(&format!("{} versions:  ", title))?;
        if group.is_empty() {
            writer.line(&[Span::new(Style::Version, "    None")])?;
            continue;
        }
        for entry in group {
            version_line(writer, &pad, entry)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(pkg: &Package) -> String {
        let mut buf = Vec::new();
        {
            let mut writer = ReportWriter::new(&mut buf, false);
            print_versions(pkg, &mut writer).unwrap();
        }
        String::from_utf8(buf).unwrap()
    }

    fn pkg_with(versions: Vec<VersionEntry>) -> Package {
        Package {
            name: "pkg".to_string(),
            build_system: None,
            description: None,
            homepage: None,
            maintainers: vec![],
            tags: vec![],
            versions,
            variants: vec![],
            dependencies: vec![],
            detection: None,
            phases: vec![],
            tests: None,
            provides: vec![],
        }
    }

    fn entry(version: &str, url: Option<&str>, deprecated: bool, preferred: bool) -> VersionEntry {
        VersionEntry { version: version.to_string(), url: url.map(String::from), deprecated, preferred }
    }

    #[test]
    fn test_zero_versions_all_sections_none() {
        let out = render(&pkg_with(vec![]));
        assert_eq!(out.matches("    None").count(), 3);
        assert!(out.contains("Preferred version:"));
        assert!(out.contains("Safe versions:"));
        assert!(out.contains("Deprecated versions:"));
    }

    #[test]
    fn test_groups_sorted_most_recent_first() {
        let out = render(&pkg_with(vec![
            entry("1.9", None, false, false),
            entry("1.10", None, false, false),
            entry("0.9", None, true, false),
            entry("0.8", None, true, false),
        ]));
        let pos = |s: &str| out.find(s).unwrap();
        assert!(pos("1.10") < pos("1.9"));
        assert!(pos("0.9") < pos("0.8"));
        // Deprecated group comes after safe group
        assert!(pos("1.9") < pos("0.9"));
    }

    #[test]
    fn test_urls_align_via_padding() {
        let out = render(&pkg_with(vec![
            entry("1.10.22", Some("https://example.com/a.tar.gz"), false, false),
            entry("1.9", Some("https://example.com/b.tar.gz"), false, false),
        ]));
        let cols: Vec<usize> = out.lines().filter_map(|l| l.find("https://")).collect();
        assert_eq!(cols.len(), 3); // preferred + two safe
        assert!(cols.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_preferred_flag_respected() {
        let out = render(&pkg_with(vec![entry("2.0", None, false, false), entry("1.5", None, false, true)]));
        let preferred_section = out.split("Safe versions").next().unwrap();
        assert!(preferred_section.contains("1.5"));
        assert!(!preferred_section.contains("2.0"));
    }

    #[test]
    fn test_empty_deprecated_group_renders_none() {
        let out = render(&pkg_with(vec![entry("1.0", None, false, false)]));
        let deprecated = out.split("Deprecated versions").nth(1).unwrap();
        assert!(deprecated.contains("    None"));
    }
}
