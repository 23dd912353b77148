//! Variant layout engine.
//!
//! Variants are the algorithmically interesting part of the report: a
//! variant name may carry several conditional definitions (different
//! defaults, values, or descriptions depending on a `when` condition),
//! and the output has to make divergence visible at a glance while
//! staying within the terminal width.
//!
//! The engine works in three steps:
//! 1. compute column widths from the whole variant set and the
//!    terminal width,
//! 2. group each name's definitions by condition and decide whether
//!    they are structurally identical,
//! 3. render each (condition, definition) pair as a wrapped, aligned
//!    text block of styled spans.

use crate::console_format::{MIN_WIDTH, ReportWriter, Span, Style, console_width, display_width, wrap_preserving_newlines, wrap_with_indent};
use crate::package::{Package, Variant, When};
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Left indent of a variant block, in columns.
const INDENT: usize = 4;

/// Minimum padding between "name [default]" and the value list.
const PAD: usize = 4;

/// Hard caps on the first three columns.
const MAX_NAME_DEFAULT: usize = 30;
const MAX_WHEN: usize = 30;
const MAX_VALUES: usize = 20;

/// Fixed margins and column spacing subtracted from the description.
const MARGIN: usize = 14;

/// "name [default]" rendering for a variant.
fn name_and_default(name: &str, variant: &Variant) -> String {
    format!("{} [{}]", name, variant.default)
}

/// Computed column widths for the variant section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub name_default: usize,
    pub when: usize,
    pub values: usize,
    pub description: usize,
}

impl ColumnWidths {
    /// Compute widths from every definition that will be displayed.
    ///
    /// The first three columns grow to their longest content, capped
    /// at 30/30/20; the description gets whatever remains of the
    /// terminal width, floored at 70 columns so narrow terminals do
    /// not squeeze the text into nothing.
    pub fn compute(by_name: &BTreeMap<String, BTreeMap<When, Vec<Variant>>>, terminal_width: usize) -> Self {
        let mut name_default = 0;
        let mut when_width = 0;
        let mut values = 0;

        for (name, when_variants) in by_name {
            for (when, variants) in when_variants {
                when_width = when_width.max(display_width(&when.to_string()));
                for variant in variants {
                    name_default = name_default.max(display_width(&name_and_default(name, variant)));
                    values = values.max(display_width(&variant.allowed_values()));
                }
            }
        }

        let name_default = name_default.min(MAX_NAME_DEFAULT);
        let when_width = when_width.min(MAX_WHEN);
        let values = values.min(MAX_VALUES);
        let description =
            terminal_width.max(MIN_WIDTH).saturating_sub(name_default + when_width + values + MARGIN);

        ColumnWidths { name_default, when: when_width, values, description }
    }
}

/// Render one (variant, condition) pair as a block of styled lines.
///
/// ```text
/// <4sp>name [default]<pad>none, val1, val2
/// <8sp>when <condition>
/// <12sp>wrapped description
/// ```
///
/// The condition line only appears for conditional definitions. Value
/// continuation lines align under the start of the value column.
pub fn format_variant(
    name: &str,
    variant: &Variant,
    when: &When,
    widths: &ColumnWidths,
    terminal_width: usize,
) -> Vec<Vec<Span>> {
    let mut lines = Vec::new();

    let label = name_and_default(name, variant);
    let value_col = INDENT + widths.name_default + PAD;
    let value_indent = " ".repeat(value_col);

    // 'none' sorts first, the rest by value. A plain boolean pair
    // keeps the enabled state first: "on, off".
    let mut values = variant.values.clone();
    let bool_pair = {
        let rest: Vec<&str> = values.iter().filter(|v| *v != "none").map(String::as_str).collect();
        rest.len() == 2 && rest.contains(&"on") && rest.contains(&"off")
    };
    values.sort_by(|a, b| {
        let rank = |v: &str| (v != "none", bool_pair && v == "off");
        rank(a).cmp(&rank(b)).then_with(|| a.cmp(b))
    });
    let joined = values.join(", ").replace("True, False", "on, off");

    let wrapped = wrap_with_indent(&joined, terminal_width.saturating_sub(2), &value_indent, &value_indent);

    // name [default]   value1, value2, value3, ...
    let label_pad = value_col.saturating_sub(INDENT + display_width(&label));
    let first_values = wrapped.first().map(|l| l[value_col.min(l.len())..].to_string()).unwrap_or_default();
    lines.push(vec![
        Span::plain(" ".repeat(INDENT)),
        Span::new(Style::VariantName, label),
        Span::plain(" ".repeat(label_pad)),
        Span::new(Style::Values, first_values),
    ]);
    for cont in wrapped.iter().skip(1) {
        lines.push(vec![Span::new(Style::Values, cont.clone())]);
    }

    // when <condition>
    if let Some(condition) = when.as_str() {
        lines.push(vec![
            Span::plain(" ".repeat(INDENT * 2)),
            Span::new(Style::When, "when"),
            Span::plain(format!(" {}", condition)),
        ]);
    }

    // description, author line breaks preserved
    if !variant.description.trim().is_empty() {
        let desc_width = INDENT * 3 + widths.description;
        for line in wrap_preserving_newlines(&variant.description, desc_width, INDENT * 3).lines() {
            lines.push(vec![Span::plain(line)]);
        }
    }

    lines
}

/// Lay out the whole variant section as styled lines.
///
/// Names render in lexicographic order. A name with several
/// conditional definitions gets a marker line first: green "(same)"
/// when every definition is structurally identical, red "(different)"
/// when any default, value set, or description diverges - followed by
/// every (condition, definition) pair so the reader sees each one.
pub fn variant_section_lines(pkg: &Package, terminal_width: usize) -> Vec<Vec<Span>> {
    let by_name = pkg.variants_by_name();
    if by_name.is_empty() {
        return vec![vec![Span::plain("    None")]];
    }

    let widths = ColumnWidths::compute(&by_name, terminal_width);
    let mut lines = Vec::new();

    for (name, when_variants) in &by_name {
        if when_variants.len() > 1 {
            let all: Vec<&Variant> = when_variants.values().flatten().collect();
            let divergent = !all.iter().all(|v| *v == all[0]);
            let (style, marker) = if divergent { (Style::Different, "(different)") } else { (Style::Same, "(same)") };
            lines.push(vec![
                Span::new(style, "-->"),
                Span::plain(" "),
                Span::new(style, name),
                Span::plain(format!(" {}", marker)),
            ]);

            for (when, variants) in when_variants {
                for variant in variants {
                    lines.extend(format_variant(name, variant, when, &widths, terminal_width));
                }
            }
            continue;
        }

        let (when, variants) = when_variants.iter().next().expect("non-empty condition map");
        for variant in variants {
            lines.extend(format_variant(name, variant, when, &widths, terminal_width));
        }
    }

    lines
}

/// Write the "Variants:" section.
pub fn print_variants<W: Write>(pkg: &Package, writer: &mut ReportWriter<W>) -> io::Result<()> {
    if pkg.variants.is_empty() {
        writer.plain_line("    None")?;
        return Ok(());
    }

    writer.blank()?;
    writer.title("Variants:")?;
    for line in variant_section_lines(pkg, console_width()) {
        writer.line(&line)?;
    }
    Ok(())
}
