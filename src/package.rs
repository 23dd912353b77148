/// Read-only package metadata model
///
/// This module defines the structures a package definition file parses
/// into. Everything here is a snapshot consumed by the report code:
/// nothing mutates a Package after it is loaded.
///
/// Variant values are normalized at construction time (booleans become
/// "on"/"off", scalars become one-element lists) so the layout engine
/// can assume `values` is always a non-empty ordered sequence.
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// A complete package definition. Every field other than `name` may be
/// absent in the input file; absence renders as "None", never an error.
#[derive(Debug, Clone, Deserialize)]
pub struct Package {
    pub name: String,

    /// Build system class, e.g. "AutotoolsPackage". Shown in the header.
    #[serde(default)]
    pub build_system: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub homepage: Option<String>,

    #[serde(default)]
    pub maintainers: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub versions: Vec<VersionEntry>,

    #[serde(default)]
    pub variants: Vec<VariantDecl>,

    #[serde(default)]
    pub dependencies: Vec<Dependency>,

    #[serde(default)]
    pub detection: Option<Detection>,

    #[serde(default)]
    pub phases: Vec<String>,

    #[serde(default)]
    pub tests: Option<TestHooks>,

    #[serde(default)]
    pub provides: Vec<ProvideEntry>,
}

impl Package {
    /// Group variant declarations by name, then by condition.
    ///
    /// BTreeMap ordering gives lexicographic variant names and a
    /// deterministic condition order, so two renders of the same
    /// package produce identical output.
    pub fn variants_by_name(&self) -> BTreeMap<String, BTreeMap<When, Vec<Variant>>> {
        let mut by_name: BTreeMap<String, BTreeMap<When, Vec<Variant>>> = BTreeMap::new();
        for decl in &self.variants {
            by_name
                .entry(decl.name.clone())
                .or_default()
                .entry(decl.when.clone())
                .or_default()
                .push(decl.variant());
        }
        by_name
    }

    /// Dependency names of the given kind, lexicographically sorted.
    pub fn dependencies_of(&self, kind: DepKind) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .dependencies
            .iter()
            .filter(|d| d.types.contains(&kind))
            .map(|d| d.name.as_str())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

/// One legal version of the package.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionEntry {
    pub version: String,

    /// Source location for this version (tarball URL, VCS ref, ...).
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub deprecated: bool,

    /// Explicitly marked preferred by the package author.
    #[serde(default)]
    pub preferred: bool,
}

/// A configuration condition scoping a variant or provider entry.
///
/// The unconditional condition is the distinguished empty constraint;
/// it never prints as a `when` line.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(from = "String")]
pub struct When(Option<String>);

impl When {
    pub fn unconditional() -> Self {
        When(None)
    }

    pub fn new(text: &str) -> Self {
        When::from(text.to_string())
    }

    pub fn is_unconditional(&self) -> bool {
        self.0.is_none()
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl From<String> for When {
    fn from(s: String) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() { When(None) } else { When(Some(trimmed.to_string())) }
    }
}

impl fmt::Display for When {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_deref().unwrap_or("--"))
    }
}

/// A scalar as it appears in the definition file, before normalization.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawScalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl RawScalar {
    /// Render to the normalized display form. Booleans become the
    /// literal tokens "on"/"off".
    fn normalize(&self) -> String {
        match self {
            RawScalar::Bool(true) => "on".to_string(),
            RawScalar::Bool(false) => "off".to_string(),
            RawScalar::Int(i) => i.to_string(),
            RawScalar::Float(x) => x.to_string(),
            RawScalar::Str(s) => s.clone(),
        }
    }

    fn is_bool(&self) -> bool {
        matches!(self, RawScalar::Bool(_))
    }
}

/// Either a single scalar or a list of scalars. Definition files may
/// write `values = "shared"` where a list was meant; both parse.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawValues {
    One(RawScalar),
    Many(Vec<RawScalar>),
}

/// One variant declaration as written in the definition file. The same
/// variant name may be declared several times under different `when`
/// conditions.
#[derive(Debug, Clone, Deserialize)]
pub struct VariantDecl {
    pub name: String,

    #[serde(default)]
    pub when: When,

    #[serde(default)]
    pub default: Option<RawScalar>,

    #[serde(default)]
    pub values: Option<RawValues>,

    #[serde(default)]
    pub description: String,
}

impl VariantDecl {
    /// Normalize this declaration into a Variant.
    ///
    /// Invariant: the result's `values` is a non-empty ordered
    /// sequence. A missing value set for a boolean variant becomes
    /// ["on", "off"]; a scalar becomes a one-element list; an empty
    /// list falls back to the default value alone.
    pub fn variant(&self) -> Variant {
        let default_is_bool = self.default.as_ref().map(|d| d.is_bool()).unwrap_or(true);
        let default = self.default.as_ref().map(|d| d.normalize()).unwrap_or_else(|| "off".to_string());

        let mut values: Vec<String> = match &self.values {
            Some(RawValues::One(v)) => vec![v.normalize()],
            Some(RawValues::Many(vs)) => vs.iter().map(|v| v.normalize()).collect(),
            None => Vec::new(),
        };
        if values.is_empty() {
            values = if default_is_bool {
                vec!["on".to_string(), "off".to_string()]
            } else {
                vec![default.clone()]
            };
        }

        Variant { default, values, description: self.description.clone() }
    }
}

/// A normalized variant definition. Structural equality (same default,
/// values, and description) is what the conditional grouper compares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub default: String,
    pub values: Vec<String>,
    pub description: String,
}

impl Variant {
    /// String rendering of the legal value set, e.g. "shared, static".
    /// Boolean value sets written out as "True, False" display as the
    /// terminal convention "on, off".
    pub fn allowed_values(&self) -> String {
        self.values.join(", ").replace("True, False", "on, off")
    }
}

/// Dependency classes a package dependency may belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepKind {
    Build,
    Link,
    Run,
}

impl fmt::Display for DepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DepKind::Build => "Build",
            DepKind::Link => "Link",
            DepKind::Run => "Run",
        };
        write!(f, "{}", s)
    }
}

fn default_dep_types() -> Vec<DepKind> {
    // Unannotated dependencies count as build+link, the common case.
    vec![DepKind::Build, DepKind::Link]
}

#[derive(Debug, Clone, Deserialize)]
pub struct Dependency {
    pub name: String,

    #[serde(default = "default_dep_types")]
    pub types: Vec<DepKind>,
}

/// External-installation detection capabilities.
///
/// This replaces attribute probing on the package object: a package
/// either declares how it can be found on a system, or it does not.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Detection {
    #[serde(default)]
    pub executables: Vec<String>,

    #[serde(default)]
    pub libraries: Vec<String>,

    /// Whether the version of a found installation can be determined.
    #[serde(default)]
    pub version: bool,

    /// Whether active variants of a found installation can be determined.
    #[serde(default)]
    pub variants: bool,
}

impl Detection {
    pub fn is_detectable(&self) -> bool {
        !self.executables.is_empty() || !self.libraries.is_empty()
    }

    /// Names of the attributes determinable for a found installation.
    pub fn determinable(&self) -> Vec<&'static str> {
        let mut attrs = Vec::new();
        if self.version {
            attrs.push("version");
        }
        if self.variants {
            attrs.push("variants");
        }
        attrs
    }
}

/// Test callbacks declared by the package.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestHooks {
    /// Callbacks run during the build phase (e.g. "check").
    #[serde(default)]
    pub build_time: Vec<String>,

    /// Callbacks run after installation (e.g. "installcheck").
    #[serde(default)]
    pub install_time: Vec<String>,

    /// Stand-alone/smoke test method names.
    #[serde(default)]
    pub standalone: Vec<String>,
}

/// Virtual packages provided under a condition.
#[derive(Debug, Clone, Deserialize)]
pub struct ProvideEntry {
    #[serde(default)]
    pub when: When,

    pub virtuals: Vec<String>,
}
