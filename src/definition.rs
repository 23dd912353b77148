/// Package definition file loading
///
/// This module handles:
/// - Reading definition files from disk
/// - Parsing TOML (default) or JSON (by extension) into a Package
use crate::package::Package;
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load a package definition from a TOML or JSON file
pub fn load_package(path: &Path) -> Result<Package, String> {
    let text = load_string(path)?;

    let is_json = path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let pkg: Package = if is_json {
        serde_json::from_str(&text).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?
    } else {
        toml::from_str(&text).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?
    };

    debug!(
        "Loaded package '{}' ({} versions, {} variant declarations)",
        pkg.name,
        pkg.versions.len(),
        pkg.variants.len()
    );
    Ok(pkg)
}

/// Load a file's contents as a string
pub fn load_string(path: &Path) -> Result<String, String> {
    let mut file = File::open(path).map_err(|e| format!("Failed to open {}: {}", path.display(), e))?;
    let mut s = String::new();
    file.read_to_string(&mut s).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_toml_definition() {
        let path = write_temp(
            "pkginfo_load_test.toml",
            r#"
name = "zlib"
homepage = "https://zlib.net"

[[versions]]
version = "1.3.1"
url = "https://zlib.net/zlib-1.3.1.tar.gz"

[[variants]]
name = "shared"
default = true
values = [true, false]
description = "Build shared libraries"
"#,
        );
        let pkg = load_package(&path).unwrap();
        assert_eq!(pkg.name, "zlib");
        assert_eq!(pkg.versions.len(), 1);
        assert_eq!(pkg.variants[0].variant().values, vec!["on", "off"]);
    }

    #[test]
    fn test_load_json_definition() {
        let path = write_temp(
            "pkginfo_load_test.json",
            r#"{"name": "zlib", "maintainers": ["alice"], "tags": ["compression"]}"#,
        );
        let pkg = load_package(&path).unwrap();
        assert_eq!(pkg.name, "zlib");
        assert_eq!(pkg.maintainers, vec!["alice"]);
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = load_package(Path::new("/no/such/definition.toml")).unwrap_err();
        assert!(err.contains("/no/such/definition.toml"));
    }

    #[test]
    fn test_load_malformed_toml_is_error() {
        let path = write_temp("pkginfo_load_bad.toml", "name = [not valid");
        assert!(load_package(&path).is_err());
    }
}
