use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item};

/// Dependency names of the crate that invokes a proc-macro.
///
/// Generated code must name `amc_coding` through whatever the caller actually
/// depends on, so the derive asks this type for the path.
///
/// # Resolution rules
///
/// 1. The crate itself is a (dev-)dependency: `::amc_coding`.
/// 2. The name starts with `amc_` and the caller depends on the facade
///    `amc_core`: `::amc_core::coding`.
/// 3. Otherwise `::amc_coding`, which is also what `amc_coding` uses for
///    itself through `extern crate self as amc_coding`.
///
/// # Example
///
/// ```rust
/// # use amc_macro_utils::Manifest;
/// let path: syn::Path = Manifest::shared(|m| m.get_crate_path("amc_coding"));
/// ```
#[derive(Debug)]
pub struct Manifest {
    dependencies: Vec<Box<str>>,
    dev_dependencies: Vec<Box<str>>,
    modified_time: Option<SystemTime>,
}

const FACADE_NAME: &str = "amc_core";
const CRATE_PREFIX: &str = "amc_";

impl Manifest {
    fn manifest_path() -> PathBuf {
        let mut path = env::var_os("CARGO_MANIFEST_DIR")
            .map(PathBuf::from)
            .unwrap_or_default();
        path.push("Cargo.toml");
        path
    }

    fn modified_time(path: &PathBuf) -> Option<SystemTime> {
        std::fs::metadata(path).and_then(|m| m.modified()).ok()
    }

    fn table_keys(document: &Document<String>, table: &str) -> Vec<Box<str>> {
        match document.get(table) {
            Some(Item::Table(deps)) => deps.iter().map(|(key, _)| key.into()).collect(),
            _ => Vec::new(),
        }
    }

    /// Reads the manifest at `path`.
    ///
    /// A missing or unparsable manifest yields an empty dependency list, so
    /// every lookup falls back to the absolute crate path.
    fn load(path: &PathBuf) -> Self {
        let document = std::fs::read_to_string(path)
            .ok()
            .and_then(|text| Document::parse(text).ok());

        match document {
            Some(document) => Self {
                dependencies: Self::table_keys(&document, "dependencies"),
                dev_dependencies: Self::table_keys(&document, "dev-dependencies"),
                modified_time: Self::modified_time(path),
            },
            None => Self {
                dependencies: Vec::new(),
                dev_dependencies: Vec::new(),
                modified_time: None,
            },
        }
    }

    fn parse_path(path: &str) -> syn::Path {
        syn::parse_str(path).unwrap_or_else(|_| panic!("`{path}` is not a valid crate path"))
    }

    fn resolve_in(deps: &[Box<str>], name: &str) -> Option<syn::Path> {
        let has = |dep: &str| deps.iter().any(|d| &**d == dep);

        if has(name) {
            return Some(Self::parse_path(&format!("::{name}")));
        }

        let module = name.strip_prefix(CRATE_PREFIX)?;
        if has(FACADE_NAME) {
            return Some(Self::parse_path(&format!("::{FACADE_NAME}::{module}")));
        }

        None
    }

    /// Returns a [`syn::Path`] for the crate `name` as seen from the caller.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        Self::resolve_in(&self.dependencies, name)
            .or_else(|| Self::resolve_in(&self.dev_dependencies, name))
            .unwrap_or_else(|| Self::parse_path(&format!("::{name}")))
    }

    /// Runs `func` with the caller's manifest.
    ///
    /// Manifests are cached per path and reloaded when the file's modified
    /// time changes, so repeated derives in one crate read the file once.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let path = Self::manifest_path();
        let modified_time = Self::modified_time(&path);

        {
            let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = manifests.get(&path)
                && manifest.modified_time == modified_time
            {
                return func(manifest);
            }
        }

        let manifest = Self::load(&path);
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}

// -----------------------------------------------------------------------------
// Tests
