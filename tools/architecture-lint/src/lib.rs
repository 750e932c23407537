//! Repo-local architectural lint for enforcing hexagonal boundaries.
//!
//! The `presignup` crate keeps its decision logic in `domain` and reaches
//! Cognito and the Lambda runtime only through adapter modules (`inbound`,
//! `outbound`). The lint parses every source file under those three module
//! roots and reports:
//!
//! - `domain` code depending on an adapter module, the AWS SDK, the Lambda
//!   runtime, or the tracing subscriber
//! - `inbound` adapters importing `outbound` modules or the AWS SDK
//! - `outbound` adapters importing `inbound` modules or the Lambda runtime
//!
//! Run it with `cargo run -p architecture-lint`.

use std::collections::BTreeSet;
use std::fmt;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use syn::visit::Visit;

/// Name under which integration code refers to the linted crate.
const LINTED_CRATE: &str = "presignup";

/// A single boundary violation discovered by the linter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// File path relative to `presignup/src`.
    pub file: Utf8PathBuf,
    /// Human-readable description of the violated rule.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file, self.message)
    }
}

/// Failure modes returned by the architecture lint.
#[derive(Debug, thiserror::Error)]
pub enum ArchitectureLintError {
    /// Filesystem traversal or reading failed.
    #[error("I/O error while linting architecture: {0}")]
    Io(#[from] io::Error),
    /// A source file could not be attributed to a layer or parsed.
    #[error("failed to lint {file}: {message}")]
    Parse {
        /// Offending file, relative to `presignup/src`.
        file: Utf8PathBuf,
        /// Parser or layout diagnostic.
        message: String,
    },
    /// One or more boundary violations were found.
    #[error("architecture boundary violations:\n{}", render_violations(.0))]
    Violations(Vec<Violation>),
}

fn render_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|violation| format!("- {violation}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A Rust source file to be linted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintSource {
    /// Path relative to `presignup/src`.
    pub file: Utf8PathBuf,
    /// Full Rust source text.
    pub contents: String,
}

/// Architectural layer, named after its module root under `presignup/src`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Domain,
    Inbound,
    Outbound,
}

/// What one layer may not depend on.
struct LayerRule {
    layer: Layer,
    forbidden_layers: &'static [Layer],
    forbidden_crates: &'static [&'static str],
}

const AWS_CRATES: [&str; 4] = [
    "aws_config",
    "aws_sdk_cognitoidentityprovider",
    "aws_smithy_runtime_api",
    "aws_smithy_types",
];

const RULES: [LayerRule; 3] = [
    LayerRule {
        layer: Layer::Domain,
        forbidden_layers: &[Layer::Inbound, Layer::Outbound],
        forbidden_crates: &[
            AWS_CRATES[0],
            AWS_CRATES[1],
            AWS_CRATES[2],
            AWS_CRATES[3],
            "lambda_runtime",
            "tracing_subscriber",
        ],
    },
    LayerRule {
        layer: Layer::Inbound,
        forbidden_layers: &[Layer::Outbound],
        forbidden_crates: &AWS_CRATES,
    },
    LayerRule {
        layer: Layer::Outbound,
        forbidden_layers: &[Layer::Inbound],
        forbidden_crates: &["lambda_runtime"],
    },
];

impl Layer {
    const ALL: [Self; 3] = [Self::Domain, Self::Inbound, Self::Outbound];

    const fn module(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
        }
    }

    fn from_module(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|layer| layer.module() == name)
    }

    fn of_file(file: &Utf8Path) -> Option<Self> {
        file.components()
            .next()
            .and_then(|first| Self::from_module(first.as_str()))
    }

    fn rule(self) -> &'static LayerRule {
        match self {
            Self::Domain => &RULES[0],
            Self::Inbound => &RULES[1],
            Self::Outbound => &RULES[2],
        }
    }
}

/// Where a path used in source code points.
#[derive(Debug, PartialEq, Eq)]
enum Target<'a> {
    Layer(Layer),
    Crate(&'a str),
    Other,
}

fn classify(segments: &[String]) -> Target<'_> {
    let Some(first) = segments.first().map(String::as_str) else {
        return Target::Other;
    };
    if let Some(layer) = Layer::from_module(first) {
        return Target::Layer(layer);
    }
    let crate_relative = matches!(first, "crate" | "self" | "super");
    if crate_relative || first == LINTED_CRATE {
        return segments
            .iter()
            .map(String::as_str)
            .find(|segment| !matches!(*segment, "crate" | "self" | "super" | LINTED_CRATE))
            .and_then(Layer::from_module)
            .map_or(Target::Other, Target::Layer);
    }
    Target::Crate(first)
}

/// Lint the hook crate sources on disk.
///
/// `crate_dir` must be the `presignup/` directory at the repository root.
pub fn lint_crate_sources(crate_dir: &Utf8Path) -> Result<(), ArchitectureLintError> {
    let src = Dir::open_ambient_dir(crate_dir.join("src"), ambient_authority())?;
    let mut sources = Vec::new();
    for layer in Layer::ALL {
        let root = Utf8PathBuf::from(layer.module());
        match src.open_dir(root.as_std_path()) {
            Ok(dir) => collect_sources(&dir, &root, &mut sources)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }
    }
    lint_sources(&sources)
}

/// Lint the provided Rust sources. Intended for unit and behaviour tests.
pub fn lint_sources(sources: &[LintSource]) -> Result<(), ArchitectureLintError> {
    let mut violations = Vec::new();
    for source in sources {
        violations.extend(lint_source(source)?);
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ArchitectureLintError::Violations(violations))
    }
}

fn lint_source(source: &LintSource) -> Result<Vec<Violation>, ArchitectureLintError> {
    let parse_error = |message: String| ArchitectureLintError::Parse {
        file: source.file.clone(),
        message,
    };
    let layer = Layer::of_file(&source.file)
        .ok_or_else(|| parse_error("file is not under a layer module".to_owned()))?;
    let parsed = syn::parse_file(&source.contents).map_err(|err| parse_error(err.to_string()))?;

    let mut collector = PathCollector::default();
    collector.visit_file(&parsed);

    let rule = layer.rule();
    let messages: BTreeSet<String> = collector
        .paths
        .iter()
        .filter_map(|segments| match classify(segments) {
            Target::Layer(target) if rule.forbidden_layers.contains(&target) => Some(format!(
                "{} module must not depend on crate::{}",
                rule.layer.module(),
                target.module()
            )),
            Target::Crate(name) if rule.forbidden_crates.contains(&name) => Some(format!(
                "{} module must not depend on external crate `{name}`",
                rule.layer.module()
            )),
            _ => None,
        })
        .collect();

    Ok(messages
        .into_iter()
        .map(|message| Violation {
            file: source.file.clone(),
            message,
        })
        .collect())
}

/// Collects every path mentioned in expressions, types, and `use` trees.
#[derive(Default)]
struct PathCollector {
    paths: BTreeSet<Vec<String>>,
}

impl PathCollector {
    fn flatten_use_tree(&mut self, tree: &syn::UseTree, prefix: &mut Vec<String>) {
        match tree {
            syn::UseTree::Path(path) => {
                prefix.push(path.ident.to_string());
                self.flatten_use_tree(&path.tree, prefix);
                prefix.pop();
            }
            syn::UseTree::Name(syn::UseName { ident })
            | syn::UseTree::Rename(syn::UseRename { ident, .. }) => {
                let mut segments = prefix.clone();
                segments.push(ident.to_string());
                self.paths.insert(segments);
            }
            syn::UseTree::Glob(_) => {
                let mut segments = prefix.clone();
                segments.push("*".to_owned());
                self.paths.insert(segments);
            }
            syn::UseTree::Group(group) => {
                for item in &group.items {
                    self.flatten_use_tree(item, prefix);
                }
            }
        }
    }
}

impl<'ast> Visit<'ast> for PathCollector {
    fn visit_path(&mut self, node: &'ast syn::Path) {
        let segments: Vec<String> = node
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();
        if !segments.is_empty() {
            self.paths.insert(segments);
        }
        syn::visit::visit_path(self, node);
    }

    fn visit_item_use(&mut self, node: &'ast syn::ItemUse) {
        self.flatten_use_tree(&node.tree, &mut Vec::new());
    }
}

fn collect_sources(
    dir: &Dir,
    relative: &Utf8Path,
    sources: &mut Vec<LintSource>,
) -> Result<(), ArchitectureLintError> {
    for entry in dir.entries()? {
        let entry = entry?;
        let name = entry
            .file_name()
            .into_string()
            .map_err(|raw| ArchitectureLintError::Parse {
                file: relative.to_owned(),
                message: format!("non UTF-8 file name: {raw:?}"),
            })?;
        let path = relative.join(&name);
        if entry.file_type()?.is_dir() {
            collect_sources(&entry.open_dir()?, &path, sources)?;
        } else if path.extension() == Some("rs") {
            let contents = dir.read_to_string(&name)?;
            sources.push(LintSource {
                file: path,
                contents,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
