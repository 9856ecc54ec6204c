//! Artifact generation for resolved icons
//!
//! Each match yields a web module, a native-variant module, and optionally a
//! type declaration stub. The transformer's default-exported symbol is
//! renamed to `{Name}SVG` and re-exported by name, since the barrel exposes
//! named exports only.

use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use tokio::fs;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::resolve::Match;
use crate::transform::{SvgTransform, TransformOptions};

/// Suffix appended to the logical name to form the exported symbol.
pub const EXPORT_SUFFIX: &str = "SVG";

static DEFAULT_EXPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^export default (\w+);[ \t]*\r?\n?").unwrap());

/// One file destined for the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub file_name: String,
    pub content: String,
}

/// Outcome of generating one match.
#[derive(Debug, Default)]
pub struct MatchOutput {
    /// Barrel line; present only when the primary module reached disk
    pub export_line: Option<String>,
    pub files_written: usize,
    /// Source could not be read; the match contributed nothing
    pub dropped: bool,
}

/// Exported symbol name for a logical icon name.
pub fn export_name(logical_name: &str) -> String {
    format!("{logical_name}{EXPORT_SUFFIX}")
}

/// Rewrite a generated module to export `name` by name.
///
/// The default-export statement names the transformer's symbol; that symbol
/// is renamed throughout, its declaration made public, and the default-export
/// statement removed. A module with no default export is passed through.
pub fn rebrand_module(generated: &str, name: &str) -> String {
    let Some(caps) = DEFAULT_EXPORT.captures(generated) else {
        return generated.to_string();
    };
    let symbol = caps[1].to_string();

    let stripped = DEFAULT_EXPORT.replace_all(generated, "");
    let symbol_pattern = Regex::new(&format!(r"\b{}\b", regex::escape(&symbol)))
        .expect("escaped symbol is a valid pattern");
    let renamed = symbol_pattern.replace_all(&stripped, name).into_owned();

    let declaration = format!("const {name} =");
    renamed
        .replacen(&declaration, &format!("export const {name} ="), 1)
        .trim_end()
        .to_string()
        + "\n"
}

/// Minimal declaration stub for the exported symbol's public shape.
fn declaration_stub(name: &str) -> String {
    format!(
        "import {{ FC, SVGProps }} from 'react';\n\n\
         export declare const {name}: FC<SVGProps<SVGSVGElement>>;\n"
    )
}

/// Build every artifact for one match from its source text.
pub fn build_artifacts(
    icon: &Match,
    source: &str,
    transform: &dyn SvgTransform,
    declarations: bool,
) -> Vec<GeneratedArtifact> {
    let name = export_name(&icon.name);

    let web = transform.transform(
        source,
        &TransformOptions {
            native: false,
            preserve_attributes: icon.preserve_attributes,
        },
    );
    let native = transform.transform(
        source,
        &TransformOptions {
            native: true,
            preserve_attributes: icon.preserve_attributes,
        },
    );

    let mut artifacts = vec![
        GeneratedArtifact {
            file_name: format!("{}.tsx", icon.slug),
            content: rebrand_module(&web, &name),
        },
        GeneratedArtifact {
            file_name: format!("{}.native.tsx", icon.slug),
            content: rebrand_module(&native, &name),
        },
    ];
    if declarations {
        artifacts.push(GeneratedArtifact {
            file_name: format!("{}.d.ts", icon.slug),
            content: declaration_stub(&name),
        });
    }
    artifacts
}

/// Generate and write all artifacts for one match.
///
/// Writes fan out and are joined before returning. A failed write is logged
/// and skipped; siblings already written stay on disk.
pub async fn generate_icon(
    icon: Match,
    out_dir: PathBuf,
    transform: Arc<dyn SvgTransform>,
    declarations: bool,
) -> MatchOutput {
    let source = match fs::read_to_string(&icon.path).await {
        Ok(source) => source,
        Err(e) => {
            warn!(
                icon = %icon.name,
                path = %icon.path.display(),
                error = %e,
                "could not read SVG source, dropping icon"
            );
            return MatchOutput {
                dropped: true,
                ..MatchOutput::default()
            };
        }
    };

    let artifacts = build_artifacts(&icon, &source, transform.as_ref(), declarations);
    let primary = format!("{}.tsx", icon.slug);

    let mut writes = JoinSet::new();
    for artifact in artifacts {
        let path = out_dir.join(&artifact.file_name);
        let is_primary = artifact.file_name == primary;
        writes.spawn(async move {
            let result = fs::write(&path, artifact.content.as_bytes()).await;
            (path, is_primary, result)
        });
    }

    let mut output = MatchOutput::default();
    let mut primary_written = false;
    while let Some(joined) = writes.join_next().await {
        let Ok((path, is_primary, result)) = joined else {
            continue;
        };
        match result {
            Ok(()) => {
                debug!(file = %path.display(), "wrote artifact");
                output.files_written += 1;
                if is_primary {
                    primary_written = true;
                }
            }
            Err(e) => warn!(file = %path.display(), error = %e, "failed to write artifact"),
        }
    }

    if primary_written {
        output.export_line = Some(format!(
            "export {{ {} }} from './{}';",
            export_name(&icon.name),
            icon.slug
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::DefaultTransform;
    use std::path::Path;

    fn sample_match() -> Match {
        Match {
            name: "ArrowBack".to_string(),
            slug: "arrow-thick-circle-left".to_string(),
            path: Path::new("/svg/arrow-thick-circle-left.svg").to_path_buf(),
            preserve_attributes: false,
        }
    }

    #[test]
    fn test_export_name_suffix() {
        assert_eq!(export_name("ArrowBack"), "ArrowBackSVG");
    }

    #[test]
    fn test_rebrand_renames_and_exports() {
        let module = "const SvgIcon = (props) => (<svg/>);\n\nexport default SvgIcon;\n";
        let rebranded = rebrand_module(module, "LogoSVG");

        assert_eq!(rebranded, "export const LogoSVG = (props) => (<svg/>);\n");
    }

    #[test]
    fn test_rebrand_arbitrary_symbol() {
        let module = "const Placeholder = () => null;\n\nexport default Placeholder;\n";
        let rebranded = rebrand_module(module, "SettingsSVG");

        assert!(rebranded.contains("export const SettingsSVG = () => null;"));
        assert!(!rebranded.contains("Placeholder"));
        assert!(!rebranded.contains("export default"));
    }

    #[test]
    fn test_rebrand_without_default_export_is_passthrough() {
        let module = "export const Already = 1;\n";
        assert_eq!(rebrand_module(module, "X"), module);
    }

    #[test]
    fn test_rebrand_does_not_touch_partial_identifiers() {
        let module = "const Ico = 1;\nconst IcoWide = Ico;\n\nexport default Ico;\n";
        let rebranded = rebrand_module(module, "NewSVG");

        assert!(rebranded.contains("IcoWide = NewSVG"));
        assert!(!rebranded.contains("NewSVGWide"));
    }

    #[test]
    fn test_build_artifacts_with_declarations() {
        let icon = sample_match();
        let artifacts = build_artifacts(&icon, "<svg><path d=\"M0 0\"/></svg>", &DefaultTransform, true);

        let names: Vec<&str> = artifacts.iter().map(|a| a.file_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "arrow-thick-circle-left.tsx",
                "arrow-thick-circle-left.native.tsx",
                "arrow-thick-circle-left.d.ts",
            ]
        );

        for artifact in &artifacts {
            assert!(artifact.content.contains("ArrowBackSVG"));
            assert!(!artifact.content.contains("export default"));
        }
        assert!(artifacts[2].content.contains("FC<SVGProps<SVGSVGElement>>"));
    }

    #[test]
    fn test_build_artifacts_without_declarations() {
        let icon = sample_match();
        let artifacts = build_artifacts(&icon, "<svg/>", &DefaultTransform, false);
        assert_eq!(artifacts.len(), 2);
    }
}
