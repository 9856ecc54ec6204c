//! SVG to TSX module conversion
//!
//! The pipeline treats conversion as opaque: SVG text in, a TSX module with a
//! single default-exported component out. [`DefaultTransform`] is the built-in
//! SVGR-shaped implementation; anything honoring the same contract can be
//! plugged in through the [`SvgTransform`] trait.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Symbol name the built-in transformer default-exports. The generator
/// renames it per icon before writing.
pub const DEFAULT_SYMBOL: &str = "SvgIcon";

/// Per-invocation conversion flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformOptions {
    /// Target the native (react-native-svg) variant instead of web
    pub native: bool,
    /// Keep class attributes instead of stripping them
    pub preserve_attributes: bool,
}

/// Conversion collaborator: turns raw SVG text into a TSX module body with
/// one default-exported component.
pub trait SvgTransform: Send + Sync {
    fn transform(&self, source: &str, opts: &TransformOptions) -> String;
}

/// Built-in SVGR-shaped transformer.
#[derive(Debug, Default)]
pub struct DefaultTransform;

impl SvgTransform for DefaultTransform {
    fn transform(&self, source: &str, opts: &TransformOptions) -> String {
        let markup = clean_markup(source, opts.preserve_attributes);
        if opts.native {
            native_module(&markup)
        } else {
            web_module(&markup)
        }
    }
}

static XML_PROLOG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<\?xml.*?\?>").unwrap());
static DOCTYPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<!doctype.*?>").unwrap());
static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static CLASS_ATTR: Lazy<Regex> = Lazy::new(|| Regex::new(r#"\s+class="[^"]*""#).unwrap());
static COMPOUND_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-zA-Z_][a-zA-Z0-9]*(?:[-:][a-zA-Z0-9]+)+)=").unwrap());
static ELEMENT_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(</?)([a-z][a-zA-Z0-9]*)").unwrap());
static ROOT_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<(svg|Svg)([^>]*?)(/?)>").unwrap());

/// Strip prolog, doctype, comments and (unless preserved) class attributes,
/// then camel-case compound attribute names for JSX.
fn clean_markup(source: &str, preserve_attributes: bool) -> String {
    let markup = XML_PROLOG.replace_all(source, "");
    let markup = DOCTYPE.replace_all(&markup, "");
    let markup = COMMENT.replace_all(&markup, "");
    let markup = if preserve_attributes {
        markup.into_owned()
    } else {
        CLASS_ATTR.replace_all(&markup, "").into_owned()
    };

    let markup = COMPOUND_ATTR.replace_all(&markup, |caps: &Captures| {
        let name = &caps[1];
        // data-* and aria-* stay hyphenated in JSX
        if name.starts_with("data-") || name.starts_with("aria-") {
            format!("{name}=")
        } else {
            format!("{}=", camel_case(name))
        }
    });

    markup.trim().to_string()
}

fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        match ch {
            '-' | ':' => upper_next = true,
            _ if upper_next => {
                out.extend(ch.to_uppercase());
                upper_next = false;
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Spread incoming props onto the root element's opening tag.
fn spread_props(markup: &str) -> String {
    ROOT_OPEN
        .replace(markup, |caps: &Captures| {
            format!("<{}{} {{...props}}{}>", &caps[1], &caps[2], &caps[3])
        })
        .into_owned()
}

fn web_module(markup: &str) -> String {
    let body = indent(&spread_props(markup), 2);
    format!(
        "import * as React from 'react';\n\n\
         const {DEFAULT_SYMBOL} = (props: React.SVGProps<SVGSVGElement>) => (\n\
         {body}\n\
         );\n\n\
         export default {DEFAULT_SYMBOL};\n"
    )
}

fn native_module(markup: &str) -> String {
    let mut used: BTreeSet<String> = BTreeSet::new();
    let capitalized = ELEMENT_NAME
        .replace_all(markup, |caps: &Captures| {
            let element = native_element(&caps[2]);
            if element != "Svg" {
                used.insert(element.clone());
            }
            format!("{}{}", &caps[1], element)
        })
        .into_owned();

    let mut named: Vec<String> = vec!["SvgProps".to_string()];
    named.extend(used);

    let body = indent(&spread_props(&capitalized), 2);
    format!(
        "import * as React from 'react';\n\
         import Svg, {{ {} }} from 'react-native-svg';\n\n\
         const {DEFAULT_SYMBOL} = (props: SvgProps) => (\n\
         {body}\n\
         );\n\n\
         export default {DEFAULT_SYMBOL};\n",
        named.join(", ")
    )
}

/// Map a lowercase SVG element name to its react-native-svg component.
fn native_element(name: &str) -> String {
    if name == "tspan" {
        return "TSpan".to_string();
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn indent(text: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- a comment -->
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" class="icon">
  <path fill-rule="evenodd" d="M12 2z"/>
</svg>
"#;

    #[test]
    fn test_clean_strips_prolog_comment_class() {
        let markup = clean_markup(SAMPLE, false);
        assert!(!markup.contains("<?xml"));
        assert!(!markup.contains("<!--"));
        assert!(!markup.contains("class="));
        assert!(markup.starts_with("<svg"));
    }

    #[test]
    fn test_clean_preserves_class_when_asked() {
        let markup = clean_markup(SAMPLE, true);
        assert!(markup.contains(r#"class="icon""#));
    }

    #[test]
    fn test_compound_attributes_camel_cased() {
        let markup = clean_markup(SAMPLE, false);
        assert!(markup.contains("fillRule="));
        assert!(!markup.contains("fill-rule="));
    }

    #[test]
    fn test_data_and_aria_attributes_untouched() {
        let markup = clean_markup(r#"<svg data-testid="x" aria-hidden="true"/>"#, false);
        assert!(markup.contains("data-testid="));
        assert!(markup.contains("aria-hidden="));
    }

    #[test]
    fn test_camel_case_namespaced() {
        assert_eq!(camel_case("xlink:href"), "xlinkHref");
        assert_eq!(camel_case("stroke-width"), "strokeWidth");
    }

    #[test]
    fn test_web_module_shape() {
        let module = DefaultTransform.transform(SAMPLE, &TransformOptions::default());
        assert!(module.contains("const SvgIcon = (props: React.SVGProps<SVGSVGElement>)"));
        assert!(module.contains("{...props}"));
        assert!(module.ends_with("export default SvgIcon;\n"));
    }

    #[test]
    fn test_native_module_capitalizes_and_imports() {
        let opts = TransformOptions {
            native: true,
            ..TransformOptions::default()
        };
        let module = DefaultTransform.transform(SAMPLE, &opts);
        assert!(module.contains("<Svg"));
        assert!(module.contains("<Path"));
        assert!(module.contains("import Svg, { SvgProps, Path } from 'react-native-svg';"));
        assert!(module.ends_with("export default SvgIcon;\n"));
    }

    #[test]
    fn test_native_tspan_special_case() {
        assert_eq!(native_element("tspan"), "TSpan");
        assert_eq!(native_element("linearGradient"), "LinearGradient");
        assert_eq!(native_element("path"), "Path");
    }

    #[test]
    fn test_deterministic() {
        let opts = TransformOptions::default();
        assert_eq!(
            DefaultTransform.transform(SAMPLE, &opts),
            DefaultTransform.transform(SAMPLE, &opts)
        );
    }
}
