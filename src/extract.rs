//! Field and method extraction from class records.
//!
//! Both extractors are pure projections over a [`ClassRecord`]: the
//! source record is never mutated, and a description that does not match
//! the metadata grammar degrades to empty attributes instead of failing.

use crate::model::{ClassRecord, Field, Method, Updatable};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Description metadata grammar: optional single-character mutability
/// marker in parentheses, free text, optional trailing default clause.
///
/// `(U) does a thing Default: 5` → ("U", "does a thing", "5")
static RE_FIELD_DESC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\((.)\) )?(.*?)(?: Default: (.*))?$").unwrap());

/// Arrow return syntax: `Class:foo(a) -> T` → `Class:foo(a): T`.
static RE_ARROW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.*?)\s*-> (.*)$").unwrap());

// The language server truncates long enumerated-literal listings. The
// rotation-order set is the only affected type and has a known complete
// form.
const TRUNCATED_ORDER_SET: &str = "'xyz'|'xzy'|'yxz'|'yzx'|'zxy'...(+1)";
const COMPLETE_ORDER_SET: &str = "'xyz'|'xzy'|'yxz'|'yzx'|'zxy'|'zyx'";

/// Operator-overload metamethods documented despite the underscore prefix.
const OPERATOR_METHODS: &[&str] = &["__add", "__sub", "__mul", "__div", "__unm"];

/// Name allow/deny lists applied during extraction.
#[derive(Debug, Default, Clone)]
pub struct MemberFilter<'a> {
    pub whitelist: Option<&'a [&'a str]>,
    pub blacklist: Option<&'a [&'a str]>,
}

impl<'a> MemberFilter<'a> {
    pub fn whitelist(names: &'a [&'a str]) -> Self {
        MemberFilter {
            whitelist: Some(names),
            blacklist: None,
        }
    }

    pub fn blacklist(names: &'a [&'a str]) -> Self {
        MemberFilter {
            whitelist: None,
            blacklist: Some(names),
        }
    }

    fn rejects(&self, name: &str) -> bool {
        if let Some(allow) = self.whitelist {
            if !allow.contains(&name) {
                return true;
            }
        }
        if let Some(deny) = self.blacklist {
            if deny.contains(&name) {
                return true;
            }
        }
        false
    }
}

/// Expand the truncated enumerated-literal artifact in type text.
pub fn fix_enum_listing(text: &str) -> String {
    text.replace(TRUNCATED_ORDER_SET, COMPLETE_ORDER_SET)
}

/// Extract the public data fields of a class.
///
/// Keeps members whose kind is `doc.field` with public visibility,
/// excluding underscore-prefixed names and anything the filter rejects.
pub fn fields(class: &ClassRecord, filter: &MemberFilter) -> BTreeMap<String, Field> {
    let mut out = BTreeMap::new();
    for member in &class.fields {
        if member.kind != "doc.field" || member.visible != "public" {
            continue;
        }
        let name = member.name.as_str();
        if name.starts_with('_') || filter.rejects(name) {
            continue;
        }
        let (marker, desc, default) = parse_field_desc(member.desc.as_deref().unwrap_or(""));
        out.insert(
            name.to_string(),
            Field {
                name: name.to_string(),
                ty: fix_enum_listing(member.type_view()),
                updatable: Updatable::from_marker(&marker),
                desc,
                default,
            },
        );
    }
    out
}

/// Split a field description into (marker, text, default value).
/// A description that does not match yields three empty strings.
fn parse_field_desc(desc: &str) -> (String, String, String) {
    match RE_FIELD_DESC.captures(desc) {
        Some(caps) => (
            caps.get(1).map_or_else(String::new, |m| m.as_str().to_string()),
            caps.get(2).map_or_else(String::new, |m| m.as_str().to_string()),
            caps.get(3).map_or_else(String::new, |m| m.as_str().to_string()),
        ),
        None => (String::new(), String::new(), String::new()),
    }
}

/// Extract the public methods of a class, normalizing signatures.
///
/// Underscore-prefixed names are excluded except the operator set. A
/// member whose normalized signature does not start with the owning
/// class's name is a mis-attributed overload and is skipped.
pub fn methods(class: &ClassRecord, filter: &MemberFilter) -> BTreeMap<String, Method> {
    let mut out = BTreeMap::new();
    for member in &class.fields {
        if member.kind != "setmethod" || member.visible != "public" {
            continue;
        }
        let name = member.name.as_str();
        if filter.rejects(name) {
            continue;
        }
        if name.starts_with('_') && !OPERATOR_METHODS.contains(&name) {
            continue;
        }

        // Everything from the first code fence on is editor hover
        // preview, not documentation.
        let desc = member
            .desc
            .as_deref()
            .unwrap_or("")
            .split("```")
            .next()
            .unwrap_or("")
            .to_string();

        let sig = member.type_view();
        let sig = sig.strip_prefix("(method) ").unwrap_or(sig);
        // Join overload parameter listings the server split across
        // numbered continuation lines.
        let sig = fix_enum_listing(sig)
            .replace("\n ", "")
            .replace(" 2.", ",")
            .replace(" 3.", ",");
        if !sig.starts_with(class.name.as_str()) {
            continue;
        }
        let sig = match RE_ARROW.captures(&sig) {
            Some(caps) => format!("{}: {}", &caps[1], &caps[2]),
            None => sig,
        };

        out.insert(
            name.to_string(),
            Method {
                name: name.to_string(),
                sig,
                desc,
            },
        );
    }
    out
}
