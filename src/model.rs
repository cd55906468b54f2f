//! Data model — typed records for the language server's doc export,
//! plus the projections this tool derives from them.

use serde::Deserialize;

/// One class entry from the `doc.json` export.
#[derive(Debug, Deserialize)]
pub struct ClassRecord {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<MemberRecord>,
    #[serde(default)]
    pub defines: Vec<DefineRecord>,
}

impl ClassRecord {
    /// Free-text class description, carried by the first `defines` entry.
    pub fn description(&self) -> Option<&str> {
        self.defines.first().and_then(|d| d.desc.as_deref())
    }
}

/// One member of a class: a data field, a method, or some other define
/// kind this tool ignores.
#[derive(Debug, Deserialize)]
pub struct MemberRecord {
    /// Member kind discriminator, e.g. `doc.field` or `setmethod`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub visible: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub extends: Option<Extends>,
    #[serde(default)]
    pub desc: Option<String>,
}

impl MemberRecord {
    /// Rendered type text of the member; empty when the export carries none.
    pub fn type_view(&self) -> &str {
        self.extends.as_ref().map_or("", |e| e.view.as_str())
    }
}

#[derive(Debug, Deserialize)]
pub struct Extends {
    #[serde(default)]
    pub view: String,
}

#[derive(Debug, Deserialize)]
pub struct DefineRecord {
    #[serde(default)]
    pub desc: Option<String>,
}

/// Whether a property may be changed after initial construction, parsed
/// from the single-character marker at the front of a field description.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Updatable {
    #[default]
    Unspecified,
    /// `(U)` — freely updatable at runtime.
    Runtime,
    /// `(C)` — updatable only to a value of the same type.
    SameType,
    /// `(X)` — not updatable.
    Never,
    /// `(Y)` — not updatable directly, but the object has `:update()`.
    ViaUpdate,
    /// `(R)` — treat as read-only.
    ReadOnly,
}

impl Updatable {
    pub fn from_marker(marker: &str) -> Updatable {
        match marker {
            "U" => Updatable::Runtime,
            "C" => Updatable::SameType,
            "X" => Updatable::Never,
            "Y" => Updatable::ViaUpdate,
            "R" => Updatable::ReadOnly,
            _ => Updatable::Unspecified,
        }
    }
}

/// A documented property, projected out of a [`MemberRecord`].
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub updatable: Updatable,
    pub desc: String,
    pub default: String,
}

/// A documented method with a normalized signature.
#[derive(Debug, Clone)]
pub struct Method {
    pub name: String,
    pub sig: String,
    pub desc: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_codes() {
        assert_eq!(Updatable::from_marker("U"), Updatable::Runtime);
        assert_eq!(Updatable::from_marker("C"), Updatable::SameType);
        assert_eq!(Updatable::from_marker("X"), Updatable::Never);
        assert_eq!(Updatable::from_marker("Y"), Updatable::ViaUpdate);
        assert_eq!(Updatable::from_marker("R"), Updatable::ReadOnly);
        assert_eq!(Updatable::from_marker(""), Updatable::Unspecified);
        assert_eq!(Updatable::from_marker("Z"), Updatable::Unspecified);
    }

    #[test]
    fn class_description_from_first_define() {
        let class: ClassRecord = serde_json::from_str(
            r#"{"name": "Scene", "defines": [{"desc": "The root."}, {"desc": "ignored"}]}"#,
        )
        .unwrap();
        assert_eq!(class.description(), Some("The root."));
    }

    #[test]
    fn class_without_defines() {
        let class: ClassRecord = serde_json::from_str(r#"{"name": "Scene"}"#).unwrap();
        assert_eq!(class.description(), None);
        assert!(class.fields.is_empty());
    }

    #[test]
    fn member_without_extends() {
        let member: MemberRecord =
            serde_json::from_str(r#"{"type": "doc.class", "name": "Scene"}"#).unwrap();
        assert_eq!(member.type_view(), "");
    }
}
