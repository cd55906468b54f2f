//! Per-class Markdown rendering.
//!
//! Produces the fragment list for one `## ` class section: heading,
//! class description, Properties, Methods. Fragments carry their own
//! trailing newlines so the writer can concatenate groups verbatim.

use crate::extract::{self, MemberFilter};
use crate::model::{ClassRecord, Field, Method, Updatable};

/// Everything page-specific about rendering one class section.
#[derive(Default)]
pub struct ClassSpec<'a> {
    pub fields: MemberFilter<'a>,
    pub methods: MemberFilter<'a>,
    /// Synthetic fields merged over the extracted set, same-name wins.
    pub field_inject: Vec<Field>,
    /// Synthetic methods merged over the extracted set, same-name wins.
    pub method_inject: Vec<Method>,
    /// Superclass name for subclass pages; adds cross-reference notes.
    pub parent: Option<&'a str>,
}

/// Render one class section as an ordered list of Markdown fragments.
pub fn render_class(class: &ClassRecord, spec: &ClassSpec) -> Vec<String> {
    let mut fields = extract::fields(class, &spec.fields);
    for field in &spec.field_inject {
        fields.insert(field.name.clone(), field.clone());
    }
    let mut methods = extract::methods(class, &spec.methods);
    for method in &spec.method_inject {
        methods.insert(method.name.clone(), method.clone());
    }

    let name = class.name.as_str();
    let mut lines = Vec::new();

    match spec.parent {
        Some(parent) => lines.push(format!("## `{name}: {parent}`\n\n")),
        None => lines.push(format!("## `{name}`\n\n")),
    }
    if let Some(desc) = class.description() {
        lines.push(format!("{desc}\n\n"));
    }

    lines.push("### Properties\n\n".to_string());
    if let Some(parent) = spec.parent {
        lines.push(format!(
            "See [`{parent}`](#properties) for more properties.\n\n"
        ));
    }
    if fields.is_empty() {
        lines.push("This class has no properties of its own.\n\n".to_string());
    } else {
        let mut sorted: Vec<&Field> = fields.values().collect();
        sorted.sort_by(|a, b| field_sort_key(&a.name).cmp(&field_sort_key(&b.name)));
        for field in sorted {
            lines.push(format!("#### `{name}.{}: {}`\n", field.name, field.ty));
            if !field.desc.is_empty() {
                lines.push(format!("{}\n", field.desc));
            }
            if !field.default.is_empty() {
                lines.push(format!("- Default value: {}\n", field.default));
            }
            if let Some(note) = updatable_note(field.updatable) {
                lines.push(note);
            }
            lines.push("\n".to_string());
        }
    }

    lines.push("### Methods\n\n".to_string());
    if let Some(parent) = spec.parent {
        lines.push(format!("See [`{parent}`](#methods) for more methods.\n\n"));
    }
    if methods.is_empty() {
        lines.push("This class has no methods of its own.\n\n".to_string());
    } else {
        // BTreeMap iteration is already alphabetical; the constructor
        // jumps the queue.
        let mut sorted: Vec<&Method> = methods.values().filter(|m| m.name != "new").collect();
        if let Some(constructor) = methods.get("new") {
            sorted.insert(0, constructor);
        }
        for method in sorted {
            lines.push(format!("#### `{}`\n", method.sig));
            if !method.desc.is_empty() {
                lines.push(format!("{}\n", method.desc));
            }
            lines.push("\n".to_string());
        }
    }

    lines
}

/// Sort key for property names: bracketed numeric indices (`[0]`, `[1]`,
/// ...) order numerically and ahead of plain names, which order
/// lexically.
fn field_sort_key(name: &str) -> (u8, i64, &str) {
    if let Some(inner) = name.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        if let Ok(n) = inner.parse::<i64>() {
            return (0, n, "");
        }
    }
    (1, 0, name)
}

/// Short runtime-updatability marker for a mutability code.
pub fn runtime_marker(updatable: Updatable) -> &'static str {
    match updatable {
        Updatable::Unspecified => "",
        Updatable::Runtime => "✅",
        Updatable::SameType => "⚠️",
        Updatable::Never => "❌",
        Updatable::ViaUpdate => "❌ (but you may call `:update()` on the object itself)",
        Updatable::ReadOnly => "R",
    }
}

/// Annotation line for a field's mutability code, if it has one.
fn updatable_note(updatable: Updatable) -> Option<String> {
    match updatable {
        Updatable::Unspecified => None,
        Updatable::ReadOnly => {
            Some("- This property should be treated as **read-only**.\n".to_string())
        }
        _ => Some(format!(
            "- Updatable during runtime: {}\n",
            runtime_marker(updatable)
        )),
    }
}
