//! Page drivers — one fixed recipe per output document.
//!
//! Each driver names the classes it loads, the member filters and
//! synthetic injections per class, parent linkage for subclass sections,
//! and the destination file under the docs directory.

use crate::extract::{self, MemberFilter};
use crate::load;
use crate::model::{ClassRecord, Field, Method};
use crate::render::{self, ClassSpec};
use crate::writer;
use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;

/// Synthetic `update` method that every finalized scene object exposes.
fn update_inject(class: &str) -> Vec<Method> {
    vec![Method {
        name: "update".to_string(),
        sig: format!("{class}:update(props: table)"),
        desc: "Updates the properties of `self` according to `props`.".to_string(),
    }]
}

/// Synthetic `update` plus `lookAt` for positionable scene objects.
fn scene_object_inject(class: &str) -> Vec<Method> {
    let mut methods = update_inject(class);
    methods.push(Method {
        name: "lookAt".to_string(),
        sig: format!("{class}:lookAt(eyePos: Vec3, targetPos: Vec3, up?: Vec3)"),
        desc: "Positions `self` at `eyePos`, then rotates it to look at \
               `targetPos`, with its viewpoint oriented with its \
               up vector pointed in the direction hinted by `up`. If `up` \
               is not given, a default of `(0, -1, 0)` (the world up-direction) \
               will be used."
            .to_string(),
    });
    methods
}

/// Run every driver: materials first, then the preamble-preserving pages.
pub fn all(input: &Path, docs: &Path) -> Result<()> {
    materials(input, docs)?;
    scene(input, docs)?;
    cameras(input, docs)?;
    lights(input, docs)?;
    material_base(input, docs)?;
    math(input, docs)?;
    shadows(input, docs)
}

pub fn scene(input: &Path, docs: &Path) -> Result<()> {
    let classes = load::load_classes(input, &["Scene"])?;
    let lines = render::render_class(
        load::class(&classes, "Scene")?,
        &ClassSpec {
            fields: MemberFilter::blacklist(&["lights", "pub"]),
            method_inject: update_inject("Scene"),
            ..ClassSpec::default()
        },
    );
    writer::write_page(&docs.join("scene.md"), &[lines])
}

pub fn cameras(input: &Path, docs: &Path) -> Result<()> {
    let classes = load::load_classes(
        input,
        &["Camera", "PerspectiveCamera", "OrthographicCamera"],
    )?;
    let camera = render::render_class(
        load::class(&classes, "Camera")?,
        &ClassSpec {
            methods: MemberFilter::whitelist(&[]),
            method_inject: scene_object_inject("Camera"),
            ..ClassSpec::default()
        },
    );
    let perspective = render::render_class(
        load::class(&classes, "PerspectiveCamera")?,
        &ClassSpec {
            fields: MemberFilter::whitelist(&["aspectRatio", "fov"]),
            methods: MemberFilter::whitelist(&["new"]),
            parent: Some("Camera"),
            ..ClassSpec::default()
        },
    );
    let orthographic = render::render_class(
        load::class(&classes, "OrthographicCamera")?,
        &ClassSpec {
            fields: MemberFilter::whitelist(&["left", "right", "top", "bottom"]),
            methods: MemberFilter::whitelist(&["new"]),
            parent: Some("Camera"),
            ..ClassSpec::default()
        },
    );
    writer::write_page(&docs.join("cameras.md"), &[camera, perspective, orthographic])
}

/// Fields every light subclass re-declares from `Light` and must not
/// repeat in its own section.
const LIGHT_SUBCLASS_FIELD_EXCLUDES: &[&str] = &[
    "color",
    "intensity",
    "position",
    "rotation",
    "viewMatrix",
    "index",
    "colorMapIndex",
];

pub fn lights(input: &Path, docs: &Path) -> Result<()> {
    let classes = load::load_classes(
        input,
        &["Light", "AmbientLight", "PointLight", "DirLight", "SpotLight"],
    )?;
    let light = render::render_class(
        load::class(&classes, "Light")?,
        &ClassSpec {
            fields: MemberFilter::blacklist(&["shadow"]),
            methods: MemberFilter::blacklist(&["linkWithScene"]),
            method_inject: scene_object_inject("Light"),
            ..ClassSpec::default()
        },
    );
    let ambient = light_subclass(&classes, "AmbientLight", &["shadow"])?;
    let point = light_subclass(&classes, "PointLight", &[])?;
    let dir = light_subclass(&classes, "DirLight", &[])?;
    let spot = light_subclass(&classes, "SpotLight", &[])?;
    writer::write_page(&docs.join("lights.md"), &[light, ambient, point, dir, spot])
}

fn light_subclass(
    classes: &HashMap<String, ClassRecord>,
    name: &str,
    extra_field_excludes: &[&str],
) -> Result<Vec<String>> {
    let mut field_excludes = LIGHT_SUBCLASS_FIELD_EXCLUDES.to_vec();
    field_excludes.extend_from_slice(extra_field_excludes);
    Ok(render::render_class(
        load::class(classes, name)?,
        &ClassSpec {
            fields: MemberFilter::blacklist(&field_excludes),
            methods: MemberFilter::blacklist(&["linkWithScene"]),
            parent: Some("Light"),
            ..ClassSpec::default()
        },
    ))
}

pub fn material_base(input: &Path, docs: &Path) -> Result<()> {
    let classes = load::load_classes(input, &["Material"])?;
    let lines = render::render_class(
        load::class(&classes, "Material")?,
        &ClassSpec {
            fields: MemberFilter::blacklist(&[
                "changeFuncs",
                "listeners",
                "mixins",
                "useCamera",
                "useLights",
            ]),
            method_inject: update_inject("Material"),
            ..ClassSpec::default()
        },
    );
    writer::write_page(&docs.join("material.md"), &[lines])
}

pub fn math(input: &Path, docs: &Path) -> Result<()> {
    let classes = load::load_classes(input, &["Euler", "Mat3", "Mat4", "Quat", "Vec3", "Vec4"])?;
    let mut groups = Vec::new();
    for name in ["Vec3", "Vec4", "Mat3", "Mat4", "Quat", "Euler"] {
        groups.push(render::render_class(
            load::class(&classes, name)?,
            &ClassSpec::default(),
        ));
    }
    writer::write_page(&docs.join("math.md"), &groups)
}

pub fn shadows(input: &Path, docs: &Path) -> Result<()> {
    let classes = load::load_classes(
        input,
        &[
            "StandardShadow",
            "StandardPerspectiveShadow",
            "StandardOrthographicShadow",
        ],
    )?;
    let standard = render::render_class(
        load::class(&classes, "StandardShadow")?,
        &ClassSpec {
            method_inject: update_inject("StandardShadow"),
            ..ClassSpec::default()
        },
    );
    let subclass = |name| -> Result<Vec<String>> {
        Ok(render::render_class(
            load::class(&classes, name)?,
            &ClassSpec {
                fields: MemberFilter::whitelist(&[]),
                methods: MemberFilter::whitelist(&[]),
                parent: Some("StandardShadow"),
                ..ClassSpec::default()
            },
        ))
    };
    let perspective = subclass("StandardPerspectiveShadow")?;
    let orthographic = subclass("StandardOrthographicShadow")?;
    writer::write_page(
        &docs.join("shadows.md"),
        &[standard, perspective, orthographic],
    )
}

const MATERIAL_CLASS_NAMES: &[&str] = &[
    "DepthMaterial",
    "MatcapMaterial",
    "NormalMaterial",
    "PhongMaterial",
    "UnlitMaterial",
    "UVMaterial",
];

/// The materials page lists each built-in material's properties minus
/// the base `Material` fields (and `update`). Unlike the other pages it
/// is fully regenerated, preamble included.
pub fn materials(input: &Path, docs: &Path) -> Result<()> {
    let mut names = MATERIAL_CLASS_NAMES.to_vec();
    names.push("Material");
    let classes = load::load_classes(input, &names)?;
    let base_fields = extract::fields(
        load::class(&classes, "Material")?,
        &MemberFilter::default(),
    );

    let mut lines = vec![
        "# Built-in Materials\n\n".to_string(),
        "Remember that all these properties are in addition to the properties provided by the base class.\n\n"
            .to_string(),
    ];
    for &name in MATERIAL_CLASS_NAMES {
        let material = load::class(&classes, name)?;
        let fields = extract::fields(material, &MemberFilter::default());

        lines.push(format!("## `{name}`\n\n"));
        if let Some(desc) = material.description() {
            lines.push(format!("{desc}\n\n"));
        }
        lines.push("### Properties\n\n".to_string());

        let own: Vec<&Field> = fields
            .values()
            .filter(|f| f.name != "update" && !base_fields.contains_key(&f.name))
            .collect();
        if own.is_empty() {
            lines.push("This material has no additional properties.\n\n".to_string());
            continue;
        }

        for field in own {
            lines.push(format!("#### `{name}.{}: {}`\n", field.name, field.ty));
            lines.push(format!("{}\n", field.desc));
            lines.push(format!("- Default value: {}\n", field.default));
            lines.push(format!(
                "- Updatable during runtime: {}\n\n",
                render::runtime_marker(field.updatable)
            ));
        }
        lines.push("\n".to_string());
    }

    writer::overwrite_page(&docs.join("materials.md"), &lines)
}
