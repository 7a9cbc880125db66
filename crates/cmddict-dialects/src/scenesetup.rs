//! SceneSetup: scene description commands
//!
//! A scene script adds lights and tunes the viewer, for instance
//! `addlight 0.0 position (4 -1 -4) color #ffff showgizmo true`.
//! Object commands (`position`, `lookat`, `color`) apply to the object added
//! last.

use cmddict_core::CommandDictionary;

use crate::{register_rows, CommandRow};

/// Dialect name
pub const NAME: &str = "scenesetup";

const TYPES: &[(&str, &[&str])] = &[
    ("float", &["Fraction value", "0.0"]),
    ("bool", &["Boolean value", "true/false", "1/0"]),
    ("color", &["Red/Green/Blue/{Alpha}", "HEXA: #ABC{D}", "      #AABBCC{DD}", "FLOAT: (f f f f)"]),
    ("vec3", &["X/Y/Z as float", "(f f f)", "(f)"]),
    ("string", &["Quoted text", "\"setmesh\""]),
];

/// Objects added to the scene
const OBJECT_COMMANDS: &[CommandRow] = &[
    (
        &["addlight"],
        "Add a light to the scene.\nThe type is a float (0.0 directional, 1.0 point) or a light type name.",
        &[("float", "type", Some("0.0"))],
    ),
    (&["position"], "Set the position of the last added object", &[("vec3", "v", None)]),
    (&["lookat"], "Orient the last added object toward a point", &[("vec3", "v", None)]),
    (&["color"], "Set the color of the last added object", &[("color", "c", None)]),
];

/// Viewer settings
const SCENE_COMMANDS: &[CommandRow] = &[
    (&["setupscene"], "Select the scene itself as the object that following commands apply to", &[]),
    (&["clearcolor"], "Set the background clear color", &[("color", "c", None)]),
    (&["showgizmo"], "Show or hide the axis gizmo", &[("bool", "show", Some("true"))]),
    (&["showlight"], "Show or hide the light markers", &[("bool", "show", Some("true"))]),
    (&["show"], "Turn a display option on (gizmo, lights)", &[("string", "option", None)]),
    (&["hide"], "Turn a display option off (gizmo, lights)", &[("string", "option", None)]),
    (&["toggle"], "Flip a display option (gizmo, lights)", &[("string", "option", None)]),
    (
        &["custom"],
        "Register a custom viewer command.\nThe name selects the command, the text is its easymesh payload.",
        &[("string", "name", None), ("string", "text", None)],
    ),
];

/// Build the dictionary
pub fn build() -> CommandDictionary {
    let mut builder = CommandDictionary::builder(NAME);
    for (id, syntax) in TYPES {
        builder = builder.register_type(*id, syntax.iter().copied());
    }
    for rows in [OBJECT_COMMANDS, SCENE_COMMANDS] {
        builder = register_rows(builder, rows);
    }
    builder.build()
}
