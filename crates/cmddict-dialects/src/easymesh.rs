//! EasyMesh: mesh construction commands
//!
//! Scripts are sequences of short commands such as `sc#f80 ab 1 ty .5`.
//! Braces open a scope that later commands (and CSG operations) act on.

use cmddict_core::CommandDictionary;

use crate::{register_rows, CommandRow};

/// Dialect name
pub const NAME: &str = "easymesh";

const TYPES: &[(&str, &[&str])] = &[
    (
        "[ ]",
        &["Opens a new scope,\nevery operations between the braces\nwill only be done to the vertices added\nsince the start of this scope."],
    ),
    ("float", &["Fraction value", "0.0"]),
    ("int", &["No decimal value", "0"]),
    ("bool", &["Boolean value", "true/false", "1/0"]),
    (
        "color",
        &[
            "Red/Green/Blue/{Alpha}",
            "HEXA: #ABC{D}",
            "      #AABBCC{DD}",
            "FLOAT: f f f f",
            "      (f f f f)",
            "      (f)",
        ],
    ),
    ("vec3", &["X/Y/Z as float", " f f f", "(f f f)", "(f)"]),
];

/// Build the dictionary
pub fn build() -> CommandDictionary {
    let mut builder = CommandDictionary::builder(NAME);
    for (id, syntax) in TYPES {
        builder = builder.register_type(*id, syntax.iter().copied());
    }
    for rows in [CSG_COMMANDS, BASE_COMMANDS, TRANSFORM_COMMANDS, SHAPE_COMMANDS] {
        builder = register_rows(builder, rows);
    }
    builder.build()
}

/// Boolean operations between the current scope and a new one
const CSG_COMMANDS: &[CommandRow] = &[
    (&["csgu", "csgunion"], "Performs a Union operation as :\n(current_scope_outside + new_scope_Outside)", &[("[ ]", "New scope", None)]),
    (&["csgs", "csgsubstract"], "Performs a Substract operation as :\n(current_scope_Outside + new_scope_Inside-inverted)", &[("[ ]", "New scope", None)]),
    (&["csgsl", "csgsubstractloss"], "Performs a Substract operation without keeping the new_scope part", &[("[ ]", "New scope", None)]),
    (&["csga", "csgand"], "Performs an And operation as :\n(current_scope_Inside + new_scope__Inside)", &[("[ ]", "New scope", None)]),
    (&["csgx", "csgxor"], "Performs a Xor operation as :\n(current_scope_Outside + current_scope_Inside-inverted + new_scope_Outside + new_scope_Inside-inverted)", &[("[ ]", "New scope", None)]),
];

/// Colors, winding and loops
const BASE_COMMANDS: &[CommandRow] = &[
    (&["tsw", "scalewinding"], "When activated, on negative-scaling,\nnormal-vector correction will not occur", &[]),
    (&["sc", "setcolor"], "Set A color", &[("color", "color", None)]),
    (&["scb", "setcolorb"], "Set B color", &[("color", "color", None)]),
    (&["scv", "setcolorv"], "Set the color of all vertices in this scope", &[("color", "color", None)]),
    (&["lp", "loop"], "Performs a loop with the code in the braces.\nDoesn't open a new scope.", &[("int", "loopnb", None), ("[ ]", "Loop command", None)]),
];

/// Vertex transforms and deformations
const TRANSFORM_COMMANDS: &[CommandRow] = &[
    (&["tx", "translatex"], "Translate vertices along the X axis", &[("float", "n", None)]),
    (&["ty", "translatey"], "Translate vertices along the Y axis", &[("float", "n", None)]),
    (&["tz", "translatez"], "Translate vertices along the Z axis", &[("float", "n", None)]),
    (&["t", "translate"], "Translate vertices", &[("vec3", "v", None)]),
    (&["rx", "rotatex"], "Rotate vertices along the X axis", &[("float", "degree", None)]),
    (&["ry", "rotatey"], "Rotate vertices along the Y axis", &[("float", "degree", None)]),
    (&["rz", "rotatez"], "Rotate vertices along the Z axis", &[("float", "degree", None)]),
    (&["r", "rotate"], "Rotate vertices along the given axis", &[("float", "degree", None), ("vec3", "axis", None)]),
    (&["rj", "radialjitter"], "Randomly move vertices along Origin-to-vertex as f(vtx) = vtx + o2v * (1.0 + rand(r))", &[("float", "r", None)]),
    (&["tax", "taperx"], "multiply axis y/z by f(x)\nf(z) = z * (1.0 + (nz * f(x) + xoff))\nf(x) = absolute ? abs_x : x", &[("float", "ny", None), ("float", "nz", None), ("float", "xoff", Some("0.0")), ("bool", "absolute", Some("true"))]),
    (&["tay", "tapery"], "multiply axis x/z by f(y)\nf(x) = x * (1.0 + (nx * f(y) + yoff))\nf(y) = absolute ? abs_y : y", &[("float", "nx", None), ("float", "nz", None), ("float", "yoff", Some("0.0")), ("bool", "absolute", Some("true"))]),
    (&["taz", "taperz"], "multiply axis x/y by f(z)\nf(y) = y * (1.0 + (ny * f(z) + zoff))\nf(z) = absolute ? abs_z : z", &[("float", "nx", None), ("float", "ny", None), ("float", "zoff", Some("0.0")), ("bool", "absolute", Some("true"))]),
    (&["twx", "twistx"], "Twist vertices around x axis with x as rotation value\nf(p) = (RotateX(x * t + toff) * p)", &[("float", "t", None), ("float", "toff", Some("0.0"))]),
    (&["twy", "twisty"], "Twist vertices around y axis with y as rotation value\nf(p) = (RotateY(y * t + toff) * p)", &[("float", "t", None), ("float", "toff", Some("0.0"))]),
    (&["twz", "twistz"], "Twist vertices around z axis with z as rotation value\nf(p) = (RotateZ(z * t + toff) * p)", &[("float", "t", None), ("float", "toff", Some("0.0"))]),
    (&["shx", "shearx"], "Shear vertices using x value as shear quantity\nf(z) = z + (nz * f(x) + xoff)\nf(x) = absolute ? abs_x : x", &[("float", "ny", None), ("float", "nz", None), ("float", "xoff", Some("0.0")), ("bool", "absolute", Some("true"))]),
    (&["shy", "sheary"], "Shear vertices using y value as shear quantity\nf(x) = x + (nx * f(y) + yoff)\nf(y) = absolute ? abs_y : y", &[("float", "nx", None), ("float", "nz", None), ("float", "yoff", Some("0.0")), ("bool", "absolute", Some("true"))]),
    (&["shz", "shearz"], "Shear vertices using z value as shear quantity\nf(y) = y + (ny * f(z) + zoff)\nf(z) = absolute ? abs_z : z", &[("float", "nx", None), ("float", "ny", None), ("float", "zoff", Some("0.0")), ("bool", "absolute", Some("true"))]),
    (&["stx", "stretchx"], "Stretch vertices using x value as stretch quantity\nf(z) = z + (pow(x, nz) + xoff)", &[("float", "ny", None), ("float", "nz", None), ("float", "xoff", Some("0.0"))]),
    (&["sty", "stretchy"], "Stretch vertices using y value as stretch quantity\nf(x) = x + (pow(y, nx) + yoff)", &[("float", "nx", None), ("float", "nz", None), ("float", "yoff", Some("0.0"))]),
    (&["stz", "stretchz"], "Stretch vertices using z value as stretch quantity\nf(y) = y + (pow(z, ny) + zoff)", &[("float", "nx", None), ("float", "ny", None), ("float", "zoff", Some("0.0"))]),
    (&["bdxy", "bendxy"], "Bend vertices using x as bend quantity along y axis\nf(p) = (RotateY(x * t + toff) * p)", &[("float", "t", None), ("float", "toff", Some("0.0"))]),
    (&["bdxz", "bendxz"], "Bend vertices using x as bend quantity along z axis\nf(p) = (RotateZ(x * t + toff) * p)", &[("float", "t", None), ("float", "toff", Some("0.0"))]),
    (&["bdyx", "bendyx"], "Bend vertices using y as bend quantity along x axis\nf(p) = (RotateX(y * t + toff) * p)", &[("float", "t", None), ("float", "toff", Some("0.0"))]),
    (&["bdyz", "bendyz"], "Bend vertices using y as bend quantity along z axis\nf(p) = (RotateZ(y * t + toff) * p)", &[("float", "t", None), ("float", "toff", Some("0.0"))]),
    (&["bdzx", "bendzx"], "Bend vertices using z as bend quantity along x axis\nf(p) = (RotateX(z * t + toff) * p)", &[("float", "t", None), ("float", "toff", Some("0.0"))]),
    (&["bdzy", "bendzy"], "Bend vertices using z as bend quantity along y axis\nf(p) = (RotateY(z * t + toff) * p)", &[("float", "t", None), ("float", "toff", Some("0.0"))]),
    (&["sx", "scalex"], "Scale vertices", &[("vec3", "s", None)]),
    (&["sy", "scaley"], "Scale vertices", &[("vec3", "s", None)]),
    (&["sz", "scalez"], "Scale vertices", &[("vec3", "s", None)]),
    (&["s", "scale"], "Uniformly Scale vertices", &[("float", "s", None)]),
    (&["dup", "duplicate"], "Duplicate scope mesh and apply commands in the brackets.", &[("[ ]", "", None)]),
    (&["mx", "mirrorx"], "Mirror vertices through X-plane", &[]),
    (&["my", "mirrory"], "Mirror vertices through Y-plane", &[]),
    (&["mz", "mirrorz"], "Mirror vertices through Z-plane", &[]),
    (&["ch", "chamfer"], "DOES NOT WORK: Performs a chamfer operation", &[("float", "f", None)]),
    (&["splt", "splittriangle"], "split triangles in 4 smaller ones", &[("int", "pass", None)]),
    (&["smth", "smooth"], "Smooth the mesh by subdivising it", &[("int", "pass", None), ("int", "split_per_pass", None), ("int", "smooth_per_pass", None)]),
];

/// Primitive shapes appended to the current scope
const SHAPE_COMMANDS: &[CommandRow] = &[
    (&["ac", "addcylinder"], "Cylinder centered on (0,0,0) with BBox:\nMin: [-.5 * max(d1, d2),-.5 * h,-.5 * max(d1, d2)]\nMax: [ .5 * max(d1, d2), .5 * h,  .5 * max(d1, d2)]", &[("int", "nsides", None), ("float", "h", None), ("float", "d1", None), ("float", "d2", Some("d1")), ("bool", "dualsides", Some("false")), ("bool", "smooth", Some("false")), ("bool", "close", Some("false"))]),
    (&["asph", "addsphere"], "Sphere centered on (0,0,0) with BBox:\nMin: [-.5 * d]\nMax: [ .5 * d]", &[("int", "ndivisions", None), ("float", "d", None)]),
    (&["acap", "addcapsule"], "Capsule centered on (0,0,0) with BBox:\nMin: [-.5 * d,-(.5 * d + h),-.5 * d]\nMax: [ .5 * d, (.5 * d + h), .5 * d]", &[("int", "ndivisions", None), ("float", "h", None), ("float", "d", None)]),
    (&["ato", "addtorus"], "Torus centered on (0,0,0) with BBox:\nMin: [-.5 * d2]\nMax: [ .5 * d2]", &[("int", "ndivisions", None), ("float", "d1", None), ("float", "d2", None)]),
    (&["ab", "addbox"], "Box centered on (0,0,0) with BBox:\nMin: [-.5 * size]\nMax: [ .5 * size]", &[("vec3", "size", None), ("float", "chamf", Some("0.0"))]),
    (&["ascb", "addsmoothchamfbox"], "Box centered on (0,0,0) with BBox:\nMin: [-.5 * size]\nMax: [ .5 * size]", &[("vec3", "size", None), ("float", "chamf", None)]),
    (&["afcb", "addflatchamfbox"], "Box centered on (0,0,0) with BBox:\nMin: [-.5 * size]\nMax: [ .5 * size]", &[("vec3", "size", None), ("float", "chamf", None)]),
    (&["as", "addstar"], "Append a Star centered on (0,0,0)\nContained in a disc of max(d1, d2) diameter.", &[("int", "nbranches", None), ("float", "d1", None), ("float", "d2", None), ("bool", "fade", Some("false")), ("bool", "fade2", Some("false"))]),
    (&["aes", "addexpandedstar"], "Star centered on (0,0,0)\nContained in a disc of max(max(d1, d2), max(d1 + extrad, d2 + extrad)) diameter.\nExpanded star branches use Color2.", &[("int", "nbranches", None), ("float", "d1", None), ("float", "d2", None), ("float", "extrad", Some("0.0"))]),
    (&["ad", "adddisc"], "Disc centered on (0,0,0) with d diameter.", &[("int", "nsides", None), ("float", "d", None), ("bool", "fade", Some("false"))]),
    (&["at", "addtriangle"], "Triangle centered on (0,0,0)\nContained in a disc of d diameter.", &[("float", "d", None), ("bool", "fade", Some("false"))]),
    (&["aq", "addquad"], "Quad centered on (0,0,0) with BBox:\nMin: [-size * .5f, 0,-size * .5f]\nMax: [ size * .5f, 0, size * .5f]", &[("float", "size", None), ("bool", "fade", Some("false"))]),
    (&["acg", "addcog"], "Gear centered on (0,0,0) with BBox:\nMin: [-.5 * max(d1, d2),-.5 * h,-.5 * max(d1, d2)]\nMax: [ .5 * max(d1, d2), .5 * h, .5 * max(d1, d2)]", &[("float", "h", None), ("float", "d10", None), ("float", "d20", None), ("float", "d1", None), ("float", "d2", None), ("float", "d12", None), ("float", "d22", None), ("float", "sidemul", Some("1.0")), ("bool", "offset", Some("false"))]),
];
