use cmddict_core::*;
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

fn mesh_subset() -> CommandDictionary {
    CommandDictionary::builder("mesh")
        .register_type("float", ["Fraction value", "0.0"])
        .register_type("vec3", ["X/Y/Z as float", "(f f f)"])
        .register_command(["csgu", "csgunion"], "Union", vec![argument("[ ]", "New scope", None)])
        .register_command(["tx", "translatex"], "Translate along X", vec![argument("float", "n", None)])
        .register_command(["t", "translate"], "Translate", vec![argument("vec3", "v", None)])
        .register_command(["ab", "addbox"], "Box", vec![argument("vec3", "size", None), argument("float", "chamf", Some("0.0"))])
        .build()
}

#[test]
fn table_of_contents_lists_initials_in_order() {
    let dict = mesh_subset();
    assert_eq!(dict.build_table_of_contents(false), "act");
    let full = dict.build_table_of_contents(true);
    assert_eq!(full.len(), 26);
    assert_eq!(&full[..4], "a-c-");
}

#[test]
fn empty_dictionary_table_of_contents_is_all_markers() {
    let dict = CommandDictionary::new("empty");
    let toc = dict.table_of_contents();
    assert_eq!(toc.entries().len(), 26);
    assert!(toc.entries().iter().all(|entry| !entry.is_present()));
    assert_eq!(dict.build_table_of_contents(true), "-".repeat(26));
}

#[test]
fn lint_flags_unregistered_scope_type() {
    let warnings = lint(&mesh_subset());
    assert_eq!(
        warnings,
        vec![LintWarning::UnknownArgumentType {
            command: 0,
            alias: "csgu".into(),
            type_name: "[ ]".into(),
        }]
    );
}

#[test]
fn load_dialect_file_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mesh.json");
    fs::write(&path, mesh_subset().export(SourceFormat::Json).unwrap()).unwrap();

    let loaded = CommandDictionary::load(&path).unwrap();
    assert_eq!(loaded.name(), "mesh");
    assert_eq!(
        DialectFile::from_dictionary(&loaded),
        DialectFile::from_dictionary(&mesh_subset())
    );

    let missing = CommandDictionary::load(&dir.path().join("missing.toml"));
    assert!(matches!(missing, Err(DictionaryError::Io { .. })));
}

#[test]
fn toml_export_keeps_declaration_order() {
    let text = mesh_subset().export(SourceFormat::Toml).unwrap();
    let csgu = text.find("csgunion").unwrap();
    let tx = text.find("translatex").unwrap();
    let ab = text.find("addbox").unwrap();
    assert!(csgu < tx && tx < ab);

    let back = DialectFile::parse(&text, SourceFormat::Toml).unwrap().into_dictionary();
    assert_eq!(back.commands(), mesh_subset().commands());
}

fn arb_aliases() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[a-zA-Z0-9]{0,6}", 0..3), 0..12)
}

proptest! {
    /// With markers the contents always has one unit per letter
    #[test]
    fn prop_toc_with_markers_has_26_units(aliases in arb_aliases()) {
        let mut dict = CommandDictionary::new("prop");
        for names in &aliases {
            dict.register_command(names.clone(), "", Vec::new());
        }
        let toc = dict.build_table_of_contents(true);
        prop_assert_eq!(toc.chars().count(), 26);
        for (letter, unit) in ('a'..='z').zip(toc.chars()) {
            let present = aliases.iter().flatten().any(|a| a.starts_with(letter));
            prop_assert_eq!(unit == letter, present);
        }
    }

    /// Without markers only present letters remain, alphabetically
    #[test]
    fn prop_toc_without_markers_is_sorted_subset(aliases in arb_aliases()) {
        let mut dict = CommandDictionary::new("prop");
        for names in &aliases {
            dict.register_command(names.clone(), "", Vec::new());
        }
        let toc = dict.build_table_of_contents(false);
        let letters: Vec<char> = toc.chars().collect();
        let mut sorted = letters.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(letters, sorted);
    }
}
