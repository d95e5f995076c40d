//! Integration tests for loading templates from a directory

use crate::common::{TestOutput, TestProject, YEAR};
use crate::fixtures;
use cpp_classgen::{Error, GenerationKind, TemplateLoader};
use std::fs;
use tempfile::TempDir;

fn template_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

#[test]
fn test_every_field_reaches_the_template() {
    let templates = template_dir(&[
        ("copyright.txt", "(c) {{YEAR}}"),
        (
            "interface.txt",
            concat!(
                "{{TEMPLATE_TYPE}}|{{COPYRIGHT}}|{{YEAR}}|{{CLASS_NAME}}|{{FILE_NAME}}|",
                "{{INTERFACE_NAME}}|{{FUNCTION_DECLARATIONS}}|{{SIGNAL_DEFINITIONS}}",
            ),
        ),
    ]);

    let output = TestOutput::new();
    output
        .generate_with(
            TemplateLoader::from_directory(templates.path()),
            GenerationKind::Interface,
            "Foo.h",
        )
        .unwrap();

    assert_eq!(
        output.read_file("I_Foo.h"),
        format!("INTERFACE|(c) {}|{}|I_Foo|I_Foo.h|I_Foo||", YEAR, YEAR)
    );
}

#[test]
fn test_file_name_tracks_each_output() {
    let templates = template_dir(&[
        ("copyright.txt", ""),
        ("class_cpp.txt", "{{TEMPLATE_TYPE}} {{FILE_NAME}}"),
        ("class_header.txt", "{{TEMPLATE_TYPE}} {{FILE_NAME}}"),
    ]);
    let project = TestProject::new();
    let input = project.write_file("I_Foo.h", fixtures::interfaces::SINGLE_FUNCTION);

    let output = TestOutput::new();
    output
        .generate_with(
            TemplateLoader::from_directory(templates.path()),
            GenerationKind::Class,
            &input,
        )
        .unwrap();

    assert_eq!(output.read_file("Foo.cpp"), "CLASS Foo.cpp");
    assert_eq!(output.read_file("Foo.h"), "CLASS Foo.h");
}

#[test]
fn test_copyright_file_name_tracks_each_output() {
    let templates = template_dir(&[
        ("copyright.txt", "// File: {{FILE_NAME}}"),
        ("class_cpp.txt", "{{COPYRIGHT}}\n// body {{FILE_NAME}}"),
        ("class_header.txt", "{{COPYRIGHT}}\n// body {{FILE_NAME}}"),
    ]);
    let project = TestProject::new();
    let input = project.write_file("I_Foo.h", fixtures::interfaces::SINGLE_FUNCTION);

    let output = TestOutput::new();
    let outcome = output
        .generate_with(
            TemplateLoader::from_directory(templates.path()),
            GenerationKind::Class,
            &input,
        )
        .unwrap();

    assert_eq!(output.read_file("Foo.cpp"), "// File: Foo.cpp\n// body Foo.cpp");
    assert_eq!(output.read_file("Foo.h"), "// File: Foo.h\n// body Foo.h");
    assert_eq!(outcome.naming.copyright_text, "// File: Foo.h");
}

#[test]
fn test_unknown_placeholders_pass_through() {
    let templates = template_dir(&[
        ("copyright.txt", ""),
        ("interface.txt", "// {{AUTHOR}} {{CLASS_NAME}}"),
    ]);

    let output = TestOutput::new();
    output
        .generate_with(
            TemplateLoader::from_directory(templates.path()),
            GenerationKind::Interface,
            "Foo.h",
        )
        .unwrap();

    assert_eq!(output.read_file("I_Foo.h"), "// {{AUTHOR}} I_Foo");
}

#[test]
fn test_missing_template_writes_no_files() {
    let templates = template_dir(&[("copyright.txt", "")]);

    let output = TestOutput::new();
    let err = output
        .generate_with(
            TemplateLoader::from_directory(templates.path()),
            GenerationKind::Interface,
            "Foo.h",
        )
        .unwrap_err();

    assert!(matches!(err, Error::TemplateNotFound { ref template, .. } if template == "INTERFACE"));
    assert!(output.entries().is_empty());
}

#[test]
fn test_shipped_templates_match_embedded_copies() {
    let shipped = TemplateLoader::from_directory(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"));
    let embedded = TemplateLoader::embedded();

    for kind in cpp_classgen::TemplateKind::ALL {
        assert_eq!(shipped.load(kind).unwrap(), embedded.load(kind).unwrap());
    }
}
