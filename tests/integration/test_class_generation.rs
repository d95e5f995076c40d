//! Integration tests for generating a class from an existing interface

use crate::common::{TestOutput, TestProject};
use crate::fixtures;
use cpp_classgen::{Error, GenerationKind};

#[test]
fn test_class_produces_cpp_and_header() {
    let project = TestProject::new();
    let input = project.write_file("I_Foo.h", fixtures::interfaces::SINGLE_FUNCTION);

    let output = TestOutput::new();
    let outcome = output.generate(GenerationKind::Class, &input).unwrap();

    assert_eq!(output.entries(), vec!["Foo.cpp", "Foo.h"]);
    assert_eq!(outcome.naming.class_name, "Foo");
    assert_eq!(outcome.naming.interface_name, "I_Foo");
    // Implementation file is written before the header
    assert_eq!(
        outcome.written_files,
        vec![output.path().join("Foo.cpp"), output.path().join("Foo.h")]
    );
}

#[test]
fn test_class_files_reference_interface() {
    let project = TestProject::new();
    let input = project.write_file("I_Foo.h", fixtures::interfaces::SINGLE_FUNCTION);

    let output = TestOutput::new();
    output.generate(GenerationKind::Class, &input).unwrap();

    let header = output.read_file("Foo.h");
    assert_generated_contains!(header, "#include \"I_Foo.h\"");
    assert_generated_contains!(header, "class Foo : public I_Foo");
    assert_fully_rendered!(header);

    let cpp = output.read_file("Foo.cpp");
    assert_generated_contains!(cpp, "#include \"Foo.h\"");
    assert_generated_contains!(cpp, "Foo::~Foo()");
    assert_fully_rendered!(cpp);
}

#[test]
fn test_class_reports_parsed_interface() {
    let project = TestProject::new();
    let input = project.write_file("include/I_Widget.h", fixtures::interfaces::WIDGET);

    let output = TestOutput::new();
    let outcome = output.generate(GenerationKind::Class, &input).unwrap();

    let interface = outcome.interface.expect("class generation parses the interface");
    let raws: Vec<&str> = interface.functions.iter().map(|f| f.raw.trim()).collect();
    assert_eq!(
        raws,
        vec![
            "virtual void resize(int width, int height) = 0;",
            "virtual std::string name() const = 0;",
            "virtual void attach(const Gadget& gadget) = 0;",
        ]
    );
    assert!(interface.functions.iter().all(|f| f.arguments.is_empty()));
    assert_eq!(
        interface.includes,
        vec!["#include <string>", "#include \"Gadget.h\""]
    );
    assert_eq!(output.entries(), vec!["Widget.cpp", "Widget.h"]);
}

#[test]
fn test_interface_without_declarations_still_generates() {
    let project = TestProject::new();
    let input = project.write_file("I_Empty.h", fixtures::interfaces::NO_DECLARATIONS);

    let output = TestOutput::new();
    let outcome = output.generate(GenerationKind::Class, &input).unwrap();

    assert_eq!(outcome.interface.unwrap().function_count(), 0);
    assert_eq!(output.entries(), vec!["Empty.cpp", "Empty.h"]);
}

#[test]
fn test_missing_prefix_writes_no_files() {
    let project = TestProject::new();
    let input = project.write_file("Widget.h", fixtures::interfaces::WIDGET);

    let output = TestOutput::new();
    let err = output.generate(GenerationKind::Class, &input).unwrap_err();

    assert!(matches!(err, Error::MalformedInput(_)));
    assert!(output.entries().is_empty());
}

#[test]
fn test_missing_interface_file_writes_no_files() {
    let project = TestProject::new();
    let output = TestOutput::new();

    let err = output
        .generate(GenerationKind::Class, project.path().join("I_Missing.h"))
        .unwrap_err();

    assert!(matches!(err, Error::SourceRead { .. }));
    assert!(output.entries().is_empty());
}

#[test]
fn test_reserved_kinds_write_no_files() {
    let project = TestProject::new();
    let input = project.write_file("I_Foo.h", fixtures::interfaces::SINGLE_FUNCTION);

    for kind in [GenerationKind::Mock, GenerationKind::Test, GenerationKind::Fake] {
        let output = TestOutput::new();
        let err = output.generate(kind, &input).unwrap_err();
        assert!(matches!(err, Error::NotImplemented(k) if k == kind));
        assert!(output.entries().is_empty());
    }
}
