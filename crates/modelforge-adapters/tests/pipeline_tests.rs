//! Load → compile → write, wired with the real adapters.

use std::io::Write;
use std::path::Path;

use modelforge_adapters::{FileModelSource, MarkdownBomGenerator, MemoryFilesystem};
use modelforge_core::prelude::*;

const MODEL: &str = r#"
[project]
name = "Library"

[[entities]]
id = "book"
name = "Book"
timestamps = true

[[entities.fields]]
name = "title"
type = "String"
required = true

[[prototypePages]]
path = "/books/[id]"
name = "Book"

[infrastructure]
database = "sqlite"
"#;

fn load() -> SystemModel {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(MODEL.as_bytes()).unwrap();
    FileModelSource::new().load(file.path()).unwrap()
}

fn compile(model: &SystemModel) -> FileTree {
    CompileService::new(Box::new(MarkdownBomGenerator::new())).compile(model)
}

#[test]
fn toml_model_compiles_and_writes() {
    let tree = compile(&load());
    let fs = MemoryFilesystem::new();
    let summary = ExportService::new(Box::new(fs.clone()))
        .write_tree(&tree, "/out", false)
        .unwrap();

    assert_eq!(summary.files, tree.file_count());
    assert_eq!(fs.list_files().len(), tree.file_count());

    let bom = fs
        .read_file(Path::new("/out/documentation/bill-of-materials.md"))
        .unwrap();
    assert!(bom.starts_with("# Bill of Materials: Library"));
    assert!(bom.contains("- `better-sqlite3`"));

    let schema = fs.read_file(Path::new("/out/database/schema.prisma")).unwrap();
    assert!(schema.contains("provider = \"sqlite\""));
    assert!(fs
        .read_file(Path::new("/out/client/app/books/[id]/page.tsx"))
        .is_some());
}

#[test]
fn failed_write_leaves_nothing_behind() {
    let tree = compile(&load());
    let fs = MemoryFilesystem::new();
    fs.fail_writes_to("/out/README.md");

    let result = ExportService::new(Box::new(fs.clone())).write_tree(&tree, "/out", false);
    assert!(result.is_err());
    assert!(fs.list_files().is_empty());
    assert!(!fs.exists(Path::new("/out")));
}
