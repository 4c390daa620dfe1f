use mern_cli::commands::list;
use mern_cli::commands::templates::TemplateSource;
use std::fs;
use tempfile::TempDir;

#[test]
fn lists_bundled_templates() {
    let listings = list::run(&TemplateSource::Bundled).unwrap();

    let names: Vec<_> = listings.iter().map(|l| l.name).collect();
    assert_eq!(names, vec!["express", "react"]);
    assert!(listings.iter().all(|l| !l.files.is_empty()));
}

#[test]
fn missing_templates_are_left_out() {
    let templates = TempDir::new().unwrap();
    fs::create_dir_all(templates.path().join("react")).unwrap();
    fs::write(templates.path().join("react/index.html"), "<html></html>").unwrap();

    let listings = list::run(&TemplateSource::Directory(templates.path().to_path_buf())).unwrap();

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].name, "react");
    assert_eq!(listings[0].files, vec!["index.html".to_string()]);
}
