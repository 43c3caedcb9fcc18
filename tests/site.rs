use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;

use micron::Config;

fn write_source(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn test_config(content: &Path, output: &Path) -> Config {
    let mut config = Config::default();
    config.paths.content = content.to_path_buf();
    config.paths.output = output.to_path_buf();
    config
}

#[test]
fn builds_pages_and_index() {
    let dir = tempfile::tempdir().unwrap();
    let content = dir.path().join("content");
    let output = dir.path().join("pages");
    write_source(&content, "hello.md", "# Hello\n");
    write_source(&content, "guides/setup.md", "* step one\n* step two\n");

    let summary = micron::build_site(&test_config(&content, &output)).unwrap();
    assert_eq!(summary.pages_written, 3);

    assert_eq!(
        fs::read_to_string(output.join("hello.mu")).unwrap(),
        "> `!Hello`!\n\n"
    );
    assert_eq!(
        fs::read_to_string(output.join("guides/setup.mu")).unwrap(),
        "* step one\n* step two\n\n"
    );

    let index = fs::read_to_string(output.join("index.mu")).unwrap();
    assert!(index.starts_with("> `!Pages`!\n-\n"));
    assert!(index.contains("`_`[hello`/page/hello.mu]`_"));
    assert!(index.contains("`_`[guides/setup`/page/guides/setup.mu]`_"));
}

#[test]
fn cache_directive_prefixes_every_written_page() {
    let dir = tempfile::tempdir().unwrap();
    let content = dir.path().join("content");
    let output = dir.path().join("pages");
    write_source(&content, "post.md", "body\n");

    let mut config = test_config(&content, &output);
    config.cache.seconds = Some(600);
    micron::build_site(&config).unwrap();

    assert_eq!(
        fs::read_to_string(output.join("post.mu")).unwrap(),
        "#!c=600\nbody\n\n"
    );
    let index = fs::read_to_string(output.join("index.mu")).unwrap();
    assert!(index.starts_with("#!c=600\n"));
}

#[test]
fn hand_written_index_wins_over_generated_one() {
    let dir = tempfile::tempdir().unwrap();
    let content = dir.path().join("content");
    let output = dir.path().join("pages");
    write_source(&content, "index.md", "# Home\n");

    let summary = micron::build_site(&test_config(&content, &output)).unwrap();
    assert_eq!(summary.pages_written, 1);
    assert_eq!(
        fs::read_to_string(output.join("index.mu")).unwrap(),
        "> `!Home`!\n\n"
    );
}

#[test]
fn non_markdown_files_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let content = dir.path().join("content");
    let output = dir.path().join("pages");
    write_source(&content, "page.md", "text\n");
    write_source(&content, "notes.txt", "not markdown\n");

    let pages = micron::load_pages(&content).unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].slug, "page");
    assert!(micron::build_site(&test_config(&content, &output)).is_ok());
    assert!(!output.join("notes.mu").exists());
}

#[test]
fn missing_content_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir.path().join("nope"), &dir.path().join("pages"));
    let err = micron::build_site(&config).unwrap_err();
    assert!(matches!(err, micron::SiteError::ScanContent { .. }));
}
