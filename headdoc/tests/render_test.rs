use headdoc::{render_doctype_as, DocumentModel, Section, ValidationError, Value, CORE_CONTAINERS};

#[test]
fn test_end_to_end_head_fragments() {
    let mut doc = DocumentModel::new();
    doc.set_doctype("html5")
        .set_charset("UTF-8")
        .set_title("Test")
        .add_stylesheet("style.css", None, false)
        .add_script("app.js", "text/javascript", false, false, false);

    let renderer = doc.renderer();
    let page: String = [
        Section::Doctype,
        Section::Charset,
        Section::Title,
        Section::Stylesheets,
        Section::Scripts,
    ]
    .into_iter()
    .map(|section| renderer.section(section))
    .collect();

    assert_eq!(
        page,
        "<!DOCTYPE html>\n\
         \t<meta http-equiv=\"Content-type\" content=\"text/html; charset=UTF-8\" />\n\
         \t<title>Test</title>\n\
         \t<link rel=\"stylesheet\" type=\"text/css\" href=\"style.css\" />\n\
         \t<script src=\"app.js\" type=\"text/javascript\"></script>\n"
    );
}

#[test]
fn test_render_by_name_matches_section() {
    let mut doc = DocumentModel::new();
    doc.append_title("Home").add_meta("author", "Sam", false);

    let renderer = doc.renderer();
    assert_eq!(renderer.render("title"), Some(renderer.title()));
    assert_eq!(renderer.render("metas"), Some(renderer.metas()));
    assert_eq!(renderer.render("sidebar"), None);
}

#[test]
fn test_configurable_line_format() {
    let mut doc = DocumentModel::new();
    doc.set_indent("  ").set_eol("win").append_title("Home");
    assert_eq!(doc.renderer().title(), "  <title>Home</title>\r\n");
    assert_eq!(render_doctype_as(&mut doc, "html5"), "<!DOCTYPE html>\r\n");
}

#[test]
fn test_fluent_chain_through_generic_api() {
    let mut doc = DocumentModel::new();
    doc.append("title", "b")
        .and_then(|doc| doc.prepend("title", "a"))
        .and_then(|doc| doc.add_container("feeds", true))
        .and_then(|doc| doc.append("feeds", "/rss.xml"))
        .unwrap();

    assert_eq!(
        doc.to_sequence("title").unwrap(),
        vec![Value::from("a"), Value::from("b")]
    );
    assert_eq!(doc.renderer().title(), "\t<title>a - b</title>\n");
}

#[test]
fn test_core_containers_survive_removal_attempts() {
    let mut doc = DocumentModel::new();
    for name in CORE_CONTAINERS {
        assert!(matches!(
            doc.remove_container(name),
            Err(ValidationError::CoreContainer { .. })
        ));
    }
    assert!(CORE_CONTAINERS.iter().all(|name| doc.contains(name).unwrap()));
}

#[test]
fn test_prepend_and_append_interleave() {
    let mut doc = DocumentModel::new();
    doc.add_container("crumbs", true).unwrap();
    for (i, prepend) in [false, true, false, true, false].into_iter().enumerate() {
        let item = i.to_string();
        if prepend {
            doc.prepend("crumbs", item).unwrap();
        } else {
            doc.append("crumbs", item).unwrap();
        }
    }
    let order: Vec<String> = doc
        .to_sequence("crumbs")
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(order, vec!["3", "1", "0", "2", "4"]);
}
