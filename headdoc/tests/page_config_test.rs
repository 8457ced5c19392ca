use std::path::PathBuf;

use headdoc::{PageConfig, Value};

fn home_page() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("pages/home.toml")
}

#[test]
fn test_home_page_loads() {
    let config = PageConfig::load(home_page()).expect("home page should parse");
    assert_eq!(config.title, vec!["Home", "Kitchen Notes"]);
    assert_eq!(config.scripts.len(), 2);
}

#[test]
fn test_home_page_renders() {
    let doc = PageConfig::load(home_page()).unwrap().build().unwrap();
    let renderer = doc.renderer();

    assert_eq!(
        renderer.html_open(),
        "<html lang=\"en\" dir=\"ltr\">\n"
    );
    assert_eq!(
        renderer.title(),
        "\t<title>Home | Kitchen Notes</title>\n"
    );
    assert_eq!(
        renderer.description(),
        "\t<meta name=\"description\" content=\"Recipes &amp; kitchen notes\" />\n"
    );
    assert_eq!(
        renderer.keywords(),
        "\t<meta name=\"keywords\" content=\"recipes, cooking\" />\n"
    );

    let metas = renderer.metas();
    assert!(metas.starts_with("\t<meta name=\"author\" content=\"Sam Baker\" />\n"));
    assert!(metas.ends_with(&renderer.charset()));

    let scripts = renderer.scripts();
    let vendor = scripts.find("/js/vendor.js").unwrap();
    let app = scripts.find("/js/app.js").unwrap();
    assert!(vendor < app, "prepended script should come first");
    assert!(scripts.contains("<script src=\"/js/app.js\" type=\"text/javascript\" defer=\"defer\"></script>"));

    assert!(renderer
        .stylesheets()
        .contains("href=\"/css/print.css\" media=\"print\""));
    assert!(renderer.css_blocks().contains("body { margin: 0 }"));
    assert!(renderer.script_blocks().contains("window.ready = false;"));
    assert!(renderer.script_blocks_bottom().contains("boot();"));
}

#[test]
fn test_home_page_custom_slots() {
    let doc = PageConfig::load(home_page()).unwrap().build().unwrap();
    assert_eq!(
        doc.get("feeds"),
        Some(Value::List(vec![Value::from("/rss.xml")]))
    );
    assert_eq!(
        doc.to_sequence("canonical").unwrap(),
        vec![Value::from("https://kitchen.example/")]
    );
}

#[test]
fn test_missing_page_file_is_an_error() {
    let missing = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("pages/does-not-exist.toml");
    assert!(PageConfig::load(missing).is_err());
}
