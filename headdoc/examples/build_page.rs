//! Build a small page with the fluent API and print it
//!
//! Run with: cargo run --example build_page

use headdoc::{DocumentModel, ErrorPage, Section};

fn main() {
    let mut doc = DocumentModel::new();
    doc.set_language("en")
        .set_charset("UTF-8")
        .set_title("Dashboard")
        .append_title("Acme")
        .add_meta("viewport", "width=device-width, initial-scale=1", false)
        .add_stylesheet("/css/app.css", None, false)
        .add_script("/js/app.js", "module", false, true, false);

    if let Err(err) = doc.remove_container("title") {
        let page = ErrorPage::from(&err);
        eprintln!("{}: {}", page.status_line(), page.message);
    }

    let renderer = doc.renderer();
    print!("{}", renderer.doctype());
    print!("{}", renderer.html_open());
    println!("<head>");
    for section in [
        Section::Charset,
        Section::Title,
        Section::Metas,
        Section::Stylesheets,
        Section::Scripts,
    ] {
        print!("{}", renderer.section(section));
    }
    println!("</head>");
    println!("{}", renderer.html_close());
}
