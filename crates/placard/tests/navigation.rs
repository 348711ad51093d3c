//! End-to-end tests: component engine plus router working together.

use std::sync::Arc;

use placard::{
    Attributes, ComponentRegistry, InlineSource, RecordingSink, Router, RouterError, Severity,
};

fn demo_components(sink: &Arc<RecordingSink>) -> ComponentRegistry {
    let source = InlineSource::from_entries(&[
        ("home", "<h1>{{title}}</h1>"),
        ("about", "<p>About {{subject}}</p>"),
        ("todo", "<li>{{label}}</li>"),
    ]);
    ComponentRegistry::with_sink(source, sink.clone())
}

#[test]
fn test_full_navigation_flow() {
    let sink = Arc::new(RecordingSink::new());
    let mut components = demo_components(&sink);
    let mut router = Router::with_sink(sink.clone());

    router.map_routes([("/", "home"), ("/about", "about")]);

    router.goto(&mut components, "/").unwrap();
    assert_eq!(router.mount().len(), 1);

    router.goto(&mut components, "/about").unwrap();
    assert_eq!(router.mount().len(), 1);
    assert_eq!(
        router.mount().children()[0].rendered(),
        "<p>About {{subject}}</p>"
    );
    assert!(sink.is_empty());
}

#[test]
fn test_unknown_route_emits_one_diagnostic_and_changes_nothing() {
    let sink = Arc::new(RecordingSink::new());
    let mut components = demo_components(&sink);
    let mut router = Router::with_sink(sink.clone());
    router.add_route("/", "home").unwrap();
    router.goto(&mut components, "/").unwrap();

    let before: Vec<String> = router
        .mount()
        .children()
        .iter()
        .map(|c| c.rendered().to_string())
        .collect();

    let err = router.goto(&mut components, "/missing").unwrap_err();
    assert_eq!(err, RouterError::UnknownRoute("/missing".to_string()));

    let after: Vec<String> = router
        .mount()
        .children()
        .iter()
        .map(|c| c.rendered().to_string())
        .collect();

    assert_eq!(before, after);
    assert_eq!(sink.len(), 1);
    assert_eq!(sink.count_of(Severity::Error), 1);
}

#[test]
fn test_route_table_mutation_between_navigations() {
    let sink = Arc::new(RecordingSink::new());
    let mut components = demo_components(&sink);
    let mut router = Router::with_sink(sink.clone());

    router.add_route("/", "home").unwrap();
    router.add_route("/about", "about").unwrap();
    router.delete_route("/about");

    assert!(router.goto(&mut components, "/about").is_err());
    router.goto(&mut components, "/").unwrap();
    assert_eq!(router.mount().children()[0].component(), "home");
}

#[test]
fn test_mounted_instance_attribute_flow() {
    let sink = Arc::new(RecordingSink::new());
    let mut components = demo_components(&sink);
    let mut page = placard::Container::new();

    let home = components.append("home", &mut page).unwrap();
    home.set_attr("title", "Welcome");
    home.set_attr("title", "Welcome");

    assert_eq!(page.children()[0].rendered(), "<h1>Welcome</h1>");
    // The repeated identical set does not re-render.
    assert_eq!(page.children()[0].render_count(), 1);
}

#[test]
fn test_for_each_batch_into_page_section() {
    let sink = Arc::new(RecordingSink::new());
    let mut components = demo_components(&sink);

    let rows: Vec<Attributes> = ["one", "two", "three"]
        .iter()
        .map(|label| Attributes::from_iter([("label".to_string(), label.to_string())]))
        .collect();

    let mut list = placard::Container::new();
    components.for_each("todo", rows)(&mut list);

    let rendered: Vec<&str> = list.children().iter().map(|c| c.rendered()).collect();
    assert_eq!(rendered, ["<li>one</li>", "<li>two</li>", "<li>three</li>"]);
    assert!(list.children().iter().all(|c| c.render_count() == 1));
}

#[test]
fn test_shared_sink_sees_both_layers() {
    let sink = Arc::new(RecordingSink::new());
    let mut components = demo_components(&sink);
    let mut router = Router::with_sink(sink.clone());
    router.map_routes([("/", "home"), ("/ghost", "phantom")]);

    // Router-level failure.
    let _ = router.goto(&mut components, "/nowhere");
    // Registry-level failure: route resolves, template does not.
    router.goto(&mut components, "/ghost").unwrap();

    assert_eq!(sink.count_of(Severity::Error), 1);
    assert_eq!(sink.count_of(Severity::Warning), 1);
    assert!(router.mount().is_empty());
}

#[test]
fn test_append_data_then_navigate() {
    #[derive(serde::Serialize)]
    struct Page {
        title: String,
    }

    let sink = Arc::new(RecordingSink::new());
    let mut components = demo_components(&sink);
    let mut aside = placard::Container::new();

    components
        .append_data(
            "home",
            &Page {
                title: "Dashboard".into(),
            },
            &mut aside,
        )
        .unwrap();

    assert_eq!(aside.children()[0].rendered(), "<h1>Dashboard</h1>");
}
