//! Integration tests for the shadow-scope isolation backend.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use callbox_core::traits::ScopeFactory;
use callbox_dom::scope::CONTAINER_TAG;
use callbox_dom::{Document, ShadowScopeFactory, TreeRoot};

// Initialize tracing for tests
fn init_tracing() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[test]
fn test_isolation_in_both_directions() {
    init_tracing();

    let document = Document::new();
    document
        .add_host_style("callbox-widget { display: none !important; }")
        .unwrap();

    let factory = ShadowScopeFactory::new(document.clone());
    let scope = factory.create_scope(".modal { color: blue; }").unwrap();

    // Outward: the injected stylesheet never reaches the host cascade
    assert_eq!(
        document.host_style_texts(),
        vec!["callbox-widget { display: none !important; }".to_string()]
    );

    // Inward: host stylesheets do not apply inside the scope
    let scoped = document.scoped_style_texts(scope.mount_target()).unwrap();
    assert_eq!(scoped, vec![".modal { color: blue; }".to_string()]);

    // Markup placed in the scope is invisible to host-page queries
    let widget_markup = document.create_element("callbox-modal");
    document
        .append_child(scope.mount_target(), &widget_markup)
        .unwrap();
    assert!(document.query_tag("callbox-modal").is_none());
    assert_eq!(
        document.tree_root_of(&widget_markup).unwrap(),
        document.tree_root_of(scope.mount_target()).unwrap()
    );

    // The container itself stays part of the host tree
    assert_eq!(
        document.tree_root_of(scope.container()).unwrap(),
        TreeRoot::Document
    );
}

#[test]
fn test_sequential_scopes_do_not_collide() {
    let document = Document::new();
    let factory = ShadowScopeFactory::new(document.clone());

    let first = factory.create_scope(".first {}").unwrap();
    let first_target = first.mount_target().clone();
    drop(first);

    // The released scope took its subtree with it
    assert!(!first_target.is_connected());
    assert!(document.query_tag(CONTAINER_TAG).is_none());

    // A new scope starts from a clean slate
    let second = factory.create_scope(".second {}").unwrap();
    let scoped = document.scoped_style_texts(second.mount_target()).unwrap();
    assert_eq!(scoped, vec![".second {}".to_string()]);
    assert_eq!(document.child_count(&document.body()).unwrap(), 1);
}
