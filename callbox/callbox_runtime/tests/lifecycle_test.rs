//! Integration tests for the full loader stack: lifecycle controller over
//! the real shadow-scope backend, with a stub modal standing in for the
//! opaque call-assistance component.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use callbox_core::error::Result;
use callbox_core::traits::{ComponentHandle, RootComponent};
use callbox_core::types::{MountPhase, WidgetSettings};
use callbox_dom::scope::CONTAINER_TAG;
use callbox_dom::{Document, NodeRef};
use callbox_runtime::config::DEFAULT_STYLE_TEXT;
use callbox_runtime::{Callbox, LoaderConfig};

// Initialize tracing for tests
fn init_tracing() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// A stub modal that renders one `callbox-modal` element into its target
/// and removes it again on destroy.
#[derive(Default)]
struct StubModal {
    received: Mutex<Vec<WidgetSettings>>,
    targets: Mutex<Vec<NodeRef>>,
    destroyed: Arc<AtomicUsize>,
}

impl RootComponent<NodeRef> for StubModal {
    fn instantiate(
        &self,
        target: &NodeRef,
        props: WidgetSettings,
    ) -> Result<Box<dyn ComponentHandle>> {
        let document = target.document().clone();
        let modal = document.create_element("callbox-modal");
        if let Some(title) = &props.modal_title {
            document.set_text(&modal, title)?;
        }
        document.append_child(target, &modal)?;

        self.received.lock().push(props);
        self.targets.lock().push(target.clone());

        Ok(Box::new(StubHandle {
            document,
            modal,
            destroyed: self.destroyed.clone(),
        }))
    }
}

struct StubHandle {
    document: Document,
    modal: NodeRef,
    destroyed: Arc<AtomicUsize>,
}

impl ComponentHandle for StubHandle {
    fn destroy(self: Box<Self>) {
        let _ = self.document.remove_node(&self.modal);
        self.destroyed.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_full_lifecycle_against_the_dom_backend() {
    init_tracing();

    let document = Document::new();
    document
        .add_host_style("body { font-family: serif; }")
        .unwrap();

    let modal = Arc::new(StubModal::default());
    let callbox =
        Callbox::with_document(document.clone(), LoaderConfig::default(), modal.clone())
            .unwrap();

    assert_eq!(document.child_count(&document.body()).unwrap(), 0);

    // Mount: the host document gains exactly one new top-level node
    let settings = WidgetSettings {
        modal_title: Some("Talk to us".to_string()),
        api_public_key: Some("pk_test".to_string()),
        ..Default::default()
    };
    let first = callbox.mount(settings.clone()).unwrap();
    assert!(first.is_some());
    assert_eq!(callbox.phase(), MountPhase::Mounted);
    assert_eq!(document.child_count(&document.body()).unwrap(), 1);

    // The container is visible to the host page, the widget markup is not
    assert!(document.query_tag(CONTAINER_TAG).is_some());
    assert!(document.query_tag("callbox-modal").is_none());

    // Style isolation: the widget stylesheet applies inside the scope only
    let target = modal.targets.lock()[0].clone();
    let scoped = document.scoped_style_texts(&target).unwrap();
    assert_eq!(scoped, vec![DEFAULT_STYLE_TEXT.to_string()]);
    assert_eq!(
        document.host_style_texts(),
        vec!["body { font-family: serif; }".to_string()]
    );

    // Pass-through fidelity
    assert_eq!(modal.received.lock()[0], settings);

    // Double mount: no handle, no DOM change, settings never forwarded
    let second = callbox
        .mount(WidgetSettings {
            modal_title: Some("ignored".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert!(second.is_none());
    assert_eq!(document.child_count(&document.body()).unwrap(), 1);
    assert_eq!(modal.received.lock().len(), 1);

    // Unmount: destroy runs once, the container is detached
    callbox.unmount().unwrap();
    assert_eq!(modal.destroyed.load(Ordering::SeqCst), 1);
    assert_eq!(callbox.phase(), MountPhase::Unmounted);
    assert_eq!(document.child_count(&document.body()).unwrap(), 0);
    assert!(document.query_tag(CONTAINER_TAG).is_none());

    // A second unmount is a silent no-op
    callbox.unmount().unwrap();
    assert_eq!(modal.destroyed.load(Ordering::SeqCst), 1);

    // Re-mounting succeeds identically to the first time
    let third = callbox.mount(settings).unwrap();
    assert!(third.is_some());
    assert_ne!(first, third);
    assert_eq!(document.child_count(&document.body()).unwrap(), 1);
}

#[test]
fn test_mount_json_uses_embed_surface_field_names() {
    let modal = Arc::new(StubModal::default());
    let callbox = Callbox::new(LoaderConfig::default(), modal.clone()).unwrap();

    let id = callbox
        .mount_json(r#"{ "modalTitle": "Need a hand?", "apiPublicKey": "pk_test" }"#)
        .unwrap();
    assert!(id.is_some());

    let received = modal.received.lock();
    assert_eq!(received[0].modal_title.as_deref(), Some("Need a hand?"));
    assert_eq!(received[0].api_public_key.as_deref(), Some("pk_test"));
    assert!(received[0].assistant_id.is_none());
}

#[test]
fn test_identity_enforcing_loader_rejects_anonymous_mounts() {
    let document = Document::new();
    let modal = Arc::new(StubModal::default());
    let config = LoaderConfig {
        enforce_identity: true,
        ..Default::default()
    };
    let callbox = Callbox::with_document(document.clone(), config, modal.clone()).unwrap();

    let err = callbox.mount(WidgetSettings::default()).unwrap_err();
    let core_err = err.downcast_ref::<callbox_core::Error>().unwrap();
    assert!(matches!(
        core_err,
        callbox_core::Error::Config(callbox_core::ConfigError::MissingApiKey)
    ));

    // Nothing was mounted, nothing was rendered
    assert_eq!(callbox.phase(), MountPhase::Unmounted);
    assert_eq!(document.child_count(&document.body()).unwrap(), 0);
    assert!(modal.received.lock().is_empty());
}
