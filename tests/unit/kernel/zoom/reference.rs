use crate::kernel::workspace::{ElementId, ImageElement};
use crate::kernel::zoom::ImageRef;
use crate::kernel::ZoomError;

fn element(src: &str) -> ImageElement {
    ImageElement::new(ElementId::new(1), src)
}

#[test]
fn http_source_resolves_to_remote() {
    let resolved = ImageRef::resolve(&element("https://example.test/cat.png")).unwrap();
    assert_eq!(
        resolved,
        ImageRef::Remote {
            url: "https://example.test/cat.png".to_string()
        }
    );
}

#[test]
fn app_source_resolves_to_attachment_name() {
    let resolved = ImageRef::resolve(&element("app://local/vault/pics/cat.png?1632"))
        .unwrap();
    assert_eq!(
        resolved,
        ImageRef::Attachment {
            name: "cat.png".to_string()
        }
    );
}

#[test]
fn attachment_name_is_percent_decoded() {
    let resolved = ImageRef::resolve(&element("app://local/vault/my%20cat.png?99")).unwrap();
    assert_eq!(
        resolved,
        ImageRef::Attachment {
            name: "my cat.png".to_string()
        }
    );
}

#[test]
fn remote_marker_takes_precedence_over_local_scheme() {
    // Detection order is fixed: the remote check runs first.
    let resolved = ImageRef::resolve(&element("app://local/http-cache/cat.png")).unwrap();
    assert!(matches!(resolved, ImageRef::Remote { .. }));
}

#[test]
fn drawing_embed_derives_name_from_fallback_source() {
    let mut el = element("blob:internal-render-target");
    el.classes = vec!["drawing-embed-svg".to_string()];
    el.fallback_src = Some("vault/drawings/floor plan.svg".to_string());

    let resolved = ImageRef::resolve(&el).unwrap();
    assert_eq!(
        resolved,
        ImageRef::DrawingEmbed {
            name: "floor plan".to_string()
        }
    );
}

#[test]
fn drawing_embed_requires_marker_class() {
    let mut el = element("blob:internal-render-target");
    el.fallback_src = Some("vault/drawings/plan.svg".to_string());

    assert_eq!(
        ImageRef::resolve(&el),
        Err(ZoomError::UnresolvableReference(
            "blob:internal-render-target".to_string()
        ))
    );
}

#[test]
fn unknown_source_is_unresolvable() {
    assert!(matches!(
        ImageRef::resolve(&element("data:image/png;base64,AAAA")),
        Err(ZoomError::UnresolvableReference(_))
    ));
}

#[test]
fn drawing_embed_uses_attachment_syntax() {
    let mut el = element("blob:x");
    el.classes = vec!["drawing-embed".to_string()];
    el.fallback_src = Some("plan.svg".to_string());

    let params = ImageRef::resolve(&el).unwrap().zoom_params();
    assert_eq!(params.existing_size("![[plan|240]]"), Some(240));
}

#[test]
fn percent_decode_handles_plain_and_invalid_escapes() {
    assert_eq!(super::percent_decode("plain.png"), "plain.png");
    assert_eq!(super::percent_decode("a%2Bb.png"), "a+b.png");
    // A malformed escape is carried through untouched.
    assert_eq!(super::percent_decode("bad%zz.png"), "bad%zz.png");
    assert_eq!(super::percent_decode("trailing%2"), "trailing%2");
}
