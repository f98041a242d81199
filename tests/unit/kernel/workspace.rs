use crate::kernel::workspace::{ElementId, PaneKind, PaneState, WorkspaceState};
use crate::kernel::ZoomError;

#[test]
fn resolve_owner_finds_markdown_pane_containing_element() {
    let mut workspace = WorkspaceState::new();
    let mut pane = PaneState::markdown(None, "![[pic.png]]");
    pane.render_element(ElementId::new(7));
    workspace.open_pane(PaneState::markdown(None, "other doc"));
    let index = workspace.open_pane(pane);

    assert_eq!(workspace.resolve_owner(ElementId::new(7)), Ok(index));
}

#[test]
fn resolve_owner_skips_non_markdown_panes() {
    let mut workspace = WorkspaceState::new();
    let mut pane = PaneState::new(PaneKind::Other, None, "");
    pane.render_element(ElementId::new(7));
    workspace.open_pane(pane);

    assert_eq!(
        workspace.resolve_owner(ElementId::new(7)),
        Err(ZoomError::NoOwningDocument)
    );
}

#[test]
fn resolve_owner_reports_missing_element() {
    let workspace = WorkspaceState::new();
    assert_eq!(
        workspace.resolve_owner(ElementId::new(1)),
        Err(ZoomError::NoOwningDocument)
    );
}

#[test]
fn removed_element_is_no_longer_owned() {
    let mut workspace = WorkspaceState::new();
    let mut pane = PaneState::markdown(None, "");
    pane.render_element(ElementId::new(3));
    pane.remove_element(ElementId::new(3));
    workspace.open_pane(pane);

    assert_eq!(
        workspace.resolve_owner(ElementId::new(3)),
        Err(ZoomError::NoOwningDocument)
    );
}
