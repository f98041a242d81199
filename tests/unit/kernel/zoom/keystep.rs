use crate::kernel::zoom::{apply_step, StepDirection};
use crate::kernel::ZoomError;

use StepDirection::{Grow, Shrink};

#[test]
fn grow_annotates_bare_embed() {
    assert_eq!(
        apply_step("![[pic.png]]", Grow).unwrap(),
        "![[pic.png|100]]"
    );
}

#[test]
fn grow_bumps_existing_annotation() {
    assert_eq!(
        apply_step("![[pic.png|100]]", Grow).unwrap(),
        "![[pic.png|200]]"
    );
}

#[test]
fn shrink_sequence_hits_the_floor() {
    assert_eq!(
        apply_step("![[pic.png|200]]", Shrink).unwrap(),
        "![[pic.png|100]]"
    );
    // 100 - 100 lands below the floor; the edit is abandoned, not clamped.
    assert_eq!(
        apply_step("![[pic.png|100]]", Shrink),
        Err(ZoomError::NoOpEdit)
    );
}

#[test]
fn shrink_to_exactly_the_floor_is_allowed() {
    assert_eq!(
        apply_step("![[pic.png|150]]", Shrink).unwrap(),
        "![[pic.png|50]]"
    );
    assert_eq!(
        apply_step("![[pic.png|149]]", Shrink),
        Err(ZoomError::NoOpEdit)
    );
}

#[test]
fn shrink_on_unannotated_line_still_inserts_default() {
    // Direction is ignored when the line has no annotation yet.
    assert_eq!(
        apply_step("![[pic.png]]", Shrink).unwrap(),
        "![[pic.png|100]]"
    );
}

#[test]
fn line_without_closing_bracket_is_unchanged() {
    assert_eq!(apply_step("plain text", Grow).unwrap(), "plain text");
    assert_eq!(apply_step("plain text", Shrink).unwrap(), "plain text");
}

#[test]
fn insertion_targets_the_first_closing_bracket() {
    // The pattern is syntax-agnostic: any bracket on the line qualifies.
    assert_eq!(
        apply_step("see [note] then ![[pic.png]]", Grow).unwrap(),
        "see [note|100] then ![[pic.png]]"
    );
}

#[test]
fn existing_annotation_anywhere_on_the_line_wins() {
    assert_eq!(
        apply_step("text ![](http://x/a.png) ![[b.png|100]]", Grow).unwrap(),
        "text ![](http://x/a.png) ![[b.png|200]]"
    );
}
