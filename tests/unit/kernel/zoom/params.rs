use crate::kernel::zoom::ZoomParams;

#[test]
fn remote_probe_captures_existing_width() {
    let params = ZoomParams::remote("https://x.test/cat.png");
    let text = "intro ![alt](https://x.test/cat.png?width=250) outro";
    assert_eq!(params.existing_size(text), Some(250));
}

#[test]
fn remote_probe_misses_bare_url() {
    let params = ZoomParams::remote("https://x.test/cat.png");
    assert_eq!(params.existing_size("![alt](https://x.test/cat.png)"), None);
}

#[test]
fn remote_replace_existing_substitutes_only_the_number() {
    let params = ZoomParams::remote("https://x.test/cat.png");
    let text = "![alt](https://x.test/cat.png?width=250)";
    let out = params.replace_existing(250, 275).apply(text);
    assert_eq!(out, "![alt](https://x.test/cat.png?width=275)");
}

#[test]
fn remote_replace_missing_appends_width_param() {
    let params = ZoomParams::remote("https://x.test/cat.png");
    let out = params.replace_missing(400).apply("![alt](https://x.test/cat.png)");
    assert_eq!(out, "![alt](https://x.test/cat.png?width=400)");
}

#[test]
fn attachment_name_is_regex_escaped() {
    let params = ZoomParams::attachment("shot (1).png");
    assert_eq!(params.existing_size("![[shot (1).png|120]]"), Some(120));
}

#[test]
fn attachment_replace_missing_inserts_pipe_size() {
    let params = ZoomParams::attachment("pic.png");
    let out = params.replace_missing(300).apply("before ![[pic.png]] after");
    assert_eq!(out, "before ![[pic.png|300]] after");
}

#[test]
fn attachment_replace_existing_substitutes_only_the_number() {
    let params = ZoomParams::attachment("pic.png");
    let out = params.replace_existing(120, 145).apply("![[pic.png|120]]");
    assert_eq!(out, "![[pic.png|145]]");
}

#[test]
fn annotated_text_hits_existing_branch_again() {
    // Applying the no-size rule once must flip later probes to the
    // existing-size branch.
    let params = ZoomParams::attachment("pic.png");
    let once = params.replace_missing(300).apply("![[pic.png]]");
    assert_eq!(params.existing_size(&once), Some(300));
}

#[test]
fn replace_rule_touches_first_occurrence_only() {
    let params = ZoomParams::attachment("pic.png");
    let text = "![[pic.png]] and ![[pic.png]]";
    let out = params.replace_missing(200).apply(text);
    assert_eq!(out, "![[pic.png|200]] and ![[pic.png]]");
}
