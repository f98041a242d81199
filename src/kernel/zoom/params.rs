use regex::Regex;

/// Query-style parameter carrying the size of a remote image.
const REMOTE_SIZE_PARAM: &str = "?width=";

/// One literal text substitution, applied to the first occurrence only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceRule {
    pub from: String,
    pub to: String,
}

impl ReplaceRule {
    pub fn apply(&self, text: &str) -> String {
        text.replacen(&self.from, &self.to, 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnnotationStyle {
    /// `<url>?width=NNN` appended after the URL.
    RemoteQuery,
    /// `![[<name>|NNN]]` embed token.
    AttachmentPipe,
}

/// How to find and rewrite the size annotation for one image reference.
/// Built fresh per zoom event, never persisted.
#[derive(Debug, Clone)]
pub struct ZoomParams {
    size_probe: Regex,
    style: AnnotationStyle,
    reference: String,
}

impl ZoomParams {
    pub fn remote(url: &str) -> Self {
        let pattern = format!(r"{}\?width=(\d+)", regex::escape(url));
        Self {
            size_probe: compile(&pattern),
            style: AnnotationStyle::RemoteQuery,
            reference: url.to_string(),
        }
    }

    pub fn attachment(name: &str) -> Self {
        // File names may contain regex metacharacters; escape before
        // embedding.
        let pattern = format!(r"!\[\[{}\|(\d+)\]\]", regex::escape(name));
        Self {
            size_probe: compile(&pattern),
            style: AnnotationStyle::AttachmentPipe,
            reference: name.to_string(),
        }
    }

    /// Current annotated size, if the document already carries one for this
    /// reference.
    pub fn existing_size(&self, text: &str) -> Option<u32> {
        self.size_probe
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// Replace rule for the annotation-exists case; substitutes only the
    /// numeric value.
    pub fn replace_existing(&self, old: u32, new: u32) -> ReplaceRule {
        let r = &self.reference;
        match self.style {
            AnnotationStyle::RemoteQuery => ReplaceRule {
                from: format!("{r}{REMOTE_SIZE_PARAM}{old}"),
                to: format!("{r}{REMOTE_SIZE_PARAM}{new}"),
            },
            AnnotationStyle::AttachmentPipe => ReplaceRule {
                from: format!("![[{r}|{old}]]"),
                to: format!("![[{r}|{new}]]"),
            },
        }
    }

    /// Replace rule for the no-annotation-yet case; rewrites the bare
    /// reference syntax to carry the size.
    pub fn replace_missing(&self, size: u32) -> ReplaceRule {
        let r = &self.reference;
        match self.style {
            AnnotationStyle::RemoteQuery => ReplaceRule {
                from: r.clone(),
                to: format!("{r}{REMOTE_SIZE_PARAM}{size}"),
            },
            AnnotationStyle::AttachmentPipe => ReplaceRule {
                from: format!("![[{r}]]"),
                to: format!("![[{r}|{size}]]"),
            },
        }
    }
}

fn compile(pattern: &str) -> Regex {
    // The reference half is escaped and the rest is a fixed literal suffix,
    // so the pattern is always well-formed.
    Regex::new(pattern).expect("size probe pattern is valid")
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/zoom/params.rs"]
mod tests;
