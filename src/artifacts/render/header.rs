use crate::artifacts::diff::diff_target::DiffTarget;
use crate::artifacts::render::markup::escape_into;
use derive_new::new;

const OLD_PREFIX: &str = "i";
const NEW_PREFIX: &str = "w";

/// The git-style header above a rendered file diff.
#[derive(Debug, Clone, new)]
pub struct PatchHeader<'t> {
    old: &'t DiffTarget,
    new: &'t DiffTarget,
}

impl PatchHeader<'_> {
    pub fn lines(&self) -> Vec<String> {
        let (old, new) = (self.old, self.new);
        let mut lines = vec![format!(
            "diff --git {} {}",
            old.prefixed_path(OLD_PREFIX),
            new.prefixed_path(NEW_PREFIX)
        )];

        if !old.exists() {
            lines.push(format!("new file mode {}", new.pretty_mode()));
        } else if !new.exists() {
            lines.push(format!("deleted file mode {}", old.pretty_mode()));
        } else if old.mode != new.mode {
            lines.push(format!("old mode {}", old.pretty_mode()));
            lines.push(format!("new mode {}", new.pretty_mode()));
        }

        let mut oid_range = format!(
            "index {}..{}",
            old.oid().to_short_oid(),
            new.oid().to_short_oid()
        );
        if old.mode == new.mode {
            oid_range.push_str(&format!(" {}", old.pretty_mode()));
        }
        lines.push(oid_range);

        lines.push(format!("--- {}", old.diff_path(OLD_PREFIX)));
        lines.push(format!("+++ {}", new.diff_path(NEW_PREFIX)));

        lines
    }

    pub fn to_markup(&self) -> String {
        let mut out = String::from(r#"<div class="patch-header">"#);
        for line in self.lines() {
            out.push_str("<p>");
            escape_into(&mut out, &line);
            out.push_str("</p>");
        }
        out.push_str("</div>");
        out
    }
}
