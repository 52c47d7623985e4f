use super::{Formatter, ToKql};

/// A single quoted string literal.
pub(super) struct Literal<S>(pub(super) S);

impl<S: AsRef<str>> ToKql for Literal<S> {
    fn to_kql(self, f: &mut Formatter<'_>) {
        f.dst.push('\'');

        for c in self.0.as_ref().chars() {
            match c {
                '\\' => f.dst.push_str("\\\\"),
                '\'' => f.dst.push_str("\\'"),
                '\n' => f.dst.push_str("\\n"),
                '\r' => f.dst.push_str("\\r"),
                '\t' => f.dst.push_str("\\t"),
                c => f.dst.push(c),
            }
        }

        f.dst.push('\'');
    }
}
