use super::{Formatter, Literal, ToKql};

/// An entity name such as a table.
///
/// Plain identifiers are written as-is. Anything else is bracket quoted,
/// e.g. `['my-table']`.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> Ident<S> {
    fn is_plain(&self) -> bool {
        let mut chars = self.0.as_ref().chars();

        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return false,
        }

        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
}

impl<S: AsRef<str>> ToKql for Ident<S> {
    fn to_kql(self, f: &mut Formatter<'_>) {
        if self.is_plain() {
            f.dst.push_str(self.0.as_ref());
        } else {
            let quoted = Literal(self.0.as_ref());
            fmt!(f, "[" quoted "]");
        }
    }
}
