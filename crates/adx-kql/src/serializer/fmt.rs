use super::Formatter;

macro_rules! fmt {
    ($f:expr, $( $fragments:tt )*) => {{
        $(
            ($fragments).to_kql($f);
        )*
    }};
}

pub(super) trait ToKql {
    fn to_kql(self, f: &mut Formatter<'_>);
}

impl ToKql for &str {
    fn to_kql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}
