use super::{Formatter, Ident, Literal, ToKql};

use crate::stmt;

impl ToKql for &stmt::CreateOrAlterMapping {
    fn to_kql(self, f: &mut Formatter<'_>) {
        let table = Ident(&self.table);
        let kind = self.kind.as_command_str();
        let name = Literal(&self.name);
        let mapping = Literal(format!("[{}]", self.mapping));

        fmt!(f, ".create-or-alter table " table " ingestion " kind " mapping " name " " mapping);
    }
}

impl ToKql for &stmt::ShowMapping {
    fn to_kql(self, f: &mut Formatter<'_>) {
        let table = Ident(&self.table);
        let kind = self.kind.as_command_str();
        let name = Literal(&self.name);

        fmt!(f, ".show table " table " ingestion " kind " mapping " name);
    }
}

impl ToKql for &stmt::DropMapping {
    fn to_kql(self, f: &mut Formatter<'_>) {
        let table = Ident(&self.table);
        let kind = self.kind.as_command_str();
        let name = Literal(&self.name);

        fmt!(f, ".drop table " table " ingestion " kind " mapping " name);
    }
}
