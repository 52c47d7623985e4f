#[macro_use]
mod fmt;
use fmt::ToKql;

mod ident;
use ident::Ident;

mod literal;
use literal::Literal;

mod statement;

use crate::stmt::Statement;

use adx_core::driver::Operation;

/// Serialize a statement to a Kusto management command
#[derive(Debug, Default, Clone, Copy)]
pub struct Serializer {
    _priv: (),
}

struct Formatter<'a> {
    /// Where to write the serialized command
    dst: &'a mut String,
}

impl Serializer {
    pub fn new() -> Serializer {
        Serializer { _priv: () }
    }

    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();
        let mut f = Formatter { dst: &mut ret };

        match stmt {
            Statement::CreateOrAlterMapping(stmt) => stmt.to_kql(&mut f),
            Statement::DropMapping(stmt) => stmt.to_kql(&mut f),
            Statement::ShowMapping(stmt) => stmt.to_kql(&mut f),
        }

        ret
    }

    /// Serialize a driver operation without first converting it to a
    /// [`Statement`].
    pub fn serialize_operation(&self, op: &Operation) -> String {
        let mut ret = String::new();
        let mut f = Formatter { dst: &mut ret };

        match op {
            Operation::CreateOrAlterMapping(op) => op.to_kql(&mut f),
            Operation::DropMapping(op) => op.to_kql(&mut f),
            Operation::ShowMapping(op) => op.to_kql(&mut f),
        }

        ret
    }
}
