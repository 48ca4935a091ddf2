use super::{Comma, Formatter, Ident, Param, Period, ToSql};

use crate::{Statement, StatementKind};

use relmap_core::Column;

/// `column = param`
struct Assignment<'a>(&'a Column);

/// ` AND column = param` for every key column, optionally qualified with the
/// table alias.
struct Filter<'a> {
    key: &'a [&'a Column],
    qualifier: Option<&'a str>,
}

impl ToSql for Assignment<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = Ident(self.0.name());
        let param = Param(self.0);
        fmt!(f, name " = " param);
    }
}

impl ToSql for Filter<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        for &column in self.key {
            let name = Period(self.qualifier.into_iter().chain([column.name()]).map(Ident));
            let param = Param(column);
            fmt!(f, " AND " name " = " param);
        }
    }
}

impl ToSql for &Statement<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = Ident(self.table.name());

        match self.kind {
            StatementKind::Insert => {
                let columns = Comma(self.columns().map(|column| Ident(column.name())));
                let values = Comma(self.columns().map(Param));
                fmt!(f, "INSERT INTO " table " (" columns ") VALUES (" values ")");
            }
            StatementKind::Update => {
                let assignments = Comma(self.rest.iter().copied().map(Assignment));
                let filter = Filter {
                    key: &self.key,
                    qualifier: None,
                };
                fmt!(f, "UPDATE " table " SET " assignments " WHERE 1=1" filter);
            }
            StatementKind::Delete => {
                let filter = Filter {
                    key: &self.key,
                    qualifier: None,
                };
                fmt!(f, "DELETE FROM " table " WHERE 1=1" filter);
            }
            StatementKind::Select => {
                let columns = Comma(self.columns().map(|column| Ident(column.name())));
                let alias = Ident(self.table.alias());
                let filter = Filter {
                    key: &self.key,
                    qualifier: Some(self.table.alias()),
                };
                fmt!(f, "SELECT " columns " FROM " table " AS " alias " WHERE 1=1" filter);
            }
        }
    }
}
