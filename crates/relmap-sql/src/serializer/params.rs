use super::{Formatter, ToSql};

use relmap_core::Column;

/// The parameter bound to a column.
///
/// In named mode this is `:column`, which [`bind`](crate::bind) later
/// resolves. Otherwise it is the bare placeholder; numbering only happens
/// while binding.
pub(super) struct Param<'a>(pub(super) &'a Column);

impl ToSql for Param<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let options = &f.serializer.options;

        if options.named {
            f.dst.push(':');
            f.dst.push_str(self.0.name());
        } else {
            f.dst.push_str(&options.placeholder);
        }
    }
}
