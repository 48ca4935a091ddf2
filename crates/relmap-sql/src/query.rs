use crate::{bind, Options, Serializer, Statement, StatementKind};

use relmap_core::{
    bail, err, reflect::Reflect, Column, Reference, Result, Schema, Table, TableId, Value,
};

/// Read and delete queries.
///
/// Implemented by [`Table`], which filters by primary key, and by [`Scoped`],
/// which filters a child table by its foreign key.
pub trait Queries {
    /// Builds the statement of `kind`.
    fn statement(&self, kind: StatementKind) -> Result<Statement<'_>>;

    fn select_query(&self, options: &Options) -> Result<String> {
        render(&self.statement(StatementKind::Select)?, options)
    }

    fn delete_query(&self, options: &Options) -> Result<String> {
        render(&self.statement(StatementKind::Delete)?, options)
    }

    fn select_query_with_args<T: Reflect>(
        &self,
        instance: &T,
        options: &Options,
    ) -> Result<(String, Vec<Value>)> {
        render_with_args(&self.statement(StatementKind::Select)?, instance, options)
    }

    fn delete_query_with_args<T: Reflect>(
        &self,
        instance: &T,
        options: &Options,
    ) -> Result<(String, Vec<Value>)> {
        render_with_args(&self.statement(StatementKind::Delete)?, instance, options)
    }
}

/// Insert and update queries, only available on a [`Table`].
pub trait Mutations: Queries {
    fn insert_query(&self, options: &Options) -> Result<String> {
        render(&self.statement(StatementKind::Insert)?, options)
    }

    fn update_query(&self, options: &Options) -> Result<String> {
        render(&self.statement(StatementKind::Update)?, options)
    }

    fn insert_query_with_args<T: Reflect>(
        &self,
        instance: &T,
        options: &Options,
    ) -> Result<(String, Vec<Value>)> {
        render_with_args(&self.statement(StatementKind::Insert)?, instance, options)
    }

    fn update_query_with_args<T: Reflect>(
        &self,
        instance: &T,
        options: &Options,
    ) -> Result<(String, Vec<Value>)> {
        render_with_args(&self.statement(StatementKind::Update)?, instance, options)
    }
}

impl Queries for Table {
    fn statement(&self, kind: StatementKind) -> Result<Statement<'_>> {
        Statement::for_table(kind, self)
    }
}

impl Mutations for Table {}

/// Queries over the child side of a [`Reference`].
#[derive(Debug, Clone, Copy)]
pub struct Scoped<'a> {
    schema: &'a Schema,
    reference: &'a Reference,
}

impl<'a> Scoped<'a> {
    pub fn new(schema: &'a Schema, reference: &'a Reference) -> Scoped<'a> {
        Scoped { schema, reference }
    }

    /// Scopes queries on `child` by its reference to `parent`.
    pub fn between(schema: &'a Schema, child: TableId, parent: TableId) -> Result<Scoped<'a>> {
        let (Some(child), Some(parent)) = (schema.get(child), schema.get(parent)) else {
            bail!("unknown table id: {child:?} or {parent:?}");
        };

        Ok(Scoped::new(schema, child.references_to(parent)?))
    }

    pub fn reference(&self) -> &'a Reference {
        self.reference
    }

    pub fn child(&self) -> Result<&'a Table> {
        self.schema
            .get(self.reference.child())
            .ok_or_else(|| {
                err!(
                    "reference child {:?} is not in the schema",
                    self.reference.child()
                )
            })
    }
}

impl Queries for Scoped<'_> {
    fn statement(&self, kind: StatementKind) -> Result<Statement<'_>> {
        match kind {
            StatementKind::Select => Statement::scoped_select(self.schema, self.reference),
            StatementKind::Delete => Statement::scoped_delete(self.schema, self.reference),
            StatementKind::Insert | StatementKind::Update => {
                bail!("{kind:?} is not available on a reference")
            }
        }
    }
}

fn render(stmt: &Statement<'_>, options: &Options) -> Result<String> {
    Serializer::new(options.clone()).serialize(stmt, None)
}

/// Renders `stmt` in named form, evaluates `instance` against the statement's
/// table and binds the values.
fn render_with_args<T: Reflect>(
    stmt: &Statement<'_>,
    instance: &T,
    options: &Options,
) -> Result<(String, Vec<Value>)> {
    let evaluation = stmt.table.evaluate(instance)?;
    let sql = Serializer::new(options.clone().named(true)).serialize(stmt, Some(&evaluation))?;
    bind(
        &sql,
        stmt.columns().map(Column::name),
        &evaluation,
        &options.placeholder,
        options.ordered,
    )
}
