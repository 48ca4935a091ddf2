use super::{Reflect, Shape};
use crate::{Column, Error, Result, Strategy, Table};

use regex::Regex;
use std_util::str;

/// Alias length used when a non-positive length is configured.
const DEFAULT_ALIAS_LEN: usize = 1;

/// How a table name is derived from a type name.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NameStrategy {
    /// `SpaceStation` becomes `space_station`
    #[default]
    Snake,

    /// `SpaceStation` becomes `spaceStation`
    Camel,
}

/// Letter case of a derived table alias.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CaseStrategy {
    #[default]
    Upper,
    Lower,
}

/// Builds [`Table`]s from structural descriptors.
///
/// With no options set, the table name is the pluralized snake_case type
/// name, the alias is the upper-cased first letter of the table name and
/// column names are the lower-cased member names.
#[derive(Debug, Clone)]
pub struct Reflector {
    /// Explicit table name
    table_name: Option<String>,

    name_strategy: NameStrategy,

    plural: bool,

    /// Explicit alias
    alias: Option<String>,

    alias_case: CaseStrategy,

    alias_len: i64,

    /// Tag key whose value renames a member's column
    tag: Option<String>,

    exclude_members: Vec<String>,

    /// Matched against the resolved column name
    exclude_member_pattern: Option<Regex>,

    exclude_accessors: Vec<String>,

    /// Matched against the accessor name as declared
    exclude_accessor_pattern: Option<Regex>,
}

impl Default for Reflector {
    fn default() -> Self {
        Self {
            table_name: None,
            name_strategy: NameStrategy::Snake,
            plural: true,
            alias: None,
            alias_case: CaseStrategy::Upper,
            alias_len: DEFAULT_ALIAS_LEN as i64,
            tag: None,
            exclude_members: vec![],
            exclude_member_pattern: None,
            exclude_accessors: vec![],
            exclude_accessor_pattern: None,
        }
    }
}

impl Reflector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `name` as the table name instead of deriving one.
    pub fn table_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.table_name = Some(name.into());
        self
    }

    pub fn infer_table_name(&mut self, strategy: NameStrategy, plural: bool) -> &mut Self {
        self.name_strategy = strategy;
        self.plural = plural;
        self
    }

    /// Use `alias` instead of deriving one from the table name.
    pub fn alias(&mut self, alias: impl Into<String>) -> &mut Self {
        self.alias = Some(alias.into());
        self
    }

    /// Derive the alias from the first `len` characters of the table name.
    /// A non-positive `len` falls back to a single character.
    pub fn infer_alias(&mut self, strategy: CaseStrategy, len: i64) -> &mut Self {
        self.alias_case = strategy;
        self.alias_len = len;
        self
    }

    /// Rename member columns with the value of their `key` tag, if any.
    pub fn tag(&mut self, key: impl Into<String>) -> &mut Self {
        self.tag = Some(key.into());
        self
    }

    pub fn exclude_members(
        &mut self,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> &mut Self {
        self.exclude_members.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn exclude_member_pattern(&mut self, pattern: Regex) -> &mut Self {
        self.exclude_member_pattern = Some(pattern);
        self
    }

    pub fn exclude_accessors(
        &mut self,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> &mut Self {
        self.exclude_accessors
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn exclude_accessor_pattern(&mut self, pattern: Regex) -> &mut Self {
        self.exclude_accessor_pattern = Some(pattern);
        self
    }

    /// Builds the table for `instance`'s type. The instance is only used to
    /// pick the type.
    pub fn reflect<T: Reflect>(&self, instance: &T) -> Result<Table> {
        let _ = instance;
        self.reflect_type::<T>()
    }

    pub fn reflect_type<T: Reflect>(&self) -> Result<Table> {
        self.build(&T::shape())
    }

    /// Builds a table from a shape.
    pub fn build(&self, shape: &Shape) -> Result<Table> {
        if !shape.is_struct() {
            return Err(Error::not_a_structure(shape.type_name));
        }

        let name = self.resolve_table_name(shape.ident);
        let alias = self.resolve_alias(&name);
        let mut table = Table::new(shape.type_name, name, alias);

        let has_key = shape.members.iter().any(|member| member.key);

        for member in &shape.members {
            let column_name = self
                .tag
                .as_deref()
                .and_then(|key| member.tag(key))
                .map(String::from)
                .unwrap_or_else(|| member.name.to_lowercase());

            if self.is_member_excluded(member.name, &column_name) {
                tracing::trace!(member = member.name, "member excluded");
                continue;
            }

            let primary_key = if has_key {
                member.key
            } else {
                column_name == "id"
            };

            table.add_column(
                Column::new(column_name, member.name)
                    .with_field_type(member.ty)
                    .with_primary_key(primary_key),
            )?;
        }

        for accessor in &shape.accessors {
            if accessor.record {
                continue;
            }

            if self.is_accessor_excluded(accessor.name) {
                tracing::trace!(accessor = accessor.name, "accessor excluded");
                continue;
            }

            table.add_column(
                Column::new(accessor.name.to_lowercase(), accessor.name)
                    .with_strategy(Strategy::ComputedMember)
                    .with_field_type(accessor.ty),
            )?;
        }

        tracing::debug!(
            type_name = shape.type_name,
            table = table.name(),
            alias = table.alias(),
            columns = table.column_count(),
            "reflected table"
        );

        Ok(table)
    }

    fn resolve_table_name(&self, ident: &str) -> String {
        if let Some(name) = &self.table_name {
            return name.clone();
        }

        let mut name = str::snake_case(ident);
        if self.plural {
            name = str::pluralize(&name);
        }

        match self.name_strategy {
            NameStrategy::Snake => name,
            NameStrategy::Camel => str::camel_case(&name),
        }
    }

    fn resolve_alias(&self, table_name: &str) -> String {
        if let Some(alias) = &self.alias {
            return alias.clone();
        }

        let len = usize::try_from(self.alias_len)
            .ok()
            .filter(|len| *len > 0)
            .unwrap_or(DEFAULT_ALIAS_LEN);
        let prefix: String = table_name.chars().take(len).collect();

        match self.alias_case {
            CaseStrategy::Upper => prefix.to_uppercase(),
            CaseStrategy::Lower => prefix.to_lowercase(),
        }
    }

    fn is_member_excluded(&self, member: &str, column_name: &str) -> bool {
        self.exclude_members
            .iter()
            .any(|name| name == member || name == column_name)
            || self
                .exclude_member_pattern
                .as_ref()
                .is_some_and(|pattern| pattern.is_match(column_name))
    }

    fn is_accessor_excluded(&self, accessor: &str) -> bool {
        self.exclude_accessors.iter().any(|name| name == accessor)
            || self
                .exclude_accessor_pattern
                .as_ref()
                .is_some_and(|pattern| pattern.is_match(accessor))
    }
}
