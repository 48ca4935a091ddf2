mod accessor;
pub(crate) use accessor::AccessorSet;

mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::Field;

mod model;
pub(crate) use model::{Model, ModelKind};

mod model_attr;
pub(crate) use model_attr::ModelAttr;

mod tag;
pub(crate) use tag::Tag;
