use super::Slot;
use crate::Value;

use chrono::{DateTime, NaiveDate, Utc};
use std::{rc::Rc, sync::Arc};

/// Reads a member or accessor result into a [`Slot`].
///
/// Scalars become values. `Option`, `&T`, `Box`, `Rc` and `Arc` are
/// pointer-like: an absent value becomes `Value::Null`, a present one is
/// dereferenced once and read as the inner type. Derived records report
/// [`Slot::Record`].
pub trait Extract {
    /// True for nested structures read by value.
    const RECORD: bool = false;

    fn extract(&self) -> Slot;
}

macro_rules! impl_extract_value {
    ( $($t:ty),+ ) => {
        $(
            impl Extract for $t {
                fn extract(&self) -> Slot {
                    Slot::Value(Value::from(self.clone()))
                }
            }
        )+
    };
}

impl_extract_value!(
    bool,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    char,
    String,
    Vec<u8>,
    DateTime<Utc>,
    NaiveDate
);

impl Extract for str {
    fn extract(&self) -> Slot {
        Slot::Value(Value::from(self))
    }
}

impl Extract for Value {
    fn extract(&self) -> Slot {
        Slot::Value(self.clone())
    }
}

impl<T: Extract> Extract for Option<T> {
    fn extract(&self) -> Slot {
        match self {
            Some(inner) => inner.extract(),
            None => Slot::Value(Value::Null),
        }
    }
}

impl<T: Extract + ?Sized> Extract for &T {
    fn extract(&self) -> Slot {
        (**self).extract()
    }
}

impl<T: Extract + ?Sized> Extract for Box<T> {
    fn extract(&self) -> Slot {
        (**self).extract()
    }
}

impl<T: Extract + ?Sized> Extract for Rc<T> {
    fn extract(&self) -> Slot {
        (**self).extract()
    }
}

impl<T: Extract + ?Sized> Extract for Arc<T> {
    fn extract(&self) -> Slot {
        (**self).extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Engine;

    impl Extract for Engine {
        const RECORD: bool = true;

        fn extract(&self) -> Slot {
            Slot::Record
        }
    }

    #[test]
    fn scalars_become_values() {
        assert_eq!(42_i32.extract(), Slot::Value(Value::I64(42)));
        assert_eq!(
            "warp".to_string().extract(),
            Slot::Value(Value::String("warp".into()))
        );
        assert_eq!(u64::MAX.extract(), Slot::Value(Value::U64(u64::MAX)));
    }

    #[test]
    fn pointer_like_none_is_null() {
        assert_eq!(None::<String>.extract(), Slot::Value(Value::Null));
        assert_eq!(None::<Box<Engine>>.extract(), Slot::Value(Value::Null));
    }

    #[test]
    fn pointer_like_some_is_dereferenced() {
        assert_eq!(Some(7_u8).extract(), Slot::Value(Value::I64(7)));
        assert_eq!(Box::new(1.5_f64).extract(), Slot::Value(Value::F64(1.5)));
        assert_eq!(Some(Box::new(Engine)).extract(), Slot::Record);
    }

    #[test]
    fn only_records_by_value_are_records() {
        assert!(Engine::RECORD);
        assert!(!<Option<Engine>>::RECORD);
        assert!(!<Box<Engine>>::RECORD);
    }
}
