/// String-backed identifier: parsing, display and conversions to and from `String`
macro_rules! impls_for_string_newtype {
    ($newtype: ident) => {
        impl std::str::FromStr for $newtype {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_owned()))
            }
        }

        impl From<String> for $newtype {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $newtype {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<$newtype> for String {
            fn from(value: $newtype) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $newtype {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $newtype {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl std::fmt::Display for $newtype {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}
pub(crate) use impls_for_string_newtype;

/// Lets a string identifier be used as a sea-orm column, primary keys included
#[cfg(feature = "sea-orm")]
macro_rules! impls_for_seaorm_newtype {
    ($newtype: ident) => {
        impl From<$newtype> for sea_orm::Value {
            fn from(source: $newtype) -> Self {
                sea_orm::Value::String(Some(Box::new(source.0)))
            }
        }

        // `find_by_id(&id)` and `eq(&id)`
        impl From<&$newtype> for sea_orm::Value {
            fn from(source: &$newtype) -> Self {
                source.0.as_str().into()
            }
        }

        impl From<&$newtype> for $newtype {
            fn from(source: &$newtype) -> Self {
                source.clone()
            }
        }

        impl sea_orm::TryGetable for $newtype {
            fn try_get_by<I: sea_orm::ColIdx>(
                res: &sea_orm::QueryResult,
                idx: I,
            ) -> Result<Self, sea_orm::TryGetError> {
                <String as sea_orm::TryGetable>::try_get_by(res, idx).map(Self)
            }
        }

        impl sea_orm::sea_query::ValueType for $newtype {
            fn try_from(v: sea_orm::Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
                <String as sea_orm::sea_query::ValueType>::try_from(v).map(Self)
            }

            fn type_name() -> String {
                stringify!($newtype).to_owned()
            }

            fn array_type() -> sea_orm::sea_query::ArrayType {
                sea_orm::sea_query::ArrayType::String
            }

            fn column_type() -> sea_orm::sea_query::ColumnType {
                sea_orm::sea_query::ColumnType::String(sea_orm::sea_query::StringLen::None)
            }
        }

        impl sea_orm::sea_query::value::Nullable for $newtype {
            fn null() -> sea_orm::Value {
                sea_orm::Value::String(None)
            }
        }

        // ids are never generated by the database
        impl sea_orm::TryFromU64 for $newtype {
            fn try_from_u64(_: u64) -> Result<Self, sea_orm::DbErr> {
                Err(sea_orm::DbErr::ConvertFromU64(stringify!($newtype)))
            }
        }
    };
}
#[cfg(feature = "sea-orm")]
pub(crate) use impls_for_seaorm_newtype;
