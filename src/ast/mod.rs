pub mod builders;
pub mod conditions;
pub mod joins;
pub mod operators;
pub mod query;
pub mod values;

pub use self::builders::{
    all, any, between, eq, eq_col, flag, gt, gte, is_in, is_not_null, is_null, like, like_ci, lt,
    lte, ne, not, not_in, not_like,
};
pub use self::conditions::Condition;
pub use self::joins::Join;
pub use self::operators::{JoinKind, Operator, SortOrder};
pub use self::query::{Column, OrderBy, Query, Source};
pub use self::values::Value;
