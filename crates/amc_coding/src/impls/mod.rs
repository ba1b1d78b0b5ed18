//! Reflection for common standard types.
//!
//! - scalars: `bool`, the integer types, `f32`, `f64`, `String`,
//!   [`Date`](crate::value::Date), [`Data`](crate::value::Data) and
//!   [`Value`](crate::value::Value) itself.
//! - ordered collections: `Vec<T>`, `VecDeque<T>`, and the immutable `Box<[T]>`.
//! - keyed collections: `BTreeMap<String, V>` and `HashMap<String, V>`.
//! - `Option<T>`, usable as a field that may be absent.

mod list;
mod map;
mod option;
mod scalars;
