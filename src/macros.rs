/// Builds a [`Value`](crate::Value) from a literal-like expression.
///
/// `true`/`false` become [`Value::Bool`](crate::Value::Bool); bracketed and
/// braced forms nest; anything else goes through `Value::from`.
///
/// ```rust
/// use vimson::{vimson, Value};
///
/// let value = vimson!({
///     "name": "Alice",
///     "tags": ["a", "b"],
///     "active": true,
/// });
/// assert!(value.is_dict());
/// ```
#[macro_export]
macro_rules! vimson {
    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::List(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::vimson!($elem)),*])
    };

    ({}) => {
        $crate::Value::Dict($crate::Dict::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut dict = $crate::Dict::new();
        $(
            dict.insert($key.to_string(), $crate::vimson!($value));
        )*
        $crate::Value::Dict(dict)
    }};

    // Fallback for plain expressions (numbers, strings, prebuilt values).
    ($e:expr) => {
        $crate::Value::from($e)
    };
}
