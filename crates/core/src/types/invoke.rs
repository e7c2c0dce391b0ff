//! Methods callable by name, for `invoke_method`

use crate::errors::{Error, Result};
use serde_json::Value;

/// A type whose methods can be looked up by name at runtime.
pub trait Invoke {
    type Output;

    /// Call the method `method` with `args`.
    ///
    /// Fails with [`Error::UnknownMethod`] when the type has no such method
    /// and with [`Error::InvalidArgument`] when the arguments do not fit.
    fn invoke(&self, method: &str, args: &[Value]) -> Result<Self::Output>;
}

impl<T: Invoke + ?Sized> Invoke for &T {
    type Output = T::Output;

    fn invoke(&self, method: &str, args: &[Value]) -> Result<Self::Output> {
        (**self).invoke(method, args)
    }
}

impl Invoke for String {
    type Output = String;

    fn invoke(&self, method: &str, args: &[Value]) -> Result<String> {
        self.as_str().invoke(method, args)
    }
}

/// String methods, named after their JavaScript counterparts.
impl Invoke for str {
    type Output = String;

    fn invoke(&self, method: &str, args: &[Value]) -> Result<String> {
        match method {
            "toUpperCase" => Ok(self.to_uppercase()),
            "toLowerCase" => Ok(self.to_lowercase()),
            "trim" => Ok(self.trim().to_string()),
            "trimStart" => Ok(self.trim_start().to_string()),
            "trimEnd" => Ok(self.trim_end().to_string()),
            "repeat" => Ok(self.repeat(count_arg(method, args, 0)?)),
            "concat" => Ok(args.iter().fold(self.to_string(), |mut joined, arg| {
                joined.push_str(&display_arg(arg));
                joined
            })),
            "charAt" => {
                let index = match args.first() {
                    Some(_) => count_arg(method, args, 0)?,
                    None => 0,
                };
                Ok(self.chars().nth(index).map(String::from).unwrap_or_default())
            }
            "padStart" => {
                let padding = padding(self, method, args)?;
                Ok(padding + self)
            }
            "padEnd" => {
                let padding = padding(self, method, args)?;
                Ok(self.to_string() + &padding)
            }
            _ => Err(Error::unknown_method(method, "String")),
        }
    }
}

/// Non-negative integer argument at `position`
fn count_arg(method: &str, args: &[Value], position: usize) -> Result<usize> {
    let arg = args.get(position).ok_or_else(|| {
        Error::invalid_argument(method, format!("missing argument {position}"))
    })?;

    arg.as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| {
            Error::invalid_argument(
                method,
                format!("argument {position} must be a non-negative integer, got {arg}"),
            )
        })
}

/// Strings are used verbatim, everything else in its JSON form
fn display_arg(arg: &Value) -> String {
    match arg {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Fill needed to bring `text` up to the target length in `args[0]`, built
/// by cycling `args[1]` (a single space by default).
fn padding(text: &str, method: &str, args: &[Value]) -> Result<String> {
    let target = count_arg(method, args, 0)?;
    let fill = match args.get(1) {
        Some(Value::String(fill)) => fill.clone(),
        Some(other) => {
            return Err(Error::invalid_argument(
                method,
                format!("fill must be a string, got {other}"),
            ))
        }
        None => " ".to_string(),
    };

    let missing = target.saturating_sub(text.chars().count());
    Ok(fill.chars().cycle().take(missing).collect())
}
