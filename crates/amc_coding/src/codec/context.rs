#[cfg(all(debug_assertions, feature = "debug"))]
use alloc::{string::String, vec::Vec};
#[cfg(all(debug_assertions, feature = "debug"))]
use core::fmt;

use crate::CodingError;

// -----------------------------------------------------------------------------
// Context

/// Traversal state of one top-level encode or decode call.
///
/// Tracks the nesting depth, and in debug builds with the `debug` feature,
/// the path of the value being processed. Neither is unwound on error, so
/// the path still points at the failing value when the call returns.
#[derive(Default)]
pub(super) struct Context {
    depth: usize,
    #[cfg(all(debug_assertions, feature = "debug"))]
    path: Vec<Segment>,
}

#[cfg(all(debug_assertions, feature = "debug"))]
enum Segment {
    Key(String),
    Index(usize),
}

impl Context {
    /// Descends one level, failing past `limit`.
    #[inline]
    pub fn enter(&mut self, limit: usize) -> Result<(), CodingError> {
        if self.depth >= limit {
            return Err(CodingError::DepthLimitExceeded { limit });
        }
        self.depth += 1;
        Ok(())
    }

    #[inline]
    pub fn leave(&mut self) {
        self.depth -= 1;
    }

    #[inline]
    pub fn push_key(&mut self, _key: &str) {
        #[cfg(all(debug_assertions, feature = "debug"))]
        self.path.push(Segment::Key(String::from(_key)));
    }

    #[inline]
    pub fn push_index(&mut self, _index: usize) {
        #[cfg(all(debug_assertions, feature = "debug"))]
        self.path.push(Segment::Index(_index));
    }

    #[inline]
    pub fn pop(&mut self) {
        #[cfg(all(debug_assertions, feature = "debug"))]
        self.path.pop();
    }

    /// Ends a top-level call: reports a failure and resets the state.
    pub fn finish<T>(&mut self, result: Result<T, CodingError>) -> Result<T, CodingError> {
        if let Err(_err) = &result {
            #[cfg(all(debug_assertions, feature = "debug"))]
            log::debug!("coding failed at `{}`: {_err}", PathDisplay(&self.path));
        }
        self.depth = 0;
        #[cfg(all(debug_assertions, feature = "debug"))]
        self.path.clear();
        result
    }
}

#[cfg(all(debug_assertions, feature = "debug"))]
struct PathDisplay<'a>(&'a [Segment]);

#[cfg(all(debug_assertions, feature = "debug"))]
impl fmt::Display for PathDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in self.0 {
            match segment {
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Context;
    use crate::CodingError;

    #[test]
    fn depth_limit() {
        let mut context = Context::default();
        context.enter(2).unwrap();
        context.enter(2).unwrap();
        assert_eq!(context.enter(2), Err(CodingError::DepthLimitExceeded { limit: 2 }));

        context.leave();
        assert!(context.enter(2).is_ok());

        let result: Result<(), _> = context.finish(Err(CodingError::NilInput));
        assert!(result.is_err());
        assert!(context.enter(1).is_ok());
    }

    #[cfg(all(debug_assertions, feature = "debug"))]
    #[test]
    fn path_display() {
        use super::PathDisplay;
        use alloc::string::ToString;

        let mut context = Context::default();
        context.push_key("friends");
        context.push_index(2);
        context.push_key("name");
        assert_eq!(PathDisplay(&context.path).to_string(), "$.friends[2].name");
        context.pop();
        assert_eq!(PathDisplay(&context.path).to_string(), "$.friends[2]");
    }
}
