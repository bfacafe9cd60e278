//! Ordered-fallback combinator.
//!
//! Both the field extractor and the status resolver are "try this, else
//! that" chains; this combinator keeps them structurally identical and
//! independently testable.

/// Runs `attempts` in order, returning the first produced value that the
/// `accept` predicate admits.
///
/// An attempt yielding `Ok(None)`, or a value `accept` rejects, is a soft
/// miss and evaluation continues. An attempt returning `Err` aborts the
/// whole chain; soft misses must be encoded as `None` by the attempt
/// itself. Exhaustion yields `Ok(None)`.
pub fn first_acceptable<T, E, I, F, P>(attempts: I, accept: P) -> Result<Option<T>, E>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Result<Option<T>, E>,
    P: Fn(&T) -> bool,
{
    for attempt in attempts {
        if let Some(value) = attempt()? {
            if accept(&value) {
                return Ok(Some(value));
            }
        }
    }
    Ok(None)
}
