#![deny(missing_docs)]

//! # Array Toggle
//!
//! Set-like add / remove on string lists, used to adjust exclude and
//! required lists in place.

/// Prefix marking a token for removal.
pub const REMOVE_PREFIX: char = '!';

/// Applies `tokens` to `list` and returns it.
///
/// A token starting with `!` removes the remainder if present; any other
/// token is appended if absent. Order of existing entries is preserved.
pub fn toggle<I, S>(list: &mut Vec<String>, tokens: I) -> &mut Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for token in tokens {
        let token = token.as_ref();
        match token.strip_prefix(REMOVE_PREFIX) {
            Some(name) => {
                if let Some(pos) = list.iter().position(|v| v == name) {
                    list.remove(pos);
                }
            }
            None => {
                if !list.iter().any(|v| v == token) {
                    list.push(token.to_string());
                }
            }
        }
    }
    list
}
