//! Alias assignment with collision retry.

use std::collections::HashSet;

use crate::error::AppError;
use crate::utils::alias::generate_alias;

/// Generation attempts before giving up on a free alias.
pub const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Aliases that would shadow the service's own routes.
const RESERVED_ALIASES: &[&str] = &["api", "health"];

/// Picks the alias for one link.
///
/// A custom alias is used verbatim if it is free. Otherwise a random alias is
/// generated, retrying on collision.
///
/// `taken` must contain every stored alias plus the ones already assigned
/// earlier in the same submission.
///
/// # Errors
///
/// Returns [`AppError::DuplicateAlias`] if the custom alias is taken or
/// reserved, and [`AppError::AliasGenerationExhausted`] if every attempt
/// collided.
pub fn assign_alias(custom: Option<&str>, taken: &HashSet<String>) -> Result<String, AppError> {
    assign_alias_with(custom, taken, generate_alias)
}

/// Same as [`assign_alias`] with a caller-supplied generator.
pub fn assign_alias_with<G>(
    custom: Option<&str>,
    taken: &HashSet<String>,
    mut generate: G,
) -> Result<String, AppError>
where
    G: FnMut() -> String,
{
    let is_taken = |alias: &str| taken.contains(alias) || RESERVED_ALIASES.contains(&alias);

    if let Some(alias) = custom {
        if is_taken(alias) {
            return Err(AppError::duplicate_alias(alias));
        }
        return Ok(alias.to_string());
    }

    for _ in 0..MAX_GENERATION_ATTEMPTS {
        let alias = generate();
        if !is_taken(&alias) {
            return Ok(alias);
        }
    }

    Err(AppError::AliasGenerationExhausted {
        attempts: MAX_GENERATION_ATTEMPTS,
    })
}
