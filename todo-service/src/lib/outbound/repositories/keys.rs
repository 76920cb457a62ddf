use crate::domain::todo::models::TodoId;
use crate::domain::user::models::Username;

const USER_PREFIX: &str = "user#";
const USER_SORT_KEY: &str = "user";
const TODO_PREFIX: &str = "todo#";

/// Composite `(pk, sk)` key addressing one item in the store.
///
/// Users live under `("user#<username>", "user")`, todos under
/// `("todo#<id>", "todo#<username>")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemKey {
    pub pk: String,
    pub sk: String,
}

impl ItemKey {
    pub fn user(username: &Username) -> Self {
        Self {
            pk: format!("{USER_PREFIX}{username}"),
            sk: USER_SORT_KEY.to_string(),
        }
    }

    pub fn todo(owner: &Username, id: &TodoId) -> Self {
        Self {
            pk: format!("{TODO_PREFIX}{id}"),
            sk: format!("{TODO_PREFIX}{owner}"),
        }
    }
}
