//! Validation stage
//!
//! Applies the business rules to each row in table order and splits the
//! table into a valid and a rejected partition. The split is stable: both
//! outputs preserve the input's relative order, and no row is ever dropped.
//!
//! Duplicate detection is order-dependent: only the second and later
//! occurrences of a repeated `user_id` are flagged, never the first. The
//! seen-id set is local to a single call.

use crate::model::{FlatUser, RejectedUser};
use std::collections::HashSet;

/// Violation name for a repeated `user_id`
pub const DUPLICATE_USER_ID: &str = "Duplicate user_id";
/// Violation name for an email without an `@`
pub const INVALID_EMAIL: &str = "Invalid email";
/// Violation name for a null city
pub const CITY_IS_NULL: &str = "City is null";
/// Violation name for a zipcode shorter than 5 characters after hyphen removal
pub const INVALID_ZIPCODE: &str = "Invalid zipcode";

/// Separator used when joining violation names for persistence
const VIOLATION_SEPARATOR: &str = ", ";

/// Partition the table into (valid, rejected) by the business rules
pub fn validate(users: Vec<FlatUser>) -> (Vec<FlatUser>, Vec<RejectedUser>) {
    let mut valid = Vec::new();
    let mut rejected = Vec::new();
    let mut seen_ids: HashSet<Option<i64>> = HashSet::new();

    for user in users {
        let violations = check_row(&user, &mut seen_ids);

        if violations.is_empty() {
            valid.push(user);
        } else {
            rejected.push(RejectedUser {
                user,
                violations: violations.join(VIOLATION_SEPARATOR),
            });
        }
    }

    (valid, rejected)
}

/// Evaluate all rules against one row, in fixed order
///
/// The id is recorded in `seen_ids` whether or not this occurrence is
/// flagged, so every later repetition is caught.
fn check_row(user: &FlatUser, seen_ids: &mut HashSet<Option<i64>>) -> Vec<&'static str> {
    let mut violations = Vec::new();

    if !seen_ids.insert(user.user_id) {
        violations.push(DUPLICATE_USER_ID);
    }

    if !user.email.as_deref().unwrap_or("").contains('@') {
        violations.push(INVALID_EMAIL);
    }

    if user.city.is_none() {
        violations.push(CITY_IS_NULL);
    }

    let zipcode = user.zipcode.as_deref().unwrap_or("").replace('-', "");
    if zipcode.chars().count() < 5 {
        violations.push(INVALID_ZIPCODE);
    }

    violations
}
