//! Transformation stage
//!
//! Flattens each nested raw record into a `FlatUser`. Pure and infallible:
//! missing nested blocks degrade to null sub-fields, never an error. Output
//! order and count match the input exactly.

use crate::model::{FlatUser, RawUser};

/// Flatten raw records into the canonical 13-field rows
pub fn transform(raw_users: Vec<RawUser>) -> Vec<FlatUser> {
    raw_users.into_iter().map(flatten).collect()
}

fn flatten(user: RawUser) -> FlatUser {
    let address = user.address;
    let (city, zipcode, geo) = match address {
        Some(a) => (a.city, a.zipcode, a.geo),
        None => (None, None, None),
    };
    let (latitude, longitude) = match geo {
        Some(g) => (g.lat, g.lng),
        None => (None, None),
    };
    let (company_name, company_phrase, company_bs) = match user.company {
        Some(c) => (c.name, c.catch_phrase, c.bs),
        None => (None, None, None),
    };

    FlatUser {
        user_id: user.id,
        name: user.name,
        username: user.username,
        email: user.email,
        phone: user.phone,
        website: user.website,
        city,
        zipcode,
        latitude,
        longitude,
        company_name,
        company_phrase,
        company_bs,
    }
}
