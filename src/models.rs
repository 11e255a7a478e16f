use serde::{Deserialize, Serialize};

/// Geographic coordinates, kept as the API sends them (strings)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

/// Postal address of a user
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

impl Address {
    /// Single-line rendering: "street, suite, city zipcode"
    pub fn one_line(&self) -> String {
        format!("{}, {}, {} {}", self.street, self.suite, self.city, self.zipcode)
    }
}

/// Company a user works for
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// A contact as returned by the users API. Immutable once decoded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

impl User {
    /// Case-insensitive substring match on the name only
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Build a user with the given id and name; every other field is filler
    pub fn user(id: u64, name: &str) -> User {
        let handle = name.to_lowercase().replace(' ', "");
        User {
            id,
            name: name.to_string(),
            username: handle.clone(),
            email: format!("{}@example.com", handle),
            address: Address {
                street: "123 Main St".to_string(),
                suite: "Apt 456".to_string(),
                city: "Springfield".to_string(),
                zipcode: "12345".to_string(),
                geo: Geo {
                    lat: "37.7749".to_string(),
                    lng: "-122.4194".to_string(),
                },
            },
            phone: "123-456-7890".to_string(),
            website: format!("www.{}.com", handle),
            company: Company {
                name: "Acme Corp".to_string(),
                catch_phrase: "We make things better".to_string(),
                bs: "synergize scalable solutions".to_string(),
            },
        }
    }
}
