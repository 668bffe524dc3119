//! Sample records and the literal collections the demonstrations run on.
//!
//! Everything here is plain data: built fresh on each call, read a few
//! times, dropped at the end of a routine.

use serde::Serialize;

/// Someone with a name and an age.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: &str, age: u32) -> Self {
        Person {
            name: name.to_string(),
            age,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub age: u32,
}

impl Customer {
    pub fn new(id: u32, name: &str, age: u32) -> Self {
        Customer {
            id,
            name: name.to_string(),
            age,
        }
    }
}

/// A product bought by the customer whose id is `person_id`.
///
/// The reference is informal: nothing checks that the customer exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub person_id: u32,
}

impl Product {
    pub fn new(id: u32, name: &str, person_id: u32) -> Self {
        Product {
            id,
            name: name.to_string(),
            person_id,
        }
    }
}

/// Element of a mixed-type collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Item {
    Int(i64),
    Text(String),
}

impl Item {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Item::Int(n) => Some(*n),
            Item::Text(_) => None,
        }
    }
}

/// `rbo (36)`, `you (20)`, `me (16)`.
pub fn people() -> Vec<Person> {
    vec![
        Person::new("rbo", 36),
        Person::new("you", 20),
        Person::new("me", 16),
    ]
}

/// [`people`] plus `me2 (16)`, so that one age repeats.
pub fn people_with_twins() -> Vec<Person> {
    let mut people = people();
    people.push(Person::new("me2", 16));
    people
}

/// A second group sharing some ages with [`people_with_twins`].
pub fn rivals() -> Vec<Person> {
    vec![
        Person::new("azerty", 30),
        Person::new("u2", 20),
        Person::new("sme", 16),
        Person::new("me2", 16),
    ]
}

pub fn customers() -> Vec<Customer> {
    vec![
        Customer::new(1, "rbo", 36),
        Customer::new(2, "you", 20),
        Customer::new(3, "me", 16),
    ]
}

/// Customer 1 bought two products, customer 2 one, customer 3 none.
pub fn products() -> Vec<Product> {
    vec![
        Product::new(10, "shoes", 1),
        Product::new(20, "pants", 2),
        Product::new(30, "glasses", 1),
    ]
}

/// `1, "azerty", 2, 3, 4, 5`.
pub fn mixed_items() -> Vec<Item> {
    vec![
        Item::Int(1),
        Item::Text("azerty".to_string()),
        Item::Int(2),
        Item::Int(3),
        Item::Int(4),
        Item::Int(5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twins_share_an_age() {
        let people = people_with_twins();
        assert_eq!(people.len(), 4);
        assert_eq!(people[2].age, people[3].age);
    }

    #[test]
    fn test_every_product_points_at_a_customer() {
        let ids: Vec<u32> = customers().iter().map(|c| c.id).collect();
        assert!(products().iter().all(|p| ids.contains(&p.person_id)));
    }

    #[test]
    fn test_items_serialize_untagged() {
        let json = serde_json::to_value(mixed_items()).unwrap();
        assert_eq!(json, serde_json::json!([1, "azerty", 2, 3, 4, 5]));
    }

    #[test]
    fn test_person_serializes_fields_in_order() {
        let json = serde_json::to_string(&Person::new("rbo", 36)).unwrap();
        assert_eq!(json, r#"{"name":"rbo","age":36}"#);
    }
}
