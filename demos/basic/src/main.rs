//! Worked examples for each of `avrow`'s core scenarios. Run with
//! `cargo run -p avrow-demo-basic`; each scenario also carries its own
//! `#[cfg(test)]` assertions.

use avrow::prelude::*;
use avrow_derive::{AvEnum, Mapper};

mod naming_and_omit {
    use super::{FromItem, ToItem};
    use avrow_derive::Mapper;

    #[derive(Mapper, Debug, Clone, PartialEq, Default)]
    #[mapper(rename_all = "camel", omit_null = true)]
    pub struct Person {
        pub first_name: String,
        pub last_name: String,
        pub nickname: Option<String>,
    }

    pub fn run() {
        let person = Person {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            nickname: None,
        };
        let item = person.to_item().expect("to_item");
        assert!(item.get("nickname").is_none());
        assert_eq!(item.get("firstName").and_then(avrow::Value::as_s), Some("Ada"));

        let back = Person::from_item(&item).expect("from_item");
        assert_eq!(back, person);
    }

    #[cfg(test)]
    mod tests {
        #[test]
        fn omits_null_and_round_trips() {
            super::run();
        }
    }
}

mod nested_delegation {
    use super::{FromItem, ToItem};
    use avrow_derive::Mapper;

    #[derive(Mapper, Debug, Clone, PartialEq, Default)]
    #[mapper(rename_all = "snake")]
    pub struct Address {
        pub line1: String,
        pub city: String,
    }

    #[derive(Mapper, Debug, Clone, PartialEq, Default)]
    #[mapper(rename_all = "snake")]
    pub struct Order {
        pub id: uuid::Uuid,
        pub shipping: Address,
    }

    pub fn run() {
        let order = Order {
            id: uuid::Uuid::nil(),
            shipping: Address {
                line1: "1 Main".to_string(),
                city: "Paris".to_string(),
            },
        };
        let item = order.to_item().expect("to_item");
        let shipping = item.get("shipping").expect("shipping present");
        let avrow::Value::M(fields) = shipping else {
            panic!("shipping is not M");
        };
        assert_eq!(fields.get("line1").and_then(avrow::Value::as_s), Some("1 Main"));
        assert_eq!(fields.get("city").and_then(avrow::Value::as_s), Some("Paris"));

        let back = Order::from_item(&item).expect("from_item");
        assert_eq!(back, order);
    }

    #[cfg(test)]
    mod tests {
        #[test]
        fn nested_mapper_delegates_to_address() {
            super::run();
        }
    }
}

mod constructor_selection {
    use super::{FromItem, ToItem};
    use avrow_derive::Mapper;

    #[derive(Mapper, Debug, Clone, PartialEq)]
    #[mapper(rename_all = "snake", constructor = "new")]
    pub struct Coordinate {
        pub lat: f64,
        pub lon: f64,
    }

    impl Coordinate {
        pub fn new(lat: f64, lon: f64) -> Self {
            Self { lat, lon }
        }
    }

    pub fn run() {
        let point = Coordinate::new(48.8566, 2.3522);
        let item = point.to_item().expect("to_item");
        let back = Coordinate::from_item(&item).expect("from_item");
        assert_eq!(back, point);
    }

    #[cfg(test)]
    mod tests {
        #[test]
        fn custom_constructor_round_trips() {
            super::run();
        }
    }
}

#[derive(AvEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Status {
    #[default]
    Active = 0,
    Suspended = 1,
    Closed = 2,
}

mod enum_format {
    use super::{FromItem, Status, ToItem};
    use avrow_derive::Mapper;

    #[derive(Mapper, Debug, Clone, PartialEq)]
    #[mapper(rename_all = "snake")]
    pub struct Account {
        #[field(is_enum, enum_format = "d")]
        pub status: Status,
    }

    pub fn run() {
        let account = Account {
            status: Status::Suspended,
        };
        let item = account.to_item().expect("to_item");
        assert_eq!(item.get("status").and_then(avrow::Value::as_s), Some("1"));

        let back = Account::from_item(&item).expect("from_item");
        assert_eq!(back, account);
    }

    #[cfg(test)]
    mod tests {
        #[test]
        fn discriminant_format_round_trips() {
            super::run();
        }
    }
}

mod set_semantics {
    use std::collections::BTreeSet;

    use super::{FromItem, ToItem};
    use avrow_derive::Mapper;

    #[derive(Mapper, Debug, Clone, PartialEq, Default)]
    #[mapper(rename_all = "snake")]
    pub struct Post {
        pub tags: BTreeSet<String>,
    }

    pub fn run() {
        let empty = Post { tags: BTreeSet::new() };
        let item = empty.to_item().expect("to_item");
        assert!(item.get("tags").is_none());

        let tagged = Post {
            tags: ["a".to_string(), "b".to_string(), "a".to_string()]
                .into_iter()
                .collect(),
        };
        let item = tagged.to_item().expect("to_item");
        let avrow::Value::Ss(set) = item.get("tags").expect("tags present") else {
            panic!("tags is not SS");
        };
        assert_eq!(set.len(), 2);

        let back = Post::from_item(&item).expect("from_item");
        assert_eq!(back.tags, tagged.tags);
    }

    #[cfg(test)]
    mod tests {
        #[test]
        fn empty_set_omitted_nonempty_set_deduplicated() {
            super::run();
        }
    }
}

mod inline_expansion {
    use super::nested_delegation::Address;
    use super::{FromItem, ToItem};
    use avrow_derive::Mapper;

    #[derive(Mapper, Debug, Clone, PartialEq, Default)]
    #[mapper(
        rename_all = "snake",
        directive(path = "shipping.line1", rename = "ship_line1"),
        directive(path = "shipping.city", rename = "ship_city")
    )]
    pub struct Shipment {
        pub shipping: Address,
    }

    pub fn run() {
        let shipment = Shipment {
            shipping: Address {
                line1: "221B Baker St".to_string(),
                city: "London".to_string(),
            },
        };
        let item = shipment.to_item().expect("to_item");
        assert!(item.get("shipping").is_none());
        assert_eq!(item.get("ship_line1").and_then(avrow::Value::as_s), Some("221B Baker St"));
        assert_eq!(item.get("ship_city").and_then(avrow::Value::as_s), Some("London"));

        let back = Shipment::from_item(&item).expect("from_item");
        assert_eq!(back, shipment);
    }

    #[cfg(test)]
    mod tests {
        #[test]
        fn directive_forces_inline_expansion() {
            super::run();
        }
    }
}

mod custom_methods {
    use super::{FromItem, ToItem};
    use avrow::item::Item;
    use avrow::{RuntimeResult, Value};
    use avrow_derive::Mapper;

    #[derive(Mapper, Debug, Clone, PartialEq, Default)]
    #[mapper(rename_all = "snake")]
    pub struct Temperature {
        #[field(to = "celsius_to_item", from = "celsius_from_item")]
        pub celsius: f64,
    }

    impl Temperature {
        fn celsius_to_item(&self) -> Value {
            Value::N((self.celsius * 9.0 / 5.0 + 32.0).to_string())
        }

        fn celsius_from_item(item: &Item) -> RuntimeResult<f64> {
            let fahrenheit: f64 = item
                .get("celsius")
                .and_then(Value::as_n)
                .expect("celsius present")
                .parse()
                .expect("valid number");
            Ok((fahrenheit - 32.0) * 5.0 / 9.0)
        }
    }

    pub fn run() {
        let reading = Temperature { celsius: 100.0 };
        let item = reading.to_item().expect("to_item");
        assert_eq!(item.get("celsius").and_then(Value::as_n), Some("212"));

        let back = Temperature::from_item(&item).expect("from_item");
        assert_eq!(back, reading);
    }

    #[cfg(test)]
    mod tests {
        #[test]
        fn custom_methods_convert_units_on_the_wire() {
            super::run();
        }
    }
}

fn main() {
    naming_and_omit::run();
    nested_delegation::run();
    constructor_selection::run();
    enum_format::run();
    set_semantics::run();
    inline_expansion::run();
    custom_methods::run();
    println!("all scenarios passed");
}
