use super::*;
use usaddr_entities as e;

impl From<e::address::Address> for Address {
    fn from(from: e::address::Address) -> Self {
        let e::address::Address {
            number,
            prefix,
            street,
            street_type,
            suffix,
            unit_prefix,
            unit,
            city,
            state,
            postal_code,
            postal_code_ext,
            street2,
            street_type2,
            prefix2,
            suffix2,
            redundant_street_type,
        } = from;
        Self {
            number,
            prefix,
            street,
            street_type,
            suffix,
            unit_prefix,
            unit,
            city,
            state,
            postal_code,
            postal_code_ext,
            street2,
            street_type2,
            prefix2,
            suffix2,
            redundant_street_type,
        }
    }
}

impl From<Address> for e::address::Address {
    fn from(from: Address) -> Self {
        let Address {
            number,
            prefix,
            street,
            street_type,
            suffix,
            unit_prefix,
            unit,
            city,
            state,
            postal_code,
            postal_code_ext,
            street2,
            street_type2,
            prefix2,
            suffix2,
            redundant_street_type,
        } = from;
        Self {
            number,
            prefix,
            street,
            street_type,
            suffix,
            unit_prefix,
            unit,
            city,
            state,
            postal_code,
            postal_code_ext,
            street2,
            street_type2,
            prefix2,
            suffix2,
            redundant_street_type,
        }
    }
}

impl From<&e::address::Address> for RenderedAddress {
    fn from(from: &e::address::Address) -> Self {
        use e::address::Format;
        Self {
            line1: from.render(Format::Line1),
            line1_without_unit: from.line1_without_unit(),
            line2: from.render(Format::Line2),
            full: from.render(Format::Default),
            full_postal_code: from.full_postal_code(),
            state_fips: from.state_fips().map(ToOwned::to_owned),
            state_name: from.state_name(),
            intersection: from.is_intersection(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use e::builders::*;
    use serde_json::json;

    fn apartment() -> e::address::Address {
        e::address::Address::build()
            .number("1600")
            .prefix("N")
            .street("Main")
            .street_type("St")
            .unit_prefix("Apt")
            .unit("4B")
            .city("Springfield")
            .state("IL")
            .postal_code("62701")
            .postal_code_ext("1234")
            .redundant_street_type(false)
            .finish()
    }

    #[test]
    fn deserialize_partial_object() {
        let addr: Address = serde_json::from_value(json!({
            "number": "123",
            "street": "Main",
            "redundant_street_type": true
        }))
        .unwrap();
        let addr = e::address::Address::from(addr);
        assert_eq!(addr.number.as_deref(), Some("123"));
        assert_eq!(addr.redundant_street_type, Some(true));
        assert!(addr.city.is_none());
    }

    #[test]
    fn reject_unknown_keys() {
        let err = serde_json::from_value::<Address>(json!({
            "number": "123",
            "country": "US"
        }))
        .err()
        .unwrap();
        assert!(err.to_string().contains("unknown field `country`"));
    }

    #[test]
    fn serialize_complete_field_set() {
        let value = serde_json::to_value(Address::from(apartment())).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 16);
        assert_eq!(object["unit"], json!("4B"));
        assert_eq!(object["street2"], json!(null));
        for field in e::address::Field::all() {
            assert!(object.contains_key(field.as_str()), "{field}");
        }
    }

    #[test]
    fn entity_round_trip_keeps_fields() {
        let addr = apartment();
        let back = e::address::Address::from(Address::from(addr.clone()));
        assert_eq!(back.to_mapping(), addr.to_mapping());
    }

    #[test]
    fn rendered_output() {
        let rendered = RenderedAddress::from(&apartment());
        assert_eq!(rendered.line1, "1600 N Main St Apt 4B");
        assert_eq!(rendered.line1_without_unit, "1600 N Main St");
        assert_eq!(rendered.line2, "Springfield, IL 62701-1234");
        assert_eq!(rendered.full, "1600 N Main St Apt 4B, Springfield, IL 62701-1234");
        assert_eq!(rendered.full_postal_code.as_deref(), Some("62701-1234"));
        assert_eq!(rendered.state_fips.as_deref(), Some("17"));
        assert_eq!(rendered.state_name.as_deref(), Some("Illinois"));
        assert!(!rendered.intersection);

        let value = serde_json::to_value(RenderedAddress::from(&e::address::Address::default())).unwrap();
        assert_eq!(
            value,
            json!({
                "line1": "",
                "line1_without_unit": "",
                "line2": "",
                "full": "",
                "intersection": false
            })
        );
    }
}
