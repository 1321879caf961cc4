pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::address_builder::*;

pub mod address_builder {

    use super::*;
    use crate::address::*;

    #[derive(Debug)]
    pub struct AddressBuild {
        addr: Address,
    }

    macro_rules! text_setters {
        ($($field:ident),+ $(,)?) => {
            $(
                pub fn $field(mut self, x: &str) -> Self {
                    self.addr.$field = Some(x.into());
                    self
                }
            )+
        };
    }

    impl AddressBuild {
        text_setters!(
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
        );
        pub fn redundant_street_type(mut self, x: bool) -> Self {
            self.addr.redundant_street_type = Some(x);
            self
        }
        pub fn finish(self) -> Address {
            self.addr
        }
    }

    impl Builder for Address {
        type Build = AddressBuild;
        fn build() -> Self::Build {
            AddressBuild {
                addr: Address::default(),
            }
        }
    }

    #[test]
    fn build_every_field() {
        let addr = Address::build()
            .number("1")
            .prefix("N")
            .street("Main")
            .street_type("St")
            .suffix("E")
            .unit_prefix("Apt")
            .unit("2")
            .city("Springfield")
            .state("IL")
            .postal_code("62701")
            .postal_code_ext("0001")
            .street2("Oak")
            .street_type2("Ave")
            .prefix2("S")
            .suffix2("W")
            .redundant_street_type(true)
            .finish();
        assert!(addr.to_mapping().values().all(Option::is_some));
    }
}
