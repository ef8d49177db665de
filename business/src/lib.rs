pub mod application {
    pub mod cart {
        pub mod add_product;
        pub mod get;
        pub mod remove_product;
        pub mod store;
        pub mod update_amount;

        #[cfg(test)]
        pub(crate) mod test_support;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod storage;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod add_product;
            pub mod get;
            pub mod remove_product;
            pub mod update_amount;
        }
    }
    pub mod inventory {
        pub mod errors;
        pub mod model;
        pub mod services;
    }
}
