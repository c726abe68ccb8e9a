diesel::table! {
    members (id) {
        id -> BigInt,
        name -> Text,
    }
}

diesel::table! {
    orders (id) {
        id -> BigInt,
        name -> Text,
    }
}
