//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the embedded migrations exactly. When a
//! migration changes the table, regenerate this file with
//! `diesel print-schema` or update it by hand.

diesel::table! {
    /// Cafe directory records.
    ///
    /// `id` is assigned by SQLite on insert and never reused while the row
    /// exists. `name` carries a unique index.
    cafes (id) {
        id -> Integer,
        name -> Text,
        map_url -> Text,
        img_url -> Text,
        location -> Text,
        seats -> Text,
        has_toilet -> Bool,
        has_wifi -> Bool,
        has_sockets -> Bool,
        can_take_calls -> Bool,
        /// Free-form price text; `NULL` when never recorded.
        coffee_price -> Nullable<Text>,
    }
}
