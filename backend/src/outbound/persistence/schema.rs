//! Diesel table definitions mirroring the embedded migrations.

diesel::table! {
    feeding_records (id) {
        id -> Int8,
        cat_name -> Varchar,
        feeding_time -> Time,
        food_type -> Nullable<Varchar>,
        caretaker -> Nullable<Varchar>,
        created_at -> Timestamptz,
    }
}
