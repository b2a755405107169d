//! Fixtures shared by unit tests.

use crate::net::types::{Car, CarId};

pub fn make_car(id: CarId, make: &str, model: &str, price: u64, fuel_type: &str) -> Car {
    Car {
        id,
        make: make.to_owned(),
        model: model.to_owned(),
        year: 2020,
        color: "Blue".to_owned(),
        engine: "2.0L 4-cylinder".to_owned(),
        fuel_type: fuel_type.to_owned(),
        horsepower: 150,
        mileage: 20_000,
        owners: 1,
        price,
        transmission: "Automatic".to_owned(),
        features: vec!["Bluetooth".to_owned()],
        image: format!("https://example.com/{id}.jpg"),
    }
}

pub fn car_a() -> Car {
    make_car(1, "Toyota", "Corolla", 18_000, "Gasoline")
}

pub fn car_b() -> Car {
    make_car(2, "Tesla", "Model 3", 42_000, "Electric")
}

pub fn car_c() -> Car {
    make_car(3, "Ford", "F-150", 35_000, "Diesel")
}
