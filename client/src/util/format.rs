//! Display formatting for car listings.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::Car;

/// Group digits with commas (`25000` -> `"25,000"`).
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Dollar price label (`"$25,000"`).
pub fn price(value: u64) -> String {
    format!("${}", thousands(value))
}

/// Image source with a placeholder for cars published without one.
pub fn image_src(image: &str) -> &str {
    if image.trim().is_empty() { "/placeholder.svg" } else { image }
}

/// Modifier class for the fuel icon color.
pub fn fuel_class(fuel_type: &str) -> &'static str {
    match fuel_type {
        "Electric" => "fuel--electric",
        "Diesel" => "fuel--diesel",
        _ => "fuel--gasoline",
    }
}

/// Inline style for a color swatch dot.
pub fn swatch_style(color: &str) -> String {
    format!("background-color: {}", color.trim().to_lowercase())
}

/// `"N car(s) <suffix>"` summary line.
pub fn results_label(count: usize, suffix: &str) -> String {
    let noun = if count == 1 { "car" } else { "cars" };
    format!("{count} {noun} {suffix}")
}

/// Prose description shown on the detail page.
pub fn description(car: &Car) -> String {
    let features = if car.features.is_empty() {
        "no additional features".to_owned()
    } else {
        car.features.join(", ")
    };
    format!(
        "This {} is a {} model with {} horsepower and a {} engine. It has been driven for {} kilometers and comes with {}. Perfect for those looking for a reliable and stylish vehicle.",
        car.title(),
        car.year,
        car.horsepower,
        car.fuel_type,
        thousands(car.mileage),
        features,
    )
}
