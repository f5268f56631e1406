//! Simple decoder to inspect encoded polyline strings.

use flexpolyline::{decode, ThirdDim};

fn main() {
    let encoded = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "BFoz5xJ67i1B1B7PzIhaxL7Y".to_string());

    println!("Decoding: {}", encoded);

    let decoded = decode(&encoded).expect("Failed to decode");

    println!("\n=== Header ===");
    println!("Precision: {}", decoded.header.precision);
    println!("Third dimension: {:?}", decoded.header.third_dim);
    if decoded.header.third_dim != ThirdDim::Absent {
        println!(
            "Third dimension precision: {}",
            decoded.header.third_dim_precision
        );
    }

    println!("\n=== Coordinates ({}) ===", decoded.polyline.len());
    for (i, c) in decoded.polyline.iter().enumerate() {
        match c.third {
            Some(z) => println!("[{}] {}, {}, {}", i, c.lat, c.lng, z),
            None => println!("[{}] {}, {}", i, c.lat, c.lng),
        }
    }
}
