#![allow(dead_code)]

use serde_json::{json, Value};

pub fn beer(id: u64, name: &str, abv: f64, malt: &[&str], hops: &[&str], yeast: &str) -> Value {
    let malt: Vec<Value> = malt
        .iter()
        .map(|m| json!({"name": m, "amount": {"value": 5.3, "unit": "kilograms"}}))
        .collect();
    let hops: Vec<Value> = hops
        .iter()
        .map(|h| {
            json!({
                "name": h,
                "amount": {"value": 17.5, "unit": "grams"},
                "add": "start",
                "attribute": "bitter"
            })
        })
        .collect();

    json!({
        "id": id,
        "name": name,
        "tagline": format!("{} tagline", name),
        "first_brewed": "04/2007",
        "description": format!("{} description", name),
        "image_url": format!("https://images.punkapi.com/v2/{}.png", id),
        "abv": abv,
        "ibu": 60,
        "target_fg": 1010,
        "ebc": 17,
        "srm": 8.5,
        "ph": 4.4,
        "ingredients": {
            "malt": malt,
            "hops": hops,
            "yeast": yeast
        },
        "food_pairing": ["Spicy carne asada"],
        "contributed_by": "Sam Mason <samjbmason>"
    })
}

pub fn catalog() -> Value {
    json!([
        beer(1, "Buzz", 4.5, &["Maris Otter Extra Pale", "Caramalt"], &["Fuggles", "First Gold"], "Wyeast 1056 - American Ale™"),
        beer(2, "Trashy Blonde", 4.1, &["Maris Otter Extra Pale"], &["Amarillo"], "Wyeast 1056 - American Ale™"),
        beer(3, "Punk IPA", 5.6, &["Extra Pale"], &["Ahtanum", "Chinook"], "Wyeast1056 - American Ale"),
        beer(4, "Myrcia", 2.7, &["Pilsner"], &["Simcoe"], "American Wyeast"),
        beer(5, "Tokyo*", 18.2, &["Extra Pale", "Caramalt"], &["Chinook"], "WLP099 - Super High Gravity Ale"),
    ])
}
