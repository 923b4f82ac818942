//! Vehicle make and model catalog for search-form autocomplete.

/// A car make and the models sold under it.
#[derive(Debug, Clone, Copy)]
pub struct CarMake {
    /// Stable slug used in form values, e.g. "alfa-romeo".
    pub value: &'static str,
    /// Display name, e.g. "Alfa Romeo".
    pub label: &'static str,
    pub models: &'static [&'static str],
}

pub const CAR_MAKES: &[CarMake] = &[
    CarMake { value: "acura", label: "Acura", models: &["ILX", "TLX", "RDX", "MDX", "NSX", "Integra", "TSX", "TL"] },
    CarMake { value: "audi", label: "Audi", models: &["A3", "A4", "A5", "A6", "A7", "A8", "Q3", "Q5", "Q7", "Q8", "e-tron", "R8", "TT", "S4", "RS5"] },
    CarMake { value: "bmw", label: "BMW", models: &["2 Series", "3 Series", "4 Series", "5 Series", "7 Series", "X1", "X3", "X5", "X7", "Z4", "i4", "iX", "M3", "M5"] },
    CarMake { value: "chevrolet", label: "Chevrolet", models: &["Camaro", "Corvette", "Malibu", "Cruze", "Spark", "Equinox", "Traverse", "Tahoe", "Suburban", "Blazer", "Silverado", "Colorado", "Bolt EV"] },
    CarMake { value: "chrysler", label: "Chrysler", models: &["300", "Pacifica", "Voyager", "Town & Country", "200"] },
    CarMake { value: "dodge", label: "Dodge", models: &["Challenger", "Charger", "Durango", "Grand Caravan", "Journey", "Ram 1500"] },
    CarMake { value: "ford", label: "Ford", models: &["F-150", "F-250", "Mustang", "Escape", "Explorer", "Edge", "Expedition", "Ranger", "Bronco", "Fusion", "Focus", "Fiesta", "Maverick", "Mustang Mach-E"] },
    CarMake { value: "gmc", label: "GMC", models: &["Sierra 1500", "Sierra 2500", "Canyon", "Terrain", "Acadia", "Yukon", "Savana"] },
    CarMake { value: "honda", label: "Honda", models: &["Civic", "Accord", "CR-V", "HR-V", "Pilot", "Odyssey", "Ridgeline", "Fit", "Passport"] },
    CarMake { value: "hyundai", label: "Hyundai", models: &["Elantra", "Sonata", "Accent", "Tucson", "Santa Fe", "Palisade", "Kona", "Venue", "Ioniq 5"] },
    CarMake { value: "jeep", label: "Jeep", models: &["Wrangler", "Grand Cherokee", "Cherokee", "Compass", "Renegade", "Gladiator", "Wagoneer"] },
    CarMake { value: "kia", label: "Kia", models: &["Forte", "K5", "Rio", "Soul", "Seltos", "Sportage", "Sorento", "Telluride", "Carnival", "EV6"] },
    CarMake { value: "lexus", label: "Lexus", models: &["IS", "ES", "LS", "NX", "RX", "GX", "LX", "UX", "RC"] },
    CarMake { value: "mazda", label: "Mazda", models: &["Mazda3", "Mazda6", "CX-3", "CX-30", "CX-5", "CX-9", "MX-5 Miata"] },
    CarMake { value: "mercedes-benz", label: "Mercedes-Benz", models: &["A-Class", "C-Class", "E-Class", "S-Class", "CLA", "GLA", "GLB", "GLC", "GLE", "GLS", "AMG GT", "Sprinter"] },
    CarMake { value: "nissan", label: "Nissan", models: &["Altima", "Sentra", "Maxima", "Versa", "Rogue", "Murano", "Pathfinder", "Armada", "Kicks", "Frontier", "Titan", "Leaf", "370Z"] },
    CarMake { value: "ram", label: "Ram", models: &["1500", "2500", "3500", "ProMaster"] },
    CarMake { value: "subaru", label: "Subaru", models: &["Impreza", "Legacy", "Crosstrek", "Forester", "Outback", "Ascent", "WRX", "BRZ"] },
    CarMake { value: "tesla", label: "Tesla", models: &["Model 3", "Model S", "Model X", "Model Y"] },
    CarMake { value: "toyota", label: "Toyota", models: &["Corolla", "Camry", "Avalon", "Prius", "RAV4", "Highlander", "4Runner", "Sequoia", "Tacoma", "Tundra", "Sienna", "Venza", "C-HR", "86"] },
    CarMake { value: "volkswagen", label: "Volkswagen", models: &["Jetta", "Passat", "Golf", "GTI", "Tiguan", "Atlas", "Taos", "ID.4", "Beetle"] },
    CarMake { value: "volvo", label: "Volvo", models: &["S60", "S90", "V60", "XC40", "XC60", "XC90"] },
];

/// Look a make up by slug or display name, case-insensitively.
pub fn find_make(name: &str) -> Option<&'static CarMake> {
    let name = name.trim().to_lowercase();
    CAR_MAKES
        .iter()
        .find(|make| make.value == name || make.label.to_lowercase() == name)
}

/// Models for a make, or an empty slice when the make is unknown.
pub fn models_for_make(name: &str) -> &'static [&'static str] {
    find_make(name).map(|make| make.models).unwrap_or(&[])
}
