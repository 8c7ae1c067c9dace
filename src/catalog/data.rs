//! Built-in trade catalog.

use crate::domain::model::{
    Billing, Choice, DayRange, JobOption, JobType, RateRange, Trade,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn trade(
    id: &str,
    name: &str,
    materials_ratio: f64,
    billing: Billing,
    area_keys: &[&str],
    job_types: Vec<JobType>,
) -> Trade {
    Trade {
        id: id.to_string(),
        name: name.to_string(),
        materials_ratio,
        labor_ratio: 1.0 - materials_ratio,
        billing,
        area_keys: strings(area_keys),
        job_types,
    }
}

#[allow(clippy::too_many_arguments)]
fn job(
    id: &str,
    name: &str,
    price: (f64, f64),
    days: (u32, u32),
    warranty: Option<&str>,
    exclusions: &[&str],
    scope: &[&str],
    options: Vec<JobOption>,
) -> JobType {
    JobType {
        id: id.to_string(),
        name: name.to_string(),
        base_price: RateRange::new(price.0, price.1),
        base_days: DayRange::new(days.0, days.1),
        warranty: warranty.map(str::to_string),
        exclusions: strings(exclusions),
        scope: strings(scope),
        options,
    }
}

fn toggle(id: &str, label: &str, price_delta: Option<f64>, scope_addition: Option<&str>) -> JobOption {
    JobOption::Toggle {
        id: id.to_string(),
        label: label.to_string(),
        price_delta,
        scope_addition: scope_addition.map(str::to_string),
    }
}

fn choice(id: &str, label: &str, choices: &[(&str, &str, f64, Option<&str>)]) -> JobOption {
    JobOption::Choice {
        id: id.to_string(),
        label: label.to_string(),
        choices: choices
            .iter()
            .map(|&(value, label, price_delta, scope_addition)| Choice {
                value: value.to_string(),
                label: label.to_string(),
                price_delta,
                scope_addition: scope_addition.map(str::to_string),
            })
            .collect(),
    }
}

const INTERIOR_ROOMS: &[&str] = &[
    "closet",
    "hallway",
    "bedroom",
    "living_room",
    "dining_room",
    "kitchen",
    "family_room",
    "stairwell",
    "basement",
    "garage",
    "whole_house",
];

const BATHROOMS: &[&str] = &["powder_room", "guest_bath", "master_bath"];

const PAINT_GRADES: &[(&str, &str, f64, Option<&str>)] = &[
    ("standard", "Standard acrylic", 0.0, None),
    (
        "premium",
        "Premium low-VOC",
        150.0,
        Some("Upgrade to premium low-VOC paint"),
    ),
    (
        "designer",
        "Designer line",
        400.0,
        Some("Designer-line paint with custom color matching"),
    ),
];

pub fn builtin_trades() -> Vec<Trade> {
    vec![
        painting(),
        flooring(),
        roofing(),
        fencing(),
        bathroom(),
        plumbing(),
        electrical(),
        drywall(),
        concrete(),
    ]
}

fn painting() -> Trade {
    let mut areas = INTERIOR_ROOMS.to_vec();
    areas.extend(["single_story_exterior", "two_story_exterior"]);

    trade(
        "painting",
        "Painting",
        0.25,
        Billing::Flat,
        &areas,
        vec![
            job(
                "single-room",
                "Single Room Painting",
                (450.0, 850.0),
                (1, 2),
                Some("2-year workmanship warranty on all painted surfaces."),
                &["Furniture moving", "Wallpaper removal", "Drywall replacement"],
                &[
                    "Protect floors and furnishings with drop cloths",
                    "Patch minor nail holes and cracks",
                    "Apply two coats of paint to walls",
                    "Clean up and remove debris",
                ],
                vec![
                    toggle("ceiling", "Include ceiling", Some(200.0), Some("Paint ceiling")),
                    toggle(
                        "trim",
                        "Include trim",
                        Some(150.0),
                        Some("Paint trim, doors and baseboards"),
                    ),
                    choice("paint_grade", "Paint grade", PAINT_GRADES),
                ],
            ),
            job(
                "whole-interior",
                "Whole Interior Painting",
                (3500.0, 7500.0),
                (4, 7),
                Some("2-year workmanship warranty on all painted surfaces."),
                &["Furniture moving", "Wallpaper removal", "Lead paint abatement"],
                &[
                    "Protect floors and furnishings with drop cloths",
                    "Patch nail holes and minor drywall damage",
                    "Prime repaired areas",
                    "Apply two coats of paint to all interior walls",
                    "Clean up and remove debris",
                ],
                vec![
                    toggle("ceilings", "Include ceilings", Some(1200.0), Some("Paint all ceilings")),
                    toggle(
                        "trim",
                        "Include trim",
                        Some(900.0),
                        Some("Paint all trim, doors and baseboards"),
                    ),
                    choice("paint_grade", "Paint grade", PAINT_GRADES),
                ],
            ),
            job(
                "exterior",
                "Exterior House Painting",
                (3000.0, 8000.0),
                (3, 6),
                Some("3-year warranty against peeling and blistering."),
                &["Wood rot repair", "Lead paint abatement"],
                &[
                    "Pressure wash exterior surfaces",
                    "Scrape and sand loose paint",
                    "Caulk gaps around windows and doors",
                    "Apply two coats of exterior paint",
                ],
                vec![
                    toggle("shutters", "Paint shutters", Some(350.0), Some("Paint shutters")),
                    toggle("deck_stain", "Stain deck", Some(900.0), Some("Clean and stain deck")),
                ],
            ),
        ],
    )
}

fn flooring() -> Trade {
    trade(
        "flooring",
        "Flooring",
        0.55,
        Billing::SquareFoot,
        &[
            "closet",
            "hallway",
            "bedroom",
            "living_room",
            "dining_room",
            "kitchen",
            "family_room",
            "stairwell",
            "basement",
            "whole_house",
        ],
        vec![
            job(
                "hardwood-install",
                "Hardwood Floor Installation",
                (3000.0, 9000.0),
                (2, 4),
                Some("1-year installation warranty. Manufacturer warranty applies to materials."),
                &["Subfloor replacement", "Furniture moving"],
                &[
                    "Remove and dispose of existing flooring",
                    "Inspect and level subfloor",
                    "Install hardwood flooring",
                    "Install transitions and quarter round",
                ],
                vec![
                    toggle(
                        "stairs",
                        "Include stairs",
                        Some(1500.0),
                        Some("Install hardwood treads and risers on stairs"),
                    ),
                    choice(
                        "finish",
                        "Finish",
                        &[
                            ("prefinished", "Prefinished", 0.0, None),
                            (
                                "site_finished",
                                "Site finished",
                                800.0,
                                Some("Sand and site-finish with three coats of polyurethane"),
                            ),
                        ],
                    ),
                ],
            ),
            job(
                "tile-install",
                "Tile Floor Installation",
                (2500.0, 8000.0),
                (2, 5),
                Some("1-year installation warranty on grout and setting."),
                &["Subfloor replacement", "Heated floor systems"],
                &[
                    "Remove existing flooring",
                    "Install cement backer board",
                    "Set tile with thinset mortar",
                    "Grout and seal",
                ],
                vec![toggle(
                    "heated",
                    "Radiant heat mat",
                    Some(1200.0),
                    Some("Install electric radiant floor heating mat"),
                )],
            ),
            job(
                "lvp-install",
                "Luxury Vinyl Plank Installation",
                (1500.0, 5000.0),
                (1, 3),
                Some("1-year installation warranty."),
                &["Subfloor replacement"],
                &[
                    "Remove existing flooring",
                    "Install underlayment",
                    "Install luxury vinyl plank",
                    "Install transitions",
                ],
                Vec::new(),
            ),
        ],
    )
}

fn roofing() -> Trade {
    trade(
        "roofing",
        "Roofing",
        0.6,
        Billing::SquareFoot,
        &["single_slope_roof", "steep_pitch_roof", "whole_house"],
        vec![
            job(
                "shingle-replacement",
                "Asphalt Shingle Roof Replacement",
                (8000.0, 18000.0),
                (2, 4),
                Some("10-year workmanship warranty."),
                &["Structural decking replacement beyond 2 sheets", "Gutter replacement"],
                &[
                    "Tear off existing roofing to the deck",
                    "Install synthetic underlayment and ice barrier",
                    "Install architectural shingles",
                    "Replace flashing and ridge vents",
                    "Magnetic sweep and debris haul-away",
                ],
                vec![
                    toggle(
                        "gutters",
                        "Replace gutters",
                        Some(1800.0),
                        Some("Install new seamless aluminum gutters"),
                    ),
                    choice(
                        "shingle_grade",
                        "Shingle grade",
                        &[
                            ("architectural", "Architectural", 0.0, None),
                            (
                                "designer",
                                "Designer",
                                2500.0,
                                Some("Upgrade to designer-grade shingles"),
                            ),
                        ],
                    ),
                ],
            ),
            job(
                "roof-repair",
                "Roof Repair",
                (400.0, 1500.0),
                (1, 1),
                Some("1-year warranty on repaired area."),
                &["Full roof replacement"],
                &[
                    "Locate and assess leak source",
                    "Replace damaged shingles and flashing",
                    "Seal penetrations",
                ],
                Vec::new(),
            ),
        ],
    )
}

fn fencing() -> Trade {
    trade(
        "fencing",
        "Fencing",
        0.5,
        Billing::LinearFoot,
        &["front_yard", "back_yard", "full_perimeter"],
        vec![
            job(
                "wood-fence",
                "Wood Privacy Fence",
                (2000.0, 6000.0),
                (2, 3),
                Some("2-year workmanship warranty."),
                &["Survey and property line marking", "Permit fees"],
                &[
                    "Locate utilities before digging",
                    "Set posts in concrete",
                    "Install rails and pickets",
                ],
                vec![toggle(
                    "gate",
                    "Add gate",
                    Some(450.0),
                    Some("Install matching walk gate with hardware"),
                )],
            ),
            job(
                "vinyl-fence",
                "Vinyl Fence",
                (3000.0, 8000.0),
                (2, 3),
                Some("Lifetime manufacturer warranty on vinyl materials."),
                &["Survey and property line marking", "Permit fees"],
                &[
                    "Locate utilities before digging",
                    "Set posts in concrete",
                    "Install vinyl panels and caps",
                ],
                vec![toggle(
                    "gate",
                    "Add gate",
                    Some(600.0),
                    Some("Install matching vinyl gate with hardware"),
                )],
            ),
            job(
                "chain-link",
                "Chain Link Fence",
                (1200.0, 3500.0),
                (1, 2),
                None,
                &["Survey and property line marking"],
                &[
                    "Set terminal and line posts",
                    "Install top rail and fabric",
                ],
                Vec::new(),
            ),
        ],
    )
}

fn bathroom() -> Trade {
    trade(
        "bathroom",
        "Bathroom Remodeling",
        0.45,
        Billing::Flat,
        BATHROOMS,
        vec![
            job(
                "full-remodel",
                "Full Bathroom Remodel",
                (12000.0, 30000.0),
                (10, 20),
                Some("1-year workmanship warranty."),
                &["Mold remediation", "Structural framing changes", "Permit fees"],
                &[
                    "Demolish existing fixtures and finishes",
                    "Rough-in plumbing and electrical updates",
                    "Install waterproofing and tile",
                    "Install vanity, toilet and fixtures",
                    "Final clean and walkthrough",
                ],
                vec![
                    toggle(
                        "heated_floor",
                        "Heated floor",
                        Some(1500.0),
                        Some("Install radiant floor heating"),
                    ),
                    choice(
                        "shower",
                        "Shower type",
                        &[
                            ("tub_combo", "Tub/shower combo", 0.0, None),
                            (
                                "walk_in",
                                "Walk-in tile shower",
                                3500.0,
                                Some("Build curbless walk-in tile shower with glass enclosure"),
                            ),
                        ],
                    ),
                ],
            ),
            job(
                "vanity-replacement",
                "Vanity Replacement",
                (800.0, 2500.0),
                (1, 2),
                Some("1-year workmanship warranty."),
                &["Wall repair behind existing vanity"],
                &[
                    "Remove existing vanity",
                    "Install new vanity and top",
                    "Reconnect supply lines and drain",
                ],
                Vec::new(),
            ),
            job(
                "tub-to-shower",
                "Tub to Shower Conversion",
                (5000.0, 12000.0),
                (3, 5),
                Some("1-year workmanship warranty."),
                &["Mold remediation"],
                &[
                    "Remove existing tub",
                    "Install shower pan and waterproofing",
                    "Tile shower walls",
                    "Install valve, trim and glass door",
                ],
                Vec::new(),
            ),
        ],
    )
}

fn plumbing() -> Trade {
    trade(
        "plumbing",
        "Plumbing",
        0.3,
        Billing::Flat,
        &["kitchen", "powder_room", "guest_bath", "master_bath", "basement", "whole_house"],
        vec![
            job(
                "water-heater",
                "Water Heater Replacement",
                (1200.0, 3000.0),
                (1, 1),
                Some("1-year labor warranty. Manufacturer warranty applies to the unit."),
                &["Gas line extension", "Permit fees"],
                &[
                    "Drain and remove existing water heater",
                    "Install new water heater",
                    "Connect supply, venting and expansion tank",
                    "Test for leaks and proper operation",
                ],
                vec![choice(
                    "heater_type",
                    "Heater type",
                    &[
                        ("tank", "Tank", 0.0, None),
                        (
                            "tankless",
                            "Tankless",
                            1800.0,
                            Some("Install tankless water heater with dedicated venting"),
                        ),
                    ],
                )],
            ),
            job(
                "fixture-replacement",
                "Fixture Replacement",
                (200.0, 600.0),
                (1, 1),
                Some("90-day labor warranty."),
                &["Fixture cost"],
                &["Remove existing fixture", "Install customer-supplied fixture", "Test for leaks"],
                Vec::new(),
            ),
            job(
                "repipe",
                "Whole House Repipe",
                (4000.0, 12000.0),
                (3, 6),
                Some("5-year workmanship warranty."),
                &["Drywall finishing and paint", "Permit fees"],
                &[
                    "Replace supply lines with PEX",
                    "Install new shutoff valves",
                    "Pressure test system",
                ],
                Vec::new(),
            ),
        ],
    )
}

fn electrical() -> Trade {
    trade(
        "electrical",
        "Electrical",
        0.3,
        Billing::Flat,
        &["kitchen", "bedroom", "living_room", "basement", "garage", "whole_house"],
        vec![
            job(
                "panel-upgrade",
                "Electrical Panel Upgrade",
                (1800.0, 4000.0),
                (1, 2),
                Some("2-year workmanship warranty."),
                &["Utility service upgrade fees", "Drywall repair"],
                &[
                    "Coordinate power shutoff with utility",
                    "Replace main panel and breakers",
                    "Label circuits",
                    "Schedule inspection",
                ],
                vec![toggle(
                    "surge",
                    "Whole-home surge protector",
                    Some(350.0),
                    Some("Install whole-home surge protection"),
                )],
            ),
            job(
                "outlet-install",
                "Outlet Installation",
                (150.0, 400.0),
                (1, 1),
                None,
                &["Drywall repair"],
                &["Run new circuit or extend existing", "Install outlet and cover plate"],
                Vec::new(),
            ),
            job(
                "lighting",
                "Lighting Installation",
                (300.0, 1200.0),
                (1, 1),
                Some("1-year workmanship warranty."),
                &["Fixture cost", "Drywall repair"],
                &["Install light fixtures", "Install switches and dimmers"],
                Vec::new(),
            ),
        ],
    )
}

fn drywall() -> Trade {
    trade(
        "drywall",
        "Drywall",
        0.35,
        Billing::SquareFoot,
        &[
            "closet",
            "hallway",
            "bedroom",
            "living_room",
            "kitchen",
            "basement",
            "garage",
            "stairwell",
        ],
        vec![
            job(
                "patch-repair",
                "Drywall Patch and Repair",
                (200.0, 700.0),
                (1, 2),
                None,
                &["Painting"],
                &["Cut out damaged drywall", "Patch, tape and mud", "Sand smooth and prime"],
                Vec::new(),
            ),
            job(
                "new-install",
                "New Drywall Installation",
                (1500.0, 5000.0),
                (2, 5),
                Some("1-year workmanship warranty."),
                &["Painting", "Insulation"],
                &[
                    "Hang drywall sheets",
                    "Tape and finish to level 4",
                    "Sand and prime",
                ],
                vec![choice(
                    "texture",
                    "Wall texture",
                    &[
                        ("smooth", "Smooth", 0.0, None),
                        ("orange_peel", "Orange peel", 300.0, Some("Apply orange peel texture")),
                        ("knockdown", "Knockdown", 450.0, Some("Apply knockdown texture")),
                    ],
                )],
            ),
        ],
    )
}

fn concrete() -> Trade {
    trade(
        "concrete",
        "Concrete",
        0.5,
        Billing::SquareFoot,
        &["driveway", "patio", "front_yard", "back_yard"],
        vec![
            job(
                "driveway",
                "Concrete Driveway",
                (3000.0, 9000.0),
                (2, 4),
                Some("2-year warranty against structural cracking."),
                &["Permit fees", "Removal of buried debris"],
                &[
                    "Remove existing surface",
                    "Grade and compact base",
                    "Install rebar reinforcement",
                    "Pour and finish concrete",
                    "Cut control joints",
                ],
                vec![toggle(
                    "stamped",
                    "Stamped finish",
                    Some(2000.0),
                    Some("Apply stamped decorative finish"),
                )],
            ),
            job(
                "patio",
                "Concrete Patio",
                (2000.0, 6000.0),
                (2, 3),
                Some("2-year warranty against structural cracking."),
                &["Permit fees"],
                &[
                    "Excavate and grade",
                    "Set forms",
                    "Pour and broom finish concrete",
                ],
                Vec::new(),
            ),
        ],
    )
}
