//! Default starting world: three ports on a triangle of lanes.
//!
//! A small but complete world used by the demo binary and the end-to-end
//! tests. Anything loading a custom world should hand the game an already
//! built [`WorldMap`] and item table of its own instead.

use tradewinds_types::{GoodName, PlaceName};

use crate::error::WorldError;
use crate::events::EventProfile;
use crate::map::WorldMap;
use crate::market::{Item, ItemClass};

/// Local profile: general famine, even odds, one day at a time.
fn famine() -> EventProfile {
    EventProfile::new("famine", 50).with_description("There is a general famine")
}

/// Local profile: civil war, even odds, one day at a time.
fn civil_war() -> EventProfile {
    EventProfile::new("civil_war", 50)
        .with_description("The port is in a state of civil war")
}

/// Create the default starting world and its item table.
///
/// Three ports -- anchorage, meridian, kepler -- joined in a triangle, each
/// with famine and civil-war profiles; one long-running global blockade
/// event pinned to the anchorage--meridian lane; and a small item table
/// (guns, butter, fuel) with event-driven price offsets.
///
/// # Errors
///
/// Returns [`WorldError`] if map construction fails (should not happen with
/// the hard-coded data).
pub fn default_world() -> Result<(WorldMap, Vec<Item>), WorldError> {
    let anchorage = PlaceName::new("anchorage");
    let meridian = PlaceName::new("meridian");
    let kepler = PlaceName::new("kepler");

    let mut world = WorldMap::new();
    for name in [&anchorage, &meridian, &kepler] {
        world.add_place(
            crate::place::Place::new(name.clone())
                .with_events(vec![famine(), civil_war()]),
        )?;
    }
    world.add_lane(&anchorage, &meridian, 10)?;
    world.add_lane(&meridian, &kepler, 22)?;
    world.add_lane(&anchorage, &kepler, 10)?;

    world.add_global_profile(
        EventProfile::new("blockade", 10)
            .with_description("The anchorage-meridian lane is blockaded")
            .with_duration(50)
            .with_places(vec![anchorage.clone(), meridian.clone()])
            .with_lanes(vec![(anchorage, meridian)]),
    );

    let items = vec![
        Item::new("guns", 75).with_dynamic(Box::new(|_, events: &[String]| {
            let mut offset = 0;
            if events.iter().any(|e| e == "civil_war") {
                offset += 20;
            }
            if events.iter().any(|e| e == "blockade") {
                offset += 20;
            }
            offset
        })),
        Item::new("butter", 10).with_dynamic(Box::new(|day, events: &[String]| {
            let mut offset = 0;
            if day % 100 > 90 {
                offset += 10;
            }
            if events.iter().any(|e| e == "famine") {
                offset += 10;
            }
            offset
        })),
        Item::new(GoodName::new(tradewinds_types::FUEL_GOOD), 5)
            .with_class(ItemClass::Fuel),
    ];

    Ok((world, items))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn default_world_is_a_triangle() {
        let (world, _) = match default_world() {
            Ok(pair) => pair,
            Err(e) => panic!("default world failed to build: {e}"),
        };
        let names: Vec<&str> =
            world.place_names().map(PlaceName::as_str).collect();
        assert_eq!(names, vec!["anchorage", "kepler", "meridian"]);
        for place in ["anchorage", "kepler", "meridian"] {
            assert_eq!(world.neighbors(&PlaceName::new(place)).len(), 2);
        }
    }

    #[test]
    fn default_world_items_cover_fuel() {
        let (_, items) = match default_world() {
            Ok(pair) => pair,
            Err(e) => panic!("default world failed to build: {e}"),
        };
        assert!(items.iter().any(|i| i.class == ItemClass::Fuel));
    }

    #[test]
    fn default_world_refreshes_without_panic() {
        let (mut world, _) = match default_world() {
            Ok(pair) => pair,
            Err(e) => panic!("default world failed to build: {e}"),
        };
        let mut rng = SmallRng::seed_from_u64(11);
        for day in 1..=200 {
            world.refresh_day(day, &mut rng);
        }
    }
}
