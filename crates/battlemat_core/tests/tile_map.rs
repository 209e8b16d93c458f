use battlemat_core::{
    export_map, import_map, load_map, save_map, EdgeState, FillState, Region, RegionIndex,
    RegionState, TileMap,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn random_state(rng: &mut SmallRng, region: Region) -> RegionState {
    if region.is_edge() {
        EdgeState::ALL[rng.gen_range(0..EdgeState::ALL.len())].into()
    } else {
        FillState::ALL[rng.gen_range(0..FillState::ALL.len())].into()
    }
}

fn random_map(rng: &mut SmallRng, edits: usize) -> TileMap {
    let mut map = TileMap::new();
    for _ in 0..edits {
        let region = Region::ALL[rng.gen_range(0..Region::ALL.len())];
        let index = RegionIndex::new(rng.gen_range(-5..5), rng.gen_range(-5..5), region);
        let state = random_state(rng, region);
        map.apply(index, state).unwrap();
    }
    map
}

#[test]
fn clearing_every_region_empties_the_map() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut map = random_map(&mut rng, 500);
    assert!(!map.is_empty());

    let cells: Vec<_> = map.iter().map(|(index, _)| index).collect();
    for cell in cells {
        for region in Region::ALL {
            map.apply(RegionIndex::at(cell, region), RegionState::none(region.class()))
                .unwrap();
        }
    }
    assert!(map.is_empty(), "cleared tiles must not be stored");
}

#[test]
fn stored_tiles_are_never_empty() {
    let mut rng = SmallRng::seed_from_u64(2);
    let map = random_map(&mut rng, 1000);
    assert!(map.iter().all(|(_, tile)| !tile.is_empty()));
}

#[test]
fn documents_round_trip_every_state() {
    let mut rng = SmallRng::seed_from_u64(3);
    for _ in 0..20 {
        let map = random_map(&mut rng, 150);
        let json = export_map(&map).unwrap();
        assert_eq!(import_map(&json).unwrap(), map);
    }
}

#[test]
fn map_files_round_trip() {
    let mut rng = SmallRng::seed_from_u64(4);
    let map = random_map(&mut rng, 300);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dungeon.json");
    save_map(&map, &path).unwrap();
    assert_eq!(load_map(&path).unwrap(), map);
}
