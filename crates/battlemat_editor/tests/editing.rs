use battlemat_core::{
    export_map, import_map, FillState, Region, RegionIndex, TileIndex, TileMap,
};
use battlemat_editor::{Editor, EditorTool, Hover};
use glam::DVec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const EDIT_TOOLS: [EditorTool; 7] = [
    EditorTool::BoxWall,
    EditorTool::CircleWall,
    EditorTool::DiagWall,
    EditorTool::Door,
    EditorTool::TerrainDifficult,
    EditorTool::TerrainWater,
    EditorTool::Eraser,
];

fn random_gesture(rng: &mut SmallRng) -> (DVec2, DVec2) {
    let start = DVec2::new(rng.gen_range(-8.0..8.0), rng.gen_range(-8.0..8.0));
    let end = if rng.gen_bool(0.4) {
        start
    } else {
        start + DVec2::new(rng.gen_range(-4.0..4.0), rng.gen_range(-4.0..4.0))
    };
    (start, end)
}

/// Whether a region shows some state, counting triangles under a filled square
fn is_set(map: &TileMap, index: RegionIndex) -> bool {
    let tile = map.tile(index.tile);
    if index.region.is_fill() {
        !tile.covered_fill(index.region).unwrap().is_none()
    } else {
        !tile.state(index.region).is_none()
    }
}

#[test]
fn undoing_every_edit_restores_the_empty_map() {
    let mut rng = SmallRng::seed_from_u64(0xba77);
    let mut editor = Editor::new();
    let mut committed = 0;

    for _ in 0..300 {
        let tool = EDIT_TOOLS[rng.gen_range(0..EDIT_TOOLS.len())];
        editor.set_tool(tool);
        let (start, end) = random_gesture(&mut rng);
        if editor.select_tiles(start, end).unwrap() {
            committed += 1;
        }
    }
    assert!(committed > 0, "random gestures should change the map");
    let painted = editor.map().clone();

    let mut undone = 0;
    while editor.undo() {
        undone += 1;
    }
    assert_eq!(undone, committed);
    assert!(editor.map().is_empty());

    while editor.redo() {}
    assert_eq!(editor.map(), &painted);
}

#[test]
fn every_stored_tile_is_non_empty_and_round_trips() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut editor = Editor::new();
    for _ in 0..200 {
        editor.set_tool(EDIT_TOOLS[rng.gen_range(0..EDIT_TOOLS.len())]);
        let (start, end) = random_gesture(&mut rng);
        editor.select_tiles(start, end).unwrap();
    }

    for (index, tile) in editor.map().iter() {
        assert!(!tile.is_empty(), "empty tile stored at {index}");
        let square = tile.fill(Region::Square).unwrap();
        if !square.is_none() {
            assert_eq!(tile.fills().count(), 1, "square and triangles at {index}");
        }
    }

    let json = export_map(editor.map()).unwrap();
    assert_eq!(&import_map(&json).unwrap(), editor.map());
}

#[test]
fn painting_a_different_corner_splits_the_square() {
    let mut editor = Editor::new();
    editor.set_tool(EditorTool::DiagWall);
    // fill the tile by walling two opposite corners
    editor
        .select_tiles(DVec2::new(0.1, 0.1), DVec2::new(0.1, 0.1))
        .unwrap();
    editor
        .select_tiles(DVec2::new(0.9, 0.9), DVec2::new(0.9, 0.9))
        .unwrap();
    let cell = TileIndex::new(0, 0);
    assert_eq!(
        editor.map().tile(cell).fill(Region::Square).unwrap(),
        FillState::Barrier
    );

    // a covered corner reads as filled, so the terrain tool clears it and
    // the opposite half keeps the wall
    editor.set_tool(EditorTool::TerrainWater);
    editor
        .select_tiles(DVec2::new(0.9, 0.1), DVec2::new(0.9, 0.1))
        .unwrap();
    assert_eq!(
        editor.status(),
        Some("Remove terrain from 1 tile."),
        "a covered corner reads as filled"
    );
    let tile = editor.map().tile(cell);
    assert_eq!(tile.fill(Region::Square).unwrap(), FillState::None);
    assert_eq!(tile.fill(Region::LowerLeft).unwrap(), FillState::Barrier);
    assert_eq!(tile.fill(Region::UpperRight).unwrap(), FillState::None);
}

#[test]
fn hover_and_commit_agree() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut editor = Editor::new();
    for _ in 0..100 {
        let tool = EDIT_TOOLS[rng.gen_range(0..EDIT_TOOLS.len())];
        editor.set_tool(tool);
        let (start, end) = random_gesture(&mut rng);
        let start = editor.viewport().to_canvas_space(start);
        let end = editor.viewport().to_canvas_space(end);

        editor.hover(start, end);
        let previewed: Vec<(RegionIndex, Hover)> = editor.hovered().to_vec();
        let before = editor.map().clone();
        let changed = editor.select(start, end).unwrap();

        if tool == EditorTool::Eraser {
            continue;
        }
        let any_change = previewed.iter().any(|(_, hover)| *hover != Hover::None);
        if !changed {
            assert!(!any_change, "{tool} previewed a change it did not make");
        }
        for (index, hover) in previewed {
            match hover {
                Hover::Add => assert!(is_set(editor.map(), index), "{tool} {index} should be set"),
                Hover::Remove => assert!(
                    before.tile(index.tile) != editor.map().tile(index.tile),
                    "{tool} {index} should change"
                ),
                Hover::None => {}
            }
        }
    }
}
