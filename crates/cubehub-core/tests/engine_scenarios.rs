// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use std::collections::HashSet;

use cubehub_core::{
    glyph_at, select_layer, Activation, Axis, CubeEngine, CubieId, EngineState, FaceLabel,
    GridCoord, Move, MoveKind, RenderPort, StickerRef, Turn, CUBIE_COUNT,
};
use cubehub_dry_tests::{ms, play_script, EngineTestBuilder, RecordingRenderPort, RenderEvent};

fn coords<R: RenderPort>(engine: &CubeEngine<R>) -> Vec<GridCoord> {
    engine.registry().cubies().iter().map(|c| c.coord()).collect()
}

fn outer_layer<R: RenderPort>(engine: &CubeEngine<R>, axis: Axis) -> HashSet<CubieId> {
    select_layer(engine.registry().cubies(), axis, 1)
        .into_iter()
        .collect()
}

fn posed_cubies(render: &RecordingRenderPort) -> HashSet<CubieId> {
    render
        .events()
        .into_iter()
        .filter_map(|e| match e {
            RenderEvent::Transform { cubie, .. } => Some(cubie),
            RenderEvent::Sticker { .. } => None,
        })
        .collect()
}

#[test]
fn idle_timer_restarts_on_each_move_then_unwinds_in_reverse() {
    let (mut engine, render) = EngineTestBuilder::new().build();
    assert!(!engine.logo_shown());
    let r = Move::click(FaceLabel::R);
    let u = Move::click(FaceLabel::U);

    assert_eq!(engine.on_face_activated(FaceLabel::R, ms(0)), Activation::Rotated(r));
    assert_eq!(engine.on_face_activated(FaceLabel::U, ms(3_000)), Activation::Rotated(u));

    // The first move's 5 s deadline has passed, but the second one superseded it.
    engine.advance(ms(7_999));
    assert_eq!(engine.state(), EngineState::Idle);
    assert_eq!(engine.ledger().as_slice(), &[r, u]);

    let u_layer = outer_layer(&engine, Axis::Y);
    render.clear_events();
    engine.advance(ms(8_000));
    assert_eq!(engine.state(), EngineState::Animating(MoveKind::Replay));
    assert_eq!(engine.ledger().as_slice(), &[r], "second move is undone first");
    assert_eq!(posed_cubies(&render), u_layer, "U' turns the top layer");

    let r_layer = outer_layer(&engine, Axis::X);
    render.clear_events();
    engine.advance(ms(8_350));
    assert_eq!(engine.state(), EngineState::Animating(MoveKind::Replay));
    assert!(engine.ledger().is_empty());
    assert_eq!(posed_cubies(&render), r_layer, "R' turns the right layer");
    // Poses land when a rotation starts; the gate only holds back the next one.
    assert!(engine.is_home());
    assert!(!engine.logo_shown());

    engine.advance(ms(8_700));
    assert_eq!(engine.state(), EngineState::Idle);
    assert!(engine.is_home());
    assert!(engine.logo_shown());
    assert_eq!(engine.next_deadline(), None);
    for id in r_layer {
        assert_eq!(
            render.last_transform(id),
            Some(engine.registry().cubie(id).transform().to_array()),
            "{id}"
        );
    }
}

#[test]
fn user_move_just_before_the_deadline_postpones_the_unwind() {
    let (mut engine, _render) = EngineTestBuilder::new().build();
    engine.on_face_activated(FaceLabel::R, ms(0));
    let u_prime = engine
        .apply(FaceLabel::U, Some(Turn::Positive), ms(4_900))
        .unwrap();
    assert_eq!(u_prime, Move::click(FaceLabel::U).inverse());
    assert_eq!(engine.state(), EngineState::Animating(MoveKind::User));

    engine.advance(ms(5_250));
    assert_eq!(engine.state(), EngineState::Idle);
    assert_eq!(engine.ledger().len(), 2);
    assert_eq!(engine.next_deadline(), Some(ms(9_900)));

    let end = engine.run_until_settled(ms(5_250));
    assert_eq!(end, ms(10_600));
    assert!(engine.is_home());
    assert!(engine.ledger().is_empty());
    assert!(!engine.is_auto_solving());
    assert_eq!(engine.next_deadline(), None);
}

#[test]
fn one_big_jump_replays_with_exact_spacing() {
    let (mut engine, render) = EngineTestBuilder::new().build();
    let last = play_script(&mut engine, "F R' U L", ms(0), 500);
    render.clear_events();

    engine.advance(ms(60_000));
    assert!(engine.is_home());
    assert!(engine.logo_shown());
    // Four replays of nine cubies each, no sticker changes besides the logo.
    assert_eq!(render.transform_count(), 36);
    assert_eq!(last, ms(1_500));
}

#[test]
fn second_request_while_animating_changes_nothing() {
    let (mut engine, render) = EngineTestBuilder::new().build();
    engine.on_face_activated(FaceLabel::U, ms(0));
    let before = coords(&engine);
    let pushes = render.transform_count();

    assert_eq!(engine.on_face_activated(FaceLabel::F, ms(100)), Activation::Dropped);
    assert_eq!(coords(&engine), before);
    assert_eq!(render.transform_count(), pushes);
    assert_eq!(engine.ledger().len(), 1);
    // The dropped click still counts as activity.
    assert_eq!(engine.next_deadline(), Some(ms(350)));
    engine.advance(ms(350));
    assert_eq!(engine.next_deadline(), Some(ms(5_100)));
}

#[test]
fn clicks_during_auto_solve_are_dropped() {
    let (mut engine, _render) = EngineTestBuilder::new().build();
    play_script(&mut engine, "R U", ms(0), 400);
    engine.advance(ms(5_400));
    assert!(engine.is_auto_solving());

    assert_eq!(engine.on_face_activated(FaceLabel::L, ms(5_500)), Activation::Dropped);
    let end = engine.run_until_settled(ms(5_500));
    assert_eq!(end, ms(6_100));
    assert!(engine.is_home());
}

#[test]
fn logo_spells_cubehub_on_the_front_layer() {
    let (mut engine, render) = EngineTestBuilder::new().build();
    play_script(&mut engine, "R U' F", ms(0), 400);
    engine.run_until_settled(ms(800));

    let glyphs = render.front_glyphs();
    assert_eq!(glyphs.len(), 7);
    let expected = [
        ((-1, 1), 'C'),
        ((0, 1), 'U'),
        ((1, 1), 'B'),
        ((-1, 0), 'E'),
        ((0, 0), 'H'),
        ((1, 0), 'U'),
        ((-1, -1), 'B'),
    ];
    for ((x, y), glyph) in expected {
        let cubie = engine.registry().at(GridCoord::new(x, y, 1)).unwrap();
        assert_eq!(glyphs.get(&cubie.id()), Some(&glyph), "({x}, {y})");
        let sticker = cubie.sticker(FaceLabel::F);
        assert_eq!(sticker.glyph, Some(glyph));
        assert!(sticker.blink);
    }
    assert_eq!(glyph_at(1, -1), None);
}

#[test]
fn next_interaction_clears_the_logo() {
    let (mut engine, render) = EngineTestBuilder::new().build();
    play_script(&mut engine, "D", ms(0), 400);
    let done = engine.run_until_settled(ms(0));
    assert!(engine.logo_shown());

    let corner = engine.registry().at(GridCoord::new(1, 1, 1)).unwrap().id();
    render.clear_events();
    let outcome = engine.on_sticker_activated(
        StickerRef {
            cubie: corner,
            face: FaceLabel::F,
        },
        done + std::time::Duration::from_millis(10),
    );
    assert_eq!(outcome, Activation::Rotated(Move::click(FaceLabel::F)));
    assert!(!engine.logo_shown());
    assert!(render.front_glyphs().is_empty());
    assert_eq!(render.sticker_count(), CUBIE_COUNT);
    assert!(engine
        .registry()
        .cubies()
        .iter()
        .all(|c| c.sticker(FaceLabel::F).glyph.is_none()));
}

#[test]
fn inert_sticker_is_a_no_op() {
    let (mut engine, render) = EngineTestBuilder::new().build();
    play_script(&mut engine, "B", ms(0), 400);
    engine.run_until_settled(ms(0));
    render.clear_events();

    let core = engine.registry().at(GridCoord::CENTER).unwrap().id();
    let outcome = engine.on_sticker_activated(
        StickerRef {
            cubie: core,
            face: FaceLabel::U,
        },
        ms(20_000),
    );
    assert_eq!(outcome, Activation::Inert);
    assert!(render.events().is_empty());
    assert!(engine.logo_shown(), "an inert click does not count as interaction");
    assert_eq!(engine.next_deadline(), None);
}

#[test]
fn sticker_turns_the_layer_it_was_painted_for() {
    let (mut engine, _render) = EngineTestBuilder::new().build();
    let corner = engine.registry().at(GridCoord::new(1, 1, 1)).unwrap().id();
    engine.on_face_activated(FaceLabel::R, ms(0));
    assert_eq!(engine.registry().cubie(corner).coord(), GridCoord::new(1, 1, -1));

    // Its green sticker now points up, but it still names F.
    let outcome = engine.on_sticker_activated(
        StickerRef {
            cubie: corner,
            face: FaceLabel::F,
        },
        ms(400),
    );
    assert_eq!(outcome, Activation::Rotated(Move::click(FaceLabel::F)));
    assert_eq!(engine.registry().cubie(corner).coord(), GridCoord::new(1, 1, -1));
}

#[test]
fn explicit_user_move_also_clears_the_logo() {
    let (mut engine, render) = EngineTestBuilder::new().build();
    play_script(&mut engine, "L", ms(0), 400);
    let done = engine.run_until_settled(ms(0));
    assert_eq!(done, ms(5_350));
    assert_eq!(render.front_glyphs().len(), 7);

    let mv = engine
        .apply(FaceLabel::F, Some(Turn::Negative), done)
        .unwrap();
    assert_eq!(mv, Move::new(FaceLabel::F, Turn::Negative));
    assert!(!engine.logo_shown());
    assert!(render.front_glyphs().is_empty());
    assert_eq!(engine.ledger().as_slice(), &[mv]);
}
