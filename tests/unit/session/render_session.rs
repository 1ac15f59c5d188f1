use super::*;
use crate::animation::phase::PhaseFrames;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::Canvas;
use crate::layout::slots::RowGeometry;
use crate::task::instance::TaskInstance;
use crate::task::palette::{ColorAssignment, PALETTE};
use crate::task::symbols::Symbol;

fn session(elision: bool) -> AnimationSession {
    let initial: Vec<Symbol> = ["●", "▲", "■", "★"].iter().map(|g| Symbol::new(*g)).collect();
    let inserted = Symbol::new("◆");
    let colors = ColorAssignment::from_pairs(
        initial
            .iter()
            .chain(std::iter::once(&inserted))
            .cloned()
            .zip(PALETTE),
    )
    .unwrap();
    let task = TaskInstance::new(initial, inserted, 3, colors).unwrap();
    let geometry = RowGeometry::new(
        Canvas {
            width: 400,
            height: 120,
        },
        30,
        10,
    )
    .unwrap();
    let synth = FrameSynthesizer::new(task, geometry, 30.0, None).unwrap();
    AnimationSession::new(
        synth,
        PhaseSchedule::new(PhaseFrames::default()).unwrap(),
        Fps::new(10, 1).unwrap(),
        AnimationSessionOpts {
            static_frame_elision: elision,
        },
    )
}

#[test]
fn render_animation_streams_every_frame_in_order() {
    let s = session(true);
    let mut sink = InMemorySink::new();
    let artifacts = s.render_animation(&mut sink).unwrap();

    assert!(sink.is_finished());
    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height), (400, 120));
    assert_eq!(cfg.fps, Fps::new(10, 1).unwrap());

    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, (0..28).collect::<Vec<_>>());
    assert_eq!(artifacts.first_frame, sink.frames()[0].1);
    assert_eq!(artifacts.final_frame, sink.frames()[27].1);
}

#[test]
fn static_frame_elision_reuses_hold_rasters() {
    let s = session(true);
    let mut sink = InMemorySink::new();
    let stats = s.render_animation(&mut sink).unwrap().stats;
    assert_eq!(stats.frames_total, 28);
    // Holds of 5 frames each rasterize once.
    assert_eq!(stats.frames_elided, 8);
    assert_eq!(stats.frames_rendered, 20);
}

#[test]
fn elision_does_not_change_output_bytes() {
    let mut with = InMemorySink::new();
    let mut without = InMemorySink::new();
    session(true).render_animation(&mut with).unwrap();
    let stats = session(false).render_animation(&mut without).unwrap().stats;
    assert_eq!(stats.frames_elided, 0);
    assert_eq!(stats.frames_rendered, 28);
    assert_eq!(with.into_frames(), without.into_frames());
}

#[test]
fn render_frame_matches_streamed_frames() {
    let s = session(true);
    let mut sink = InMemorySink::new();
    s.render_animation(&mut sink).unwrap();
    for i in [0u64, 5, 12, 13, 22, 23, 27] {
        assert_eq!(s.render_frame(FrameIndex(i)).unwrap(), sink.frames()[i as usize].1);
    }
}

#[test]
fn render_frame_past_end_is_rejected() {
    let err = session(true).render_frame(FrameIndex(28)).unwrap_err();
    assert!(matches!(err, TaskError::InvalidConfiguration(_)));
}
