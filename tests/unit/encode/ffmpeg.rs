use super::*;

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps::new(10, 1).unwrap(),
    }
}

#[test]
fn odd_dimensions_are_rejected_before_spawning() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("target/never_written.mp4"));
    let err = sink.begin(cfg(801, 200)).unwrap_err();
    assert!(err.to_string().contains("even"), "{err}");
    let err = sink.begin(cfg(0, 200)).unwrap_err();
    assert!(err.to_string().contains("non-zero"), "{err}");
}

#[test]
fn frame_checks_catch_size_mismatch() {
    let c = cfg(4, 2);
    let ok = FrameRgb {
        width: 4,
        height: 2,
        data: vec![0; 24],
    };
    check_frame(&c, &ok).unwrap();

    let wrong_dims = FrameRgb {
        width: 2,
        height: 2,
        data: vec![0; 12],
    };
    assert!(check_frame(&c, &wrong_dims).is_err());

    let short = FrameRgb {
        width: 4,
        height: 2,
        data: vec![0; 23],
    };
    assert!(check_frame(&c, &short).is_err());
}

#[test]
fn push_before_begin_fails() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("target/never_written.mp4"));
    let frame = FrameRgb {
        width: 2,
        height: 2,
        data: vec![0; 12],
    };
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
    assert!(sink.end().is_err());
}

#[test]
fn ensure_parent_dir_creates_nested_dirs() {
    let root = std::env::temp_dir().join(format!("symbol_insert_dirs_{}", std::process::id()));
    let file = root.join("a/b/video.mp4");
    ensure_parent_dir(&file).unwrap();
    assert!(root.join("a/b").is_dir());
    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn dropping_an_unfinished_sink_reaps_ffmpeg() {
    if !is_ffmpeg_on_path() {
        return;
    }
    let out = std::env::temp_dir().join(format!("symbol_insert_drop_{}.mp4", std::process::id()));
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&out));
    sink.begin(cfg(4, 2)).unwrap();
    let frame = FrameRgb {
        width: 4,
        height: 2,
        data: vec![0; 24],
    };
    sink.push_frame(FrameIndex(0), &frame).unwrap();
    // A rejected frame leaves the encoder running until the sink is dropped.
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());

    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        drop(sink);
        let _ = tx.send(());
    });
    rx.recv_timeout(std::time::Duration::from_secs(10))
        .expect("dropping the sink must not block on ffmpeg");
    let _ = std::fs::remove_file(&out);
}
