use super::*;
use crate::config::GeneratorConfig;
use crate::encode::sink::SinkConfig;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::TaskError;

/// Accepts a few frames, then fails like a broken encoder pipe.
struct FailingSink {
    accepted: u64,
}

impl FrameSink for FailingSink {
    fn begin(&mut self, _cfg: SinkConfig) -> TaskResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, _idx: FrameIndex, _frame: &FrameRgb) -> TaskResult<()> {
        if self.accepted == 3 {
            return Err(TaskError::encode("broken pipe"));
        }
        self.accepted += 1;
        Ok(())
    }

    fn end(&mut self) -> TaskResult<()> {
        Ok(())
    }
}

#[test]
fn task_ids_are_zero_padded() {
    assert_eq!(task_id("symbol_insert", 7), "symbol_insert_00007");
    assert_eq!(task_id("symbol_insert", 123_456), "symbol_insert_123456");
}

#[test]
fn sample_dir_nests_under_domain_task() {
    let dir = sample_dir(Path::new("data/questions"), "symbol_insert", "symbol_insert_00000");
    assert_eq!(
        dir,
        PathBuf::from("data/questions/symbol_insert_task/symbol_insert_00000")
    );
}

#[test]
fn write_sample_produces_every_file() {
    let out = std::env::temp_dir().join(format!("symbol_insert_output_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&out);
    let generator = SymbolInsertGenerator::new(GeneratorConfig {
        output_dir: out.clone(),
        generate_videos: false,
        ..GeneratorConfig::default()
    })
    .unwrap();

    let summary = write_sample(&generator, 2, 99, false).unwrap();
    assert_eq!(summary.task_id, "symbol_insert_00002");
    assert!(!summary.video_written);
    for name in [FIRST_FRAME_FILE, FINAL_FRAME_FILE, PROMPT_FILE, METADATA_FILE] {
        assert!(summary.dir.join(name).is_file(), "missing {name}");
    }
    assert!(!summary.dir.join(VIDEO_FILE).exists());

    let first = image::open(summary.dir.join(FIRST_FRAME_FILE)).unwrap().to_rgb8();
    assert_eq!(first.dimensions(), (800, 200));

    let meta: serde_json::Value =
        serde_json::from_slice(&std::fs::read(summary.dir.join(METADATA_FILE)).unwrap()).unwrap();
    assert_eq!(meta["frame_count"], 28);
    assert_eq!(meta["seed"], 99);
    assert_eq!(meta["final_frame_xxh3"], summary.final_frame_xxh3.as_str());
    assert!(meta["video"].is_null());

    let prompt = std::fs::read_to_string(summary.dir.join(PROMPT_FILE)).unwrap();
    assert!(prompt.starts_with("Insert symbol "));

    let _ = std::fs::remove_dir_all(&out);
}

#[test]
fn failed_encode_leaves_no_sample_dir() {
    let out = std::env::temp_dir().join(format!("symbol_insert_failed_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&out);
    let generator = SymbolInsertGenerator::new(GeneratorConfig {
        output_dir: out.clone(),
        generate_videos: false,
        ..GeneratorConfig::default()
    })
    .unwrap();

    let err = write_sample_with_sink(
        &generator,
        0,
        5,
        Box::new(FailingSink { accepted: 0 }),
        true,
    )
    .unwrap_err();
    assert!(matches!(err, TaskError::Encode(_)), "{err}");
    assert!(!sample_dir(&out, "symbol_insert", "symbol_insert_00000").exists());

    let _ = std::fs::remove_dir_all(&out);
}
