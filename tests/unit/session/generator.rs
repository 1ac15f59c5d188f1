use super::*;
use crate::encode::sink::InMemorySink;
use crate::foundation::error::TaskError;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn config() -> GeneratorConfig {
    GeneratorConfig {
        generate_videos: false,
        ..GeneratorConfig::default()
    }
}

#[test]
fn default_generator_renders_28_frames() {
    let g = SymbolInsertGenerator::new(config()).unwrap();
    assert_eq!(g.domain(), "symbol_insert");
    assert_eq!(g.frame_count(), 28);
    assert_eq!(g.schedule().duration_secs(g.fps()), 2.8);

    let mut rng = StdRng::seed_from_u64(7);
    let task = g.build_instance(&mut rng).unwrap();
    let mut sink = InMemorySink::new();
    let artifacts = g.render_frame_sequence(&task, &mut sink).unwrap();
    assert_eq!(sink.frames().len(), 28);
    assert_eq!(artifacts.stats.frames_total, 28);
    assert_ne!(artifacts.first_frame, artifacts.final_frame);
}

#[test]
fn prompt_mentions_the_inserted_symbol() {
    let g = SymbolInsertGenerator::new(config()).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let task = g.build_instance(&mut rng).unwrap();
    let prompt = g.build_prompt(&task);
    assert!(prompt.contains(task.inserted().as_str()));
    assert!(prompt.contains(&format!("position {}", task.insertion_index())));
}

#[test]
fn invalid_config_fails_at_construction() {
    let err = SymbolInsertGenerator::new(GeneratorConfig {
        min_sequence_length: 0,
        ..config()
    })
    .unwrap_err();
    assert!(matches!(err, TaskError::InvalidConfiguration(_)));
}

#[test]
fn explicit_missing_font_is_a_font_error() {
    let err = SymbolInsertGenerator::new(GeneratorConfig {
        symbol_set: crate::task::symbols::SymbolSet::Letters,
        font_path: Some("target/no_such_font.ttf".into()),
        ..config()
    })
    .unwrap_err();
    assert!(matches!(err, TaskError::Font(_)));
}
