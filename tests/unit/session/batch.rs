use super::*;

#[test]
fn derived_seeds_are_stable_and_distinct() {
    let seeds: Vec<u64> = (0..64).map(|i| derive_seed(42, i)).collect();
    assert_eq!(seeds, (0..64).map(|i| derive_seed(42, i)).collect::<Vec<_>>());
    let unique: std::collections::BTreeSet<_> = seeds.iter().collect();
    assert_eq!(unique.len(), seeds.len());
    assert_ne!(derive_seed(42, 0), derive_seed(43, 0));
}

#[test]
fn zero_samples_writes_nothing() {
    let out = std::env::temp_dir().join(format!("symbol_insert_batch_{}", std::process::id()));
    let summaries = generate_dataset(&GeneratorConfig {
        num_samples: 0,
        random_seed: Some(1),
        output_dir: out.clone(),
        generate_videos: false,
        ..GeneratorConfig::default()
    })
    .unwrap();
    assert!(summaries.is_empty());
    assert!(!out.exists());
}
