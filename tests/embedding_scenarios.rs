use textvec::embedding::{SkipGramConfig, SkipGramTrainer};
use textvec::error::{Result, TextvecError};

fn tokenize_all(texts: &[&str]) -> Vec<Vec<String>> {
    texts
        .iter()
        .map(|text| text.split(' ').map(str::to_string).collect())
        .collect()
}

fn headline_corpus() -> Vec<Vec<String>> {
    tokenize_all(&[
        "brexit trade deal reached with brussels",
        "brexit election results announced today",
        "markets react to brexit trade talks",
        "election polls tighten before vote",
        "trade talks continue despite deadlock",
    ])
}

fn trainer(seed: u64) -> SkipGramTrainer {
    SkipGramTrainer::new(SkipGramConfig {
        window: 3,
        dimension: 24,
        epochs: 3,
        seed: Some(seed),
        ..SkipGramConfig::default()
    })
    .unwrap()
}

#[test]
fn training_covers_the_full_surviving_vocabulary() -> Result<()> {
    let corpus = headline_corpus();
    let table = trainer(11).train(&corpus)?;

    let mut expected: Vec<&str> = corpus
        .iter()
        .flat_map(|doc| doc.iter().map(String::as_str))
        .collect();
    expected.sort_unstable();
    expected.dedup();

    assert_eq!(table.len(), expected.len());
    for token in expected {
        assert!(table.contains(token), "missing token {token}");
        assert_eq!(table.vector(token)?.len(), 24);
    }
    Ok(())
}

#[test]
fn seeded_training_is_bitwise_reproducible() -> Result<()> {
    let corpus = headline_corpus();
    let table_a = trainer(42).train(&corpus)?;
    let table_b = trainer(42).train(&corpus)?;

    for token in table_a.tokens() {
        assert_eq!(table_a.vector(token)?, table_b.vector(token)?);
    }
    assert_eq!(
        table_a.most_similar("brexit", 5)?,
        table_b.most_similar("brexit", 5)?
    );
    Ok(())
}

#[test]
fn similarity_is_a_cosine() -> Result<()> {
    let table = trainer(5).train(&headline_corpus())?;

    for a in ["brexit", "trade", "election"] {
        for b in ["brexit", "trade", "election"] {
            let score = table.similarity(a, b)?;
            assert!((-1.0..=1.0).contains(&score), "cosine out of range: {score}");
            if a == b {
                assert!((score - 1.0).abs() < 1e-5);
            }
        }
    }
    assert!((table.similarity("brexit", "trade")? - table.similarity("trade", "brexit")?).abs() < 1e-6);
    Ok(())
}

#[test]
fn most_similar_never_returns_the_query() -> Result<()> {
    let table = trainer(3).train(&headline_corpus())?;
    let expected_len = 5.min(table.len() - 1);

    let neighbours = table.most_similar("brexit", 5)?;
    assert_eq!(neighbours.len(), expected_len);
    assert!(neighbours.iter().all(|(token, _)| token != "brexit"));

    // Scores come back best-first.
    for pair in neighbours.windows(2) {
        assert!(pair[0].1 >= pair[1].1);
    }
    Ok(())
}

#[test]
fn most_similar_on_tiny_vocabulary_returns_everything_else() -> Result<()> {
    let table = trainer(8).train(&tokenize_all(&["alpha beta", "alpha beta"]))?;

    let neighbours = table.most_similar("alpha", 5)?;
    assert_eq!(neighbours.len(), 1);
    assert_eq!(neighbours[0].0, "beta");
    Ok(())
}

#[test]
fn unknown_tokens_fail_deterministically() {
    let table = trainer(2).train(&headline_corpus()).unwrap();

    for _ in 0..3 {
        assert!(matches!(
            table.vector("zeppelin"),
            Err(TextvecError::UnknownToken(_))
        ));
        assert!(matches!(
            table.similarity("brexit", "zeppelin"),
            Err(TextvecError::UnknownToken(_))
        ));
        assert!(matches!(
            table.most_similar("zeppelin", 3),
            Err(TextvecError::UnknownToken(_))
        ));
    }
}

#[test]
fn min_count_filtered_tokens_are_absent_not_placeholders() -> Result<()> {
    let corpus = tokenize_all(&[
        "brexit deal brexit deal",
        "brexit vote brexit rare",
    ]);
    let trainer = SkipGramTrainer::new(SkipGramConfig {
        window: 2,
        dimension: 12,
        min_count: 2,
        epochs: 2,
        seed: Some(6),
        ..SkipGramConfig::default()
    })?;
    let table = trainer.train(&corpus)?;

    // Surviving tokens never raise UnknownToken.
    for token in ["brexit", "deal"] {
        assert!(table.vector(token).is_ok());
    }
    // Filtered tokens are simply absent.
    for token in ["vote", "rare"] {
        assert!(matches!(
            table.vector(token),
            Err(TextvecError::UnknownToken(_))
        ));
    }
    assert_eq!(table.len(), 2);
    Ok(())
}

#[test]
fn empty_corpus_fails_with_empty_vocabulary() {
    let result = trainer(1).train(&[]);
    assert!(matches!(result, Err(TextvecError::EmptyVocabulary)));

    let result = trainer(1).train(&[Vec::new(), Vec::new()]);
    assert!(matches!(result, Err(TextvecError::EmptyVocabulary)));
}

#[test]
fn tokens_sharing_contexts_drift_together() -> Result<()> {
    // "cat" and "dog" appear in interchangeable contexts; "economy" never
    // shares a window with them. After training, the shared-context pair
    // should look more alike than the unrelated pair.
    let corpus = tokenize_all(&[
        "the cat sat on the mat",
        "the dog sat on the mat",
        "the cat chased the ball",
        "the dog chased the ball",
        "the cat ate the food",
        "the dog ate the food",
        "inflation hit the economy hard",
        "economy slows as inflation rises",
    ]);
    let trainer = SkipGramTrainer::new(SkipGramConfig {
        window: 2,
        dimension: 32,
        epochs: 30,
        learning_rate: 0.05,
        seed: Some(13),
        ..SkipGramConfig::default()
    })?;
    let table = trainer.train(&corpus)?;

    let related = table.similarity("cat", "dog")?;
    let unrelated = table.similarity("cat", "economy")?;
    assert!(
        related > unrelated,
        "expected cat/dog ({related}) to beat cat/economy ({unrelated})"
    );
    Ok(())
}
