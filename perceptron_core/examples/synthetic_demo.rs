//! Self-contained demo on generated cluster data.
//!
//! Trains the perceptron bank on a small linearly separable dataset, so it
//! runs without any external files.

use perceptron_core::data::{generate_clusters, ClusterConfig};
use perceptron_core::{ConsoleReporter, MultiClassPerceptron, TrainerConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔢 One-vs-Rest Perceptron - Synthetic Clusters");
    println!("==============================================\n");

    let class_count = 4;
    let feature_count = 8;

    let config = TrainerConfig {
        class_count,
        feature_count,
        epoch_count: 10,
        learning_rates: vec![0.01, 0.1],
        train_path: String::new(),
        test_path: String::new(),
        output_path: String::new(),
        ..TrainerConfig::default()
    };

    println!("Configuration:");
    println!("  Classes: {}", config.class_count);
    println!("  Features: {}", config.feature_count);
    println!("  Epochs per cycle: {}", config.epoch_count);
    println!("  Learning rates: {:?}", config.learning_rates);
    println!();

    println!("📊 Generating dataset...");
    let train_set = generate_clusters(&ClusterConfig {
        class_count,
        feature_count,
        samples_per_class: 40,
        spread: 0.2,
        seed: 42,
    })?;
    let test_set = generate_clusters(&ClusterConfig {
        class_count,
        feature_count,
        samples_per_class: 10,
        spread: 0.2,
        seed: 123,
    })?;

    println!("  Training samples: {}", train_set.len());
    println!("  Test samples: {}", test_set.len());
    println!();

    let mut classifier = MultiClassPerceptron::new(class_count, feature_count);
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut reporter = ConsoleReporter::new(config.epoch_count);

    println!("🎓 Starting training...\n");
    let result = perceptron_core::run_experiment(
        &mut classifier,
        &train_set,
        &test_set,
        &config,
        &mut rng,
        &mut reporter,
    )?;

    println!("📈 Final Results:");
    for outcome in &result.cycles {
        println!(
            "  LR {:>5}: train {:.2}% | test {:.2}% | {} misclassified of {}",
            outcome.cycle.learning_rate,
            outcome.cycle.final_train_accuracy() * 100.0,
            outcome.cycle.final_test_accuracy() * 100.0,
            outcome.matrix.off_diagonal_total(),
            outcome.matrix.total(),
        );
    }

    println!("\n✅ Done!");

    Ok(())
}
