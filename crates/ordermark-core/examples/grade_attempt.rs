//! Minimal programmatic grading example.
//!
//! Grades one shuffled attempt under every strategy, then prints the
//! per-item breakdown for the positional-distance strategy.
//!
//! ```bash
//! cargo run --example grade_attempt
//! ```

use ordermark_core::analysis::{grade_details, summarise};
use ordermark_core::error::GradeError;
use ordermark_core::model::{CorrectOrder, GradingStrategy, Submission};

fn main() -> Result<(), GradeError> {
    let correct = CorrectOrder::new([
        "Modular",
        "Object",
        "Oriented",
        "Dynamic",
        "Learning",
        "Environment",
    ])?;
    let attempt = Submission::new([
        "Environment",
        "Object",
        "Oriented",
        "Dynamic",
        "Learning",
        "Modular",
    ]);

    println!("attempt: {}\n", summarise(&attempt));

    for strategy in GradingStrategy::ALL {
        let details = grade_details(&correct, &attempt, strategy)?;
        println!("{:<32} {:.3}", strategy.to_string(), details.fraction);
    }

    let details = grade_details(&correct, &attempt, GradingStrategy::RelativeToCorrect)?;
    println!(
        "\n{} of {} items exactly placed; per-item credit:",
        details.correctly_placed,
        attempt.len()
    );
    for credit in &details.item_credits {
        println!(
            "  {:<12} slot {} (belongs at {}): {}/{}",
            credit.item, credit.position, credit.correct_rank, credit.score, credit.max_score
        );
    }

    Ok(())
}
