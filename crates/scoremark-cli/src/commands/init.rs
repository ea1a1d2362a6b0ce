//! The `scoremark init` command.

use anyhow::Result;

const STARTER_CONFIG: &str = r#"# scoremark configuration
# Every threshold the engine uses is named here; adjust to your school's
# rubric. Values shown are the defaults.

data_dir = "./scoremark-data"
year_min = 2000
year_max = 2100
default_grouping = "class-term"

[rubric]
exceeding = 75.0
meeting = 41.0
approaching = 21.0

[alerts]
urgent_below = 40.0
review_below = 60.0
excelling_above = 80.0

[groupings]
class-term = ["subject", "grade", "stream", "term", "year"]
exam = ["subject", "grade", "stream", "term", "examType", "year"]
teacher = ["teacher", "grade", "stream", "subject", "term"]
"#;

pub fn execute() -> Result<()> {
    let path = std::path::Path::new("scoremark.toml");
    if path.exists() {
        println!("scoremark.toml already exists, skipping.");
        return Ok(());
    }
    std::fs::write(path, STARTER_CONFIG)?;
    println!("Created scoremark.toml");
    Ok(())
}
