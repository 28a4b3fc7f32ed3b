use solace_core::{classify, is_crisis};

pub fn run(text: &str) -> anyhow::Result<()> {
    println!("{}", describe(text));
    Ok(())
}

fn describe(text: &str) -> String {
    let category = classify(text);
    let crisis = if is_crisis(text) {
        "yes (the model would not be called)"
    } else {
        "no"
    };
    format!(
        "Emotion: {} (level {})\nCrisis phrase: {}",
        category,
        category.ordinal(),
        crisis
    )
}
