use eisenhower_core::sanitize_for_model;

pub fn run(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", sanitize_for_model(text));
    Ok(())
}
