/// Text written to the output target in place of a plot when the input could not be read.
pub fn render_error_report(context: &str, message: &str) -> String {
    format!("Error in input file:\n{context} {message}")
}
