pub mod github;
pub mod json;
pub mod quiet;
pub mod text;

use std::io::Write;

use crate::reconcile::Reconciliation;

pub trait Formatter {
    fn format_to(&self, result: &Reconciliation, out: &mut dyn Write);

    fn print(&self, result: &Reconciliation) {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.format_to(result, &mut lock);
    }
}

pub fn create_formatter(format: &str) -> Box<dyn Formatter> {
    match format {
        "json" => Box::new(json::JsonFormatter),
        "github" => Box::new(github::GithubFormatter),
        "quiet" => Box::new(quiet::QuietFormatter),
        // "text" and any unknown value
        _ => Box::new(text::TextFormatter),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_formatters_run_without_panic() {
        for name in ["text", "json", "github", "quiet", "anything_else"] {
            let f = create_formatter(name);
            let mut buf = Vec::new();
            f.format_to(&fixtures::clean(), &mut buf);
            f.format_to(&fixtures::dirty(), &mut buf);
            f.format_to(&fixtures::miscounted(), &mut buf);
        }
    }

    #[test]
    fn unknown_format_falls_back_to_text() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        create_formatter("bogus").format_to(&fixtures::dirty(), &mut a);
        create_formatter("text").format_to(&fixtures::dirty(), &mut b);
        assert_eq!(a, b);
    }
}
